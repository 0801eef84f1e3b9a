use crate::error::Result;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::info;

pub struct AnalyticsRow {
    pub id: i64,
    pub month: NaiveDate,
    pub total_applications: i32,
    pub total_hires: i32,
    pub top_department_id: Option<i64>,
    pub top_category_id: Option<i64>,
}

fn month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("valid fixture month")
}

pub fn rows() -> Vec<AnalyticsRow> {
    vec![
        AnalyticsRow {
            id: 1,
            month: month(2024, 1),
            total_applications: 48,
            total_hires: 3,
            top_department_id: Some(1),
            top_category_id: Some(1),
        },
        AnalyticsRow {
            id: 2,
            month: month(2024, 2),
            total_applications: 61,
            total_hires: 5,
            top_department_id: Some(1),
            top_category_id: Some(1),
        },
        AnalyticsRow {
            id: 3,
            month: month(2024, 3),
            total_applications: 39,
            total_hires: 2,
            top_department_id: Some(2),
            top_category_id: Some(5),
        },
        AnalyticsRow {
            id: 4,
            month: month(2024, 4),
            total_applications: 55,
            total_hires: 4,
            top_department_id: Some(1),
            top_category_id: Some(2),
        },
        AnalyticsRow {
            id: 5,
            month: month(2024, 5),
            total_applications: 27,
            total_hires: 1,
            top_department_id: None,
            top_category_id: None,
        },
    ]
}

pub async fn run(pool: &PgPool) -> Result<()> {
    sqlx::query("DELETE FROM monthly_analytics")
        .execute(pool)
        .await?;
    for row in rows() {
        sqlx::query(
            "INSERT INTO monthly_analytics
                (id, month, total_applications, total_hires, top_department_id, top_category_id)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(row.id)
        .bind(row.month)
        .bind(row.total_applications)
        .bind(row.total_hires)
        .bind(row.top_department_id)
        .bind(row.top_category_id)
        .execute(pool)
        .await?;
    }
    info!(count = rows().len(), "seeded monthly_analytics");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::{departments, lookups};
    use std::collections::HashSet;

    #[test]
    fn months_are_unique() {
        let fixture = rows();
        let months: HashSet<_> = fixture.iter().map(|r| r.month).collect();
        assert_eq!(months.len(), fixture.len());
    }

    #[test]
    fn top_ids_reference_other_fixtures() {
        let department_ids: HashSet<_> =
            departments::rows().into_iter().map(|d| d.id).collect();
        let category_ids: HashSet<_> = lookups::job_categories()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        for row in rows() {
            if let Some(id) = row.top_department_id {
                assert!(department_ids.contains(&id));
            }
            if let Some(id) = row.top_category_id {
                assert!(category_ids.contains(&id));
            }
        }
    }

    #[test]
    fn hires_never_exceed_applications() {
        for row in rows() {
            assert!(row.total_hires <= row.total_applications);
        }
    }
}
