use crate::error::Result;
use sqlx::PgPool;
use tracing::info;

pub fn job_posting_statuses() -> Vec<(i64, &'static str)> {
    vec![(1, "draft"), (2, "published"), (3, "closed"), (4, "archived")]
}

pub fn job_categories() -> Vec<(i64, &'static str)> {
    vec![
        (1, "Engineering"),
        (2, "Sales"),
        (3, "Marketing"),
        (4, "Finance"),
        (5, "Human Resources"),
        (6, "Operations"),
    ]
}

pub fn job_types() -> Vec<(i64, &'static str)> {
    vec![
        (1, "full_time"),
        (2, "part_time"),
        (3, "contract"),
        (4, "internship"),
    ]
}

pub fn application_statuses() -> Vec<(i64, &'static str)> {
    vec![
        (1, "received"),
        (2, "screening"),
        (3, "interview"),
        (4, "offer"),
        (5, "hired"),
        (6, "rejected"),
    ]
}

async fn reload(pool: &PgPool, table: &str, rows: Vec<(i64, &'static str)>) -> Result<()> {
    sqlx::query(&format!("DELETE FROM {}", table))
        .execute(pool)
        .await?;
    for (id, name) in rows {
        sqlx::query(&format!("INSERT INTO {} (id, name) VALUES ($1, $2)", table))
            .bind(id)
            .bind(name)
            .execute(pool)
            .await?;
    }
    Ok(())
}

pub async fn run(pool: &PgPool) -> Result<()> {
    reload(pool, "job_posting_statuses", job_posting_statuses()).await?;
    reload(pool, "job_categories", job_categories()).await?;
    reload(pool, "job_types", job_types()).await?;
    reload(pool, "application_statuses", application_statuses()).await?;
    info!("seeded lookup tables");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_names_are_unique() {
        for rows in [
            job_posting_statuses(),
            job_categories(),
            job_types(),
            application_statuses(),
        ] {
            let names: HashSet<_> = rows.iter().map(|(_, name)| name).collect();
            assert_eq!(names.len(), rows.len());
        }
    }
}
