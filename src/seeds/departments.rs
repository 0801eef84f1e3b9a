use crate::error::Result;
use sqlx::PgPool;
use tracing::info;

pub struct DepartmentRow {
    pub id: i64,
    pub name: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub created_by: i64,
}

pub fn rows() -> Vec<DepartmentRow> {
    vec![
        DepartmentRow {
            id: 1,
            name: "Engineering",
            description: "Product and platform engineering",
            status: "active",
            created_by: 1,
        },
        DepartmentRow {
            id: 2,
            name: "People Operations",
            description: "Recruitment, onboarding and HR administration",
            status: "active",
            created_by: 2,
        },
        DepartmentRow {
            id: 3,
            name: "Sales",
            description: "Commercial team",
            status: "inactive",
            created_by: 1,
        },
    ]
}

pub async fn clear(pool: &PgPool) -> Result<()> {
    sqlx::query("DELETE FROM departments").execute(pool).await?;
    Ok(())
}

pub async fn run(pool: &PgPool) -> Result<()> {
    clear(pool).await?;
    for row in rows() {
        sqlx::query(
            "INSERT INTO departments (id, name, description, status, created_by)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(row.id)
        .bind(row.name)
        .bind(row.description)
        .bind(row.status)
        .bind(row.created_by)
        .execute(pool)
        .await?;
    }
    info!(count = rows().len(), "seeded departments");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::users;
    use std::collections::HashSet;

    #[test]
    fn creators_reference_seeded_users() {
        let user_ids: HashSet<_> = users::rows().into_iter().map(|u| u.id).collect();
        for row in rows() {
            assert!(user_ids.contains(&row.created_by), "{}", row.name);
        }
    }

    #[test]
    fn statuses_are_valid() {
        for row in rows() {
            assert!(matches!(row.status, "active" | "inactive"), "{}", row.name);
        }
    }
}
