use crate::error::Result;
use sqlx::PgPool;
use tracing::info;

pub struct RoleRow {
    pub id: i64,
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
}

pub fn rows() -> Vec<RoleRow> {
    vec![
        RoleRow {
            id: 1,
            name: "admin",
            display_name: "Administrator",
            description: "Full access to every part of the system",
        },
        RoleRow {
            id: 2,
            name: "hr_manager",
            display_name: "HR Manager",
            description: "Manages departments, postings and the hiring pipeline",
        },
        RoleRow {
            id: 3,
            name: "recruiter",
            display_name: "Recruiter",
            description: "Works candidates and applications day to day",
        },
        RoleRow {
            id: 4,
            name: "viewer",
            display_name: "Viewer",
            description: "Read-only access for stakeholders",
        },
    ]
}

pub async fn run(pool: &PgPool) -> Result<()> {
    sqlx::query("DELETE FROM roles").execute(pool).await?;
    for row in rows() {
        sqlx::query(
            "INSERT INTO roles (id, name, display_name, description) VALUES ($1, $2, $3, $4)",
        )
        .bind(row.id)
        .bind(row.name)
        .bind(row.display_name)
        .bind(row.description)
        .execute(pool)
        .await?;
    }
    info!(count = rows().len(), "seeded roles");
    Ok(())
}
