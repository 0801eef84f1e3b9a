use crate::error::Result;
use sqlx::PgPool;
use tracing::info;

pub struct UserRow {
    pub id: i64,
    pub name: &'static str,
    pub email: &'static str,
    pub status: &'static str,
}

pub fn rows() -> Vec<UserRow> {
    vec![
        UserRow {
            id: 1,
            name: "System Administrator",
            email: "admin@example.com",
            status: "active",
        },
        UserRow {
            id: 2,
            name: "Hana Rahimi",
            email: "hana.rahimi@example.com",
            status: "active",
        },
        UserRow {
            id: 3,
            name: "Omar Farouk",
            email: "omar.farouk@example.com",
            status: "inactive",
        },
    ]
}

pub async fn run(pool: &PgPool) -> Result<()> {
    sqlx::query("DELETE FROM users").execute(pool).await?;
    for row in rows() {
        sqlx::query("INSERT INTO users (id, name, email, status) VALUES ($1, $2, $3, $4)")
            .bind(row.id)
            .bind(row.name)
            .bind(row.email)
            .bind(row.status)
            .execute(pool)
            .await?;
    }
    info!(count = rows().len(), "seeded users");
    Ok(())
}
