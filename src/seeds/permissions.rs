use crate::error::Result;
use sqlx::PgPool;
use tracing::info;

pub struct PermissionRow {
    pub id: i64,
    pub name: &'static str,
    pub description: &'static str,
}

pub fn rows() -> Vec<PermissionRow> {
    let names = [
        ("candidates.view", "List and inspect candidates"),
        ("candidates.create", "Register new candidates"),
        ("candidates.update", "Edit candidate profiles"),
        ("candidates.delete", "Soft-delete candidates"),
        ("job_postings.view", "List and inspect job postings"),
        ("job_postings.create", "Publish new job postings"),
        ("job_postings.update", "Edit job postings"),
        ("job_postings.delete", "Close and remove job postings"),
        ("applications.view", "List and inspect applications"),
        ("applications.update", "Move applications through the pipeline"),
        ("departments.view", "List departments"),
        ("departments.manage", "Create, edit and deactivate departments"),
        ("settings.view", "Read system settings"),
        ("settings.manage", "Change system settings"),
        ("reports.view", "View analytics and reports"),
    ];
    names
        .into_iter()
        .enumerate()
        .map(|(i, (name, description))| PermissionRow {
            id: (i + 1) as i64,
            name,
            description,
        })
        .collect()
}

pub async fn run(pool: &PgPool) -> Result<()> {
    sqlx::query("DELETE FROM permissions").execute(pool).await?;
    for row in rows() {
        sqlx::query("INSERT INTO permissions (id, name, description) VALUES ($1, $2, $3)")
            .bind(row.id)
            .bind(row.name)
            .bind(row.description)
            .execute(pool)
            .await?;
    }
    info!(count = rows().len(), "seeded permissions");
    Ok(())
}
