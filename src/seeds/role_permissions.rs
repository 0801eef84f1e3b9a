use super::{permissions, roles};
use crate::error::Result;
use sqlx::PgPool;
use tracing::info;

/// Grants by role and permission name. Resolved against the id sets owned by
/// the roles and permissions seeders, so the fixture cannot drift out of
/// sync with them.
fn grants() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (
            "admin",
            permissions::rows().iter().map(|p| p.name).collect(),
        ),
        (
            "hr_manager",
            vec![
                "candidates.view",
                "candidates.create",
                "candidates.update",
                "candidates.delete",
                "job_postings.view",
                "job_postings.create",
                "job_postings.update",
                "job_postings.delete",
                "applications.view",
                "applications.update",
                "departments.view",
                "departments.manage",
                "settings.view",
                "reports.view",
            ],
        ),
        (
            "recruiter",
            vec![
                "candidates.view",
                "candidates.create",
                "candidates.update",
                "job_postings.view",
                "applications.view",
                "applications.update",
                "departments.view",
            ],
        ),
        (
            "viewer",
            vec![
                "candidates.view",
                "job_postings.view",
                "applications.view",
                "departments.view",
                "settings.view",
                "reports.view",
            ],
        ),
    ]
}

pub fn rows() -> Vec<(i64, i64)> {
    let role_ids: std::collections::HashMap<_, _> =
        roles::rows().into_iter().map(|r| (r.name, r.id)).collect();
    let permission_ids: std::collections::HashMap<_, _> = permissions::rows()
        .into_iter()
        .map(|p| (p.name, p.id))
        .collect();

    let mut pairs = Vec::new();
    for (role, perms) in grants() {
        let role_id = role_ids[role];
        for perm in perms {
            pairs.push((role_id, permission_ids[perm]));
        }
    }
    pairs
}

pub async fn run(pool: &PgPool) -> Result<()> {
    sqlx::query("DELETE FROM role_permissions")
        .execute(pool)
        .await?;
    for (role_id, permission_id) in rows() {
        sqlx::query("INSERT INTO role_permissions (role_id, permission_id) VALUES ($1, $2)")
            .bind(role_id)
            .bind(permission_id)
            .execute(pool)
            .await?;
    }
    info!(count = rows().len(), "seeded role_permissions");
    Ok(())
}
