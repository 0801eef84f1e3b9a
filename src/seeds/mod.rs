pub mod analytics;
pub mod candidates;
pub mod departments;
pub mod lookups;
pub mod permissions;
pub mod role_permissions;
pub mod roles;
pub mod settings;
pub mod users;

use crate::error::Result;
use sqlx::PgPool;
use tracing::info;

/// Runs every fixture loader in dependency order. Each loader clears its
/// table and re-inserts the fixed row set, so the whole pass is re-runnable.
pub async fn run_all(pool: &PgPool) -> Result<()> {
    roles::run(pool).await?;
    permissions::run(pool).await?;
    role_permissions::run(pool).await?;
    lookups::run(pool).await?;
    // departments.created_by restricts user deletes, so departments must be
    // emptied before the users loader clears its table.
    departments::clear(pool).await?;
    users::run(pool).await?;
    candidates::run(pool).await?;
    departments::run(pool).await?;
    settings::run(pool).await?;
    analytics::run(pool).await?;
    info!("all seeders finished");
    Ok(())
}
