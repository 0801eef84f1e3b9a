use super::tables::migrations;
use super::TableDef;
use crate::error::{Error, Result};
use sqlx::{PgPool, Row};
use tracing::info;

/// One step in the ordered schema sequence: creating (or on rollback,
/// dropping) a single table.
#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub table: TableDef,
}

impl Migration {
    pub fn new(version: i64, table: TableDef) -> Self {
        Self { version, table }
    }
}

#[derive(Debug, Clone)]
pub struct MigrationStatus {
    pub version: i64,
    pub table: &'static str,
    pub applied: bool,
}

pub struct Migrator {
    pool: PgPool,
    migrations: Vec<Migration>,
}

impl Migrator {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            migrations: migrations(),
        }
    }

    async fn ensure_tracking_table(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version BIGINT PRIMARY KEY,
                applied_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn applied_versions(&self) -> Result<Vec<i64>> {
        let rows = sqlx::query("SELECT version FROM schema_migrations ORDER BY version")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(|row| row.get("version")).collect())
    }

    /// Applies every pending migration in ascending version order. Each
    /// migration runs in its own transaction together with its tracking row.
    pub async fn run(&self) -> Result<usize> {
        self.ensure_tracking_table().await?;
        let applied = self.applied_versions().await?;

        let mut count = 0;
        for migration in &self.migrations {
            if applied.contains(&migration.version) {
                continue;
            }
            let mut tx = self.pool.begin().await?;
            sqlx::query(&migration.table.create_sql())
                .execute(&mut *tx)
                .await?;
            sqlx::query("INSERT INTO schema_migrations (version) VALUES ($1)")
                .bind(migration.version)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;
            info!(
                version = migration.version,
                table = migration.table.name,
                "applied migration"
            );
            count += 1;
        }
        Ok(count)
    }

    /// Reverts the most recently applied `steps` migrations, newest first.
    pub async fn rollback(&self, steps: usize) -> Result<usize> {
        self.ensure_tracking_table().await?;
        let applied = self.applied_versions().await?;

        let mut count = 0;
        for version in applied.into_iter().rev().take(steps) {
            let migration = self
                .migrations
                .iter()
                .find(|m| m.version == version)
                .ok_or_else(|| {
                    Error::Migration(format!("applied version {} is not known to this build", version))
                })?;
            let mut tx = self.pool.begin().await?;
            sqlx::query(&migration.table.drop_sql())
                .execute(&mut *tx)
                .await?;
            sqlx::query("DELETE FROM schema_migrations WHERE version = $1")
                .bind(version)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;
            info!(
                version = migration.version,
                table = migration.table.name,
                "rolled back migration"
            );
            count += 1;
        }
        Ok(count)
    }

    pub async fn status(&self) -> Result<Vec<MigrationStatus>> {
        self.ensure_tracking_table().await?;
        let applied = self.applied_versions().await?;
        Ok(self
            .migrations
            .iter()
            .map(|m| MigrationStatus {
                version: m.version,
                table: m.table.name,
                applied: applied.contains(&m.version),
            })
            .collect())
    }
}
