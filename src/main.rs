use clap::{Parser, Subcommand};
use recruitment_db::{
    config::init_config,
    database::pool::create_pool,
    schema::migrator::Migrator,
    seeds,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "recruitment-db",
    about = "Schema migrations and seed data for the recruitment backend",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply all pending migrations
    Migrate,
    /// Revert the most recently applied migrations
    Rollback {
        /// Number of migrations to revert
        #[arg(long, default_value_t = 1)]
        steps: usize,
    },
    /// Show which migrations have been applied
    Status,
    /// Load the fixture row sets (replaces existing rows)
    Seed,
    /// Roll everything back, re-apply all migrations, then seed
    Fresh,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt::init();
    init_config()?;

    let pool = create_pool().await?;
    let migrator = Migrator::new(pool.clone());

    match cli.command {
        Command::Migrate => {
            let applied = migrator.run().await?;
            info!(applied, "migrations up to date");
        }
        Command::Rollback { steps } => {
            let reverted = migrator.rollback(steps).await?;
            info!(reverted, "rollback finished");
        }
        Command::Status => {
            for status in migrator.status().await? {
                let marker = if status.applied { "applied" } else { "pending" };
                println!("{:>14}  {:<28} {}", status.version, status.table, marker);
            }
        }
        Command::Seed => {
            seeds::run_all(&pool).await?;
        }
        Command::Fresh => {
            let reverted = migrator.rollback(usize::MAX).await?;
            info!(reverted, "dropped existing tables");
            let applied = migrator.run().await?;
            info!(applied, "schema recreated");
            seeds::run_all(&pool).await?;
        }
    }

    Ok(())
}
