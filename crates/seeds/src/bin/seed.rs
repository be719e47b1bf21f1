//! Default seed script - migrates and fills every built-in dataset
//!
//! Run with:
//! ```
//! cargo run -p seeds --bin seed
//! ```
//!
//! Set `SEED_FRESH=1` to truncate tables first and `SEED_RUNS=n` to apply
//! each dataset `n` times.

use robots::database::Database;
use seeds::config::SeedConfig;
use seeds::data::seed_sets;
use seeds::db::Seeder;
use seeds::table::PgTable;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    let db = Database::new(pool.clone());
    db.migrate().await?;

    let seeder = Seeder::system().with_progress_every(config.progress_every);

    for set in seed_sets() {
        let table = PgTable::new(pool.clone(), set.table)?;

        if config.fresh {
            table.truncate().await?;
        }

        for run in 1..=config.runs {
            tracing::info!("Applying {} dataset (run {}/{})", set.table, run, config.runs);
            seeder.run_set(&table, &set).await?;
        }
    }

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Robots: {}", db.count_robots().await?);
    for robot in db.list_robots().await? {
        tracing::debug!("  #{} {} ({}, {})", robot.id, robot.name, robot.year, robot.kind);
    }

    Ok(())
}
