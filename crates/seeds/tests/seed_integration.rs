//! Integration tests for seeding against Postgres.
//!
//! These tests verify that the seeder writes the built-in robots in order,
//! stamps equal timestamps, appends on every run, and stops at the first
//! rejected insert.
//!
//! To run these tests, you need a PostgreSQL database and the
//! DATABASE_URL environment variable set.
//!
//! Run with: `DATABASE_URL=postgres://... cargo nextest run -p seeds seed_integration`
//!
//! Note: Each test seeds its own scratch copy of the robots table and drops
//! it afterwards, so they can safely run against a development database.

use robots::database::Database;
use robots::models::Robot;
use seeds::prelude::*;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::env;

/// Get database pool, skipping tests if DATABASE_URL is not set.
async fn get_test_pool() -> Option<PgPool> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    let pool = match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            return None;
        }
    };

    Database::new(pool.clone())
        .migrate()
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// Creates an empty table shaped like `robots` and returns its handle.
async fn scratch_table(pool: &PgPool, test_id: &str) -> PgTable {
    let name = format!("robots_test_{}_{}", test_id, std::process::id());

    sqlx::query(&format!("DROP TABLE IF EXISTS \"{name}\""))
        .execute(pool)
        .await
        .expect("Failed to drop stale scratch table");
    sqlx::query(&format!("CREATE TABLE \"{name}\" (LIKE robots INCLUDING ALL)"))
        .execute(pool)
        .await
        .expect("Failed to create scratch table");

    PgTable::new(pool.clone(), &name).expect("valid table name")
}

async fn fetch_rows(table: &PgTable) -> Vec<Robot> {
    sqlx::query_as(&format!(
        "SELECT id, name, year, type, created_at, updated_at FROM \"{}\" ORDER BY id",
        table.name()
    ))
    .fetch_all(table.pool())
    .await
    .expect("Failed to read seeded rows")
}

async fn cleanup(table: &PgTable) {
    let _ = sqlx::query(&format!("DROP TABLE IF EXISTS \"{}\"", table.name()))
        .execute(table.pool())
        .await;
}

#[tokio::test]
async fn test_seeds_default_robots() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let table = scratch_table(&pool, "default").await;

    Seeder::system()
        .run(&table, &default_robots())
        .await
        .expect("seeding should succeed");

    let rows = fetch_rows(&table).await;
    let seeded: Vec<(&str, &str, &str)> = rows
        .iter()
        .map(|r| (r.name.as_str(), r.year.as_str(), r.kind.as_str()))
        .collect();
    assert_eq!(
        seeded,
        vec![
            ("R2D2", "2016", "droid"),
            ("B2-RP", "1999", "mechanical"),
            ("E-XD", "2000", "droid"),
        ]
    );
    for row in &rows {
        assert_eq!(row.created_at, row.updated_at, "timestamps differ for {}", row.name);
    }

    cleanup(&table).await;
}

#[tokio::test]
async fn test_rerun_appends_rows() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let table = scratch_table(&pool, "rerun").await;
    let seeder = Seeder::system();

    seeder.run(&table, &default_robots()).await.unwrap();
    seeder.run(&table, &default_robots()).await.unwrap();

    let rows = fetch_rows(&table).await;
    assert_eq!(rows.len(), 6);
    assert_eq!(rows.iter().filter(|r| r.name == "R2D2").count(), 2);

    table.truncate().await.unwrap();
    assert!(fetch_rows(&table).await.is_empty());

    cleanup(&table).await;
}

#[tokio::test]
async fn test_stops_at_rejected_insert() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let table = scratch_table(&pool, "reject").await;

    // An empty name violates the table's CHECK constraint.
    let records = vec![
        Record::new("R2D2", 2016, "droid"),
        Record::new("", 1999, "mechanical"),
        Record::new("E-XD", 2000, "droid"),
    ];

    let err = Seeder::system().run(&table, &records).await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::Insert {
            index: 2,
            source: StorageError::Database(_),
            ..
        }
    ));
    let rows = fetch_rows(&table).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "R2D2");

    cleanup(&table).await;
}

#[tokio::test]
async fn test_empty_input_inserts_nothing() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let table = scratch_table(&pool, "empty").await;

    seeds::run(&table, &[], &SystemClock).await.unwrap();

    assert!(fetch_rows(&table).await.is_empty());

    cleanup(&table).await;
}
