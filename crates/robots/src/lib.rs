//! Domain types and storage access for the robots catalogue.

pub mod database;
pub mod errors;
pub mod models;

/// Name of the table holding robot rows.
pub const ROBOTS_TABLE: &str = "robots";

/// Embedded schema migrations for the robots table.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
