//! Fixed dataset seeding for the robots catalogue.
//!
//! A [`Seeder`](db::Seeder) writes an ordered list of [`Record`]s into a
//! [`TableHandle`](table::TableHandle), stamping each row's `created_at` and
//! `updated_at` from a single clock read. Inserts run one at a time in input
//! order and the first failure aborts the run.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seeds::prelude::*;
//!
//! let table = PgTable::new(pool.clone(), "robots")?;
//! Seeder::system().run(&table, &default_robots()).await?;
//! ```

pub mod clock;
pub mod config;
pub mod data;
pub mod db;
pub mod record;
pub mod table;

pub use record::Record;

use clock::Clock;
use db::{SeedError, Seeder};
use table::TableHandle;

/// Inserts `records` into `table` in order, reading `clock` once per record.
///
/// Shorthand for `Seeder::new(clock).run(table, records)`.
pub async fn run<T, C>(table: &T, records: &[Record], clock: &C) -> Result<(), SeedError>
where
    T: TableHandle + ?Sized,
    C: Clock + ?Sized,
{
    Seeder::new(clock).run(table, records).await
}

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::config::SeedConfig;
    pub use crate::data::{SeedSet, default_robots, seed_sets};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::record::Record;
    pub use crate::table::{MemoryTable, PgTable, Row, StorageError, TableHandle, Value};
}
