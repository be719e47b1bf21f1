//! Sequential, fail-fast record seeding.

use thiserror::Error;
use tracing::{debug, error, info};

use crate::clock::{Clock, SystemClock};
use crate::data::SeedSet;
use crate::record::Record;
use crate::table::{StorageError, TableHandle};

#[derive(Debug, Error)]
pub enum SeedError {
    /// Record `index` (1-based) could not be written; earlier rows stay committed.
    #[error("insert {index} into {table} failed: {source}")]
    Insert {
        index: usize,
        table: String,
        #[source]
        source: StorageError,
    },
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Writes records into a table, stamping each with the clock.
pub struct Seeder<C = SystemClock> {
    clock: C,
    progress_every: usize,
}

impl Seeder<SystemClock> {
    /// Creates a seeder on the UTC wall clock.
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> Seeder<C> {
    /// Creates a new seeder with the given clock.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            progress_every: 50,
        }
    }

    /// Sets how many inserts pass between progress log lines.
    pub fn with_progress_every(mut self, n: usize) -> Self {
        self.progress_every = n.max(1);
        self
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Inserts `records` in order.
    ///
    /// The clock is read once per record and that instant is written to both
    /// `created_at` and `updated_at`. Stops at the first failed insert without
    /// touching later records.
    pub async fn run<T>(&self, table: &T, records: &[Record]) -> Result<(), SeedError>
    where
        T: TableHandle + ?Sized,
    {
        info!("Seeding {} {}...", records.len(), table.name());

        for (i, record) in records.iter().enumerate() {
            let index = i + 1;
            let row = record.to_row(self.clock.now());

            if let Err(source) = table.insert(&row).await {
                error!("Insert {} of {} into {} failed: {}", index, records.len(), table.name(), source);
                return Err(SeedError::Insert {
                    index,
                    table: table.name().to_string(),
                    source,
                });
            }
            debug!("Inserted {} into {}", record, table.name());

            if index % self.progress_every == 0 {
                info!("  Seeded {}/{} {}", index, records.len(), table.name());
            }
        }

        info!("Seeded {} {}", records.len(), table.name());
        Ok(())
    }

    /// Seeds a named dataset.
    pub async fn run_set<T>(&self, table: &T, set: &SeedSet) -> Result<(), SeedError>
    where
        T: TableHandle + ?Sized,
    {
        self.run(table, &set.records).await
    }
}
