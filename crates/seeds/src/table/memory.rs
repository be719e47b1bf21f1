use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::{Row, StorageError, TableHandle};

/// In-process table that appends rows to a vector.
///
/// Can be configured to reject the k-th insert (1-based) to simulate a
/// storage failure.
#[derive(Debug, Default)]
pub struct MemoryTable {
    name: String,
    rows: Mutex<Vec<Row>>,
    attempts: AtomicUsize,
    fail_on: Option<usize>,
}

impl MemoryTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Rejects insert number `k` (counting from 1 across the table's lifetime).
    pub fn failing_on(mut self, k: usize) -> Self {
        self.fail_on = Some(k);
        self
    }

    /// Snapshot of committed rows in insertion order.
    pub fn rows(&self) -> Vec<Row> {
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of inserts attempted, including rejected ones.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TableHandle for MemoryTable {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert(&self, row: &Row) -> Result<(), StorageError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on == Some(attempt) {
            return Err(StorageError::Rejected(format!(
                "{} refused insert {attempt}",
                self.name
            )));
        }

        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(row.clone());
        Ok(())
    }
}
