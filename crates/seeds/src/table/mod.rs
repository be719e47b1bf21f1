//! Storage destinations for seeded rows.
//!
//! The seeder only sees [`TableHandle`]: it has no schema knowledge and
//! hands each [`Row`] over unchanged. [`PgTable`] writes to Postgres;
//! [`MemoryTable`] keeps rows in process for tests.

mod insert_builder;
mod memory;
mod postgres;

pub use insert_builder::{InsertBuilder, validate_identifier};
pub use memory::MemoryTable;
pub use postgres::PgTable;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),
    #[error("Insert rejected: {0}")]
    Rejected(String),
}

/// A single column value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Value {
    Text(String),
    Integer(i64),
    Timestamp(OffsetDateTime),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<OffsetDateTime> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<OffsetDateTime> for Value {
    fn from(t: OffsetDateTime) -> Self {
        Value::Timestamp(t)
    }
}

/// Ordered column-name to value mapping for one insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column, or replaces its value if already present.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        match self.columns.iter_mut().find(|(c, _)| *c == column) {
            Some((_, existing)) => *existing = value,
            None => self.columns.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(c, _)| c.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.columns.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// A writable table.
#[async_trait]
pub trait TableHandle: Send + Sync {
    /// Table name, used in logs and error reports.
    fn name(&self) -> &str;

    /// Writes one row. Returns once the row is committed or rejected.
    async fn insert(&self, row: &Row) -> Result<(), StorageError>;
}
