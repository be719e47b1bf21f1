//! Seed record descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::table::{Row, Value};

/// One row of seed data, without its timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    /// Calendar year. Stored as text, no range check.
    pub year: String,
    /// Free-form category label written to the `type` column.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Record {
    /// Builds a record. `year` accepts anything displayable, so both
    /// `2016` and `"2016"` produce the same stored text.
    pub fn new(name: impl Into<String>, year: impl fmt::Display, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            year: year.to_string(),
            kind: kind.into(),
        }
    }

    /// Expands the record into a full row stamped with `now`.
    ///
    /// `created_at` and `updated_at` always carry the same instant.
    pub fn to_row(&self, now: OffsetDateTime) -> Row {
        Row::new()
            .with("name", self.name.as_str())
            .with("year", self.year.as_str())
            .with("type", self.kind.as_str())
            .with("created_at", now)
            .with("updated_at", now)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.year, self.kind)
    }
}
