use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// A robot row as stored in the `robots` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Robot {
    pub id: i64,
    pub name: String,
    /// Calendar year, stored as text.
    pub year: String,
    /// Free-form category label, stored in the `type` column.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Category labels used by the built-in robot dataset.
///
/// The `type` column is free-form; these are conventions, not an enumeration.
pub mod builtin_kinds {
    pub const DROID: &str = "droid";
    pub const MECHANICAL: &str = "mechanical";
}
