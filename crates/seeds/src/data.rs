//! Built-in seed datasets.

use robots::ROBOTS_TABLE;
use robots::models::builtin_kinds::{DROID, MECHANICAL};

use crate::record::Record;

/// A fixed dataset paired with the table it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSet {
    pub table: &'static str,
    pub records: Vec<Record>,
}

/// The three robots every fresh install starts with.
pub fn default_robots() -> Vec<Record> {
    vec![
        Record::new("R2D2", 2016, DROID),
        Record::new("B2-RP", 1999, MECHANICAL),
        Record::new("E-XD", 2000, DROID),
    ]
}

/// Every built-in dataset, in the order they should be applied.
pub fn seed_sets() -> Vec<SeedSet> {
    vec![SeedSet {
        table: ROBOTS_TABLE,
        records: default_robots(),
    }]
}
