//! Database seeding.
//!
//! The [`Seeder`] writes a fixed list of records into any
//! [`TableHandle`](crate::table::TableHandle), one insert at a time, with
//! progress reporting.

mod seeder;

pub use seeder::{SeedError, Seeder};
