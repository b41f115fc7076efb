//! SeaORM entities for the moodboard schema.
//!
//! Entities mirror the tables created by the `migration` crate and are shared by the
//! server, the migrations' consumers, and the `test-utils` crate.

pub mod prelude;

pub mod image;
pub mod moodboard;
