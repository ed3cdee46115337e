//! SQLite persistence for rosters and generated lineups.
//!
//! This module provides a thin abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: row wrappers
//! - `schema`: database connection and schema management
//! - `queries`: roster and lineup operations
//!
//! [`FantasyDatabase`] doubles as the engine's player store and result sink.

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use models::*;
pub use schema::FantasyDatabase;
