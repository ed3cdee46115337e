//! Boundary traits for the player store and the result sink.
//!
//! The engine reads eligible players through [`PlayerStore`] and returns the
//! accepted lineups to its caller, which typically persists them through
//! [`ResultSink`]. Each side owns its own transaction discipline; the engine
//! itself never writes anything.

use crate::engine::Lineup;
use crate::error::Result;
use crate::player::Player;
use crate::types::{Role, Team};

/// Read-only source of eligible players.
pub trait PlayerStore {
    /// Fetch the active players of `role` fielded by `team`.
    ///
    /// Implementations must only return players cleared to play; benched
    /// players never enter a role pool. A failure aborts the whole run
    /// before any pattern is processed.
    fn fetch_players(&self, team: Team, role: Role) -> Result<Vec<Player>>;
}

/// Destination for the accepted lineups of one engine run.
pub trait ResultSink {
    /// Replace every previously stored lineup with `lineups`.
    ///
    /// The replacement must be all-or-nothing: a failed call leaves the
    /// previous contents untouched. Returns the number of stored records.
    fn replace_all(&mut self, lineups: &[Lineup]) -> Result<usize>;
}
