//! Row wrappers for the storage layer.

use crate::engine::Lineup;
use crate::player::Player;
use serde::{Deserialize, Serialize};

/// A roster player with its row id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPlayer {
    pub id: i64,
    pub player: Player,
}

/// A persisted lineup with its row id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredLineup {
    pub id: i64,
    pub lineup: Lineup,
}
