//! Player availability status.

use crate::error::FantasyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a player is in the playing eleven or on the bench.
///
/// Only `Playing` players enter role pools; benched players are invisible to
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerStatus {
    Playing,
    #[default]
    Bench,
}

impl PlayerStatus {
    pub const ALL: [PlayerStatus; 2] = [PlayerStatus::Playing, PlayerStatus::Bench];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Playing => "Playing",
            PlayerStatus::Bench => "Bench",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlayerStatus {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PLAYING" => Ok(PlayerStatus::Playing),
            "BENCH" => Ok(PlayerStatus::Bench),
            _ => Err(FantasyError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bench() {
        assert_eq!(PlayerStatus::default(), PlayerStatus::Bench);
    }

    #[test]
    fn string_round_trip() {
        for status in PlayerStatus::ALL {
            assert_eq!(status.as_str().parse::<PlayerStatus>().unwrap(), status);
        }
    }
}
