//! Player role categories.

use crate::error::FantasyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role category a player occupies in a lineup.
///
/// Lineup slots always follow this order: wicket keepers first, then
/// batsmen, all rounders and bowlers.
///
/// # Examples
///
/// ```rust
/// use fantasy_xi::Role;
///
/// assert_eq!(Role::WicketKeeper.to_string(), "WK");
/// assert_eq!("bowler".parse::<Role>().unwrap(), Role::Bowler);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    WicketKeeper,
    Batsman,
    AllRounder,
    Bowler,
}

impl Role {
    /// All role categories, in lineup slot order.
    pub const ALL: [Role; 4] = [
        Role::WicketKeeper,
        Role::Batsman,
        Role::AllRounder,
        Role::Bowler,
    ];

    /// Short code used for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::WicketKeeper => "WK",
            Role::Batsman => "BAT",
            Role::AllRounder => "AR",
            Role::Bowler => "BOW",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "WK" | "WICKET KEEPER" | "WICKET-KEEPER" | "KEEPER" => Ok(Role::WicketKeeper),
            "BAT" | "BATSMAN" | "BATSMEN" => Ok(Role::Batsman),
            "AR" | "ALL ROUNDER" | "ALL-ROUNDER" => Ok(Role::AllRounder),
            "BOW" | "BOWLER" => Ok(Role::Bowler),
            _ => Err(FantasyError::InvalidRole {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_order() {
        assert_eq!(
            Role::ALL,
            [
                Role::WicketKeeper,
                Role::Batsman,
                Role::AllRounder,
                Role::Bowler
            ]
        );
    }

    #[test]
    fn string_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn parses_long_forms() {
        assert_eq!("wicket keeper".parse::<Role>().unwrap(), Role::WicketKeeper);
        assert_eq!("All-Rounder".parse::<Role>().unwrap(), Role::AllRounder);
        assert_eq!("BATSMEN".parse::<Role>().unwrap(), Role::Batsman);
        assert!("UMPIRE".parse::<Role>().is_err());
    }
}
