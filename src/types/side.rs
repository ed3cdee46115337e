//! Match side (home or away).

use crate::error::FantasyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which half of a match a team (and its players) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Home, Side::Away];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Home => "Home",
            Side::Away => "Away",
        }
    }

    pub fn opposite(&self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Side {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HOME" => Ok(Side::Home),
            "AWAY" => Ok(Side::Away),
            _ => Err(FantasyError::InvalidSide {
                value: s.to_string(),
            }),
        }
    }
}
