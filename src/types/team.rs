//! Franchise teams.

use crate::error::FantasyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The franchises a match can field.
///
/// Displays as the short abbreviation ("MI"); parses from either the
/// abbreviation or the full franchise name, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    CSK,
    DC,
    GT,
    KKR,
    LSG,
    MI,
    PBKS,
    RR,
    RCB,
    SRH,
}

impl Team {
    pub const ALL: [Team; 10] = [
        Team::CSK,
        Team::DC,
        Team::GT,
        Team::KKR,
        Team::LSG,
        Team::MI,
        Team::PBKS,
        Team::RR,
        Team::RCB,
        Team::SRH,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::CSK => "CSK",
            Team::DC => "DC",
            Team::GT => "GT",
            Team::KKR => "KKR",
            Team::LSG => "LSG",
            Team::MI => "MI",
            Team::PBKS => "PBKS",
            Team::RR => "RR",
            Team::RCB => "RCB",
            Team::SRH => "SRH",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Team::CSK => "Chennai Super Kings",
            Team::DC => "Delhi Capitals",
            Team::GT => "Gujarat Titans",
            Team::KKR => "Kolkata Knight Riders",
            Team::LSG => "Lucknow Super Giants",
            Team::MI => "Mumbai Indians",
            Team::PBKS => "Punjab Kings",
            Team::RR => "Rajasthan Royals",
            Team::RCB => "Royal Challengers Bangalore",
            Team::SRH => "Sun Risers Hyderabad",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Team {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_uppercase();
        Team::ALL
            .iter()
            .find(|team| {
                team.as_str() == wanted || team.full_name().to_uppercase() == wanted
            })
            .copied()
            .ok_or_else(|| FantasyError::InvalidTeam {
                value: s.to_string(),
            })
    }
}
