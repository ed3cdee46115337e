//! Player nationalities.

use crate::error::FantasyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// National side a player represents.
///
/// Carried as player metadata; the lineup engine never filters on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    Afghanistan,
    Australia,
    Bangladesh,
    England,
    India,
    Pakistan,
    NewZealand,
    SouthAfrica,
    SriLanka,
    WestIndies,
}

impl Country {
    pub const ALL: [Country; 10] = [
        Country::Afghanistan,
        Country::Australia,
        Country::Bangladesh,
        Country::England,
        Country::India,
        Country::Pakistan,
        Country::NewZealand,
        Country::SouthAfrica,
        Country::SriLanka,
        Country::WestIndies,
    ];

    /// Three-letter code used for storage.
    pub fn code(&self) -> &'static str {
        match self {
            Country::Afghanistan => "AFG",
            Country::Australia => "AUS",
            Country::Bangladesh => "BAN",
            Country::England => "ENG",
            Country::India => "IND",
            Country::Pakistan => "PAK",
            Country::NewZealand => "NZ",
            Country::SouthAfrica => "SA",
            Country::SriLanka => "SL",
            Country::WestIndies => "WI",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Country::Afghanistan => "Afghanistan",
            Country::Australia => "Australia",
            Country::Bangladesh => "Bangladesh",
            Country::England => "England",
            Country::India => "India",
            Country::Pakistan => "Pakistan",
            Country::NewZealand => "New Zealand",
            Country::SouthAfrica => "South Africa",
            Country::SriLanka => "Sri Lanka",
            Country::WestIndies => "West Indies",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Country {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_uppercase();
        Country::ALL
            .iter()
            .find(|country| {
                country.code() == wanted || country.full_name().to_uppercase() == wanted
            })
            .copied()
            .ok_or_else(|| FantasyError::InvalidCountry {
                value: s.to_string(),
            })
    }
}
