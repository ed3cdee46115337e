//! Game limit configuration.
//!
//! Limits are loaded once by the embedding application (typically from a
//! `limits.json` file) and threaded into the engine as a plain parameter;
//! nothing in this crate reads them from ambient state.

use crate::error::{FantasyError, Result};
use crate::types::{Role, Side};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Inclusive bound on a count of players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, n: usize) -> bool {
        self.min <= n && n <= self.max
    }
}

/// Per-role and per-side selection limits for one game variant.
///
/// # Examples
///
/// ```rust
/// use fantasy_xi::{GameLimits, Role};
///
/// let limits = GameLimits::default();
/// assert_eq!(limits.lineup_size, 11);
/// assert_eq!(limits.role_bounds(Role::Batsman).max, 6);
/// assert!(limits.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameLimits {
    pub wicket_keepers: CountRange,
    pub batsmen: CountRange,
    pub all_rounders: CountRange,
    pub bowlers: CountRange,
    pub home_players: CountRange,
    pub away_players: CountRange,
    pub lineup_size: usize,
    pub max_credits: f64,
}

impl Default for GameLimits {
    fn default() -> Self {
        Self {
            wicket_keepers: CountRange::new(1, 4),
            batsmen: CountRange::new(3, 6),
            all_rounders: CountRange::new(1, 4),
            bowlers: CountRange::new(3, 6),
            home_players: CountRange::new(4, 7),
            away_players: CountRange::new(4, 7),
            lineup_size: 11,
            max_credits: 100.0,
        }
    }
}

impl GameLimits {
    /// Load limits from a JSON file.
    ///
    /// Fields missing from the file keep their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let limits = serde_json::from_str(&raw)?;
        Ok(limits)
    }

    pub fn role_bounds(&self, role: Role) -> CountRange {
        match role {
            Role::WicketKeeper => self.wicket_keepers,
            Role::Batsman => self.batsmen,
            Role::AllRounder => self.all_rounders,
            Role::Bowler => self.bowlers,
        }
    }

    pub fn side_bounds(&self, side: Side) -> CountRange {
        match side {
            Side::Home => self.home_players,
            Side::Away => self.away_players,
        }
    }

    /// Check the limits for internal consistency.
    ///
    /// The engine calls this before loading any pool, so inconsistent limits
    /// fail before enumeration starts.
    pub fn validate(&self) -> Result<()> {
        if self.lineup_size == 0 {
            return Err(invalid("lineup size must be at least 1"));
        }
        if self.max_credits < 0.0 {
            return Err(invalid("max credits must be non-negative"));
        }
        for role in Role::ALL {
            let bounds = self.role_bounds(role);
            if bounds.min > bounds.max {
                return Err(invalid(format!(
                    "{role} minimum {} exceeds maximum {}",
                    bounds.min, bounds.max
                )));
            }
        }
        for side in Side::ALL {
            let bounds = self.side_bounds(side);
            if bounds.min > bounds.max {
                return Err(invalid(format!(
                    "{side} minimum {} exceeds maximum {}",
                    bounds.min, bounds.max
                )));
            }
        }
        let role_min_sum: usize = Role::ALL.iter().map(|r| self.role_bounds(*r).min).sum();
        if role_min_sum > self.lineup_size {
            return Err(invalid(format!(
                "role minimums sum to {role_min_sum}, more than the {} lineup slots",
                self.lineup_size
            )));
        }
        let side_min_sum: usize = Side::ALL.iter().map(|s| self.side_bounds(*s).min).sum();
        if side_min_sum > self.lineup_size {
            return Err(invalid(format!(
                "side minimums sum to {side_min_sum}, more than the {} lineup slots",
                self.lineup_size
            )));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> FantasyError {
    FantasyError::InvalidLimits {
        message: message.into(),
    }
}
