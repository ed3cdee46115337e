//! Role count patterns.

use crate::config::GameLimits;
use crate::matchup::PoolSizes;
use crate::types::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-role pick counts for one lineup shape.
///
/// A pattern fixes how many players each role category contributes; the four
/// counts always add up to the configured lineup size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RolePattern {
    pub wicket_keepers: usize,
    pub batsmen: usize,
    pub all_rounders: usize,
    pub bowlers: usize,
}

impl RolePattern {
    pub fn count(&self, role: Role) -> usize {
        match role {
            Role::WicketKeeper => self.wicket_keepers,
            Role::Batsman => self.batsmen,
            Role::AllRounder => self.all_rounders,
            Role::Bowler => self.bowlers,
        }
    }

    pub fn total(&self) -> usize {
        self.wicket_keepers + self.batsmen + self.all_rounders + self.bowlers
    }
}

impl fmt::Display for RolePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.wicket_keepers, self.batsmen, self.all_rounders, self.bowlers
        )
    }
}

/// Enumerate every admissible pattern for the given pools.
///
/// A role's effective ceiling is its configured maximum capped by the pool
/// size, so a pattern never asks a pool for more players than it holds.
/// Patterns come out in lexicographic (wk, bat, ar, bowl) order. A role
/// whose effective range is empty empties the whole result; a match short
/// on some role legitimately has zero patterns.
pub fn role_patterns(limits: &GameLimits, pools: PoolSizes) -> Vec<RolePattern> {
    let range = |role: Role| {
        let bounds = limits.role_bounds(role);
        bounds.min..=bounds.max.min(pools.get(role))
    };

    let mut patterns = Vec::new();
    for wicket_keepers in range(Role::WicketKeeper) {
        for batsmen in range(Role::Batsman) {
            for all_rounders in range(Role::AllRounder) {
                for bowlers in range(Role::Bowler) {
                    if wicket_keepers + batsmen + all_rounders + bowlers == limits.lineup_size {
                        patterns.push(RolePattern {
                            wicket_keepers,
                            batsmen,
                            all_rounders,
                            bowlers,
                        });
                    }
                }
            }
        }
    }
    patterns
}
