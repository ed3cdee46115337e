//! Match context and per-role player pools.

use crate::config::GameLimits;
use crate::error::Result;
use crate::player::Player;
use crate::store::PlayerStore;
use crate::types::{Role, Side, Team};

/// Everything the engine needs to know about one match.
///
/// Constructed per match and discarded after the run; there is no shared
/// state between matches.
#[derive(Debug, Clone)]
pub struct MatchContext {
    pub home: Team,
    pub away: Team,
    pub limits: GameLimits,
}

impl MatchContext {
    pub fn new(home: Team, away: Team, limits: GameLimits) -> Self {
        Self { home, away, limits }
    }

    /// Display title, e.g. "MI vs CSK".
    pub fn title(&self) -> String {
        format!("{} vs {}", self.home, self.away)
    }

    pub fn team_for(&self, side: Side) -> Team {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    /// Which side a team plays on in this match, if it is fielded at all.
    pub fn side_of(&self, team: Team) -> Option<Side> {
        if team == self.home {
            Some(Side::Home)
        } else if team == self.away {
            Some(Side::Away)
        } else {
            None
        }
    }
}

/// Number of eligible players per role category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSizes {
    pub wicket_keepers: usize,
    pub batsmen: usize,
    pub all_rounders: usize,
    pub bowlers: usize,
}

impl PoolSizes {
    pub fn get(&self, role: Role) -> usize {
        match role {
            Role::WicketKeeper => self.wicket_keepers,
            Role::Batsman => self.batsmen,
            Role::AllRounder => self.all_rounders,
            Role::Bowler => self.bowlers,
        }
    }
}

/// Read-only snapshot of a match's eligible players, split by role.
///
/// Pools are loaded once per run and never refreshed; if the upstream roster
/// changes after loading, start a fresh run instead.
#[derive(Debug, Clone, Default)]
pub struct RolePools {
    wicket_keepers: Vec<Player>,
    batsmen: Vec<Player>,
    all_rounders: Vec<Player>,
    bowlers: Vec<Player>,
}

impl RolePools {
    /// Load the four pools for a match from the player store.
    ///
    /// One fetch per (role, side) pair, home side first. Any store failure
    /// aborts the whole load; a partially filled snapshot is never returned.
    pub fn load<S: PlayerStore>(store: &S, context: &MatchContext) -> Result<Self> {
        let mut pools = Self::default();
        for role in Role::ALL {
            for side in Side::ALL {
                let players = store.fetch_players(context.team_for(side), role)?;
                pools.pool_mut(role).extend(players);
            }
        }
        Ok(pools)
    }

    /// Build pools directly from a player list.
    ///
    /// Benched players and players from teams not fielded in this match are
    /// skipped, matching what [`RolePools::load`] gets from a conforming
    /// store.
    pub fn from_players(
        context: &MatchContext,
        players: impl IntoIterator<Item = Player>,
    ) -> Self {
        let mut pools = Self::default();
        for player in players {
            if !player.is_playing() || context.side_of(player.team).is_none() {
                continue;
            }
            pools.pool_mut(player.role).push(player);
        }
        pools
    }

    pub fn get(&self, role: Role) -> &[Player] {
        match role {
            Role::WicketKeeper => &self.wicket_keepers,
            Role::Batsman => &self.batsmen,
            Role::AllRounder => &self.all_rounders,
            Role::Bowler => &self.bowlers,
        }
    }

    fn pool_mut(&mut self, role: Role) -> &mut Vec<Player> {
        match role {
            Role::WicketKeeper => &mut self.wicket_keepers,
            Role::Batsman => &mut self.batsmen,
            Role::AllRounder => &mut self.all_rounders,
            Role::Bowler => &mut self.bowlers,
        }
    }

    pub fn sizes(&self) -> PoolSizes {
        PoolSizes {
            wicket_keepers: self.wicket_keepers.len(),
            batsmen: self.batsmen.len(),
            all_rounders: self.all_rounders.len(),
            bowlers: self.bowlers.len(),
        }
    }
}
