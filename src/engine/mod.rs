//! Lineup combination engine.
//!
//! The driver turns a match context into the full set of valid lineups:
//! enumerate the admissible role count patterns, pair each pattern with one
//! combination sequence per role pool, and stream the four-way product
//! candidate by candidate through the budget and side-balance filter. The
//! product is never materialized; memory stays proportional to the per-role
//! subset lists, not to the candidate count.

mod combinations;
mod filter;
mod lineup;
mod patterns;

pub use combinations::{combinations, Combinations};
pub use lineup::{Lineup, LineupSlot};
pub use patterns::{role_patterns, RolePattern};

use crate::error::{FantasyError, Result};
use crate::matchup::{MatchContext, RolePools};
use crate::store::{PlayerStore, ResultSink};
use crate::types::Role;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

/// Engine driver for one match.
///
/// Patterns are independent of each other, so the driver fans them out
/// across the rayon thread pool and merges the per-pattern results back in
/// pattern order. Identical inputs therefore produce the identical output
/// sequence, parallel or not.
///
/// # Examples
///
/// ```rust
/// use fantasy_xi::{Country, Game, GameLimits, MatchContext, Player, Role, RolePools, Team};
///
/// let context = MatchContext::new(Team::MI, Team::CSK, GameLimits::default());
/// let pools = RolePools::from_players(&context, vec![
///     Player::new("keeper", Country::India, Team::MI, Role::WicketKeeper, 9.0),
///     // ...the rest of both playing elevens
/// ]);
/// let lineups = Game::new(context).lineups_from_pools(&pools).unwrap();
/// assert!(lineups.is_empty()); // one keeper cannot fill eleven slots
/// ```
pub struct Game {
    context: MatchContext,
    candidate_limit: Option<u64>,
}

impl Game {
    pub fn new(context: MatchContext) -> Self {
        Self {
            context,
            candidate_limit: None,
        }
    }

    /// Abort the run with [`FantasyError::CandidateBudget`] once this many
    /// candidates have been examined across all patterns. Guards against
    /// pool sizes whose combination product would never finish.
    pub fn with_candidate_limit(mut self, limit: u64) -> Self {
        self.candidate_limit = Some(limit);
        self
    }

    pub fn context(&self) -> &MatchContext {
        &self.context
    }

    /// Load the match's pools from the store and enumerate every valid
    /// lineup.
    ///
    /// Limits are validated first and the pool load is atomic, so every
    /// failure happens before pattern processing starts.
    pub fn possible_lineups<S: PlayerStore>(&self, store: &S) -> Result<Vec<Lineup>> {
        self.context.limits.validate()?;
        let pools = RolePools::load(store, &self.context)?;
        self.lineups_from_pools(&pools)
    }

    /// Enumerate every valid lineup from an already loaded pool snapshot.
    pub fn lineups_from_pools(&self, pools: &RolePools) -> Result<Vec<Lineup>> {
        self.context.limits.validate()?;
        let patterns = role_patterns(&self.context.limits, pools.sizes());
        let examined = AtomicU64::new(0);

        let per_pattern = patterns
            .par_iter()
            .map(|pattern| self.lineups_for_pattern(pools, *pattern, &examined))
            .collect::<Result<Vec<_>>>()?;

        Ok(per_pattern.into_iter().flatten().collect())
    }

    /// Enumerate, then hand everything to the sink in one call.
    ///
    /// Returns the stored record count. The sink sees either the complete
    /// accepted set or nothing at all.
    pub fn run_into<S, K>(&self, store: &S, sink: &mut K) -> Result<usize>
    where
        S: PlayerStore,
        K: ResultSink,
    {
        let lineups = self.possible_lineups(store)?;
        sink.replace_all(&lineups)
    }

    /// Stream one pattern's candidate product through the filter.
    ///
    /// The three inner subset lists are materialized once and replayed per
    /// outer subset; the outer sequence and the product itself stay lazy.
    fn lineups_for_pattern(
        &self,
        pools: &RolePools,
        pattern: RolePattern,
        examined: &AtomicU64,
    ) -> Result<Vec<Lineup>> {
        let batsmen: Vec<_> =
            combinations(pools.get(Role::Batsman), pattern.batsmen).collect();
        let all_rounders: Vec<_> =
            combinations(pools.get(Role::AllRounder), pattern.all_rounders).collect();
        let bowlers: Vec<_> =
            combinations(pools.get(Role::Bowler), pattern.bowlers).collect();

        let mut accepted = Vec::new();
        for keepers in combinations(pools.get(Role::WicketKeeper), pattern.wicket_keepers) {
            for bats in &batsmen {
                for rounders in &all_rounders {
                    for bowls in &bowlers {
                        self.charge_candidate(examined)?;
                        let picks = [&keepers[..], &bats[..], &rounders[..], &bowls[..]];
                        if let Some(lineup) =
                            filter::validate_candidate(&self.context, pattern, &picks)
                        {
                            accepted.push(lineup);
                        }
                    }
                }
            }
        }
        Ok(accepted)
    }

    fn charge_candidate(&self, examined: &AtomicU64) -> Result<()> {
        let Some(limit) = self.candidate_limit else {
            return Ok(());
        };
        let count = examined.fetch_add(1, Ordering::Relaxed) + 1;
        if count > limit {
            return Err(FantasyError::CandidateBudget {
                examined: count,
                limit,
            });
        }
        Ok(())
    }
}
