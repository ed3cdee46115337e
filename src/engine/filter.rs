//! Candidate lineup validation.

use crate::engine::lineup::{Lineup, LineupSlot};
use crate::engine::patterns::RolePattern;
use crate::matchup::MatchContext;
use crate::player::Player;

/// Validate one candidate and build its output record.
///
/// `picks` holds the four role subsets in slot order (wicket keepers,
/// batsmen, all rounders, bowlers). Returns `None` when the candidate busts
/// the credit budget or either side-count bound. Stateless per candidate;
/// rejection has no side effect.
pub(crate) fn validate_candidate(
    context: &MatchContext,
    pattern: RolePattern,
    picks: &[&[&Player]; 4],
) -> Option<Lineup> {
    let limits = &context.limits;

    let mut credits = 0.0;
    let mut home_players = 0;
    let mut away_players = 0;
    for player in picks.iter().flat_map(|subset| subset.iter()) {
        credits += player.credits;
        if player.team == context.home {
            home_players += 1;
        } else if player.team == context.away {
            away_players += 1;
        }
    }

    if credits > limits.max_credits {
        return None;
    }
    if !limits.home_players.contains(home_players) {
        return None;
    }
    if !limits.away_players.contains(away_players) {
        return None;
    }

    let players = picks
        .iter()
        .flat_map(|subset| subset.iter())
        .map(|player| LineupSlot::from(*player))
        .collect();

    Some(Lineup {
        players,
        credits,
        points: 0.0,
        pattern,
        home_players,
        away_players,
    })
}
