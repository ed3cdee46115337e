//! Accepted lineup records.

use crate::engine::patterns::RolePattern;
use crate::player::Player;
use crate::types::{Role, Team};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One slot of an accepted lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupSlot {
    pub name: String,
    pub team: Team,
    pub role: Role,
    pub credits: f64,
}

impl From<&Player> for LineupSlot {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            team: player.team,
            role: player.role,
            credits: player.credits,
        }
    }
}

/// A lineup that cleared every budget and side-balance check.
///
/// Slots are in fixed role order (wicket keepers, batsmen, all rounders,
/// bowlers), matching the pattern that produced the lineup. `points` is a
/// placeholder for upstream scoring and is always zero on engine output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub players: Vec<LineupSlot>,
    pub credits: f64,
    pub points: f64,
    pub pattern: RolePattern,
    pub home_players: usize,
    pub away_players: usize,
}

impl Lineup {
    pub fn player_names(&self) -> Vec<&str> {
        self.players.iter().map(|slot| slot.name.as_str()).collect()
    }
}

impl fmt::Display for Lineup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .players
            .iter()
            .map(|slot| slot.name.len())
            .max()
            .unwrap_or(0)
            .max("PLAYER".len());

        writeln!(
            f,
            "{:>2}  {:<name_width$}  {:<4}  {:<4}  {:>7}",
            "#", "PLAYER", "TEAM", "ROLE", "CREDITS"
        )?;
        for (index, slot) in self.players.iter().enumerate() {
            writeln!(
                f,
                "{:>2}  {:<name_width$}  {:<4}  {:<4}  {:>7.1}",
                index + 1,
                slot.name,
                slot.team.as_str(),
                slot.role.as_str(),
                slot.credits
            )?;
        }
        write!(
            f,
            "WK: {}  BAT: {}  AR: {}  BOW: {}  Home: {}  Away: {}  Credits: {:.1}",
            self.pattern.wicket_keepers,
            self.pattern.batsmen,
            self.pattern.all_rounders,
            self.pattern.bowlers,
            self.home_players,
            self.away_players,
            self.credits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Country;

    fn sample() -> Lineup {
        let keeper = Player::new("Quinton de Kock", Country::SouthAfrica, Team::LSG, Role::WicketKeeper, 9.0);
        let bowler = Player::new("Bumrah", Country::India, Team::MI, Role::Bowler, 9.5);
        Lineup {
            players: vec![LineupSlot::from(&keeper), LineupSlot::from(&bowler)],
            credits: 18.5,
            points: 0.0,
            pattern: RolePattern {
                wicket_keepers: 1,
                batsmen: 0,
                all_rounders: 0,
                bowlers: 1,
            },
            home_players: 1,
            away_players: 1,
        }
    }

    #[test]
    fn slot_copies_player_fields() {
        let lineup = sample();
        assert_eq!(lineup.player_names(), ["Quinton de Kock", "Bumrah"]);
        assert_eq!(lineup.players[0].role, Role::WicketKeeper);
        assert_eq!(lineup.players[1].team, Team::MI);
    }

    #[test]
    fn display_renders_rows_and_footer() {
        let rendered = sample().to_string();
        assert!(rendered.contains("PLAYER"));
        assert!(rendered.contains("Quinton de Kock"));
        assert!(rendered.contains("  MI  "));
        assert!(rendered.ends_with("WK: 1  BAT: 0  AR: 0  BOW: 1  Home: 1  Away: 1  Credits: 18.5"));
    }
}
