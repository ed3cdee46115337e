//! Player data model.

use crate::types::{Country, PlayerStatus, Role, Team};
use serde::{Deserialize, Serialize};

/// An eligible fantasy player.
///
/// Immutable for the duration of an engine run: role pools own their players
/// and candidate lineups only borrow them. `points` is a carried score from
/// upstream; the engine propagates it but never filters on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub country: Country,
    pub team: Team,
    pub role: Role,
    pub points: f64,
    /// Credit cost counted against the lineup budget.
    pub credits: f64,
    pub status: PlayerStatus,
}

impl Player {
    /// New active player with no carried score.
    pub fn new(
        name: impl Into<String>,
        country: Country,
        team: Team,
        role: Role,
        credits: f64,
    ) -> Self {
        Self {
            name: name.into(),
            country,
            team,
            role,
            points: 0.0,
            credits,
            status: PlayerStatus::Playing,
        }
    }

    pub fn with_points(mut self, points: f64) -> Self {
        self.points = points;
        self
    }

    pub fn with_status(mut self, status: PlayerStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlayerStatus::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_is_active() {
        let player = Player::new("MS Dhoni", Country::India, Team::CSK, Role::WicketKeeper, 9.5);
        assert!(player.is_playing());
        assert_eq!(player.points, 0.0);
        assert_eq!(player.credits, 9.5);
    }

    #[test]
    fn builders_override_defaults() {
        let player = Player::new("R Ashwin", Country::India, Team::RR, Role::AllRounder, 8.0)
            .with_points(42.5)
            .with_status(PlayerStatus::Bench);
        assert!(!player.is_playing());
        assert_eq!(player.points, 42.5);
    }
}
