//! Roster and lineup persistence queries.

use super::models::{StoredLineup, StoredPlayer};
use super::schema::FantasyDatabase;
use crate::engine::{Lineup, LineupSlot, RolePattern};
use crate::error::FantasyError;
use crate::player::Player;
use crate::store::{PlayerStore, ResultSink};
use crate::types::{Country, PlayerStatus, Role, Team};
use anyhow::Result;
use rusqlite::types::Type;
use rusqlite::{params, Row};
use std::str::FromStr;

impl FantasyDatabase {
    /// Add a player to the roster, returning its row id.
    pub fn add_player(&mut self, player: &Player) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO players (name, country, team, role, points, credits, status)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                player.name,
                player.country.code(),
                player.team.as_str(),
                player.role.as_str(),
                player.points,
                player.credits,
                player.status.as_str(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Flip the availability of every player with this name.
    ///
    /// Returns the number of affected rows (zero when the name is unknown).
    pub fn set_status(&mut self, name: &str, status: PlayerStatus) -> Result<usize> {
        let affected = self.conn.execute(
            "UPDATE players SET status = ? WHERE name = ?",
            params![status.as_str(), name],
        )?;
        Ok(affected)
    }

    /// Active players of one role fielded by one team, in insertion order.
    ///
    /// This is the pool query: benched players never appear in the result.
    pub fn players_for(&self, team: Team, role: Role) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, country, team, role, points, credits, status
             FROM players
             WHERE team = ? AND role = ? AND status = ?
             ORDER BY id",
        )?;

        let rows = stmt.query_map(
            params![
                team.as_str(),
                role.as_str(),
                PlayerStatus::Playing.as_str()
            ],
            row_to_player,
        )?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Every roster player regardless of team or status.
    pub fn all_players(&self) -> Result<Vec<StoredPlayer>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, country, team, role, points, credits, status
             FROM players
             ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(StoredPlayer {
                id: row.get(0)?,
                player: row_to_player_at(row, 1)?,
            })
        })?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Remove the whole roster.
    pub fn clear_players(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM players", [])?;
        Ok(())
    }

    /// Replace the stored lineups with a fresh run's output.
    ///
    /// Runs inside a single transaction: on failure the previously stored
    /// lineups survive untouched.
    pub fn replace_lineups(&mut self, lineups: &[Lineup]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM lineups", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO lineups (players, credits, points, wicket_keepers, batsmen,
                                      all_rounders, bowlers, home_players, away_players)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for lineup in lineups {
                stmt.execute(params![
                    serde_json::to_string(&lineup.players)?,
                    lineup.credits,
                    lineup.points,
                    lineup.pattern.wicket_keepers as i64,
                    lineup.pattern.batsmen as i64,
                    lineup.pattern.all_rounders as i64,
                    lineup.pattern.bowlers as i64,
                    lineup.home_players as i64,
                    lineup.away_players as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(lineups.len())
    }

    /// Number of stored lineups.
    pub fn lineup_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM lineups", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Every stored lineup, in insertion order.
    pub fn all_lineups(&self) -> Result<Vec<StoredLineup>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, players, credits, points, wicket_keepers, batsmen,
                    all_rounders, bowlers, home_players, away_players
             FROM lineups
             ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            let slots_json: String = row.get(1)?;
            let players: Vec<LineupSlot> = serde_json::from_str(&slots_json)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;
            Ok(StoredLineup {
                id: row.get(0)?,
                lineup: Lineup {
                    players,
                    credits: row.get(2)?,
                    points: row.get(3)?,
                    pattern: RolePattern {
                        wicket_keepers: row.get::<_, i64>(4)? as usize,
                        batsmen: row.get::<_, i64>(5)? as usize,
                        all_rounders: row.get::<_, i64>(6)? as usize,
                        bowlers: row.get::<_, i64>(7)? as usize,
                    },
                    home_players: row.get::<_, i64>(8)? as usize,
                    away_players: row.get::<_, i64>(9)? as usize,
                },
            })
        })?;

        let mut lineups = Vec::new();
        for row in rows {
            lineups.push(row?);
        }
        Ok(lineups)
    }
}

impl PlayerStore for FantasyDatabase {
    fn fetch_players(&self, team: Team, role: Role) -> crate::Result<Vec<Player>> {
        self.players_for(team, role)
            .map_err(|e| FantasyError::StoreUnavailable {
                message: e.to_string(),
            })
    }
}

impl ResultSink for FantasyDatabase {
    fn replace_all(&mut self, lineups: &[Lineup]) -> crate::Result<usize> {
        self.replace_lineups(lineups)
            .map_err(|e| FantasyError::SinkFailure {
                message: e.to_string(),
            })
    }
}

/// Convert a row whose columns start with `name` at index 0.
fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    row_to_player_at(row, 0)
}

fn row_to_player_at(row: &Row, offset: usize) -> rusqlite::Result<Player> {
    let parse_error =
        |idx: usize, e: FantasyError| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e));

    let country: String = row.get(offset + 1)?;
    let team: String = row.get(offset + 2)?;
    let role: String = row.get(offset + 3)?;
    let status: String = row.get(offset + 6)?;

    Ok(Player {
        name: row.get(offset)?,
        country: Country::from_str(&country).map_err(|e| parse_error(offset + 1, e))?,
        team: Team::from_str(&team).map_err(|e| parse_error(offset + 2, e))?,
        role: Role::from_str(&role).map_err(|e| parse_error(offset + 3, e))?,
        points: row.get(offset + 4)?,
        credits: row.get(offset + 5)?,
        status: PlayerStatus::from_str(&status).map_err(|e| parse_error(offset + 6, e))?,
    })
}
