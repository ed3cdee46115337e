//! Unit tests for storage functionality

use super::*;
use crate::engine::{Lineup, LineupSlot, RolePattern};
use crate::player::Player;
use crate::types::{Country, PlayerStatus, Role, Team};

fn create_test_db() -> FantasyDatabase {
    FantasyDatabase::new_in_memory().unwrap()
}

fn keeper() -> Player {
    Player::new("MS Dhoni", Country::India, Team::CSK, Role::WicketKeeper, 9.5)
}

fn sample_lineup(first_name: &str) -> Lineup {
    let player = Player::new(first_name, Country::India, Team::CSK, Role::WicketKeeper, 9.5);
    Lineup {
        players: vec![LineupSlot::from(&player)],
        credits: 9.5,
        points: 0.0,
        pattern: RolePattern {
            wicket_keepers: 1,
            batsmen: 0,
            all_rounders: 0,
            bowlers: 0,
        },
        home_players: 0,
        away_players: 1,
    }
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
    // Should not panic - schema creation successful
}

#[test]
fn test_add_and_fetch_player() {
    let mut db = create_test_db();

    let id = db.add_player(&keeper()).unwrap();
    assert!(id > 0);

    let players = db.players_for(Team::CSK, Role::WicketKeeper).unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0], keeper());
}

#[test]
fn test_pool_query_filters_team_role_and_status() {
    let mut db = create_test_db();

    db.add_player(&keeper()).unwrap();
    db.add_player(&Player::new("benched", Country::India, Team::CSK, Role::WicketKeeper, 8.0)
        .with_status(PlayerStatus::Bench))
        .unwrap();
    db.add_player(&Player::new("wrong team", Country::India, Team::MI, Role::WicketKeeper, 8.0))
        .unwrap();
    db.add_player(&Player::new("wrong role", Country::India, Team::CSK, Role::Bowler, 8.0))
        .unwrap();

    let players = db.players_for(Team::CSK, Role::WicketKeeper).unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "MS Dhoni");
}

#[test]
fn test_pool_query_preserves_insertion_order() {
    let mut db = create_test_db();

    for name in ["first", "second", "third"] {
        db.add_player(&Player::new(name, Country::Australia, Team::MI, Role::Batsman, 8.0))
            .unwrap();
    }

    let names: Vec<String> = db
        .players_for(Team::MI, Role::Batsman)
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn test_set_status_moves_player_between_bench_and_eleven() {
    let mut db = create_test_db();
    db.add_player(&keeper()).unwrap();

    let affected = db.set_status("MS Dhoni", PlayerStatus::Bench).unwrap();
    assert_eq!(affected, 1);
    assert!(db.players_for(Team::CSK, Role::WicketKeeper).unwrap().is_empty());

    db.set_status("MS Dhoni", PlayerStatus::Playing).unwrap();
    assert_eq!(db.players_for(Team::CSK, Role::WicketKeeper).unwrap().len(), 1);

    assert_eq!(db.set_status("nobody", PlayerStatus::Bench).unwrap(), 0);
}

#[test]
fn test_all_players_returns_every_status() {
    let mut db = create_test_db();
    db.add_player(&keeper()).unwrap();
    db.add_player(&Player::new("benched", Country::England, Team::MI, Role::Batsman, 8.0)
        .with_status(PlayerStatus::Bench))
        .unwrap();

    let all = db.all_players().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].player.name, "MS Dhoni");
    assert_eq!(all[1].player.status, PlayerStatus::Bench);
}

#[test]
fn test_clear_players() {
    let mut db = create_test_db();
    db.add_player(&keeper()).unwrap();
    db.clear_players().unwrap();
    assert!(db.all_players().unwrap().is_empty());
}

#[test]
fn test_replace_lineups_round_trip() {
    let mut db = create_test_db();

    let stored = db.replace_lineups(&[sample_lineup("a"), sample_lineup("b")]).unwrap();
    assert_eq!(stored, 2);
    assert_eq!(db.lineup_count().unwrap(), 2);

    let lineups = db.all_lineups().unwrap();
    assert_eq!(lineups.len(), 2);
    assert_eq!(lineups[0].lineup, sample_lineup("a"));
    assert_eq!(lineups[1].lineup.players[0].name, "b");
}

#[test]
fn test_replace_lineups_discards_previous_run() {
    let mut db = create_test_db();

    db.replace_lineups(&[sample_lineup("old1"), sample_lineup("old2")]).unwrap();
    db.replace_lineups(&[sample_lineup("new")]).unwrap();

    let lineups = db.all_lineups().unwrap();
    assert_eq!(lineups.len(), 1);
    assert_eq!(lineups[0].lineup.players[0].name, "new");
}

#[test]
fn test_replace_lineups_with_empty_run_clears_table() {
    let mut db = create_test_db();

    db.replace_lineups(&[sample_lineup("old")]).unwrap();
    db.replace_lineups(&[]).unwrap();
    assert_eq!(db.lineup_count().unwrap(), 0);
}
