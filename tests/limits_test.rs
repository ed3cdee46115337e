//! Tests for game limit loading and validation

use std::fs;

use fantasy_xi::{CountRange, FantasyError, GameLimits};

#[test]
fn load_full_limits_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("limits.json");
    fs::write(
        &path,
        r#"{
            "wicket_keepers": { "min": 1, "max": 2 },
            "batsmen": { "min": 3, "max": 5 },
            "all_rounders": { "min": 1, "max": 3 },
            "bowlers": { "min": 3, "max": 6 },
            "home_players": { "min": 5, "max": 6 },
            "away_players": { "min": 5, "max": 6 },
            "lineup_size": 11,
            "max_credits": 95.0
        }"#,
    )
    .unwrap();

    let limits = GameLimits::load(&path).unwrap();
    assert_eq!(limits.wicket_keepers, CountRange::new(1, 2));
    assert_eq!(limits.batsmen, CountRange::new(3, 5));
    assert_eq!(limits.home_players, CountRange::new(5, 6));
    assert_eq!(limits.max_credits, 95.0);
    assert!(limits.validate().is_ok());
}

#[test]
fn load_partial_limits_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("limits.json");
    fs::write(&path, r#"{ "max_credits": 90.0 }"#).unwrap();

    let limits = GameLimits::load(&path).unwrap();
    assert_eq!(limits.max_credits, 90.0);
    assert_eq!(limits, GameLimits {
        max_credits: 90.0,
        ..GameLimits::default()
    });
}

#[test]
fn malformed_json_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("limits.json");
    fs::write(&path, "not json at all").unwrap();

    assert!(matches!(
        GameLimits::load(&path),
        Err(FantasyError::Json(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        GameLimits::load("/nonexistent/limits.json"),
        Err(FantasyError::Io(_))
    ));
}

#[test]
fn loaded_limits_can_still_be_inconsistent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("limits.json");
    fs::write(&path, r#"{ "bowlers": { "min": 6, "max": 3 } }"#).unwrap();

    let limits = GameLimits::load(&path).unwrap();
    assert!(matches!(
        limits.validate(),
        Err(FantasyError::InvalidLimits { .. })
    ));
}
