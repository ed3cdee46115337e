//! Database connection and schema management.

use anyhow::{anyhow, Result};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// SQLite-backed roster store and lineup sink.
pub struct FantasyDatabase {
    pub(crate) conn: Connection,
}

impl FantasyDatabase {
    /// Open (or create) the database at its default location.
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        // Ensure the data directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Self::open(&db_path)
    }

    /// Open (or create) a database at an explicit path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open an in-memory database, mainly for tests.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    fn database_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| anyhow!("could not determine data directory"))?;
        Ok(data_dir.join("fantasy-xi").join("fantasy.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                country TEXT NOT NULL,
                team TEXT NOT NULL,
                role TEXT NOT NULL,
                points REAL NOT NULL DEFAULT 0,
                credits REAL NOT NULL,
                status TEXT NOT NULL DEFAULT 'Bench'
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS lineups (
                id INTEGER PRIMARY KEY,
                players TEXT NOT NULL,
                credits REAL NOT NULL,
                points REAL NOT NULL,
                wicket_keepers INTEGER NOT NULL,
                batsmen INTEGER NOT NULL,
                all_rounders INTEGER NOT NULL,
                bowlers INTEGER NOT NULL,
                home_players INTEGER NOT NULL,
                away_players INTEGER NOT NULL
            )",
            [],
        )?;

        // The pool query filters on role and status for every run
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_players_role_status
             ON players(role, status)",
            [],
        )?;

        Ok(())
    }
}
