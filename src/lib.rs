//! Fantasy Cricket Lineup Engine
//!
//! A Rust library that enumerates every legal fantasy lineup for a cricket
//! match: all role-count patterns within the configured bounds, every
//! same-size player subset per role, streamed through the credit budget and
//! home/away balance filter.
//!
//! ## Features
//!
//! - **Pattern Enumeration**: every admissible split of the eleven slots
//!   across wicket keepers, batsmen, all rounders and bowlers
//! - **Streaming Candidate Generation**: the per-pattern combination product
//!   is filtered candidate by candidate and never materialized
//! - **Budget & Side Balance Enforcement**: configurable credit cap and
//!   per-side player count bounds
//! - **Parallel Pattern Processing**: independent patterns fan out across a
//!   rayon thread pool with deterministic output order
//! - **SQLite Storage**: local roster source and lineup sink backed by
//!   rusqlite
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fantasy_xi::storage::FantasyDatabase;
//! use fantasy_xi::{Game, GameLimits, MatchContext, ResultSink, Team};
//!
//! # fn run() -> anyhow::Result<()> {
//! let mut db = FantasyDatabase::new()?;
//!
//! let context = MatchContext::new(Team::MI, Team::CSK, GameLimits::default());
//! let game = Game::new(context).with_candidate_limit(5_000_000);
//!
//! let lineups = game.possible_lineups(&db)?;
//! let stored = db.replace_all(&lineups)?;
//! println!("stored {stored} lineups");
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Game limits live in a plain [`GameLimits`] struct, typically loaded once
//! at startup from a `limits.json` file and passed into the engine; the
//! crate never reads configuration from ambient state:
//!
//! ```json
//! {
//!     "wicket_keepers": { "min": 1, "max": 4 },
//!     "batsmen": { "min": 3, "max": 6 },
//!     "all_rounders": { "min": 1, "max": 4 },
//!     "bowlers": { "min": 3, "max": 6 },
//!     "home_players": { "min": 4, "max": 7 },
//!     "away_players": { "min": 4, "max": 7 },
//!     "lineup_size": 11,
//!     "max_credits": 100.0
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod matchup;
pub mod player;
pub mod storage;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::{CountRange, GameLimits};
pub use engine::{combinations, role_patterns, Game, Lineup, LineupSlot, RolePattern};
pub use error::{FantasyError, Result};
pub use matchup::{MatchContext, PoolSizes, RolePools};
pub use player::Player;
pub use storage::FantasyDatabase;
pub use store::{PlayerStore, ResultSink};
pub use types::{Country, PlayerStatus, Role, Side, Team};
