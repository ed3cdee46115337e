//! Error types for the fantasy lineup engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FantasyError>;

#[derive(Error, Debug)]
pub enum FantasyError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid game limits: {message}")]
    InvalidLimits { message: String },

    #[error("player store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("result sink failed: {message}")]
    SinkFailure { message: String },

    #[error("candidate budget exhausted: examined {examined} candidates (limit {limit})")]
    CandidateBudget { examined: u64, limit: u64 },

    #[error("unrecognized role: {value}")]
    InvalidRole { value: String },

    #[error("unrecognized team: {value}")]
    InvalidTeam { value: String },

    #[error("unrecognized side: {value}")]
    InvalidSide { value: String },

    #[error("unrecognized country: {value}")]
    InvalidCountry { value: String },

    #[error("unrecognized player status: {value}")]
    InvalidStatus { value: String },
}
