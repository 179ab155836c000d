// src/error.rs
//! Public error type for the entire crate
//!
//! The cipher engine itself never fails; these variants cover the
//! history store, configuration and request parsing around it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Unknown cipher method: {0}")]
    UnknownMethod(String),

    #[error("Unknown shift variant: {0} (expected \"mod26\" or \"ascii\")")]
    UnknownShiftVariant(String),

    #[error("Unknown direction: {0} (expected \"encrypt\" or \"decrypt\")")]
    UnknownDirection(String),

    #[error("Identity must not be empty")]
    EmptyIdentity,

    #[error("Nothing to save: input and output must both be non-empty")]
    NothingToSave,

    #[error("History record {0} not found")]
    RecordNotFound(i64),

    #[error("Stored timestamp is not RFC 3339: {0}")]
    BadTimestamp(String),
}

pub type Result<T> = std::result::Result<T, LabError>;
