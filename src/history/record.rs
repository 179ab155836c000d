// src/history/record.rs
//! Typed history records and the identity they are filed under

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{CipherMethod, Direction};
use crate::error::{LabError, Result};

/// Authenticated user handle supplied by the caller's auth layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Surrounding whitespace is trimmed; a blank identity is rejected
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LabError::EmptyIdentity);
        }
        Ok(Identity(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a caller hands the store after running a transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub method: CipherMethod,
    pub direction: Direction,
    pub input: String,
    pub output: String,
}

impl NewRecord {
    pub fn new(
        method: CipherMethod,
        direction: Direction,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            method,
            direction,
            input: input.into(),
            output: output.into(),
        }
    }
}

/// One persisted operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub identity: Identity,
    pub method: CipherMethod,
    pub direction: Direction,
    pub input: String,
    pub output: String,
    pub created_at: DateTime<Utc>,
}

/// Per-identity counts shown above the history list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total: u64,
    pub encrypt: u64,
    pub decrypt: u64,
}
