// src/lib.rs
//! cipher-lab: a teaching lab for classical cryptography
//!
//! Features:
//! - Shift (Caesar) cipher with mod-26 and ASCII-range arithmetic
//! - Vigenère cipher with a running key index
//! - Columnar transposition with explicit (char, index) column order
//! - Per-identity operation history in SQLite / SQLCipher
//!
//! None of these ciphers are secure; they exist to be studied.

pub mod aliases;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod enums;
pub mod error;
pub mod history;
pub mod lab;

// Re-export everything users need at the crate root
pub use cipher::{shift, transpose, vigenere, CipherRequest};
pub use config::load as load_config;
pub use enums::{CipherMethod, Direction, ShiftVariant};
pub use error::{LabError, Result};
pub use history::{export_to_json, HistoryRecord, HistoryStats, HistoryStore, Identity, NewRecord};
pub use lab::{CipherLab, Outcome};
