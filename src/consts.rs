// src/consts.rs
//! Shared constants: alphabet geometry, storage and environment names

/// Letters in each case's alphabet
pub const ALPHABET_LEN: i64 = 26;

/// Inclusive code-point range of the upper-case alphabet
pub const UPPER_RANGE: (i64, i64) = (b'A' as i64, b'Z' as i64);

/// Inclusive code-point range of the lower-case alphabet
pub const LOWER_RANGE: (i64, i64) = (b'a' as i64, b'z' as i64);

/// Stand-in for whitespace inside a transposition grid
pub const TRANSPOSITION_PLACEHOLDER: char = '_';

/// KDF iterations for the SQLCipher history database
// ~0.1–0.2s on modern hardware
pub const DB_KDF_ITERATIONS: u32 = 256_000;

/// Config file consulted when `CIPHER_LAB_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "cipher-lab.toml";

pub const ENV_CONFIG: &str = "CIPHER_LAB_CONFIG";
pub const ENV_HISTORY_DB: &str = "CIPHER_LAB_HISTORY_DB";
pub const ENV_DB_KEY: &str = "CIPHER_LAB_DB_KEY";

/// Format tag written into history exports
pub const EXPORT_FORMAT: &str = "cipher-lab-history-v1";
