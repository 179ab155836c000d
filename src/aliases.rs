// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! Cipher keys in this crate are teaching material and travel as plain
//! strings; only the history database passphrase is a real secret.

pub use secure_gate::dynamic_alias;

// SQLCipher key for the history database, zeroized on drop
dynamic_alias!(DbPassphrase, String);
