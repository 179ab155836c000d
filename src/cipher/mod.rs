// src/cipher/mod.rs
//! The cipher engine: pure, stateless text transforms
//!
//! Every function here is total: no I/O, no shared state, no error
//! paths. Degenerate inputs (empty key, zero shift) return the text
//! unchanged. A wrong key on decryption is not detected.

pub mod request;
pub mod shift;
pub mod transposition;
pub mod vigenere;

pub use request::{parse_shift_key, CipherRequest};
pub use shift::shift;
pub use transposition::{column_order, transpose};
pub use vigenere::vigenere;
