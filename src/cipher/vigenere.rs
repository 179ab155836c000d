// src/cipher/vigenere.rs
//! Vigenère cipher
//!
//! Only letters consume key material; everything else is copied through
//! and leaves the running key index where it was.

use crate::consts::ALPHABET_LEN;
use crate::enums::Direction;

const SPAN: u8 = ALPHABET_LEN as u8;

/// Polyalphabetic shift driven by the letters of `key`.
///
/// Non-letters in the key are discarded; a key with no letters at all
/// returns `text` unchanged.
pub fn vigenere(text: &str, key: &str, direction: Direction) -> String {
    let schedule = key_schedule(key);
    if schedule.is_empty() {
        return text.to_string();
    }

    let mut key_idx = 0;
    text.chars()
        .map(|c| {
            let base = if c.is_ascii_uppercase() {
                b'A'
            } else if c.is_ascii_lowercase() {
                b'a'
            } else {
                return c;
            };

            let p = c as u8 - base;
            let k = schedule[key_idx];
            key_idx = (key_idx + 1) % schedule.len();

            let out = match direction {
                Direction::Encrypt => (p + k) % SPAN,
                Direction::Decrypt => (p + SPAN - k) % SPAN,
            };
            char::from(out + base)
        })
        .collect()
}

/// Cleaned key as 0–25 offsets: ASCII letters only, case-folded to upper.
fn key_schedule(key: &str) -> Vec<u8> {
    key.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase() - b'A')
        .collect()
}
