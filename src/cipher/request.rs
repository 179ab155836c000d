// src/cipher/request.rs
//! One cipher call as a request handler sees it: a method selector, a
//! direction, and the raw text and key straight from the form.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cipher::{shift, transpose, vigenere};
use crate::consts::ALPHABET_LEN;
use crate::enums::{CipherMethod, Direction};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherRequest {
    pub method: CipherMethod,
    pub direction: Direction,
    pub text: String,
    pub key: String,
}

impl CipherRequest {
    pub fn new(
        method: CipherMethod,
        direction: Direction,
        text: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            method,
            direction,
            text: text.into(),
            key: key.into(),
        }
    }

    /// Run exactly one transform. Never fails.
    pub fn run(&self) -> String {
        debug!(
            method = %self.method,
            direction = %self.direction,
            chars = self.text.chars().count(),
            "running cipher"
        );

        match self.method {
            CipherMethod::Shift(variant) => shift(
                &self.text,
                parse_shift_key(&self.key),
                self.direction,
                variant,
            ),
            CipherMethod::Vigenere => vigenere(&self.text, &self.key, self.direction),
            CipherMethod::Transposition => transpose(&self.text, &self.key, self.direction),
        }
    }
}

/// Lenient integer parse for a shift key typed into a form.
///
/// Leading whitespace, an optional sign, then the longest run of ASCII
/// digits; trailing junk is ignored and no digits at all means `0`.
/// A run too long for `i64` is folded modulo 26 as it is read, which
/// leaves the letter movement unchanged.
pub fn parse_shift_key(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();

    let magnitude = digits
        .iter()
        .try_fold(0i64, |acc, &d| acc.checked_mul(10)?.checked_add(d))
        .unwrap_or_else(|| {
            digits
                .iter()
                .fold(0i64, |acc, &d| (acc * 10 + d) % ALPHABET_LEN)
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
