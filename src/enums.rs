// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: which way a transform
//! runs, which Caesar arithmetic is used, and which cipher is selected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LabError;

/// Whether a transform encrypts or decrypts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Encrypt,
    Decrypt,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" => Ok(Direction::Encrypt),
            "decrypt" => Ok(Direction::Decrypt),
            other => Err(LabError::UnknownDirection(other.to_string())),
        }
    }
}

/// Arithmetic used by the shift cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShiftVariant {
    /// Letters mapped to 0–25, shifted, reduced mod 26
    #[default]
    #[serde(rename = "mod26")]
    Modulo26,
    /// Code point shifted directly, wrapped inside `A..=Z` / `a..=z`
    #[serde(rename = "ascii")]
    AsciiRange,
}

impl ShiftVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftVariant::Modulo26 => "mod26",
            ShiftVariant::AsciiRange => "ascii",
        }
    }
}

impl fmt::Display for ShiftVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftVariant {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mod26" | "modulo26" | "normal" => Ok(ShiftVariant::Modulo26),
            "ascii" | "asciirange" | "full" => Ok(ShiftVariant::AsciiRange),
            _ => Err(LabError::UnknownShiftVariant(s.to_string())),
        }
    }
}

/// Cipher selector, as chosen on the request form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMethod {
    Shift(ShiftVariant),
    Vigenere,
    Transposition,
}

impl CipherMethod {
    /// Stable label stored in history records
    pub fn label(&self) -> &'static str {
        match self {
            CipherMethod::Shift(ShiftVariant::Modulo26) => "shift-mod26",
            CipherMethod::Shift(ShiftVariant::AsciiRange) => "shift-ascii",
            CipherMethod::Vigenere => "vigenere",
            CipherMethod::Transposition => "transposition",
        }
    }
}

impl fmt::Display for CipherMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CipherMethod {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "shift" | "caesar" => Ok(CipherMethod::Shift(ShiftVariant::Modulo26)),
            "vigenere" => Ok(CipherMethod::Vigenere),
            "transposition" | "columnar" => Ok(CipherMethod::Transposition),
            _ => match lowered.split_once('-') {
                Some(("shift" | "caesar" | "ascii", variant)) => variant
                    .parse()
                    .map(CipherMethod::Shift)
                    .map_err(|_| LabError::UnknownMethod(s.to_string())),
                _ => Err(LabError::UnknownMethod(s.to_string())),
            },
        }
    }
}

impl Serialize for CipherMethod {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for CipherMethod {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_labels_parse_back() {
        for method in [
            CipherMethod::Shift(ShiftVariant::Modulo26),
            CipherMethod::Shift(ShiftVariant::AsciiRange),
            CipherMethod::Vigenere,
            CipherMethod::Transposition,
        ] {
            assert_eq!(method.label().parse::<CipherMethod>().unwrap(), method);
        }
    }

    #[test]
    fn legacy_shift_labels_are_accepted() {
        assert_eq!(
            "caesar-full".parse::<CipherMethod>().unwrap(),
            CipherMethod::Shift(ShiftVariant::AsciiRange)
        );
        assert_eq!(
            "Shift".parse::<CipherMethod>().unwrap(),
            CipherMethod::Shift(ShiftVariant::Modulo26)
        );
        assert_eq!(
            "ascii-full".parse::<CipherMethod>().unwrap(),
            CipherMethod::Shift(ShiftVariant::AsciiRange)
        );
        assert_eq!(
            "ascii-normal".parse::<CipherMethod>().unwrap(),
            CipherMethod::Shift(ShiftVariant::Modulo26)
        );
    }

    #[test]
    fn unknown_variant_reports_what_was_typed() {
        assert!(matches!(
            "rot47".parse::<ShiftVariant>(),
            Err(LabError::UnknownShiftVariant(v)) if v == "rot47"
        ));
        assert!(matches!(
            "ascii-rot47".parse::<CipherMethod>(),
            Err(LabError::UnknownMethod(m)) if m == "ascii-rot47"
        ));
    }

    #[test]
    fn unknown_method_is_an_error() {
        assert!(matches!(
            "playfair".parse::<CipherMethod>(),
            Err(LabError::UnknownMethod(m)) if m == "playfair"
        ));
        assert!("shift-rot47".parse::<CipherMethod>().is_err());
    }

    #[test]
    fn direction_round_trips_through_serde() {
        let json = serde_json::to_string(&Direction::Decrypt).unwrap();
        assert_eq!(json, "\"decrypt\"");
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::Decrypt);
    }
}
