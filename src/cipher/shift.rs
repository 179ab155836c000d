// src/cipher/shift.rs
//! Shift (Caesar) cipher
//!
//! Decryption is encryption with the negated shift; there is no second
//! code path.

use crate::consts::{ALPHABET_LEN, LOWER_RANGE, UPPER_RANGE};
use crate::enums::{Direction, ShiftVariant};

/// Move every ASCII letter `key` places within its own case's alphabet.
///
/// Any `i64` is a valid key. It is reduced modulo 26 before use, so both
/// variants always agree; they differ only in how the wrap is computed.
pub fn shift(text: &str, key: i64, direction: Direction, variant: ShiftVariant) -> String {
    let reduced = key % ALPHABET_LEN;
    let shift = match direction {
        Direction::Encrypt => reduced,
        Direction::Decrypt => -reduced,
    };

    if shift == 0 {
        return text.to_string();
    }

    text.chars()
        .map(|c| shift_char(c, shift, variant))
        .collect()
}

fn shift_char(c: char, shift: i64, variant: ShiftVariant) -> char {
    let (start, end) = if c.is_ascii_uppercase() {
        UPPER_RANGE
    } else if c.is_ascii_lowercase() {
        LOWER_RANGE
    } else {
        return c;
    };

    let code = c as i64;
    let shifted = match variant {
        ShiftVariant::Modulo26 => {
            let mut index = (code - start + shift) % ALPHABET_LEN;
            if index < 0 {
                index += ALPHABET_LEN;
            }
            start + index
        }
        ShiftVariant::AsciiRange => {
            let moved = code + shift;
            if moved > end {
                start + (moved - end - 1)
            } else if moved < start {
                end - (start - moved - 1)
            } else {
                moved
            }
        }
    };

    // always inside [start, end], both ASCII
    char::from(shifted as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_mod26() {
        assert_eq!(
            shift("ABC", 1, Direction::Encrypt, ShiftVariant::Modulo26),
            "BCD"
        );
        assert_eq!(
            shift("BCD", 1, Direction::Decrypt, ShiftVariant::Modulo26),
            "ABC"
        );
        assert_eq!(
            shift("HELLO", 3, Direction::Encrypt, ShiftVariant::Modulo26),
            "KHOOR"
        );
    }

    #[test]
    fn test_shift_ascii_range_wraps_in_code_point_space() {
        assert_eq!(
            shift("XYZ", 1, Direction::Encrypt, ShiftVariant::AsciiRange),
            "YZA"
        );
        assert_eq!(
            shift("YZA", 1, Direction::Decrypt, ShiftVariant::AsciiRange),
            "XYZ"
        );
        assert_eq!(
            shift("abc", 3, Direction::Decrypt, ShiftVariant::AsciiRange),
            "xyz"
        );
    }

    #[test]
    fn test_shift_preserves_case_and_punctuation() {
        assert_eq!(
            shift("Hello, World! 42", 13, Direction::Encrypt, ShiftVariant::Modulo26),
            "Uryyb, Jbeyq! 42"
        );
        assert_eq!(
            shift("Zürich", 1, Direction::Encrypt, ShiftVariant::AsciiRange),
            "Aüsjdi"
        );
    }

    #[test]
    fn test_shift_large_and_negative_keys() {
        for variant in [ShiftVariant::Modulo26, ShiftVariant::AsciiRange] {
            assert_eq!(shift("abc", 27, Direction::Encrypt, variant), "bcd");
            assert_eq!(shift("abc", -1, Direction::Encrypt, variant), "zab");
            assert_eq!(shift("abc", -53, Direction::Decrypt, variant), "bcd");
            assert_eq!(shift("abc", 52, Direction::Encrypt, variant), "abc");
        }
    }

    #[test]
    fn test_shift_extreme_keys_do_not_overflow() {
        // i64::MIN % 26 == -8, i64::MAX % 26 == 7
        assert_eq!(
            shift("a", i64::MIN, Direction::Decrypt, ShiftVariant::Modulo26),
            "i"
        );
        assert_eq!(
            shift("a", i64::MAX, Direction::Encrypt, ShiftVariant::AsciiRange),
            "h"
        );
    }

    #[test]
    fn test_zero_shift_is_identity() {
        let text = "Nothing moves here.";
        assert_eq!(shift(text, 0, Direction::Encrypt, ShiftVariant::Modulo26), text);
        assert_eq!(shift(text, 0, Direction::Decrypt, ShiftVariant::AsciiRange), text);
    }
}
