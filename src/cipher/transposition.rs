// src/cipher/transposition.rs
//! Columnar transposition cipher
//!
//! The text is written row by row into a grid as wide as the key, then
//! read column by column in the order given by sorting the key's
//! characters. The last row may be short; missing cells are skipped,
//! never padded.
//!
//! Whitespace is swapped for [`TRANSPOSITION_PLACEHOLDER`] before
//! encryption and the placeholder is turned back into a space after
//! decryption. A literal placeholder in the plaintext therefore comes
//! back as a space.

use crate::consts::TRANSPOSITION_PLACEHOLDER;
use crate::enums::Direction;

/// Permute `text` by the columns of `key`.
///
/// Empty key or empty text returns `text` unchanged.
pub fn transpose(text: &str, key: &str, direction: Direction) -> String {
    if key.is_empty() || text.is_empty() {
        return text.to_string();
    }

    let order = column_order(key);
    match direction {
        Direction::Encrypt => read_columns(text, &order),
        Direction::Decrypt => refill_columns(text, &order),
    }
}

/// Original column indices in reading order.
///
/// Key characters are compared alphabetically without regard to case,
/// with lower case ahead of upper case for the same letter. Punctuation
/// sorts before digits, digits before letters, and non-ASCII characters
/// last in code-point order. Equal characters keep their left-to-right
/// order.
pub fn column_order(key: &str) -> Vec<usize> {
    let mut cols: Vec<(CollationKey, usize)> =
        key.chars().map(collation_key).zip(0..).collect();
    cols.sort_unstable();
    cols.into_iter().map(|(_, index)| index).collect()
}

/// (class, case-folded char, is upper case)
type CollationKey = (u8, char, bool);

fn collation_key(c: char) -> CollationKey {
    let class = if c.is_ascii_alphabetic() {
        2
    } else if c.is_ascii_digit() {
        1
    } else if c.is_ascii() {
        0
    } else {
        3
    };
    (class, c.to_ascii_lowercase(), c.is_ascii_uppercase())
}

fn read_columns(text: &str, order: &[usize]) -> String {
    let cells: Vec<char> = text
        .chars()
        .map(|c| {
            if c.is_whitespace() {
                TRANSPOSITION_PLACEHOLDER
            } else {
                c
            }
        })
        .collect();
    let width = order.len();

    let mut out = String::with_capacity(text.len());
    for &col in order {
        out.extend(cells.iter().skip(col).step_by(width));
    }
    out
}

fn refill_columns(text: &str, order: &[usize]) -> String {
    let cipher: Vec<char> = text.chars().collect();
    let len = cipher.len();
    let width = order.len();

    // The first `len % width` original columns carry one extra cell
    let (full, long_cols) = (len / width, len % width);

    let mut grid = vec![TRANSPOSITION_PLACEHOLDER; len];
    let mut source = cipher.into_iter();
    for &col in order {
        let height = full + usize::from(col < long_cols);
        for row in 0..height {
            if let Some(c) = source.next() {
                grid[row * width + col] = c;
            }
        }
    }

    grid.into_iter()
        .map(|c| if c == TRANSPOSITION_PLACEHOLDER { ' ' } else { c })
        .collect()
}
