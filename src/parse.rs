//! Parse integer literals of any size
//!
//! The accepted grammar:
//!
//! ```text
//! input    := space* literal space*
//! literal  := decimal | prefixed
//! decimal  := ("+" | "-")? [0-9]+
//! prefixed := "0" ("x" | "X") [0-9a-fA-F]+
//!           | "0" ("o" | "O") [0-7]+
//!           | "0" ("b" | "B") [01]+
//! ```
//!
//! Only decimal literals may carry a sign. Digit separators like `_` are not allowed, and neither
//! is an empty literal.

use num::{BigInt, Num};

use crate::errors::ParseFailure;
use crate::Integer;

/// Parse `text` into an [Integer].
///
/// Fails with a [ParseFailure] holding `text` if it does not match the grammar of this module.
///
/// ```
/// use integer_inspector::parse::parse;
/// use integer_inspector::Integer;
///
/// assert_eq!(parse("0x400").unwrap(), Integer::from(1024));
/// assert!(parse("12x4").is_err());
/// ```
pub fn parse(text: &str) -> Result<Integer, ParseFailure> {
    let literal = text.trim_matches(is_literal_space);

    let (radix, negative, digits) = if let Some(rest) = strip_prefix(literal, 'x') {
        (16, false, rest)
    } else if let Some(rest) = strip_prefix(literal, 'o') {
        (8, false, rest)
    } else if let Some(rest) = strip_prefix(literal, 'b') {
        (2, false, rest)
    } else if let Some(rest) = literal.strip_prefix('-') {
        (10, true, rest)
    } else if let Some(rest) = literal.strip_prefix('+') {
        (10, false, rest)
    } else {
        (10, false, literal)
    };

    // from_str_radix would also take signs and underscores, so check the digits ourselves
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ParseFailure::new(text));
    }

    let magnitude =
        BigInt::from_str_radix(digits, radix).map_err(|_| ParseFailure::new(text))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Strips `0x` / `0X` and friends, `marker` is the lowercase letter.
fn strip_prefix(literal: &str, marker: char) -> Option<&str> {
    let rest = literal.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}

/// White space and line terminators that may surround a literal.
///
/// Unicode `White_Space` without NEL, plus the byte order mark.
fn is_literal_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}
