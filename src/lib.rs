//! Inspect integers of any size as two's-complement bit fields
//!
//! Give it an integer literal and a bit width, and it shows the bit pattern of the value in a
//! field of that width, its octal and hexadecimal digits in groups, and any range of bits decoded
//! as a value of its own.
//!
//! ```
//! use integer_inspector::format::{extract_range, grouped_hex, unsigned_view};
//! use integer_inspector::parse::parse;
//! use integer_inspector::range::BitRange;
//! use integer_inspector::Integer;
//!
//! let v = parse("-1").unwrap();
//! assert_eq!(unsigned_view(&v, 8).to_string(), "255");
//! assert_eq!(grouped_hex(&parse("42").unwrap(), 64), "0000 0000 0000 002A");
//! assert_eq!(extract_range(&parse("0b1011").unwrap(), 4, BitRange::new(1, 2)), Integer::from(1));
//! ```
pub mod card;
pub mod common;
pub mod errors;
pub mod format;
pub mod inspect;
pub mod parse;
pub mod range;
pub mod settings;

/// Integers of any size.
///
/// The inspector never restricts values to the bit width, the width only decides how they are
/// shown.
pub type Integer = num::BigInt;
