//! Two's-complement views of an [Integer] inside a bit field
//!
//! Every function here takes the value together with the width of the field it lives in. Widths
//! must be at least 1 and ranges must lie inside the field, otherwise these functions panic.
//! Callers taking outside input check that first, see [check_bit_width] and [BitRange::check].

use num::{One, Signed};
use serde::{Deserialize, Serialize};

use crate::errors::ArgumentError;
use crate::range::BitRange;
use crate::Integer;

/// Field width used when nothing else is given
pub const DEFAULT_BIT_WIDTH: usize = 64;
/// Widest field accepted from the outside, every representation grows linearly with the width
pub const MAX_BIT_WIDTH: usize = 1 << 16;
/// Bits per group in the bit table
pub const NIBBLE: usize = 4;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Bases for [grouped] digit strings
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Radix {
    Octal,
    Hex,
}

impl Radix {
    pub const fn base(self) -> u32 {
        match self {
            Radix::Octal => 8,
            Radix::Hex => 16,
        }
    }

    pub const fn bits_per_digit(self) -> usize {
        match self {
            Radix::Octal => 3,
            Radix::Hex => 4,
        }
    }

    /// Digits per space separated group
    pub const fn group_len(self) -> usize {
        match self {
            Radix::Octal => 3,
            Radix::Hex => 4,
        }
    }

    /// Digits needed to show every bit of a field of `bit_width` bits
    pub const fn digit_count(self, bit_width: usize) -> usize {
        bit_width.div_ceil(self.bits_per_digit())
    }
}

/// One cell of the bit table
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitCell {
    /// Position in the field, 0 is the least significant bit
    pub index: usize,
    pub bit: bool,
}

/// Make sure a width from the outside is in `1..=MAX_BIT_WIDTH`.
pub fn check_bit_width(bit_width: usize) -> Result<usize, ArgumentError> {
    if bit_width == 0 {
        return Err(ArgumentError::ZeroWidth);
    }
    if bit_width > MAX_BIT_WIDTH {
        return Err(ArgumentError::WidthTooLarge {
            width: bit_width,
            max: MAX_BIT_WIDTH,
        });
    }
    Ok(bit_width)
}

/// `(1 << bit_width) - 1`
fn mask(bit_width: usize) -> Integer {
    (Integer::one() << bit_width) - Integer::one()
}

#[inline]
fn assert_width(bit_width: usize) {
    assert!(bit_width >= 1, "a bit field needs at least one bit");
}

/// Reinterpret `value` as an unsigned field of `bit_width` bits.
///
/// This keeps the `bit_width` low bits of the two's-complement representation, so negative values
/// wrap around: `-1` in 8 bits is `255`. The result is always in `[0, 2^bit_width - 1]`.
pub fn unsigned_view(value: &Integer, bit_width: usize) -> Integer {
    assert_width(bit_width);
    value & &mask(bit_width)
}

/// The bits of the [unsigned view](unsigned_view), least significant first.
pub fn bits(value: &Integer, bit_width: usize) -> Vec<bool> {
    let mut v = unsigned_view(value, bit_width);
    let mut bits = Vec::with_capacity(bit_width);
    for _ in 0..bit_width {
        bits.push(v.bit(0));
        v >>= 1usize;
    }
    bits
}

/// The bit table in reading order.
///
/// Bits are grouped into [nibbles](NIBBLE) by index: bits 0 to 3 are the first group, 4 to 7 the
/// second and so on, the last group may be shorter. The groups are then ordered most significant
/// first, and so are the bits inside every group.
pub fn nibbles(value: &Integer, bit_width: usize) -> Vec<Vec<BitCell>> {
    let cells: Vec<BitCell> = bits(value, bit_width)
        .into_iter()
        .enumerate()
        .map(|(index, bit)| BitCell { index, bit })
        .collect();

    cells
        .chunks(NIBBLE)
        .rev()
        .map(|nibble| nibble.iter().rev().copied().collect())
        .collect()
}

/// The bit table as text, like `1 0110 1010`
pub fn binary(value: &Integer, bit_width: usize) -> String {
    nibbles(value, bit_width)
        .iter()
        .map(|nibble| {
            nibble
                .iter()
                .map(|cell| if cell.bit { '1' } else { '0' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Grouped octal digits of `value`, see [grouped].
pub fn grouped_octal(value: &Integer, bit_width: usize) -> String {
    grouped(value, bit_width, Radix::Octal)
}

/// Grouped hexadecimal digits of `value`, see [grouped].
pub fn grouped_hex(value: &Integer, bit_width: usize) -> String {
    grouped(value, bit_width, Radix::Hex)
}

/// Write `value` in sign-magnitude form with a fixed number of digits.
///
/// Exactly [Radix::digit_count] digits of the magnitude are shown: leading zeros are kept, digits
/// beyond that count are dropped. Digits are grouped by [Radix::group_len], counted from the least
/// significant digit, so only the leftmost group may be short. Groups are separated by a single
/// space and a negative value gets a leading `-`.
///
/// ```
/// use integer_inspector::format::{grouped, Radix};
/// use integer_inspector::Integer;
///
/// assert_eq!(grouped(&Integer::from(42), 64, Radix::Hex), "0000 0000 0000 002A");
/// assert_eq!(grouped(&Integer::from(-1), 8, Radix::Octal), "-001");
/// ```
pub fn grouped(value: &Integer, bit_width: usize, radix: Radix) -> String {
    assert_width(bit_width);

    // least significant digit first
    let mut digits: Vec<u8> = value.magnitude().to_radix_le(radix.base());
    digits.resize(radix.digit_count(bit_width), 0);

    let groups: Vec<String> = digits
        .chunks(radix.group_len())
        .rev()
        .map(|group| {
            group
                .iter()
                .rev()
                .map(|&d| DIGITS[d as usize] as char)
                .collect()
        })
        .collect();

    let sign = if value.is_negative() { "-" } else { "" };
    format!("{sign}{}", groups.join(" "))
}

/// The bits of `range` from the [unsigned view](unsigned_view), as a value of their own.
///
/// The result is a field of [BitRange::width] bits and should be formatted at that width, not
/// sliced out of the strings of the whole field.
pub fn extract_range(value: &Integer, bit_width: usize, range: BitRange) -> Integer {
    assert!(
        range.high() < bit_width,
        "bit range {range} is outside of a field of {bit_width} bits"
    );
    (unsigned_view(value, bit_width) >> range.low()) & mask(range.width())
}
