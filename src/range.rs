//! Selection of a contiguous run of bits

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ArgumentError;

/// An inclusive range of bit indices, where bit 0 is the least significant bit.
///
/// `low <= high` always holds; the endpoints of a selection may come in any order and are
/// swapped on construction.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct BitRange {
    low: usize,
    high: usize,
}

impl BitRange {
    /// Create a range from two endpoints in any order
    pub const fn new(a: usize, b: usize) -> Self {
        if b < a {
            Self { low: b, high: a }
        } else {
            Self { low: a, high: b }
        }
    }

    pub const fn low(&self) -> usize {
        self.low
    }

    pub const fn high(&self) -> usize {
        self.high
    }

    /// How many bits are selected
    pub const fn width(&self) -> usize {
        self.high - self.low + 1
    }

    /// Make sure every selected bit is inside a field of `bit_width` bits.
    pub fn check(self, bit_width: usize) -> Result<Self, ArgumentError> {
        if bit_width == 0 {
            return Err(ArgumentError::ZeroWidth);
        }
        if self.high >= bit_width {
            return Err(ArgumentError::RangeOutOfBounds {
                range: self,
                width: bit_width,
            });
        }
        Ok(self)
    }
}

impl Display for BitRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {}]", self.high, self.low)
    }
}

impl From<[usize; 2]> for BitRange {
    fn from(value: [usize; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<BitRange> for [usize; 2] {
    fn from(value: BitRange) -> Self {
        [value.low, value.high]
    }
}

/// Parses `LOW:HIGH`, in either order
impl FromStr for BitRange {
    type Err = ArgumentError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ArgumentError::MalformedRange(s.to_string());
        let (a, b) = s.split_once(':').ok_or_else(malformed)?;
        let a: usize = a.trim().parse().map_err(|_| malformed())?;
        let b: usize = b.trim().parse().map_err(|_| malformed())?;
        Ok(Self::new(a, b))
    }
}
