//! Error types of the inspector

use thiserror::Error as ThisError;

use crate::range::BitRange;

/// The text given to [parse](crate::parse::parse) is not an integer literal.
///
/// Keeps the verbatim input, so that the caller can tell the user what exactly was wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, ThisError)]
#[error("\"{input}\" is not a valid number")]
pub struct ParseFailure {
    input: String,
}

impl ParseFailure {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The text that failed to parse, exactly as it was given
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Bad arguments from the outside, caught before they reach the formatter.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArgumentError {
    /// A bit field needs at least one bit.
    #[error("bit width must be at least 1")]
    ZeroWidth,

    /// The field is wider than the inspector is willing to show.
    #[error("bit width {width} is larger than the maximum of {max}")]
    WidthTooLarge { width: usize, max: usize },

    /// The selected bits are not all inside the field.
    #[error("bit range {range} does not fit into a width of {width}")]
    RangeOutOfBounds { range: BitRange, width: usize },

    /// The range is not written as `LOW:HIGH`.
    #[error("malformed bit range: {0}")]
    MalformedRange(String),
}
