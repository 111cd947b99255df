//! Reads the arguments of a card from its JSON definition

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;

use crate::format::{check_bit_width, DEFAULT_BIT_WIDTH};
use crate::parse::parse;
use crate::range::BitRange;
use crate::Integer;

/// Deserialize `args[key]` into whatever is needed.
pub fn get_any<T: DeserializeOwned>(args: &serde_json::Value, key: &str) -> Result<T> {
    let v: T = serde_json::from_value(args[key].clone())
        .inspect_err(|e| eprintln!("! something went wrong when deserializing {key}: {e}"))?;
    Ok(v)
}

/// Like [get_any], but a missing key or `null` is [None].
pub fn get_any_maybe<T: DeserializeOwned>(
    args: &serde_json::Value,
    key: &str,
) -> Result<Option<T>> {
    if args[key].is_null() {
        return Ok(None);
    }
    get_any(args, key).map(Some)
}

/// Parse the integer literal in `args["value"]`.
///
/// The value must be a string, since JSON numbers can not hold every integer. A literal that does
/// not parse results in the [ParseFailure](crate::errors::ParseFailure) itself, so the message
/// for the user stays intact.
pub fn get_value(args: &serde_json::Value) -> Result<Integer> {
    let text = match args["value"].as_str() {
        Some(s) => s,
        None => return Err(anyhow!("value is not a string")),
    };
    Ok(parse(text)?)
}

/// `args["bit_width"]`, or [DEFAULT_BIT_WIDTH] if it's not there.
///
/// Widths outside of `1..=`[MAX_BIT_WIDTH](crate::format::MAX_BIT_WIDTH) are rejected here, before anything gets allocated for
/// them.
pub fn get_bit_width(args: &serde_json::Value) -> Result<usize> {
    let width: usize = get_any_maybe(args, "bit_width")?.unwrap_or(DEFAULT_BIT_WIDTH);
    Ok(check_bit_width(width)?)
}

/// `args["range"]` as `[a, b]` in any order, checked against `bit_width`.
pub fn get_range_maybe(args: &serde_json::Value, bit_width: usize) -> Result<Option<BitRange>> {
    match get_any_maybe::<BitRange>(args, "range")? {
        Some(range) => Ok(Some(range.check(bit_width)?)),
        None => Ok(None),
    }
}

/// Like [get_range_maybe], but the range has to be there.
pub fn get_range(args: &serde_json::Value, bit_width: usize) -> Result<BitRange> {
    get_range_maybe(args, bit_width)?.ok_or_else(|| anyhow!("range is missing"))
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::errors::{ArgumentError, ParseFailure};
    use crate::format::MAX_BIT_WIDTH;

    #[test]
    fn test_get_value() {
        assert_eq!(get_value(&json!({"value": "0x2A"})).unwrap(), Integer::from(42));
        assert!(get_value(&json!({"value": 42})).is_err());
        assert!(get_value(&json!({})).is_err());

        let e = get_value(&json!({"value": "12x4"})).unwrap_err();
        assert_eq!(e.downcast_ref::<ParseFailure>(), Some(&ParseFailure::new("12x4")));
        assert_eq!(e.to_string(), "\"12x4\" is not a valid number");
    }

    #[test]
    fn test_get_bit_width() {
        assert_eq!(get_bit_width(&json!({})).unwrap(), DEFAULT_BIT_WIDTH);
        assert_eq!(get_bit_width(&json!({"bit_width": null})).unwrap(), DEFAULT_BIT_WIDTH);
        assert_eq!(get_bit_width(&json!({"bit_width": 13})).unwrap(), 13);
        assert!(get_bit_width(&json!({"bit_width": 0})).is_err());
        assert_eq!(get_bit_width(&json!({"bit_width": MAX_BIT_WIDTH})).unwrap(), MAX_BIT_WIDTH);
        let e = get_bit_width(&json!({"bit_width": 4611686018427387904u64})).unwrap_err();
        assert!(matches!(
            e.downcast_ref::<ArgumentError>(),
            Some(ArgumentError::WidthTooLarge { .. })
        ));
        assert!(get_bit_width(&json!({"bit_width": -4})).is_err());
        assert!(get_bit_width(&json!({"bit_width": "8"})).is_err());
    }

    #[test]
    fn test_get_range() {
        let args = json!({"range": [7, 4]});
        assert_eq!(get_range(&args, 8).unwrap(), BitRange::new(4, 7));
        assert!(get_range(&args, 7).is_err());
        assert!(get_range(&json!({}), 8).is_err());
        assert_eq!(get_range_maybe(&json!({}), 8).unwrap(), None);
        assert!(get_range_maybe(&json!({"range": [1]}), 8).is_err());
    }
}
