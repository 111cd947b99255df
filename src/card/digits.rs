//! Cards for the single representations of a value

use anyhow::Result;

use crate::format::{binary, grouped_hex, grouped_octal, unsigned_view};
use crate::settings::Settings;
use crate::Integer;

use super::{Action, Card};

pub fn run_card(
    card: &Card,
    value: &Integer,
    bit_width: usize,
    _settings: Settings,
) -> Result<serde_json::Value> {
    Ok(match card.action {
        Action::Unsigned => serde_json::to_value(unsigned_view(value, bit_width).to_string())?,
        Action::Octal => serde_json::to_value(grouped_octal(value, bit_width))?,
        Action::Hex => serde_json::to_value(grouped_hex(value, bit_width))?,
        Action::Bits => serde_json::to_value(binary(value, bit_width))?,
        _ => unreachable!(),
    })
}
