//! Cards for the whole inspection and for a decoded range of bits

use anyhow::Result;

use crate::common::interface::{get_range, get_range_maybe};
use crate::common::veprintln;
use crate::inspect::{Inspection, RangeView};
use crate::settings::Settings;
use crate::Integer;

use super::{Action, Card};

pub fn run_card(
    card: &Card,
    value: &Integer,
    bit_width: usize,
    settings: Settings,
) -> Result<serde_json::Value> {
    Ok(match card.action {
        Action::Inspect => {
            let range = get_range_maybe(&card.arguments, bit_width)?;
            let inspection = Inspection::new(value, bit_width, range);
            if settings.verbose {
                eprintln!("? inspection\n{inspection}");
            }
            serde_json::to_value(&inspection)?
        }
        Action::ExtractRange => {
            let range = get_range(&card.arguments, bit_width)?;
            let view = RangeView::new(value, bit_width, range);
            if settings.verbose {
                veprintln("range", format_args!("{range} = {}", view.value));
            }
            serde_json::to_value(&view)?
        }
        _ => unreachable!(),
    })
}
