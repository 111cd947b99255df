//! Cards are independent inspections, each with its own value, width and range
//!
//! A card file holds any number of them, keyed by [Uuid]:
//!
//! ```json
//! {
//!   "cards": {
//!     "b856d760-023d-4b00-bad2-15d2b6da22fe": {
//!       "action": "inspect",
//!       "arguments": { "value": "-42", "bit_width": 8, "range": [7, 4] }
//!     }
//!   }
//! }
//! ```
//!
//! The cards are run in parallel and the response has the same keys:
//! `{"responses": {"<uuid>": <value>}}`. A card that fails gets `{"error": "<message>"}`.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;
use threadpool::ThreadPool;
use uuid::Uuid;

use crate::common::interface::{get_bit_width, get_value};
use crate::common::veprintln;
use crate::settings::Settings;

pub mod digits;
pub mod inspect;

/// What a card should show
#[derive(Debug, Clone, Copy, Hash, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Everything at once, see [Inspection](crate::inspect::Inspection)
    #[default]
    Inspect,
    /// Decimal value of the unsigned view
    Unsigned,
    /// Grouped octal digits
    Octal,
    /// Grouped hexadecimal digits
    Hex,
    /// The bit table as text
    Bits,
    /// A range of bits, decoded on its own
    ExtractRange,
}

/// One card of the card file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub action: Action,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

pub type ManyCards = HashMap<Uuid, Card>;

impl Default for Card {
    fn default() -> Self {
        Card {
            action: Action::default(),
            arguments: json!({"value": "42", "bit_width": 64}),
        }
    }
}

/// Run a single card
pub fn run_card(card: &Card, settings: Settings) -> Result<serde_json::Value> {
    let value = get_value(&card.arguments)?;
    let bit_width = get_bit_width(&card.arguments)?;
    if settings.verbose {
        veprintln("action", format_args!("{:?}", card.action));
        veprintln("value", format_args!("{value}"));
        veprintln("bit width", format_args!("{bit_width}"));
    }

    match card.action {
        Action::Inspect | Action::ExtractRange => {
            inspect::run_card(card, &value, bit_width, settings)
        }
        Action::Unsigned | Action::Octal | Action::Hex | Action::Bits => {
            digits::run_card(card, &value, bit_width, settings)
        }
    }
}

/// Run every card of a card file on a thread pool and collect the responses
pub fn run_cards(raw_json: &serde_json::Value, settings: Settings) -> Result<serde_json::Value> {
    let cards: ManyCards = serde_json::from_value(raw_json["cards"].clone())
        .inspect_err(|e| eprintln!("! could not read the cards: {e}"))?;
    eprintln!("* got {} cards", cards.len());

    let pool = ThreadPool::new(settings.worker_count());
    let (tx, rx) = mpsc::channel();
    let mut pending: HashSet<Uuid> = cards.keys().copied().collect();

    for (uuid, card) in cards {
        let tx = tx.clone();
        pool.execute(move || {
            let response = match run_card(&card, settings) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("! card {uuid} failed: {e:#}");
                    json!({"error": e.to_string()})
                }
            };
            if let Err(e) = tx.send((uuid, response)) {
                eprintln!("! could not hand over the response of card {uuid}: {e}");
            }
        });
    }
    // the workers hold the other senders, rx ends once they are all done
    drop(tx);

    let mut responses = serde_json::Map::new();
    for (uuid, response) in rx {
        pending.remove(&uuid);
        responses.insert(uuid.to_string(), response);
    }
    for uuid in pending {
        eprintln!("! card {uuid} did not finish");
        responses.insert(uuid.to_string(), json!({"error": "card did not finish"}));
    }

    Ok(json!({ "responses": responses }))
}
