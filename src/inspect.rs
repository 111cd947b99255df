//! Everything shown for one value at once
//!
//! An [Inspection] is built in one go from a borrowed value, a bit width and an optional range,
//! so all of its representations always belong together. Change any input, build a new one.

use std::fmt::Display;

use num::Signed;
use serde::Serialize;

use crate::format::{
    binary, extract_range, grouped_octal, grouped_hex, nibbles, unsigned_view, BitCell,
};
use crate::range::BitRange;
use crate::Integer;

/// All representations of a value in a bit field of some width
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub bit_width: usize,
    /// Decimal, with thousands separators
    pub decimal: String,
    /// Decimal value of the unsigned view, only for negative values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsigned: Option<String>,
    pub octal: String,
    pub hex: String,
    pub binary: String,
    #[serde(skip)]
    pub nibbles: Vec<Vec<BitCell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeView>,
}

/// A selected range of bits, decoded as a value of its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeView {
    pub range: BitRange,
    /// Decimal, without separators
    pub value: String,
    pub octal: String,
    pub hex: String,
}

impl Inspection {
    /// Panics if `bit_width` is 0 or `range` does not fit into it.
    pub fn new(value: &Integer, bit_width: usize, range: Option<BitRange>) -> Self {
        let unsigned = if value.is_negative() {
            Some(group_thousands(&unsigned_view(value, bit_width)))
        } else {
            None
        };

        Self {
            bit_width,
            decimal: group_thousands(value),
            unsigned,
            octal: grouped_octal(value, bit_width),
            hex: grouped_hex(value, bit_width),
            binary: binary(value, bit_width),
            nibbles: nibbles(value, bit_width),
            range: range.map(|range| RangeView::new(value, bit_width, range)),
        }
    }
}

impl RangeView {
    /// The range is formatted at its own width, not at `bit_width`.
    pub fn new(value: &Integer, bit_width: usize, range: BitRange) -> Self {
        let sub = extract_range(value, bit_width, range);
        Self {
            range,
            value: sub.to_string(),
            octal: grouped_octal(&sub, range.width()),
            hex: grouped_hex(&sub, range.width()),
        }
    }
}

/// Decimal digits with a `,` between every three, like `-1,234,567`
pub fn group_thousands(value: &Integer) -> String {
    let digits = value.magnitude().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value.is_negative() {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Display for Inspection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut lines: Vec<String> = vec![self.decimal.clone()];
        if let Some(unsigned) = &self.unsigned {
            lines.push(format!("{unsigned} as unsigned"));
        }
        lines.push(format!("{} as octal", self.octal));
        lines.push(format!("{} as hexadecimal", self.hex));

        // wide enough for the highest index plus a space
        let cell = self.bit_width.saturating_sub(1).to_string().len() + 1;
        let row = |show: &dyn Fn(&BitCell) -> String| -> String {
            self.nibbles
                .iter()
                .map(|nibble| {
                    nibble
                        .iter()
                        .map(|c| format!("{:>cell$}", show(c)))
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join(" |")
        };
        lines.push(row(&|c: &BitCell| c.index.to_string()));
        lines.push(row(&|c: &BitCell| u8::from(c.bit).to_string()));

        if let Some(r) = &self.range {
            lines.push(format!("{} {} = {}", self.decimal, r.range, r.value));
            lines.push(format!("{} as octal", r.octal));
            lines.push(format!("{} as hexadecimal", r.hex));
        }

        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn int(v: i128) -> Integer {
        Integer::from(v)
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(&int(0)), "0");
        assert_eq!(group_thousands(&int(999)), "999");
        assert_eq!(group_thousands(&int(1000)), "1,000");
        assert_eq!(group_thousands(&int(-1000)), "-1,000");
        assert_eq!(group_thousands(&int(100_000)), "100,000");
        assert_eq!(group_thousands(&int(1_234_567)), "1,234,567");
        assert_eq!(
            group_thousands(&int(u64::MAX as i128)),
            "18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn test_inspect_positive() {
        let i = Inspection::new(&int(42), 64, None);
        assert_eq!(i.decimal, "42");
        assert_eq!(i.unsigned, None);
        assert_eq!(i.octal, "0 000 000 000 000 000 000 052");
        assert_eq!(i.hex, "0000 0000 0000 002A");
        assert_eq!(i.nibbles.len(), 16);
        assert_eq!(i.range, None);
    }

    #[test]
    fn test_inspect_negative() {
        let i = Inspection::new(&int(-1), 8, None);
        assert_eq!(i.decimal, "-1");
        assert_eq!(i.unsigned.as_deref(), Some("255"));
        assert_eq!(i.octal, "-001");
        assert_eq!(i.hex, "-01");
        assert_eq!(i.binary, "1111 1111");

        let i = Inspection::new(&int(-1), 64, None);
        assert_eq!(i.unsigned.as_deref(), Some("18,446,744,073,709,551,615"));
    }

    #[test]
    fn test_inspect_range() {
        let i = Inspection::new(&int(0b1011), 4, Some(BitRange::new(2, 1)));
        let r = i.range.expect("range was given");
        assert_eq!(r.range, BitRange::new(1, 2));
        assert_eq!(r.value, "1");
        assert_eq!(r.octal, "1");
        assert_eq!(r.hex, "1");
    }

    #[test]
    fn test_inspect_serialize() {
        let v = serde_json::to_value(Inspection::new(&int(-2), 4, Some(BitRange::new(0, 3))))
            .unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "bit_width": 4,
                "decimal": "-2",
                "unsigned": "14",
                "octal": "-02",
                "hex": "-2",
                "binary": "1110",
                "range": { "range": [0, 3], "value": "14", "octal": "16", "hex": "E" },
            })
        );
        let v = serde_json::to_value(Inspection::new(&int(2), 4, None)).unwrap();
        assert!(v.get("unsigned").is_none());
        assert!(v.get("range").is_none());
    }

    #[test]
    fn test_display() {
        let i = Inspection::new(&int(42), 8, Some(BitRange::new(2, 1)));
        assert_eq!(
            i.to_string(),
            [
                "42",
                "052 as octal",
                "2A as hexadecimal",
                " 7 6 5 4 | 3 2 1 0",
                " 0 0 1 0 | 1 0 1 0",
                "42 [2 .. 1] = 1",
                "1 as octal",
                "1 as hexadecimal",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_display_negative_wide_index() {
        let i = Inspection::new(&int(-1), 12, None);
        let text = i.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "4,095 as unsigned");
        assert_eq!(lines[4], " 11 10  9  8 |  7  6  5  4 |  3  2  1  0");
        assert_eq!(lines[5], "  1  1  1  1 |  1  1  1  1 |  1  1  1  1");
    }

    #[test]
    fn test_display_built_by_hand_without_bits() {
        let i = Inspection {
            bit_width: 0,
            decimal: "0".to_string(),
            unsigned: None,
            octal: String::new(),
            hex: String::new(),
            binary: String::new(),
            nibbles: Vec::new(),
            range: None,
        };
        assert_eq!(i.to_string(), "0\n as octal\n as hexadecimal\n\n");
    }
}
