//! The `SoloGateCards.txt` illustration table
//!
//! One comma-separated line per gate: `gateId,cardId,xOffset,yOffset`.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::formats::gate::Gate;

/// Placeholder card shown for gates without an illustration entry.
pub const FALLBACK_ILLUST_CARD: u32 = 4027;

/// Illustration card and pixel offsets for one gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateIllustration {
    pub card_id: u32,
    pub x: f32,
    pub y: f32,
}

impl Default for GateIllustration {
    fn default() -> Self {
        GateIllustration { card_id: FALLBACK_ILLUST_CARD, x: 0.0, y: 0.0 }
    }
}

/// Parse the illustration table into a map keyed by gate ID.
///
/// Blank lines are skipped; a malformed line is an error.
pub fn parse_gate_cards(lines: &[String]) -> Result<IndexMap<u32, GateIllustration>> {
    let mut table = IndexMap::new();
    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let invalid = || Error::InvalidIllustrationLine {
            line: index + 1,
            content: line.clone(),
        };

        let mut fields = line.split(',').map(str::trim);
        let gate_id: u32 = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(invalid)?;
        let card_id: u32 = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(invalid)?;
        let x: f32 = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(invalid)?;
        let y: f32 = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(invalid)?;
        if fields.next().is_some() {
            return Err(invalid());
        }

        table.insert(gate_id, GateIllustration { card_id, x, y });
    }
    Ok(table)
}

/// Serialize one illustration line per gate, in gate array order.
pub fn write_gate_cards(gates: &[Gate]) -> String {
    let mut out = String::new();
    for gate in gates {
        out.push_str(&format!(
            "{},{},{},{}\n",
            gate.id, gate.illust_id, gate.illust_x, gate.illust_y
        ));
    }
    out
}
