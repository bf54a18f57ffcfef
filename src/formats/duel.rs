//! Per-chapter duel files
//!
//! One `<chapter_id>.json` per duel under the native `SoloDuel/` directory.
//! Every two-slot array is ordered `[player, cpu]`.

use serde::{Deserialize, Serialize};

use super::deck::{CardList, DeckData};

/// Index of the player slot in duel arrays.
pub const PLAYER: usize = 0;
/// Index of the CPU slot in duel arrays.
pub const CPU: usize = 1;

/// The card-list portion of a deck as embedded in a duel file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckInfo {
    #[serde(default)]
    pub m: CardList,
    #[serde(default)]
    pub e: CardList,
    #[serde(default)]
    pub s: CardList,
}

impl From<&DeckData> for DeckInfo {
    fn from(deck: &DeckData) -> Self {
        DeckInfo {
            m: deck.m.clone(),
            e: deck.e.clone(),
            s: deck.s.clone(),
        }
    }
}

/// One duel: both combatants' decks, hand sizes, AI tuning, and cosmetics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelData {
    #[serde(rename = "Deck", default)]
    pub deck: [DeckInfo; 2],
    #[serde(default)]
    pub name: [String; 2],
    #[serde(default = "default_hnum")]
    pub hnum: [u32; 2],
    #[serde(default)]
    pub mat: [u32; 2],
    #[serde(default)]
    pub avatar: [u32; 2],
    #[serde(default)]
    pub sleeve: [u32; 2],
    #[serde(default)]
    pub icon: [u32; 2],
    #[serde(default)]
    pub icon_frame: [u32; 2],
    #[serde(default)]
    pub duel_object: [u32; 2],
    #[serde(default = "default_cpu_flag")]
    pub cpu_flag: String,
    #[serde(default = "default_cpu_value")]
    pub cpu_value: u32,
}

fn default_hnum() -> [u32; 2] {
    [5, 5]
}

fn default_cpu_flag() -> String {
    "None".to_string()
}

fn default_cpu_value() -> u32 {
    98
}

impl Default for DuelData {
    fn default() -> Self {
        DuelData {
            deck: [DeckInfo::default(), DeckInfo::default()],
            name: [String::new(), String::new()],
            hnum: default_hnum(),
            mat: [0, 0],
            avatar: [0, 0],
            sleeve: [0, 0],
            icon: [0, 0],
            icon_frame: [0, 0],
            duel_object: [0, 0],
            cpu_flag: default_cpu_flag(),
            cpu_value: default_cpu_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_omitted_fields_use_game_defaults() {
        let duel: DuelData = serde_json::from_str("{}").unwrap();
        assert_eq!(duel.hnum, [5, 5]);
        assert_eq!(duel.cpu_flag, "None");
        assert_eq!(duel.cpu_value, 98);
        assert!(duel.deck[CPU].m.ids.is_empty());
    }

    #[test]
    fn test_slot_order_round_trip() {
        let mut duel = DuelData::default();
        duel.name[CPU] = "Kaiba".to_string();
        duel.hnum = [4, 6];

        let json = serde_json::to_string(&duel).unwrap();
        let back: DuelData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name[PLAYER], "");
        assert_eq!(back.name[CPU], "Kaiba");
        assert_eq!(back.hnum[CPU], 6);
    }
}
