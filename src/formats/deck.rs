//! Deck list files
//!
//! One JSON file per unique deck name. Deck names are derived from the
//! reward-table surrogate key of the chapter that references them, so two
//! chapters sharing a key intentionally share one deck file.

use serde::{Deserialize, Serialize};

/// Card IDs plus their per-copy rarity tags for one deck section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardList {
    #[serde(default)]
    pub ids: Vec<u32>,
    #[serde(default)]
    pub r: Vec<u32>,
}

/// Decorative accessories attached to a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckAccessory {
    #[serde(rename = "box")]
    pub box_id: u32,
    pub sleeve: u32,
    pub field: u32,
    pub object: u32,
    pub av_base: u32,
}

impl Default for DeckAccessory {
    fn default() -> Self {
        DeckAccessory {
            box_id: 1080001,
            sleeve: 1070001,
            field: 1090001,
            object: 1100001,
            av_base: 0,
        }
    }
}

/// A full deck file: main/extra/side lists plus cosmetics and regulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckData {
    pub name: String,
    #[serde(default)]
    pub ct: u32,
    #[serde(default)]
    pub et: u32,
    #[serde(default)]
    pub regulation_id: u32,
    #[serde(default)]
    pub regulation_name: String,
    #[serde(default)]
    pub accessory: DeckAccessory,
    #[serde(default)]
    pub m: CardList,
    #[serde(default)]
    pub e: CardList,
    #[serde(default)]
    pub s: CardList,
}

impl DeckData {
    /// Build a deck with default accessories and regulation for the given
    /// card lists.
    pub fn named(name: impl Into<String>, m: CardList, e: CardList, s: CardList) -> Self {
        DeckData {
            name: name.into(),
            ct: 0,
            et: 0,
            regulation_id: 0,
            regulation_name: "IDS_CARDMENU_REGULATION_NORMAL".to_string(),
            accessory: DeckAccessory::default(),
            m,
            e,
            s,
        }
    }
}
