//! Editable solo (duel chapter) files
//!
//! One JSON file per duel chapter, named after the chapter ID. Deck fields
//! hold deck file names resolved against the deck directory on import.

use serde::{Deserialize, Serialize};

use crate::items::Reward;

/// One editable duel chapter record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solo {
    pub id: u32,
    #[serde(default)]
    pub description: String,
    /// Deck file name for the CPU deck (duel slot 1).
    pub cpu_deck: String,
    /// Deck file name for the player's rental deck (duel slot 0). Falls back
    /// to the CPU deck's content when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_deck: Option<String>,
    /// Rewards for clearing with the player's own deck.
    #[serde(default)]
    pub mydeck_reward: Vec<Reward>,
    /// Rewards for clearing with the rental deck.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rental_reward: Vec<Reward>,
    #[serde(default = "default_hand")]
    pub cpu_hand: u32,
    #[serde(default = "default_hand")]
    pub player_hand: u32,
    #[serde(default)]
    pub cpu_name: String,
    #[serde(default = "default_cpu_flag")]
    pub cpu_flag: String,
    #[serde(default = "default_cpu_value")]
    pub cpu_value: u32,
}

fn default_hand() -> u32 {
    5
}

fn default_cpu_flag() -> String {
    "None".to_string()
}

fn default_cpu_value() -> u32 {
    98
}
