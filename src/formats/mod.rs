//! On-disk formats understood by the converter
//!
//! Native game formats live alongside the tool's own editable file shapes:
//!
//! - [`solo_data`] - the five relational tables in `Solo.json`
//! - [`duel`] - per-chapter duel files under `SoloDuel/`
//! - [`ids`] - the `IDS_SOLO.txt` localization blob
//! - [`gate_cards`] - the `SoloGateCards.txt` illustration table
//! - [`gate`] / [`solo`] - one-file-per-entity editable records
//! - [`deck`] - deck list files shared by both directions

pub mod deck;
pub mod duel;
pub mod gate;
pub mod gate_cards;
pub mod ids;
pub mod solo;
pub mod solo_data;

pub use deck::{CardList, DeckData};
pub use duel::{DeckInfo, DuelData, CPU, PLAYER};
pub use gate::{Gate, SoloInGate};
pub use gate_cards::{GateIllustration, FALLBACK_ILLUST_CARD};
pub use ids::{GateTextBlock, SoloTexts};
pub use solo::Solo;
pub use solo_data::{ChapterRecord, GateRecord, SoloData, UNLOCK_TYPE_ITEM};
