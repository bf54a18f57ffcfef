//! The native `Solo.json` table file
//!
//! Five loosely-linked tables, all keyed by stringified integers in the JSON.
//! Keys stay `u32` in memory; the string conversion happens only at the serde
//! boundary (`serde_json` maps integer map keys to JSON object keys).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::items::ItemMap;

/// Unlock-type enum value for consumable item costs. The only type this tool
/// writes; other values found in existing data pass through untouched.
pub const UNLOCK_TYPE_ITEM: u32 = 1;

/// One row of the gate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateRecord {
    pub priority: u32,
    /// Owning gate ID, `0` for a root gate.
    pub parent_gate: u32,
    pub view_gate: u32,
    pub unlock_id: u32,
    /// ID of the chapter that completes this gate, `0` when it has none.
    pub clear_chapter: u32,
}

/// One row of the chapter table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRecord {
    /// Preceding chapter ID, `0` for the entry chapter of the gate.
    pub parent_chapter: u32,
    /// Reward-table key for playing with the player's own deck. Doubles as
    /// the CPU deck's derived name on export.
    pub mydeck_set_id: u32,
    /// Reward-table key for playing with the rental deck, `0` when absent.
    pub set_id: u32,
    pub unlock_id: u32,
    #[serde(default)]
    pub begin_sn: String,
    #[serde(default = "default_npc_id")]
    pub npc_id: u32,
}

fn default_npc_id() -> u32 {
    1
}

/// The consolidated native table file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoloData {
    #[serde(rename = "Gate", default)]
    pub gate: IndexMap<u32, GateRecord>,
    /// gate ID -> chapter ID -> record.
    #[serde(rename = "Chapter", default)]
    pub chapter: IndexMap<u32, IndexMap<u32, ChapterRecord>>,
    /// unlock ID -> unlock type -> unlock item IDs.
    #[serde(rename = "Unlock", default)]
    pub unlock: IndexMap<u32, IndexMap<u32, Vec<u32>>>,
    /// unlock item ID -> category -> code -> count.
    #[serde(rename = "UnlockItem", default)]
    pub unlock_item: IndexMap<u32, ItemMap>,
    /// reward ID -> category -> code -> count.
    #[serde(rename = "Reward", default)]
    pub reward: IndexMap<u32, ItemMap>,
}

impl SoloData {
    /// Look up a chapter record regardless of which gate owns it.
    pub fn find_chapter(&self, chapter_id: u32) -> Option<&ChapterRecord> {
        self.chapter
            .values()
            .find_map(|chapters| chapters.get(&chapter_id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_tables_round_trip_with_string_keys() {
        let mut data = SoloData::default();
        data.gate.insert(
            5,
            GateRecord {
                priority: 1,
                parent_gate: 0,
                view_gate: 0,
                unlock_id: 0,
                clear_chapter: 100,
            },
        );
        data.chapter.entry(5).or_default().insert(
            100,
            ChapterRecord {
                parent_chapter: 0,
                mydeck_set_id: 1,
                set_id: 0,
                unlock_id: 0,
                begin_sn: String::new(),
                npc_id: 1,
            },
        );

        let json = serde_json::to_string(&data).unwrap();
        // Integer keys are serialized as JSON object keys.
        assert!(json.contains("\"5\""));
        assert!(json.contains("\"100\""));

        let back: SoloData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_chapter_defaults() {
        let json = r#"{"parent_chapter":0,"mydeck_set_id":1,"set_id":0,"unlock_id":0}"#;
        let record: ChapterRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.begin_sn, "");
        assert_eq!(record.npc_id, 1);
    }

    #[test]
    fn test_find_chapter_across_gates() {
        let mut data = SoloData::default();
        data.chapter.entry(1).or_default().insert(
            10,
            ChapterRecord {
                parent_chapter: 0,
                mydeck_set_id: 3,
                set_id: 0,
                unlock_id: 0,
                begin_sn: String::new(),
                npc_id: 1,
            },
        );
        assert!(data.find_chapter(10).is_some());
        assert!(data.find_chapter(11).is_none());
    }
}
