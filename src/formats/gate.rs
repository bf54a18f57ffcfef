//! Editable gate files
//!
//! One JSON file per gate, named after the gate's display name. The order of
//! `solos` is meaningful: the last entry is the gate's clear chapter, and the
//! native tables are regenerated in exactly this order.

use serde::{Deserialize, Serialize};

use crate::items::Unlock;

/// One chapter reference inside a gate file.
///
/// A `parent_id` of `0` marks the entry chapter. The presence of `unlock`
/// marks a gating chapter that blocks progress until its consumable costs are
/// paid; such a chapter has no duel file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoloInGate {
    pub id: u32,
    pub parent_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock: Option<Vec<Unlock>>,
}

/// One editable gate record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub id: u32,
    /// Owning gate ID, `0` for a root gate.
    pub parent_id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub illust_id: u32,
    #[serde(default)]
    pub illust_x: f32,
    #[serde(default)]
    pub illust_y: f32,
    pub priority: u32,
    #[serde(default)]
    pub solos: Vec<SoloInGate>,
}

impl Gate {
    /// The chapter that completes this gate: the last entry of `solos`, or
    /// `0` when the gate has no chapters.
    pub fn clear_chapter(&self) -> u32 {
        self.solos.last().map_or(0, |solo| solo.id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::items::RewardCategory;

    use super::*;

    #[test]
    fn test_clear_chapter_is_last_in_array_order() {
        let mut gate = Gate {
            id: 1,
            parent_id: 0,
            name: "Duel Strategy".to_string(),
            description: String::new(),
            illust_id: 4027,
            illust_x: 0.0,
            illust_y: 0.0,
            priority: 1,
            solos: vec![
                SoloInGate { id: 101, parent_id: 0, unlock: None },
                SoloInGate { id: 102, parent_id: 101, unlock: None },
                SoloInGate { id: 103, parent_id: 102, unlock: None },
            ],
        };
        assert_eq!(gate.clear_chapter(), 103);

        gate.solos.clear();
        assert_eq!(gate.clear_chapter(), 0);
    }

    #[test]
    fn test_unlock_omitted_for_duel_chapters() {
        let solo = SoloInGate { id: 1, parent_id: 0, unlock: None };
        let json = serde_json::to_string(&solo).unwrap();
        assert!(!json.contains("unlock"));

        let gating = SoloInGate {
            id: 2,
            parent_id: 1,
            unlock: Some(vec![Unlock { category: RewardCategory::WindOrb, value: 10 }]),
        };
        let json = serde_json::to_string(&gating).unwrap();
        let back: SoloInGate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gating);
    }
}
