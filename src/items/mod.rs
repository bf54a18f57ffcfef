//! Item vocabulary shared by both conversion directions
//!
//! The game addresses items with a numeric (category, code) pair; the
//! editable files use symbolic categories instead. This module owns the
//! closed mapping between the two plus the fixed cosmetic pools used when
//! duel files are generated.

use indexmap::IndexMap;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// category -> code -> count, as stored in the UnlockItem and Reward tables.
pub type ItemMap = IndexMap<u32, IndexMap<u32, u32>>;

/// Native item category: consumables (gems, orbs).
pub const ITEM_CATEGORY_CONSUME: u32 = 1;
/// Native item category: single cards.
pub const ITEM_CATEGORY_CARD: u32 = 2;
/// Native item category: structure decks.
pub const ITEM_CATEGORY_STRUCTURE: u32 = 3;
/// Native item category: avatars.
pub const ITEM_CATEGORY_AVATAR: u32 = 4;
/// Native item category: player icons.
pub const ITEM_CATEGORY_ICON: u32 = 5;
/// Native item category: icon frames.
pub const ITEM_CATEGORY_ICON_FRAME: u32 = 6;
/// Native item category: field mats.
pub const ITEM_CATEGORY_FIELD: u32 = 7;
/// Native item category: field objects.
pub const ITEM_CATEGORY_FIELD_OBJ: u32 = 8;
/// Native item category: card sleeves.
pub const ITEM_CATEGORY_SLEEVE: u32 = 9;

/// Consumable code for gems.
pub const CONSUME_GEM: u32 = 1;
/// Consumable code for light orbs.
pub const CONSUME_LIGHT_ORB: u32 = 9;
/// Consumable code for dark orbs.
pub const CONSUME_DARK_ORB: u32 = 10;
/// Consumable code for earth orbs.
pub const CONSUME_EARTH_ORB: u32 = 11;
/// Consumable code for water orbs.
pub const CONSUME_WATER_ORB: u32 = 12;
/// Consumable code for fire orbs.
pub const CONSUME_FIRE_ORB: u32 = 13;
/// Consumable code for wind orbs.
pub const CONSUME_WIND_ORB: u32 = 14;

/// Symbolic item category used in gate and solo files.
///
/// `value` semantics differ per category: for `Gem` and the six orbs it is a
/// count, for `Card` and `Structure` it is the card / structure deck ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RewardCategory {
    Gem,
    Card,
    Structure,
    LightOrb,
    DarkOrb,
    EarthOrb,
    WaterOrb,
    FireOrb,
    WindOrb,
}

impl RewardCategory {
    /// The consumable-category code for this symbol, if it is a consumable.
    pub fn consume_code(self) -> Option<u32> {
        match self {
            RewardCategory::Gem => Some(CONSUME_GEM),
            RewardCategory::LightOrb => Some(CONSUME_LIGHT_ORB),
            RewardCategory::DarkOrb => Some(CONSUME_DARK_ORB),
            RewardCategory::EarthOrb => Some(CONSUME_EARTH_ORB),
            RewardCategory::WaterOrb => Some(CONSUME_WATER_ORB),
            RewardCategory::FireOrb => Some(CONSUME_FIRE_ORB),
            RewardCategory::WindOrb => Some(CONSUME_WIND_ORB),
            RewardCategory::Card | RewardCategory::Structure => None,
        }
    }

    /// The symbol for a consumable-category code, if one is mapped.
    pub fn from_consume_code(code: u32) -> Option<Self> {
        match code {
            CONSUME_GEM => Some(RewardCategory::Gem),
            CONSUME_LIGHT_ORB => Some(RewardCategory::LightOrb),
            CONSUME_DARK_ORB => Some(RewardCategory::DarkOrb),
            CONSUME_EARTH_ORB => Some(RewardCategory::EarthOrb),
            CONSUME_WATER_ORB => Some(RewardCategory::WaterOrb),
            CONSUME_FIRE_ORB => Some(RewardCategory::FireOrb),
            CONSUME_WIND_ORB => Some(RewardCategory::WindOrb),
            _ => None,
        }
    }
}

/// A reward entry as stored in solo files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub category: RewardCategory,
    pub value: u32,
}

/// An unlock cost entry as stored in gate files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unlock {
    pub category: RewardCategory,
    pub value: u32,
}

/// Flatten symbolic rewards into a native (category, code, count) table.
///
/// Counts are summed when several entries target the same (category, code)
/// pair, so repeated single-count `CARD`/`STRUCTURE` entries collapse into one
/// row with the total copy count.
pub fn rewards_to_native(rewards: &[Reward]) -> ItemMap {
    let mut map = ItemMap::new();
    for reward in rewards {
        let (category, code, count) = match reward.category {
            RewardCategory::Card => (ITEM_CATEGORY_CARD, reward.value, 1),
            RewardCategory::Structure => (ITEM_CATEGORY_STRUCTURE, reward.value, 1),
            other => match other.consume_code() {
                Some(code) => (ITEM_CATEGORY_CONSUME, code, reward.value),
                None => continue,
            },
        };
        *map.entry(category)
            .or_default()
            .entry(code)
            .or_insert(0) += count;
    }
    map
}

/// Expand a native reward table into symbolic entries.
///
/// `CARD` and `STRUCTURE` rows expand count N into N single-copy entries.
/// Codes and categories without a symbolic mapping are dropped; this is the
/// accepted lossy boundary of the import path.
pub fn rewards_from_native(map: &ItemMap) -> Vec<Reward> {
    let mut rewards = Vec::new();
    for (&category, codes) in map {
        match category {
            ITEM_CATEGORY_CONSUME => {
                for (&code, &count) in codes {
                    if let Some(symbol) = RewardCategory::from_consume_code(code) {
                        rewards.push(Reward { category: symbol, value: count });
                    } else {
                        tracing::debug!(code, "dropping unmapped consumable code");
                    }
                }
            }
            ITEM_CATEGORY_CARD => {
                for (&id, &count) in codes {
                    rewards.extend(std::iter::repeat_n(
                        Reward { category: RewardCategory::Card, value: id },
                        count as usize,
                    ));
                }
            }
            ITEM_CATEGORY_STRUCTURE => {
                for (&id, &count) in codes {
                    rewards.extend(std::iter::repeat_n(
                        Reward { category: RewardCategory::Structure, value: id },
                        count as usize,
                    ));
                }
            }
            _ => tracing::debug!(category, "dropping unmapped item category"),
        }
    }
    rewards
}

/// Flatten symbolic unlock costs into a consumable code -> count map.
///
/// Only consumable symbols can appear in unlock costs; anything else is
/// dropped the same way unmapped codes are.
pub fn unlocks_to_native(unlocks: &[Unlock]) -> IndexMap<u32, u32> {
    let mut map = IndexMap::new();
    for unlock in unlocks {
        if let Some(code) = unlock.category.consume_code() {
            *map.entry(code).or_insert(0) += unlock.value;
        } else {
            tracing::debug!(category = ?unlock.category, "dropping non-consumable unlock cost");
        }
    }
    map
}

/// Expand a consumable code -> count map into symbolic unlock costs.
pub fn unlocks_from_native(codes: &IndexMap<u32, u32>) -> Vec<Unlock> {
    codes
        .iter()
        .filter_map(|(&code, &count)| {
            let symbol = RewardCategory::from_consume_code(code);
            if symbol.is_none() {
                tracing::debug!(code, "dropping unmapped unlock code");
            }
            symbol.map(|category| Unlock { category, value: count })
        })
        .collect()
}

// Cosmetic pools used when duel files are regenerated. Selections are
// rerolled on every import run.
pub const MAT_POOL: &[u32] = &[1090001, 1090002, 1090003, 1090004, 1090005];
pub const AVATAR_POOL: &[u32] = &[1000001, 1000002, 1000003, 1000004];
pub const SLEEVE_POOL: &[u32] = &[1070001, 1070002, 1070003, 1070004, 1070005];
pub const ICON_POOL: &[u32] = &[1010001, 1010002, 1010003, 1010004];
pub const ICON_FRAME_POOL: &[u32] = &[1020001, 1020002, 1020003];
pub const DUEL_OBJECT_POOL: &[u32] = &[1100001, 1100002, 1100003];

/// One cosmetic selection for a duel participant slot.
#[derive(Debug, Clone, Copy)]
pub struct Cosmetics {
    pub mat: u32,
    pub avatar: u32,
    pub sleeve: u32,
    pub icon: u32,
    pub icon_frame: u32,
    pub duel_object: u32,
}

/// Pick a random cosmetic set from the fixed pools.
pub fn random_cosmetics<R: rand::Rng>(rng: &mut R) -> Cosmetics {
    Cosmetics {
        mat: pick(MAT_POOL, rng),
        avatar: pick(AVATAR_POOL, rng),
        sleeve: pick(SLEEVE_POOL, rng),
        icon: pick(ICON_POOL, rng),
        icon_frame: pick(ICON_FRAME_POOL, rng),
        duel_object: pick(DUEL_OBJECT_POOL, rng),
    }
}

fn pick<R: rand::Rng>(pool: &[u32], rng: &mut R) -> u32 {
    pool.choose(rng).copied().unwrap_or(0)
}
