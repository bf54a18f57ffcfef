//! Import direction: editable files to native data
//!
//! Flattens the gate/solo/deck file tree back into the five native tables,
//! allocating fresh surrogate keys as it goes, and regenerates the per-duel
//! files plus both text resources. Existing native files are backed up first.

use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::info;

use crate::backup::backup_files;
use crate::error::{Error, Result};
use crate::formats::gate_cards::write_gate_cards;
use crate::formats::ids::write_solo_texts;
use crate::formats::{
    ChapterRecord, DeckData, DeckInfo, DuelData, Gate, GateRecord, GateTextBlock, Solo,
    SoloData, CPU, PLAYER, UNLOCK_TYPE_ITEM,
};
use crate::items::{
    random_cosmetics, rewards_to_native, unlocks_to_native, ItemMap, ITEM_CATEGORY_CONSUME,
};
use crate::utils::{find_json_files, list_files, read_json, save_json};

use super::{write_json_batched, write_text, ConvertPaths};

/// Surrogate-key state for one conversion run.
///
/// Three independent sequences, each starting at 1 and never reset between
/// gates, so every emitted ID is unique across the whole run.
#[derive(Debug)]
pub struct KeyAllocator {
    next_unlock: u32,
    next_unlock_item: u32,
    next_reward: u32,
}

impl KeyAllocator {
    pub fn new() -> Self {
        KeyAllocator { next_unlock: 1, next_unlock_item: 1, next_reward: 1 }
    }

    pub fn next_unlock_id(&mut self) -> u32 {
        let id = self.next_unlock;
        self.next_unlock += 1;
        id
    }

    pub fn next_unlock_item_id(&mut self) -> u32 {
        let id = self.next_unlock_item;
        self.next_unlock_item += 1;
        id
    }

    pub fn next_reward_id(&mut self) -> u32 {
        let id = self.next_reward;
        self.next_reward += 1;
        id
    }
}

impl Default for KeyAllocator {
    fn default() -> Self {
        KeyAllocator::new()
    }
}

/// Native table rows produced from a single gate file.
///
/// Keys are namespaced by gate, chapter, or freshly allocated surrogate IDs,
/// so merging fragments from different gates is disjoint by construction.
#[derive(Debug)]
pub struct GateTables {
    pub record: GateRecord,
    pub chapters: IndexMap<u32, ChapterRecord>,
    pub unlock: IndexMap<u32, IndexMap<u32, Vec<u32>>>,
    pub unlock_item: IndexMap<u32, ItemMap>,
    pub reward: IndexMap<u32, ItemMap>,
}

/// Flatten one gate and its chapters into native table rows.
///
/// A chapter whose solo record is missing from `solo_index` is logged and
/// omitted from the chapter table; the gate keeps referencing its ID in
/// position, which is a data-integrity warning rather than an abort.
pub fn build_gate_tables(
    gate: &Gate,
    solo_index: &IndexMap<u32, Solo>,
    alloc: &mut KeyAllocator,
) -> GateTables {
    let mut tables = GateTables {
        record: GateRecord {
            priority: gate.priority,
            parent_gate: gate.parent_id,
            view_gate: 0,
            unlock_id: 0,
            clear_chapter: gate.clear_chapter(),
        },
        chapters: IndexMap::new(),
        unlock: IndexMap::new(),
        unlock_item: IndexMap::new(),
        reward: IndexMap::new(),
    };

    for solo_ref in &gate.solos {
        if let Some(unlocks) = &solo_ref.unlock {
            // Gating chapter: consumable costs instead of a duel.
            let unlock_id = alloc.next_unlock_id();
            let unlock_item_id = alloc.next_unlock_item_id();
            tables
                .unlock
                .entry(unlock_id)
                .or_default()
                .insert(UNLOCK_TYPE_ITEM, vec![unlock_item_id]);
            tables
                .unlock_item
                .entry(unlock_item_id)
                .or_default()
                .insert(ITEM_CATEGORY_CONSUME, unlocks_to_native(unlocks));
            tables.chapters.insert(
                solo_ref.id,
                ChapterRecord {
                    parent_chapter: solo_ref.parent_id,
                    mydeck_set_id: 0,
                    set_id: 0,
                    unlock_id,
                    begin_sn: String::new(),
                    npc_id: 1,
                },
            );
            continue;
        }

        let Some(solo) = solo_index.get(&solo_ref.id) else {
            tracing::error!(
                gate_id = gate.id,
                chapter_id = solo_ref.id,
                "gate references a chapter with no solo file, omitting its table row"
            );
            continue;
        };

        let mydeck_set_id = alloc.next_reward_id();
        tables
            .reward
            .insert(mydeck_set_id, rewards_to_native(&solo.mydeck_reward));

        let set_id = if solo.rental_reward.is_empty() {
            0
        } else {
            let id = alloc.next_reward_id();
            tables.reward.insert(id, rewards_to_native(&solo.rental_reward));
            id
        };

        tables.chapters.insert(
            solo_ref.id,
            ChapterRecord {
                parent_chapter: solo_ref.parent_id,
                mydeck_set_id,
                set_id,
                unlock_id: 0,
                begin_sn: String::new(),
                npc_id: 1,
            },
        );
    }

    tables
}

/// Convert the editable files under the three roots back into native data
/// under `data_path`.
///
/// # Errors
/// Fails when a referenced deck file cannot be resolved by name, and on any
/// filesystem or JSON error. A gate chapter without a matching solo file is
/// only logged.
pub fn import_from_files(paths: &ConvertPaths) -> Result<()> {
    let gates = load_gates(&paths.gate_path)?;
    let solo_index = load_solos(&paths.solo_path)?;
    let deck_index = index_decks(&paths.deck_path);
    info!(
        gates = gates.len(),
        solos = solo_index.len(),
        decks = deck_index.len(),
        "loaded editable files"
    );

    let mut alloc = KeyAllocator::new();
    let mut data = SoloData::default();
    for gate in &gates {
        let tables = build_gate_tables(gate, &solo_index, &mut alloc);
        data.gate.insert(gate.id, tables.record);
        data.chapter.insert(gate.id, tables.chapters);
        data.unlock.extend(tables.unlock);
        data.unlock_item.extend(tables.unlock_item);
        data.reward.extend(tables.reward);
    }
    info!(gates = data.gate.len(), "rebuilt native tables");

    let duels = build_duels(&solo_index, &deck_index)?;

    persist(paths, &data, &gates, &solo_index, &duels)
}

/// Load gate files, sorted by gate ID for determinism.
fn load_gates(dir: &std::path::Path) -> Result<Vec<Gate>> {
    let mut gates = Vec::new();
    for path in find_json_files(dir) {
        let gate: Gate = read_json(&path)?;
        gates.push(gate);
    }
    gates.sort_by_key(|gate| gate.id);
    Ok(gates)
}

/// Load solo files into an ID-keyed index, sorted by chapter ID.
fn load_solos(dir: &std::path::Path) -> Result<IndexMap<u32, Solo>> {
    let mut solos = Vec::new();
    for path in find_json_files(dir) {
        let solo: Solo = read_json(&path)?;
        solos.push(solo);
    }
    solos.sort_by_key(|solo| solo.id);
    Ok(solos.into_iter().map(|solo| (solo.id, solo)).collect())
}

/// Index deck files by file name.
fn index_decks(dir: &std::path::Path) -> IndexMap<String, PathBuf> {
    find_json_files(dir)
        .into_iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().into_owned();
            Some((name, path))
        })
        .collect()
}

fn read_deck(deck_index: &IndexMap<String, PathBuf>, name: &str) -> Result<DeckData> {
    let path = deck_index
        .get(name)
        .ok_or_else(|| Error::DeckNotFound { name: name.to_string() })?;
    read_json(path)
}

/// Synthesize one duel file per solo record.
///
/// Cosmetics are rerolled from the fixed pools on every run; a re-import of
/// unchanged files is expected to change them.
fn build_duels(
    solo_index: &IndexMap<u32, Solo>,
    deck_index: &IndexMap<String, PathBuf>,
) -> Result<Vec<(u32, DuelData)>> {
    let mut rng = rand::thread_rng();
    let mut duels = Vec::with_capacity(solo_index.len());

    for solo in solo_index.values() {
        let cpu_deck = read_deck(deck_index, &solo.cpu_deck)?;
        let rental_deck = match &solo.rental_deck {
            Some(name) => read_deck(deck_index, name)?,
            None => cpu_deck.clone(),
        };

        let mut duel = DuelData {
            deck: [DeckInfo::from(&rental_deck), DeckInfo::from(&cpu_deck)],
            name: [String::new(), solo.cpu_name.clone()],
            hnum: [solo.player_hand, solo.cpu_hand],
            cpu_flag: solo.cpu_flag.clone(),
            cpu_value: solo.cpu_value,
            ..DuelData::default()
        };
        for slot in [PLAYER, CPU] {
            let cosmetics = random_cosmetics(&mut rng);
            duel.mat[slot] = cosmetics.mat;
            duel.avatar[slot] = cosmetics.avatar;
            duel.sleeve[slot] = cosmetics.sleeve;
            duel.icon[slot] = cosmetics.icon;
            duel.icon_frame[slot] = cosmetics.icon_frame;
            duel.duel_object[slot] = cosmetics.duel_object;
        }

        duels.push((solo.id, duel));
    }

    Ok(duels)
}

fn persist(
    paths: &ConvertPaths,
    data: &SoloData,
    gates: &[Gate],
    solo_index: &IndexMap<u32, Solo>,
    duels: &[(u32, DuelData)],
) -> Result<()> {
    let duel_dir = paths.duel_dir();

    let mut existing = vec![
        paths.solo_json(),
        paths.ids_file(),
        paths.gate_cards_file(),
    ];
    existing.extend(list_files(&duel_dir));
    backup_files(&existing, &paths.data_path)?;

    let duel_entries: Vec<(PathBuf, &DuelData)> = duels
        .iter()
        .map(|(chapter_id, duel)| (duel_dir.join(format!("{chapter_id}.json")), duel))
        .collect();
    write_json_batched(&duel_entries)?;
    info!(count = duel_entries.len(), "created duel files");

    save_json(paths.solo_json(), data, true)?;
    info!("wrote native tables");

    let blocks: Vec<GateTextBlock> = gates
        .iter()
        .map(|gate| GateTextBlock {
            gate_id: gate.id,
            name: gate.name.clone(),
            description: gate.description.clone(),
            chapters: gate
                .solos
                .iter()
                .filter_map(|solo_ref| {
                    solo_index
                        .get(&solo_ref.id)
                        .map(|solo| (solo.id, solo.description.clone()))
                })
                .collect(),
        })
        .collect();
    write_text(&paths.ids_file(), &write_solo_texts(&blocks))?;
    write_text(&paths.gate_cards_file(), &write_gate_cards(gates))?;
    info!("regenerated text resources");

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::items::{Reward, RewardCategory, Unlock, CONSUME_FIRE_ORB, CONSUME_GEM};

    use super::*;

    fn solo(id: u32, rental: bool) -> Solo {
        Solo {
            id,
            description: String::new(),
            cpu_deck: "1.json".to_string(),
            rental_deck: None,
            mydeck_reward: vec![Reward { category: RewardCategory::Gem, value: 50 }],
            rental_reward: if rental {
                vec![Reward { category: RewardCategory::Gem, value: 10 }]
            } else {
                vec![]
            },
            cpu_hand: 5,
            player_hand: 5,
            cpu_name: String::new(),
            cpu_flag: "None".to_string(),
            cpu_value: 98,
        }
    }

    fn duel_chapter(id: u32, parent: u32) -> crate::formats::SoloInGate {
        crate::formats::SoloInGate { id, parent_id: parent, unlock: None }
    }

    fn gate(id: u32, solos: Vec<crate::formats::SoloInGate>) -> Gate {
        Gate {
            id,
            parent_id: 0,
            name: format!("Gate {id}"),
            description: String::new(),
            illust_id: 4027,
            illust_x: 0.0,
            illust_y: 0.0,
            priority: id,
            solos,
        }
    }

    #[test]
    fn test_surrogate_keys_are_monotonic_across_gates() {
        let solo_index: IndexMap<u32, Solo> = [
            (101, solo(101, true)),
            (102, solo(102, false)),
            (201, solo(201, false)),
        ]
        .into_iter()
        .collect();

        let gate_a = gate(
            1,
            vec![
                duel_chapter(101, 0),
                crate::formats::SoloInGate {
                    id: 110,
                    parent_id: 101,
                    unlock: Some(vec![Unlock {
                        category: RewardCategory::FireOrb,
                        value: 3,
                    }]),
                },
                duel_chapter(102, 110),
            ],
        );
        let gate_b = gate(
            2,
            vec![
                crate::formats::SoloInGate {
                    id: 210,
                    parent_id: 0,
                    unlock: Some(vec![Unlock {
                        category: RewardCategory::Gem,
                        value: 100,
                    }]),
                },
                duel_chapter(201, 210),
            ],
        );

        let mut alloc = KeyAllocator::new();
        let tables_a = build_gate_tables(&gate_a, &solo_index, &mut alloc);
        let tables_b = build_gate_tables(&gate_b, &solo_index, &mut alloc);

        // Two unlock chapters over the whole run: IDs 1 and 2.
        assert_eq!(
            tables_a.unlock.keys().copied().collect::<Vec<_>>(),
            vec![1]
        );
        assert_eq!(
            tables_b.unlock.keys().copied().collect::<Vec<_>>(),
            vec![2]
        );
        assert_eq!(
            tables_a.unlock_item.keys().copied().collect::<Vec<_>>(),
            vec![1]
        );
        assert_eq!(
            tables_b.unlock_item.keys().copied().collect::<Vec<_>>(),
            vec![2]
        );
        // Four reward allocations: 101 takes 1 and 2 (rental), 102 takes 3,
        // 201 takes 4.
        assert_eq!(
            tables_a.reward.keys().copied().collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            tables_b.reward.keys().copied().collect::<Vec<_>>(),
            vec![4]
        );

        // The unlock chapter rows point at their allocated IDs.
        assert_eq!(tables_a.chapters[&110].unlock_id, 1);
        assert_eq!(tables_b.chapters[&210].unlock_id, 2);
        assert_eq!(
            tables_a.unlock_item[&1][&ITEM_CATEGORY_CONSUME][&CONSUME_FIRE_ORB],
            3
        );
        assert_eq!(
            tables_b.unlock_item[&2][&ITEM_CATEGORY_CONSUME][&CONSUME_GEM],
            100
        );
    }

    #[test]
    fn test_clear_chapter_from_array_order() {
        let solo_index: IndexMap<u32, Solo> = [
            (101, solo(101, false)),
            (102, solo(102, false)),
            (103, solo(103, false)),
        ]
        .into_iter()
        .collect();

        let mut alloc = KeyAllocator::new();
        let tables = build_gate_tables(
            &gate(
                1,
                vec![duel_chapter(101, 0), duel_chapter(102, 101), duel_chapter(103, 102)],
            ),
            &solo_index,
            &mut alloc,
        );
        assert_eq!(tables.record.clear_chapter, 103);

        let empty = build_gate_tables(&gate(2, vec![]), &solo_index, &mut alloc);
        assert_eq!(empty.record.clear_chapter, 0);
    }

    #[test]
    fn test_missing_solo_row_is_omitted() {
        let solo_index: IndexMap<u32, Solo> = [(101, solo(101, false))].into_iter().collect();

        let mut alloc = KeyAllocator::new();
        let tables = build_gate_tables(
            &gate(1, vec![duel_chapter(101, 0), duel_chapter(999, 101)]),
            &solo_index,
            &mut alloc,
        );

        assert_eq!(tables.chapters.len(), 1);
        assert!(tables.chapters.contains_key(&101));
        // The gate still names the missing chapter as its clear chapter.
        assert_eq!(tables.record.clear_chapter, 999);
    }
}
