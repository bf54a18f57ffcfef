//! Export direction: native data to editable files
//!
//! Reads the five native tables plus the text and illustration resources and
//! rebuilds the gate/solo/deck file tree from scratch. Existing target files
//! are backed up first.

use std::path::PathBuf;

use indexmap::{IndexMap, IndexSet};
use tracing::{info, warn};

use crate::backup::backup_files;
use crate::error::{Error, Result};
use crate::formats::{
    DeckData, DuelData, Gate, GateIllustration, Solo, SoloData, SoloInGate, SoloTexts, CPU,
    PLAYER, UNLOCK_TYPE_ITEM,
};
use crate::formats::gate_cards::parse_gate_cards;
use crate::formats::ids::parse_solo_texts;
use crate::items::{rewards_from_native, unlocks_from_native, Reward, Unlock, ITEM_CATEGORY_CONSUME};
use crate::utils::{find_json_files, list_files, read_json, read_lines, sanitize_file_name};

use super::{write_json_batched, ConvertPaths};

/// Convert the native data under `data_path` into one file per gate, solo,
/// and deck under the three editable roots.
///
/// # Errors
/// Fails when `Solo.json` or the duel directory is missing, and on any
/// filesystem or JSON error. Missing text or illustration resources are not
/// fatal; affected fields fall back to empty strings and the placeholder
/// illustration.
pub fn export_to_files(paths: &ConvertPaths) -> Result<()> {
    let solo_json = paths.solo_json();
    if !solo_json.is_file() {
        return Err(Error::NativeTableMissing { path: solo_json });
    }
    let duel_dir = paths.duel_dir();
    if !duel_dir.is_dir() {
        return Err(Error::DuelDirMissing { path: duel_dir });
    }

    let data: SoloData = read_json(&solo_json)?;
    let texts = load_texts(paths);
    let illustrations = load_illustrations(paths)?;

    let gates = build_gates(&data, &texts, &illustrations);
    info!(count = gates.len(), "built gate records");

    let (solos, decks) = build_solos_and_decks(&data, &texts, &duel_dir)?;
    info!(solos = solos.len(), decks = decks.len(), "built solo and deck records");

    let present: IndexSet<u32> = solos.iter().map(|solo| solo.id).collect();
    for (gate_id, chapter_id) in chapters_without_duels(&data, &present) {
        warn!(
            gate_id,
            chapter_id,
            "chapter has no duel file, no solo file will be written"
        );
    }

    persist(paths, &gates, &solos, &decks)
}

fn load_texts(paths: &ConvertPaths) -> SoloTexts {
    let ids_file = paths.ids_file();
    if ids_file.is_file() {
        match read_lines(&ids_file) {
            Ok(lines) => return parse_solo_texts(&lines),
            Err(e) => warn!(error = %e, "could not read text resource"),
        }
    } else {
        warn!(path = %ids_file.display(), "text resource missing, names default to empty");
    }
    SoloTexts::default()
}

fn load_illustrations(paths: &ConvertPaths) -> Result<IndexMap<u32, GateIllustration>> {
    let table_file = paths.gate_cards_file();
    if !table_file.is_file() {
        warn!(path = %table_file.display(), "illustration table missing, using placeholder");
        return Ok(IndexMap::new());
    }
    parse_gate_cards(&read_lines(&table_file)?)
}

fn build_gates(
    data: &SoloData,
    texts: &SoloTexts,
    illustrations: &IndexMap<u32, GateIllustration>,
) -> Vec<Gate> {
    let mut gates = Vec::with_capacity(data.gate.len());
    for (&gate_id, record) in &data.gate {
        let mut solos = Vec::new();
        if let Some(chapters) = data.chapter.get(&gate_id) {
            for (&chapter_id, chapter) in chapters {
                let unlock = if chapter.unlock_id == 0 {
                    None
                } else {
                    resolve_unlock(data, chapter.unlock_id)
                };
                solos.push(SoloInGate {
                    id: chapter_id,
                    parent_id: chapter.parent_chapter,
                    unlock,
                });
            }
        }

        let illustration = illustrations.get(&gate_id).copied().unwrap_or_default();
        gates.push(Gate {
            id: gate_id,
            parent_id: record.parent_gate,
            name: texts.gate_name(gate_id),
            description: texts.gate_description(gate_id),
            illust_id: illustration.card_id,
            illust_x: illustration.x,
            illust_y: illustration.y,
            priority: record.priority,
            solos,
        });
    }
    gates
}

/// Resolve an unlock record into symbolic costs.
///
/// Returns `None` when the record itself is missing; unresolvable item codes
/// inside an existing record just contribute nothing.
fn resolve_unlock(data: &SoloData, unlock_id: u32) -> Option<Vec<Unlock>> {
    let record = data.unlock.get(&unlock_id)?;
    let item_ids = record.get(&UNLOCK_TYPE_ITEM)?;
    let mut unlocks = Vec::new();
    for item_id in item_ids {
        if let Some(item) = data.unlock_item.get(item_id)
            && let Some(consumables) = item.get(&ITEM_CATEGORY_CONSUME)
        {
            unlocks.extend(unlocks_from_native(consumables));
        }
    }
    Some(unlocks)
}

fn reward_list(data: &SoloData, reward_id: u32) -> Vec<Reward> {
    data.reward
        .get(&reward_id)
        .map(rewards_from_native)
        .unwrap_or_default()
}

type DeckSet = IndexMap<String, DeckData>;

fn build_solos_and_decks(
    data: &SoloData,
    texts: &SoloTexts,
    duel_dir: &std::path::Path,
) -> Result<(Vec<Solo>, DeckSet)> {
    let mut solos = Vec::new();
    let mut decks = DeckSet::new();

    for path in find_json_files(duel_dir) {
        let Some(chapter_id) = path
            .file_stem()
            .and_then(|stem| stem.to_string_lossy().parse::<u32>().ok())
        else {
            warn!(path = %path.display(), "duel file name is not a chapter ID, skipping");
            continue;
        };

        // Duel files may reference chapters removed from every gate.
        let Some(chapter) = data.find_chapter(chapter_id) else {
            warn!(chapter_id, "duel file has no owning chapter, skipping");
            continue;
        };

        let duel: DuelData = read_json(&path)?;

        let cpu_deck_name = chapter.mydeck_set_id.to_string();
        let rental_deck_name = (chapter.set_id != 0).then(|| chapter.set_id.to_string());

        decks
            .entry(cpu_deck_name.clone())
            .or_insert_with(|| deck_from_duel(&cpu_deck_name, &duel, CPU));
        if let Some(name) = &rental_deck_name {
            decks
                .entry(name.clone())
                .or_insert_with(|| deck_from_duel(name, &duel, PLAYER));
        }

        solos.push(Solo {
            id: chapter_id,
            description: texts.chapter_description(chapter_id),
            cpu_deck: format!("{cpu_deck_name}.json"),
            rental_deck: rental_deck_name.map(|name| format!("{name}.json")),
            mydeck_reward: reward_list(data, chapter.mydeck_set_id),
            rental_reward: if chapter.set_id == 0 {
                vec![]
            } else {
                reward_list(data, chapter.set_id)
            },
            cpu_hand: duel.hnum[CPU],
            player_hand: duel.hnum[PLAYER],
            cpu_name: duel.name[CPU].clone(),
            cpu_flag: duel.cpu_flag.clone(),
            cpu_value: duel.cpu_value,
        });
    }

    Ok((solos, decks))
}

fn deck_from_duel(name: &str, duel: &DuelData, slot: usize) -> DeckData {
    let info = &duel.deck[slot];
    DeckData::named(name, info.m.clone(), info.e.clone(), info.s.clone())
}

/// Non-gating chapters whose duel file is absent from the duel directory.
///
/// Such a chapter still appears in its gate file but gets no solo file, so a
/// later import would drop its table row. Gating chapters (unlock_id set)
/// have no duel by design and are not reported.
fn chapters_without_duels(data: &SoloData, present: &IndexSet<u32>) -> Vec<(u32, u32)> {
    let mut missing = Vec::new();
    for (&gate_id, chapters) in &data.chapter {
        for (&chapter_id, chapter) in chapters {
            if chapter.unlock_id == 0 && !present.contains(&chapter_id) {
                missing.push((gate_id, chapter_id));
            }
        }
    }
    missing
}

fn persist(
    paths: &ConvertPaths,
    gates: &[Gate],
    solos: &[Solo],
    decks: &DeckSet,
) -> Result<()> {
    for base in [&paths.gate_path, &paths.solo_path, &paths.deck_path] {
        std::fs::create_dir_all(base)?;
        backup_files(&list_files(base), base)?;
    }

    let gate_entries: Vec<(PathBuf, &Gate)> = gates
        .iter()
        .map(|gate| {
            let name = sanitize_file_name(&gate.name, &gate.id.to_string());
            (paths.gate_path.join(format!("{name}.json")), gate)
        })
        .collect();
    write_json_batched(&gate_entries)?;
    info!(count = gate_entries.len(), "created gate files");

    let solo_entries: Vec<(PathBuf, &Solo)> = solos
        .iter()
        .map(|solo| (paths.solo_path.join(format!("{}.json", solo.id)), solo))
        .collect();
    write_json_batched(&solo_entries)?;
    info!(count = solo_entries.len(), "created solo files");

    let deck_entries: Vec<(PathBuf, &DeckData)> = decks
        .iter()
        .map(|(name, deck)| (paths.deck_path.join(format!("{name}.json")), deck))
        .collect();
    write_json_batched(&deck_entries)?;
    info!(count = deck_entries.len(), "created deck files");

    Ok(())
}
