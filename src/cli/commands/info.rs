//! `mdsolo info` - summarize a native Solo.json

use std::path::Path;

use crate::formats::SoloData;
use crate::utils::read_json;

/// Print table sizes and per-gate chapter counts for a native Solo.json.
pub fn execute(source: &Path) -> anyhow::Result<()> {
    let path = if source.is_dir() {
        source.join("Solo.json")
    } else {
        source.to_path_buf()
    };
    let data: SoloData = read_json(&path)?;

    let chapter_total: usize = data.chapter.values().map(indexmap::IndexMap::len).sum();

    println!("{}:", path.display());
    println!("  Gates: {}", data.gate.len());
    println!("  Chapters: {chapter_total}");
    println!("  Unlocks: {}", data.unlock.len());
    println!("  Unlock items: {}", data.unlock_item.len());
    println!("  Rewards: {}", data.reward.len());

    for (gate_id, chapters) in &data.chapter {
        let unlock_count = chapters.values().filter(|c| c.unlock_id != 0).count();
        if unlock_count > 0 {
            println!("  Gate {gate_id}: {} chapters ({unlock_count} gated)", chapters.len());
        } else {
            println!("  Gate {gate_id}: {} chapters", chapters.len());
        }
    }

    Ok(())
}
