//! Bidirectional conversion between native data and editable files
//!
//! [`export::export_to_files`] reads the native tables and resources under
//! the data root and writes one file per gate, solo, and deck. [`import::import_from_files`]
//! reads those editable files back and regenerates the native data wholesale.
//! Both directions back up the files they are about to overwrite first.

pub mod export;
pub mod import;

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::utils::save_json;

pub use export::export_to_files;
pub use import::import_from_files;

/// Width of one write batch. Writes within a batch run in parallel; batches
/// commit independently.
pub const WRITE_BATCH: usize = 10;

/// The four filesystem roots a conversion run touches.
#[derive(Debug, Clone)]
pub struct ConvertPaths {
    /// Editable gate files, one per gate.
    pub gate_path: PathBuf,
    /// Editable solo files, one per duel chapter.
    pub solo_path: PathBuf,
    /// Deck files, one per unique deck name.
    pub deck_path: PathBuf,
    /// The native data root.
    pub data_path: PathBuf,
}

impl ConvertPaths {
    /// The consolidated native table file.
    pub fn solo_json(&self) -> PathBuf {
        self.data_path.join("Solo.json")
    }

    /// The per-duel file directory.
    pub fn duel_dir(&self) -> PathBuf {
        self.data_path.join("SoloDuel")
    }

    /// The localization text resource.
    pub fn ids_file(&self) -> PathBuf {
        self.data_path.join("ClientData").join("IDS").join("IDS_SOLO.txt")
    }

    /// The illustration text table.
    pub fn gate_cards_file(&self) -> PathBuf {
        self.data_path.join("ClientData").join("SoloGateCards.txt")
    }
}

/// Write a set of JSON files in bounded-width parallel batches.
///
/// Ordering across batches does not matter; every record is keyed by its
/// file name. The first error fails the run, though earlier batches may have
/// committed already.
pub(crate) fn write_json_batched<T: Serialize + Sync>(entries: &[(PathBuf, T)]) -> Result<()> {
    for chunk in entries.chunks(WRITE_BATCH) {
        chunk
            .par_iter()
            .map(|(path, value)| save_json(path, value, true))
            .collect::<Result<Vec<()>>>()?;
    }
    Ok(())
}

/// Write a text resource, creating parent directories as needed.
pub(crate) fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_layout() {
        let paths = ConvertPaths {
            gate_path: PathBuf::from("/work/gates"),
            solo_path: PathBuf::from("/work/solos"),
            deck_path: PathBuf::from("/work/decks"),
            data_path: PathBuf::from("/game/data"),
        };
        assert_eq!(paths.solo_json(), PathBuf::from("/game/data/Solo.json"));
        assert_eq!(paths.duel_dir(), PathBuf::from("/game/data/SoloDuel"));
        assert_eq!(
            paths.ids_file(),
            PathBuf::from("/game/data/ClientData/IDS/IDS_SOLO.txt")
        );
        assert_eq!(
            paths.gate_cards_file(),
            PathBuf::from("/game/data/ClientData/SoloGateCards.txt")
        );
    }

    #[test]
    fn test_write_json_batched() {
        let dir = tempfile::tempdir().unwrap();
        let entries: Vec<(PathBuf, u32)> = (0..25)
            .map(|i| (dir.path().join(format!("{i}.json")), i))
            .collect();

        write_json_batched(&entries).unwrap();
        for (path, value) in &entries {
            let back: u32 = crate::utils::read_json(path).unwrap();
            assert_eq!(back, *value);
        }
    }
}
