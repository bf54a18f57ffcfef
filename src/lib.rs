//! # mdsolo
//!
//! A pure-Rust library for working with Yu-Gi-Oh! Master Duel Solo Mode data.
//!
//! ## What it does
//!
//! Solo Mode content lives in dense, integer-keyed relational tables
//! (`Solo.json`), line-oriented text resources, and per-duel JSON files.
//! `mdsolo` converts that native representation to and from a human-editable
//! tree: one file per gate, one per duel chapter, one per deck.
//!
//! - **Export** - native tables + resources become editable files
//! - **Import** - editable files regenerate the native data wholesale
//! - Both directions move the files they are about to overwrite into a
//!   timestamped backup directory first
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdsolo::converter::{export_to_files, import_from_files, ConvertPaths};
//!
//! let paths = ConvertPaths {
//!     gate_path: "work/gates".into(),
//!     solo_path: "work/solos".into(),
//!     deck_path: "work/decks".into(),
//!     data_path: "game/data".into(),
//! };
//!
//! // Native data -> editable files
//! export_to_files(&paths)?;
//!
//! // Editable files -> native data
//! import_from_files(&paths)?;
//! # Ok::<(), mdsolo::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `mdsolo` command-line binary

pub mod backup;
pub mod converter;
pub mod error;
pub mod formats;
pub mod items;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::backup::backup_files;
    pub use crate::converter::{export_to_files, import_from_files, ConvertPaths};
    pub use crate::error::{Error, Result};
    pub use crate::formats::{
        DeckData, DuelData, Gate, Solo, SoloData, SoloInGate, SoloTexts,
    };
    pub use crate::items::{Reward, RewardCategory, Unlock};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
