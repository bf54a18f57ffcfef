//! Error types for `mdsolo`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `mdsolo` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ==================== Native Data Errors ====================
    /// The native table file (Solo.json) does not exist.
    #[error("native table file not found: {}", path.display())]
    NativeTableMissing {
        /// The expected path to Solo.json.
        path: PathBuf,
    },

    /// The per-duel data directory does not exist.
    #[error("duel data directory not found: {}", path.display())]
    DuelDirMissing {
        /// The expected path to the duel directory.
        path: PathBuf,
    },

    /// A line in the illustration table could not be parsed.
    #[error("invalid illustration line {line}: {content:?}")]
    InvalidIllustrationLine {
        /// One-based line number within the file.
        line: usize,
        /// The offending line content.
        content: String,
    },

    // ==================== Editable File Errors ====================
    /// A deck referenced by a solo file could not be resolved by name.
    #[error("deck file not found: {name}")]
    DeckNotFound {
        /// The deck file name as referenced by the solo file.
        name: String,
    },

    // ==================== File System Errors ====================
    /// A path was outside the directory it was expected to live under.
    #[error("path {} is not under {}", path.display(), base.display())]
    PathNotUnderBase {
        /// The offending path.
        path: PathBuf,
        /// The base directory it was checked against.
        base: PathBuf,
    },

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDir(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err.to_string())
    }
}

/// A specialized Result type for `mdsolo` operations.
pub type Result<T> = std::result::Result<T, Error>;
