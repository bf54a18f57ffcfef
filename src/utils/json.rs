//! JSON file reading and writing

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Read and deserialize a JSON file.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be opened and [`Error::Json`] if
/// the content does not match `T`.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::Json`]: crate::Error::Json
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}

/// Serialize a value to a JSON file, creating parent directories as needed.
///
/// When `pretty` is set the output is indented; otherwise it is compact.
///
/// # Errors
/// Returns an error if directory creation, file creation, or serialization fails.
pub fn save_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(writer, value)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}
