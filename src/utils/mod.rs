//! Shared filesystem and JSON helpers

pub mod fs;
pub mod json;

pub use fs::{find_json_files, list_files, read_lines, sanitize_file_name};
pub use json::{read_json, save_json};
