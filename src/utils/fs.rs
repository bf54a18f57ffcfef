//! File discovery and line-oriented reading

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Read a text file into lines, stripping trailing carriage returns.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read.
///
/// [`Error::Io`]: crate::Error::Io
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().map(|l| l.trim_end_matches('\r').to_string()).collect())
}

/// Find all .json files in a directory recursively, sorted by path.
pub fn find_json_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| {
            e.path().is_file()
                && e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

/// List every file under a directory recursively.
///
/// Returns an empty list when the directory does not exist.
pub fn list_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// Make a string safe to use as a file name.
///
/// Path separators and other reserved characters are replaced with `_`.
/// An empty result falls back to `fallback`.
pub fn sanitize_file_name(name: &str, fallback: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect();
    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("Duel Strategy", "1"), "Duel Strategy");
        assert_eq!(sanitize_file_name("a/b:c", "1"), "a_b_c");
        assert_eq!(sanitize_file_name("   ", "7"), "7");
    }

    #[test]
    fn test_find_json_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("b.json"), "{}").unwrap();
        std::fs::write(dir.path().join("sub/a.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let files = find_json_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("b.json"));
        assert!(files[1].ends_with("sub/a.json"));
    }
}
