//! Backup-before-overwrite coordination
//!
//! Every destructive directory-wide write is preceded by moving the existing
//! files into a timestamped sibling directory, preserving paths relative to
//! the base. The originals stay recoverable even if the subsequent write is
//! interrupted.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name fragment between the base directory name and the timestamp.
pub const BACKUP_POSTFIX: &str = "_backup";

/// Compute the backup directory for `base` at the given minute.
///
/// The result is a sibling of `base` named
/// `<base>_backup_<YYYYMMDD_HHMM>`.
pub fn backup_dir_for(base: &Path, now: chrono::DateTime<chrono::Local>) -> PathBuf {
    let stamp = now.format("%Y%m%d_%H%M");
    let dir_name = match base.file_name() {
        Some(name) => format!("{}{BACKUP_POSTFIX}_{stamp}", name.to_string_lossy()),
        None => format!("{BACKUP_POSTFIX}_{stamp}"),
    };
    match base.parent() {
        Some(parent) => parent.join(dir_name),
        None => PathBuf::from(dir_name),
    }
}

/// Move `paths` out of `base` into a fresh timestamped backup directory.
///
/// Each file lands at the same path relative to `base`. A file that no longer
/// exists at move time is skipped; reruns and partially-written state are
/// expected. Any pre-existing directory at the computed backup path is
/// removed first.
///
/// Returns the backup directory, which exists even when `paths` is empty.
///
/// # Errors
/// Returns [`Error::PathNotUnderBase`] if a path does not live under `base`,
/// and [`Error::Io`] for any filesystem failure other than a vanished source
/// file.
///
/// [`Error::PathNotUnderBase`]: crate::Error::PathNotUnderBase
/// [`Error::Io`]: crate::Error::Io
pub fn backup_files(paths: &[PathBuf], base: &Path) -> Result<PathBuf> {
    let backup_dir = backup_dir_for(base, chrono::Local::now());
    if backup_dir.exists() {
        std::fs::remove_dir_all(&backup_dir)?;
    }
    std::fs::create_dir_all(&backup_dir)?;

    let mut moved = 0usize;
    for path in paths {
        let relative = path
            .strip_prefix(base)
            .map_err(|_| Error::PathNotUnderBase {
                path: path.clone(),
                base: base.to_path_buf(),
            })?;
        let dest = backup_dir.join(relative);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        match std::fs::rename(path, &dest) {
            Ok(()) => moved += 1,
            // Already gone: racing a previous partial run is fine.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }

    tracing::info!(
        moved,
        backup = %backup_dir.display(),
        "backed up existing files"
    );
    Ok(backup_dir)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::utils::list_files;

    use super::*;

    #[test]
    fn test_backup_dir_name() {
        let now = chrono::Local::now();
        let dir = backup_dir_for(Path::new("/tmp/gates"), now);
        let name = dir.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("gates_backup_"));
        assert_eq!(dir.parent().unwrap(), Path::new("/tmp"));
        // One-minute resolution: YYYYMMDD_HHMM is 13 characters.
        assert_eq!(name.len(), "gates_backup_".len() + 13);
    }

    #[test]
    fn test_backup_moves_files_preserving_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("gates");
        std::fs::create_dir_all(base.join("sub")).unwrap();
        std::fs::write(base.join("a.json"), "{}").unwrap();
        std::fs::write(base.join("sub/b.json"), "{}").unwrap();

        let paths = list_files(&base);
        assert_eq!(paths.len(), 2);
        let backup = backup_files(&paths, &base).unwrap();

        // Originals are gone from the base directory.
        assert!(!base.join("a.json").exists());
        assert!(!base.join("sub/b.json").exists());
        // And present at the same relative paths in the backup.
        assert!(backup.join("a.json").exists());
        assert!(backup.join("sub/b.json").exists());
    }

    #[test]
    fn test_vanished_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("gates");
        std::fs::create_dir_all(&base).unwrap();

        let ghost = base.join("missing.json");
        let backup = backup_files(&[ghost], &base).unwrap();
        assert!(backup.is_dir());
    }

    #[test]
    fn test_path_outside_base_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("gates");
        std::fs::create_dir_all(&base).unwrap();
        let outsider = dir.path().join("elsewhere.json");
        std::fs::write(&outsider, "{}").unwrap();

        let err = backup_files(&[outsider], &base).unwrap_err();
        assert!(matches!(err, Error::PathNotUnderBase { .. }));
    }
}
