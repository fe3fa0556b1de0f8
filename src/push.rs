//! Destination validation and the push operation itself.

use crate::error::{PushError, Result};
use crate::filename;
use crate::vault::Vault;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Check that the active destination folder (index 0) exists on disk.
///
/// Read-only; callers surface the error to the user and abort the push. An
/// empty list degrades to `InvalidDestination` with an empty path, the same
/// failure an unconfigured placeholder entry produces.
pub fn validate_destination(folders: &[String]) -> Result<&Path> {
    let active = folders.first().map(String::as_str).unwrap_or("");
    let path = Path::new(active);

    if !path.is_dir() {
        return Err(PushError::InvalidDestination(path.to_path_buf()));
    }

    Ok(path)
}

/// Copy one note from the vault to the active destination folder.
///
/// Validates the destination, derives the target name (Jekyll-dated when
/// `dated` is on, otherwise the source filename unchanged), reads the note
/// in full, and writes it under the destination, overwriting any existing
/// file at that path with no backup or confirmation. Returns the written
/// path.
///
/// There is no retry and no rollback: a failed write leaves nothing to
/// clean up, and concurrent pushes to the same target are last-write-wins.
pub fn push_note(
    vault: &Vault,
    note: &Path,
    folders: &[String],
    dated: bool,
    now: NaiveDate,
) -> Result<PathBuf> {
    let destination = validate_destination(folders)?;

    let source_name = note
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| PushError::NoteNotFound(note.to_path_buf()))?;
    let target = destination.join(filename::transform(source_name, dated, now));

    // The read completes before the write begins.
    let content = vault.read_note(note)?;
    std::fs::write(&target, content).map_err(|source| PushError::WriteFailed {
        path: target.clone(),
        source,
    })?;

    Ok(target)
}

/// List child directories of `dir`, sorted by name. Dot-prefixed names are
/// filtered out unless `show_hidden` is set.
pub fn list_subfolders(dir: &Path, show_hidden: bool) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(PushError::InvalidDestination(dir.to_path_buf()));
    }

    let mut folders = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !show_hidden && name.starts_with('.') {
            continue;
        }
        folders.push(name);
    }

    folders.sort();
    Ok(folders)
}
