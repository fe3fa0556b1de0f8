//! Source-storage abstraction: an Obsidian-style vault read by note handle.

use crate::error::{PushError, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Represents an Obsidian-style vault. Vaultpush only ever reads from it.
#[derive(Debug, Clone)]
pub struct Vault {
    /// Root path of the vault.
    pub root: PathBuf,
}

impl Vault {
    /// Open a vault rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(PushError::VaultNotFound(root));
        }

        Ok(Self { root })
    }

    /// Get the full path to a note.
    pub fn note_path(&self, relative_path: &Path) -> PathBuf {
        self.root.join(relative_path)
    }

    /// Normalize a note path (add .md extension if needed).
    pub fn normalize_note_path(&self, path: &str) -> PathBuf {
        let path = path.trim();
        if path.ends_with(".md") {
            PathBuf::from(path)
        } else {
            PathBuf::from(format!("{}.md", path))
        }
    }

    /// Check if a note exists.
    pub fn note_exists(&self, relative_path: &Path) -> bool {
        self.note_path(relative_path).is_file()
    }

    /// Read a note's content from the vault.
    pub fn read_note(&self, relative_path: &Path) -> Result<String> {
        if !self.note_exists(relative_path) {
            return Err(PushError::NoteNotFound(relative_path.to_path_buf()));
        }
        Ok(std::fs::read_to_string(self.note_path(relative_path))?)
    }

    /// List all markdown files in the vault, sorted by path. Hidden files
    /// and directories are skipped.
    pub fn list_notes(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.root.join("**/*.md");
        let pattern_str = pattern.to_string_lossy();

        let mut notes = Vec::new();

        for entry in glob(&pattern_str)? {
            match entry {
                Ok(path) => {
                    if let Ok(relative) = path.strip_prefix(&self.root) {
                        if !relative
                            .components()
                            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
                        {
                            notes.push(relative.to_path_buf());
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Warning: glob error: {}", e);
                }
            }
        }

        notes.sort();

        Ok(notes)
    }

    /// List notes matching a glob pattern.
    pub fn list_notes_matching(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let full_pattern = self.root.join(pattern);
        let pattern_str = full_pattern.to_string_lossy();

        let mut notes = Vec::new();

        for entry in glob(&pattern_str)? {
            match entry {
                Ok(path) => {
                    if path.is_file() && path.extension().map(|e| e == "md").unwrap_or(false) {
                        if let Ok(relative) = path.strip_prefix(&self.root) {
                            notes.push(relative.to_path_buf());
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Warning: glob error: {}", e);
                }
            }
        }

        notes.sort();
        Ok(notes)
    }

    /// Resolve a note name to a path.
    ///
    /// Handles exact path matches (with or without the .md extension) and
    /// case-insensitive matches on the note name.
    pub fn resolve_note(&self, query: &str) -> Result<PathBuf> {
        let normalized = self.normalize_note_path(query);

        if self.note_exists(&normalized) {
            return Ok(normalized);
        }

        let query_path = PathBuf::from(query);
        if self.note_exists(&query_path) {
            return Ok(query_path);
        }

        // Search for notes matching the name
        let query_lower = query.to_lowercase();
        let matches: Vec<PathBuf> = self
            .list_notes()?
            .into_iter()
            .filter(|note_path| {
                note_path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(|name| name.to_lowercase() == query_lower)
                    .unwrap_or(false)
            })
            .collect();

        match matches.len() {
            0 => Err(PushError::NoteNotFound(PathBuf::from(query))),
            1 => Ok(matches.into_iter().next().unwrap()),
            _ => Err(PushError::AmbiguousNote {
                query: query.to_string(),
                count: matches.len(),
                matches,
            }),
        }
    }
}
