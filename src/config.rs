//! Persisted settings and the settings store.

use crate::error::{PushError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted configuration, stored as camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Candidate destination folders; the entry at index 0 is the active one.
    pub project_folders: Vec<String>,
    /// Include dot-prefixed folders when listing destination subfolders.
    pub show_hidden_folders: bool,
    /// Rename pushed notes to the Jekyll `YYYY-MM-DD-title.md` convention.
    pub convert_to_jekyll_format: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_folders: vec![String::new()],
            show_hidden_folders: false,
            convert_to_jekyll_format: false,
        }
    }
}

impl Settings {
    /// The active destination folder (always index 0).
    pub fn active_folder(&self) -> &str {
        self.project_folders
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Append a destination folder. Duplicates are allowed.
    pub fn add_folder(&mut self, folder: impl Into<String>) {
        self.project_folders.push(folder.into());
    }

    /// Remove the first entry equal to `folder`. Returns whether anything
    /// was removed. The list never ends up empty; the placeholder entry is
    /// reinstated instead.
    pub fn remove_folder(&mut self, folder: &str) -> bool {
        let Some(pos) = self.project_folders.iter().position(|f| f == folder) else {
            return false;
        };
        self.project_folders.remove(pos);
        if self.project_folders.is_empty() {
            self.project_folders.push(String::new());
        }
        true
    }

    /// Reinstate the placeholder if a persisted list came back empty.
    fn normalize(mut self) -> Self {
        if self.project_folders.is_empty() {
            self.project_folders.push(String::new());
        }
        self
    }
}

/// Key-value persistence for settings, injected so the core stays decoupled
/// from where configuration actually lives.
pub trait SettingsStore {
    /// Load settings, or `None` when the store is empty.
    fn load(&self) -> Result<Option<Settings>>;

    /// Persist settings, replacing whatever was stored before.
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Settings store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store location: `<config dir>/vaultpush/settings.json`.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            PushError::ConfigError("could not determine config directory".to_string())
        })?;
        Ok(base.join("vaultpush").join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Settings>> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let settings: Settings = serde_json::from_str(&raw)?;
        Ok(Some(settings.normalize()))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(settings)?)?;
        Ok(())
    }
}

/// Load settings from the store, falling back to defaults on an empty store.
pub fn load_or_default(store: &impl SettingsStore) -> Result<Settings> {
    Ok(store.load()?.unwrap_or_default())
}
