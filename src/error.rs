//! Error types and exit codes for Vaultpush.

use std::path::PathBuf;
use thiserror::Error;

/// CLI exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTE_NOT_FOUND: i32 = 2;
    pub const AMBIGUOUS_NOTE: i32 = 3;
    pub const INVALID_DESTINATION: i32 = 4;
}

/// Main error type for Vaultpush operations.
#[derive(Error, Debug)]
pub enum PushError {
    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("Ambiguous note: {count} notes match '{query}'")]
    AmbiguousNote {
        query: String,
        count: usize,
        matches: Vec<PathBuf>,
    },

    #[error("Invalid destination folder: {0}")]
    InvalidDestination(PathBuf),

    #[error("Vault not found at: {0}")]
    VaultNotFound(PathBuf),

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl PushError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PushError::NoteNotFound(_) => exit_code::NOTE_NOT_FOUND,
            PushError::AmbiguousNote { .. } => exit_code::AMBIGUOUS_NOTE,
            PushError::InvalidDestination(_) => exit_code::INVALID_DESTINATION,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for Vaultpush operations.
pub type Result<T> = std::result::Result<T, PushError>;
