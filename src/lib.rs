//! Vaultpush - push notes from Obsidian-style vaults to static-site folders.
//!
//! # Overview
//!
//! Vaultpush copies single documents out of a vault into a configured
//! destination folder on the local filesystem, optionally renaming them to
//! the Jekyll `YYYY-MM-DD-title.md` convention:
//! - Destination validation (the configured folder must exist)
//! - Pure filename derivation (date prefix, sanitization, `.md` extension)
//! - Single-shot push with unconditional overwrite
//! - Persisted settings with folder add/remove operations
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use chrono::Utc;
//! use vaultpush::{push, Vault};
//!
//! // Open a vault
//! let vault = Vault::open("/path/to/vault").unwrap();
//!
//! // Push a note to a Jekyll posts folder, dated
//! let folders = vec!["/path/to/site/_posts".to_string()];
//! let written = push::push_note(
//!     &vault,
//!     Path::new("My Note.md"),
//!     &folders,
//!     true,
//!     Utc::now().date_naive(),
//! )
//! .unwrap();
//! println!("Wrote {}", written.display());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filename;
pub mod push;
pub mod vault;

// Re-export main types at crate root
pub use config::{JsonFileStore, Settings, SettingsStore};
pub use error::{PushError, Result};
pub use vault::Vault;
