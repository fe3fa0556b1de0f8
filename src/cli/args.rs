//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vaultpush")]
#[command(author, version, about = "Push vault notes to a static-site content folder", long_about = None)]
pub struct Cli {
    /// Path to the vault (defaults to the current directory)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Path to the settings file (overrides the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Push a note to the active destination folder
    Push(PushArgs),

    /// Check that the active destination folder exists
    Validate,

    /// List notes in the vault
    List(ListArgs),

    /// List subfolders of a destination folder
    Folders(FoldersArgs),

    /// Show or modify persisted settings
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct PushArgs {
    /// Note to push (path or name; the .md extension is optional)
    pub note: String,

    /// Rename to YYYY-MM-DD-title.md regardless of settings
    #[arg(long, conflicts_with = "no_dated")]
    pub dated: bool,

    /// Keep the original filename regardless of settings
    #[arg(long)]
    pub no_dated: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Glob pattern to filter notes (relative to the vault root)
    #[arg(long)]
    pub glob: Option<String>,
}

#[derive(Args, Debug)]
pub struct FoldersArgs {
    /// Folder to list (defaults to the active destination)
    pub path: Option<PathBuf>,

    /// Include dot-prefixed folders regardless of settings
    #[arg(long)]
    pub show_hidden: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the current settings
    Show,

    /// Append a destination folder
    #[command(name = "add-folder")]
    AddFolder(FolderArg),

    /// Remove a destination folder by value
    #[command(name = "remove-folder")]
    RemoveFolder(FolderArg),

    /// Turn Jekyll-dated renaming on or off
    #[command(name = "set-dated")]
    SetDated(FlagArg),

    /// Turn hidden folders in listings on or off
    #[command(name = "set-show-hidden")]
    SetShowHidden(FlagArg),
}

#[derive(Args, Debug)]
pub struct FolderArg {
    /// Destination folder path
    pub folder: String,
}

#[derive(Args, Debug)]
pub struct FlagArg {
    /// true or false
    #[arg(action = clap::ArgAction::Set)]
    pub value: bool,
}
