//! Vaultpush CLI entry point.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use vaultpush::cli::args::{Cli, Commands};
use vaultpush::cli::output::Output;
use vaultpush::cli::{folders, list, push, settings, validate};
use vaultpush::config::{self, JsonFileStore};
use vaultpush::error::PushError;
use vaultpush::vault::Vault;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), PushError> {
    // Load settings from the configured store
    let store = match &cli.config {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::new(JsonFileStore::default_path()?),
    };
    let loaded = config::load_or_default(&store)?;

    // Create output helper
    let output = Output::new(cli.output_format(), cli.quiet);

    // Dispatch command
    match &cli.command {
        Commands::Push(args) => {
            let vault = open_vault(cli)?;
            push::run(&vault, &loaded, args, &output)
        }
        Commands::Validate => validate::run(&loaded, &output),
        Commands::List(args) => {
            let vault = open_vault(cli)?;
            list::run(&vault, args, &output)
        }
        Commands::Folders(args) => folders::run(&loaded, args, &output),
        Commands::Config(args) => settings::run(&store, loaded, &args.command, &output),
    }
}

fn open_vault(cli: &Cli) -> Result<Vault, PushError> {
    let root = cli.vault.clone().unwrap_or_else(|| PathBuf::from("."));
    Vault::open(root)
}
