//! List command implementation.

use crate::cli::args::ListArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub notes: Vec<String>,
    pub total: usize,
}

pub fn run(vault: &Vault, args: &ListArgs, output: &Output) -> Result<()> {
    let paths = if let Some(ref pattern) = args.glob {
        vault.list_notes_matching(pattern)?
    } else {
        vault.list_notes()?
    };

    let notes: Vec<String> = paths
        .iter()
        .map(|path| path.to_string_lossy().to_string())
        .collect();

    let response = ListResponse {
        total: notes.len(),
        notes,
    };
    output.print(&response)
}
