//! Push command implementation.

use crate::cli::args::PushArgs;
use crate::cli::output::Output;
use crate::config::Settings;
use crate::error::Result;
use crate::push;
use crate::vault::Vault;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PushResponse {
    pub note: String,
    pub written: String,
    pub dated: bool,
}

pub fn run(vault: &Vault, settings: &Settings, args: &PushArgs, output: &Output) -> Result<()> {
    let note = vault.resolve_note(&args.note)?;

    let dated = if args.dated {
        true
    } else if args.no_dated {
        false
    } else {
        settings.convert_to_jekyll_format
    };

    // UTC calendar date; near midnight this can differ from local time.
    let now = Utc::now().date_naive();

    let written = push::push_note(vault, &note, &settings.project_folders, dated, now)?;

    output.info(&format!(
        "Pushed {} to {}",
        note.display(),
        written.display()
    ));

    let response = PushResponse {
        note: note.to_string_lossy().to_string(),
        written: written.to_string_lossy().to_string(),
        dated,
    };
    output.print(&response)
}
