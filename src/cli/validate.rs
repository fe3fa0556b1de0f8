//! Validate command implementation.

use crate::cli::output::{CommandResponse, Output};
use crate::config::Settings;
use crate::error::Result;
use crate::push;

pub fn run(settings: &Settings, output: &Output) -> Result<()> {
    let path = push::validate_destination(&settings.project_folders)?;

    let response =
        CommandResponse::message(format!("Destination folder is valid: {}", path.display()));
    output.print(&response)
}
