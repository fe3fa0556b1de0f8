//! Config command implementations.
//!
//! Every mutation persists through the store immediately, mirroring the
//! save-on-each-change behavior of the original settings UI.

use crate::cli::args::ConfigCommands;
use crate::cli::output::{CommandResponse, Output};
use crate::config::{Settings, SettingsStore};
use crate::error::Result;

pub fn run(
    store: &impl SettingsStore,
    mut settings: Settings,
    command: &ConfigCommands,
    output: &Output,
) -> Result<()> {
    match command {
        ConfigCommands::Show => output.print(&settings),

        ConfigCommands::AddFolder(args) => {
            settings.add_folder(args.folder.clone());
            store.save(&settings)?;
            output.print(&CommandResponse::message(format!(
                "Added destination folder: {}",
                args.folder
            )))
        }

        ConfigCommands::RemoveFolder(args) => {
            let removed = settings.remove_folder(&args.folder);
            store.save(&settings)?;

            let response = if removed {
                CommandResponse::message(format!("Removed destination folder: {}", args.folder))
            } else {
                CommandResponse::message("Settings unchanged")
                    .with_warning(format!("No such destination folder: {}", args.folder))
            };
            output.print(&response)
        }

        ConfigCommands::SetDated(args) => {
            settings.convert_to_jekyll_format = args.value;
            store.save(&settings)?;
            output.print(&CommandResponse::message(format!(
                "Jekyll-dated renaming {}",
                if args.value { "enabled" } else { "disabled" }
            )))
        }

        ConfigCommands::SetShowHidden(args) => {
            settings.show_hidden_folders = args.value;
            store.save(&settings)?;
            output.print(&CommandResponse::message(format!(
                "Hidden folders in listings {}",
                if args.value { "enabled" } else { "disabled" }
            )))
        }
    }
}
