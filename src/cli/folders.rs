//! Folders command implementation.

use crate::cli::args::FoldersArgs;
use crate::cli::output::Output;
use crate::config::Settings;
use crate::error::Result;
use crate::push;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct FoldersResponse {
    pub path: String,
    pub folders: Vec<String>,
    pub total: usize,
}

pub fn run(settings: &Settings, args: &FoldersArgs, output: &Output) -> Result<()> {
    let dir = match &args.path {
        Some(path) => path.clone(),
        None => PathBuf::from(settings.active_folder()),
    };
    let show_hidden = args.show_hidden || settings.show_hidden_folders;

    let folders = push::list_subfolders(&dir, show_hidden)?;

    let response = FoldersResponse {
        path: dir.to_string_lossy().to_string(),
        total: folders.len(),
        folders,
    };
    output.print(&response)
}
