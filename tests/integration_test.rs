//! Integration tests for the Vaultpush CLI using temporary vaults.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Write a settings file pointing at the given destination folder.
fn write_settings(dir: &Path, destination: &Path, dated: bool) -> std::path::PathBuf {
    let path = dir.join("settings.json");
    let settings = serde_json::json!({
        "projectFolders": [destination.to_string_lossy()],
        "showHiddenFolders": false,
        "convertToJekyllFormat": dated,
    });
    std::fs::write(&path, settings.to_string()).unwrap();
    path
}

/// Run the vaultpush CLI and return (stdout, stderr, exit code).
fn run_vaultpush(config: &Path, vault: &Path, args: &[&str]) -> (String, String, i32) {
    let binary = env!("CARGO_BIN_EXE_vaultpush");

    let output = Command::new(binary)
        .arg("--config")
        .arg(config)
        .arg("--vault")
        .arg(vault)
        .args(args)
        .output()
        .expect("Failed to execute vaultpush");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

mod push_command {
    use super::*;

    #[test]
    fn push_copies_content_with_original_name() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        std::fs::write(vault.path().join("My Note.md"), "hello").unwrap();
        let config = write_settings(vault.path(), out.path(), false);

        let (stdout, _, code) = run_vaultpush(&config, vault.path(), &["push", "My Note"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("My Note.md"));

        let written = out.path().join("My Note.md");
        assert_eq!(std::fs::read_to_string(written).unwrap(), "hello");
    }

    #[test]
    fn push_dated_renames_to_jekyll_convention() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        std::fs::write(vault.path().join("My Note.md"), "hello").unwrap();
        let config = write_settings(vault.path(), out.path(), true);

        let (_, _, code) = run_vaultpush(&config, vault.path(), &["push", "My Note"]);
        assert_eq!(code, 0);

        let written = out.path().join(format!("{}-My-Note.md", today()));
        assert_eq!(std::fs::read_to_string(written).unwrap(), "hello");
    }

    #[test]
    fn dated_flag_overrides_settings() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        std::fs::write(vault.path().join("note.md"), "x").unwrap();
        let config = write_settings(vault.path(), out.path(), false);

        let (_, _, code) = run_vaultpush(&config, vault.path(), &["push", "note", "--dated"]);
        assert_eq!(code, 0);
        assert!(out.path().join(format!("{}-note.md", today())).is_file());
    }

    #[test]
    fn no_dated_flag_overrides_settings() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        std::fs::write(vault.path().join("note.md"), "x").unwrap();
        let config = write_settings(vault.path(), out.path(), true);

        let (_, _, code) = run_vaultpush(&config, vault.path(), &["push", "note", "--no-dated"]);
        assert_eq!(code, 0);
        assert!(out.path().join("note.md").is_file());
    }

    #[test]
    fn second_push_replaces_first() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let note = vault.path().join("note.md");
        std::fs::write(&note, "first").unwrap();
        let config = write_settings(vault.path(), out.path(), false);

        let (_, _, code) = run_vaultpush(&config, vault.path(), &["push", "note"]);
        assert_eq!(code, 0);

        std::fs::write(&note, "second").unwrap();
        let (_, _, code) = run_vaultpush(&config, vault.path(), &["push", "note"]);
        assert_eq!(code, 0);

        let written = out.path().join("note.md");
        assert_eq!(std::fs::read_to_string(written).unwrap(), "second");
    }

    #[test]
    fn push_missing_note_fails() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let config = write_settings(vault.path(), out.path(), false);

        let (_, stderr, code) = run_vaultpush(&config, vault.path(), &["push", "NonExistent"]);
        assert_eq!(code, 2);
        assert!(stderr.contains("not found"));
    }

    #[test]
    fn push_to_missing_destination_fails() {
        let vault = TempDir::new().unwrap();
        std::fs::write(vault.path().join("note.md"), "x").unwrap();
        let config = write_settings(
            vault.path(),
            Path::new("/nonexistent/destination"),
            false,
        );

        let (_, stderr, code) = run_vaultpush(&config, vault.path(), &["push", "note"]);
        assert_eq!(code, 4);
        assert!(stderr.contains("Invalid destination"));
    }
}

mod validate_command {
    use super::*;

    #[test]
    fn validate_existing_destination() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let config = write_settings(vault.path(), out.path(), false);

        let (stdout, _, code) = run_vaultpush(&config, vault.path(), &["validate"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("valid"));
    }

    #[test]
    fn validate_missing_destination() {
        let vault = TempDir::new().unwrap();
        let config = write_settings(
            vault.path(),
            Path::new("/nonexistent/destination"),
            false,
        );

        let (_, stderr, code) = run_vaultpush(&config, vault.path(), &["validate"]);
        assert_eq!(code, 4);
        assert!(stderr.contains("Invalid destination"));
    }

    #[test]
    fn validate_unconfigured_placeholder() {
        let vault = TempDir::new().unwrap();
        let config = vault.path().join("settings.json");
        std::fs::write(&config, r#"{"projectFolders": [""]}"#).unwrap();

        let (_, _, code) = run_vaultpush(&config, vault.path(), &["validate"]);
        assert_eq!(code, 4);
    }
}

mod list_command {
    use super::*;

    #[test]
    fn list_vault_notes() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        std::fs::write(vault.path().join("a.md"), "A").unwrap();
        std::fs::write(vault.path().join("b.md"), "B").unwrap();
        let config = write_settings(vault.path(), out.path(), false);

        let (stdout, _, code) = run_vaultpush(&config, vault.path(), &["list"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"total\": 2"));
        assert!(stdout.contains("a.md"));
        assert!(stdout.contains("b.md"));
    }
}

mod folders_command {
    use super::*;

    #[test]
    fn folders_lists_destination_subfolders() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        std::fs::create_dir(out.path().join("_posts")).unwrap();
        std::fs::create_dir(out.path().join(".git")).unwrap();
        let config = write_settings(vault.path(), out.path(), false);

        let (stdout, _, code) = run_vaultpush(&config, vault.path(), &["folders"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("_posts"));
        assert!(!stdout.contains(".git"));
    }

    #[test]
    fn folders_show_hidden_flag() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        std::fs::create_dir(out.path().join(".git")).unwrap();
        let config = write_settings(vault.path(), out.path(), false);

        let (stdout, _, code) =
            run_vaultpush(&config, vault.path(), &["folders", "--show-hidden"]);
        assert_eq!(code, 0);
        assert!(stdout.contains(".git"));
    }
}

mod config_command {
    use super::*;

    #[test]
    fn add_folder_persists() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let config = write_settings(vault.path(), out.path(), false);

        let (_, _, code) =
            run_vaultpush(&config, vault.path(), &["config", "add-folder", "/site/_posts"]);
        assert_eq!(code, 0);

        let (stdout, _, code) = run_vaultpush(&config, vault.path(), &["config", "show"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("/site/_posts"));
    }

    #[test]
    fn remove_last_folder_reinstates_placeholder() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let config = write_settings(vault.path(), out.path(), false);
        let destination = out.path().to_string_lossy().to_string();

        let (_, _, code) =
            run_vaultpush(&config, vault.path(), &["config", "remove-folder", &destination]);
        assert_eq!(code, 0);

        let (stdout, _, code) = run_vaultpush(&config, vault.path(), &["config", "show"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"projectFolders\": [\n    \"\"\n  ]"));
    }

    #[test]
    fn remove_unknown_folder_warns() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let config = write_settings(vault.path(), out.path(), false);

        let (stdout, _, code) =
            run_vaultpush(&config, vault.path(), &["config", "remove-folder", "/nope"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("No such destination folder"));
    }

    #[test]
    fn set_dated_changes_push_behavior() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        std::fs::write(vault.path().join("note.md"), "x").unwrap();
        let config = write_settings(vault.path(), out.path(), false);

        let (_, _, code) =
            run_vaultpush(&config, vault.path(), &["config", "set-dated", "true"]);
        assert_eq!(code, 0);

        let (_, _, code) = run_vaultpush(&config, vault.path(), &["push", "note"]);
        assert_eq!(code, 0);
        assert!(out.path().join(format!("{}-note.md", today())).is_file());
    }
}
