use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

fn dirstash() -> Command {
    Command::cargo_bin("dirstash").unwrap()
}

fn archives_in(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "zip"))
        .collect()
}

#[test]
fn backs_up_configured_directories_end_to_end() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("photos");
    fs::create_dir(&source).unwrap();
    fs::write(source.join("x.txt"), b"first").unwrap();
    fs::write(source.join("y.txt"), b"second").unwrap();

    let settings = serde_json::json!({
        "source_directories": [source, root.path().join("missing")],
        "target_directory": root.path().join("out"),
        "log_level": "Info",
    });
    fs::write(root.path().join("settings.json"), settings.to_string()).unwrap();

    dirstash()
        .current_dir(root.path())
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File copy completed."))
        .stdout(predicate::str::contains("Source directory not found"));

    // Exactly one archive, for the directory that exists
    let archives = archives_in(&root.path().join("out"));
    assert_eq!(archives.len(), 1);
    let name = archives[0].file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("photos_Backup_"));
    assert!(name.ends_with(".zip"));

    // One session log file, recording the missing directory
    let logs: Vec<_> = fs::read_dir(root.path().join("logs"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(logs.len(), 1);
    let log = fs::read_to_string(&logs[0]).unwrap();
    assert!(log.contains("missing"));
    assert!(log.lines().any(|l| l.starts_with("[Error]")));
}

#[test]
fn missing_settings_file_is_fatal() {
    let root = tempfile::tempdir().unwrap();

    dirstash()
        .current_dir(root.path())
        .assert()
        .failure()
        .code(1);

    assert!(!root.path().join("logs").exists());
}

#[test]
fn malformed_settings_file_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    fs::write(
        root.path().join("settings.json"),
        r#"{ "source_directories": ["a"] }"#,
    )
    .unwrap();

    dirstash()
        .current_dir(root.path())
        .assert()
        .failure()
        .code(1);

    assert!(!root.path().join("logs").exists());
}

#[test]
fn config_flag_overrides_default_path() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("docs");
    fs::create_dir(&source).unwrap();
    fs::write(source.join("a.txt"), b"contents").unwrap();

    let settings = serde_json::json!({
        "source_directories": [source],
        "target_directory": root.path().join("out"),
        "log_level": 1,
    });
    fs::write(root.path().join("custom.json"), settings.to_string()).unwrap();

    dirstash()
        .current_dir(root.path())
        .args(["--config", "custom.json"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File copy completed."));

    assert_eq!(archives_in(&root.path().join("out")).len(), 1);
}
