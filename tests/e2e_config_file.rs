/// End-to-end tests for config file support
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn hive(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("vision-hive");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn create_branch(dir: &TempDir, name: &str) {
    hive(dir)
        .args([
            "branch",
            "create",
            "--name",
            name,
            "--neighborhood",
            "Downtown",
            "--tax-id",
            "12.345.678/0001-99",
        ])
        .assert()
        .code(0);
}

#[test]
fn test_discovered_config_sets_page_size_and_data_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("vision-hive.config.yml"),
        r#"
pagination:
  default_page_size: 2
  max_page_size: 3
data_file: fleet.json
"#,
    )
    .unwrap();

    for name in ["Alpha", "Bravo", "Charlie", "Delta"] {
        create_branch(&dir, name);
    }
    assert!(dir.path().join("fleet.json").exists());
    assert!(!dir.path().join("vision-hive.json").exists());

    let output = hive(&dir)
        .args(["branch", "list"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();
    let page: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(page["pageSize"], 2);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["items"][0]["name"], "Alpha");

    let output = hive(&dir)
        .args(["branch", "list", "--page-size", "50"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();
    let page: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(page["pageSize"], 3);
}

#[test]
fn test_explicit_config_advisory_policy() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("custom.yml");
    fs::write(&config_path, "capacity_policy: advisory\n").unwrap();
    let config_arg = config_path.to_str().unwrap();

    create_branch(&dir, "Branch A");
    let output = hive(&dir)
        .args(["branch", "list"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();
    let page: Value = serde_json::from_slice(&output).unwrap();
    let branch_id = page["items"][0]["id"].as_str().unwrap().to_string();

    let output = hive(&dir)
        .args([
            "yard",
            "create",
            "--name",
            "Yard 1",
            "--capacity",
            "1",
            "--branch-id",
            &branch_id,
        ])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();
    let yard: Value = serde_json::from_slice(&output).unwrap();
    let yard_id = yard["id"].as_str().unwrap().to_string();

    for plate in ["AAA0001", "AAA0002"] {
        hive(&dir)
            .args([
                "--config",
                config_arg,
                "vehicle",
                "create",
                "--plate",
                plate,
                "--priority",
                "low",
                "--yard-id",
                &yard_id,
            ])
            .assert()
            .code(0);
    }

    // Without the config the default enforced policy applies again.
    hive(&dir)
        .args([
            "vehicle",
            "create",
            "--plate",
            "AAA0003",
            "--priority",
            "low",
            "--yard-id",
            &yard_id,
        ])
        .assert()
        .code(3);
}

#[test]
fn test_unknown_config_field_warns() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("vision-hive.config.yml"),
        "capacity_policy: enforced\npage_color: blue\n",
    )
    .unwrap();

    hive(&dir)
        .args(["branch", "list"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Unknown config field 'page_color'"));
}

#[test]
fn test_invalid_config_is_application_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("vision-hive.config.yml"),
        "pagination:\n  default_page_size: 40\n  max_page_size: 20\n",
    )
    .unwrap();

    hive(&dir)
        .args(["branch", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("exceeds"));
}

#[test]
fn test_missing_explicit_config_file() {
    let dir = TempDir::new().unwrap();
    hive(&dir)
        .args(["--config", "nope.yml", "branch", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}
