//! Tests for error reporting, suggestions and exit codes.

use std::{fs, path::Path};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn solgen(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("solgen");
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SOLGEN_MANIFEST")
        .env_remove("SOLGEN_TEMPLATES_DIR");
    cmd
}

#[test]
fn test_missing_tool_fails_before_any_side_effect() {
    let temp = TempDir::new().unwrap();
    let empty_bin = temp.path().join("bin");
    fs::create_dir(&empty_bin).unwrap();

    solgen(temp.path())
        .env("PATH", &empty_bin)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("dotnet"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!temp.path().join("DataHub").exists());
}

#[test]
fn test_unknown_package_module_is_invalid_input() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("bad.toml"),
        "project_name = \"DataHub\"\nmodules = [\"Core\"]\n[packages]\nCloud = [\"AWSSDK.S3\"]\n",
    )
    .unwrap();

    solgen(temp.path())
        .args(["plan", "--manifest", "bad.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Cloud"));
}

#[test]
fn test_duplicate_module_is_invalid_input() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("dup.toml"),
        "project_name = \"DataHub\"\nmodules = [\"Core\", \"Core\"]\n",
    )
    .unwrap();

    solgen(temp.path())
        .args(["generate", "--manifest", "dup.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Core"));
}

#[test]
fn test_malformed_manifest_is_invalid_input() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.toml"), "project_name = ").unwrap();

    solgen(temp.path())
        .args(["plan", "--manifest", "broken.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse manifest"));
}

#[test]
fn test_missing_manifest_file() {
    let temp = TempDir::new().unwrap();
    solgen(temp.path())
        .args(["plan", "--manifest", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("solgen init"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_manifest_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("dir.toml")).unwrap();

    solgen(temp.path())
        .args(["plan", "--manifest", "dir.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read manifest"));
}

#[test]
fn test_missing_settings_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    solgen(temp.path())
        .args(["--config", "absent.toml", "plan"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_templates_dir_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    solgen(temp.path())
        .env("SOLGEN_TEMPLATES_DIR", temp.path().join("absent"))
        .arg("plan")
        .assert()
        .code(4);
}

#[test]
fn test_templates_dir_flag_overrides_environment() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    fs::create_dir(&templates).unwrap();

    solgen(temp.path())
        .env("SOLGEN_TEMPLATES_DIR", &templates)
        .args(["plan", "--templates-dir", "absent"])
        .assert()
        .code(4);
}

#[test]
fn test_unresolved_placeholder_in_override_fails() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    fs::create_dir(&templates).unwrap();
    fs::write(templates.join("README.md.tmpl"), "# {{NOT_A_VARIABLE}}\n").unwrap();

    solgen(temp.path())
        .env("SOLGEN_TEMPLATES_DIR", &templates)
        .arg("plan")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("NOT_A_VARIABLE"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("solgen.toml"), "keep me").unwrap();

    solgen(temp.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    assert_eq!(
        fs::read_to_string(temp.path().join("solgen.toml")).unwrap(),
        "keep me"
    );
}

#[test]
fn test_unknown_subcommand_exits_two() {
    let temp = TempDir::new().unwrap();
    solgen(temp.path()).arg("frobnicate").assert().code(2);
}
