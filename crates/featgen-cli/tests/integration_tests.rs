//! Integration tests for featgen-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn featgen() -> Command {
    let mut cmd = Command::cargo_bin("featgen").unwrap();
    cmd.arg("--no-color");
    cmd
}

// ── Surface ───────────────────────────────────────────────────────────────────

#[test]
fn help_flag() {
    featgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("feature"))
        .stdout(predicate::str::contains("presentation"));
}

#[test]
fn version_flag() {
    featgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_command_help() {
    featgen()
        .args(["all", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--target"))
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("--dry-run"));
}

// ── Generation ────────────────────────────────────────────────────────────────

#[test]
fn presentation_creates_documented_tree_and_message() {
    let temp = TempDir::new().unwrap();

    featgen()
        .args(["presentation", "Counter", "--target"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully Generated Counter Feature",
        ));

    let base = temp.path().join("Counter/presentation");
    for child in ["models", "view", "view_models"] {
        assert!(base.join(child).is_dir(), "missing {child}");
    }
    // Only the presentation layer was generated.
    assert!(!temp.path().join("Counter/data").exists());
    assert!(!temp.path().join("Counter/domain").exists());
}

#[test]
fn all_creates_the_three_layer_union() {
    let temp = TempDir::new().unwrap();

    featgen()
        .args(["all", "checkout", "--target"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully Generated Checkout Feature",
        ));

    for dir in [
        "checkout/data/adapter",
        "checkout/data/data_source",
        "checkout/domain/contracts",
        "checkout/domain/models",
        "checkout/presentation/models",
        "checkout/presentation/view",
        "checkout/presentation/view_models",
    ] {
        assert!(temp.path().join(dir).is_dir(), "missing {dir}");
    }
}

#[test]
fn expanded_template_creates_deep_tree() {
    let temp = TempDir::new().unwrap();

    featgen()
        .args(["data", "sync", "--template", "expanded", "--target"])
        .arg(temp.path())
        .assert()
        .success();

    assert!(
        temp.path()
            .join("sync/data/adapter/contracts/remote")
            .is_dir()
    );
    assert!(temp.path().join("sync/data/data_source/local").is_dir());
}

#[test]
fn generating_twice_succeeds_and_keeps_the_tree() {
    let temp = TempDir::new().unwrap();

    for _ in 0..2 {
        featgen()
            .args(["domain", "orders", "--target"])
            .arg(temp.path())
            .assert()
            .success();
    }
    assert!(temp.path().join("orders/domain/models").is_dir());
}

#[test]
fn grouped_flag_nests_under_features() {
    let temp = TempDir::new().unwrap();

    featgen()
        .args(["all", "auth", "--grouped", "--target"])
        .arg(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("features/auth/domain").is_dir());
    assert!(!temp.path().join("auth").exists());
}

// ── Validation / errors ───────────────────────────────────────────────────────

#[test]
fn whitespace_name_is_rejected_before_any_creation() {
    let temp = TempDir::new().unwrap();

    featgen()
        .args(["all", "   ", "--target"])
        .arg(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("empty"));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn unknown_template_is_not_found_and_lists_available() {
    let temp = TempDir::new().unwrap();

    featgen()
        .args(["all", "x", "--template", "bogus", "--target"])
        .arg(temp.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("bogus"))
        .stderr(predicate::str::contains("standard"));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn dry_run_creates_nothing() {
    let temp = TempDir::new().unwrap();

    featgen()
        .args(["all", "preview", "--dry-run", "--target"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("presentation"));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn quiet_suppresses_the_success_message() {
    let temp = TempDir::new().unwrap();

    featgen()
        .args(["--quiet", "domain", "silent", "--target"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("silent/domain").is_dir());
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[test]
fn workspace_root_from_config_is_the_fallback_target() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("app");
    fs::create_dir(&root).unwrap();

    let config = temp.path().join("config.toml");
    fs::write(
        &config,
        format!("[workspace]\nroots = [{:?}]\n", root.display().to_string()),
    )
    .unwrap();

    featgen()
        .args(["domain", "billing", "--config"])
        .arg(&config)
        .assert()
        .success();

    assert!(root.join("billing/domain/contracts").is_dir());
}

#[test]
fn config_defined_template_is_selectable() {
    let temp = TempDir::new().unwrap();

    let config = temp.path().join("config.toml");
    fs::write(
        &config,
        r#"
        [[templates]]
        name = "flat"
        description = "one dir per layer"
        data = ["db"]
        domain = ["types"]
        presentation = ["widgets"]
        "#,
    )
    .unwrap();

    featgen()
        .args(["all", "mini", "--template", "flat", "--config"])
        .arg(&config)
        .args(["--target"])
        .arg(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("mini/data/db").is_dir());
    assert!(temp.path().join("mini/domain/types").is_dir());
    assert!(temp.path().join("mini/presentation/widgets").is_dir());
}

#[test]
fn missing_explicit_config_is_a_configuration_error() {
    featgen()
        .args(["templates", "--config", "/definitely/not/here.toml"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("not found"));
}

// ── templates command ─────────────────────────────────────────────────────────

#[test]
fn templates_lists_builtins() {
    featgen()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("standard"))
        .stdout(predicate::str::contains("expanded"));
}

#[test]
fn templates_json_is_parseable() {
    let output = featgen()
        .args(["templates", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let names: Vec<_> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_owned())
        .collect();
    assert!(names.contains(&"standard".to_owned()));
}

#[test]
fn completions_generate_for_bash() {
    featgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("featgen"));
}
