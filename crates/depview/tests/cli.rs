//! Binary-level tests: argument parsing, exit codes, stdout payloads

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn depview(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("depview").expect("depview binary should build");
    cmd.current_dir(workdir)
        .env_remove("DEPVIEW_SETTINGS")
        .env_remove("DEPVIEW_WORKDIR")
        .env("DEPVIEW_COLOR", "never")
        .arg("--yes")
        .arg("--settings")
        .arg(workdir.join("missing-settings.toml"));
    cmd
}

fn workspace() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("package.json"), "{}").expect("package.json");
    fs::create_dir_all(dir.path().join("src")).expect("src dir");
    fs::write(dir.path().join("src/tsconfig.json"), "{}").expect("tsconfig");
    fs::write(dir.path().join("src/index.ts"), "export const a = 1;\n").expect("index.ts");
    fs::write(dir.path().join("src/plain.js"), "module.exports = {};\n").expect("plain.js");
    dir
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("depview")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("locate"))
        .stdout(predicate::str::contains("graph"));
}

#[test]
fn version_prints_package_version() {
    Command::cargo_bin("depview")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_subcommand_prints_usage_hint() {
    let dir = workspace();
    depview(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("depview --help"));
}

#[test]
fn rules_lists_builtin_rules() {
    let dir = workspace();
    depview(dir.path())
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("no-circular"))
        .stdout(predicate::str::contains("no-orphans"));
}

#[test]
fn rules_rejects_unknown_rule_toggle() {
    let dir = workspace();
    depview(dir.path())
        .args(["rules", "--rule", "no-such-rule"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-rule"));
}

#[test]
fn resolve_prints_options_json() {
    let dir = workspace();
    let output = depview(dir.path())
        .args(["resolve", "src/plain.js"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let options: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(options["outputType"], "dot");
    assert_eq!(options["moduleSystems"], serde_json::json!(["es6", "cjs"]));
    assert!(options.get("tsConfig").is_none());
}

#[test]
fn resolve_typed_source_references_type_configuration() {
    let dir = workspace();
    let output = depview(dir.path())
        .args(["resolve", "src/index.ts"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let options: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(options["tsConfig"]["fileName"], "src/tsconfig.json");
    assert_eq!(options["parser"], "tsc");
}

#[test]
fn resolve_writes_to_out_file() {
    let dir = workspace();
    depview(dir.path())
        .args(["resolve", "src/plain.js", "--out", "out/options.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(dir.path().join("out/options.json")).unwrap();
    assert!(written.contains("moduleSystems"));
}

#[test]
fn resolve_missing_target_fails() {
    let dir = workspace();
    depview(dir.path())
        .args(["resolve", "src/absent.ts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Target file not found"));
}

#[test]
fn locate_prints_type_configuration_path() {
    let dir = workspace();
    depview(dir.path())
        .args(["locate", "src/index.ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/tsconfig.json"));
}

#[test]
fn unknown_theme_is_rejected() {
    let dir = workspace();
    depview(dir.path())
        .args(["rules", "--theme", "neon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("neon"));
}
