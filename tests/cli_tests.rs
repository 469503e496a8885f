//! CLI integration tests using the REAL hostwire binary

mod common;

use common::hostwire_cmd;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    hostwire_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("message extensions"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("hosts"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("versions"));
}

#[test]
fn test_add_help_lists_examples() {
    hostwire_cmd()
        .args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EXAMPLES"))
        .stdout(predicate::str::contains("--bot-id"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_version_output() {
    hostwire_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hostwire"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_versions_lists_table() {
    hostwire_cmd()
        .arg("versions")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.8"))
        .stdout(predicate::str::contains("1.9 (default)"))
        .stdout(predicate::str::contains("1.11"))
        .stdout(predicate::str::contains("devPreview"));
}

#[test]
fn test_versions_verbose_shows_schema_urls() {
    hostwire_cmd()
        .args(["versions", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MicrosoftTeams.schema.json"));
}

#[test]
fn test_completions_bash() {
    hostwire_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hostwire"));
}

#[test]
fn test_completions_unknown_shell() {
    hostwire_cmd()
        .args(["completions", "cmd"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown shell"));
}

#[test]
fn test_unknown_command() {
    hostwire_cmd().arg("install").assert().failure();
}

#[test]
fn test_missing_workspace_directory() {
    let workspace = common::TestWorkspace::new();
    hostwire_cmd()
        .args(["check", "-w"])
        .arg(workspace.path.join("does-not-exist"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_workspace_from_env() {
    let workspace = common::TestWorkspace::teams_project();
    hostwire_cmd()
        .env("HOSTWIRE_WORKSPACE", &workspace.path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("manifest version 1.9"));
}
