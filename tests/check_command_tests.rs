//! Integration tests for the check command

mod common;

use common::{TestWorkspace, hostwire_cmd};
use predicates::prelude::*;

#[test]
fn test_check_supported_manifest() {
    let workspace = TestWorkspace::teams_project();
    hostwire_cmd()
        .current_dir(&workspace.path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "src/manifest/manifest.json uses manifest version 1.9",
        ));
}

#[test]
fn test_check_unsupported_schema() {
    let workspace = TestWorkspace::teams_project();
    workspace.write_file(
        "src/manifest/manifest.json",
        "{\"$schema\": \"https://developer.microsoft.com/en-us/json-schemas/teams/v1.5/MicrosoftTeams.schema.json\"}\n",
    );
    hostwire_cmd()
        .current_dir(&workspace.path)
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unsupported manifest schema"))
        .stderr(predicate::str::contains("v1.5"))
        .stderr(predicate::str::contains("hostwire::manifest::unsupported_schema"));
}

#[test]
fn test_check_manifest_without_schema() {
    let workspace = TestWorkspace::teams_project();
    workspace.write_file("src/manifest/manifest.json", "{\"id\": \"app\"}\n");
    hostwire_cmd()
        .current_dir(&workspace.path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("declares no $schema"));
}

#[test]
fn test_check_warns_on_version_mismatch() {
    let workspace = TestWorkspace::teams_project();
    workspace.write_file(
        ".yo-rc.json",
        "{\"generator-teams\": {\"manifestVersion\": \"v1.11\"}}\n",
    );
    hostwire_cmd()
        .current_dir(&workspace.path)
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "record manifest version 1.11 but the manifest declares 1.9",
        ));
}

#[test]
fn test_check_missing_manifest() {
    let workspace = TestWorkspace::new();
    hostwire_cmd()
        .current_dir(&workspace.path)
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_check_manifest_not_json() {
    let workspace = TestWorkspace::teams_project();
    workspace.write_file("src/manifest/manifest.json", "{ broken");
    hostwire_cmd()
        .current_dir(&workspace.path)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}
