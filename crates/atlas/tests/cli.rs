use assert_cmd::prelude::*;

use predicates::prelude::*;
use predicates::str::contains;
use std::process::Command;

/// Helper to create a Command for the `atlas` binary
fn atlas_cmd() -> Command {
  Command::cargo_bin("atlas").expect("binary exists")
}

#[test]
fn test_help_lists_subcommands() {
  atlas_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(
      contains("stats")
        .and(contains("pois"))
        .and(contains("search"))
        .and(contains("predict"))
        .and(contains("logs")),
    );
}

#[test]
fn test_version_flag() {
  atlas_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_stats_help_shows_filter_options() {
  atlas_cmd()
    .args(["stats", "--help"])
    .assert()
    .success()
    .stdout(contains("--category").and(contains("--min-reviews")));
}

#[test]
fn test_no_subcommand_is_an_error() {
  atlas_cmd().assert().failure().stderr(contains("Usage"));
}

#[test]
fn test_search_requires_terms() {
  atlas_cmd().arg("search").assert().failure().stderr(contains("required"));
}

#[test]
fn test_predict_requires_coordinates() {
  atlas_cmd()
    .args(["predict", "--category", "Cafe"])
    .assert()
    .failure()
    .stderr(contains("--latitude"));
}

#[test]
fn test_predict_rejects_non_numeric_latitude() {
  atlas_cmd()
    .args(["predict", "--latitude", "north", "--longitude", "74.3", "--category", "Cafe"])
    .assert()
    .failure()
    .stderr(contains("invalid value"));
}

#[test]
fn test_locations_requires_business_name() {
  atlas_cmd().arg("locations").assert().failure().stderr(contains("required"));
}
