//! BDD test harness using cucumber-rs.
//!
//! Executes Gherkin feature files from `tests/features/` against the depalign CLI.
//!
//! Run with: `cargo test --test bdd`

use assert_cmd::Command;
use cucumber::{World, given, then, when};
use depalign_test_util::fixtures_dir;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test world that holds state between steps.
#[derive(Debug, Default, World)]
pub struct DepalignWorld {
    /// Scratch directory every command runs in.
    temp_dir: Option<TempDir>,

    /// Fixture the graph and config were copied from, if any.
    fixture_name: Option<String>,

    /// Last command's exit code.
    exit_code: Option<i32>,

    /// Last command's stderr (log output and errors).
    stderr: String,
}

impl DepalignWorld {
    fn work_dir(&mut self) -> PathBuf {
        self.temp_dir
            .get_or_insert_with(|| TempDir::new().expect("Failed to create temp dir"))
            .path()
            .to_path_buf()
    }

    fn fixture(name: &str) -> PathBuf {
        fixtures_dir(Path::new(env!("CARGO_MANIFEST_DIR"))).join(name)
    }

    fn read(&mut self, relative: &str) -> String {
        let path = self.work_dir().join(relative);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
    }

    /// Get a Command for the depalign binary.
    #[allow(deprecated)]
    fn depalign_cmd() -> Command {
        let mut cmd = Command::cargo_bin("depalign").expect("depalign binary not found");
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

// =============================================================================
// Given steps - Setup
// =============================================================================

#[given(expr = "the fixture {string}")]
fn given_fixture(world: &mut DepalignWorld, name: String) {
    let source = DepalignWorld::fixture(&name);
    assert!(source.exists(), "Fixture '{name}' not found at {source:?}");

    let work_dir = world.work_dir();
    std::fs::copy(source.join("graph.json"), work_dir.join("depalign-graph.json"))
        .expect("Failed to copy graph");
    std::fs::copy(source.join("depalign.toml"), work_dir.join("depalign.toml"))
        .expect("Failed to copy config");
    world.fixture_name = Some(name);
}

#[given(expr = "a dependency graph with:")]
fn given_graph_with_content(world: &mut DepalignWorld, step: &cucumber::gherkin::Step) {
    let content = step.docstring.clone().expect("graph content not found");
    let work_dir = world.work_dir();
    std::fs::write(work_dir.join("depalign-graph.json"), content).expect("Failed to write graph");
}

#[given(expr = "a depalign.toml with:")]
fn given_config_with_content(world: &mut DepalignWorld, step: &cucumber::gherkin::Step) {
    let content = step.docstring.clone().expect("config content not found");
    let work_dir = world.work_dir();
    std::fs::write(work_dir.join("depalign.toml"), content).expect("Failed to write config");
}

#[given(expr = "the file {string} contains {string}")]
fn given_file_contains(world: &mut DepalignWorld, relative: String, content: String) {
    let work_dir = world.work_dir();
    std::fs::write(work_dir.join(relative), format!("{content}\n")).expect("Failed to write file");
}

// =============================================================================
// When steps - Actions
// =============================================================================

#[when(expr = "I run {string}")]
fn when_i_run_command(world: &mut DepalignWorld, command: String) {
    let parts: Vec<&str> = command.split_whitespace().collect();
    assert_eq!(
        parts.first(),
        Some(&"depalign"),
        "Command must start with 'depalign'"
    );

    let work_dir = world.work_dir();
    let output = DepalignWorld::depalign_cmd()
        .current_dir(&work_dir)
        .args(&parts[1..])
        .output()
        .expect("Failed to run depalign");

    world.exit_code = output.status.code();
    world.stderr = String::from_utf8_lossy(&output.stderr).into_owned();
}

// =============================================================================
// Then steps - Assertions
// =============================================================================

#[then(expr = "the exit code is {int}")]
fn then_exit_code_is(world: &mut DepalignWorld, expected: i32) {
    let actual = world.exit_code.expect("No exit code captured");
    assert_eq!(
        actual, expected,
        "Expected exit code {expected}, got {actual}. stderr: {}",
        world.stderr
    );
}

#[then(expr = "stderr contains {string}")]
fn then_stderr_contains(world: &mut DepalignWorld, expected: String) {
    assert!(
        world.stderr.contains(&expected),
        "Expected stderr to contain '{expected}'. Got: {}",
        world.stderr
    );
}

#[then(expr = "stderr does not contain {string}")]
fn then_stderr_does_not_contain(world: &mut DepalignWorld, unexpected: String) {
    assert!(
        !world.stderr.contains(&unexpected),
        "Expected stderr not to contain '{unexpected}'. Got: {}",
        world.stderr
    );
}

#[then(expr = "the file {string} matches the expected report")]
fn then_file_matches_expected(world: &mut DepalignWorld, relative: String) {
    let name = world.fixture_name.clone().expect("No fixture loaded");
    let expected = std::fs::read_to_string(DepalignWorld::fixture(&name).join("expected.txt"))
        .expect("Failed to read expected.txt");
    assert_eq!(world.read(&relative), expected);
}

#[then(expr = "the file {string} contains {string}")]
fn then_file_contains(world: &mut DepalignWorld, relative: String, expected: String) {
    let content = world.read(&relative);
    assert!(
        content.contains(&expected),
        "Expected {relative} to contain '{expected}'. Got: {content}"
    );
}

#[then(expr = "the file {string} starts with {string}")]
fn then_file_starts_with(world: &mut DepalignWorld, relative: String, expected: String) {
    let content = world.read(&relative);
    assert!(
        content.starts_with(&expected),
        "Expected {relative} to start with '{expected}'. Got: {content}"
    );
}

#[then(expr = "the file {string} does not contain {string}")]
fn then_file_does_not_contain(world: &mut DepalignWorld, relative: String, unexpected: String) {
    let content = world.read(&relative);
    assert!(
        !content.contains(&unexpected),
        "Expected {relative} not to contain '{unexpected}'. Got: {content}"
    );
}

#[then(expr = "the report title in {string} is {string}")]
fn then_report_title_is(world: &mut DepalignWorld, relative: String, title: String) {
    let rule = "=".repeat(title.chars().count());
    let banner = format!("{rule}\n{title}\n{rule}\n\n");
    assert!(world.read(&relative).starts_with(&banner));
}

#[then(expr = "the file {string} does not exist")]
fn then_file_does_not_exist(world: &mut DepalignWorld, relative: String) {
    let path = world.work_dir().join(relative);
    assert!(!path.exists(), "Expected {} not to exist", path.display());
}

#[then(expr = "the receipt {string} has verdict {string}")]
fn then_receipt_verdict(world: &mut DepalignWorld, relative: String, expected: String) {
    let receipt: Value = serde_json::from_str(&world.read(&relative)).expect("Invalid receipt JSON");
    assert_eq!(receipt["schema"], "depalign.report.v1");
    assert_eq!(receipt["verdict"], expected.as_str());
}

#[then(expr = "the receipt {string} counts {int} {word}")]
fn then_receipt_count(world: &mut DepalignWorld, relative: String, expected: u64, field: String) {
    let receipt: Value = serde_json::from_str(&world.read(&relative)).expect("Invalid receipt JSON");
    assert_eq!(
        receipt["counts"][field.as_str()],
        expected,
        "count '{field}' in {receipt}"
    );
}

// =============================================================================
// Main entry point
// =============================================================================

fn main() {
    let features_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("cli crate should have parent")
        .parent()
        .expect("crates should have parent")
        .join("tests")
        .join("features");

    futures::executor::block_on(DepalignWorld::run(features_dir));
}
