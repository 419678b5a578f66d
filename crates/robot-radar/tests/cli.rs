//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("ROBOT_RADAR_MAX_SCORE")
        .env_remove("ROBOT_RADAR_SCORING__MIN_WORDS");
    cmd
}

fn json_stdout(args: &[&str]) -> Value {
    let output = cmd().args(args).output().expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_lists_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("sample"));
}

#[test]
fn long_help_lists_environment() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ROBOT_RADAR_LOG_DIR"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Analyze
// =============================================================================

#[test]
fn analyze_ai_sample_json() {
    let json = json_stdout(&["analyze", "--sample", "ai", "--json"]);

    assert_eq!(json["word_count"], 42);
    assert_eq!(json["sentence_count"], 4);
    assert_eq!(json["sentence_variance"], 1.1);
    assert!(json["score"].as_i64().unwrap() >= 70);
    assert!(json["flesch_grade"].is_f64());
}

#[test]
fn human_sample_scores_below_ai_sample() {
    let ai = json_stdout(&["analyze", "--sample", "ai", "--json"]);
    let human = json_stdout(&["analyze", "--sample", "human", "--json"]);

    assert!(human["score"].as_i64() < ai["score"].as_i64());
    assert_eq!(human["word_count"], 44);
    assert_eq!(human["sentence_variance"], 7.8);
}

#[test]
fn analyze_text_output_shows_metrics() {
    cmd()
        .args(["--color", "never", "analyze", "--sample", "ai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AI Probability:"))
        .stdout(predicate::str::contains("Burstiness:"))
        .stdout(predicate::str::contains("Grade Level:"))
        .stdout(predicate::str::contains("Complexity:"))
        .stdout(predicate::str::contains("Word Count:"))
        .stdout(predicate::str::contains("High AI Patterns Detected"));
}

#[test]
fn analyze_reads_stdin() {
    let output = cmd()
        .args(["analyze", "--json"])
        .write_stdin(robot_radar_core::Sample::Human.text())
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["word_count"], 44);
}

#[test]
fn analyze_dash_reads_stdin() {
    cmd()
        .args(["analyze", "-", "--json"])
        .write_stdin(robot_radar_core::Sample::Ai.text())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word_count\": 42"));
}

#[test]
fn analyze_file_argument() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("essay.txt");
    std::fs::write(&path, robot_radar_core::Sample::Ai.text()).unwrap();

    cmd()
        .args(["--color", "never", "analyze"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("essay.txt"));
}

#[test]
fn short_text_fails_with_message() {
    cmd()
        .arg("analyze")
        .write_stdin("Hello world. This is short.")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Text is too short. Please provide at least 30 words.",
        ));
}

#[test]
fn short_text_json_reports_too_short() {
    let output = cmd()
        .args(["analyze", "--json"])
        .write_stdin("Hello world. This is short.")
        .output()
        .expect("failed to run command");
    assert!(!output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["too_short"], true);
    assert_eq!(json["word_count"], 5);
    assert_eq!(json["min_words"], 30);
}

#[test]
fn min_words_flag_lowers_guard() {
    let output = cmd()
        .args(["analyze", "--json", "--min-words", "5"])
        .write_stdin("Hello world. This is short.")
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sentence_count"], 2);
}

#[test]
fn max_score_gate_passes() {
    cmd()
        .args(["--color", "never", "analyze", "--sample", "human", "--max-score", "98"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn max_score_gate_fails() {
    cmd()
        .args(["analyze", "--sample", "ai", "--max-score", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sample:ai scores"));
}

#[test]
fn analyze_missing_file_fails() {
    cmd()
        .args(["analyze", "/nonexistent/essay.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn unknown_sample_is_rejected_by_parser() {
    cmd()
        .args(["analyze", "--sample", "robot"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("possible values"));
}

// =============================================================================
// Sample
// =============================================================================

#[test]
fn sample_prints_text() {
    cmd()
        .args(["sample", "human"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I broke a coffee mug."));
}

#[test]
fn sample_json_has_word_count() {
    let json = json_stdout(&["sample", "ai", "--json"]);
    assert_eq!(json["name"], "ai");
    assert_eq!(json["word_count"], 42);
}

// =============================================================================
// Info
// =============================================================================

#[test]
fn info_json_outputs_package_and_scoring() {
    let json = json_stdout(&["info", "--json"]);

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["config"]["syllable_heuristic"], "vowel-groups-1");
    assert_eq!(json["config"]["scoring"]["max_score"], 98);
}

#[test]
fn info_text_shows_scoring_section() {
    cmd()
        .args(["--color", "never", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scoring Policy"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_and_verbose_flags_accepted() {
    cmd().args(["-q", "info"]).assert().success();
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_choices_accepted() {
    for choice in ["auto", "always", "never"] {
        cmd().args(["--color", choice, "info"]).assert().success();
    }
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
