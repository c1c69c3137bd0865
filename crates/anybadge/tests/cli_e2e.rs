//! End-to-end tests for the `anybadge` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command running in an empty directory with an empty user config dir.
fn anybadge_in(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_anybadge"));
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env_remove("RUST_LOG");
    cmd
}

// ── stdout output ────────────────────────────────────────────────────

#[test]
fn prints_svg_to_stdout_without_file() {
    let dir = TempDir::new().unwrap();
    anybadge_in(&dir)
        .args(["--label", "pylint", "--value", "5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::contains("width=\"61\""))
        .stdout(predicate::str::contains(">pylint</text>"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn preset_keyword_sets_label_and_color() {
    let dir = TempDir::new().unwrap();
    anybadge_in(&dir)
        .args(["--value=2.22", "pylint"])
        .assert()
        .success()
        .stdout(predicate::str::contains(">pylint</text>"))
        .stdout(predicate::str::contains("fill=\"#FE7D37\""));
}

#[test]
fn coverage_preset_appends_suffix() {
    let dir = TempDir::new().unwrap();
    anybadge_in(&dir)
        .args(["--value=65", "coverage"])
        .assert()
        .success()
        .stdout(predicate::str::contains(">65%</text>"))
        .stdout(predicate::str::contains("fill=\"#DFB317\""));
}

#[test]
fn value_format_is_applied() {
    let dir = TempDir::new().unwrap();
    anybadge_in(&dir)
        .args(["-l", "score", "-v", "2.2222", "-m", "%.2f"])
        .assert()
        .success()
        .stdout(predicate::str::contains(">2.22</text>"));
}

#[test]
fn gitlab_scoped_style_draws_arc() {
    let dir = TempDir::new().unwrap();
    anybadge_in(&dir)
        .args(["-l", "gitlab", "-v", "scoped", "--style", "gitlab-scoped"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a9 9 0 0 1 0 18"));
}

// ── file output ──────────────────────────────────────────────────────

#[test]
fn file_output_appends_extension() {
    let dir = TempDir::new().unwrap();
    anybadge_in(&dir)
        .args(["-l", "build", "-v", "passing", "-f", "build"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let svg = std::fs::read_to_string(dir.path().join("build.svg")).unwrap();
    assert!(svg.contains(">passing</text>"));
}

#[test]
fn existing_file_needs_overwrite() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("badge.svg"), "old").unwrap();

    anybadge_in(&dir)
        .args(["-l", "a", "-v", "b", "-f", "badge.svg"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--overwrite"));
    assert_eq!(std::fs::read_to_string(dir.path().join("badge.svg")).unwrap(), "old");

    anybadge_in(&dir)
        .args(["-l", "a", "-v", "b", "-f", "badge.svg", "-o"])
        .assert()
        .success();
    assert_ne!(std::fs::read_to_string(dir.path().join("badge.svg")).unwrap(), "old");
}

// ── configuration file ───────────────────────────────────────────────

#[test]
fn local_config_supplies_defaults_and_styles() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("anybadge.toml"),
        r#"
[defaults]
color = "navy"

[styles.docs]
label = "docs"
thresholds = { passing = "green", failing = "red" }
"#,
    )
    .unwrap();

    anybadge_in(&dir)
        .args(["-v", "unknown", "docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(">docs</text>"))
        .stdout(predicate::str::contains("fill=\"#000080\""));
}

#[test]
fn explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();
    anybadge_in(&dir)
        .args(["-v", "1", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

// ── errors ───────────────────────────────────────────────────────────

#[test]
fn empty_badge_is_an_error() {
    let dir = TempDir::new().unwrap();
    anybadge_in(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("Hints:"));
}

#[test]
fn invalid_color_is_an_error() {
    let dir = TempDir::new().unwrap();
    anybadge_in(&dir)
        .args(["-v", "1", "-c", "mauve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color code \"mauve\""));
}

#[test]
fn absurd_padding_is_an_error() {
    let dir = TempDir::new().unwrap();
    anybadge_in(&dir)
        .args(["-l", "a", "-v", "1", "--padding", "1e9"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid label padding"))
        .stderr(predicate::str::contains("characters per side"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    anybadge_in(&dir)
        .args(["-v", "1", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stderr(predicate::str::contains("built badge"));
}
