//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. They run
//! against the dev data directory so a developer's real config is untouched.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "ringdown-cli", "--"])
        .args(args)
        .env("RINGDOWN_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run a CLI command against an isolated home directory.
///
/// CARGO_HOME is pinned to the real one so cargo can still find its registry.
fn run_cli_with_home(args: &[&str], home: &std::path::Path) -> (String, String, i32) {
    let cargo_home = std::env::var("CARGO_HOME").unwrap_or_else(|_| {
        format!("{}/.cargo", std::env::var("HOME").unwrap_or_default())
    });

    let output = Command::new("cargo")
        .args(["run", "-p", "ringdown-cli", "--"])
        .args(args)
        .env("RINGDOWN_ENV", "dev")
        .env("HOME", home)
        .env("CARGO_HOME", cargo_home)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "Config list failed");
    assert!(stdout.contains("[timer]"));
    assert!(stdout.contains("[ui]"));
}

#[test]
fn test_config_get() {
    let (_, _, code) = run_cli(&["config", "get", "timer.interval_ms"]);
    assert_eq!(code, 0, "Config get failed");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, stderr, code) = run_cli(&["config", "get", "timer.bogus"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_config_set() {
    let (_, _, code) = run_cli(&["config", "set", "ui.bell", "true"]);
    assert_eq!(code, 0, "Config set failed");
}

#[test]
fn test_config_set_rejects_bad_value() {
    let (_, _, code) = run_cli(&["config", "set", "ui.bell", "loud"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_set_preserves_malformed_config() {
    let home = tempfile::tempdir().unwrap();
    let cfg_dir = home.path().join(".config").join("ringdown-dev");
    std::fs::create_dir_all(&cfg_dir).unwrap();
    let cfg_path = cfg_dir.join("config.toml");
    let malformed = "timer = \"not a table\"";
    std::fs::write(&cfg_path, malformed).unwrap();

    let (_, stderr, code) =
        run_cli_with_home(&["config", "set", "ui.bell", "false"], home.path());
    assert_ne!(code, 0, "Set against a malformed config must fail");
    assert!(stderr.contains("Failed to load configuration"));
    // The broken file is left for the user to repair, not overwritten.
    assert_eq!(std::fs::read_to_string(&cfg_path).unwrap(), malformed);
}

#[test]
fn test_config_get_reports_malformed_config() {
    let home = tempfile::tempdir().unwrap();
    let cfg_dir = home.path().join(".config").join("ringdown-dev");
    std::fs::create_dir_all(&cfg_dir).unwrap();
    std::fs::write(cfg_dir.join("config.toml"), "ui = 42").unwrap();

    let (_, stderr, code) =
        run_cli_with_home(&["config", "get", "timer.duration_secs"], home.path());
    assert_ne!(code, 0);
    assert!(stderr.contains("Failed to load configuration"));
}

#[test]
fn test_config_path() {
    let (stdout, _, code) = run_cli(&["config", "path"]);
    assert_eq!(code, 0, "Config path failed");
    assert!(stdout.contains("config.toml"));
}

#[test]
fn test_run_short_countdown_json() {
    let (stdout, _, code) = run_cli(&[
        "run",
        "--duration-secs",
        "1",
        "--interval-ms",
        "250",
        "--json",
    ]);
    assert_eq!(code, 0, "Run failed");

    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is a JSON event"))
        .collect();

    assert_eq!(events.first().unwrap()["type"], "Started");
    assert_eq!(events.last().unwrap()["type"], "Completed");
    let ticks: Vec<_> = events.iter().filter(|e| e["type"] == "Tick").collect();
    assert_eq!(ticks.len(), 4);
    assert_eq!(ticks[0]["remaining_ms"], 750);
    assert_eq!(ticks[3]["remaining_ms"], 0);
}

#[test]
fn test_run_resets_dial_on_completion() {
    let (stdout, _, code) = run_cli(&[
        "run",
        "--duration-secs",
        "1",
        "--interval-ms",
        "250",
        "--ascii",
    ]);
    assert_eq!(code, 0, "Run failed");

    // The last frame drawn shows the full dial again, like the start.
    let final_frame = stdout.rsplit('\r').next().unwrap();
    assert!(final_frame.contains("Time's up!"));
    let ring = &final_frame[..final_frame.find(']').unwrap()];
    assert!(ring.contains('#'));
    assert!(!ring.contains('-'));
}

#[test]
fn test_run_rejects_zero_interval() {
    let (_, stderr, code) = run_cli(&["run", "--duration-secs", "1", "--interval-ms", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_run_rejects_interval_longer_than_duration() {
    let (_, stderr, code) = run_cli(&["run", "--duration-secs", "1", "--interval-ms", "2000"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_completions_bash() {
    let (stdout, _, code) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0, "Completions failed");
    assert!(stdout.contains("ringdown"));
}
