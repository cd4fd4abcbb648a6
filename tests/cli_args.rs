//! Tests for CLI argument parsing.

use clap::Parser;
use counter_tui::cli::Cli;
use counter_tui::config::Config;
use std::path::PathBuf;
use std::process::Command;

fn counter_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_counter-tui"))
}

#[test]
fn test_help_lists_options() {
    let output = counter_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--print-default-config"));
}

#[test]
fn test_print_default_config_outputs_toml() {
    let output = counter_cmd()
        .arg("--print-default-config")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(Config::from_toml(&stdout).unwrap(), Config::default());
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

    let output = counter_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick_rate_ms must be greater than zero"));
}

#[test]
fn test_overrides_apply_to_logging() {
    let cli = Cli::try_parse_from([
        "counter-tui",
        "--log-file",
        "/tmp/counter.log",
        "--log-level",
        "debug",
    ])
    .unwrap();

    let mut config = Config::default();
    cli.apply(&mut config);
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/counter.log")));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_path_defaults_to_platform_location() {
    let cli = Cli::try_parse_from(["counter-tui"]).unwrap();
    assert_eq!(cli.config_path(), Config::config_path());

    let cli = Cli::try_parse_from(["counter-tui", "--config", "custom.toml"]).unwrap();
    assert_eq!(cli.config_path(), PathBuf::from("custom.toml"));
}
