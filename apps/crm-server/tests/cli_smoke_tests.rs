//! CLI smoke tests for the crm-server binary.
//!
//! These exercise argument parsing, configuration validation and basic
//! startup without driving the HTTP surface.

use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::timeout;

fn run_crm_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_crm-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute crm-server")
}

async fn run_crm_server_with_timeout(
    args: &[&str],
    timeout_duration: Duration,
) -> Result<std::process::Output, Box<dyn std::error::Error>> {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_crm-server"));
    cmd.args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    match timeout(timeout_duration, cmd.output()).await {
        Ok(result) => result.map_err(|e| e.into()),
        Err(elapsed) => Err(elapsed.into()),
    }
}

#[test]
fn help_lists_subcommands_and_options() {
    let output = run_crm_server(&["--help"]);

    assert!(output.status.success(), "help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("crm-server"));
    assert!(stdout.contains("Usage:") || stdout.contains("USAGE:"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("--config"));
}

#[test]
fn version_prints_binary_name() {
    let output = run_crm_server(&["--version"]);

    assert!(output.status.success(), "version should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("crm-server"));
    assert!(stdout.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn unknown_subcommand_fails() {
    let output = run_crm_server(&["frobnicate"]);

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("unexpected"),
        "stderr: {stderr}"
    );
}

#[test]
fn check_fails_for_missing_config_file() {
    let output = run_crm_server(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn check_fails_for_invalid_yaml() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("invalid.yaml");
    std::fs::write(&config_path, "server: [unclosed").expect("write config");

    let output = run_crm_server(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config") || stderr.contains("Failed to load"),
        "stderr: {stderr}"
    );
}

#[test]
fn check_accepts_a_valid_config() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("valid.yaml");
    std::fs::write(
        &config_path,
        r#"
server:
  host: 127.0.0.1
  port: 8099

seed:
  enabled: false
  contacts: 0

logging:
  console_level: error
"#,
    )
    .expect("write config");

    let output = run_crm_server(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration check passed"));
    assert!(stdout.contains("port: 8099"));
}

#[test]
fn print_config_echoes_effective_settings() {
    let output = run_crm_server(&["--print-config", "--port", "9123"]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: 9123"));
    assert!(stdout.contains("seed"));
}

#[tokio::test]
async fn run_starts_and_keeps_serving() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("run.yaml");
    std::fs::write(
        &config_path,
        r#"
server:
  host: 127.0.0.1
  port: 0

logging:
  console_level: error
"#,
    )
    .expect("write config");

    let result = run_crm_server_with_timeout(
        &["--config", config_path.to_str().unwrap(), "run"],
        Duration::from_secs(5),
    )
    .await;

    // A timeout means the server came up and stayed up.
    match result {
        Err(err) => assert!(
            err.to_string().contains("elapsed"),
            "server failed to start: {err}"
        ),
        Ok(output) => assert!(
            output.status.success(),
            "server exited with failure: {}",
            String::from_utf8_lossy(&output.stderr)
        ),
    }
}
