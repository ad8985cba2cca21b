use std::net::TcpListener;

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a Command for the stride binary
fn stride_cmd() -> Command {
    Command::cargo_bin("stride").expect("Failed to find stride binary")
}

/// Returns a local URL with nothing listening on it
fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind local socket");
    let addr = listener.local_addr().expect("Failed to read local address");
    format!("http://{addr}")
}

#[test]
fn test_cli_help_lists_commands() {
    stride_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("smoke"))
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn test_cli_smoke_help() {
    stride_cmd()
        .args(["smoke", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--attempts"))
        .stdout(predicate::str::contains("--delay-ms"));
}

#[test]
fn test_cli_smoke_requires_base_url() {
    stride_cmd()
        .arg("smoke")
        .env_remove("STRIDE_BASE_URL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--base-url"));
}

#[test]
fn test_cli_smoke_against_unreachable_service() {
    stride_cmd()
        .args(["smoke", "--base-url", &unused_local_url(), "--delay-ms", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Starting test for service"))
        .stdout(predicate::str::contains("FAILED: Could not send goal"))
        .stderr(predicate::str::contains("Could not send goal").not());
}

#[test]
fn test_cli_rejects_invalid_port() {
    stride_cmd()
        .args(["--port", "99999", "serve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--port"));
}
