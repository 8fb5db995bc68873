//! Integration tests for the gatewayctl binary: argument parsing, version,
//! manifest rendering and snapshot parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

const BUNDLE: &str = "/Applications/Clawdbot.app";

/// The binary with a clean, isolated environment.
fn gatewayctl(home: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gatewayctl"));
    cmd.env("NO_COLOR", "1")
        .env("HOME", home)
        .env("CLAWDBOT_CONFIG_PATH", home.join("clawdbot.json"))
        .env_remove("CLAWDBOT_GATEWAY_BIND")
        .env_remove("CLAWDBOT_GATEWAY_TOKEN")
        .env_remove("CLAWDBOT_GATEWAY_PASSWORD")
        .env_remove("CLAWDBOT_CONNECTION_MODE")
        .env_remove("RUST_LOG");
    cmd
}

fn home() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    let home = home();
    gatewayctl(home.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Manage the gateway launch agent"));
}

#[test]
fn test_cli_help_lists_commands() {
    let home = home();
    gatewayctl(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("enable"))
        .stdout(predicate::str::contains("parse-snapshot"));
}

#[test]
fn test_version_command_shows_version() {
    let home = home();
    gatewayctl(home.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gatewayctl 0.1.0"));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let home = home();
    let output = gatewayctl(home.path())
        .args(["version", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["version"], "0.1.0");
}

#[test]
fn test_enable_requires_bundle() {
    let home = home();
    gatewayctl(home.path())
        .arg("enable")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bundle"));
}

#[test]
fn test_unknown_connection_mode_is_rejected() {
    let home = home();
    gatewayctl(home.path())
        .args(["--connection-mode", "cloud", "version"])
        .assert()
        .code(2);
}

// --- manifest ---

#[test]
fn test_manifest_renders_defaults() {
    let home = home();
    let home_str = home.path().display().to_string();
    gatewayctl(home.path())
        .args(["manifest", "--bundle", BUNDLE])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::contains("<string>com.clawdbot.gateway</string>"))
        .stdout(predicate::str::contains(
            "<string>/Applications/Clawdbot.app/Contents/Resources/Relay/clawdbot</string>",
        ))
        .stdout(predicate::str::contains("<string>18789</string>"))
        .stdout(predicate::str::contains("<string>loopback</string>"))
        .stdout(predicate::str::contains(format!("<string>{home_str}</string>")))
        .stdout(predicate::str::contains("/tmp/clawdbot/clawdbot-gateway.log"))
        .stdout(predicate::str::contains("CLAWDBOT_GATEWAY_TOKEN").not());
}

#[test]
fn test_manifest_does_not_write_to_disk() {
    let home = home();
    gatewayctl(home.path())
        .args(["manifest", "--bundle", BUNDLE])
        .assert()
        .success();
    assert!(!home.path().join("Library").exists());
}

#[test]
fn test_manifest_uses_env_bind_and_token() {
    let home = home();
    gatewayctl(home.path())
        .env("CLAWDBOT_GATEWAY_BIND", "LAN")
        .env("CLAWDBOT_GATEWAY_TOKEN", " a&b ")
        .args(["manifest", "--bundle", BUNDLE, "--port", "19001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<string>lan</string>"))
        .stdout(predicate::str::contains("<string>19001</string>"))
        .stdout(predicate::str::contains("<string>a&amp;b</string>"));
}

#[test]
fn test_manifest_reads_config_file() {
    let home = home();
    std::fs::write(
        home.path().join("clawdbot.json"),
        r#"{"gateway":{"bind":"tailnet","auth":{"password":" pw "}}}"#,
    )
    .expect("write config");
    gatewayctl(home.path())
        .args(["manifest", "--bundle", BUNDLE])
        .assert()
        .success()
        .stdout(predicate::str::contains("<string>tailnet</string>"))
        .stdout(predicate::str::contains("<key>CLAWDBOT_GATEWAY_PASSWORD</key>"))
        .stdout(predicate::str::contains("<string>pw</string>"));
}

#[test]
fn test_manifest_remote_mode_ignores_bind() {
    let home = home();
    gatewayctl(home.path())
        .env("CLAWDBOT_GATEWAY_BIND", "lan")
        .args(["--connection-mode", "remote", "manifest", "--bundle", BUNDLE])
        .assert()
        .success()
        .stdout(predicate::str::contains("<string>loopback</string>"))
        .stdout(predicate::str::contains("<string>lan</string>").not());
}

#[test]
fn test_manifest_json_includes_path() {
    let home = home();
    let output = gatewayctl(home.path())
        .args(["--json", "manifest", "--bundle", BUNDLE])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let path = value["path"].as_str().expect("path");
    assert!(path.ends_with("Library/LaunchAgents/com.clawdbot.gateway.plist"));
    assert!(value["manifest"].as_str().expect("manifest").contains("<plist"));
}

// --- parse-snapshot ---

#[test]
fn test_parse_snapshot_from_stdin() {
    let home = home();
    let output = gatewayctl(home.path())
        .arg("parse-snapshot")
        .write_stdin("arguments = (\n  \"--port\",\n  \"18789\",\n  \"--bind\",\n  \"Tailnet\"\n)\npid = 77\n")
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["pid"], 77);
    assert_eq!(value["port"], 18789);
    assert_eq!(value["bind"], "tailnet");
}

#[test]
fn test_parse_snapshot_of_garbage_is_all_null() {
    let home = home();
    let output = gatewayctl(home.path())
        .arg("parse-snapshot")
        .write_stdin("Could not find service \"com.clawdbot.gateway\" in domain for port\n")
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert!(value["pid"].is_null());
    assert!(value["port"].is_null());
    assert!(value["bind"].is_null());
}

#[test]
fn test_parse_snapshot_tolerates_invalid_utf8() {
    let home = home();
    let mut input = b"argv[] = { clawdbot, \xff\xfe, --port, 18789 }\n".to_vec();
    input.extend_from_slice(b"pid = 9\n");
    let output = gatewayctl(home.path())
        .arg("parse-snapshot")
        .write_stdin(input)
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["pid"], 9);
    assert_eq!(value["port"], 18789);
}

#[test]
fn test_parse_snapshot_file_with_invalid_utf8() {
    let home = home();
    let file = home.path().join("print.bin");
    std::fs::write(&file, b"\x80 pid = 5 \xc3 --bind lan \xfe\n").expect("write");
    let output = gatewayctl(home.path())
        .args(["parse-snapshot", "--file"])
        .arg(&file)
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["pid"], 5);
    assert_eq!(value["bind"], "lan");
}

#[test]
fn test_parse_snapshot_from_file() {
    let home = home();
    let file = home.path().join("print.txt");
    std::fs::write(&file, "argv[] = { clawdbot, --port, 4000 }\n").expect("write");
    gatewayctl(home.path())
        .args(["parse-snapshot", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"port\": 4000"));
}

#[test]
fn test_parse_snapshot_missing_file_fails() {
    let home = home();
    gatewayctl(home.path())
        .args(["parse-snapshot", "--file"])
        .arg(home.path().join("absent.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: cannot read"));
}
