//! CLI tests for `decomment explain`.

use std::process::Command;

use assert_cmd::cargo;

fn decomment_cmd() -> Command {
    Command::new(cargo::cargo_bin!("decomment"))
}

#[test]
fn explain_known_code_json_returns_explanation() {
    let output = decomment_cmd()
        .args(["explain", "DCM1002", "--output", "json"])
        .output()
        .expect("run explain command");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["id"], "DCM1002");
    assert!(json["explanation"].is_string());
}

#[test]
fn explain_unknown_code_json_returns_null_explanation() {
    let output = decomment_cmd()
        .args(["explain", "DCM9999", "--output", "json"])
        .output()
        .expect("run explain command");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["id"], "DCM9999");
    assert!(json["explanation"].is_null());
}

#[test]
fn explain_pretty_shows_human_readable_text() {
    let output = decomment_cmd()
        .args(["explain", "DCM1005", "--output", "pretty"])
        .output()
        .expect("run explain command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("DCM1005") && stdout.contains(':'),
        "unexpected output: {stdout}"
    );
}
