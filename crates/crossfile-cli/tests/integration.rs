//! Integration tests for CLI commands.

use std::process::Command;

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new("cargo")
        .args(["run", "--bin", "crossfile", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

#[test]
fn test_types_command() {
    let (success, stdout, _) = run_cli(&["types"]);
    assert!(success);
    assert!(stdout.contains("TYPE"));
    assert!(stdout.contains("identifier"));
    assert!(stdout.contains("countries"));
}

#[test]
fn test_types_command_json() {
    let (success, stdout, _) = run_cli(&["types", "--json"]);
    assert!(success);
    let first = stdout.lines().next().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(first).unwrap();
    assert_eq!(parsed["name"], "string");
    assert!(parsed["index_invert"].is_null());
}

#[test]
fn test_clean_command() {
    let (success, stdout, _) = run_cli(&["clean", "--type", "name", "  Siegfried   Kracauer "]);
    assert!(success);
    assert_eq!(stdout.trim(), "Siegfried Kracauer");
}

#[test]
fn test_clean_command_json() {
    let (success, stdout, _) = run_cli(&["clean", "--type", "country", "--json", "Germany"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed["cleaned"], "de");
}

#[test]
fn test_normalize_command() {
    let (success, stdout, _) = run_cli(&["normalize", "--type", "identifier", "a-b 12!"]);
    assert!(success);
    assert_eq!(stdout.trim(), "AB12");
}

#[test]
fn test_normalize_command_with_country_hint() {
    let (success, stdout, _) = run_cli(&[
        "normalize",
        "--type",
        "phone",
        "--country",
        "de",
        "030 901820",
    ]);
    assert!(success);
    assert_eq!(stdout.trim(), "+4930901820");
}

#[test]
fn test_fingerprint_command() {
    let (success, stdout, _) = run_cli(&["fingerprint", "--type", "name", "José  N."]);
    assert!(success);
    assert_eq!(stdout.trim(), "jose n");
}

#[test]
fn test_unknown_type_fails() {
    let (success, _, stderr) = run_cli(&["clean", "--type", "bogus", "x"]);
    assert!(!success);
    assert!(stderr.contains("no such property type"));
}
