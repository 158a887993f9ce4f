// e2e/cli_integration.rs — black-box tests of the `getarg` binary
//
// Drives the binary with std::process::Command and checks stdout lines,
// stderr diagnostics, and exit codes.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Locate the `getarg` binary produced by Cargo.
fn getarg_bin() -> PathBuf {
    if let Some(p) = option_env!("CARGO_BIN_EXE_getarg") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("getarg");
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(getarg_bin())
        .args(args)
        .env_remove("GETARG_DISPLAY_LEVEL")
        .output()
        .expect("failed to run getarg")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn test_cli_typed_queries() {
    let out = run(&[
        "-b", "-SHT", "-b", "-listen:1", "-s", "-datadir:/tmp", "-i", "-port:8333",
        "--", "-SHT", "-nolisten", "--port=18333", "positional",
    ]);
    assert!(out.status.success());
    assert_eq!(
        stdout_lines(&out),
        vec!["-SHT=1", "-listen=0", "-datadir=/tmp", "-port=18333"]
    );
}

#[test]
fn test_cli_explicit_beats_negation() {
    let out = run(&["-b", "-SHT:0", "--", "-noSHT", "-SHT"]);
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out), vec!["-SHT=1"]);
}

#[test]
fn test_cli_unparsable_int_is_zero() {
    let out = run(&["-i", "-SHT:1", "-i", "-bar:11", "--", "-SHT=NaN"]);
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out), vec!["-SHT=0", "-bar=11"]);
}

#[test]
fn test_cli_dump() {
    let out = run(&["--dump", "--", "-b=2", "-a", "-noc", "-nod=0", "-noa"]);
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out), vec!["-a=", "-b=2", "!-c", "~-d"]);
}

#[test]
fn test_cli_no_args_prints_nothing() {
    let out = run(&[]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_cli_bad_query_name_exits_1() {
    let out = run(&["-b", "SHT", "--", "-SHT"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("bad usage"), "stderr: {stderr}");
}

#[test]
fn test_cli_bad_int_default_exits_1() {
    let out = run(&["-i", "-SHT:eleven"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_cli_quiet_still_reports_errors() {
    let out = run(&["-q", "-b", "-SHT:maybe"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!out.stderr.is_empty());
}

#[test]
fn test_cli_verbose_traces_tokens() {
    let out = run(&["-vv", "-b", "-SHT", "--", "-SHT", "file"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ignoring positional argument 'file'"), "stderr: {stderr}");
    assert!(stderr.contains("-SHT = ''"), "stderr: {stderr}");
}

#[test]
fn test_cli_display_level_from_env() {
    let out = Command::new(getarg_bin())
        .args(["--", "stray"])
        .env("GETARG_DISPLAY_LEVEL", "3")
        .output()
        .expect("failed to run getarg");
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ignoring positional argument 'stray'"), "stderr: {stderr}");
}

#[test]
fn test_cli_unknown_flag_is_usage_error() {
    let out = run(&["--frobnicate"]);
    assert_eq!(out.status.code(), Some(2));
}
