//! Integration tests for error handling and exit codes.
//!
//! - Exit code 0: Success
//! - Exit code 1: Semantic failure (missing component, climb above root)
//! - Exit code 2: Usage error reported by clap
//! - Exit code 4: Invalid arguments (bad length, path not normalized)
//! - Exit code 5: I/O error
//! - Exit code 7: Configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();
    env.command().args(["normalize", "/a"]).assert().code(0);
    env.command().args(["segments", "a/b"]).assert().code(0);
    env.command().args(["inspect", "/"]).assert().code(0);
}

// ============================================================================
// Semantic Failures (Exit Code 1)
// ============================================================================

#[test]
fn test_climbing_above_root_exit_code() {
    let env = TestEnv::new();
    for path in ["/..", "/../a", "/a/b/../../.."] {
        env.command()
            .args(["normalize", path])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("invalid pathname"));
    }
}

#[test]
fn test_missing_component_exit_code() {
    let env = TestEnv::new();
    let cases = [
        ("rootname", "."),
        ("dirname", ".."),
        ("tailname", "/"),
        ("filename", "/a/b/"),
    ];
    for (command, path) in cases {
        env.command().args([command, path]).assert().code(1);
    }
}

// ============================================================================
// Usage Errors (Exit Code 2)
// ============================================================================

#[test]
fn test_missing_argument() {
    let env = TestEnv::new();
    env.command().arg("normalize").assert().code(2);
}

#[test]
fn test_unknown_format() {
    let env = TestEnv::new();
    env.command()
        .args(["--format", "xml", "normalize", "/a"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid output format"));
}

// ============================================================================
// Invalid Arguments (Exit Code 4)
// ============================================================================

#[test]
fn test_empty_path_exit_code() {
    let env = TestEnv::new();
    env.command().args(["normalize", ""]).assert().code(4);
}

#[test]
fn test_too_long_path_exit_code() {
    let env = TestEnv::new();
    let long = format!("/{}", "a".repeat(5000));
    env.command()
        .args(["normalize", long.as_str()])
        .assert()
        .code(4);
}

#[test]
fn test_validate_missing_file_exit_code() {
    let env = TestEnv::new();
    env.command()
        .arg("validate")
        .arg(env.path().join("missing.yaml"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}

// ============================================================================
// Configuration Errors (Exit Code 7)
// ============================================================================

#[test]
fn test_missing_config_file_exit_code() {
    let env = TestEnv::new();
    env.command()
        .arg("--config")
        .arg(env.path().join("missing.yaml"))
        .args(["normalize", "/a"])
        .assert()
        .code(7);
}

#[test]
fn test_malformed_user_config_exit_code() {
    let env = TestEnv::new();
    env.write_user_config("max_path_len: [1, 2]\n");
    env.command().args(["normalize", "/a"]).assert().code(7);
}

#[test]
fn test_bad_env_value_exit_code() {
    let env = TestEnv::new();
    env.command()
        .env("PATHNAME_NORMALIZE_CONCAT", "maybe")
        .args(["normalize", "/a"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("PATHNAME_NORMALIZE_CONCAT"));
}
