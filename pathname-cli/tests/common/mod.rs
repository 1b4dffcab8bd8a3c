//! Common test utilities for CLI integration tests.
//!
//! Every command runs with `HOME` pointed at a temporary directory and all
//! `PATHNAME_*` variables cleared, so a developer's own configuration never
//! leaks into the tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the CLI reads.
const PATHNAME_ENV_VARS: &[&str] = &[
    "PATHNAME_CONFIG",
    "PATHNAME_MAX_PATH_LEN",
    "PATHNAME_OUTPUT_FORMAT",
    "PATHNAME_NORMALIZE_CONCAT",
    "PATHNAME_LOG_MODE",
];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, used as `HOME`
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().to_path_buf();
        Self { temp_dir, home }
    }

    /// Get a command builder for the `pathname` binary with a clean
    /// environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathname").expect("Failed to find pathname binary");
        cmd.env("HOME", &self.home);
        for var in PATHNAME_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the home path.
    pub fn path(&self) -> &Path {
        &self.home
    }

    /// Write `~/.pathname/config.yaml`.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home.join(".pathname");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Write a file under the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Create a subdirectory under the temporary directory.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.home.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run");
        assert!(
            output.status.success(),
            "{args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout is UTF-8")
    }

    /// Run a command with `--format json` and parse its stdout.
    pub fn json_of(&self, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let stdout = self.stdout_of(&full);
        serde_json::from_str(&stdout).expect("stdout is JSON")
    }
}
