//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the caller's `GETREL_*` settings

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads.
const GETREL_ENV_VARS: [&str; 4] = [
    "GETREL_RELATIVE_TO",
    "GETREL_CASE_SENSITIVE",
    "GETREL_ALWAYS_START_WITH_DOT",
    "GETREL_LOG_MODE",
];

/// Test environment rooted in a temporary directory.
#[allow(dead_code)]
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running in the temporary directory.
    ///
    /// `$PWD` is pointed at the temporary directory as well, so relative
    /// inputs resolve against the path spelled the way the test built it.
    pub fn command(&self) -> Command {
        let mut cmd = command();
        cmd.current_dir(&self.temp_path).env("PWD", &self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Whether the filesystem under the temp dir folds case.
    ///
    /// Creates a probe directory and checks whether its upper-case spelling
    /// resolves to it.
    pub fn folds_case(&self) -> bool {
        let probe = self.create_dir("case-probe");
        let upper = self.temp_path.join("CASE-PROBE");
        let folds = upper.exists();
        std::fs::remove_dir(probe).expect("Failed to remove probe directory");
        folds
    }
}

/// Get a command builder for the binary with `GETREL_*` variables cleared.
pub fn command() -> Command {
    let mut cmd = Command::cargo_bin("get-relative-path").expect("Failed to find binary");
    for var in GETREL_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Run the binary with `args` and return its trimmed stdout.
///
/// # Panics
/// Panics if the command fails.
#[allow(dead_code)]
pub fn output_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run command");
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("Invalid UTF-8 in output")
        .trim_end()
        .to_string()
}
