//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary directory for config files
//! - Command builders isolated from the caller's environment

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables the binary reads; cleared for every test command.
const ISOLATED_VARS: [&str; 3] = ["ABSPATH_STYLE", "ABSPATH_CONFIG", "ABSPATH_LOG_MODE"];

/// Test environment with an isolated temporary directory.
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

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Environment overrides are still cleared so the host environment
    /// cannot leak into the test.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("abspath").expect("Failed to find abspath binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder that normalizes with POSIX rules.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--style").arg("posix");
        cmd
    }

    /// Get a command builder that normalizes with Windows rules.
    pub fn command_windows(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--style").arg("windows");
        cmd
    }

    /// Write a configuration file into the temporary directory.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    /// Run a command and return its trimmed stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn stdout_of(&self, mut cmd: Command) -> String {
        let output = cmd.output().expect("Failed to run abspath");
        assert!(
            output.status.success(),
            "abspath failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }
}
