//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Date used by tests that need a fixed day.
pub const DAY: &str = "2024-05-10";

/// Environment variables the CLI reads; cleared so the host cannot leak in.
const MESA_VARS: [&str; 8] = [
    "MESA_DATA_DIR",
    "MESA_BUSY_TIMEOUT",
    "MESA_REMOTE_URL",
    "MESA_REMOTE_TIMEOUT_SECONDS",
    "MESA_MAXIMUM_LOCK_WAIT_SECONDS",
    "MESA_STAFF",
    "MESA_OUTPUT_FORMAT",
    "MESA_LOG_MODE",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the mesa data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; mesa creates it on first write.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("mesa-data");

        Self { temp_dir, data_dir }
    }

    /// Get a command builder with no flags and a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("mesa").expect("Failed to find mesa binary");
        for var in MESA_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, yaml: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), yaml).expect("Failed to write config");
    }

    /// Create a reservation on [`DAY`] and return its id.
    ///
    /// # Panics
    /// Panics if the create command fails.
    pub fn create(&self, name: &str, phone: &str, party_size: u32) -> String {
        let output = self
            .command()
            .args(["create", "--name", name, "--phone", phone, "--date", DAY])
            .arg("--party-size")
            .arg(party_size.to_string())
            .output()
            .expect("Failed to run create command");

        assert!(
            output.status.success(),
            "Create failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }

    /// Confirm a reservation and return the printed locator code.
    ///
    /// # Panics
    /// Panics if the confirm command fails.
    pub fn confirm(&self, id: &str) -> String {
        let output = self
            .command()
            .args(["confirm", id, "--staff", "caixa@mesa.test"])
            .output()
            .expect("Failed to run confirm command");

        assert!(
            output.status.success(),
            "Confirm failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }

    /// List [`DAY`] with extra arguments and return stdout.
    pub fn list(&self, extra: &[&str]) -> String {
        let output = self
            .command()
            .args(["list", "--date", DAY])
            .args(extra)
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
