//! Common test utilities for binmirror integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new, empty test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a test workspace with the fixture binaries.yml at its root
    pub fn with_registry() -> Self {
        let workspace = Self::new();
        workspace.copy_fixture("binaries.yml", "binaries.yml");
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Copy a fixture file into the workspace
    pub fn copy_fixture(&self, fixture_name: &str, target: &str) -> PathBuf {
        let target_path = self.path.join(target);
        if let Some(parent) = target_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::copy(fixture_path(fixture_name), &target_path).expect("Failed to copy fixture");
        target_path
    }

    /// binmirror command running inside this workspace
    ///
    /// The user config directory points into the workspace so a
    /// binaries.yml on the host never leaks into a test.
    pub fn cmd(&self) -> Command {
        let mut cmd = binmirror_cmd();
        cmd.current_dir(&self.path)
            .env("HOME", &self.path)
            .env("XDG_CONFIG_HOME", self.path.join(".config"));
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Path to a file under tests/common/fixtures
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join(name)
}

/// Contents of a fixture file
pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

/// binmirror command isolated from the caller's environment
#[allow(deprecated)]
pub fn binmirror_cmd() -> Command {
    let mut cmd = Command::cargo_bin("binmirror").expect("binmirror binary should be built");
    cmd.env_remove("BINMIRROR_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
