//! Common test utilities for append_manifests integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding a manifest and a content file
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Parse a YAML file from workspace
    #[allow(dead_code)]
    pub fn read_yaml(&self, path: &str) -> serde_yaml::Value {
        serde_yaml::from_str(&self.read_file(path)).expect("Failed to parse YAML")
    }

    /// Names of every entry in the workspace root
    #[allow(dead_code)]
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.path)
            .expect("Failed to list workspace")
            .map(|entry| {
                entry
                    .expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

/// Command for the real append_manifests binary, run from `dir`
#[allow(deprecated)]
pub fn append_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("append_manifests").expect("binary not built");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

/// Sequence of strings from a YAML value
#[allow(dead_code)]
pub fn strings(value: &serde_yaml::Value) -> Vec<String> {
    value
        .as_sequence()
        .expect("expected a sequence")
        .iter()
        .map(|v| v.as_str().expect("expected a string").to_string())
        .collect()
}
