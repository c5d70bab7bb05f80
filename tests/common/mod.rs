//! Common test utilities

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary project directory with an elz.config.yml file
pub fn create_test_project(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("elz.config.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// The elz binary, running in `dir`
pub fn elz_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("elz").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}
