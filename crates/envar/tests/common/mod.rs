//! Shared fixtures for envar integration tests.

#![allow(dead_code)] // each test binary uses a subset

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_env_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write env file");
    path
}

/// Remove the given variables from the process environment.
pub fn clear_vars(keys: &[&str]) {
    for key in keys {
        std::env::remove_var(key);
    }
}
