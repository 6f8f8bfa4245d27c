//! Test support utilities for envpull integration tests.
//!
//! Provides an isolated environment per test and helper commands.

#![allow(dead_code)]

pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working directory, home directory and fixture
/// store directory. Child processes use `.current_dir()`, so tests can run
/// in parallel.
pub struct Test {
    /// Working directory for the command
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
    /// Secrets served by the fixture store
    pub store: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
            home: TempDir::new().expect("failed to create temp home"),
            store: TempDir::new().expect("failed to create temp store"),
        }
    }

    /// Create a test environment whose store holds one string secret.
    pub fn with_secret(name: &str, value: &str) -> Self {
        let t = Self::new();
        t.put_secret(name, value);
        t
    }

    /// Add a string secret to the fixture store.
    pub fn put_secret(&self, name: &str, value: &str) {
        let path = self.store.path().join(format!("{}.txt", name));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, value).unwrap();
    }

    /// Add a binary-only secret to the fixture store.
    pub fn put_binary_secret(&self, name: &str) {
        let path = self.store.path().join(format!("{}.bin", name));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, [0u8, 159, 146, 150]).unwrap();
    }

    /// Path inside the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Read a file from the working directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("failed to read file")
    }

    /// Lines the fixture store logged, empty if it was never contacted.
    pub fn store_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.store.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
