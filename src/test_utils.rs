//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tempfile::TempDir;

use crate::listing::Entry;

/// A temporary directory tree for testing.
///
/// Provides methods for creating files and subdirectories. The tree is
/// automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file with the given content.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a file filled with `size` bytes.
    pub fn add_file_with_size(&self, path: &str, size: usize) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, vec![b'x'; size]).expect("Failed to write file");
        full_path
    }

    /// Add an empty subdirectory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// A synthetic entry for exercising filter, sort, and format logic
/// without touching the filesystem.
pub fn entry_fixture(name: &str, size: u64, is_dir: bool) -> Entry {
    let mode = if is_dir { 0o040755 } else { 0o100644 };
    Entry {
        name: name.to_string(),
        path: PathBuf::from(name),
        size,
        is_dir,
        mode,
        nlink: 1,
        uid: 1000,
        gid: 1000,
        modified: Local::now(),
    }
}
