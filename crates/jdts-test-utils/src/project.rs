//! [`TestProject`] builder for on-disk JDTS scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary project directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use jdts_test_utils::{java, project::TestProject};
///
/// let project = TestProject::new();
/// project.write_config("[[tags]]\nid = \"since\"\nvalue = \"1.0\"\n");
/// project.write_source("src/Counter.java", java::UNTAGGED_CLASS);
/// project.assert_file_contains("jdts.toml", "since");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `jdts.toml` at the project root.
    pub fn write_config(&self, toml: &str) -> PathBuf {
        self.write_file("jdts.toml", toml)
    }

    /// Write a source file, creating parent directories.
    pub fn write_source(&self, relative: &str, content: &str) -> PathBuf {
        self.write_file(relative, content)
    }

    fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read a file relative to the root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that the file at `relative` contains `content`.
    pub fn assert_file_contains(&self, relative: &str, content: &str) {
        let file_content = self.read(relative);
        assert!(
            file_content.contains(content),
            "File {relative} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }

    /// Assert that the file at `relative` equals `expected`.
    pub fn assert_file_eq(&self, relative: &str, expected: &str) {
        let actual = self.read(relative);
        assert_eq!(actual, expected, "File {relative} differs");
    }
}
