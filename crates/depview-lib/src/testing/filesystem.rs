//! Filesystem-based integration testing utilities
//!
//! Temporary workspaces laid out file by file, removed on drop.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory fixture with automatic cleanup
pub struct TempDirFixture {
    /// The temporary directory (automatically cleaned up on drop)
    pub temp_dir: TempDir,
}

impl TempDirFixture {
    /// Create a new temporary directory fixture
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        Ok(Self { temp_dir })
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of an entry inside the fixture
    pub fn join(&self, relative: &str) -> PathBuf {
        self.path().join(relative)
    }

    /// Create a subdirectory within the temporary directory
    pub fn create_dir(&self, subdir: &str) -> Result<(), Box<dyn std::error::Error>> {
        fs::create_dir_all(self.join(subdir))?;
        Ok(())
    }

    /// Write content to a file, creating parent directories
    pub fn write_file(&self, file_path: &str, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        let full_path = self.join(file_path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, content)?;
        Ok(())
    }

    /// Read content from a file within the temporary directory
    pub fn read_file(&self, file_path: &str) -> Result<String, Box<dyn std::error::Error>> {
        Ok(fs::read_to_string(self.join(file_path))?)
    }

    /// Check if a file exists within the temporary directory
    pub fn file_exists(&self, file_path: &str) -> bool {
        self.join(file_path).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read_nested_file() {
        let fixture = TempDirFixture::new().unwrap();

        fixture.write_file("src/app/widget.ts", "export {}").unwrap();

        assert!(fixture.file_exists("src/app/widget.ts"));
        assert_eq!(fixture.read_file("src/app/widget.ts").unwrap(), "export {}");
    }

    #[test]
    fn test_cleanup_on_drop() {
        let path = {
            let fixture = TempDirFixture::new().unwrap();
            fixture.create_dir("node_modules").unwrap();
            fixture.path().to_path_buf()
        };

        assert!(!path.exists());
    }
}
