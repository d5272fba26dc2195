//! File system utility functions
//!
//! Provides safe file operations with proper error handling.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug, Clone, Copy)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Move a file from source to destination, replacing anything already at
    /// the destination
    #[instrument(skip(self))]
    pub fn move_file<P: AsRef<Path> + std::fmt::Debug, Q: AsRef<Path> + std::fmt::Debug>(
        &self,
        src: P,
        dst: Q,
    ) -> io::Result<()> {
        let src = src.as_ref();
        let dst = dst.as_ref();

        debug!("Moving file: {} -> {}", src.display(), dst.display());

        // Try to rename first (faster if on same filesystem)
        match fs::rename(src, dst) {
            Ok(()) => {
                debug!("File moved successfully via rename");
                Ok(())
            }
            Err(e) => {
                // If rename fails (e.g., across filesystems), copy and delete
                debug!("Rename failed ({}), trying copy + delete", e);
                fs::copy(src, dst)?;
                fs::remove_file(src)?;
                debug!("File moved successfully via copy + delete");
                Ok(())
            }
        }
    }

    /// Create directories recursively
    #[instrument(skip(self))]
    pub fn create_dir_all<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        debug!("Creating directory: {}", path.display());
        fs::create_dir_all(path)
    }

    /// Check if a path exists and is a file
    pub fn is_file<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_file()
    }

    /// Check if a path exists and is a directory
    pub fn is_dir<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_dir()
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_move_file() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let src = temp_dir.path().join("source.txt");
        let dst = temp_dir.path().join("dest.txt");

        fs::write(&src, "test content").unwrap();

        fs_utils.move_file(&src, &dst).unwrap();

        assert!(dst.exists());
        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "test content");
    }

    #[test]
    fn test_move_file_overwrites_destination() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let src = temp_dir.path().join("new.json");
        let dst = temp_dir.path().join("old.json");

        fs::write(&src, "{\"scriptId\":\"new\"}").unwrap();
        fs::write(&dst, "{\"scriptId\":\"old\"}").unwrap();

        fs_utils.move_file(&src, &dst).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "{\"scriptId\":\"new\"}");
    }

    #[test]
    fn test_move_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let result = fs_utils.move_file(
            temp_dir.path().join("missing"),
            temp_dir.path().join("dest"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_create_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let nested_path = temp_dir.path().join("a").join("b").join("c");

        fs_utils.create_dir_all(&nested_path).unwrap();
        assert!(nested_path.exists());
        assert!(nested_path.is_dir());
    }

    #[test]
    fn test_is_file_and_is_dir() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("test.txt");
        let dir_path = temp_dir.path().join("testdir");

        fs::write(&file_path, "content").unwrap();
        fs::create_dir(&dir_path).unwrap();

        assert!(fs_utils.is_file(&file_path));
        assert!(!fs_utils.is_dir(&file_path));

        assert!(fs_utils.is_dir(&dir_path));
        assert!(!fs_utils.is_file(&dir_path));

        assert!(!fs_utils.is_file("nonexistent"));
        assert!(!fs_utils.is_dir("nonexistent"));
    }
}
