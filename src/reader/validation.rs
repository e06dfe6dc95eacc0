//! Path checks performed before a file is opened for reverse reading.

use crate::error::{BackreadError, Result};
use std::path::Path;

/// Validate that a file path points at something the reader can walk backward
///
/// # Validations Performed
/// - Path exists
/// - Path is a regular file (directories and other special files are rejected)
///
/// Empty files pass; reading one simply reports end of file right away.
///
/// # Error Cases
/// - `FileNotFound` when nothing exists at `path`
/// - `PermissionDenied` when metadata cannot be read
/// - `NotAFile` for directories, sockets, devices
pub fn validate_file_path(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| BackreadError::from_open(path, e))?;

    if !metadata.is_file() {
        return Err(BackreadError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    /// Create a test file with specific content
    fn create_test_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content)
            .expect("Failed to write test content");
        file.flush().expect("Failed to flush test file");
        file
    }

    #[test]
    fn test_validate_valid_file() {
        let test_file = create_test_file(b"Line 1\nLine 2\nLine 3\n");
        assert!(validate_file_path(test_file.path()).is_ok());
    }

    #[test]
    fn test_validate_empty_file_is_allowed() {
        let empty_file = create_test_file(&[]);
        assert!(validate_file_path(empty_file.path()).is_ok());
    }

    #[test]
    fn test_validate_nonexistent_file() {
        let non_existent = Path::new("/this/file/does/not/exist.log");

        match validate_file_path(non_existent).unwrap_err() {
            BackreadError::FileNotFound { path } => assert_eq!(path, non_existent),
            other => panic!("Expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        match validate_file_path(temp_dir.path()).unwrap_err() {
            BackreadError::NotAFile { path } => assert_eq!(path, temp_dir.path()),
            other => panic!("Expected NotAFile, got {other:?}"),
        }
    }
}
