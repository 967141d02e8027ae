//! Filesystem helpers.

use crate::error::CoreError;
use std::fs;
use std::path::Path;

/// Ensures a directory exists at `path`, creating it (and parents) if needed.
///
/// Fails with [`CoreError::Filesystem`] when the path exists but is not a
/// directory, or when creation fails.
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(CoreError::Filesystem {
                message: "Path exists but is not a directory".to_string(),
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "Path exists but is not a directory",
                ),
            });
        }
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| CoreError::Filesystem {
        message: "Failed to create directory".to_string(),
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_nested_directories() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("a").join("b");
        ensure_dir_exists(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn succeeds_when_directory_already_exists() {
        let tmp = TempDir::new().unwrap();
        ensure_dir_exists(tmp.path()).unwrap();
    }

    #[test]
    fn fails_when_path_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join("occupied");
        std::fs::write(&file_path, b"x").unwrap();
        let result = ensure_dir_exists(&file_path);
        assert!(matches!(result, Err(CoreError::Filesystem { .. })));
    }
}
