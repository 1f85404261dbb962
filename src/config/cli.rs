use crate::core::Storage;
use crate::utils::error::{MulError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Files relative to `base_path`; absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(Path::new(path))
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.resolve(path))?;
        Ok(data)
    }

    /// Truncates any existing file. Parent directories are not created.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        fs::write(&full_path, data).map_err(|source| MulError::WriteError {
            path: full_path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("a.p", b"first").unwrap();
        storage.write_file("a.p", b"2nd").unwrap();

        assert_eq!(storage.read_file("a.p").unwrap(), b"2nd");
    }

    #[test]
    fn test_missing_directory_is_not_created() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let err = storage.write_file("nope/a.p", b"x").unwrap_err();
        assert!(matches!(err, MulError::WriteError { .. }));
        assert!(!temp_dir.path().join("nope").exists());
    }
}
