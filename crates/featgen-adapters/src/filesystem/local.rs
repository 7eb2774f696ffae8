//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use featgen_core::{application::ports::Filesystem, error::FeatgenResult};

/// Production filesystem implementation using `std::fs`.
///
/// `create_dir_all` inherits the idempotence of [`std::fs::create_dir_all`]:
/// an already-existing directory is a silent success, so repeated and
/// concurrent invocations targeting the same feature converge on the same
/// tree without coordination.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> FeatgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> featgen_core::error::FeatgenError {
    use featgen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_directories() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = temp.path().join("a/b/c");

        fs.create_dir_all(&nested).unwrap();

        assert!(fs.exists(&nested));
        assert!(fs.is_dir(&nested));
    }

    #[test]
    fn creating_an_existing_directory_is_a_no_op() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("twice");

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();

        assert!(fs.is_dir(&dir));
    }

    #[test]
    fn is_dir_is_false_for_files() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        let fs = LocalFilesystem::new();
        assert!(fs.exists(&file));
        assert!(!fs.is_dir(&file));
    }

    #[test]
    fn failure_carries_the_offending_path() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("blocker");
        std::fs::write(&file, "x").unwrap();

        // A file where a directory should go is a genuine filesystem error.
        let fs = LocalFilesystem::new();
        let err = fs.create_dir_all(&file.join("child")).unwrap_err();
        assert!(err.to_string().contains("blocker"));
    }
}
