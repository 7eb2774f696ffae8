//! In-memory filesystem adapter for testing.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use featgen_core::application::ports::Filesystem;

/// In-memory filesystem for testing.
///
/// Tracks the set of existing directories. Creating a directory records
/// every ancestor too, mirroring `create_dir_all` semantics.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<HashSet<PathBuf>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed an existing directory (testing helper).
    pub fn seed_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        insert_with_ancestors(&mut inner, &path.into());
    }

    /// All directories, sorted (testing helper).
    pub fn dirs(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut dirs: Vec<_> = inner.iter().cloned().collect();
        dirs.sort();
        dirs
    }

    /// Number of directories recorded.
    pub fn dir_count(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        self.inner.write().unwrap().clear();
    }
}

fn insert_with_ancestors(dirs: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        dirs.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> featgen_core::error::FeatgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| featgen_core::error::FeatgenError::Internal {
                message: "memory filesystem lock poisoned".into(),
            })?;
        insert_with_ancestors(&mut inner, path);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.read().unwrap().contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        // Only directories exist in this adapter.
        self.exists(path)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
