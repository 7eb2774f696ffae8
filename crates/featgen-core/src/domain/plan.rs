use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    layer::LayerSelection,
    template::FeatureTemplate,
};

/// The set of directories one invocation will create.
///
/// This is the output of the planning step. It contains no business logic,
/// only data: the feature root plus every directory relative to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPlan {
    root: PathBuf,
    dirs: Vec<PathBuf>,
}

impl DirectoryPlan {
    /// Compute the plan for a feature rooted at `root`.
    ///
    /// For each selected layer: the layer root first, then its template
    /// children, preserving template order. The feature root itself is
    /// implied and not listed.
    pub fn for_feature(
        root: impl Into<PathBuf>,
        template: &FeatureTemplate,
        selection: LayerSelection,
    ) -> Self {
        let mut dirs = Vec::new();
        for layer in selection.layers() {
            let layer_root = PathBuf::from(layer.dir_name());
            dirs.push(layer_root.clone());
            for child in template.layer_dirs(*layer) {
                dirs.push(layer_root.join(child));
            }
        }
        Self {
            root: root.into(),
            dirs,
        }
    }

    /// The feature root (`<target>/<name>`).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Planned directories, relative to the root.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Planned directories joined onto the root.
    pub fn absolute_dirs(&self) -> Vec<PathBuf> {
        self.dirs.iter().map(|d| self.root.join(d)).collect()
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.dirs.is_empty() {
            return Err(DomainError::InvalidTemplate(
                "directory plan is empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for dir in &self.dirs {
            if dir.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: dir.display().to_string(),
                });
            }
            if !seen.insert(dir.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: dir.display().to_string(),
                });
            }
        }

        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
