//! Target-directory resolution.
//!
//! One invocation resolves its target exactly once: an explicit selection
//! that is an existing directory wins, otherwise the first workspace root.
//! When neither is available the invocation aborts before touching the
//! filesystem — resolution failure is never silently carried forward.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::{error::ApplicationError, ports::Filesystem},
    error::FeatgenResult,
};

/// Directory name recognized as a feature-group parent.
const FEATURES_DIR: &str = "features";

/// Where a feature should be rooted, as gathered by the entry point.
#[derive(Debug, Clone, Default)]
pub struct TargetSpec {
    /// Explicit selection (e.g. `--target`). Used only when it is an
    /// existing directory.
    pub selection: Option<PathBuf>,
    /// Fallback targets, in priority order. The first one wins.
    pub workspace_roots: Vec<PathBuf>,
    /// Place the feature under a `features` parent segment, reusing the
    /// target when it already ends in one.
    pub grouped: bool,
}

/// Resolve the base directory the feature root is created under.
pub fn resolve_target(spec: &TargetSpec, fs: &dyn Filesystem) -> FeatgenResult<PathBuf> {
    let base = match spec.selection.as_ref().filter(|p| fs.is_dir(p)) {
        Some(selection) => {
            debug!(target = %selection.display(), "using explicit selection");
            selection.clone()
        }
        None => spec
            .workspace_roots
            .first()
            .cloned()
            .inspect(|root| debug!(target = %root.display(), "using first workspace root"))
            .ok_or(ApplicationError::NoWorkspaceRoot)?,
    };

    if spec.grouped && !ends_with_features_segment(&base) {
        return Ok(base.join(FEATURES_DIR));
    }
    Ok(base)
}

/// Whether the path's final component is literally `features`.
pub fn ends_with_features_segment(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == FEATURES_DIR)
}

// ── tests ─────────────────────────────────────────────────────────────────────
