//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No target could be resolved: no existing-directory selection and no
    /// configured workspace root. Always an abort — generation never
    /// proceeds with an empty target.
    #[error("No workspace root available and no target directory selected")]
    NoWorkspaceRoot,

    /// Filesystem operation failed (permissions, invalid path, disk full).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The user-interaction channel failed (prompt or notification).
    #[error("User interaction failed: {reason}")]
    InteractionFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoWorkspaceRoot => vec![
                "Pass a target directory with --target <DIR>".into(),
                "Or configure workspace roots in the config file:".into(),
                "  [workspace]".into(),
                "  roots = [\"/path/to/project\"]".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::InteractionFailed { .. } => vec![
                "The terminal prompt could not be shown".into(),
                "Pass the feature name as an argument instead".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoWorkspaceRoot => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::InteractionFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
