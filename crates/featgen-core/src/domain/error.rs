use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Feature name is empty")]
    EmptyFeatureName,

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template '{template}' declares no directories")]
    EmptyTemplate { template: String },

    #[error("Duplicate path in template: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyFeatureName => vec![
                "Provide a non-empty feature name".into(),
                "Example: featgen all counter".into(),
            ],
            Self::InvalidTemplate(msg) => vec![
                "Check the template definition".into(),
                format!("Details: {}", msg),
            ],
            Self::EmptyTemplate { template } => vec![
                format!("Template '{}' has no directories to create", template),
                "Add at least one directory to one of its layers".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("The path '{}' is listed more than once", path),
                "Remove the duplicate entry from the template".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' is absolute", path),
                "Template directories must be relative to the layer root".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        // Every domain failure here is a validation failure; the variant split
        // exists for precise messages, not for categories.
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
