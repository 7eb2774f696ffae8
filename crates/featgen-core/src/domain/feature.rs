//! Feature name value object.

use std::fmt;

use crate::domain::error::DomainError;

/// A validated feature name.
///
/// The stored string is the user input with surrounding whitespace trimmed;
/// it is used verbatim as the feature's directory name. No length or
/// character-set restriction is applied beyond "non-empty after trimming" —
/// collisions with existing directories are tolerated because directory
/// creation is idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureName(String);

impl FeatureName {
    /// Validate and construct a feature name.
    ///
    /// Fails with [`DomainError::EmptyFeatureName`] when the input is empty
    /// after trimming (which also covers an absent name mapped to `""`).
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyFeatureName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The name as entered (trimmed), used as the directory name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// PascalCase rendering for user-facing messages.
    ///
    /// Splits on `_`, `-`, and whitespace, then uppercases the first letter
    /// of each segment. Interior casing is preserved.
    pub fn pascal_case(&self) -> String {
        self.0
            .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let mut chars = segment.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect()
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
