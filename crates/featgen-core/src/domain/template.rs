//! Architecture templates: layer → relative subdirectory lists.
//!
//! The two tree shapes this tool ships were observed in the wild as two
//! hard-coded variants of the same layout. Here they are modeled as named
//! templates instead: selectable by name, extensible via configuration, and
//! validated once on load rather than trusted blindly.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, layer::Layer};

/// Name of the template used when neither the CLI nor the configuration
/// picks one.
pub const DEFAULT_TEMPLATE: &str = "standard";

/// A named mapping from each layer to the subdirectories created beneath
/// that layer's root.
///
/// Paths are relative to the layer root and use `/` separators; nested
/// entries like `adapter/contracts/local` are allowed (directory creation
/// handles missing intermediates). The layer roots themselves (`data`,
/// `domain`, `presentation`) are implicit and never listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(default)]
    pub domain: Vec<String>,
    #[serde(default)]
    pub presentation: Vec<String>,
}

impl FeatureTemplate {
    /// Subdirectories of the given layer, relative to the layer root.
    pub fn layer_dirs(&self, layer: Layer) -> &[String] {
        match layer {
            Layer::Data => &self.data,
            Layer::Domain => &self.domain,
            Layer::Presentation => &self.presentation,
        }
    }

    /// Validate the template's shape.
    ///
    /// - at least one directory across the three layers
    /// - entries are non-empty and relative
    /// - no duplicates within a layer
    pub fn validate(&self) -> Result<(), DomainError> {
        if Layer::ALL.iter().all(|l| self.layer_dirs(*l).is_empty()) {
            return Err(DomainError::EmptyTemplate {
                template: self.name.clone(),
            });
        }

        for layer in Layer::ALL {
            let mut seen = HashSet::new();
            for dir in self.layer_dirs(layer) {
                if dir.trim().is_empty() {
                    return Err(DomainError::InvalidTemplate(format!(
                        "template '{}' has an empty entry under '{}'",
                        self.name, layer
                    )));
                }
                if Path::new(dir).is_absolute() {
                    return Err(DomainError::AbsolutePathNotAllowed { path: dir.clone() });
                }
                if !seen.insert(dir.as_str()) {
                    return Err(DomainError::DuplicatePath {
                        path: format!("{}/{}", layer, dir),
                    });
                }
            }
        }

        Ok(())
    }

    /// Total number of directories this template creates for a full feature
    /// (layer roots included).
    pub fn dir_count(&self) -> usize {
        Layer::ALL
            .iter()
            .map(|l| self.layer_dirs(*l).len() + 1)
            .sum()
    }
}

// ── Built-in templates ────────────────────────────────────────────────────────

/// The canonical shallow shape. This is the default.
pub fn standard() -> FeatureTemplate {
    FeatureTemplate {
        name: "standard".into(),
        description: "Shallow clean-architecture layout".into(),
        data: vec!["adapter".into(), "data_source".into()],
        domain: vec!["contracts".into(), "models".into()],
        presentation: vec!["models".into(), "view".into(), "view_models".into()],
    }
}

/// The deeper observed variant: split adapters and data sources by
/// local/remote, and break the domain models down by role.
pub fn expanded() -> FeatureTemplate {
    FeatureTemplate {
        name: "expanded".into(),
        description: "Deep clean-architecture layout with local/remote splits".into(),
        data: vec![
            "adapter/repositories".into(),
            "adapter/contracts/local".into(),
            "adapter/contracts/remote".into(),
            "adapter/models/local".into(),
            "adapter/models/remote".into(),
            "data_source/local".into(),
            "data_source/remote".into(),
        ],
        domain: vec![
            "contracts".into(),
            "models/aggregators".into(),
            "models/entities".into(),
            "models/failures".into(),
            "models/validators".into(),
            "models/value_objects".into(),
        ],
        presentation: vec!["models".into(), "view".into(), "view_models".into()],
    }
}

/// All templates that ship with the tool.
pub fn builtin_templates() -> Vec<FeatureTemplate> {
    vec![standard(), expanded()]
}

// ── tests ─────────────────────────────────────────────────────────────────────
