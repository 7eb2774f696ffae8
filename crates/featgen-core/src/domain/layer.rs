//! Architectural layers and the per-invocation layer selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three architectural concerns a feature is organized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Data,
    Domain,
    Presentation,
}

impl Layer {
    /// Generation order is fixed: data, then domain, then presentation.
    pub const ALL: [Layer; 3] = [Layer::Data, Layer::Domain, Layer::Presentation];

    /// Directory name of the layer root under the feature root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Domain => "domain",
            Self::Presentation => "presentation",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Which subtree(s) a single invocation generates.
///
/// Fixed for the lifetime of one invocation; chosen by which command the
/// user invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerSelection {
    /// All three layers, in the fixed order.
    All,
    /// Exactly one layer.
    Single(Layer),
}

impl LayerSelection {
    /// The layers to generate, in generation order.
    pub fn layers(self) -> &'static [Layer] {
        match self {
            Self::All => &Layer::ALL,
            Self::Single(Layer::Data) => &[Layer::Data],
            Self::Single(Layer::Domain) => &[Layer::Domain],
            Self::Single(Layer::Presentation) => &[Layer::Presentation],
        }
    }
}

impl fmt::Display for LayerSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Single(layer) => layer.fmt(f),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_dir_names() {
        assert_eq!(Layer::Data.dir_name(), "data");
        assert_eq!(Layer::Domain.dir_name(), "domain");
        assert_eq!(Layer::Presentation.dir_name(), "presentation");
    }

    #[test]
    fn all_selection_covers_every_layer_in_order() {
        assert_eq!(
            LayerSelection::All.layers(),
            &[Layer::Data, Layer::Domain, Layer::Presentation]
        );
    }

    #[test]
    fn single_selection_is_just_that_layer() {
        assert_eq!(
            LayerSelection::Single(Layer::Presentation).layers(),
            &[Layer::Presentation]
        );
    }

    #[test]
    fn selection_display() {
        assert_eq!(LayerSelection::All.to_string(), "all");
        assert_eq!(LayerSelection::Single(Layer::Data).to_string(), "data");
    }
}
