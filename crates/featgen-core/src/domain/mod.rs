// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Featgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O and user-interaction concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod error;
pub mod feature;
pub mod layer;
pub mod plan;
pub mod template;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use feature::FeatureName;
pub use layer::{Layer, LayerSelection};
pub use plan::DirectoryPlan;
pub use template::{DEFAULT_TEMPLATE, FeatureTemplate, builtin_templates};
