//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a feature" or "resolve the target".

pub mod feature_service;
pub mod resolver;

pub use feature_service::{FeatureService, GenerateRequest, GenerateSummary};
pub use resolver::{TargetSpec, ends_with_features_segment, resolve_target};
