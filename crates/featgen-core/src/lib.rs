//! Featgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Featgen
//! feature scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          featgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (FeatureService, target resolver)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, Interaction)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    featgen-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem,    │
//! │   ScriptedInteraction)                  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (FeatureName, Layer, FeatureTemplate,  │
//! │   DirectoryPlan) - No External Deps     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use featgen_core::{
//!     application::{FeatureService, GenerateRequest, TargetSpec},
//!     domain::{LayerSelection, template},
//! };
//!
//! // Use the application service (with injected adapters)
//! # fn demo(filesystem: Box<dyn featgen_core::application::Filesystem>,
//! #         interaction: Box<dyn featgen_core::application::UserInteraction>) {
//! let service = FeatureService::new(filesystem, interaction);
//! let request = GenerateRequest {
//!     selection: LayerSelection::All,
//!     name: Some("counter".into()),
//!     target: TargetSpec {
//!         selection: None,
//!         workspace_roots: vec!["/workspace".into()],
//!         grouped: false,
//!     },
//!     template: template::standard(),
//! };
//! service.generate(request).unwrap();
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FeatureService, GenerateRequest, GenerateSummary, TargetSpec,
        ports::{Filesystem, Notice, UserInteraction},
    };
    pub use crate::domain::{
        DirectoryPlan, FeatureName, FeatureTemplate, Layer, LayerSelection, builtin_templates,
    };
    pub use crate::error::{FeatgenError, FeatgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
