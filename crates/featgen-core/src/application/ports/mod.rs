//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `featgen-adapters` (and the
//! CLI's terminal adapter) implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation and existence checks
//!   - `UserInteraction`: text prompts and notifications
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, Notice, UserInteraction};

#[cfg(test)]
pub use output::{MockFilesystem, MockUserInteraction};
