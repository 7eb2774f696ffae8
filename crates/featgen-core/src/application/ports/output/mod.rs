//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `featgen-adapters` crate provides the filesystem implementations;
//! the CLI crate provides the interactive terminal implementation.

use std::path::Path;

use crate::error::FeatgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `featgen_adapters::filesystem::LocalFilesystem` (production)
/// - `featgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir_all` is idempotent: an already-existing directory is a
///   silent no-op, which is what makes concurrent/repeated invocations safe
///   without any coordination.
/// - There is deliberately no file writing, permission setting, or removal
///   here — the tool creates empty directories only and never rolls back.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FeatgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Info,
    Success,
    Warning,
    Error,
}

/// Port for interactive prompts and notifications.
///
/// Implemented by:
/// - `featgen-cli`'s `ConsoleInteraction` (dialoguer + terminal output)
/// - `featgen_adapters::interaction::ScriptedInteraction` (testing)
///
/// Injecting this capability keeps the generation workflow testable
/// without a real terminal.
#[cfg_attr(test, mockall::automock)]
pub trait UserInteraction: Send + Sync {
    /// Ask the user for a line of text. `None` means the prompt was
    /// dismissed without an answer.
    fn prompt_text(&self, label: &str) -> FeatgenResult<Option<String>>;

    /// Show a one-line notification.
    fn notify(&self, notice: Notice, message: &str) -> FeatgenResult<()>;
}
