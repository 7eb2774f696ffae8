//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` path, else the platform config dir)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use featgen_core::domain::{FeatureTemplate, builtin_templates};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Workspace roots used as fallback targets.
    pub workspace: WorkspaceConfig,
    /// Default values for generation.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// User-defined architecture templates.
    pub templates: Vec<FeatureTemplate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Fallback target directories, in priority order.  The first entry is
    /// used when no explicit `--target` selection applies.
    pub roots: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Template used when `--template` is not passed.
    pub template: Option<String>,
    /// Always place features under a `features` parent.
    pub grouped: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`.  An
    /// explicitly named file must exist; the default location is optional
    /// and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let path = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::ConfigError {
                        message: format!("config file not found: {}", path.display()),
                        source: None,
                    });
                }
                path.clone()
            }
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let raw = std::fs::read_to_string(&path).map_err(|e| CliError::ConfigError {
            message: format!("failed to read {}", path.display()),
            source: Some(Box::new(e)),
        })?;

        let config: Self = toml::from_str(&raw).map_err(|e| CliError::ConfigError {
            message: format!("failed to parse {}", path.display()),
            source: Some(Box::new(e)),
        })?;

        // Reject malformed user templates at startup rather than mid-command.
        for template in &config.templates {
            template.validate().map_err(|e| CliError::ConfigError {
                message: format!("invalid template '{}': {e}", template.name),
                source: None,
            })?;
        }

        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.featgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "featgen", "featgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".featgen.toml"))
    }

    /// Built-in templates plus user-defined ones.  A user template with a
    /// built-in's name shadows the built-in.
    pub fn template_registry(&self) -> Vec<FeatureTemplate> {
        let mut registry = self.templates.clone();
        for builtin in builtin_templates() {
            if !registry.iter().any(|t| t.name == builtin.name) {
                registry.push(builtin);
            }
        }
        registry
    }
}
