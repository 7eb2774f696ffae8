//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "featgen",
    bin_name = "featgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Clean-architecture feature folders in one command",
    long_about = "Featgen scaffolds the directory tree for a layered (clean) \
                  feature architecture: data, domain, and presentation.",
    after_help = "EXAMPLES:\n\
        \x20 featgen all counter\n\
        \x20 featgen presentation login --target ./lib/features\n\
        \x20 featgen data sync --template expanded\n\
        \x20 featgen completions bash > /usr/share/bash-completion/completions/featgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a complete feature (data + domain + presentation).
    #[command(
        visible_alias = "a",
        about = "Generate a complete feature",
        after_help = "EXAMPLES:\n\
            \x20 featgen all counter\n\
            \x20 featgen all checkout --target ./lib/features --grouped"
    )]
    All(GenerateArgs),

    /// Generate only the data layer of a feature.
    #[command(about = "Generate the data layer")]
    Data(GenerateArgs),

    /// Generate only the domain layer of a feature.
    #[command(about = "Generate the domain layer")]
    Domain(GenerateArgs),

    /// Generate only the presentation layer of a feature.
    #[command(about = "Generate the presentation layer")]
    Presentation(GenerateArgs),

    /// List available architecture templates.
    #[command(
        visible_alias = "ls",
        about = "List architecture templates",
        after_help = "EXAMPLES:\n\
            \x20 featgen templates\n\
            \x20 featgen templates --format json"
    )]
    Templates(TemplatesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 featgen completions bash > ~/.local/share/bash-completion/completions/featgen\n\
            \x20 featgen completions zsh  > ~/.zfunc/_featgen\n\
            \x20 featgen completions fish > ~/.config/fish/completions/featgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate (shared by the four layer commands) ──────────────────────────────

/// Arguments shared by `all`, `data`, `domain`, and `presentation`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Feature name.  When omitted, an interactive prompt asks for it.
    #[arg(value_name = "NAME", help = "Feature name (prompted when omitted)")]
    pub name: Option<String>,

    /// Target directory the feature root is created under.
    #[arg(
        short = 't',
        long = "target",
        value_name = "DIR",
        help = "Target directory (defaults to the first workspace root)"
    )]
    pub target: Option<PathBuf>,

    /// Architecture template to generate from.
    #[arg(
        long = "template",
        value_name = "NAME",
        help = "Architecture template (see `featgen templates`)"
    )]
    pub template: Option<String>,

    /// Place the feature under a `features` parent directory.
    #[arg(
        long = "grouped",
        help = "Nest the feature under a 'features' directory"
    )]
    pub grouped: bool,

    /// Preview what would be created without writing anything.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `featgen templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `templates` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `featgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── tests ─────────────────────────────────────────────────────────────────────
