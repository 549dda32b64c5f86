//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - types: Types command arguments
//! - resolve: Resolve command arguments
//! - body: Body command arguments
//! - describe: Describe command arguments
//! - sync_workflow: Sync-workflow command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod body;
pub mod completions;
pub mod describe;
pub mod resolve;
pub mod sync_workflow;
pub mod types;

pub use body::BodyArgs;
pub use completions::CompletionsArgs;
pub use describe::DescribeArgs;
pub use resolve::ResolveArgs;
pub use sync_workflow::SyncWorkflowArgs;
pub use types::TypesArgs;

/// binmirror - release notes for mirrored binaries
///
/// Compose Markdown release notes for a repository that mirrors binaries as zip assets.
#[derive(Parser, Debug)]
#[command(
    name = "binmirror",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Release notes for repositories that mirror binaries as zip assets",
    long_about = "binmirror reads the binary types declared in binaries.yml and composes \
                  Markdown release bodies and asset descriptions, grouped by binary type.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  binmirror types                                   \x1b[90m# List configured binary types\x1b[0m\n   \
                  binmirror resolve bazel_nojdk 7.4.1               \x1b[90m# Show URL and filenames\x1b[0m\n   \
                  binmirror body bazel_nojdk 7.4.1 --existing -     \x1b[90m# Compose a release body\x1b[0m\n   \
                  binmirror describe --assets assets.json           \x1b[90m# Describe published assets\x1b[0m\n   \
                  binmirror sync-workflow -w .github/workflows/mirror.yml\n\n\
                  "
)]
pub struct Cli {
    /// Path to binaries.yml (defaults to ./binaries.yml, then the user config directory)
    #[arg(long, short = 'c', global = true, env = "BINMIRROR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List configured binary types
    Types(TypesArgs),

    /// Show the URL and filenames of a binary type at a version
    Resolve(ResolveArgs),

    /// Compose a release body with a new entry
    Body(BodyArgs),

    /// Compose a release description from published assets
    Describe(DescribeArgs),

    /// Update the binary_type options of a workflow from the registry
    SyncWorkflow(SyncWorkflowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// Whether the command reads the binary registry
    pub fn needs_registry(&self) -> bool {
        !matches!(self, Commands::Version | Commands::Completions(_))
    }
}
