//! binmirror - release notes for mirrored binaries
//!
//! Command line front end for composing release bodies and asset
//! descriptions from `binaries.yml`.

use clap::Parser;

use binmirror::cli::{Cli, Commands};
use binmirror::commands;
use binmirror::commands::helpers::load_registry;
use binmirror::error::Result;
use binmirror::logging;

fn run(cli: Cli) -> Result<()> {
    if !cli.command.needs_registry() {
        return match cli.command {
            Commands::Completions(args) => commands::completions::run(&args),
            _ => commands::version::run(cli.config),
        };
    }

    let registry = load_registry(cli.config)?;

    match cli.command {
        Commands::Types(args) => commands::types::run(&registry, &args),
        Commands::Resolve(args) => commands::resolve::run(&registry, &args),
        Commands::Body(args) => commands::body::run(&registry, &args),
        Commands::Describe(args) => commands::describe::run(&registry, &args),
        Commands::SyncWorkflow(args) => commands::sync_workflow::run(&registry, &args),
        Commands::Version => commands::version::run(None),
        Commands::Completions(args) => commands::completions::run(&args),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
