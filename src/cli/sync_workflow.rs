use clap::Parser;
use std::path::PathBuf;

/// Arguments for the sync-workflow command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update the workflow in place:\n    binmirror sync-workflow --workflow .github/workflows/mirror.yml\n\n\
                  Preview without writing:\n    binmirror sync-workflow -w .github/workflows/mirror.yml --dry-run")]
pub struct SyncWorkflowArgs {
    /// Workflow file declaring a binary_type workflow_dispatch input
    #[arg(long, short = 'w', value_name = "FILE")]
    pub workflow: PathBuf,

    /// Print the updated workflow instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}
