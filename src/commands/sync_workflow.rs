//! Sync-workflow command implementation

use std::io::{self, Write};

use crate::cli::SyncWorkflowArgs;
use crate::error::Result;
use crate::registry::BinaryRegistry;
use crate::workflow::{SyncOutcome, sync_workflow_file};

/// Run sync-workflow command
pub fn run(registry: &BinaryRegistry, args: &SyncWorkflowArgs) -> Result<()> {
    let outcome = sync_workflow_file(&args.workflow, registry, args.dry_run)?;

    let mut stdout = io::stdout().lock();
    if args.dry_run {
        write!(stdout, "{}", outcome.document)?;
    } else {
        writeln!(stdout, "{}", summary(&args.workflow.display().to_string(), &outcome))?;
    }
    Ok(())
}

fn summary(path: &str, outcome: &SyncOutcome) -> String {
    if outcome.changed() {
        format!(
            "Updated {path}: binary_type options = {}",
            outcome.options.join(", ")
        )
    } else {
        format!("{path} is up to date")
    }
}
