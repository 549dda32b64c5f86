//! Resolve command implementation

use std::io::{self, Write};

use crate::cli::ResolveArgs;
use crate::error::{self, Result};
use crate::registry::{BinaryRegistry, ResolvedBinary};

/// Run resolve command
pub fn run(registry: &BinaryRegistry, args: &ResolveArgs) -> Result<()> {
    let resolved = registry.resolve(&args.binary_type, &args.version)?;

    let text = if args.json {
        serde_json::to_string_pretty(&resolved).map_err(|e| error::io_error(e.to_string()))?
    } else {
        format_plain(&resolved)
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}

/// `key: value` lines, one per resolved field
fn format_plain(resolved: &ResolvedBinary) -> String {
    format!(
        "title: {}\nurl: {}\nfilename: {}\ncompressed: {}",
        resolved.title, resolved.url, resolved.filename, resolved.compressed
    )
}
