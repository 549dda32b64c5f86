//! Body command implementation
//!
//! Composes a release body announcing one new archive, merged with the
//! entries of the previous body.

use crate::cli::BodyArgs;
use crate::commands::helpers::today_label;
use crate::common::fs::{read_text, write_output};
use crate::error::{self, Result};
use crate::registry::BinaryRegistry;
use crate::release::{compose_release_body, extract_entry_lines};

/// Run body command
pub fn run(registry: &BinaryRegistry, args: &BodyArgs) -> Result<()> {
    let existing = read_existing_lines(args)?;
    let date = args.date.clone().unwrap_or_else(today_label);

    tracing::debug!(
        binary_type = %args.binary_type,
        version = %args.version,
        existing_lines = existing.len(),
        "composing release body"
    );

    let body = compose_release_body(registry, &args.binary_type, &args.version, &date, &existing)?;
    write_output(args.output.as_deref(), &body)
}

/// Entry lines passed with --existing, if any
fn read_existing_lines(args: &BodyArgs) -> Result<Vec<String>> {
    let Some(path) = &args.existing else {
        return Ok(Vec::new());
    };

    let content = read_text(path)
        .map_err(|e| error::file_read_failed(path.display().to_string(), e.to_string()))?;

    Ok(if args.from_body {
        extract_entry_lines(&content)
    } else {
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    })
}
