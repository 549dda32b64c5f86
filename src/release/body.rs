//! Release body composition
//!
//! Builds the Markdown body that lists every mirrored archive under a heading
//! per binary type. A new entry is prepended to its type's section; entries
//! from the previous body are carried over and regrouped by title.

use indexmap::IndexMap;

use crate::error::Result;
use crate::registry::{BinaryRegistry, BinaryTypeConfig};

/// Fixed header of every release body
pub const BODY_HEADER: &str = "# Zip Assets of Binaries\n\
\n\
This repository provides Windows executables as ZIP files.\n\
\n\
## Available versions by binary type:\n";

/// Compose a release body announcing `version` of `type_id`
///
/// Each existing line is assigned to the first binary type, in registry
/// order, whose title it contains. Lines that mention no title are dropped, as
/// are blank lines and Markdown headings so that a previous body can be fed
/// back without duplicating section headings.
///
/// Sections appear in the order their types were first seen among the
/// existing lines, followed by `type_id` if it had no existing entries.
pub fn compose_release_body<S: AsRef<str>>(
    registry: &BinaryRegistry,
    type_id: &str,
    version: &str,
    date_label: &str,
    existing_lines: &[S],
) -> Result<String> {
    let binary = registry.require(type_id)?;
    let resolved = binary.resolve(version);

    let mut sections = partition_lines(registry, existing_lines);
    sections.entry(binary.id.as_str()).or_default().insert(
        0,
        format!(
            "- {} {} ({}, added on {})",
            resolved.title, version, resolved.compressed, date_label
        ),
    );

    let mut blocks = vec![BODY_HEADER.to_string()];
    for (id, lines) in &sections {
        let Some(section_binary) = registry.get(id) else {
            continue;
        };
        let mut block = format!("### {}", section_binary.title);
        for line in lines {
            block.push('\n');
            block.push_str(line);
        }
        blocks.push(block);
    }

    Ok(blocks.join("\n\n"))
}

/// Group existing lines by the binary type whose title they mention
fn partition_lines<'r, S: AsRef<str>>(
    registry: &'r BinaryRegistry,
    existing_lines: &[S],
) -> IndexMap<&'r str, Vec<String>> {
    let mut sections: IndexMap<&str, Vec<String>> = IndexMap::new();

    for line in existing_lines {
        let line = line.as_ref();
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut owners = registry.iter().filter(|b| line.contains(&b.title));
        let Some(owner) = owners.next() else {
            tracing::debug!(line, "dropping line that names no known binary type");
            continue;
        };
        log_ambiguous(line, owner, owners);

        sections
            .entry(owner.id.as_str())
            .or_default()
            .push(line.to_string());
    }

    sections
}

fn log_ambiguous<'a>(
    line: &str,
    owner: &BinaryTypeConfig,
    others: impl Iterator<Item = &'a BinaryTypeConfig>,
) {
    let others: Vec<&str> = others.map(|b| b.id.as_str()).collect();
    if !others.is_empty() {
        tracing::debug!(
            line,
            assigned = %owner.id,
            also_matches = ?others,
            "line mentions several binary titles; using the first in registry order"
        );
    }
}

/// Entry lines of an existing release body
///
/// Keeps only list items (`- ` or `* `), which drops the header, section
/// headings and blank lines.
pub fn extract_entry_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim_end)
        .filter(|line| {
            let start = line.trim_start();
            start.starts_with("- ") || start.starts_with("* ")
        })
        .map(str::to_string)
        .collect()
}
