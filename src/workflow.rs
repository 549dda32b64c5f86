//! Workflow dispatch option sync
//!
//! Release workflows expose the binary type as a `choice` input. This module
//! rewrites that input's `options` list from the registry so the two cannot
//! drift apart:
//!
//! ```yaml
//! on:
//!   workflow_dispatch:
//!     inputs:
//!       binary_type:
//!         type: choice
//!         options: [bazel_nojdk, buildifier, ninja]
//! ```
//!
//! The key path is validated with `serde_yaml`, but the file is edited as
//! text: only the lines of the `options` list change, so comments, quoting
//! and indentation elsewhere in the workflow are left exactly as they were.

use std::fs;
use std::ops::Range;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::common::fs::write_atomic;
use crate::error::{self, Result};
use crate::registry::BinaryRegistry;

/// Key path of the input whose options are synced
pub const BINARY_TYPE_INPUT_PATH: [&str; 4] = ["on", "workflow_dispatch", "inputs", "binary_type"];

/// Result of syncing a workflow document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Options before the sync (empty if there were none)
    pub previous: Vec<String>,
    /// Options after the sync, in registry order
    pub options: Vec<String>,
    /// The updated workflow document
    pub document: String,
}

impl SyncOutcome {
    pub fn changed(&self) -> bool {
        self.previous != self.options
    }
}

/// Replace the `binary_type` options of a workflow document
///
/// `path` only labels errors. When the options already match the registry
/// the document is returned unchanged.
pub fn sync_workflow_options(
    workflow_yaml: &str,
    path: &str,
    registry: &BinaryRegistry,
) -> Result<SyncOutcome> {
    let workflow: Value = serde_yaml::from_str(workflow_yaml)
        .map_err(|e| error::workflow_invalid(path, e.to_string()))?;
    let previous = option_list(binary_type_input(&workflow, path)?);

    let options: Vec<String> = registry.type_ids().into_iter().map(str::to_string).collect();
    if previous == options {
        return Ok(SyncOutcome {
            previous,
            options,
            document: workflow_yaml.to_string(),
        });
    }

    let document = splice_options(workflow_yaml, &options).ok_or_else(|| {
        error::workflow_invalid(
            path,
            "binary_type input must be a block mapping to be updated in place",
        )
    })?;

    let updated: Value = serde_yaml::from_str(&document)
        .map_err(|e| error::workflow_invalid(path, e.to_string()))?;
    if option_list(binary_type_input(&updated, path)?) != options {
        return Err(error::workflow_invalid(
            path,
            "binary_type options could not be updated in place",
        ));
    }

    Ok(SyncOutcome {
        previous,
        options,
        document,
    })
}

fn binary_type_input<'a>(workflow: &'a Value, path: &str) -> Result<&'a Mapping> {
    let mut input = workflow;
    for key in BINARY_TYPE_INPUT_PATH {
        input = input
            .get(key)
            .ok_or_else(|| error::workflow_invalid(path, format!("missing '{key}' key")))?;
    }
    input
        .as_mapping()
        .ok_or_else(|| error::workflow_invalid(path, "binary_type input is not a mapping"))
}

fn option_list(input: &Mapping) -> Vec<String> {
    input
        .get("options")
        .and_then(Value::as_sequence)
        .map(|seq| {
            seq.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Lines that carry YAML structure (not blank, comment or document markers)
fn is_content(line: &str) -> bool {
    let trimmed = line.trim();
    !(trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with('%')
        || (indent_of(line) == 0 && (trimmed.starts_with("---") || trimmed.starts_with("..."))))
}

/// Key of a `key: value` line, unquoted
fn key_of(line: &str) -> Option<&str> {
    let (key, rest) = line.trim().split_once(':')?;
    if !(rest.is_empty() || rest.starts_with([' ', '#'])) {
        return None;
    }
    Some(key.trim().trim_matches(|c: char| c == '"' || c == '\''))
}

/// Value written on the same line as its key, without a trailing comment
fn inline_value(line: &str) -> &str {
    let rest = line.split_once(':').map_or("", |(_, rest)| rest.trim());
    if rest.starts_with('#') { "" } else { rest }
}

/// Indentation of the first structural line in `range`, if deeper than `parent`
fn child_indent(lines: &[&str], range: Range<usize>, parent: Option<usize>) -> Option<usize> {
    let indent = range
        .map(|i| lines[i])
        .find(|line| is_content(line))
        .map(indent_of)?;
    match parent {
        Some(parent) if indent <= parent => None,
        _ => Some(indent),
    }
}

fn find_child_key(
    lines: &[&str],
    mut range: Range<usize>,
    parent: Option<usize>,
    key: &str,
) -> Option<usize> {
    let indent = child_indent(lines, range.clone(), parent)?;
    range.find(|&i| {
        is_content(lines[i]) && indent_of(lines[i]) == indent && key_of(lines[i]) == Some(key)
    })
}

/// End (exclusive) of the block owned by the key at `at`
///
/// Trailing blank and comment lines are not part of the block. With
/// `sequence_items`, `- ` items at the key's own indentation also belong to it.
fn block_end(lines: &[&str], at: usize, indent: usize, sequence_items: bool) -> usize {
    let mut end = at + 1;
    for (i, line) in lines.iter().enumerate().skip(at + 1) {
        if !is_content(line) {
            continue;
        }
        let line_indent = indent_of(line);
        let item = sequence_items && line_indent == indent && line.trim_start().starts_with('-');
        if line_indent > indent || item {
            end = i + 1;
        } else {
            break;
        }
    }
    end
}

fn yaml_scalar(value: &str) -> String {
    serde_yaml::to_string(value).map_or_else(
        |_| format!("'{}'", value.replace('\'', "''")),
        |s| s.trim_end().to_string(),
    )
}

/// Rewrite the `options` list of the `binary_type` input in place
///
/// Returns `None` when the input is not written as nested block mappings.
/// Comments between the old list items are dropped with them.
fn splice_options(text: &str, options: &[String]) -> Option<String> {
    let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let lines: Vec<&str> = text.lines().collect();

    let mut range = 0..lines.len();
    let mut parent = None;
    let mut input = 0;
    for key in BINARY_TYPE_INPUT_PATH {
        let at = find_child_key(&lines, range.clone(), parent, key)?;
        if !inline_value(lines[at]).is_empty() {
            return None;
        }
        let indent = indent_of(lines[at]);
        range = at + 1..block_end(&lines, at, indent, false);
        parent = Some(indent);
        input = at;
    }

    let input_indent = indent_of(lines[input]);
    let field_indent = child_indent(&lines, range.clone(), Some(input_indent))?;
    let (start, end, header, item_indent) =
        match find_child_key(&lines, range.clone(), Some(input_indent), "options") {
            Some(at) => {
                let end = block_end(&lines, at, field_indent, true);
                let item_indent = lines[at + 1..end]
                    .iter()
                    .find(|line| line.trim_start().starts_with("- "))
                    .map_or(field_indent + 2, |line| indent_of(line));
                let header = if inline_value(lines[at]).is_empty() {
                    lines[at].to_string()
                } else {
                    format!("{}options:", " ".repeat(field_indent))
                };
                (at, end, header, item_indent)
            }
            None => (
                range.end,
                range.end,
                format!("{}options:", " ".repeat(field_indent)),
                field_indent + 2,
            ),
        };

    let mut block = Vec::with_capacity(options.len() + 1);
    if options.is_empty() {
        block.push(format!("{}options: []", " ".repeat(field_indent)));
    } else {
        block.push(header);
        block.extend(
            options
                .iter()
                .map(|o| format!("{}- {}", " ".repeat(item_indent), yaml_scalar(o))),
        );
    }

    let mut out: Vec<String> = lines[..start].iter().map(|l| (*l).to_string()).collect();
    out.extend(block);
    out.extend(lines[end..].iter().map(|l| (*l).to_string()));

    let mut document = out.join(newline);
    if text.ends_with('\n') {
        document.push_str(newline);
    }
    Some(document)
}

/// Sync a workflow file in place; with `dry_run` nothing is written
pub fn sync_workflow_file(
    path: &Path,
    registry: &BinaryRegistry,
    dry_run: bool,
) -> Result<SyncOutcome> {
    let shown = path.display().to_string();
    let content =
        fs::read_to_string(path).map_err(|e| error::file_read_failed(&shown, e.to_string()))?;

    let outcome = sync_workflow_options(&content, &shown, registry)?;

    if dry_run {
        tracing::info!(path = %shown, "dry run, workflow not written");
    } else if outcome.changed() {
        write_atomic(path, &outcome.document)?;
        tracing::info!(
            path = %shown,
            options = ?outcome.options,
            "updated binary_type options"
        );
    } else {
        tracing::info!(path = %shown, "binary_type options already up to date");
    }

    Ok(outcome)
}
