//! Release description composed from published assets
//!
//! Unlike the release body, which carries its history as text, the
//! description is rebuilt from the asset list alone: every zip asset is
//! classified by name, grouped under its binary title, deduplicated by
//! version and listed newest first.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use indexmap::IndexMap;
use indexmap::map::Entry;

use super::matcher::MatcherSet;
use super::size::format_file_size;
use super::version::compare_versions;
use crate::domain::{AssetRecord, ResolvedAsset};
use crate::registry::BinaryRegistry;

const DESCRIPTION_HEADER: &str = "# Zip Assets of Binaries

This repository provides Windows executables as ZIP files. These binaries are mirrored from their official sources.

## Available versions by binary type:

";

const DESCRIPTION_FOOTER: &str = "## Usage

These ZIP files contain Windows executables. Extract the ZIP file to use the binary.

## Source Information

These binaries are mirrored from their official releases.";

/// Compose the release description for a list of published assets
///
/// Non-zip assets are ignored. Asset names that match no configured binary
/// type are grouped by the text before their first `-`.
pub fn compose_description(registry: &BinaryRegistry, assets: &[AssetRecord]) -> String {
    compose_description_with(registry, &MatcherSet::from_registry(registry), assets)
}

/// Compose the release description using an explicit matcher set
pub fn compose_description_with(
    registry: &BinaryRegistry,
    matchers: &MatcherSet,
    assets: &[AssetRecord],
) -> String {
    let groups = group_assets(registry, matchers, assets);

    let mut description = DESCRIPTION_HEADER.to_string();
    for (title, entries) in &groups {
        let _ = write!(description, "### {title}\n\n");
        for asset in entries {
            let _ = writeln!(
                description,
                "* **{title} {}** ([{}]({}), {}, added on {})",
                asset.version,
                asset.name,
                asset.url,
                asset.size,
                asset.created.format("%Y-%m-%d")
            );
        }
        description.push('\n');
    }
    description.push_str(DESCRIPTION_FOOTER);

    description
}

/// Display title for a classified asset
fn display_title(registry: &BinaryRegistry, type_id: &str) -> String {
    registry
        .get(type_id)
        .map_or_else(|| type_id.replace('_', " "), |b| b.title.clone())
}

/// Zip assets grouped by title (sorted), one per version, newest version first
fn group_assets(
    registry: &BinaryRegistry,
    matchers: &MatcherSet,
    assets: &[AssetRecord],
) -> BTreeMap<String, Vec<ResolvedAsset>> {
    let mut by_title: BTreeMap<String, IndexMap<String, ResolvedAsset>> = BTreeMap::new();

    for asset in assets.iter().filter(|a| a.is_zip()) {
        let classification = matchers.classify(&asset.name);
        if !classification.matched {
            tracing::debug!(
                asset = %asset.name,
                fallback_type = %classification.type_id,
                "asset matches no configured binary type"
            );
        }

        let resolved = ResolvedAsset {
            name: asset.name.clone(),
            version: classification.version,
            url: asset.browser_download_url.clone(),
            size: format_file_size(asset.size),
            created: asset.created_date(),
        };

        let versions = by_title
            .entry(display_title(registry, &classification.type_id))
            .or_default();
        match versions.entry(resolved.version.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(resolved);
            }
            Entry::Occupied(mut slot) => {
                if resolved.created > slot.get().created {
                    slot.insert(resolved);
                }
            }
        }
    }

    by_title
        .into_iter()
        .map(|(title, versions)| {
            let mut entries: Vec<ResolvedAsset> = versions.into_values().collect();
            entries.sort_by(|a, b| compare_versions(&b.version, &a.version));
            (title, entries)
        })
        .collect()
}
