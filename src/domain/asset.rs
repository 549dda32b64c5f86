//! Release asset domain types
//!
//! [`AssetRecord`] mirrors the asset objects of a GitHub release so a raw
//! `assets` array (or a whole release object) deserializes without mapping.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// A published release asset as reported by the release host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Asset filename
    pub name: String,

    /// Public download URL
    pub browser_download_url: String,

    /// Size in bytes
    pub size: u64,

    /// Upload timestamp
    pub created_at: DateTime<Utc>,
}

impl AssetRecord {
    /// Upload date, time of day discarded
    pub fn created_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn is_zip(&self) -> bool {
        self.name.ends_with(".zip")
    }
}

/// An asset with its version inferred and display fields rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub name: String,
    pub version: String,
    pub url: String,
    pub size: String,
    pub created: NaiveDate,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AssetsDocument {
    List(Vec<AssetRecord>),
    Release { assets: Vec<AssetRecord> },
}

/// Parse release assets from JSON
///
/// Accepts either a bare array of assets or a release object carrying an
/// `assets` array. `path` only labels errors.
pub fn parse_assets_json(json: &str, path: &str) -> Result<Vec<AssetRecord>> {
    let document: AssetsDocument =
        serde_json::from_str(json).map_err(|e| error::assets_parse_failed(path, e.to_string()))?;

    Ok(match document {
        AssetsDocument::List(assets) | AssetsDocument::Release { assets } => assets,
    })
}
