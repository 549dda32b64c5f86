//! Binary registry: the configured binary types and their templates
//!
//! This module handles:
//! - Binary type definitions (BinaryTypeConfig, ResolvedBinary)
//! - Lookup by type identifier in configuration order (via BinaryRegistry)
//! - Loading the registry from `binaries.yml` (via loader module)
//!
//! The registry is built once and then only read. Every composer takes it as
//! an explicit argument.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{self, Result};
use crate::template::{format_template, template_prefix};

pub use loader::RegistryLoader;

pub mod loader;

/// A mirrored binary type as declared in `binaries.yml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryTypeConfig {
    /// Type identifier, taken from the mapping key (e.g., "bazel_nojdk")
    #[serde(skip)]
    pub id: String,

    /// Display title (e.g., "Bazel (no JDK)")
    pub title: String,

    /// Upstream download URL template
    pub url_template: String,

    /// Filename of the upstream binary
    pub filename_template: String,

    /// Filename of the zip archive published as a release asset
    pub compressed_name_template: String,
}

impl BinaryTypeConfig {
    /// Create a new binary type
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url_template: impl Into<String>,
        filename_template: impl Into<String>,
        compressed_name_template: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url_template: url_template.into(),
            filename_template: filename_template.into(),
            compressed_name_template: compressed_name_template.into(),
        }
    }

    /// Literal prefix of published archive names for this type
    pub fn compressed_prefix(&self) -> &str {
        template_prefix(&self.compressed_name_template)
    }

    /// Substitute a version into all three templates
    pub fn resolve(&self, version: &str) -> ResolvedBinary {
        ResolvedBinary {
            title: self.title.clone(),
            url: format_template(&self.url_template, version),
            filename: format_template(&self.filename_template, version),
            compressed: format_template(&self.compressed_name_template, version),
        }
    }
}

/// A binary type with a concrete version filled into its templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBinary {
    pub title: String,
    pub url: String,
    pub filename: String,
    pub compressed: String,
}

/// On-disk shape of `binaries.yml`
#[derive(Debug, Deserialize)]
struct RegistryFile {
    binaries: IndexMap<String, BinaryTypeConfig>,
}

/// Registry of configured binary types, in configuration order
#[derive(Debug, Clone, Default)]
pub struct BinaryRegistry {
    types: IndexMap<String, BinaryTypeConfig>,
}

impl BinaryRegistry {
    /// Create a registry from binary types, keeping their order
    ///
    /// A later entry with an identifier already present replaces the earlier
    /// one in place.
    pub fn new(types: impl IntoIterator<Item = BinaryTypeConfig>) -> Self {
        let mut map = IndexMap::new();
        for binary in types {
            map.insert(binary.id.clone(), binary);
        }
        Self { types: map }
    }

    /// Parse a registry from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::from_yaml_at(yaml, "<inline>")
    }

    /// Parse a registry from YAML read from `path` (used in error messages)
    pub(crate) fn from_yaml_at(yaml: &str, path: &str) -> Result<Self> {
        let file: RegistryFile =
            serde_yaml::from_str(yaml).map_err(|e| error::config_parse_failed(path, e.to_string()))?;

        let types = file
            .binaries
            .into_iter()
            .map(|(id, mut binary)| {
                binary.id = id;
                binary
            })
            .collect::<Vec<_>>();

        let registry = Self::new(types);
        registry.validate()?;
        registry.warn_on_overlaps();
        Ok(registry)
    }

    fn validate(&self) -> Result<()> {
        for binary in self.types.values() {
            if binary.id.trim().is_empty() {
                return Err(error::config_invalid("binary type with an empty identifier"));
            }
            if binary.title.trim().is_empty() {
                return Err(error::config_invalid(format!(
                    "binary type '{}' has an empty title",
                    binary.id
                )));
            }
        }
        Ok(())
    }

    /// Log configuration that makes matching order-dependent
    fn warn_on_overlaps(&self) {
        for (i, a) in self.types.values().enumerate() {
            if a.compressed_prefix().is_empty() {
                tracing::warn!(
                    binary_type = %a.id,
                    "compressed_name_template starts with a placeholder; assets of this type \
                     can only be grouped by the fallback rule"
                );
            }
            for b in self.types.values().skip(i + 1) {
                if a.title.contains(&b.title) || b.title.contains(&a.title) {
                    tracing::debug!(
                        first = %a.id,
                        second = %b.id,
                        "binary titles overlap; lines mentioning both go to '{}'",
                        a.id
                    );
                }
            }
        }
    }

    /// Get a binary type by identifier
    pub fn get(&self, type_id: &str) -> Option<&BinaryTypeConfig> {
        self.types.get(type_id)
    }

    /// Get a binary type by identifier, failing for unknown identifiers
    pub fn require(&self, type_id: &str) -> Result<&BinaryTypeConfig> {
        self.get(type_id)
            .ok_or_else(|| error::unknown_type(type_id, self.type_ids()))
    }

    /// Resolve the templates of `type_id` for `version`
    pub fn resolve(&self, type_id: &str, version: &str) -> Result<ResolvedBinary> {
        Ok(self.require(type_id)?.resolve(version))
    }

    /// Configured type identifiers, in configuration order
    pub fn type_ids(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    /// Iterate binary types in configuration order
    pub fn iter(&self) -> impl Iterator<Item = &BinaryTypeConfig> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
