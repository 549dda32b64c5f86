//! Registry configuration loading
//!
//! This module locates `binaries.yml` and parses it into a [`BinaryRegistry`].

use std::fs;
use std::path::{Path, PathBuf};

use super::BinaryRegistry;
use crate::error::{self, Result};

/// Default configuration filename
pub const CONFIG_FILE_NAME: &str = "binaries.yml";

/// Registry configuration loader
pub struct RegistryLoader {
    /// Directory searched for `binaries.yml` when no explicit path is given
    working_dir: PathBuf,

    /// Explicit configuration path (from --config or BINMIRROR_CONFIG)
    explicit: Option<PathBuf>,
}

impl RegistryLoader {
    /// Create a new registry loader searching `working_dir`
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            explicit: None,
        }
    }

    /// Use an explicit configuration path instead of searching
    pub fn with_config(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    /// Load the registry
    ///
    /// Lookup order:
    /// 1. Explicit path, which must exist
    /// 2. `binaries.yml` in the working directory
    /// 3. `~/.config/binmirror/binaries.yml` (platform config directory)
    pub fn load(&self) -> Result<BinaryRegistry> {
        if let Some(path) = &self.explicit {
            if !path.is_file() {
                return Err(error::config_not_found(path.display().to_string()));
            }
            return Self::load_from(path);
        }

        let candidates = self.candidates();
        match candidates.iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from(path),
            None => Err(error::config_not_found(
                candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            )),
        }
    }

    /// Paths searched when no explicit configuration is given
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.working_dir.join(CONFIG_FILE_NAME)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("binmirror").join(CONFIG_FILE_NAME));
        }
        paths
    }

    /// Paths `load` would consider, in order
    pub fn search_order(&self) -> Vec<PathBuf> {
        match &self.explicit {
            Some(path) => vec![path.clone()],
            None => self.candidates(),
        }
    }

    /// Load a registry from a specific file
    pub fn load_from(path: &Path) -> Result<BinaryRegistry> {
        let shown = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| error::config_read_failed(&shown, e.to_string()))?;

        let registry = BinaryRegistry::from_yaml_at(&content, &shown)?;
        tracing::debug!(
            path = %shown,
            binary_types = registry.len(),
            "loaded binary registry"
        );
        Ok(registry)
    }
}
