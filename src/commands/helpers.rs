//! Command helper utilities

use std::path::PathBuf;

use crate::error::{self, Result};
use crate::registry::{BinaryRegistry, RegistryLoader};

/// Load the binary registry for a command
///
/// An explicit path is used as given; otherwise the current directory and
/// then the user config directory are searched.
pub fn load_registry(config: Option<PathBuf>) -> Result<BinaryRegistry> {
    let working_dir = std::env::current_dir()
        .map_err(|e| error::io_error(format!("Failed to get current directory: {e}")))?;

    RegistryLoader::new(working_dir).with_config(config).load()
}

/// Today's UTC date as `YYYY-MM-DD`
pub fn today_label() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
