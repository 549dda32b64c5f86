//! Version command implementation
//!
//! Besides the build info, reports where `binaries.yml` is looked up so a
//! CI log shows which registry a run would pick.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::{self, Result};
use crate::registry::RegistryLoader;

/// Run version command
pub fn run(config: Option<PathBuf>) -> Result<()> {
    let working_dir = std::env::current_dir()
        .map_err(|e| error::io_error(format!("Failed to get current directory: {e}")))?;
    let loader = RegistryLoader::new(working_dir).with_config(config);

    let mut stdout = io::stdout().lock();
    write_version(&mut stdout, &loader)?;
    stdout.flush()?;
    Ok(())
}

fn write_version(out: &mut impl Write, loader: &RegistryLoader) -> io::Result<()> {
    writeln!(out, "binmirror {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(out, "Build info:")?;
    writeln!(out, "  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"))?;
    writeln!(
        out,
        "  Profile: {}",
        if cfg!(debug_assertions) { "debug" } else { "release" }
    )?;
    writeln!(out)?;
    writeln!(out, "Registry lookup:")?;
    for (i, path) in loader.search_order().iter().enumerate() {
        let marker = if path.is_file() { " (found)" } else { "" };
        writeln!(out, "  {}. {}{marker}", i + 1, path.display())?;
    }
    Ok(())
}
