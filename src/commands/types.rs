//! Types command implementation
//!
//! Lists the configured binary types in registry order.

use std::io::{self, Write};

use console::Style;

use crate::cli::TypesArgs;
use crate::error::Result;
use crate::registry::BinaryRegistry;

/// Run types command
pub fn run(registry: &BinaryRegistry, args: &TypesArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if args.detailed {
        write_detailed(&mut stdout, registry)?;
    } else {
        write_ids(&mut stdout, registry)?;
    }
    stdout.flush()?;
    Ok(())
}

/// One identifier per line, suitable for scripts
fn write_ids(out: &mut impl Write, registry: &BinaryRegistry) -> io::Result<()> {
    for id in registry.type_ids() {
        writeln!(out, "{id}")?;
    }
    Ok(())
}

fn write_detailed(out: &mut impl Write, registry: &BinaryRegistry) -> io::Result<()> {
    if registry.is_empty() {
        writeln!(out, "No binary types configured.")?;
        return Ok(());
    }

    writeln!(out, "Binary types ({}):", registry.len())?;
    let label = Style::new().bold();
    for binary in registry.iter() {
        writeln!(out)?;
        writeln!(out, "  {}", Style::new().bold().yellow().apply_to(&binary.id))?;
        writeln!(out, "    {} {}", label.apply_to("Title:"), binary.title)?;
        writeln!(out, "    {} {}", label.apply_to("URL:"), binary.url_template)?;
        writeln!(out, "    {} {}", label.apply_to("Filename:"), binary.filename_template)?;
        writeln!(
            out,
            "    {} {}",
            label.apply_to("Archive:"),
            binary.compressed_name_template
        )?;
    }
    Ok(())
}
