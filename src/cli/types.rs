use clap::Parser;

/// Arguments for the types command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List binary type identifiers:\n    binmirror types\n\n\
                  Show titles and templates:\n    binmirror types --detailed")]
pub struct TypesArgs {
    /// Show titles and templates
    #[arg(long)]
    pub detailed: bool,
}
