use clap::Parser;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show download URL and filenames:\n    binmirror resolve bazel_nojdk 7.4.1\n\n\
                  Machine-readable output:\n    binmirror resolve ninja v1.12.1 --json")]
pub struct ResolveArgs {
    /// Binary type identifier
    pub binary_type: String,

    /// Version to substitute into the templates
    pub version: String,

    /// Print JSON instead of key/value lines
    #[arg(long)]
    pub json: bool,
}
