use clap::Parser;
use std::path::PathBuf;

/// Arguments for the describe command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Describe assets saved from the release API:\n    binmirror describe --assets release.json\n\n\
                  Read assets from stdin:\n    \
                  gh api repos/OWNER/REPO/releases/tags/binaries | binmirror describe --assets -")]
pub struct DescribeArgs {
    /// JSON file with an asset array or a release object, or - for stdin
    #[arg(long, value_name = "FILE")]
    pub assets: PathBuf,

    /// Write the description to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}
