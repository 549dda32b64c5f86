use clap::Parser;
use std::path::PathBuf;

/// Arguments for the body command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  First entry of a new release:\n    binmirror body bazel_nojdk 7.4.1\n\n\
                  Merge with entry lines from a file:\n    binmirror body ninja v1.12.1 --existing lines.txt\n\n\
                  Merge with the current release body from stdin:\n    \
                  gh release view binaries --json body -q .body | binmirror body ninja v1.12.1 --existing - --from-body")]
pub struct BodyArgs {
    /// Binary type identifier
    pub binary_type: String,

    /// Version being added
    pub version: String,

    /// Date label for the new entry (defaults to today's UTC date, YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// File with existing entry lines, or - for stdin
    #[arg(long, value_name = "FILE")]
    pub existing: Option<PathBuf>,

    /// Treat --existing as a whole release body and keep only its list entries
    #[arg(long, requires = "existing")]
    pub from_body: bool,

    /// Write the body to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}
