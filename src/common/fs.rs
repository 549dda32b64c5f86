//! Common file system operations with unified error handling

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{self, Result};

/// Path argument that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Whether `path` is the `-` stdin marker
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Read a whole text file, or standard input when `path` is `-`
pub fn read_text(path: &Path) -> io::Result<String> {
    if is_stdin(path) {
        let mut content = String::new();
        io::stdin().lock().read_to_string(&mut content)?;
        Ok(content)
    } else {
        fs::read_to_string(path)
    }
}

/// Write `content` to `path` through a temporary file in the same directory
///
/// Readers never observe a partially written file.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let shown = path.display().to_string();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|e| error::file_write_failed(&shown, e.to_string()))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| error::file_write_failed(&shown, e.to_string()))?;
    temp.persist(path)
        .map_err(|e| error::file_write_failed(&shown, e.error.to_string()))?;

    Ok(())
}

/// Write generated text to `output`, or to stdout when no path is given
///
/// Output files always end with a newline.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            let mut text = content.to_string();
            if !text.ends_with('\n') {
                text.push('\n');
            }
            write_atomic(path, &text)?;
            tracing::info!(path = %path.display(), bytes = text.len(), "wrote output");
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}")?;
            stdout.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_stdin() {
        assert!(is_stdin(Path::new("-")));
        assert!(!is_stdin(Path::new("./-")));
        assert!(!is_stdin(Path::new("assets.json")));
    }

    #[test]
    fn test_write_atomic_creates_and_replaces() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("body.md");

        write_atomic(&path, "first").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        write_atomic(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_atomic_missing_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("body.md");

        let err = write_atomic(&path, "text").unwrap_err();
        assert!(matches!(err, crate::error::BinmirrorError::FileWriteFailed { .. }));
    }

    #[test]
    fn test_write_output_appends_newline() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("description.md");

        write_output(Some(&path), "# Title").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Title\n");
    }

    #[test]
    fn test_read_text_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lines.txt");
        fs::write(&path, "a\nb\n").unwrap();

        assert_eq!(read_text(&path).unwrap(), "a\nb\n");
    }
}
