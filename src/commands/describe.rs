//! Describe command implementation
//!
//! Composes the release description from an already-fetched asset list.

use crate::cli::DescribeArgs;
use crate::common::fs::{read_text, write_output};
use crate::domain::parse_assets_json;
use crate::error::{self, Result};
use crate::registry::BinaryRegistry;
use crate::release::compose_description;

/// Run describe command
pub fn run(registry: &BinaryRegistry, args: &DescribeArgs) -> Result<()> {
    let source = args.assets.display().to_string();
    let content =
        read_text(&args.assets).map_err(|e| error::assets_read_failed(&source, e.to_string()))?;
    let assets = parse_assets_json(&content, &source)?;

    tracing::debug!(
        source = %source,
        assets = assets.len(),
        zip_assets = assets.iter().filter(|a| a.is_zip()).count(),
        "composing release description"
    );

    let description = compose_description(registry, &assets);
    write_output(args.output.as_deref(), &description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BinmirrorError;
    use crate::test_fixtures::sample_registry;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_description() {
        let temp = TempDir::new().unwrap();
        let assets = temp.path().join("assets.json");
        let output = temp.path().join("description.md");
        fs::write(
            &assets,
            r#"[{"name": "ninja-win-1.12.1.zip", "browser_download_url": "https://example.com/n.zip",
                 "size": 300000, "created_at": "2024-05-12T09:00:00Z"}]"#,
        )
        .unwrap();

        run(
            &sample_registry(),
            &DescribeArgs {
                assets,
                output: Some(output.clone()),
            },
        )
        .unwrap();

        let written = fs::read_to_string(output).unwrap();
        assert!(written.contains(
            "* **Ninja 1.12.1** ([ninja-win-1.12.1.zip](https://example.com/n.zip), 293 KB, added on 2024-05-12)"
        ));
    }

    #[test]
    fn test_run_missing_assets_file() {
        let err = run(
            &sample_registry(),
            &DescribeArgs {
                assets: "/nonexistent/assets.json".into(),
                output: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, BinmirrorError::AssetsReadFailed { .. }));
    }

    #[test]
    fn test_run_invalid_json() {
        let temp = TempDir::new().unwrap();
        let assets = temp.path().join("assets.json");
        fs::write(&assets, "{not json").unwrap();

        let err = run(
            &sample_registry(),
            &DescribeArgs {
                assets,
                output: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, BinmirrorError::AssetsParseFailed { .. }));
    }
}
