//! Test fixtures shared by unit tests.
//!
//! ```ignore
//! use crate::test_fixtures::{sample_registry, asset};
//!
//! let registry = sample_registry();
//! let record = asset("buildifier-7.3.1-windows-amd64.zip", 2048, "2024-09-01T10:00:00Z");
//! ```

#![allow(clippy::expect_used)]

use crate::domain::AssetRecord;
use crate::registry::BinaryRegistry;

/// Three binary types with mutually distinct titles
pub const SAMPLE_CONFIG: &str = r"binaries:
  bazel_nojdk:
    title: Bazel without JDK
    url_template: https://github.com/bazelbuild/bazel/releases/download/{version}/bazel_nojdk-{version}-windows-x86_64.exe
    filename_template: bazel_nojdk-{version}-windows-x86_64.exe
    compressed_name_template: bazel_nojdk-{version}-windows-x86_64.zip
  buildifier:
    title: Buildifier
    url_template: https://github.com/bazelbuild/buildtools/releases/download/{version}/buildifier-windows-amd64.exe
    filename_template: buildifier-{version}-windows-amd64.exe
    compressed_name_template: buildifier-{version}-windows-amd64.zip
  ninja:
    title: Ninja
    url_template: https://github.com/ninja-build/ninja/releases/download/{version}/ninja-win.zip
    filename_template: ninja-{clean_version}.exe
    compressed_name_template: ninja-win-{clean_version}.zip
";

/// Registry parsed from [`SAMPLE_CONFIG`]
pub fn sample_registry() -> BinaryRegistry {
    BinaryRegistry::from_yaml(SAMPLE_CONFIG).expect("sample config should parse")
}

/// Build an asset record with a placeholder download URL
pub fn asset(name: &str, size: u64, created_at: &str) -> AssetRecord {
    AssetRecord {
        name: name.to_string(),
        browser_download_url: format!("https://example.com/download/{name}"),
        size,
        created_at: created_at
            .parse()
            .expect("fixture timestamps should be RFC 3339"),
    }
}
