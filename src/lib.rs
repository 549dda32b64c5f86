//! binmirror - release notes for mirrored binaries
//!
//! Composes Markdown release text for a repository that republishes upstream
//! executables as zip assets. Binary types and their URL/filename templates
//! come from `binaries.yml`:
//!
//! ```
//! use binmirror::registry::BinaryRegistry;
//! use binmirror::release::compose_release_body;
//!
//! let registry = BinaryRegistry::from_yaml(
//!     "binaries:
//!   ninja:
//!     title: Ninja
//!     url_template: https://github.com/ninja-build/ninja/releases/download/{version}/ninja-win.zip
//!     filename_template: ninja-{clean_version}.exe
//!     compressed_name_template: ninja-win-{clean_version}.zip
//! ",
//! )?;
//!
//! let body = compose_release_body(&registry, "ninja", "v1.12.1", "2024-05-12", &[] as &[&str])?;
//! assert!(body.contains("- Ninja v1.12.1 (ninja-win-1.12.1.zip, added on 2024-05-12)"));
//! # Ok::<(), binmirror::error::BinmirrorError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod common;
pub mod domain;
pub mod error;
pub mod logging;
pub mod registry;
pub mod release;
pub mod template;
pub mod workflow;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use domain::{AssetRecord, ResolvedAsset};
pub use error::{BinmirrorError, Result};
pub use registry::{BinaryRegistry, BinaryTypeConfig, ResolvedBinary};
pub use release::{compare_versions, compose_description, compose_release_body, format_file_size};
