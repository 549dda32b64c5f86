//! Release note composition
//!
//! This module handles:
//! - Release bodies built from a new entry plus previous entry lines (body)
//! - Release descriptions built from published assets (description)
//! - Asset name classification (matcher)
//! - Version ordering and size formatting helpers (version, size)

pub mod body;
pub mod description;
pub mod matcher;
pub mod size;
pub mod version;

pub use body::{BODY_HEADER, compose_release_body, extract_entry_lines};
pub use description::{compose_description, compose_description_with};
pub use matcher::{AssetMatcher, Classification, DottedDigits, MatcherSet, VersionExtractor};
pub use size::format_file_size;
pub use version::compare_versions;
