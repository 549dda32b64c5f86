//! Error types and handling for binmirror
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Registry configuration errors
//! - [`registry`]: Binary type lookup errors
//! - [`asset`]: Release asset document errors
//! - [`workflow`]: Workflow file errors
//! - [`fs`]: File system errors

pub mod asset;
pub mod config;
pub mod fs;
pub mod registry;
pub mod workflow;

pub use asset::{parse_failed as assets_parse_failed, read_failed as assets_read_failed};
pub use config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
pub use registry::unknown_type;
pub use workflow::invalid as workflow_invalid;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for binmirror operations
#[derive(Error, Diagnostic, Debug)]
pub enum BinmirrorError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(binmirror::config::not_found),
        help("Pass --config <path>, set BINMIRROR_CONFIG, or create binaries.yml")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(binmirror::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(binmirror::config::parse_failed),
        help(
            "Each entry under 'binaries' needs title, url_template, filename_template and compressed_name_template"
        )
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(binmirror::config::invalid))]
    ConfigInvalid { message: String },

    // Registry errors
    #[error("Unknown binary type: {type_id} (known types: {available})")]
    #[diagnostic(
        code(binmirror::registry::unknown_type),
        help("Run 'binmirror types' to list the configured binary types")
    )]
    UnknownBinaryType { type_id: String, available: String },

    // Asset errors
    #[error("Failed to read release assets: {path}: {reason}")]
    #[diagnostic(code(binmirror::asset::read_failed))]
    AssetsReadFailed { path: String, reason: String },

    #[error("Failed to parse release assets: {path}: {reason}")]
    #[diagnostic(
        code(binmirror::asset::parse_failed),
        help(
            "Expected a JSON array of assets or a release object with an 'assets' array; \
             each asset needs name, browser_download_url, size and created_at"
        )
    )]
    AssetsParseFailed { path: String, reason: String },

    // Workflow errors
    #[error("Invalid workflow file {path}: {message}")]
    #[diagnostic(
        code(binmirror::workflow::invalid),
        help("The workflow must declare on.workflow_dispatch.inputs.binary_type")
    )]
    WorkflowInvalid { path: String, message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(binmirror::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(binmirror::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(binmirror::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BinmirrorError {
    fn from(err: std::io::Error) -> Self {
        BinmirrorError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BinmirrorError {
    fn from(err: serde_yaml::Error) -> Self {
        BinmirrorError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BinmirrorError {
    fn from(err: serde_json::Error) -> Self {
        BinmirrorError::AssetsParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BinmirrorError>;
