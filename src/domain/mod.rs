//! Domain types
//!
//! Contains the release asset types consumed and produced by the composers.
//! Binary type definitions live in the registry module.

pub mod asset;

pub use asset::{AssetRecord, ResolvedAsset, parse_assets_json};
