//! Command implementations for binmirror CLI

pub mod body;
pub mod completions;
pub mod describe;
pub mod helpers;
pub mod resolve;
pub mod sync_workflow;
pub mod types;
pub mod version;
