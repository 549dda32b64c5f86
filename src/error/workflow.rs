//! Workflow file errors

use super::BinmirrorError;

/// Creates an invalid workflow error
pub fn invalid(path: impl Into<String>, message: impl Into<String>) -> BinmirrorError {
    BinmirrorError::WorkflowInvalid {
        path: path.into(),
        message: message.into(),
    }
}
