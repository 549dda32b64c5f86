//! Release asset document errors

use super::BinmirrorError;

/// Creates an assets read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> BinmirrorError {
    BinmirrorError::AssetsReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an assets parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> BinmirrorError {
    BinmirrorError::AssetsParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
