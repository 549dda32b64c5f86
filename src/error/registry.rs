//! Binary type lookup errors

use super::BinmirrorError;

/// Creates an unknown binary type error listing the types that do exist
pub fn unknown_type<I, S>(type_id: impl Into<String>, available: I) -> BinmirrorError
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let available: Vec<String> = available
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect();

    BinmirrorError::UnknownBinaryType {
        type_id: type_id.into(),
        available: if available.is_empty() {
            "(none configured)".to_string()
        } else {
            available.join(", ")
        },
    }
}
