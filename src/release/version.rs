//! Dotted version comparison
//!
//! Each `.`-separated component compares by its leading decimal digits;
//! components without leading digits, and missing components, count as `0`.
//! This is deliberately looser than semantic versioning: `1.0` equals
//! `1.0.0` and pre-release suffixes are ignored.

use std::cmp::Ordering;

/// Leading digits of one version component without leading zeros
///
/// An empty result stands for `0`. Digit runs are compared by length and
/// then lexically, so components of any size compare without overflow.
fn component_digits(part: &str) -> &str {
    let digits_end = part
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(part.len(), |(i, _)| i);

    part[..digits_end].trim_start_matches('0')
}

fn compare_components(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two version strings component by component
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use binmirror::release::compare_versions;
///
/// assert_eq!(compare_versions("1.2.0", "1.10.0"), Ordering::Less);
/// assert_eq!(compare_versions("1.0", "1.0.0"), Ordering::Equal);
/// ```
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a_parts: Vec<&str> = a.split('.').map(component_digits).collect();
    let b_parts: Vec<&str> = b.split('.').map(component_digits).collect();

    for i in 0..a_parts.len().max(b_parts.len()) {
        let a_val = a_parts.get(i).copied().unwrap_or("");
        let b_val = b_parts.get(i).copied().unwrap_or("");
        match compare_components(a_val, b_val) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }

    Ordering::Equal
}
