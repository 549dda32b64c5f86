//! Asset name classification
//!
//! A [`MatcherSet`] is an ordered list of `{prefix, extractor}` pairs, one per
//! registry entry. The first matcher whose prefix starts the asset name
//! decides the binary type, and its extractor reads the version from the text
//! after the prefix. Names no matcher claims fall back to splitting on `-`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::registry::BinaryRegistry;

/// Version reported when none can be read from an asset name
pub const UNKNOWN_VERSION: &str = "unknown";

#[allow(clippy::expect_used)]
static DOTTED_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.]+").expect("constant pattern is valid"));

/// Reads a version from the part of an asset name that follows its prefix
pub trait VersionExtractor: Send + Sync {
    fn extract(&self, rest: &str) -> Option<String>;
}

impl<F> VersionExtractor for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn extract(&self, rest: &str) -> Option<String> {
        self(rest)
    }
}

/// Leading run of digits and dots, e.g. `7.4.1` from `7.4.1-windows.zip`
///
/// Trailing dots are dropped so `1.12.1.zip` yields `1.12.1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DottedDigits;

impl VersionExtractor for DottedDigits {
    fn extract(&self, rest: &str) -> Option<String> {
        let found = DOTTED_DIGITS.find(rest)?.as_str().trim_end_matches('.');
        if found.is_empty() {
            None
        } else {
            Some(found.to_string())
        }
    }
}

/// One binary type's asset name pattern
pub struct AssetMatcher {
    type_id: String,
    prefix: String,
    extractor: Box<dyn VersionExtractor>,
}

impl fmt::Debug for AssetMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetMatcher")
            .field("type_id", &self.type_id)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl AssetMatcher {
    /// Create a matcher using the [`DottedDigits`] extractor
    pub fn new(type_id: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::with_extractor(type_id, prefix, DottedDigits)
    }

    /// Create a matcher with a custom version extractor
    pub fn with_extractor(
        type_id: impl Into<String>,
        prefix: impl Into<String>,
        extractor: impl VersionExtractor + 'static,
    ) -> Self {
        Self {
            type_id: type_id.into(),
            prefix: prefix.into(),
            extractor: Box::new(extractor),
        }
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Classify `name` if it starts with this matcher's prefix
    pub fn classify(&self, name: &str) -> Option<Classification> {
        let rest = name.strip_prefix(self.prefix.as_str())?;
        let version = self
            .extractor
            .extract(rest)
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string());

        Some(Classification {
            type_id: self.type_id.clone(),
            version,
            matched: true,
        })
    }
}

/// Binary type and version inferred from an asset name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub type_id: String,
    pub version: String,
    /// False when the fallback split produced this classification
    pub matched: bool,
}

/// Ordered asset matchers
#[derive(Debug, Default)]
pub struct MatcherSet {
    matchers: Vec<AssetMatcher>,
}

impl MatcherSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One matcher per registry entry, keyed on the compressed filename prefix
    ///
    /// Entries whose compressed template starts with a placeholder have no
    /// usable prefix and get no matcher.
    pub fn from_registry(registry: &BinaryRegistry) -> Self {
        let matchers = registry
            .iter()
            .filter(|binary| !binary.compressed_prefix().is_empty())
            .map(|binary| AssetMatcher::new(&binary.id, binary.compressed_prefix()))
            .collect();

        Self { matchers }
    }

    /// Append a matcher; earlier matchers take precedence
    pub fn push(&mut self, matcher: AssetMatcher) {
        self.matchers.push(matcher);
    }

    pub fn matchers(&self) -> &[AssetMatcher] {
        &self.matchers
    }

    /// Classify an asset name, falling back to [`fallback_classification`]
    pub fn classify(&self, name: &str) -> Classification {
        self.matchers
            .iter()
            .find_map(|m| m.classify(name))
            .unwrap_or_else(|| fallback_classification(name))
    }
}

/// Classify by splitting on `-`: `type-version-...`
///
/// The version is whatever sits between the first and second dash, or
/// [`UNKNOWN_VERSION`] when that is absent or empty.
pub fn fallback_classification(name: &str) -> Classification {
    let mut parts = name.split('-');
    let type_id = parts.next().unwrap_or_default().to_string();
    let version = parts
        .next()
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN_VERSION)
        .to_string();

    Classification {
        type_id,
        version,
        matched: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::sample_registry;

    #[test]
    fn test_dotted_digits() {
        assert_eq!(
            DottedDigits.extract("7.4.1-windows-x86_64.zip"),
            Some("7.4.1".to_string())
        );
        assert_eq!(DottedDigits.extract("1.12.1.zip"), Some("1.12.1".to_string()));
        assert_eq!(DottedDigits.extract("latest.zip"), None);
        assert_eq!(DottedDigits.extract(".zip"), None);
        assert_eq!(DottedDigits.extract(""), None);
    }

    #[test]
    fn test_registry_matchers_follow_registry_order() {
        let set = MatcherSet::from_registry(&sample_registry());
        let prefixes: Vec<&str> = set.matchers().iter().map(AssetMatcher::prefix).collect();
        assert_eq!(prefixes, vec!["bazel_nojdk-", "buildifier-", "ninja-win-"]);
    }

    #[test]
    fn test_classify_registry_match() {
        let set = MatcherSet::from_registry(&sample_registry());
        let c = set.classify("bazel_nojdk-7.4.1-windows-x86_64.zip");
        assert_eq!(c.type_id, "bazel_nojdk");
        assert_eq!(c.version, "7.4.1");
        assert!(c.matched);
    }

    #[test]
    fn test_classify_registry_match_without_version() {
        let set = MatcherSet::from_registry(&sample_registry());
        let c = set.classify("buildifier-nightly-windows-amd64.zip");
        assert_eq!(c.type_id, "buildifier");
        assert_eq!(c.version, UNKNOWN_VERSION);
        assert!(c.matched);
    }

    #[test]
    fn test_first_matching_prefix_wins() {
        let mut set = MatcherSet::new();
        set.push(AssetMatcher::new("short", "tool-"));
        set.push(AssetMatcher::new("long", "tool-extra-"));

        assert_eq!(set.classify("tool-extra-1.0.zip").type_id, "short");
    }

    #[test]
    fn test_placeholder_first_template_gets_no_matcher() {
        let registry = crate::registry::BinaryRegistry::from_yaml(
            "binaries:\n  any:\n    title: Any\n    url_template: u\n    filename_template: f\n    compressed_name_template: '{version}.zip'\n",
        )
        .unwrap();

        assert!(MatcherSet::from_registry(&registry).matchers().is_empty());
    }

    #[test]
    fn test_custom_extractor() {
        let mut set = MatcherSet::new();
        set.push(AssetMatcher::with_extractor(
            "cmake",
            "cmake-",
            |rest: &str| rest.split("-windows").next().map(str::to_string),
        ));

        let c = set.classify("cmake-3.30.0-rc2-windows-x86_64.zip");
        assert_eq!(c.version, "3.30.0-rc2");
    }

    #[test]
    fn test_fallback_classification() {
        let c = fallback_classification("protoc-28.2-win64.zip");
        assert_eq!(c.type_id, "protoc");
        assert_eq!(c.version, "28.2");
        assert!(!c.matched);
    }

    #[test]
    fn test_fallback_keeps_suffix_after_single_dash() {
        let c = fallback_classification("protoc-28.2.zip");
        assert_eq!(c.version, "28.2.zip");
    }

    #[test]
    fn test_fallback_without_dash() {
        let c = fallback_classification("standalone.zip");
        assert_eq!(c.type_id, "standalone.zip");
        assert_eq!(c.version, UNKNOWN_VERSION);
    }

    #[test]
    fn test_fallback_empty_version_segment() {
        let c = fallback_classification("tool--1.0.zip");
        assert_eq!(c.type_id, "tool");
        assert_eq!(c.version, UNKNOWN_VERSION);
    }
}
