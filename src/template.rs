//! Version placeholder substitution for URL and filename templates
//!
//! Templates carry two placeholders:
//! - `{version}`: replaced with the version exactly as given
//! - `{clean_version}`: replaced with the version minus a leading `v` marker

/// Placeholder for the version as given
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Placeholder for the version with its leading marker removed
pub const CLEAN_VERSION_PLACEHOLDER: &str = "{clean_version}";

/// Strip a single leading `v`/`V` marker from a version string
///
/// # Examples
/// ```
/// use binmirror::template::clean_version;
/// assert_eq!(clean_version("v7.4.1"), "7.4.1");
/// assert_eq!(clean_version("7.4.1"), "7.4.1");
/// ```
pub fn clean_version(version: &str) -> &str {
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
}

/// Substitute `version` into the first occurrence of each placeholder
///
/// Placeholders that do not appear in the template are left alone.
///
/// # Examples
/// ```
/// use binmirror::template::format_template;
/// assert_eq!(
///     format_template("bazel-{version}-windows.zip", "7.4.1"),
///     "bazel-7.4.1-windows.zip"
/// );
/// assert_eq!(
///     format_template("releases/{version}/tool-{clean_version}.exe", "v2.0"),
///     "releases/v2.0/tool-2.0.exe"
/// );
/// ```
pub fn format_template(template: &str, version: &str) -> String {
    template
        .replacen(VERSION_PLACEHOLDER, version, 1)
        .replacen(CLEAN_VERSION_PLACEHOLDER, clean_version(version), 1)
}

/// Literal text preceding the first placeholder of a template
///
/// Returns the whole template when it has no placeholder at all.
pub fn template_prefix(template: &str) -> &str {
    template.split('{').next().unwrap_or(template)
}
