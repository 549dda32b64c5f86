//! Human-readable file sizes
//!
//! Divisors are binary (1024) while labels read `KB`/`MB`, matching the
//! existing release pages. Rounding is half-up in both cases.

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Format a byte count for display
///
/// # Examples
/// ```
/// use binmirror::release::format_file_size;
///
/// assert_eq!(format_file_size(500), "500 B");
/// assert_eq!(format_file_size(2048), "2 KB");
/// assert_eq!(format_file_size(5_242_880), "5.0 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        return format!("{bytes} B");
    }
    if bytes < MIB {
        let kib = (u128::from(bytes) + u128::from(KIB / 2)) / u128::from(KIB);
        return format!("{kib} KB");
    }

    let tenths = (u128::from(bytes) * 10 + u128::from(MIB / 2)) / u128::from(MIB);
    format!("{}.{} MB", tenths / 10, tenths % 10)
}
