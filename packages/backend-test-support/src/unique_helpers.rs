//! ULID-based fixture values so rows from different tests never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("user");
/// let b = unique_str("user");
/// assert_ne!(a, b);
/// assert!(a.starts_with("user-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A game title that reads like one: `{base} #{ulid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_title;
///
/// let title = unique_title("Chrono Quest");
/// assert!(title.starts_with("Chrono Quest #"));
/// ```
pub fn unique_title(base: &str) -> String {
    format!("{} #{}", base, Ulid::new())
}
