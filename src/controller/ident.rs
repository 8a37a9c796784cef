//! Converters from path-parameter strings to typed resource identifiers.
//!
//! Converters are total: an unconvertible identifier is `None`, which
//! dispatch uniformly answers with 404 rather than 400, so malformed ids are
//! indistinguishable from absent ones at the HTTP boundary.

/// Converter for resources addressed by an integer id.
///
/// Validity is parseability and nothing else; in particular `0` is a valid
/// identifier here, and range rules are left to the upstream backend.
pub fn numeric_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Identity converter for resources addressed by an opaque string (tracker
/// ids, usernames). Only the empty string is invalid.
pub fn opaque_id(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Converter for operations that carry no identifier at all (credential
/// changes act on the session's own user).
pub fn unit_id(_raw: &str) -> Option<()> {
    Some(())
}

#[cfg(test)]
mod tests {
    use super::{numeric_id, opaque_id, unit_id};

    #[test]
    fn numeric_parses_integers_including_zero() {
        assert_eq!(numeric_id("5"), Some(5));
        assert_eq!(numeric_id("0"), Some(0));
    }

    #[test]
    fn numeric_rejects_non_numbers() {
        assert_eq!(numeric_id("abc"), None);
        assert_eq!(numeric_id(""), None);
        assert_eq!(numeric_id("5x"), None);
    }

    #[test]
    fn opaque_passes_strings_through() {
        assert_eq!(opaque_id("tracker-7"), Some("tracker-7".to_string()));
        assert_eq!(opaque_id(""), None);
    }

    #[test]
    fn unit_always_converts() {
        assert_eq!(unit_id(""), Some(()));
        assert_eq!(unit_id("ignored"), Some(()));
    }
}
