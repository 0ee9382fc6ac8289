//! Predicates over rendered cookie header strings, and the `SameSite`
//! append step.
//!
//! Attribute scans only look at the portion after the first `;`, so a
//! cookie whose *value* happens to contain `samesite` is not mistaken
//! for one that already carries the attribute.

use crate::cookies::setcookie::SameSite;

/// Append a `SameSite` directive to a rendered cookie header, unless one
/// is already present.
///
/// An empty header degrades to the bare directive rather than failing.
///
/// ```rust
/// use cookienet::cookies::header::append_same_site;
/// use cookienet::cookies::setcookie::SameSite;
///
/// let header = "USER_COOKIE=DE719787; Path=/; Secure; HttpOnly";
/// assert_eq!(
///     append_same_site(header, SameSite::NoRestriction),
///     "USER_COOKIE=DE719787; Path=/; Secure; HttpOnly; SameSite=None"
/// );
/// ```
pub fn append_same_site(header: &str, directive: SameSite) -> String {
    let value = match directive.as_str() {
        Some(value) => value,
        None => return header.to_string(),
    };

    if header.is_empty() {
        return format!("SameSite={value}");
    }

    if contains_same_site(header) {
        tracing::debug!(header = %header, "SameSite attribute already present");
        return header.to_string();
    }

    format!("{header}; SameSite={value}")
}

/// Whether the header already carries a `SameSite` attribute.
pub fn contains_same_site(header: &str) -> bool {
    contains_attribute(header, "samesite")
}

/// Whether the header already carries a `Secure` attribute.
pub fn contains_secure(header: &str) -> bool {
    contains_attribute(header, "secure")
}

// `attribute` must be lowercase. A header with no `;` has no attributes.
fn contains_attribute(header: &str, attribute: &str) -> bool {
    match header.find(';') {
        Some(index) => header[index..].to_ascii_lowercase().contains(attribute),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_to_plain_header() {
        assert_eq!(
            append_same_site("key=value; Path=/", SameSite::NoRestriction),
            "key=value; Path=/; SameSite=None"
        );
    }

    #[test]
    fn test_append_never_duplicates() {
        let header = "key=value; Path=/; SameSite=Strict";
        assert_eq!(append_same_site(header, SameSite::NoRestriction), header);

        let lowercase = "key=value; path=/; samesite=lax";
        assert_eq!(append_same_site(lowercase, SameSite::NoRestriction), lowercase);
    }

    #[test]
    fn test_append_unspecified_is_identity() {
        assert_eq!(append_same_site("key=value", SameSite::Unspecified), "key=value");
    }

    #[test]
    fn test_append_to_empty_header() {
        assert_eq!(append_same_site("", SameSite::NoRestriction), "SameSite=None");
    }

    #[test]
    fn test_contains_scans_attributes_only() {
        // The value segment before the first `;` must not match.
        assert!(!contains_same_site("samesite=evil"));
        assert!(!contains_secure("secure=value"));

        assert!(contains_same_site("key=value; SameSite=Lax"));
        assert!(contains_secure("key=value; Path=/; Secure"));
        assert!(!contains_secure("key=value; Path=/"));
    }
}
