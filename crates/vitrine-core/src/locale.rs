//! Locale negotiation and URL segment matching.

use serde::{Deserialize, Serialize};

/// Negotiated language/country pair for a request.
///
/// A request may carry a leading locale path segment (e.g. `/en-us/...`).
/// When present, the segment must match the negotiated locale
/// case-insensitively; a mismatch is a client error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleContext {
    /// ISO language code (e.g. "EN").
    pub language: String,
    /// ISO country code (e.g. "US").
    pub country: String,
}

impl LocaleContext {
    /// Create a new locale context.
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            country: country.into(),
        }
    }

    /// The canonical `language-country` path segment, lowercased.
    pub fn as_segment(&self) -> String {
        format!("{}-{}", self.language, self.country).to_lowercase()
    }

    /// Check whether a locale path segment matches this locale.
    pub fn matches_segment(&self, segment: &str) -> bool {
        segment.to_lowercase() == self.as_segment()
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new("EN", "US")
    }
}

impl std::fmt::Display for LocaleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.language, self.country)
    }
}

/// Split an optional leading locale segment off a request path.
///
/// Returns the segment (without slashes) and the remaining path. Only
/// segments shaped like `xx-yy` are treated as locales; anything else is
/// left on the path untouched.
pub fn split_locale_segment(path: &str) -> (Option<&str>, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (first, rest) = match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, "/"),
    };

    if is_locale_segment(first) {
        (Some(first), rest)
    } else {
        (None, path)
    }
}

fn is_locale_segment(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 5
        && bytes[2] == b'-'
        && bytes[..2].iter().all(|b| b.is_ascii_alphabetic())
        && bytes[3..].iter().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    // === LocaleContext Tests ===

    #[test]
    fn test_locale_segment_roundtrip() {
        let locale = LocaleContext::new("EN", "US");
        assert_eq!(locale.as_segment(), "en-us");
    }

    #[test]
    fn test_matches_segment_case_insensitive() {
        let locale = LocaleContext::new("EN", "US");
        assert!(locale.matches_segment("en-us"));
        assert!(locale.matches_segment("EN-US"));
        assert!(locale.matches_segment("En-Us"));
    }

    #[test]
    fn test_mismatched_segment_rejected() {
        let locale = LocaleContext::new("EN", "US");
        assert!(!locale.matches_segment("fr-ca"));
        assert!(!locale.matches_segment("pl-pl"));
    }

    // === Path Splitting Tests ===

    #[test]
    fn test_split_leading_locale() {
        assert_eq!(split_locale_segment("/fr-ca"), (Some("fr-ca"), "/"));
        assert_eq!(
            split_locale_segment("/en-us/collections"),
            (Some("en-us"), "/collections")
        );
    }

    #[test]
    fn test_split_no_locale() {
        assert_eq!(split_locale_segment("/"), (None, "/"));
        assert_eq!(split_locale_segment("/collections"), (None, "/collections"));
        // Looks vaguely like a locale but isn't `xx-yy` shaped.
        assert_eq!(split_locale_segment("/sale-1"), (None, "/sale-1"));
        assert_eq!(split_locale_segment("/en-usa"), (None, "/en-usa"));
    }
}
