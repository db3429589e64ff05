//! Compiled regex patterns for text normalization and page-id discovery.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

// =============================================================================
// Page Identifier Patterns (social profile URLs)
// =============================================================================

/// `/pages/<name>/<digits>` path shape, with or without a category segment.
pub static PAGES_PATH_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/pages/(?:[^/?#]+/)+(\d+)(?:[/?#]|$)").expect("PAGES_PATH_ID regex")
});

/// A bare run of digits long enough to be a page id, delimited by path separators.
pub static LONG_DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[/\-])(\d{8,})(?:[/?#]|$)").expect("LONG_DIGIT_RUN regex")
});

// =============================================================================
// Page Identifier Patterns (fetched profile HTML)
// =============================================================================

/// App-link URIs carried in meta tags (`fb://page/?id=123`, `fb://page/123`, `fb://profile/123`).
pub static APP_LINK_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^fb://(?:page|profile)/(?:\?id=)?(\d+)").expect("APP_LINK_ID regex")
});

/// Embedded `"page_id":"123"` / `"pageID":"123"` JSON fragments.
pub static EMBEDDED_PAGE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:page_id|pageID)"\s*:\s*"?(\d+)"#).expect("EMBEDDED_PAGE_ID regex")
});

/// Raw-body fallback: `page_id=123` anywhere in the text.
pub static RAW_PAGE_ID_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"page_id=(\d+)").expect("RAW_PAGE_ID_PARAM regex")
});

/// Raw-body fallback: `/pages/<name>/<digits>` anywhere in the text.
pub static RAW_PAGES_PATH_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/pages/[^/\s]+/(\d+)").expect("RAW_PAGES_PATH_ID regex")
});

/// Entirely numeric value (query parameters, data attributes).
pub static ALL_DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+$").expect("ALL_DIGITS regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    fn first_capture(re: &Regex, s: &str) -> Option<String> {
        re.captures(s).and_then(|c| c.get(1)).map(|m| m.as_str().to_string())
    }

    #[test]
    fn pages_path_matches_name_and_category_forms() {
        assert_eq!(first_capture(&PAGES_PATH_ID, "/pages/Acme-Co/123456"), Some("123456".into()));
        assert_eq!(
            first_capture(&PAGES_PATH_ID, "/pages/category/Shopping/Acme-Co/987654/"),
            Some("987654".into())
        );
        assert_eq!(first_capture(&PAGES_PATH_ID, "/acme"), None);
    }

    #[test]
    fn long_digit_run_ignores_short_numbers() {
        assert_eq!(first_capture(&LONG_DIGIT_RUN, "/100064123456789/"), Some("100064123456789".into()));
        assert_eq!(first_capture(&LONG_DIGIT_RUN, "/Acme-Co-100064123456789"), Some("100064123456789".into()));
        assert_eq!(first_capture(&LONG_DIGIT_RUN, "/acme2024"), None);
        assert_eq!(first_capture(&LONG_DIGIT_RUN, "/123/"), None);
    }

    #[test]
    fn app_link_variants() {
        assert_eq!(first_capture(&APP_LINK_ID, "fb://page/?id=42"), Some("42".into()));
        assert_eq!(first_capture(&APP_LINK_ID, "fb://page/42"), Some("42".into()));
        assert_eq!(first_capture(&APP_LINK_ID, "fb://profile/77"), Some("77".into()));
        assert_eq!(first_capture(&APP_LINK_ID, "https://facebook.com"), None);
    }

    #[test]
    fn embedded_page_id_both_spellings() {
        assert_eq!(first_capture(&EMBEDDED_PAGE_ID, r#"{"page_id":"987"}"#), Some("987".into()));
        assert_eq!(first_capture(&EMBEDDED_PAGE_ID, r#"{"pageID":"654"}"#), Some("654".into()));
    }
}
