//! URL Utility Functions
//!
//! Canonicalization and hostname helpers shared by every extraction stage,
//! plus the builders for the links this crate synthesizes.

use url::Url;

/// Parse a string as an absolute `http(s)` URL in normalized form.
///
/// Returns `None` for anything that is empty, relative, uses another
/// scheme, or lacks a host. Never panics.
///
/// # Example
///
/// ```rust
/// use prospect_links::url_utils::canonicalize;
///
/// let a = canonicalize("https://Acme.com").map(|u| u.to_string());
/// let b = canonicalize(" https://acme.com/ ").map(|u| u.to_string());
/// assert_eq!(a, b);
/// assert!(canonicalize("acme.com").is_none());
/// ```
#[must_use]
pub fn canonicalize(raw: &str) -> Option<Url> {
    let s = raw.trim();

    if s.is_empty() {
        return None;
    }

    // Must start with http:// or https:// (case-insensitive)
    let lower = s.to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return None;
    }

    let url = Url::parse(s).ok()?;
    if url.host_str().is_none_or(str::is_empty) {
        return None;
    }

    Some(url)
}

/// Host of a URL with exactly one leading `www.` removed.
///
/// The match is case-insensitive; `wwwx.example.com` is left untouched.
#[must_use]
pub fn hostname_of(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    if host.is_empty() {
        return None;
    }

    let stripped = match host.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("www.") => &host[4..],
        _ => host,
    };

    Some(stripped.to_string())
}

/// Same as [`hostname_of`] for a raw string; `None` when it does not canonicalize.
#[must_use]
pub fn hostname_of_str(raw: &str) -> Option<String> {
    canonicalize(raw).and_then(|url| hostname_of(&url))
}

/// Percent-encode a query component the way browsers' `encodeURIComponent` does
/// for the characters that matter here (spaces become `%20`, not `+`).
#[must_use]
pub fn encode_component(value: &str) -> String {
    // byte_serialize already escapes a literal '+' as %2B, so every '+' left is a space
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

// === Link builders ===

/// Social-network search results for a company name.
#[must_use]
pub fn social_search_url(company_name: &str) -> Option<Url> {
    canonicalize(&format!(
        "https://www.facebook.com/search/top?q={}",
        encode_component(company_name)
    ))
}

/// Domain traffic lookup for a hostname.
#[must_use]
pub fn seo_lookup_url(host: &str) -> Option<Url> {
    canonicalize(&format!(
        "https://www.spyfu.com/overview/domain?query={}",
        encode_component(host)
    ))
}

/// Search-engine advertising transparency lookup for a hostname.
#[must_use]
pub fn ad_transparency_url(host: &str, region: &str) -> Option<Url> {
    canonicalize(&format!(
        "https://adstransparency.google.com/?region={}&domain={}",
        encode_component(region),
        encode_component(host)
    ))
}

/// Public ads listing for a social page identifier.
#[must_use]
pub fn ads_library_url(page_id: &str) -> Option<Url> {
    canonicalize(&format!(
        "https://www.facebook.com/ads/library/?view_all_page_id={}",
        encode_component(page_id)
    ))
}
