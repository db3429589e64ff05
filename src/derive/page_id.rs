//! Social page identifier discovery.
//!
//! Two independent strategy lists:
//!
//! - [`from_profile_url`]: read the id straight out of the profile URL
//! - [`from_profile_body`]: find it in a fetched profile page, first through
//!   the parsed document, then by raw pattern match on the body text
//!
//! Each strategy either yields an id or defers to the next one.

use url::Url;

use crate::dom;
use crate::patterns::{
    ALL_DIGITS, APP_LINK_ID, EMBEDDED_PAGE_ID, LONG_DIGIT_RUN, PAGES_PATH_ID, RAW_PAGES_PATH_ID,
    RAW_PAGE_ID_PARAM,
};

/// Looks for a page id in a profile URL.
pub type UrlStrategy = fn(&Url) -> Option<String>;

/// Looks for a page id in a fetched profile body.
pub type BodyStrategy = fn(&str) -> Option<String>;

/// URL strategies in priority order.
pub const URL_STRATEGIES: &[UrlStrategy] = &[from_id_query, from_pages_path, from_digit_run];

/// Body strategies in priority order.
pub const BODY_STRATEGIES: &[BodyStrategy] = &[from_parsed_document, from_raw_text];

/// Page id carried by the profile URL itself, if any.
#[must_use]
pub fn from_profile_url(url: &Url) -> Option<String> {
    URL_STRATEGIES.iter().find_map(|strategy| strategy(url))
}

/// Page id found in a fetched profile page body, if any.
#[must_use]
pub fn from_profile_body(body: &str) -> Option<String> {
    BODY_STRATEGIES.iter().find_map(|strategy| strategy(body))
}

/// `?id=<digits>` or `?page_id=<digits>`.
#[must_use]
pub fn from_id_query(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, value)| (key == "id" || key == "page_id") && ALL_DIGITS.is_match(value))
        .map(|(_, value)| value.into_owned())
}

/// `/pages/<name>/<digits>`.
#[must_use]
pub fn from_pages_path(url: &Url) -> Option<String> {
    capture(&PAGES_PATH_ID, url.path())
}

/// A long bare digit run in the path (`/100064123456789`, `/Acme-100064123456789`).
#[must_use]
pub fn from_digit_run(url: &Url) -> Option<String> {
    capture(&LONG_DIGIT_RUN, url.path())
}

/// App-link meta tags, then embedded `page_id` fragments in scripts, then
/// `data-page-id`-style attributes.
#[must_use]
pub fn from_parsed_document(body: &str) -> Option<String> {
    let doc = dom::parse(body);
    let root = doc.select("html");

    let from_meta = || {
        dom::query_each(&root, "meta[content]")
            .iter()
            .filter_map(|meta| dom::get_attribute(meta, "content"))
            .find_map(|content| capture(&APP_LINK_ID, content.trim()))
    };

    let from_scripts = || {
        dom::query_each(&root, "script")
            .iter()
            .find_map(|script| capture(&EMBEDDED_PAGE_ID, &dom::text_content(script)))
    };

    let from_data_attributes = || {
        dom::query_each(&root, "[data-pageid], [data-page-id]")
            .iter()
            .filter_map(|el| dom::get_attribute(el, "data-pageid").or_else(|| dom::get_attribute(el, "data-page-id")))
            .map(|value| value.trim().to_string())
            .find(|value| ALL_DIGITS.is_match(value))
    };

    from_meta().or_else(from_scripts).or_else(from_data_attributes)
}

/// Pattern match on the unparsed body: `page_id=<digits>`, `/pages/<name>/<digits>`,
/// or a bare `"page_id":"<digits>"` fragment.
#[must_use]
pub fn from_raw_text(body: &str) -> Option<String> {
    [&*RAW_PAGE_ID_PARAM, &*RAW_PAGES_PATH_ID, &*EMBEDDED_PAGE_ID]
        .into_iter()
        .find_map(|re| capture(re, body))
}

fn capture(re: &regex::Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn id_query_parameter() {
        assert_eq!(from_profile_url(&url("https://www.facebook.com/profile.php?id=12345")).as_deref(), Some("12345"));
        assert_eq!(from_profile_url(&url("https://www.facebook.com/x?page_id=678")).as_deref(), Some("678"));
    }

    #[test]
    fn non_numeric_id_is_ignored() {
        assert_eq!(from_profile_url(&url("https://www.facebook.com/x?id=acme")), None);
    }

    #[test]
    fn query_beats_path() {
        let u = url("https://www.facebook.com/pages/Acme/999999999?id=1");
        assert_eq!(from_profile_url(&u).as_deref(), Some("1"));
    }

    #[test]
    fn pages_path() {
        assert_eq!(from_profile_url(&url("https://www.facebook.com/pages/Acme-Co/4242")).as_deref(), Some("4242"));
    }

    #[test]
    fn digit_run_in_path() {
        assert_eq!(
            from_profile_url(&url("https://www.facebook.com/Acme-Co-100064123456789/")).as_deref(),
            Some("100064123456789")
        );
    }

    #[test]
    fn vanity_url_has_no_id() {
        assert_eq!(from_profile_url(&url("https://www.facebook.com/acmeco")), None);
    }

    #[test]
    fn app_link_meta_tag() {
        let body = r#"<html><head><meta property="al:android:url" content="fb://page/?id=555"></head></html>"#;
        assert_eq!(from_profile_body(body).as_deref(), Some("555"));
    }

    #[test]
    fn embedded_script_fragment() {
        let body = r#"<html><body><script>require({"props":{"pageID":"321"}})</script></body></html>"#;
        assert_eq!(from_parsed_document(body).as_deref(), Some("321"));
    }

    #[test]
    fn data_attribute() {
        let body = r#"<div data-pageid="8080"></div>"#;
        assert_eq!(from_parsed_document(body).as_deref(), Some("8080"));
    }

    #[test]
    fn meta_beats_script() {
        let body = r#"<meta property="al:ios:url" content="fb://page/1"><script>{"page_id":"2"}</script>"#;
        assert_eq!(from_profile_body(body).as_deref(), Some("1"));
    }

    #[test]
    fn raw_fallback_handles_unstructured_bodies() {
        assert_eq!(from_profile_body(r#"{"page_id":"987"}"#).as_deref(), Some("987"));
        assert_eq!(from_profile_body("see ads?page_id=246 now").as_deref(), Some("246"));
        assert_eq!(from_profile_body("link /pages/Acme/1357 here").as_deref(), Some("1357"));
    }

    #[test]
    fn nothing_found() {
        assert_eq!(from_profile_body("<html><body>Log in to continue</body></html>"), None);
    }
}
