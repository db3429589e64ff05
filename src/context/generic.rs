//! Generic site extractor.
//!
//! On an unknown site the page itself is the prospect's website and the
//! company name comes from the page's own identity metadata.

use dom_query::Document;
use tracing::{debug, error};

use crate::dom;
use crate::page::Page;
use crate::result::{Field, ResultRecord};

/// Meta keys checked for a site name, in priority order. Each key is
/// matched against both `property` and `name`.
const NAME_META_KEYS: &[&str] = &["og:site_name", "og:title", "twitter:title"];

/// Fill `record` from an arbitrary page. Never fatal.
pub fn extract(page: &Page, record: &mut ResultRecord) {
    if record.fill_url(Field::Website, page.url().as_str()) {
        debug!(website = %page.url(), "using current page as website");
    }

    match company_name(page.document()) {
        Some((name, source)) => {
            debug!(%source, name = %name, "company name extracted");
            record.fill_company_name(&name);
        }
        None => error!("no company name found in page metadata, title or heading"),
    }
}

/// Company name candidates in priority order: Open Graph site name,
/// Open Graph title, Twitter title, document title, first `h1`.
///
/// Returns the first non-empty candidate and where it came from.
#[must_use]
pub fn company_name(doc: &Document) -> Option<(String, &'static str)> {
    let root = doc.select("html");

    NAME_META_KEYS
        .iter()
        .find_map(|key| meta_content(&root, key).map(|name| (name, *key)))
        .or_else(|| first_text(&root, "title").map(|name| (name, "title")))
        .or_else(|| first_text(&root, "h1").map(|name| (name, "h1")))
}

/// Content of the first non-empty `<meta property=key>` or `<meta name=key>`.
fn meta_content(root: &dom::Selection, key: &str) -> Option<String> {
    let selector = format!("meta[property='{key}'], meta[name='{key}']");
    dom::query_each(root, &selector)
        .iter()
        .filter_map(|meta| dom::get_attribute(meta, "content"))
        .map(|content| dom::normalize_whitespace(&content))
        .find(|content| !content.is_empty())
}

fn first_text(root: &dom::Selection, selector: &str) -> Option<String> {
    dom::query_first(root, selector)
        .map(|sel| dom::normalized_text(&sel))
        .filter(|text| !text.is_empty())
}
