//! Collector: the final, deduplicated list of outbound links.

use std::collections::HashSet;

use tracing::debug;
use url::Url;

use crate::derive;
use crate::layout::Layout;
use crate::result::{DerivedLink, LinkKind, ResultRecord};
use crate::url_utils;
use crate::Options;

/// Insertion-ordered link list that skips canonical duplicates.
#[derive(Debug, Default)]
pub struct LinkSet {
    seen: HashSet<String>,
    links: Vec<DerivedLink>,
}

impl LinkSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonicalize and append `url` unless an equal link is already present.
    ///
    /// Returns `true` when the link was added.
    pub fn push(&mut self, kind: LinkKind, url: Option<&Url>) -> bool {
        let Some(url) = url.and_then(|u| url_utils::canonicalize(u.as_str())) else {
            return false;
        };

        if !self.seen.insert(url.to_string()) {
            debug!(%kind, url = %url, "skipping duplicate link");
            return false;
        }

        self.links.push(DerivedLink::new(kind, url));
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[must_use]
    pub fn into_links(self) -> Vec<DerivedLink> {
        self.links
    }
}

/// Build the outbound link list for a finished record.
///
/// Order: website (not on generic pages), social profile or social search,
/// ads library, SEO lookup, ad transparency.
#[must_use]
pub fn collect(layout: Layout, record: &ResultRecord, options: &Options) -> Vec<DerivedLink> {
    let mut links = LinkSet::new();

    if layout.opens_website() {
        links.push(LinkKind::Website, record.website.as_ref());
    }

    match &record.social_profile {
        Some(profile) => {
            links.push(LinkKind::SocialProfile, Some(profile));
        }
        None => {
            links.push(LinkKind::SocialSearch, derive::social_search_link(record).as_ref());
        }
    }

    links.push(LinkKind::AdsLibrary, record.ads_library.as_ref());
    links.push(LinkKind::SeoLookup, record.seo_lookup.as_ref());
    links.push(
        LinkKind::AdTransparency,
        derive::ad_transparency_link(record, options).as_ref(),
    );

    links.into_links()
}
