//! Result types for a link extraction run.
//!
//! A run owns one [`ResultRecord`]: the context extractor fills it from the
//! page, the deriver fills whatever is still empty, and the collector reads
//! it to build the final list of [`DerivedLink`]s.

use std::fmt;

use url::Url;

use crate::layout::Layout;
use crate::url_utils;

/// A named datum located on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CompanyName,
    Website,
    SocialProfile,
    AdsLibrary,
    SeoLookup,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::CompanyName => write!(f, "company name"),
            Field::Website => write!(f, "website"),
            Field::SocialProfile => write!(f, "social profile"),
            Field::AdsLibrary => write!(f, "ads library link"),
            Field::SeoLookup => write!(f, "SEO lookup link"),
        }
    }
}

/// Prospect data gathered during one run.
///
/// Every URL slot holds a canonical absolute http(s) URL or nothing. Slots
/// are filled through [`ResultRecord::fill_url`] / [`ResultRecord::fill_company_name`],
/// which never overwrite a value that is already present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRecord {
    /// Prospect company name.
    pub company_name: Option<String>,

    /// Company website.
    pub website: Option<Url>,

    /// Social network profile page.
    pub social_profile: Option<Url>,

    /// Public ads listing for the social page.
    pub ads_library: Option<Url>,

    /// Domain traffic / SEO lookup.
    pub seo_lookup: Option<Url>,
}

impl ResultRecord {
    /// Empty record for a new run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a company name if the slot is empty. Blank names are ignored.
    ///
    /// Returns `true` when the value was stored.
    pub fn fill_company_name(&mut self, name: &str) -> bool {
        let name = crate::dom::normalize_whitespace(name);
        if name.is_empty() || self.company_name.is_some() {
            return false;
        }
        self.company_name = Some(name);
        true
    }

    /// Canonicalize `raw` and store it in the URL slot for `field` if that slot is empty.
    ///
    /// Invalid URLs are dropped. Returns `true` when the value was stored.
    pub fn fill_url(&mut self, field: Field, raw: &str) -> bool {
        let Some(url) = url_utils::canonicalize(raw) else {
            return false;
        };

        let slot = match field {
            Field::Website => &mut self.website,
            Field::SocialProfile => &mut self.social_profile,
            Field::AdsLibrary => &mut self.ads_library,
            Field::SeoLookup => &mut self.seo_lookup,
            Field::CompanyName => return false,
        };

        if slot.is_some() {
            return false;
        }
        *slot = Some(url);
        true
    }

    /// Hostname of the website, without a leading `www.`.
    #[must_use]
    pub fn website_host(&self) -> Option<String> {
        self.website.as_ref().and_then(url_utils::hostname_of)
    }
}

/// What an outbound link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Website,
    SocialProfile,
    SocialSearch,
    AdsLibrary,
    SeoLookup,
    AdTransparency,
}

impl LinkKind {
    /// Human label used in logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Website => "Website",
            LinkKind::SocialProfile => "Facebook URL",
            LinkKind::SocialSearch => "Facebook Search",
            LinkKind::AdsLibrary => "Ad Library Link",
            LinkKind::SeoLookup => "SEO Lookup Link",
            LinkKind::AdTransparency => "Google Ads Transparency",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A labelled outbound URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedLink {
    pub kind: LinkKind,
    pub url: Url,
}

impl DerivedLink {
    #[must_use]
    pub fn new(kind: LinkKind, url: Url) -> Self {
        Self { kind, url }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All stages ran.
    Completed,

    /// The context extractor hit a fatal condition; nothing was collected.
    Aborted(String),
}

/// Report of one run, returned to the caller after the handoff.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Layout chosen by the classifier.
    pub layout: Layout,

    /// Record after extraction and derivation.
    pub record: ResultRecord,

    /// Final deduplicated outbound links, in collection order.
    pub links: Vec<DerivedLink>,

    /// How the run ended.
    pub outcome: Outcome,
}

impl Extraction {
    /// Outbound URLs as strings, in collection order.
    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        self.links.iter().map(|link| link.url.to_string()).collect()
    }

    /// First collected link of the given kind.
    #[must_use]
    pub fn link(&self, kind: LinkKind) -> Option<&Url> {
        self.links.iter().find(|link| link.kind == kind).map(|link| &link.url)
    }
}
