//! Read-only snapshot of the page an extraction runs against.

use url::Url;

use crate::dom::{self, Document};
use crate::encoding;
use crate::error::{Error, Result};
use crate::url_utils;

/// The current page: its absolute URL and parsed document.
pub struct Page {
    url: Url,
    document: Document,
}

impl Page {
    /// Build a page from its URL and HTML source.
    pub fn parse(url: &str, html: &str) -> Result<Self> {
        let url = url_utils::canonicalize(url).ok_or_else(|| Error::InvalidPageUrl(url.to_string()))?;
        Ok(Self {
            url,
            document: dom::parse(html),
        })
    }

    /// Build a page from raw bytes, detecting the charset from meta declarations.
    pub fn from_bytes(url: &str, html: &[u8]) -> Result<Self> {
        Self::parse(url, &encoding::transcode_to_utf8(html, None))
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Host used for layout classification (as written, `www.` kept).
    #[must_use]
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page").field("url", &self.url.as_str()).finish_non_exhaustive()
    }
}
