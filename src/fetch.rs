//! Network fetch used to resolve social page identifiers.
//!
//! The engine only needs "GET this URL with the session's credentials";
//! [`PageFetcher`] is that capability, [`HttpFetcher`] the `reqwest`
//! implementation.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::Options;

/// A fetched response: status, declared content type and raw body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// A 200 response with an HTML body.
    #[must_use]
    pub fn ok_html(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: Some("text/html; charset=utf-8".to_string()),
            body: body.into().into_bytes(),
        }
    }

    /// An empty response with the given status.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Whether the status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded to UTF-8 using the declared or detected charset.
    #[must_use]
    pub fn text(&self) -> String {
        encoding::transcode_to_utf8(&self.body, self.content_type.as_deref())
    }
}

/// Fetch a page with the ambient session's credentials.
///
/// Transport failures are `Err`; any received response, whatever its
/// status, is `Ok`.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage>;
}

/// `reqwest`-backed fetcher with a persistent cookie store.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(options: &Options) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(options.user_agent.as_str())
            .timeout(Duration::from_secs(15))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| Error::Fetch(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("{url}: {e}")))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(format!("failed to read body of {url}: {e}")))?;

        Ok(FetchedPage {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}
