//! Error types for prospect-links.
//!
//! Extraction itself never fails a run: missing fields and exhausted
//! lookups are logged and leave slots empty. These errors surface only
//! from the edges (page construction, network fetches, the tab handoff).

/// Error type for engine edge operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page URL could not be parsed as an absolute http(s) URL.
    #[error("Invalid page URL: {0}")]
    InvalidPageUrl(String),

    /// A structure the active layout requires is not present on the page.
    #[error("Required page structure missing: {0}")]
    MissingStructure(&'static str),

    /// Network fetch failed before a response was received.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Writing the handoff message failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The handoff message could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for engine edge operations.
pub type Result<T> = std::result::Result<T, Error>;
