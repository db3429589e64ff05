//! # prospect-links
//!
//! Extracts a prospect's company name and a canonical set of
//! cross-referenced marketing links (website, social profile, ads library
//! listing, SEO lookup, ad transparency) from a CRM record page, a dialer
//! panel, or any other site, and hands the deduplicated URL list to a tab
//! opener.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prospect_links::{Engine, HttpFetcher, JsonLineSink, Options, Page};
//!
//! # async fn demo() -> prospect_links::Result<()> {
//! let html = r#"<html><head><meta property="og:site_name" content="Shop Example"></head></html>"#;
//! let page = Page::parse("https://shop.example.com/about", html)?;
//!
//! let options = Options::default();
//! let engine = Engine::new(options.clone(), HttpFetcher::new(&options)?);
//! let mut sink = JsonLineSink::new(std::io::stdout());
//!
//! let extraction = engine.run(&page, &mut sink).await;
//! println!("{:?}", extraction.record.company_name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! 1. **Layout classification** by page host ([`layout::classify`])
//! 2. **Context extraction** with the layout's field tables ([`context`])
//! 3. **Link derivation**, including page id resolution over the network ([`derive`])
//! 4. **Collection** into an ordered, deduplicated list ([`collect`])
//! 5. **Handoff** of a single `openTabs` message ([`handoff`])

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// URL canonicalization, hostnames and link builders.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page snapshot (URL + parsed document).
pub mod page;

/// Layout classification by host.
pub mod layout;

/// Field locator and value extractors.
pub mod locator;

/// Per-layout context extractors.
pub mod context;

/// Derivation of missing links.
pub mod derive;

/// Network fetch capability.
pub mod fetch;

/// Final link collection.
pub mod collect;

/// `openTabs` message and sinks.
pub mod handoff;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::Engine;
pub use fetch::{FetchedPage, HttpFetcher, PageFetcher};
pub use handoff::{JsonLineSink, OpenTabs, RecordingSink, TabSink};
pub use layout::Layout;
pub use options::{Options, RetryPolicy};
pub use page::Page;
pub use result::{DerivedLink, Extraction, Field, LinkKind, Outcome, ResultRecord};
