//! Reads a page's HTML from stdin, runs the link extractor against it and
//! prints the `openTabs` message to stdout.
//!
//! Usage: `extract_links <page-url> < page.html`
//!
//! Logs go to stderr; set `RUST_LOG=prospect_links=debug` for detail.

use std::io::{self, Read};
use std::process::ExitCode;

use prospect_links::{Engine, HttpFetcher, JsonLineSink, Options, Page};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("prospect_links=info")))
        .with_writer(io::stderr)
        .init();

    let Some(page_url) = std::env::args().nth(1) else {
        eprintln!("usage: extract_links <page-url> < page.html");
        return ExitCode::FAILURE;
    };

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        return ExitCode::FAILURE;
    }

    let page = match Page::from_bytes(&page_url, &html) {
        Ok(page) => page,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let options = Options::default();
    let fetcher = match HttpFetcher::new(&options) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let engine = Engine::new(options, fetcher);
    let mut sink = JsonLineSink::new(io::stdout());
    engine.run(&page, &mut sink).await;

    ExitCode::SUCCESS
}
