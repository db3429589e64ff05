//! Run pipeline: classify, extract, derive, collect, hand off.

use tracing::{debug, error, info};

use crate::collect;
use crate::context;
use crate::derive;
use crate::fetch::PageFetcher;
use crate::handoff::{OpenTabs, TabSink};
use crate::layout;
use crate::page::Page;
use crate::result::{Extraction, Outcome, ResultRecord};
use crate::Options;

/// Runs extractions with a fixed configuration and fetcher.
///
/// Each call to [`Engine::run`] is independent: it owns a fresh record and
/// shares nothing with other runs.
pub struct Engine<F> {
    options: Options,
    fetcher: F,
}

impl<F: PageFetcher> Engine<F> {
    pub fn new(options: Options, fetcher: F) -> Self {
        Self { options, fetcher }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Run one extraction against `page` and send the result to `sink`.
    ///
    /// Never fails: fatal layout conditions end the run early with no
    /// links, and a failed handoff is logged. The message is sent at most
    /// once, and only when there is at least one URL.
    pub async fn run(&self, page: &Page, sink: &mut dyn TabSink) -> Extraction {
        let layout = layout::classify(page.host(), &self.options);
        info!(%layout, url = %page.url(), "extracting links");

        let mut record = ResultRecord::new();
        if let Err(err) = context::extract(layout, page, &mut record) {
            error!(%layout, error = %err, "extraction aborted");
            return Extraction {
                layout,
                record,
                links: Vec::new(),
                outcome: Outcome::Aborted(err.to_string()),
            };
        }

        derive::derive(&mut record, &self.fetcher, &self.options).await;

        let links = collect::collect(layout, &record, &self.options);
        for link in &links {
            debug!(kind = %link.kind, url = %link.url, "collected link");
        }

        let extraction = Extraction {
            layout,
            record,
            links,
            outcome: Outcome::Completed,
        };

        send(&extraction, sink);
        extraction
    }
}

fn send(extraction: &Extraction, sink: &mut dyn TabSink) {
    let urls = extraction.urls();
    if urls.is_empty() {
        info!("no links to open");
        return;
    }

    info!(count = urls.len(), "requesting tabs");
    if let Err(err) = sink.open_tabs(&OpenTabs::new(urls)) {
        error!(error = %err, "failed to hand off links");
    }
}
