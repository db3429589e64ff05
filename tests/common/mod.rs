//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use prospect_links::{Error, FetchedPage, PageFetcher, Result};
use url::Url;

/// Serves queued responses in order; once the queue is empty every call
/// fails with a transport error.
#[derive(Default)]
pub struct ScriptedFetcher {
    responses: Mutex<VecDeque<Result<FetchedPage>>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new(responses: Vec<Result<FetchedPage>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// `failures` transport errors followed by one successful page.
    pub fn failing_then(failures: usize, body: &str) -> Self {
        let mut responses: Vec<Result<FetchedPage>> = (0..failures).map(|i| Err(transport_error(i))).collect();
        responses.push(Ok(FetchedPage::ok_html(body)));
        Self::new(responses)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

fn transport_error(i: usize) -> Error {
    Error::Fetch(format!("scripted failure #{i}"))
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    async fn fetch(&self, _url: &Url) -> Result<FetchedPage> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(transport_error(call)))
    }
}

pub const RECORD_PAGE_URL: &str = "https://acme.lightning.force.com/lightning/r/Lead/00Q5e00000AbCdE/view";
pub const DIALER_URL: &str = "https://app.orum.com/dialer/session";

/// A record page with the given layout items, each `(api name, label, value html)`.
pub fn record_page(items: &[(&str, &str, &str)]) -> String {
    let body: String = items
        .iter()
        .map(|(api, label, value)| {
            format!(
                r#"<records-record-layout-item data-target-selection-name="sfdc:RecordField.Lead.{api}">
                     <div class="slds-form-element">
                       <span class="slds-form-element__label">{label}</span>
                       <div class="slds-form-element__control">{value}</div>
                     </div>
                   </records-record-layout-item>"#
            )
        })
        .collect();

    format!(
        r#"<html><head><title>Lead | Salesforce</title></head>
           <body><records-record-layout-section>{body}</records-record-layout-section></body></html>"#
    )
}
