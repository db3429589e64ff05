//! Bounded-attempt page id resolution over the network.

use tracing::{debug, warn};
use url::Url;

use super::page_id;
use crate::fetch::PageFetcher;
use crate::options::RetryPolicy;

/// Outcome of a network page id lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// An identifier was found.
    Found(String),
    /// Every attempt failed; `attempts` is how many were made.
    Exhausted { attempts: u32 },
}

/// Fetch `profile` and look for a page id, up to `policy.max_attempts` times.
///
/// A transport error, a non-2xx status, or a 2xx body with no id all count
/// as a failed attempt. Attempts are sequential with `policy.delay` between
/// them and no delay after the last.
pub async fn resolve_page_id(fetcher: &dyn PageFetcher, profile: &Url, policy: RetryPolicy) -> Resolution {
    let max_attempts = policy.max_attempts;

    for attempt in 1..=max_attempts {
        match fetcher.fetch(profile).await {
            Ok(page) if page.is_success() => {
                if let Some(id) = page_id::from_profile_body(&page.text()) {
                    debug!(attempt, page_id = %id, "page id resolved from profile page");
                    return Resolution::Found(id);
                }
                warn!(attempt, max_attempts, "profile page fetched but no page id found");
            }
            Ok(page) => {
                warn!(attempt, max_attempts, status = page.status, "profile fetch returned non-success status");
            }
            Err(err) => {
                warn!(attempt, max_attempts, error = %err, "profile fetch failed");
            }
        }

        if attempt < max_attempts {
            tokio::time::sleep(policy.delay).await;
        }
    }

    Resolution::Exhausted {
        attempts: max_attempts,
    }
}
