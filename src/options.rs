//! Configuration options for a link extraction run.
//!
//! The `Options` struct carries the host allowlists used by the layout
//! classifier, the retry policy for page-id resolution, and the few
//! parameters baked into synthesized links.

use std::time::Duration;

/// Bounded-attempt policy for the page-id network lookup.
///
/// Attempts are strictly sequential. The delay is applied between attempts,
/// never after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of fetch attempts.
    ///
    /// Default: `5`
    pub max_attempts: u32,

    /// Fixed pause between consecutive attempts, regardless of failure cause.
    ///
    /// Default: `500ms`
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_millis(500),
        }
    }
}

/// Configuration options for a link extraction run.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use prospect_links::Options;
///
/// let options = Options {
///     transparency_region: "GB".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(options.retry.max_attempts, 5);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Host substrings that select the CRM record-page layout.
    ///
    /// Default: `["lightning.force.com"]`
    pub record_page_hosts: Vec<String>,

    /// Host substrings that select the dialer panel layout.
    ///
    /// Default: `["app.orum.com"]`
    pub dialer_hosts: Vec<String>,

    /// Retry policy for resolving a social page identifier over the network.
    pub retry: RetryPolicy,

    /// Region parameter of the ad-transparency link.
    ///
    /// Default: `"US"`
    pub transparency_region: String,

    /// User agent sent by [`crate::fetch::HttpFetcher`].
    pub user_agent: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            record_page_hosts: vec!["lightning.force.com".to_string()],
            dialer_hosts: vec!["app.orum.com".to_string()],
            retry: RetryPolicy::default(),
            transparency_region: "US".to_string(),
            user_agent: concat!("prospect-links/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_retry_policy_is_five_attempts_half_second_apart() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.delay, Duration::from_millis(500));
    }

    #[test]
    fn struct_update_keeps_other_defaults() {
        let options = Options {
            dialer_hosts: vec!["dialer.example".to_string()],
            ..Options::default()
        };
        assert_eq!(options.dialer_hosts, vec!["dialer.example".to_string()]);
        assert_eq!(options.record_page_hosts, vec!["lightning.force.com".to_string()]);
        assert_eq!(options.transparency_region, "US");
    }
}
