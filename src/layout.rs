//! Layout classification by page host.

use std::fmt;

use crate::Options;

/// Page-structure convention that decides which context extractor runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Enterprise CRM record page (label/value form sections with field identifiers).
    RecordPage,
    /// Dialer engagement panel (expanded prospect row with labelled paragraphs).
    DialerPanel,
    /// Any other site; the page itself is the prospect's website.
    Generic,
}

impl Layout {
    /// Whether the website slot is opened as a tab for this layout.
    ///
    /// On generic pages the "website" is the page already open.
    #[must_use]
    pub fn opens_website(self) -> bool {
        !matches!(self, Layout::Generic)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::RecordPage => write!(f, "record-page"),
            Layout::DialerPanel => write!(f, "dialer-panel"),
            Layout::Generic => write!(f, "generic"),
        }
    }
}

/// Choose a layout from the current page host by substring match against
/// the configured allowlists. Unknown hosts are generic.
#[must_use]
pub fn classify(host: &str, options: &Options) -> Layout {
    let host = host.to_ascii_lowercase();
    let matches = |patterns: &[String]| {
        patterns
            .iter()
            .any(|p| !p.is_empty() && host.contains(&p.to_ascii_lowercase()))
    };

    if matches(&options.record_page_hosts) {
        Layout::RecordPage
    } else if matches(&options.dialer_hosts) {
        Layout::DialerPanel
    } else {
        Layout::Generic
    }
}
