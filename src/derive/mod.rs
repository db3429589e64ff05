//! Link Derivation Engine
//!
//! Fills the record slots still empty after context extraction:
//!
//! - ads library link, resolved from the social profile's page id
//! - SEO lookup link, from the website host
//!
//! The social search and ad-transparency links are synthesized at
//! collection time from the finished record ([`social_search_link`],
//! [`ad_transparency_link`]); they never occupy a slot.

use tracing::{debug, error, info};
use url::Url;

use crate::fetch::PageFetcher;
use crate::result::{Field, ResultRecord};
use crate::url_utils;
use crate::Options;

pub mod page_id;
pub mod resolve;

pub use resolve::{resolve_page_id, Resolution};

/// Fill derivable slots in `record`. Never overwrites a present value.
pub async fn derive(record: &mut ResultRecord, fetcher: &dyn PageFetcher, options: &Options) {
    resolve_ads_library(record, fetcher, options).await;
    fill_seo_lookup(record);
}

/// Resolve the ads library link from the social profile when it is missing.
///
/// The page id is read from the profile URL when possible; only otherwise
/// is the profile fetched. Exhaustion leaves the slot empty.
pub async fn resolve_ads_library(record: &mut ResultRecord, fetcher: &dyn PageFetcher, options: &Options) {
    if record.ads_library.is_some() {
        debug!("ads library link already present");
        return;
    }

    let Some(profile) = record.social_profile.clone() else {
        debug!("no social profile to resolve an ads library link from");
        return;
    };

    let page_id = if let Some(id) = page_id::from_profile_url(&profile) {
        debug!(page_id = %id, "page id taken from profile URL");
        id
    } else {
        info!(profile = %profile, "fetching profile page to resolve page id");
        match resolve_page_id(fetcher, &profile, options.retry).await {
            Resolution::Found(id) => id,
            Resolution::Exhausted { attempts } => {
                error!(attempts, profile = %profile, "could not resolve page id for ads library link");
                return;
            }
        }
    };

    if let Some(url) = url_utils::ads_library_url(&page_id) {
        record.fill_url(Field::AdsLibrary, url.as_str());
        debug!(url = %url, "ads library link derived");
    }
}

/// Fill the SEO lookup slot from the website host when it is missing.
pub fn fill_seo_lookup(record: &mut ResultRecord) {
    if record.seo_lookup.is_some() {
        return;
    }

    if let Some(url) = record.website_host().as_deref().and_then(url_utils::seo_lookup_url) {
        debug!(url = %url, "SEO lookup link derived from website");
        record.fill_url(Field::SeoLookup, url.as_str());
    }
}

/// Social search link for the company name, when one is known.
#[must_use]
pub fn social_search_link(record: &ResultRecord) -> Option<Url> {
    record.company_name.as_deref().and_then(url_utils::social_search_url)
}

/// Ad-transparency link for the website host, when a website is known.
#[must_use]
pub fn ad_transparency_link(record: &ResultRecord, options: &Options) -> Option<Url> {
    record
        .website_host()
        .and_then(|host| url_utils::ad_transparency_url(&host, &options.transparency_region))
}
