//! Dialer panel extractor.
//!
//! Only the expanded prospect row is read. Its details tab renders each
//! field as a `<p>` label followed by the value (a textarea for the
//! company, an anchor for links) inside the same wrapper.

use tracing::debug;

use crate::dom;
use crate::error::{Error, Result};
use crate::locator::{FieldSpec, Profile, Scope};
use crate::page::Page;
use crate::result::{Field, ResultRecord};

/// The currently expanded row.
pub const EXPANDED_PANEL: &str = ".MuiCollapse-entered.connect-panel";

/// Details tab inside the expanded row.
pub const DETAILS_TAB: &str = "[data-testid='prospect-details-tab']";

pub const PROFILE: Profile = Profile {
    id_attribute: None,
    section_selector: None,
    label_selector: "p",
};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: Field::CompanyName,
        labels: &["Company / Account"],
        ids: &[],
    },
    FieldSpec {
        field: Field::Website,
        labels: &["Website"],
        ids: &[],
    },
    FieldSpec {
        field: Field::SocialProfile,
        labels: &["Facebook URL"],
        ids: &[],
    },
    FieldSpec {
        field: Field::AdsLibrary,
        labels: &["Ad Library Link"],
        ids: &[],
    },
    FieldSpec {
        field: Field::SeoLookup,
        labels: &["Stat Show Link", "Stats Show Link"],
        ids: &[],
    },
];

/// Fill `record` from the expanded dialer row.
///
/// Fails with [`Error::MissingStructure`] when no row is expanded or the
/// row has no details tab. The caller logs the failure.
pub fn extract(page: &Page, record: &mut ResultRecord) -> Result<()> {
    let root = page.document().select("html");

    let Some(panel) = dom::query_first(&root, EXPANDED_PANEL) else {
        return Err(Error::MissingStructure("expanded prospect row"));
    };
    debug!("found expanded prospect row");

    let Some(details) = dom::query_first(&panel, DETAILS_TAB) else {
        return Err(Error::MissingStructure("prospect details tab"));
    };

    let scope = Scope::new(root, details, PROFILE);
    super::fill_fields(&scope, FIELDS, record);
    Ok(())
}
