//! CRM record page extractor.
//!
//! Record pages render each field as a layout item tagged with
//! `data-target-selection-name`. The API names behind those tags have been
//! renamed several times, so each field lists every name seen so far,
//! current first, with the visible labels as a fallback.

use crate::error::Result;
use crate::locator::{FieldSpec, Profile, Scope};
use crate::page::Page;
use crate::result::{Field, ResultRecord};

pub const PROFILE: Profile = Profile {
    id_attribute: Some("data-target-selection-name"),
    section_selector: Some("records-record-layout-section, .slds-section, section"),
    label_selector: "label, span, p, dt, th, legend",
};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: Field::CompanyName,
        labels: &["Company / Account", "Company", "Account Name"],
        ids: &[
            "sfdc:RecordField.Lead.Company",
            "sfdc:RecordField.Account.Name",
            "sfdc:RecordField.Contact.AccountId",
        ],
    },
    FieldSpec {
        field: Field::Website,
        labels: &["Company Website", "Website"],
        ids: &[
            "sfdc:RecordField.Lead.Website",
            "sfdc:RecordField.Account.Website",
        ],
    },
    FieldSpec {
        field: Field::SocialProfile,
        labels: &["Facebook URL", "Facebook Page", "Facebook"],
        ids: &[
            "sfdc:RecordField.Lead.Facebook_URL__c",
            "sfdc:RecordField.Lead.Facebook_Page__c",
            "sfdc:RecordField.Lead.Facebook__c",
            "sfdc:RecordField.Account.Facebook_URL__c",
        ],
    },
    FieldSpec {
        field: Field::AdsLibrary,
        labels: &["Ad Library Link", "Ads Library Link", "Ad Library"],
        ids: &[
            "sfdc:RecordField.Lead.Ad_Library_Link__c",
            "sfdc:RecordField.Lead.Ads_Library_Link__c",
            "sfdc:RecordField.Account.Ad_Library_Link__c",
        ],
    },
    FieldSpec {
        field: Field::SeoLookup,
        labels: &["Stat Show Link", "Statshow Link", "SEO Link"],
        ids: &[
            "sfdc:RecordField.Lead.Stat_Show_Link__c",
            "sfdc:RecordField.Lead.StatShow_Link__c",
            "sfdc:RecordField.Account.Stat_Show_Link__c",
        ],
    },
];

/// Fill `record` from a CRM record page. Never fatal.
pub fn extract(page: &Page, record: &mut ResultRecord) -> Result<()> {
    let root = page.document().select("html");
    let scope = Scope::new(root.clone(), root, PROFILE);
    super::fill_fields(&scope, FIELDS, record);
    Ok(())
}
