//! Context Extractors
//!
//! One extractor per layout. Each fills the run's [`ResultRecord`] from the
//! page using the field locator with its own label and identifier tables.

use tracing::{debug, warn};

use crate::error::Result;
use crate::layout::Layout;
use crate::locator::{self, value, FieldSpec, Scope};
use crate::page::Page;
use crate::result::{Field, ResultRecord};

pub mod dialer;
pub mod generic;
pub mod record_page;

/// Run the extractor for `layout` against `page`.
///
/// Returns `Err` only for conditions that make the layout unusable
/// (missing required structure); missing fields are logged and skipped.
pub fn extract(layout: Layout, page: &Page, record: &mut ResultRecord) -> Result<()> {
    match layout {
        Layout::RecordPage => record_page::extract(page, record),
        Layout::DialerPanel => dialer::extract(page, record),
        Layout::Generic => {
            generic::extract(page, record);
            Ok(())
        }
    }
}

/// Locate, extract and store each field in `specs`, in order.
///
/// Company names are read as text, every other field as a link.
pub(crate) fn fill_fields(scope: &Scope, specs: &[FieldSpec], record: &mut ResultRecord) {
    for spec in specs {
        let Some(located) = locator::locate(scope, spec) else {
            warn!(field = %spec.field, "field not found on page");
            continue;
        };

        let container = value::value_container(scope, &located);
        let stored = if spec.field == Field::CompanyName {
            value::extract_text(&container).is_some_and(|name| record.fill_company_name(&name))
        } else {
            value::extract_link(&container).is_some_and(|url| record.fill_url(spec.field, url.as_str()))
        };

        if stored {
            debug!(field = %spec.field, kind = ?container.kind, "field extracted");
        } else {
            warn!(field = %spec.field, "field located but holds no usable value");
        }
    }
}
