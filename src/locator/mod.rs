//! Field Locator
//!
//! Finds the node that represents a named field on a page whose markup
//! varies between tools and between versions of the same tool. Lookup is
//! a short, ordered list of strategies run against a [`Scope`]:
//!
//! 1. direct lookup by structural identifier, anywhere in the document
//! 2. label text match inside each section of the scope
//!
//! The first strategy to produce a node wins. A miss is not an error; the
//! caller decides how to report it.

use dom_query::Selection;

use crate::dom;
use crate::result::Field;

pub mod value;

/// A named field with the identifiers and labels it has been published under.
///
/// Order matters in both lists: earlier entries are tried first, so a more
/// specific label should precede a more generic one.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    pub labels: &'static [&'static str],
    pub ids: &'static [&'static str],
}

/// How a layout marks up its fields.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    /// Attribute whose value is a field's structural identifier.
    pub id_attribute: Option<&'static str>,

    /// Selector for section containers. `None` treats the whole scope as one section.
    pub section_selector: Option<&'static str>,

    /// Selector for elements that may carry a field label.
    pub label_selector: &'static str,
}

/// The read capability the locator works against.
///
/// `document` is the whole page (identifier lookups are global), `root`
/// bounds the label search.
#[derive(Clone)]
pub struct Scope<'a> {
    pub document: Selection<'a>,
    pub root: Selection<'a>,
    pub profile: Profile,
}

impl<'a> Scope<'a> {
    #[must_use]
    pub fn new(document: Selection<'a>, root: Selection<'a>, profile: Profile) -> Self {
        Self { document, root, profile }
    }

    /// First element in the document carrying `id` as its structural identifier.
    #[must_use]
    pub fn by_identifier(&self, id: &str) -> Option<Selection<'a>> {
        let attr = self.profile.id_attribute?;
        if id.is_empty() {
            return None;
        }
        dom::query_first(&self.document, &attribute_selector(attr, id))
    }

    /// Section containers in document order, or the root itself when there are none.
    #[must_use]
    pub fn sections(&self) -> Vec<Selection<'a>> {
        let sections = self
            .profile
            .section_selector
            .map(|selector| dom::query_each(&self.root, selector))
            .unwrap_or_default();

        if sections.is_empty() {
            vec![self.root.clone()]
        } else {
            sections
        }
    }

    /// First label-bearing element under `section` whose normalized text equals `label`.
    #[must_use]
    pub fn by_label(&self, section: &Selection<'a>, label: &str) -> Option<Selection<'a>> {
        let wanted = normalize_label(label);
        if wanted.is_empty() {
            return None;
        }

        dom::query_each(section, self.profile.label_selector)
            .into_iter()
            .find(|candidate| normalize_label(&dom::text_content(candidate)) == wanted)
    }

    /// Whether `sel` carries this layout's structural identifier attribute.
    #[must_use]
    pub fn is_identified(&self, sel: &Selection) -> bool {
        self.profile
            .id_attribute
            .is_some_and(|attr| dom::has_attribute(sel, attr))
    }
}

/// A locator strategy: returns the field node, or `None` to defer to the next strategy.
pub type Strategy = for<'a> fn(&Scope<'a>, &FieldSpec) -> Option<Selection<'a>>;

/// Strategies in priority order.
pub const STRATEGIES: &[Strategy] = &[locate_by_identifier, locate_by_label];

/// Locate the node for `spec` within `scope`.
///
/// Returns `None` when no identifier and no label resolves, including when
/// both lists are empty.
#[must_use]
pub fn locate<'a>(scope: &Scope<'a>, spec: &FieldSpec) -> Option<Selection<'a>> {
    STRATEGIES.iter().find_map(|strategy| strategy(scope, spec))
}

/// Direct lookup by each structural identifier, in order.
#[must_use]
pub fn locate_by_identifier<'a>(scope: &Scope<'a>, spec: &FieldSpec) -> Option<Selection<'a>> {
    spec.ids.iter().find_map(|id| scope.by_identifier(id))
}

/// Label text match: sections in document order, labels in the order given.
#[must_use]
pub fn locate_by_label<'a>(scope: &Scope<'a>, spec: &FieldSpec) -> Option<Selection<'a>> {
    if spec.labels.is_empty() {
        return None;
    }

    scope
        .sections()
        .iter()
        .find_map(|section| spec.labels.iter().find_map(|label| scope.by_label(section, label)))
}

/// Lowercase, collapse whitespace, drop a trailing colon.
#[must_use]
pub fn normalize_label(text: &str) -> String {
    let text = dom::normalize_whitespace(text).to_lowercase();
    if let Some(stripped) = text.strip_suffix(':') {
        return stripped.trim_end().to_string();
    }
    text
}

/// CSS attribute selector with the value quoted and escaped.
fn attribute_selector(attr: &str, value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[{attr}=\"{escaped}\"]")
}
