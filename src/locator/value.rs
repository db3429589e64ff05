//! Value and link extraction around a located field.
//!
//! A located node is usually the label, not the value. The value is read
//! from a container derived from it:
//!
//! - an identifier-bearing node is its own container
//! - a `dt`/`th` label pairs with its next element sibling
//! - a block wrapping only the label pairs with its next, differently
//!   styled sibling (`slds-form-element__label` beside `__control`)
//! - otherwise the nearest block-level ancestor (or the parent), narrowed
//!   to an identifier-bearing node when the block is or holds one

use dom_query::Selection;
use url::Url;

use super::Scope;
use crate::dom;
use crate::url_utils;

/// Tags treated as block-level when climbing from a label.
const BLOCK_TAGS: &[&str] = &[
    "div", "section", "article", "aside", "main", "form", "fieldset", "p", "li", "ul", "ol",
    "dl", "dd", "table", "tr", "td", "records-record-layout-item",
];

/// Label tags whose value lives in the following sibling.
const PAIRED_LABEL_TAGS: &[&str] = &["dt", "th"];

/// Editable controls, most specific first.
const EDITABLE: &str = "textarea, input:not([type='hidden'])";

/// Read-only rendered values.
const FORMATTED_TEXT: &str = "lightning-formatted-text, lightning-formatted-name, \
     .slds-form-element__static, .field-value, [data-output-element-id], dd";

/// Read-only rendered links and link-like text.
const FORMATTED_LINK: &str = "lightning-formatted-url, lightning-formatted-text, \
     .slds-form-element__static, .field-value, [data-output-element-id], dd, span";

/// Where the value container came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// The node carries a structural identifier.
    Identified,
    /// The sibling cell of a `dt`/`th` label.
    Sibling,
    /// A block ancestor that also holds the label.
    Block,
}

/// The subtree a field's value is read from.
#[derive(Clone)]
pub struct ValueContainer<'a> {
    pub node: Selection<'a>,
    pub kind: ContainerKind,
}

/// Derive the value container for a located field node.
#[must_use]
pub fn value_container<'a>(scope: &Scope<'a>, located: &Selection<'a>) -> ValueContainer<'a> {
    if scope.is_identified(located) {
        return ValueContainer {
            node: located.clone(),
            kind: ContainerKind::Identified,
        };
    }

    let tag = dom::tag_name(located).unwrap_or_default();
    if PAIRED_LABEL_TAGS.contains(&tag.as_str()) {
        if let Some(sibling) = dom::next_element_sibling(located) {
            return ValueContainer {
                node: sibling,
                kind: ContainerKind::Sibling,
            };
        }
    }

    let block = dom::ancestors(located)
        .into_iter()
        .find(|ancestor| dom::tag_name(ancestor).is_some_and(|t| BLOCK_TAGS.contains(&t.as_str())))
        .unwrap_or_else(|| dom::parent(located));

    if let Some(control) = wrapper_partner(&block, located) {
        return ValueContainer {
            node: control,
            kind: ContainerKind::Sibling,
        };
    }

    if scope.is_identified(&block) {
        return ValueContainer {
            node: block,
            kind: ContainerKind::Identified,
        };
    }

    if let Some(attr) = scope.profile.id_attribute {
        if let Some(nested) = dom::query_first(&block, &format!("[{attr}]")) {
            return ValueContainer {
                node: nested,
                kind: ContainerKind::Identified,
            };
        }
    }

    ValueContainer {
        node: block,
        kind: ContainerKind::Block,
    }
}

/// Plain text value: an editable control's value first, then a formatted-text descendant.
#[must_use]
pub fn extract_text(container: &ValueContainer) -> Option<String> {
    editable_value(&container.node)
        .or_else(|| first_nonempty_text(&container.node, FORMATTED_TEXT))
        .or_else(|| sibling_text(container))
}

/// Absolute link value: an `http` anchor first, then link-like text, then an input value.
#[must_use]
pub fn extract_link(container: &ValueContainer) -> Option<Url> {
    anchor_href(&container.node)
        .or_else(|| {
            dom::query_each(&container.node, FORMATTED_LINK)
                .iter()
                .map(dom::normalized_text)
                .find(|text| starts_with_http(text))
        })
        .or_else(|| editable_value(&container.node).filter(|v| starts_with_http(v)))
        .or_else(|| sibling_text(container).filter(|v| starts_with_http(v)))
        .and_then(|raw| url_utils::canonicalize(&raw))
}

/// The control beside a block that holds nothing but the label.
///
/// Rows of identical wrappers (one per field) never pair: the sibling must
/// differ in tag or class.
fn wrapper_partner<'a>(block: &Selection<'a>, label: &Selection) -> Option<Selection<'a>> {
    if dom::normalized_text(block) != dom::normalized_text(label)
        || dom::query_first(block, "a, textarea, input, select").is_some()
    {
        return None;
    }

    let sibling = dom::next_element_sibling(block)?;
    let same_shape = dom::tag_name(&sibling) == dom::tag_name(block)
        && dom::get_attribute(&sibling, "class") == dom::get_attribute(block, "class");
    (!same_shape).then_some(sibling)
}

fn starts_with_http(s: &str) -> bool {
    s.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("http"))
}

fn anchor_href(node: &Selection) -> Option<String> {
    let own = (dom::tag_name(node).as_deref() == Some("a"))
        .then(|| node.clone())
        .into_iter();

    own.chain(dom::query_each(node, "a[href]"))
        .filter_map(|a| dom::get_attribute(&a, "href"))
        .map(|href| href.trim().to_string())
        .find(|href| starts_with_http(href))
}

fn editable_value(node: &Selection) -> Option<String> {
    let own = dom::tag_name(node)
        .filter(|t| t == "textarea" || t == "input")
        .map(|_| node.clone());

    own.into_iter()
        .chain(dom::query_each(node, EDITABLE))
        .map(|control| match dom::tag_name(&control).as_deref() {
            Some("textarea") => dom::normalized_text(&control),
            _ => dom::normalize_whitespace(&dom::get_attribute(&control, "value").unwrap_or_default()),
        })
        .find(|value| !value.is_empty())
}

fn first_nonempty_text(node: &Selection, selector: &str) -> Option<String> {
    dom::query_each(node, selector)
        .iter()
        .map(dom::normalized_text)
        .find(|text| !text.is_empty())
}

fn sibling_text(container: &ValueContainer) -> Option<String> {
    if container.kind != ContainerKind::Sibling {
        return None;
    }
    Some(dom::normalized_text(&container.node)).filter(|text| !text.is_empty())
}
