//! Attribute-backed widget state
//!
//! The document is the source of truth: these helpers read and write the
//! ARIA and data attributes so the widget state machines never spell out
//! attribute names themselves.

use lg_dom::{Document, NodeId, TabIndex};

const EXPANDED: &str = "aria-expanded";
const SELECTED: &str = "aria-selected";
const CONTROLS: &str = "aria-controls";
const HIDDEN: &str = "hidden";
const NAV_STATE: &str = "data-state";
const TABINDEX: &str = "tabindex";

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

pub fn is_expanded(doc: &Document, node: NodeId) -> bool {
    doc.get_attribute(node, EXPANDED) == Some("true")
}

pub fn set_expanded(doc: &mut Document, node: NodeId, expanded: bool) {
    doc.set_attribute(node, EXPANDED, bool_attr(expanded));
}

pub fn is_selected(doc: &Document, node: NodeId) -> bool {
    doc.get_attribute(node, SELECTED) == Some("true")
}

pub fn set_selected(doc: &mut Document, node: NodeId, selected: bool) {
    doc.set_attribute(node, SELECTED, bool_attr(selected));
}

/// Visible means no `hidden` attribute
pub fn is_visible(doc: &Document, node: NodeId) -> bool {
    !doc.has_attribute(node, HIDDEN)
}

pub fn set_visible(doc: &mut Document, node: NodeId, visible: bool) {
    doc.toggle_attribute(node, HIDDEN, Some(!visible));
}

/// `data-state="open"` on a nav region
pub fn is_nav_open(doc: &Document, node: NodeId) -> bool {
    doc.get_attribute(node, NAV_STATE) == Some("open")
}

pub fn set_nav_open(doc: &mut Document, node: NodeId, open: bool) {
    doc.set_attribute(node, NAV_STATE, if open { "open" } else { "closed" });
}

/// `tabindex="0"` exactly
pub fn is_reachable(doc: &Document, node: NodeId) -> bool {
    doc.get_attribute(node, TABINDEX).and_then(TabIndex::parse) == Some(TabIndex::Sequential(0))
}

pub fn set_reachable(doc: &mut Document, node: NodeId, reachable: bool) {
    let index = if reachable { TabIndex::Sequential(0) } else { TabIndex::Programmatic };
    doc.set_attribute(node, TABINDEX, &index.as_attr());
}

/// Non-empty `aria-controls` id
pub fn controls(doc: &Document, node: NodeId) -> Option<&str> {
    doc.get_attribute(node, CONTROLS).filter(|id| !id.is_empty())
}

/// Element referenced by `aria-controls`
pub fn controlled(doc: &Document, node: NodeId) -> Option<NodeId> {
    controls(doc, node).and_then(|id| doc.get_element_by_id(id))
}
