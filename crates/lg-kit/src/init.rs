//! Initializer / Registry
//!
//! Scans a document (or subtree) for widget markers, builds and initializes
//! one widget per marked element, and keeps them for later teardown.

use std::fmt;

use lg_dom::{Document, NodeId};
use serde::de::DeserializeOwned;

use crate::{markers, parse_options, Accordion, Tabs, Toggle, Widget};

/// Widget kinds the initializer knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Toggle,
    Accordion,
    Tabs,
}

impl WidgetKind {
    /// Root marker attribute
    pub fn marker(self) -> &'static str {
        match self {
            Self::Toggle => markers::HAMBURGER,
            Self::Accordion => markers::ACCORDION,
            Self::Tabs => markers::TABS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toggle => "hamburger",
            Self::Accordion => "accordion",
            Self::Tabs => "tabs",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-fatal problem found while scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: WidgetKind,
    pub element: NodeId,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:?}: {}", self.kind, self.element, self.message)
    }
}

/// Widgets built by a scan, grouped by kind in document order
#[derive(Debug, Default)]
pub struct Registry {
    pub toggles: Vec<Toggle>,
    pub accordions: Vec<Accordion>,
    pub tabs: Vec<Tabs>,
    diagnostics: Vec<Diagnostic>,
}

/// Scan `root` (the whole document when `None`) and initialize every widget
pub fn init_all(doc: &mut Document, root: Option<NodeId>) -> Registry {
    let mut registry = Registry::default();
    registry.scan(doc, root);
    registry
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan all kinds and append what is found
    pub fn scan(&mut self, doc: &mut Document, root: Option<NodeId>) {
        let root = root.unwrap_or(doc.root());
        let found = self.scan_toggles(doc, Some(root))
            + self.scan_accordions(doc, Some(root))
            + self.scan_tabs(doc, Some(root));
        tracing::info!(?root, found, warnings = self.diagnostics.len(), "widget scan complete");
    }

    pub fn scan_toggles(&mut self, doc: &mut Document, root: Option<NodeId>) -> usize {
        let built = scan_kind(doc, root, WidgetKind::Toggle, &mut self.diagnostics, Toggle::new);
        let count = built.len();
        self.toggles.extend(built);
        count
    }

    pub fn scan_accordions(&mut self, doc: &mut Document, root: Option<NodeId>) -> usize {
        let built = scan_kind(doc, root, WidgetKind::Accordion, &mut self.diagnostics, Accordion::new);
        let count = built.len();
        self.accordions.extend(built);
        count
    }

    pub fn scan_tabs(&mut self, doc: &mut Document, root: Option<NodeId>) -> usize {
        let built = scan_kind(doc, root, WidgetKind::Tabs, &mut self.diagnostics, Tabs::new);
        let count = built.len();
        self.tabs.extend(built);
        count
    }

    /// Merge a later scan into this registry
    pub fn extend(&mut self, other: Registry) {
        self.toggles.extend(other.toggles);
        self.accordions.extend(other.accordions);
        self.tabs.extend(other.tabs);
        self.diagnostics.extend(other.diagnostics);
    }

    /// Destroy every widget and empty the registry
    pub fn destroy_all(&mut self, doc: &mut Document) {
        let total = self.len();
        for toggle in &mut self.toggles {
            toggle.destroy(doc);
        }
        for accordion in &mut self.accordions {
            accordion.destroy(doc);
        }
        for tabs in &mut self.tabs {
            tabs.destroy(doc);
        }
        self.toggles.clear();
        self.accordions.clear();
        self.tabs.clear();
        self.diagnostics.clear();
        tracing::debug!(total, "registry cleared");
    }

    /// Options and wiring problems seen so far
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.toggles.len() + self.accordions.len() + self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn scan_kind<W, O>(
    doc: &mut Document,
    root: Option<NodeId>,
    kind: WidgetKind,
    diagnostics: &mut Vec<Diagnostic>,
    build: fn(NodeId, O) -> W,
) -> Vec<W>
where
    W: Widget,
    O: DeserializeOwned + Default,
{
    let root = root.unwrap_or(doc.root());
    let elements = doc.query_selector_all(root, &format!("[{}]", kind.marker()));
    let mut widgets = Vec::with_capacity(elements.len());

    for element in elements {
        let options = parse_options::<O>(doc, element).unwrap_or_else(|err| {
            tracing::warn!(%kind, ?element, %err, "using default options");
            diagnostics.push(Diagnostic {
                kind,
                element,
                message: err.to_string(),
            });
            O::default()
        });

        let mut widget = build(element, options);
        // init already logged the failure
        if let Err(err) = widget.init(doc) {
            diagnostics.push(Diagnostic {
                kind,
                element,
                message: err.to_string(),
            });
        }
        widgets.push(widget);
    }
    widgets
}
