//! Hamburger Toggle
//!
//! Keeps a trigger's `aria-expanded` and its nav region's `data-state`
//! in step. Click, Enter or Space toggles; clicking outside or pressing
//! Escape closes.

use lg_dom::{Document, Event, EventType, Key, NodeId};
use serde::Deserialize;

use crate::bindings::Bindings;
use crate::markers::{self, events};
use crate::{state, Widget, WidgetError};

/// Toggle configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleOptions {
    /// Explicit target id; falls back to the trigger's `aria-controls`
    pub target: Option<String>,
    /// Close on Escape anywhere in the document
    pub close_on_esc: bool,
    /// Close on clicks outside trigger and region
    pub close_on_outside: bool,
}

impl Default for ToggleOptions {
    fn default() -> Self {
        Self {
            target: None,
            close_on_esc: true,
            close_on_outside: true,
        }
    }
}

/// Detail of `lg:nav:open` / `lg:nav:close`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavDetail {
    pub source: NodeId,
    pub target: Option<NodeId>,
}

/// Trigger and region pair; `Copy` so listeners can capture it by value
#[derive(Debug, Clone, Copy)]
struct Disclosure {
    button: NodeId,
    nav: Option<NodeId>,
}

impl Disclosure {
    fn is_open(self, doc: &Document) -> bool {
        state::is_expanded(doc, self.button)
    }

    // both attributes change together so they can never disagree
    fn set_expanded(self, doc: &mut Document, expanded: bool) {
        state::set_expanded(doc, self.button, expanded);
        if let Some(nav) = self.nav {
            state::set_nav_open(doc, nav, expanded);
        }
    }

    fn open(self, doc: &mut Document) {
        self.set_expanded(doc, true);
        self.emit(doc, events::NAV_OPEN);
    }

    fn close(self, doc: &mut Document) {
        self.set_expanded(doc, false);
        self.emit(doc, events::NAV_CLOSE);
    }

    fn toggle(self, doc: &mut Document) {
        if self.is_open(doc) {
            self.close(doc);
        } else {
            self.open(doc);
        }
    }

    fn emit(self, doc: &mut Document, name: &str) {
        let detail = NavDetail {
            source: self.button,
            target: self.nav,
        };
        doc.dispatch_event(self.button, Event::custom(name, detail));
    }

    fn owns(self, doc: &Document, node: NodeId) -> bool {
        let tree = doc.tree();
        tree.contains(self.button, node) || self.nav.is_some_and(|nav| tree.contains(nav, node))
    }
}

/// Hamburger-style disclosure widget
#[derive(Debug)]
pub struct Toggle {
    parts: Disclosure,
    options: ToggleOptions,
    bindings: Bindings,
}

impl Toggle {
    pub fn new(button: NodeId, options: ToggleOptions) -> Self {
        Self {
            parts: Disclosure { button, nav: None },
            options,
            bindings: Bindings::default(),
        }
    }

    pub fn button(&self) -> NodeId {
        self.parts.button
    }

    /// Resolved nav region; `None` until `init` succeeds
    pub fn nav(&self) -> Option<NodeId> {
        self.parts.nav
    }

    pub fn options(&self) -> &ToggleOptions {
        &self.options
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        self.parts.is_open(doc)
    }

    pub fn open(&self, doc: &mut Document) {
        self.parts.open(doc);
    }

    pub fn close(&self, doc: &mut Document) {
        self.parts.close(doc);
    }

    pub fn toggle(&self, doc: &mut Document) {
        self.parts.toggle(doc);
    }

    fn resolve_target(&self, doc: &Document) -> Result<NodeId, WidgetError> {
        let id = match &self.options.target {
            Some(target) => target.as_str(),
            None => state::controls(doc, self.parts.button).ok_or(WidgetError::MissingTarget)?,
        };
        let nav = doc
            .get_element_by_id(id)
            .ok_or_else(|| WidgetError::TargetNotFound(id.to_string()))?;
        if !doc.has_attribute(nav, markers::NAV) {
            return Err(WidgetError::NotANavRegion(id.to_string()));
        }
        Ok(nav)
    }
}

impl Widget for Toggle {
    fn element(&self) -> NodeId {
        self.parts.button
    }

    fn init(&mut self, doc: &mut Document) -> Result<(), WidgetError> {
        if self.bindings.is_active() {
            tracing::debug!(button = ?self.parts.button, "hamburger already initialized");
            return Ok(());
        }

        self.parts.nav = None;
        let nav = self.resolve_target(doc).inspect_err(|err| {
            tracing::warn!(button = ?self.parts.button, %err, "hamburger left inert");
        })?;
        self.parts.nav = Some(nav);
        self.parts.set_expanded(doc, false);

        let parts = self.parts;
        let button = parts.button;
        self.bindings.listen(doc, button, EventType::Click, move |doc, event| {
            event.prevent_default();
            parts.toggle(doc);
        });
        self.bindings.listen(doc, button, EventType::KeyDown, move |doc, event| {
            if event.key().is_some_and(Key::is_activation) {
                event.prevent_default();
                parts.toggle(doc);
            }
        });

        let root = doc.root();
        if self.options.close_on_outside {
            self.bindings.listen(doc, root, EventType::Click, move |doc, event| {
                if parts.is_open(doc) && !parts.owns(doc, event.target()) {
                    parts.close(doc);
                }
            });
        }
        if self.options.close_on_esc {
            self.bindings.listen(doc, root, EventType::KeyDown, move |doc, event| {
                if parts.is_open(doc) && event.key() == Some(&Key::Escape) {
                    parts.close(doc);
                }
            });
        }

        self.bindings.activate();
        tracing::debug!(?button, ?nav, "hamburger initialized");
        Ok(())
    }

    fn destroy(&mut self, doc: &mut Document) {
        let removed = self.bindings.release(doc);
        tracing::debug!(button = ?self.parts.button, removed, "hamburger destroyed");
    }

    fn is_active(&self) -> bool {
        self.bindings.is_active()
    }
}
