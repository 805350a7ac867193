//! Tabs
//!
//! Root `[data-lg-tabs]` containing `[role="tablist"]`, tabs
//! `[role="tab"][aria-controls]` and panels `[role="tabpanel"]`.
//! Left/Right wrap around, Home/End jump to the ends. With `auto`
//! activation focus movement selects; `manual` waits for Enter or Space.

use std::rc::Rc;

use lg_dom::{Document, Event, EventType, Key, NodeId};
use serde::Deserialize;

use crate::bindings::Bindings;
use crate::markers::{events, roles};
use crate::{state, Widget, WidgetError};

/// When keyboard focus movement changes the selected tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// Moving focus selects immediately
    #[default]
    Auto,
    /// Enter or Space confirms the focused tab
    Manual,
}

/// Tabs configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TabsOptions {
    pub activation: Activation,
}

/// Detail of `lg:tabs:change`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabsDetail {
    /// Selection before the change; `None` if nothing was selected
    pub from: Option<usize>,
    pub to: usize,
}

fn role(name: &str) -> String {
    format!(r#"[role="{name}"]"#)
}

#[derive(Debug, Default)]
struct Core {
    root: NodeId,
    activation: Activation,
    tablist: Option<NodeId>,
    tabs: Vec<NodeId>,
    /// Index-aligned with `tabs`; `None` when `aria-controls` does not resolve
    panels: Vec<Option<NodeId>>,
}

impl Core {
    fn position(&self, tab: NodeId) -> Option<usize> {
        self.tabs.iter().position(|&t| t == tab)
    }

    fn selected_index(&self, doc: &Document) -> Option<usize> {
        self.tabs.iter().position(|&t| state::is_selected(doc, t))
    }

    fn current_index(&self, doc: &Document) -> usize {
        self.tabs
            .iter()
            .position(|&t| state::is_reachable(doc, t))
            .unwrap_or(0)
    }

    /// Mark tab `index` (mod count) selected and every other tab not
    fn apply(&self, doc: &mut Document, index: usize) {
        for (i, (&tab, panel)) in self.tabs.iter().zip(&self.panels).enumerate() {
            let selected = i == index;
            state::set_selected(doc, tab, selected);
            state::set_reachable(doc, tab, selected);
            if let Some(panel) = *panel {
                state::set_visible(doc, panel, selected);
            }
        }
    }

    fn select(&self, doc: &mut Document, index: usize, focus: bool) {
        if self.tabs.is_empty() {
            return;
        }
        let index = index % self.tabs.len();
        // read before writing: the attributes are the only record of it
        let from = self.selected_index(doc);

        self.apply(doc, index);
        if focus {
            doc.focus(self.tabs[index]);
        }

        let detail = TabsDetail { from, to: index };
        doc.dispatch_event(self.root, Event::custom(events::TABS_CHANGE, detail));
    }

    fn on_key(&self, doc: &mut Document, event: &mut Event) {
        let Some(i) = self.position(event.current_target()) else {
            return;
        };
        let Some(key) = event.key().cloned() else {
            return;
        };
        let n = self.tabs.len();

        let target = match key {
            Key::ArrowLeft => Some((i + n - 1) % n),
            Key::ArrowRight => Some((i + 1) % n),
            Key::Home => Some(0),
            Key::End => Some(n - 1),
            _ => None,
        };

        if let Some(next) = target {
            event.prevent_default();
            doc.focus(self.tabs[next]);
            if self.activation == Activation::Auto {
                self.select(doc, next, false);
            }
        } else if self.activation == Activation::Manual && key.is_activation() {
            event.prevent_default();
            self.select(doc, i, true);
        }
    }

    fn on_click(&self, doc: &mut Document, event: &mut Event) {
        event.prevent_default();
        if let Some(i) = self.position(event.current_target()) {
            self.select(doc, i, true);
        }
    }
}

/// Tab set widget
#[derive(Debug)]
pub struct Tabs {
    root: NodeId,
    options: TabsOptions,
    core: Rc<Core>,
    bindings: Bindings,
}

impl Tabs {
    pub fn new(root: NodeId, options: TabsOptions) -> Self {
        Self {
            root,
            options,
            core: Rc::default(),
            bindings: Bindings::default(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn options(&self) -> &TabsOptions {
        &self.options
    }

    pub fn activation(&self) -> Activation {
        self.options.activation
    }

    pub fn tablist(&self) -> Option<NodeId> {
        self.core.tablist
    }

    pub fn tabs(&self) -> &[NodeId] {
        &self.core.tabs
    }

    /// Panels, index-aligned with `tabs`
    pub fn panels(&self) -> &[Option<NodeId>] {
        &self.core.panels
    }

    /// Tab with `aria-selected="true"`
    pub fn selected_index(&self, doc: &Document) -> Option<usize> {
        self.core.selected_index(doc)
    }

    /// Tab in the keyboard sequence (`tabindex="0"`), or 0
    pub fn current_index(&self, doc: &Document) -> usize {
        self.core.current_index(doc)
    }

    /// Select tab `index`, wrapping past the end, optionally focusing it
    pub fn select(&self, doc: &mut Document, index: usize, focus: bool) {
        self.core.select(doc, index, focus);
    }

    pub fn next(&self, doc: &mut Document) {
        let n = self.core.tabs.len();
        if n > 0 {
            self.select(doc, (self.current_index(doc) + 1) % n, true);
        }
    }

    pub fn prev(&self, doc: &mut Document) {
        let n = self.core.tabs.len();
        if n > 0 {
            self.select(doc, (self.current_index(doc) + n - 1) % n, true);
        }
    }
}

impl Widget for Tabs {
    fn element(&self) -> NodeId {
        self.root
    }

    fn init(&mut self, doc: &mut Document) -> Result<(), WidgetError> {
        if self.bindings.is_active() {
            return Ok(());
        }

        let tablist = doc.query_selector(self.root, &role(roles::TABLIST));
        let tabs = doc.query_selector_all(self.root, &role(roles::TAB));
        let panels: Vec<Option<NodeId>> = tabs
            .iter()
            .map(|&tab| {
                let panel = state::controlled(doc, tab);
                if panel.is_none() {
                    tracing::debug!(?tab, "tab has no resolvable panel");
                }
                panel
            })
            .collect();

        let core = Core {
            root: self.root,
            activation: self.options.activation,
            tablist,
            tabs,
            panels,
        };
        let current = core.selected_index(doc).unwrap_or(0);
        core.apply(doc, current);
        self.core = Rc::new(core);

        for &tab in &self.core.tabs {
            let core = Rc::clone(&self.core);
            self.bindings.listen(doc, tab, EventType::Click, move |doc, event| core.on_click(doc, event));
            let core = Rc::clone(&self.core);
            self.bindings.listen(doc, tab, EventType::KeyDown, move |doc, event| core.on_key(doc, event));
        }

        self.bindings.activate();
        tracing::debug!(root = ?self.root, tabs = self.core.tabs.len(), current, "tabs initialized");
        Ok(())
    }

    fn destroy(&mut self, doc: &mut Document) {
        let removed = self.bindings.release(doc);
        tracing::debug!(root = ?self.root, removed, "tabs destroyed");
    }

    fn is_active(&self) -> bool {
        self.bindings.is_active()
    }
}
