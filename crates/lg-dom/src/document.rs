//! Document - High-level document API
//!
//! Attribute access, lookups, focus and event dispatch over a `DomTree`.

use crate::events::ListenerRegistry;
use crate::{DomTree, Event, EventType, Key, ListenerId, Node, NodeId, Selector};
use std::rc::Rc;

/// Headless HTML document
pub struct Document {
    tree: DomTree,
    url: String,
    focused: Option<NodeId>,
    listeners: ListenerRegistry,
}

impl Document {
    /// Create an empty document (document node only)
    pub fn new(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            focused: None,
            listeners: ListenerRegistry::default(),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Document node, where document-level listeners attach
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Get <html> element
    pub fn document_element(&self) -> Option<NodeId> {
        self.tree
            .children(self.root())
            .find(|(_, n)| n.as_element().is_some_and(|e| e.tag == "html"))
            .map(|(id, _)| id)
    }

    /// Get <body> element
    pub fn body(&self) -> Option<NodeId> {
        let html = self.document_element()?;
        self.tree
            .children(html)
            .find(|(_, n)| n.as_element().is_some_and(|e| e.tag == "body"))
            .map(|(id, _)| id)
    }

    // === Attributes ===

    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.tree.element(node)?.get_attr(name)
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.tree.element(node).is_some_and(|e| e.has_attr(name))
    }

    /// Set an attribute; ignored for non-elements
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        match self.tree.element_mut(node) {
            Some(elem) => elem.set_attr(name, value),
            None => tracing::debug!(?node, name, "set_attribute on non-element ignored"),
        }
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> bool {
        self.tree.element_mut(node).is_some_and(|e| e.remove_attr(name))
    }

    /// Add or remove a boolean attribute; `force` pins the outcome.
    /// Returns whether the attribute is now present.
    pub fn toggle_attribute(&mut self, node: NodeId, name: &str, force: Option<bool>) -> bool {
        self.tree
            .element_mut(node)
            .is_some_and(|e| e.toggle_attr(name, force))
    }

    // === Queries ===

    /// First element in document order whose id is `id`
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.tree
            .descendants(self.root())
            .find(|&n| self.tree.element(n).and_then(|e| e.id()) == Some(id))
    }

    /// Element descendants of `root` matching `selector`, in document order
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(sel) = Self::parse_selector(selector) else {
            return Vec::new();
        };
        self.tree
            .descendants(root)
            .filter(|&n| self.node_matches(n, &sel))
            .collect()
    }

    pub fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        let sel = Self::parse_selector(selector)?;
        self.tree.descendants(root).find(|&n| self.node_matches(n, &sel))
    }

    pub fn matches(&self, node: NodeId, selector: &str) -> bool {
        Self::parse_selector(selector).is_some_and(|sel| self.node_matches(node, &sel))
    }

    fn node_matches(&self, node: NodeId, sel: &Selector) -> bool {
        self.tree.get(node).and_then(Node::as_element).is_some_and(|e| sel.matches(e))
    }

    fn parse_selector(selector: &str) -> Option<Selector> {
        let sel = Selector::parse(selector);
        if sel.is_none() {
            tracing::debug!(selector, "unsupported selector matches nothing");
        }
        sel
    }

    // === Focus ===

    /// Move focus to an element. Returns false for non-elements.
    pub fn focus(&mut self, node: NodeId) -> bool {
        if self.tree.element(node).is_none() {
            return false;
        }
        self.focused = Some(node);
        true
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Currently focused element
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    // === Events ===

    /// Register a listener on `node`; use `root()` for document-level ones
    pub fn add_event_listener<F>(&mut self, node: NodeId, event_type: EventType, callback: F) -> ListenerId
    where
        F: Fn(&mut Document, &mut Event) + 'static,
    {
        self.listeners.add(node, event_type, Rc::new(callback))
    }

    /// Remove a listener. Removing twice is harmless and returns false.
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Total registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Listeners registered on one node
    pub fn listener_count_on(&self, node: NodeId) -> usize {
        self.listeners.count_on(node)
    }

    /// Dispatch `event` at `target`, bubbling up to the document node when
    /// the event bubbles. Returns the event for inspection.
    pub fn dispatch_event(&mut self, target: NodeId, mut event: Event) -> Event {
        event.retarget(target);
        let path: Vec<NodeId> = if event.bubbles() {
            self.tree.ancestors(target).collect()
        } else {
            vec![target]
        };
        tracing::trace!(event = event.event_type().name(), ?target, depth = path.len(), "dispatch");

        for node in path {
            event.set_current_target(node);
            for (id, callback) in self.listeners.matching(node, event.event_type()) {
                // an earlier handler may have unregistered this one
                if !self.listeners.contains(id) {
                    continue;
                }
                callback(self, &mut event);
            }
            if event.is_propagation_stopped() {
                break;
            }
        }
        event
    }

    /// Simulate a pointer click on `node`
    pub fn click(&mut self, node: NodeId) -> Event {
        self.dispatch_event(node, Event::click())
    }

    /// Simulate a key press with `node` as the event target
    pub fn key_down(&mut self, node: NodeId, key: Key) -> Event {
        self.dispatch_event(node, Event::key_down(key))
    }

    /// Key press on whatever has focus, or the document when nothing does
    pub fn press_key(&mut self, key: Key) -> Event {
        let target = self.focused.unwrap_or(self.root());
        self.key_down(target, key)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
