//! Accordion
//!
//! Root `[data-lg-accordion]`, triggers `[data-lg-acc-trigger][aria-controls]`,
//! panels found by id. Single-open unless `allowMultiple` is set.

use std::rc::Rc;

use lg_dom::{Document, Event, EventType, NodeId};
use serde::Deserialize;

use crate::bindings::Bindings;
use crate::markers::{self, events};
use crate::{state, Widget, WidgetError};

/// Accordion configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccordionOptions {
    /// Let several panels stay open at once
    pub allow_multiple: bool,
}

/// Detail of `lg:accordion:toggle`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionDetail {
    /// Panel id
    pub id: String,
    pub expanded: bool,
}

#[derive(Debug, Clone, Copy)]
struct Pair {
    trigger: NodeId,
    panel: NodeId,
}

/// State shared with the listeners
#[derive(Debug, Default)]
struct Core {
    allow_multiple: bool,
    pairs: Vec<Pair>,
}

impl Core {
    fn toggle_by_trigger(&self, doc: &mut Document, trigger: NodeId) {
        let Some(id) = state::controls(doc, trigger).map(str::to_owned) else {
            return;
        };
        let will_open = !state::is_expanded(doc, trigger);

        if will_open && !self.allow_multiple {
            for pair in self.pairs.iter().filter(|p| p.trigger != trigger) {
                set_pair(doc, pair.trigger, Some(pair.panel), false);
            }
        }
        let panel = doc.get_element_by_id(&id);
        set_pair(doc, trigger, panel, will_open);

        let detail = AccordionDetail { id, expanded: will_open };
        doc.dispatch_event(trigger, Event::custom(events::ACCORDION_TOGGLE, detail));
    }

    fn find(&self, doc: &Document, id: &str) -> Option<Pair> {
        self.pairs
            .iter()
            .copied()
            .find(|p| state::controls(doc, p.trigger) == Some(id))
    }
}

fn set_pair(doc: &mut Document, trigger: NodeId, panel: Option<NodeId>, expanded: bool) {
    state::set_expanded(doc, trigger, expanded);
    if let Some(panel) = panel {
        state::set_visible(doc, panel, expanded);
    }
}

/// Accordion widget
#[derive(Debug)]
pub struct Accordion {
    root: NodeId,
    options: AccordionOptions,
    core: Rc<Core>,
    bindings: Bindings,
}

impl Accordion {
    pub fn new(root: NodeId, options: AccordionOptions) -> Self {
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

    pub fn options(&self) -> &AccordionOptions {
        &self.options
    }

    /// Managed triggers, in document order
    pub fn triggers(&self) -> Vec<NodeId> {
        self.core.pairs.iter().map(|p| p.trigger).collect()
    }

    /// Panels, index-aligned with `triggers`
    pub fn panels(&self) -> Vec<NodeId> {
        self.core.pairs.iter().map(|p| p.panel).collect()
    }

    /// Flip one trigger, closing the others first when single-open
    pub fn toggle_by_trigger(&self, doc: &mut Document, trigger: NodeId) {
        self.core.toggle_by_trigger(doc, trigger);
    }

    /// Open a panel by id. Does not close siblings.
    pub fn open_by_id(&self, doc: &mut Document, id: &str) {
        if let Some(pair) = self.core.find(doc, id) {
            set_pair(doc, pair.trigger, Some(pair.panel), true);
        }
    }

    pub fn close_by_id(&self, doc: &mut Document, id: &str) {
        if let Some(pair) = self.core.find(doc, id) {
            set_pair(doc, pair.trigger, Some(pair.panel), false);
        }
    }

    pub fn is_open_by_id(&self, doc: &Document, id: &str) -> bool {
        self.core
            .find(doc, id)
            .is_some_and(|pair| state::is_expanded(doc, pair.trigger))
    }
}

impl Widget for Accordion {
    fn element(&self) -> NodeId {
        self.root
    }

    fn init(&mut self, doc: &mut Document) -> Result<(), WidgetError> {
        if self.bindings.is_active() {
            return Ok(());
        }

        let selector = format!("[{}][aria-controls]", markers::ACC_TRIGGER);
        let pairs: Vec<Pair> = doc
            .query_selector_all(self.root, &selector)
            .into_iter()
            .filter_map(|trigger| {
                let panel = state::controlled(doc, trigger);
                if panel.is_none() {
                    tracing::debug!(?trigger, "accordion trigger without a resolvable panel dropped");
                }
                Some(Pair { trigger, panel: panel? })
            })
            .collect();

        for pair in &pairs {
            let expanded = state::is_expanded(doc, pair.trigger);
            set_pair(doc, pair.trigger, Some(pair.panel), expanded);
        }

        self.core = Rc::new(Core {
            allow_multiple: self.options.allow_multiple,
            pairs,
        });

        for pair in &self.core.pairs {
            let core = Rc::clone(&self.core);
            self.bindings.listen(doc, pair.trigger, EventType::Click, move |doc, event| {
                event.prevent_default();
                core.toggle_by_trigger(doc, event.current_target());
            });
            let core = Rc::clone(&self.core);
            self.bindings.listen(doc, pair.trigger, EventType::KeyDown, move |doc, event| {
                if event.key().is_some_and(|k| k.is_activation()) {
                    event.prevent_default();
                    core.toggle_by_trigger(doc, event.current_target());
                }
            });
        }

        self.bindings.activate();
        tracing::debug!(root = ?self.root, panels = self.core.pairs.len(), "accordion initialized");
        Ok(())
    }

    fn destroy(&mut self, doc: &mut Document) {
        let removed = self.bindings.release(doc);
        tracing::debug!(root = ?self.root, removed, "accordion destroyed");
    }

    fn is_active(&self) -> bool {
        self.bindings.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// root > (button a, panel a), (button b, panel b), orphan button
    fn fixture() -> (Document, NodeId, Vec<NodeId>, Vec<NodeId>) {
        let mut doc = Document::default();
        let root_node = doc.root();
        let root = doc.tree_mut().create_element("div");
        doc.tree_mut().append_child(root_node, root).unwrap();
        doc.set_attribute(root, markers::ACCORDION, "");

        let mut triggers = Vec::new();
        let mut panels = Vec::new();
        for name in ["a", "b"] {
            let trigger = doc.tree_mut().create_element("button");
            let panel = doc.tree_mut().create_element("div");
            doc.tree_mut().append_child(root, trigger).unwrap();
            doc.tree_mut().append_child(root, panel).unwrap();
            doc.set_attribute(trigger, markers::ACC_TRIGGER, "");
            doc.set_attribute(trigger, "aria-controls", &format!("panel-{name}"));
            doc.set_attribute(panel, "id", &format!("panel-{name}"));
            triggers.push(trigger);
            panels.push(panel);
        }
        let orphan = doc.tree_mut().create_element("button");
        doc.tree_mut().append_child(root, orphan).unwrap();
        doc.set_attribute(orphan, markers::ACC_TRIGGER, "");
        doc.set_attribute(orphan, "aria-controls", "nowhere");

        doc.set_attribute(triggers[1], "aria-expanded", "true");
        (doc, root, triggers, panels)
    }

    #[test]
    fn test_init_drops_unresolved_and_normalizes() {
        let (mut doc, root, triggers, panels) = fixture();
        let mut acc = Accordion::new(root, AccordionOptions::default());
        acc.init(&mut doc).unwrap();

        assert_eq!(acc.triggers(), triggers);
        assert_eq!(acc.panels(), panels);
        assert_eq!(doc.get_attribute(triggers[0], "aria-expanded"), Some("false"));
        assert!(!state::is_visible(&doc, panels[0]));
        assert!(state::is_visible(&doc, panels[1]));
        assert_eq!(doc.listener_count(), 4);
    }

    #[test]
    fn test_single_open_closes_others() {
        let (mut doc, root, triggers, panels) = fixture();
        let mut acc = Accordion::new(root, AccordionOptions::default());
        acc.init(&mut doc).unwrap();

        acc.toggle_by_trigger(&mut doc, triggers[0]);
        assert!(acc.is_open_by_id(&doc, "panel-a"));
        assert!(!acc.is_open_by_id(&doc, "panel-b"));
        assert!(!state::is_visible(&doc, panels[1]));
    }

    #[test]
    fn test_open_by_id_bypasses_exclusivity() {
        let (mut doc, root, _, panels) = fixture();
        let mut acc = Accordion::new(root, AccordionOptions::default());
        acc.init(&mut doc).unwrap();

        acc.open_by_id(&mut doc, "panel-a");
        assert!(acc.is_open_by_id(&doc, "panel-a"));
        assert!(acc.is_open_by_id(&doc, "panel-b"));

        acc.close_by_id(&mut doc, "panel-b");
        assert!(!state::is_visible(&doc, panels[1]));

        acc.open_by_id(&mut doc, "nowhere");
        acc.close_by_id(&mut doc, "unknown");
        assert!(!acc.is_open_by_id(&doc, "nowhere"));
    }

    #[test]
    fn test_trigger_without_controls_is_noop() {
        let (mut doc, root, triggers, _) = fixture();
        let mut acc = Accordion::new(root, AccordionOptions::default());
        acc.init(&mut doc).unwrap();

        let stray = doc.tree_mut().create_element("button");
        acc.toggle_by_trigger(&mut doc, stray);
        assert_eq!(doc.get_attribute(stray, "aria-expanded"), None);
        assert!(state::is_expanded(&doc, triggers[1]));
    }
}
