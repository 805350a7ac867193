//! Listener bookkeeping for widget lifecycles

use lg_dom::{Document, Event, EventType, ListenerId, NodeId};

/// Listeners a widget attached, so `destroy` can remove exactly those
#[derive(Debug, Default)]
pub(crate) struct Bindings {
    ids: Vec<ListenerId>,
    active: bool,
}

impl Bindings {
    pub(crate) fn listen<F>(&mut self, doc: &mut Document, node: NodeId, event_type: EventType, callback: F)
    where
        F: Fn(&mut Document, &mut Event) + 'static,
    {
        self.ids.push(doc.add_event_listener(node, event_type, callback));
    }

    /// Mark initialization complete
    pub(crate) fn activate(&mut self) {
        self.active = true;
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    /// Remove every listener; returns how many were attached
    pub(crate) fn release(&mut self, doc: &mut Document) -> usize {
        let count = self.ids.len();
        for id in self.ids.drain(..) {
            doc.remove_event_listener(id);
        }
        self.active = false;
        count
    }
}
