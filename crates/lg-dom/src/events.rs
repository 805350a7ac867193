//! DOM Events
//!
//! Pointer, keyboard and custom events plus the listener registry that
//! `Document::dispatch_event` walks.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::{Document, NodeId};

/// Event type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    KeyDown,
    /// Application event such as `lg:nav:open`
    Custom(String),
}

impl EventType {
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// DOM event name
    pub fn name(&self) -> &str {
        match self {
            Self::Click => "click",
            Self::KeyDown => "keydown",
            Self::Custom(name) => name,
        }
    }
}

/// Key value, parsed from either `KeyboardEvent.key` or `.code`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Character(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Enter,
    Space,
    Escape,
    Tab,
    Unidentified(String),
}

impl Key {
    /// Parse from key or code string, accepting the short arrow and Esc names
    pub fn parse(s: &str) -> Self {
        match s {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            " " | "Space" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Unidentified(s.to_string()),
                }
            }
        }
    }

    /// Enter or Space, the keys that press a button
    pub fn is_activation(&self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// Event being dispatched
pub struct Event {
    event_type: EventType,
    target: NodeId,
    current_target: NodeId,
    key: Option<Key>,
    bubbles: bool,
    cancelable: bool,
    detail: Option<Rc<dyn Any>>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    fn new(event_type: EventType, bubbles: bool, cancelable: bool) -> Self {
        Self {
            event_type,
            target: NodeId::NONE,
            current_target: NodeId::NONE,
            key: None,
            bubbles,
            cancelable,
            detail: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Pointer activation
    pub fn click() -> Self {
        Self::new(EventType::Click, true, true)
    }

    /// Key press
    pub fn key_down(key: Key) -> Self {
        let mut event = Self::new(EventType::KeyDown, true, true);
        event.key = Some(key);
        event
    }

    /// Bubbling custom event carrying a typed detail payload
    pub fn custom<T: Any>(name: impl Into<String>, detail: T) -> Self {
        let mut event = Self::new(EventType::custom(name), true, false);
        event.detail = Some(Rc::new(detail));
        event
    }

    pub fn with_bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    pub fn event_type(&self) -> &EventType {
        &self.event_type
    }

    /// Node the event was dispatched at
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Node whose listener is running
    pub fn current_target(&self) -> NodeId {
        self.current_target
    }

    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    /// Detail payload, if it has type `T`
    pub fn detail<T: Any>(&self) -> Option<&T> {
        self.detail.as_deref()?.downcast_ref()
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop propagation after the current node
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub(crate) fn retarget(&mut self, target: NodeId) {
        self.target = target;
        self.current_target = target;
    }

    pub(crate) fn set_current_target(&mut self, node: NodeId) {
        self.current_target = node;
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("event_type", &self.event_type)
            .field("target", &self.target)
            .field("current_target", &self.current_target)
            .field("key", &self.key)
            .field("bubbles", &self.bubbles)
            .field("default_prevented", &self.default_prevented)
            .field("has_detail", &self.detail.is_some())
            .finish()
    }
}

/// Listener callback. Gets the document mutably so handlers can update
/// attributes and dispatch follow-up events.
pub type EventCallback = Rc<dyn Fn(&mut Document, &mut Event)>;

/// Handle returned by `add_event_listener`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Registration {
    id: ListenerId,
    node: NodeId,
    event_type: EventType,
    callback: EventCallback,
}

/// Listeners by target node, in registration order
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    entries: Vec<Registration>,
    next_id: u64,
}

impl ListenerRegistry {
    pub(crate) fn add(&mut self, node: NodeId, event_type: EventType, callback: EventCallback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Registration {
            id,
            node,
            event_type,
            callback,
        });
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| r.id != id);
        self.entries.len() < before
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|r| r.id == id)
    }

    /// Snapshot of the callbacks for one node, so handlers may add or
    /// remove listeners while the event is in flight
    pub(crate) fn matching(&self, node: NodeId, event_type: &EventType) -> Vec<(ListenerId, EventCallback)> {
        self.entries
            .iter()
            .filter(|r| r.node == node && &r.event_type == event_type)
            .map(|r| (r.id, Rc::clone(&r.callback)))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn count_on(&self, node: NodeId) -> usize {
        self.entries.iter().filter(|r| r.node == node).count()
    }
}
