//! LG DOM - Headless Document Object Model
//!
//! Arena-backed document with attributes, simple selectors, focus and
//! bubbling event dispatch. Widgets bind to it exactly as they would to a
//! live page, which keeps them testable without a rendering surface.

mod attributes;
mod document;
mod events;
mod focus;
mod node;
mod selector;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use document::Document;
pub use events::{Event, EventCallback, EventType, Key, ListenerId};
pub use focus::TabIndex;
pub use node::{ElementData, Node, NodeData};
pub use selector::{AttrFilter, Selector};
pub use tree::{Ancestors, Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unset ids are `NONE`, never the document root
impl Default for NodeId {
    fn default() -> Self {
        Self::NONE
    }
}

/// Tree mutation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node {0:?} does not exist")]
    InvalidNode(NodeId),

    #[error("cannot insert {child:?} under {parent:?}: would create a cycle")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("node {0:?} cannot have children")]
    NotAParent(NodeId),
}
