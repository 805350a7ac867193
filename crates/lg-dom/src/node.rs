//! DOM Node
//!
//! Nodes link to relatives by `NodeId` rather than pointers, so the whole
//! tree lives in one arena and handles stay `Copy`.

use crate::{NamedNodeMap, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(content.into()))
    }

    /// Create a comment node
    pub fn comment(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Comment(content.into()))
    }

    /// Create a doctype node
    pub fn doctype(name: impl Into<String>) -> Self {
        Self::with_data(NodeData::Doctype { name: name.into() })
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Elements and the document may hold children
    #[inline]
    pub fn can_have_children(&self) -> bool {
        matches!(self.data, NodeData::Element(_) | NodeData::Document)
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype { name: String },
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag: String,
    /// Attributes in source order
    pub attrs: NamedNodeMap,
    /// Cached id attribute (very common lookup)
    id: Option<String>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: NamedNodeMap::new(),
            id: None,
        }
    }

    /// Cached `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attribute(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attribute(name)
    }

    /// Set an attribute
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if name == "id" {
            self.id = Some(value.to_string());
        }
        self.attrs.set_attribute(name, value);
    }

    /// Remove an attribute, returning whether it was present
    pub fn remove_attr(&mut self, name: &str) -> bool {
        if name == "id" {
            self.id = None;
        }
        self.attrs.remove_named_item(name).is_some()
    }

    /// Toggle a boolean attribute, keeping the id cache in step
    pub fn toggle_attr(&mut self, name: &str, force: Option<bool>) -> bool {
        let present = self.attrs.toggle_attribute(name, force);
        if name == "id" {
            self.id = self.attrs.get_attribute("id").map(str::to_owned);
        }
        present
    }

    /// Whitespace-separated class list
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class").unwrap_or_default().split_whitespace()
    }
}
