//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it into the lg-dom arena.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use lg_dom::{Document, DomTree, NodeId};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a document URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, ParseError> {
        tracing::debug!(url, bytes = html.len(), "parsing HTML document");

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::new(url);
        let root = document.root();
        self.convert_node(&dom.document, document.tree_mut(), root)?;

        tracing::debug!(nodes = document.tree().len(), "parsed HTML document");
        Ok(document)
    }

    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) -> Result<(), ParseError> {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent)?;
                }
            }
            RcNodeData::Doctype { name, .. } => {
                let id = tree.create_doctype(name);
                tree.append_child(parent, id)?;
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if !text.trim().is_empty() {
                    let id = tree.create_text(&text);
                    tree.append_child(parent, id)?;
                }
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id)?;
            }
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element(&name.local);
                if let Some(elem) = tree.element_mut(id) {
                    for attr in attrs.borrow().iter() {
                        elem.set_attr(&attr.name.local, &attr.value);
                    }
                }
                tree.append_child(parent, id)?;

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id)?;
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {}
        }
        Ok(())
    }
}
