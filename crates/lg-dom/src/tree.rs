//! DOM Tree (arena-based allocation)

use crate::{DomError, ElementData, Node, NodeId};

/// Arena-based DOM tree. Index 0 is always the document node.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Element data for `id`, if it is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    /// Number of nodes in the tree, document node included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing but the document node exists
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content))
    }

    /// Create a detached doctype node
    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        self.push(Node::doctype(name))
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let parent_node = self.get(parent).ok_or(DomError::InvalidNode(parent))?;
        if !parent_node.can_have_children() {
            return Err(DomError::NotAParent(parent));
        }
        if self.get(child).is_none() {
            return Err(DomError::InvalidNode(child));
        }
        if child == NodeId::ROOT || self.contains(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child);

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
        Ok(())
    }

    /// Unlink a node from its parent and siblings; children stay attached
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else { return };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Parent of `id`, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Direct children in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// All nodes below `id` in document (pre-)order, `id` excluded
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        Descendants {
            tree: self,
            root: id,
            next,
        }
    }

    /// `id` followed by each ancestor up to the document node
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        let next = if self.get(id).is_some() { id } else { NodeId::NONE };
        Ancestors { tree: self, next }
    }

    /// Inclusive containment, like `Node.contains`
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|id| id == ancestor)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: NodeId,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next;
        let node = self.tree.get(current)?;

        self.next = if node.first_child.is_valid() {
            node.first_child
        } else {
            let mut n = current;
            loop {
                if n == self.root {
                    break NodeId::NONE;
                }
                let Some(node) = self.tree.get(n) else {
                    break NodeId::NONE;
                };
                if node.next_sibling.is_valid() {
                    break node.next_sibling;
                }
                n = node.parent;
                if !n.is_valid() {
                    break NodeId::NONE;
                }
            }
        };
        Some(current)
    }
}

/// Inclusive ancestor chain
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next;
        let node = self.tree.get(current)?;
        self.next = node.parent;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (DomTree, [NodeId; 4]) {
        // root > div > (p > span), ul
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let p = tree.create_element("p");
        let span = tree.create_element("span");
        let ul = tree.create_element("ul");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, p).unwrap();
        tree.append_child(p, span).unwrap();
        tree.append_child(div, ul).unwrap();
        (tree, [div, p, span, ul])
    }

    #[test]
    fn test_descendants_document_order() {
        let (tree, [div, p, span, ul]) = sample();
        let all: Vec<_> = tree.descendants(tree.root()).collect();
        assert_eq!(all, vec![div, p, span, ul]);

        let under_p: Vec<_> = tree.descendants(p).collect();
        assert_eq!(under_p, vec![span]);
        assert_eq!(tree.descendants(ul).count(), 0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let (tree, [div, p, span, ul]) = sample();
        assert!(tree.contains(div, span));
        assert!(tree.contains(span, span));
        assert!(!tree.contains(ul, span));
        assert!(!tree.contains(p, div));
    }

    #[test]
    fn test_append_rejects_cycles() {
        let (mut tree, [div, _, span, _]) = sample();
        assert_eq!(
            tree.append_child(span, div),
            Err(DomError::HierarchyRequest { parent: span, child: div })
        );
        let text = tree.create_text("x");
        assert_eq!(tree.append_child(text, span), Err(DomError::NotAParent(text)));
    }

    #[test]
    fn test_reparent_moves_node() {
        let (mut tree, [div, p, span, ul]) = sample();
        tree.append_child(ul, span).unwrap();

        assert_eq!(tree.parent(span), Some(ul));
        assert_eq!(tree.children(p).count(), 0);
        let order: Vec<_> = tree.descendants(div).collect();
        assert_eq!(order, vec![p, ul, span]);
    }
}
