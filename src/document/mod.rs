//! Document tree
//!
//! An owned, read-only view of a parsed HTML document. Nodes are either the
//! document root, an element with a lower-case tag and attributes, or a run
//! of text. Children are kept in source order.

pub mod parse;
pub mod reduce;

use std::collections::BTreeMap;

pub use parse::parse_html;
pub use reduce::{
    document_fragments, fragments, reduce, reduce_body, reduce_document, reduce_title, Fragment,
    FragmentStyle, ReduceMode,
};

/// What a node is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of a whole parsed document
    Document,
    /// An element; `tag` is lower-case
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
    },
    /// Character data
    Text { text: String },
}

/// A node in a document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a document root
    pub fn document(children: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Document,
            children,
        }
    }

    /// Create an element with no attributes or children
    pub fn element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
                attributes: BTreeMap::new(),
            },
            children: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text { text: text.into() },
            children: Vec::new(),
        }
    }

    /// Add an attribute (ignored on non-element nodes)
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        if let NodeKind::Element { attributes, .. } = &mut self.kind {
            attributes.insert(name.to_ascii_lowercase(), value.into());
        }
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Element tag, or `None` for text and document nodes
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Attribute value, if this is an element carrying it
    pub fn attr(&self, name: &str) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self.kind, NodeKind::Document)
    }

    /// Concatenated text of this node and all descendants, in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in self.descendants() {
            if let NodeKind::Text { text } = &node.kind {
                out.push_str(text);
            }
        }
        out
    }

    /// First node with `tag` in pre-order, including `self`
    pub fn find(&self, tag: &str) -> Option<&Node> {
        self.descendants().find(|node| node.tag() == Some(tag))
    }

    /// Pre-order iterator over this node and its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

// Children are detached onto a heap stack so that dropping a deeply nested
// tree does not recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Pre-order traversal using an explicit stack
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::element("div")
            .with_child(Node::element("p").with_child(Node::text("one ")))
            .with_child(
                Node::element("span")
                    .with_child(Node::text("two"))
                    .with_child(Node::element("b").with_child(Node::text(" three"))),
            )
    }

    #[test]
    fn test_text_content_document_order() {
        assert_eq!(sample().text_content(), "one two three");
        assert_eq!(Node::element("p").text_content(), "");
    }

    #[test]
    fn test_descendants_pre_order() {
        let tree = sample();
        let order: Vec<String> = tree
            .descendants()
            .map(|n| n.tag().map(str::to_string).unwrap_or_else(|| "#text".into()))
            .collect();
        assert_eq!(order, ["div", "p", "#text", "span", "#text", "b", "#text"]);
    }

    #[test]
    fn test_find_and_attr() {
        let tree = Node::element("DIV").with_child(Node::element("A").with_attr("HREF", "/x"));
        assert_eq!(tree.tag(), Some("div"));
        let link = tree.find("a").unwrap();
        assert_eq!(link.attr("href"), Some("/x"));
        assert_eq!(link.attr("title"), None);
        assert!(tree.find("p").is_none());
        assert_eq!(Node::text("x").with_attr("href", "y").attr("href"), None);
    }

    #[test]
    fn test_deep_nesting_walks_without_recursion() {
        let mut tree = Node::element("span").with_child(Node::text("leaf"));
        for _ in 0..200_000 {
            tree = Node::element("div").with_child(tree);
        }
        assert_eq!(tree.text_content(), "leaf");
        assert_eq!(tree.find("span").map(Node::text_content).as_deref(), Some("leaf"));
        assert_eq!(tree.descendants().count(), 200_002);
        drop(tree);
    }
}
