//! Document reduction
//!
//! Walks a document tree in document order and linearizes it into styled
//! text fragments. Each element is handled by exactly one [`Rule`], chosen
//! from its tag; anything without a dedicated rule falls back to its plain
//! text.

use serde::{Deserialize, Serialize};

use super::{Node, NodeKind};
use crate::core::{box_styles, frame};

/// Presentation hint attached to a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentStyle {
    Plain,
    Heading,
    Link,
    BoxedTitle,
}

/// One unit of reduced output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    pub style: FragmentStyle,
}

impl Fragment {
    fn new(text: String, style: FragmentStyle) -> Self {
        Self { text, style }
    }
}

/// Which part of a whole document to render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReduceMode {
    /// Only the first `<title>` inside `<head>`
    TitleOnly,
    /// The children of `<body>`
    BodyContent,
    /// Title followed by body content
    #[default]
    Full,
}

impl ReduceMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "title" | "title-only" | "title_only" => Some(ReduceMode::TitleOnly),
            "body" | "body-content" | "body_content" => Some(ReduceMode::BodyContent),
            "full" | "all" => Some(ReduceMode::Full),
            _ => None,
        }
    }
}

/// How an element is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Text followed by a newline
    Paragraph,
    /// Text in a box, followed by a newline
    Title,
    /// Upper-cased text followed by a newline
    Heading,
    /// `[text](href)`
    Link,
    /// Children reduced in place
    Container,
    /// Text as-is
    Inline,
}

impl Rule {
    fn for_tag(tag: &str) -> Rule {
        match tag {
            "p" => Rule::Paragraph,
            "title" => Rule::Title,
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Rule::Heading,
            "a" => Rule::Link,
            "html" | "body" | "div" | "section" | "article" | "main" | "header" | "footer"
            | "nav" | "aside" | "ul" | "ol" | "li" | "blockquote" | "figure" => Rule::Container,
            _ => Rule::Inline,
        }
    }
}

/// Reduce `root` to a single string.
///
/// A document root, or an `html` element, is reduced with
/// [`ReduceMode::Full`]. Any other node is reduced with the element rules,
/// starting at the node itself. An element or document with no children
/// reduces to `""`.
pub fn reduce(root: &Node) -> String {
    concat(&fragments(root))
}

/// Reduce `root` to fragments, in document order.
pub fn fragments(root: &Node) -> Vec<Fragment> {
    if root.is_document() || root.tag() == Some("html") {
        return document_fragments(root, ReduceMode::Full);
    }
    if root.tag().is_some() && root.children.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    reduce_node(root, &mut out);
    out
}

/// Reduce a whole document in the given mode.
pub fn reduce_document(doc: &Node, mode: ReduceMode) -> String {
    concat(&document_fragments(doc, mode))
}

/// The boxed page title, or `""` when the document has no `<head><title>`.
pub fn reduce_title(doc: &Node) -> String {
    reduce_document(doc, ReduceMode::TitleOnly)
}

/// The rendered `<body>` content, or `""` when there is no body.
pub fn reduce_body(doc: &Node) -> String {
    reduce_document(doc, ReduceMode::BodyContent)
}

/// Fragments for a whole document in the given mode.
pub fn document_fragments(doc: &Node, mode: ReduceMode) -> Vec<Fragment> {
    let mut out = Vec::new();
    if matches!(mode, ReduceMode::TitleOnly | ReduceMode::Full) {
        let title = doc
            .find("head")
            .and_then(|head| head.descendants().find(|n| n.tag() == Some("title")));
        if let Some(title) = title {
            reduce_node(title, &mut out);
        }
    }

    if matches!(mode, ReduceMode::BodyContent | ReduceMode::Full) {
        if let Some(body) = doc.find("body") {
            for child in &body.children {
                reduce_node(child, &mut out);
            }
        }
    }
    out
}

fn concat(fragments: &[Fragment]) -> String {
    fragments.iter().map(|f| f.text.as_str()).collect()
}

/// Pre-order walk with an explicit stack, so nesting depth is bounded by
/// the heap rather than the call stack.
fn reduce_node(root: &Node, out: &mut Vec<Fragment>) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let tag = match &node.kind {
            NodeKind::Text { text } => {
                push(out, text.clone(), FragmentStyle::Plain);
                continue;
            }
            NodeKind::Document => {
                stack.extend(node.children.iter().rev());
                continue;
            }
            NodeKind::Element { tag, .. } => tag.as_str(),
        };

        let fragment = match Rule::for_tag(tag) {
            Rule::Container => {
                stack.extend(node.children.iter().rev());
                continue;
            }
            Rule::Paragraph => Fragment::new(node.text_content() + "\n", FragmentStyle::Plain),
            Rule::Heading => Fragment::new(
                node.text_content().to_uppercase() + "\n",
                FragmentStyle::Heading,
            ),
            Rule::Title => Fragment::new(
                frame(&node.text_content(), &box_styles::ROUNDED) + "\n",
                FragmentStyle::BoxedTitle,
            ),
            Rule::Link => {
                let href = node.attr("href").unwrap_or("");
                Fragment::new(
                    format!("[{}]({})", node.text_content(), href),
                    FragmentStyle::Link,
                )
            }
            Rule::Inline => Fragment::new(node.text_content(), FragmentStyle::Plain),
        };
        if !fragment.text.is_empty() {
            out.push(fragment);
        }
    }
}

fn push(out: &mut Vec<Fragment>, text: String, style: FragmentStyle) {
    if !text.is_empty() {
        out.push(Fragment::new(text, style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn el(tag: &str, text: &str) -> Node {
        Node::element(tag).with_child(Node::text(text))
    }

    fn page() -> Node {
        Node::document(vec![Node::element("html")
            .with_child(
                Node::element("head")
                    .with_child(el("meta", ""))
                    .with_child(el("title", "Home")),
            )
            .with_child(
                Node::element("body")
                    .with_child(el("h1", "Welcome"))
                    .with_child(el("p", "Hello there."))
                    .with_child(
                        Node::element("div")
                            .with_child(Node::text("See "))
                            .with_child(el("a", "docs").with_attr("href", "/docs")),
                    ),
            )])
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(reduce(&el("p", "Some text")), "Some text\n");
    }

    #[test]
    fn test_heading_uppercased() {
        assert_eq!(reduce(&el("h2", "hello")), "HELLO\n");
        assert_eq!(reduce(&el("h6", "Fine Print")), "FINE PRINT\n");
    }

    #[test]
    fn test_link_format() {
        assert_eq!(reduce(&el("a", "Y").with_attr("href", "X")), "[Y](X)");
        assert_eq!(reduce(&el("a", "Y")), "[Y]()");
    }

    #[test]
    fn test_title_boxed() {
        let fragments = fragments(&el("title", "Home"));
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].style, FragmentStyle::BoxedTitle);
        assert_eq!(fragments[0].text, "╭──────╮\n│ Home │\n╰──────╯\n");
    }

    #[test]
    fn test_inline_keeps_text_unmodified() {
        let span = Node::element("span")
            .with_child(Node::text("  a "))
            .with_child(el("em", "b"));
        assert_eq!(reduce(&span), "  a b");
        assert_eq!(reduce(&Node::text("bare")), "bare");
    }

    #[test]
    fn test_flattening_drops_nested_markup() {
        let p = Node::element("p")
            .with_child(Node::text("go "))
            .with_child(el("a", "here").with_attr("href", "/x"));
        assert_eq!(reduce(&p), "go here\n");
    }

    #[test]
    fn test_container_splices_children_in_order() {
        let div = Node::element("div")
            .with_child(el("p", "A"))
            .with_child(Node::element("section").with_child(el("h3", "b")))
            .with_child(el("p", "C"));
        assert_eq!(reduce(&div), "A\nB\nC\n");
    }

    #[test]
    fn test_document_order_preserved() {
        let div = Node::element("div")
            .with_child(el("p", "first"))
            .with_child(el("p", "second"));
        let out = reduce(&div);
        assert!(out.find("first").unwrap() < out.find("second").unwrap());
    }

    #[test]
    fn test_other_elements_render_their_text() {
        let div = Node::element("div")
            .with_child(el("noscript", "Enable JS"))
            .with_child(el("style", "p {}"))
            .with_child(el("p", "shown"));
        assert_eq!(reduce(&div), "Enable JSp {}shown\n");

        let head = Node::element("head").with_child(Node::text("T"));
        assert_eq!(reduce(&head), "T");
    }

    #[test]
    fn test_html_root_reduced_as_document() {
        let html = page().children.remove(0);
        assert_eq!(reduce(&html), reduce(&page()));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(reduce(&Node::document(vec![])), "");
        assert_eq!(reduce(&Node::element("div")), "");
        assert_eq!(reduce(&Node::element("p")), "");
        assert!(fragments(&Node::element("a").with_attr("href", "/x")).is_empty());
    }

    #[test]
    fn test_image_link_keeps_href() {
        let div = Node::element("div").with_child(
            Node::element("a")
                .with_attr("href", "/home")
                .with_child(Node::element("img").with_attr("src", "logo.png")),
        );
        assert_eq!(reduce(&div), "[](/home)");
    }

    #[test]
    fn test_empty_paragraph_keeps_line_break() {
        let div = Node::element("div")
            .with_child(el("p", "A"))
            .with_child(Node::element("p").with_child(Node::element("br")))
            .with_child(el("p", "B"));
        assert_eq!(reduce(&div), "A\n\nB\n");
    }

    #[test]
    fn test_empty_title_and_heading() {
        let div = Node::element("div")
            .with_child(Node::element("h2").with_child(Node::text("")))
            .with_child(Node::element("title").with_child(Node::text("")));
        assert_eq!(reduce(&div), "\n╭──╮\n╰──╯\n");
    }

    #[test]
    fn test_deeply_nested_tree() {
        let mut node = el("p", "deep");
        for _ in 0..100_000 {
            node = Node::element("div").with_child(node);
        }
        assert_eq!(node.text_content(), "deep");
        assert!(node.find("p").is_some());
        assert_eq!(reduce(&node), "deep\n");
    }

    #[test]
    fn test_title_only_mode() {
        assert_eq!(reduce_title(&page()), "╭──────╮\n│ Home │\n╰──────╯\n");
    }

    #[test]
    fn test_title_only_ignores_body_titles() {
        let doc = Node::document(vec![Node::element("html")
            .with_child(Node::element("head"))
            .with_child(Node::element("body").with_child(el("title", "Stray")))]);
        assert_eq!(reduce_title(&doc), "");
    }

    #[test]
    fn test_first_title_wins() {
        let doc = Node::document(vec![Node::element("head")
            .with_child(el("title", "One"))
            .with_child(el("title", "Two"))]);
        assert!(reduce_title(&doc).contains("One"));
        assert!(!reduce_title(&doc).contains("Two"));
    }

    #[test]
    fn test_body_content_mode() {
        assert_eq!(reduce_body(&page()), "WELCOME\nHello there.\nSee [docs](/docs)");
    }

    #[test]
    fn test_full_mode() {
        let out = reduce(&page());
        assert_eq!(
            out,
            "╭──────╮\n│ Home │\n╰──────╯\nWELCOME\nHello there.\nSee [docs](/docs)"
        );
        assert_eq!(out, reduce_document(&page(), ReduceMode::Full));
    }

    #[test]
    fn test_missing_head_and_body() {
        let doc = Node::document(vec![el("p", "orphan")]);
        assert_eq!(reduce_title(&doc), "");
        assert_eq!(reduce_body(&doc), "");
    }

    #[test]
    fn test_deterministic() {
        let doc = page();
        assert_eq!(reduce(&doc), reduce(&doc));
        assert_eq!(fragments(&doc), fragments(&doc));
    }

    #[test]
    fn test_fragment_styles() {
        let styles: Vec<FragmentStyle> = fragments(&page()).iter().map(|f| f.style).collect();
        assert_eq!(
            styles,
            vec![
                FragmentStyle::BoxedTitle,
                FragmentStyle::Heading,
                FragmentStyle::Plain,
                FragmentStyle::Plain,
                FragmentStyle::Link,
            ]
        );
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(ReduceMode::from_str("title"), Some(ReduceMode::TitleOnly));
        assert_eq!(ReduceMode::from_str("BODY"), Some(ReduceMode::BodyContent));
        assert_eq!(ReduceMode::from_str("full"), Some(ReduceMode::Full));
        assert_eq!(ReduceMode::from_str("nope"), None);
    }
}
