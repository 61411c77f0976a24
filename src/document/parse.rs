//! HTML parsing
//!
//! Raw markup is parsed by html5ever into an `RcDom`, which is then copied
//! into an owned [`Node`] tree. Comments, doctypes and processing
//! instructions are dropped. The parser recovers from malformed markup and
//! always synthesizes `html`, `head` and `body`.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use log::debug;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use super::Node;

/// Parse an HTML document.
pub fn parse_html(html: &str) -> Node {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);
    for error in dom.errors.iter() {
        debug!("html parse: {}", error);
    }
    convert(&dom.document).unwrap_or_else(|| Node::document(Vec::new()))
}

fn convert(handle: &Handle) -> Option<Node> {
    let mut node = match &handle.data {
        NodeData::Document => Node::document(Vec::new()),
        NodeData::Element { name, attrs, .. } => {
            let mut element = Node::element(&name.local);
            for attr in attrs.borrow().iter() {
                element = element.with_attr(&attr.name.local, attr.value.to_string());
            }
            element
        }
        NodeData::Text { contents } => return Some(Node::text(contents.borrow().to_string())),
        NodeData::Doctype { .. }
        | NodeData::Comment { .. }
        | NodeData::ProcessingInstruction { .. } => return None,
    };

    node.children = handle.children.borrow().iter().filter_map(convert).collect();
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{reduce, reduce_body, reduce_title, NodeKind};
    use pretty_assertions::assert_eq;

    const PAGE: &str = "<!DOCTYPE html>\
        <html><head><title>Example Domain</title><style>body { color: red }</style></head>\
        <body><!-- nav --><h1>Example</h1><p>This domain is for <b>examples</b>.</p>\
        <div><a href=\"https://www.iana.org/\">More information...</a></div></body></html>";

    #[test]
    fn test_parse_structure() {
        let doc = parse_html(PAGE);
        assert!(doc.is_document());
        let html = &doc.children[0];
        assert_eq!(html.tag(), Some("html"));
        assert_eq!(html.children[0].tag(), Some("head"));
        assert_eq!(html.children[1].tag(), Some("body"));
        // Comment dropped
        assert_eq!(html.children[1].children[0].tag(), Some("h1"));
    }

    #[test]
    fn test_parse_attributes_and_text() {
        let doc = parse_html(PAGE);
        let link = doc.find("a").unwrap();
        assert_eq!(link.attr("href"), Some("https://www.iana.org/"));
        assert_eq!(
            link.children[0].kind,
            NodeKind::Text { text: "More information...".into() }
        );
    }

    #[test]
    fn test_reduce_parsed_page() {
        let doc = parse_html(PAGE);
        assert_eq!(reduce_title(&doc), "╭────────────────╮\n│ Example Domain │\n╰────────────────╯\n");
        assert_eq!(
            reduce_body(&doc),
            "EXAMPLE\nThis domain is for examples.\n[More information...](https://www.iana.org/)"
        );
        assert!(reduce(&doc).starts_with("╭"));
    }

    #[test]
    fn test_parse_fragment_recovers() {
        let doc = parse_html("<p>unclosed <a>link");
        assert_eq!(reduce_body(&doc), "unclosed link\n");
        assert_eq!(reduce_title(&doc), "");
    }

    #[test]
    fn test_parse_empty() {
        let doc = parse_html("");
        assert_eq!(reduce(&doc), "");
    }
}
