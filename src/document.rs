//! Owned HTML element tree built from the parser output.
//!
//! `html5ever` does the HTML parsing; the resulting `RcDom` is copied into
//! plain owned [`Node`]s so the style pass can work as a pure function over
//! values instead of mutating shared `Rc` handles.

use crate::markdown::markdown_to_html_string;
use crate::style::StyleCategory;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text(String),
    Comment(String),
}

/// What the style pass sees when it looks at an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    ListItem,
    /// Emphasis, links, code, lists, headings 4-6 and everything else.
    PassThrough,
}

impl ElementKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "h1" => ElementKind::Heading1,
            "h2" => ElementKind::Heading2,
            "h3" => ElementKind::Heading3,
            "p" => ElementKind::Paragraph,
            "li" => ElementKind::ListItem,
            _ => ElementKind::PassThrough,
        }
    }

    /// List items share the body category.
    pub fn style_category(self) -> Option<StyleCategory> {
        match self {
            ElementKind::Heading1 => Some(StyleCategory::Heading1),
            ElementKind::Heading2 => Some(StyleCategory::Heading2),
            ElementKind::Heading3 => Some(StyleCategory::Heading3),
            ElementKind::Paragraph | ElementKind::ListItem => Some(StyleCategory::Body),
            ElementKind::PassThrough => None,
        }
    }
}

impl Node {
    pub fn kind(&self) -> Option<ElementKind> {
        match self {
            Node::Element { tag, .. } => Some(ElementKind::from_tag(tag)),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }
}

/// A parsed Markdown document: the children of `<body>`, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub nodes: Vec<Node>,
}

impl ParsedDocument {
    pub fn from_markdown(md: &str) -> Self {
        Self::parse_html(&markdown_to_html_string(md))
    }

    pub fn parse_html(input: &str) -> Self {
        let dom = parse_to_dom(input);
        let children = find_body_children(&dom);
        let nodes = children.iter().filter_map(copy_node).collect();
        ParsedDocument { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for n in &self.nodes {
            serialize_node(&mut out, n);
        }
        out
    }

    /// Text of every text node in document order. Blocks are joined by the
    /// parser's own line breaks; breaks before the first and after the last
    /// block are dropped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for n in &self.nodes {
            push_text(&mut out, n);
        }
        out.trim_matches(['\n', '\r']).to_string()
    }

    /// Element tags paired with their depth, in document order.
    pub fn shape(&self) -> Vec<(usize, String)> {
        fn walk(n: &Node, depth: usize, out: &mut Vec<(usize, String)>) {
            if let Node::Element { tag, children, .. } = n {
                out.push((depth, tag.to_ascii_lowercase()));
                for c in children {
                    walk(c, depth + 1, out);
                }
            }
        }
        let mut out = Vec::new();
        for n in &self.nodes {
            walk(n, 0, &mut out);
        }
        out
    }
}

fn parse_to_dom(input: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(input)
}

fn find_body_children(dom: &RcDom) -> Vec<Handle> {
    fn find_elem(node: &Handle, name: &str) -> Option<Handle> {
        if let NodeData::Element { name: q, .. } = &node.data {
            if q.local.to_string().eq_ignore_ascii_case(name) {
                return Some(node.clone());
            }
        }
        for c in node.children.borrow().iter() {
            if let Some(x) = find_elem(c, name) {
                return Some(x);
            }
        }
        None
    }

    if let Some(body) = find_elem(&dom.document, "body") {
        return body.children.borrow().clone();
    }
    dom.document.children.borrow().clone()
}

fn copy_node(node: &Handle) -> Option<Node> {
    match &node.data {
        NodeData::Text { contents } => Some(Node::Text(contents.borrow().to_string())),
        NodeData::Comment { contents } => Some(Node::Comment(contents.to_string())),
        NodeData::Element { name, attrs, .. } => {
            let attrs = attrs
                .borrow()
                .iter()
                .map(|a| (a.name.local.to_string(), a.value.to_string()))
                .collect();
            let children = node.children.borrow().iter().filter_map(copy_node).collect();
            Some(Node::Element {
                tag: name.local.to_string(),
                attrs,
                children,
            })
        }
        NodeData::Document | NodeData::Doctype { .. } | NodeData::ProcessingInstruction { .. } => {
            None
        }
    }
}

fn push_text(out: &mut String, n: &Node) {
    match n {
        Node::Text(t) => out.push_str(t),
        Node::Element { children, .. } => {
            for c in children {
                push_text(out, c);
            }
        }
        Node::Comment(_) => {}
    }
}

fn esc_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn esc_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn is_void(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "area"
            | "base"
            | "basefont"
            | "bgsound"
            | "br"
            | "col"
            | "embed"
            | "frame"
            | "hr"
            | "img"
            | "input"
            | "keygen"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// Contents of these are not entity-decoded by the parser, so they go out raw.
// `noscript` is included because the parser runs with scripting enabled.
fn is_raw_text(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "style" | "script" | "xmp" | "iframe" | "noembed" | "noframes" | "plaintext" | "noscript"
    )
}

// The parser drops one newline right after these start tags.
fn drops_leading_newline(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "pre" | "textarea" | "listing"
    )
}

fn serialize_node(out: &mut String, n: &Node) {
    match n {
        Node::Text(t) => out.push_str(&esc_text(t)),
        Node::Comment(c) => {
            out.push_str("<!--");
            out.push_str(c);
            out.push_str("-->");
        }
        Node::Element {
            tag,
            attrs,
            children,
        } => {
            out.push('<');
            out.push_str(tag);
            for (k, v) in attrs {
                out.push(' ');
                out.push_str(k);
                out.push_str("=\"");
                out.push_str(&esc_attr(v));
                out.push('"');
            }
            if is_void(tag) {
                out.push_str("/>");
                return;
            }
            out.push('>');
            if drops_leading_newline(tag) {
                if let Some(Node::Text(t)) = children.first() {
                    if t.starts_with('\n') {
                        out.push('\n');
                    }
                }
            }
            if is_raw_text(tag) {
                for c in children {
                    if let Node::Text(t) = c {
                        out.push_str(t);
                    }
                }
            } else {
                for c in children {
                    serialize_node(out, c);
                }
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}
