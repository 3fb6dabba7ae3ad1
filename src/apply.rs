use crate::document::{Node, ParsedDocument};
use crate::style::{StyleCategory, StyleConfigSet};

/// Returns a copy of `doc` with a `style` attribute on every `h1`-`h3`, `p` and
/// `li`. Nothing is added, removed or moved; other elements are copied as-is.
pub fn apply_styles(doc: &ParsedDocument, styles: &StyleConfigSet) -> ParsedDocument {
    // One declaration per category, built once per pass.
    let decls = Declarations::new(styles);
    ParsedDocument {
        nodes: doc.nodes.iter().map(|n| style_node(n, &decls)).collect(),
    }
}

/// Styled HTML plus its plain-text rendering.
pub fn style_document(doc: &ParsedDocument, styles: &StyleConfigSet) -> (String, String) {
    let styled = apply_styles(doc, styles);
    (styled.to_html(), styled.text_content())
}

struct Declarations {
    heading1: String,
    heading2: String,
    heading3: String,
    body: String,
}

impl Declarations {
    fn new(styles: &StyleConfigSet) -> Self {
        Declarations {
            heading1: styles.heading1.css_declaration(),
            heading2: styles.heading2.css_declaration(),
            heading3: styles.heading3.css_declaration(),
            body: styles.body.css_declaration(),
        }
    }

    fn for_node(&self, n: &Node) -> Option<&str> {
        let decl = match n.kind()?.style_category()? {
            StyleCategory::Heading1 => &self.heading1,
            StyleCategory::Heading2 => &self.heading2,
            StyleCategory::Heading3 => &self.heading3,
            StyleCategory::Body => &self.body,
        };
        Some(decl.as_str())
    }
}

fn style_node(n: &Node, decls: &Declarations) -> Node {
    let Node::Element {
        tag,
        attrs,
        children,
    } = n
    else {
        return n.clone();
    };

    let mut attrs = attrs.clone();
    if let Some(decl) = decls.for_node(n) {
        // Overwrite rather than append so a second pass is a no-op.
        match attrs.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case("style")) {
            Some((_, v)) => *v = decl.to_string(),
            None => attrs.push(("style".to_string(), decl.to_string())),
        }
    }

    Node::Element {
        tag: tag.clone(),
        attrs,
        children: children.iter().map(|c| style_node(c, decls)).collect(),
    }
}
