use pulldown_cmark::{html, Options, Parser};

/// Markdown -> HTML. Never fails: anything the parser does not recognize comes
/// back as escaped literal text.
pub fn markdown_to_html_string(md: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts.insert(Options::ENABLE_FOOTNOTES);
    let parser = Parser::new_ext(md, opts);
    let mut out = String::with_capacity(md.len() + md.len() / 2);
    html::push_html(&mut out, parser);
    out
}
