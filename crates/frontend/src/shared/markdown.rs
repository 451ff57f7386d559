//! Markdown to HTML conversion for model answers

use pulldown_cmark::{html, Options, Parser};

/// Render GitHub-flavored Markdown source to an HTML fragment.
///
/// Enables the GFM extensions the in-house model actually emits: tables,
/// strikethrough, task lists and footnotes.
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
