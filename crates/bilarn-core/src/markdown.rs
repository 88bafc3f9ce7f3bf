//! Markdown to HTML rendering.

use pulldown_cmark::{Options, Parser, html};

/// Render Markdown source to an HTML fragment.
///
/// CommonMark plus tables, strikethrough and task lists. Output is not
/// sanitized.
pub fn render(markdown: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
