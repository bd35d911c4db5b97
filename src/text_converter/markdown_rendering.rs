//! Markdown → HTML rendering.

use pulldown_cmark::{Options, Parser, html};

/// Render Markdown to HTML with the GitHub-flavoured extensions a README
/// typically relies on (tables, strikethrough, task lists, footnotes).
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;

    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}
