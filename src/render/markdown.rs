//! Markdown to HTML rendering for docstring bodies

use pulldown_cmark::{html, Options, Parser};

/// Render a docstring's markdown to HTML. Fenced code blocks come through
/// as plain `<pre><code>` with the language class; declaration source gets
/// its own tree-sitter pass elsewhere.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
