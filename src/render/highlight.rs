//! Tree-sitter syntax highlighting for Python source snippets

use tree_sitter_highlight::{HighlightConfiguration, Highlighter, HtmlRenderer};

use super::markdown::html_escape;

/// Capture names from the Python highlights query, in the order we assign
/// CSS classes. The index into this array becomes the `Highlight` id.
const HIGHLIGHT_NAMES: &[&str] = &[
    "comment",
    "constant",
    "constant.builtin",
    "constructor",
    "embedded",
    "escape",
    "function",
    "function.builtin",
    "function.method",
    "keyword",
    "number",
    "operator",
    "property",
    "punctuation.bracket",
    "punctuation.special",
    "string",
    "type",
    "variable",
];

/// Precomputed HTML attributes: `b" class=\"hl-keyword\""` etc.
/// Dots in capture names become hyphens in CSS classes.
fn build_attrs() -> Vec<Vec<u8>> {
    HIGHLIGHT_NAMES
        .iter()
        .map(|name| {
            let class = name.replace('.', "-");
            format!(" class=\"hl-{class}\"").into_bytes()
        })
        .collect()
}

/// Reusable highlighter configured for Python. Build one per render run;
/// each call spins up its own tree-sitter cursor.
pub struct SourceHighlighter {
    config: HighlightConfiguration,
    attrs: Vec<Vec<u8>>,
}

impl SourceHighlighter {
    pub fn new() -> Self {
        let language = tree_sitter_python::LANGUAGE.into();
        let mut config = HighlightConfiguration::new(
            language,
            "python",
            tree_sitter_python::HIGHLIGHTS_QUERY,
            "", // no injections
            "", // no locals
        )
        .expect("highlights.scm should parse");
        config.configure(HIGHLIGHT_NAMES);
        Self {
            config,
            attrs: build_attrs(),
        }
    }

    /// Highlight a snippet, returning inner HTML per source line with
    /// `<span class="hl-*">` spans balanced on every line.
    ///
    /// Falls back to html-escaped plain text if highlighting fails.
    pub fn highlight_lines(&self, code: &str) -> Vec<String> {
        match self.try_highlight(code) {
            Some(lines) => lines,
            None => code.lines().map(html_escape).collect(),
        }
    }

    fn try_highlight(&self, code: &str) -> Option<Vec<String>> {
        let mut highlighter = Highlighter::new();
        let highlights = highlighter
            .highlight(&self.config, code.as_bytes(), None, |_| None)
            .ok()?;

        let mut renderer = HtmlRenderer::new();
        renderer
            .render(highlights, code.as_bytes(), &|highlight, output| {
                output.extend_from_slice(&self.attrs[highlight.0]);
            })
            .ok()?;

        Some(
            renderer
                .lines()
                .map(|line| line.trim_end_matches('\n').to_string())
                .collect(),
        )
    }
}

impl Default for SourceHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
