//! HTML page assembly.
//!
//! One page per module plus the index, all sharing a shell with the top bar
//! (brand, search box, theme toggle) and the sidebar navigation tree. Pages
//! are built fully in memory; writing is the caller's concern.

use crate::constants::render::{INDEX_FILE, SCRIPT_FILE, STYLESHEET_FILE};
use crate::types::{ClassDoc, Description, DescriptionOrigin, FunctionDoc, LineSpan, ModuleDoc};

use super::highlight::SourceHighlighter;
use super::markdown::{html_escape, render_markdown};

/// Builder for the generated pages of one documentation run
pub struct PageBuilder<'a> {
    title: &'a str,
    modules: &'a [ModuleDoc],
    highlighter: SourceHighlighter,
}

impl<'a> PageBuilder<'a> {
    pub fn new(title: &'a str, modules: &'a [ModuleDoc]) -> Self {
        Self {
            title,
            modules,
            highlighter: SourceHighlighter::new(),
        }
    }

    /// Full HTML document for one module
    pub fn module_page(&self, module: &ModuleDoc) -> String {
        let mut body = String::new();

        // Header
        body.push_str(&format!("<h1>{}</h1>\n", html_escape(&module.name)));
        body.push_str(&format!(
            "<p class=\"module-path\"><code>{}</code></p>\n",
            html_escape(&module.path)
        ));
        push_description(&mut body, module.description.as_ref());

        // Imports
        if !module.imports.is_empty() {
            body.push_str("<section id=\"imports\">\n<h2>Imports</h2>\n<ul class=\"facts\">\n");
            for import in &module.imports {
                body.push_str(&format!("<li><code>{}</code></li>\n", html_escape(import)));
            }
            body.push_str("</ul>\n</section>\n");
        }

        // Module variables
        if !module.variables.is_empty() {
            body.push_str(
                "<section id=\"variables\">\n<h2>Module Variables</h2>\n<ul class=\"facts\">\n",
            );
            for variable in &module.variables {
                body.push_str(&format!("<li><code>{}</code></li>\n", html_escape(variable)));
            }
            body.push_str("</ul>\n</section>\n");
        }

        // Classes
        if !module.classes.is_empty() {
            body.push_str("<section id=\"classes\">\n<h2>Classes</h2>\n");
            for class in &module.classes {
                self.push_class(&mut body, module, class);
            }
            body.push_str("</section>\n");
        }

        // Functions
        if !module.functions.is_empty() {
            body.push_str("<section id=\"functions\">\n<h2>Functions</h2>\n");
            for func in &module.functions {
                self.push_function(&mut body, module, func, "function");
            }
            body.push_str("</section>\n");
        }

        self.page_shell(&module.name, Some(module), &body)
    }

    /// The landing page: project title and the module table
    pub fn index_page(&self) -> String {
        let mut body = String::new();

        body.push_str(&format!("<h1>{}</h1>\n", html_escape(self.title)));
        let symbols: usize = self.modules.iter().map(ModuleDoc::symbol_count).sum();
        body.push_str(&format!(
            "<p>{} modules documented, {} symbols.</p>\n",
            self.modules.len(),
            symbols
        ));

        if !self.modules.is_empty() {
            body.push_str("<table class=\"module-index\">\n<thead>\n<tr>");
            body.push_str("<th>Module</th><th>Description</th><th>Symbols</th>");
            body.push_str("</tr>\n</thead>\n<tbody>\n");
            for module in self.modules {
                let summary = module
                    .description
                    .as_ref()
                    .map(|d| d.text.lines().next().unwrap_or_default())
                    .unwrap_or_default();
                body.push_str(&format!(
                    "<tr><td><a href=\"{}\">{}</a></td><td>{}</td>\
                     <td class=\"count\">{}</td></tr>\n",
                    module.page(),
                    html_escape(&module.name),
                    html_escape(summary),
                    module.symbol_count()
                ));
            }
            body.push_str("</tbody>\n</table>\n");
        }

        self.page_shell(self.title, None, &body)
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn push_class(&self, out: &mut String, module: &ModuleDoc, class: &ClassDoc) {
        out.push_str(&format!(
            "<article class=\"decl\" id=\"class-{}\">\n",
            html_escape(&class.qualname)
        ));

        let bases = if class.bases.is_empty() {
            String::new()
        } else {
            format!("({})", class.bases.join(", "))
        };
        out.push_str(&format!(
            "<div class=\"decl-header\"><h3><code class=\"signature\">class {}{}</code></h3>\
             <span class=\"badge\">class</span></div>\n",
            html_escape(&class.name),
            html_escape(&bases)
        ));

        push_decorators(out, &class.decorators);
        push_description(out, class.description.as_ref());

        if !class.attributes.is_empty() {
            out.push_str("<ul class=\"facts\">\n");
            for attribute in &class.attributes {
                out.push_str(&format!("<li><code>{}</code></li>\n", html_escape(attribute)));
            }
            out.push_str("</ul>\n");
        }

        self.push_source(out, module, class.span);

        for method in &class.methods {
            self.push_function(out, module, method, "method");
        }
        for nested in &class.classes {
            self.push_class(out, module, nested);
        }

        out.push_str("</article>\n");
    }

    fn push_function(&self, out: &mut String, module: &ModuleDoc, func: &FunctionDoc, kind: &str) {
        let anchor_name = if kind == "method" { &func.qualname } else { &func.name };
        out.push_str(&format!(
            "<article class=\"decl\" id=\"{}-{}\">\n",
            kind,
            html_escape(anchor_name)
        ));

        out.push_str("<div class=\"decl-header\">");
        out.push_str(&format!(
            "<h4><code class=\"signature\">{}</code></h4>",
            html_escape(&format_signature(func))
        ));
        if func.is_async {
            out.push_str("<span class=\"badge\">async</span>");
        }
        out.push_str(&format!(
            "<span class=\"badge\">complexity {}</span>",
            func.complexity
        ));
        out.push_str("</div>\n");

        push_decorators(out, &func.decorators);
        push_description(out, func.description.as_ref());

        if !func.params.is_empty() {
            out.push_str("<ul class=\"params\">\n");
            for param in &func.params {
                out.push_str(&format!("<li><code>{}</code>", html_escape(&param.name)));
                if let Some(annotation) = &param.annotation {
                    out.push_str(&format!(
                        " <span class=\"annotation\">{}</span>",
                        html_escape(annotation)
                    ));
                }
                if let Some(default) = &param.default {
                    out.push_str(&format!(
                        " <span class=\"annotation\">= {}</span>",
                        html_escape(default)
                    ));
                }
                out.push_str("</li>\n");
            }
            out.push_str("</ul>\n");
        }

        if let Some(returns) = &func.returns {
            out.push_str(&format!(
                "<p class=\"returns\">Returns <code>{}</code></p>\n",
                html_escape(returns)
            ));
        }

        self.push_source(out, module, func.span);
        out.push_str("</article>\n");
    }

    fn push_source(&self, out: &mut String, module: &ModuleDoc, span: LineSpan) {
        let snippet = slice_lines(&module.source, span);
        if snippet.is_empty() {
            return;
        }
        out.push_str("<details class=\"source-listing\">\n<summary>Source</summary>\n");
        out.push_str(&format!("<ol class=\"source\" start=\"{}\">\n", span.start));
        for line in self.highlighter.highlight_lines(&snippet) {
            if line.is_empty() {
                out.push_str("<li> </li>\n");
            } else {
                out.push_str(&format!("<li>{}</li>\n", line));
            }
        }
        out.push_str("</ol>\n</details>\n");
    }

    // =========================================================================
    // Shell
    // =========================================================================

    fn page_shell(&self, page_title: &str, current: Option<&ModuleDoc>, body: &str) -> String {
        let mut output = String::new();

        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n");
        output.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        output.push_str(&format!(
            "<title>{} - {}</title>\n",
            html_escape(page_title),
            html_escape(self.title)
        ));
        output.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            STYLESHEET_FILE
        ));
        output.push_str("</head>\n<body>\n");

        // Top bar
        output.push_str("<header class=\"topbar\">\n");
        output.push_str(&format!(
            "<a class=\"brand\" href=\"{}\">{}</a>\n",
            INDEX_FILE,
            html_escape(self.title)
        ));
        output.push_str("<div class=\"searchbox\">\n");
        output.push_str(
            "<input id=\"search-input\" type=\"search\" placeholder=\"Search symbols...\" \
             autocomplete=\"off\">\n",
        );
        output.push_str("<div id=\"search-results\" hidden></div>\n");
        output.push_str("</div>\n");
        output.push_str("<button id=\"theme-toggle\" type=\"button\">Theme</button>\n");
        output.push_str("</header>\n");

        // Sidebar + content
        output.push_str("<div class=\"layout\">\n");
        output.push_str(&self.sidebar(current));
        output.push_str("<main class=\"content\">\n");
        output.push_str(body);
        output.push_str(&format!(
            "<div class=\"footer\">Generated by autodoc v{}</div>\n",
            env!("CARGO_PKG_VERSION")
        ));
        output.push_str("</main>\n</div>\n");

        output.push_str(&format!("<script src=\"{}\"></script>\n", SCRIPT_FILE));
        output.push_str("</body>\n</html>\n");
        output
    }

    fn sidebar(&self, current: Option<&ModuleDoc>) -> String {
        let mut nav = String::new();
        nav.push_str("<nav class=\"sidebar\">\n<h2>Modules</h2>\n<ul class=\"nav-tree\">\n");
        for module in self.modules {
            let marker = match current {
                Some(active) if active.path == module.path => " class=\"current\"",
                _ => "",
            };
            nav.push_str(&format!(
                "<li><a href=\"{}\"{}>{}</a></li>\n",
                module.page(),
                marker,
                html_escape(&module.name)
            ));
        }
        nav.push_str("</ul>\n");

        if let Some(module) = current {
            if module.symbol_count() > 0 {
                nav.push_str("<h2>On This Page</h2>\n<ul class=\"nav-tree\">\n");
                for class in &module.classes {
                    push_class_nav(&mut nav, class);
                }
                for func in &module.functions {
                    nav.push_str(&format!(
                        "<li><a href=\"#function-{0}\">{0}()</a></li>\n",
                        html_escape(&func.name)
                    ));
                }
                nav.push_str("</ul>\n");
            }
        }

        nav.push_str("</nav>\n");
        nav
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn push_class_nav(nav: &mut String, class: &ClassDoc) {
    nav.push_str(&format!(
        "<li><a href=\"#class-{}\">{}</a>\n",
        html_escape(&class.qualname),
        html_escape(&class.name)
    ));
    if !class.methods.is_empty() || !class.classes.is_empty() {
        nav.push_str("<ul class=\"nav-nested\">\n");
        for method in &class.methods {
            nav.push_str(&format!(
                "<li><a href=\"#method-{}\">{}()</a></li>\n",
                html_escape(&method.qualname),
                html_escape(&method.name)
            ));
        }
        for nested in &class.classes {
            push_class_nav(nav, nested);
        }
        nav.push_str("</ul>\n");
    }
    nav.push_str("</li>\n");
}

fn push_decorators(out: &mut String, decorators: &[String]) {
    if decorators.is_empty() {
        return;
    }
    out.push_str("<p class=\"decorators\">");
    for (i, decorator) in decorators.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("<code>@{}</code>", html_escape(decorator)));
    }
    out.push_str("</p>\n");
}

fn push_description(out: &mut String, description: Option<&Description>) {
    let Some(description) = description else {
        return;
    };
    match description.origin {
        DescriptionOrigin::Docstring => {
            out.push_str("<div class=\"description\">\n");
            out.push_str(&render_markdown(&description.text));
            out.push_str("</div>\n");
        }
        DescriptionOrigin::Inferred => {
            // templates carry backticked names, so these render as markdown too
            out.push_str("<div class=\"description inferred-text\">\n");
            out.push_str(&render_markdown(&description.text));
            out.push_str("<span class=\"inferred\">(inferred)</span>\n</div>\n");
        }
    }
}

/// Python `def` line reconstructed from the extracted pieces
fn format_signature(func: &FunctionDoc) -> String {
    let params: Vec<String> = func
        .params
        .iter()
        .map(|param| {
            let mut part = param.name.clone();
            if let Some(annotation) = &param.annotation {
                part.push_str(": ");
                part.push_str(annotation);
            }
            if let Some(default) = &param.default {
                part.push_str(if param.annotation.is_some() { " = " } else { "=" });
                part.push_str(default);
            }
            part
        })
        .collect();

    let mut signature = format!(
        "{}def {}({})",
        if func.is_async { "async " } else { "" },
        func.name,
        params.join(", ")
    );
    if let Some(returns) = &func.returns {
        signature.push_str(" -> ");
        signature.push_str(returns);
    }
    signature
}

/// 1-based inclusive line slice of the module source
fn slice_lines(source: &str, span: LineSpan) -> String {
    if span.start == 0 || span.end < span.start {
        return String::new();
    }
    source
        .lines()
        .skip(span.start - 1)
        .take(span.end - span.start + 1)
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Tests
// =============================================================================
