//! Declaration extraction from Python sources.
//!
//! Parses one file with tree-sitter and builds the `ModuleDoc` tree:
//! modules own classes and top-level functions, classes own methods and
//! nested classes. Annotations are captured as the text written in source
//! and never evaluated. Declarations inside function bodies are
//! implementation detail and are not recorded.

use tree_sitter::Node;

use crate::analyzer::metrics;
use crate::types::{
    AutodocError, BodyHint, ClassDoc, Description, FunctionDoc, LineSpan, ModuleDoc, Param,
    Result, ReturnExpr,
};

pub struct PythonExtractor;

impl PythonExtractor {
    pub fn new() -> Result<Self> {
        // Validate that the language is available
        let _ = create_parser()?;
        Ok(Self)
    }

    /// Extract the declaration tree of one source file.
    ///
    /// `rel_path` identifies the module in errors and in the generated site;
    /// forward slashes are expected regardless of platform.
    pub fn extract(&self, rel_path: &str, content: &str) -> Result<ModuleDoc> {
        let mut parser = create_parser()?;
        let tree = parser.parse(content, None).ok_or_else(|| {
            AutodocError::parse(rel_path, 1, 1, "parser produced no syntax tree")
        })?;

        let root = tree.root_node();
        if root.has_error() {
            let (line, column, message) = first_syntax_error(root);
            return Err(AutodocError::parse(rel_path, line, column, message));
        }

        let mut module = ModuleDoc::new(rel_path, module_name(rel_path));
        module.source = content.to_string();
        module.description = block_docstring(root, content).map(Description::docstring);

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "import_statement" => collect_plain_import(child, content, &mut module.imports),
                "import_from_statement" => collect_from_import(child, content, &mut module.imports),
                "expression_statement" => {
                    collect_assignment_targets(child, content, &mut module.variables)
                }
                "function_definition" => {
                    module
                        .functions
                        .push(extract_function(child, child, content, "", false, Vec::new()));
                }
                "class_definition" => {
                    module
                        .classes
                        .push(extract_class(child, child, content, "", Vec::new()));
                }
                "decorated_definition" => {
                    let decorators = collect_decorators(child, content);
                    let Some(def) = child.child_by_field_name("definition") else {
                        continue;
                    };
                    match def.kind() {
                        "function_definition" => module.functions.push(extract_function(
                            def, child, content, "", false, decorators,
                        )),
                        "class_definition" => module
                            .classes
                            .push(extract_class(def, child, content, "", decorators)),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        Ok(module)
    }
}

// =============================================================================
// Declaration Extraction
// =============================================================================

fn extract_class(
    def: Node,
    outer: Node,
    content: &str,
    qual_prefix: &str,
    decorators: Vec<String>,
) -> ClassDoc {
    let name = field_text(def, "name", content);
    let qualname = qualify(qual_prefix, &name);
    let mut class = ClassDoc::new(name, qualname.clone(), node_span(outer));
    class.decorators = decorators;

    if let Some(superclasses) = def.child_by_field_name("superclasses") {
        let mut cursor = superclasses.walk();
        for base in superclasses.named_children(&mut cursor) {
            if base.kind() != "comment" {
                class.bases.push(get_node_text(base, content.as_bytes()).to_string());
            }
        }
    }

    let Some(body) = def.child_by_field_name("body") else {
        return class;
    };
    class.description = block_docstring(body, content).map(Description::docstring);

    let mut cursor = body.walk();
    for child in body.named_children(&mut cursor) {
        match child.kind() {
            "function_definition" => {
                class
                    .methods
                    .push(extract_function(child, child, content, &qualname, true, Vec::new()));
            }
            "class_definition" => {
                class
                    .classes
                    .push(extract_class(child, child, content, &qualname, Vec::new()));
            }
            "decorated_definition" => {
                let decorators = collect_decorators(child, content);
                let Some(def) = child.child_by_field_name("definition") else {
                    continue;
                };
                match def.kind() {
                    "function_definition" => class.methods.push(extract_function(
                        def, child, content, &qualname, true, decorators,
                    )),
                    "class_definition" => class
                        .classes
                        .push(extract_class(def, child, content, &qualname, decorators)),
                    _ => {}
                }
            }
            "expression_statement" => {
                collect_assignment_targets(child, content, &mut class.attributes)
            }
            _ => {}
        }
    }

    class
}

fn extract_function(
    def: Node,
    outer: Node,
    content: &str,
    qual_prefix: &str,
    is_method: bool,
    decorators: Vec<String>,
) -> FunctionDoc {
    let name = field_text(def, "name", content);
    let qualname = qualify(qual_prefix, &name);
    let mut func = FunctionDoc::new(name, qualname, node_span(outer));
    func.is_method = is_method;
    func.decorators = decorators;
    func.is_async = def.child(0).is_some_and(|c| c.kind() == "async");
    func.returns = def
        .child_by_field_name("return_type")
        .map(|n| get_node_text(n, content.as_bytes()).to_string());

    if let Some(parameters) = def.child_by_field_name("parameters") {
        func.params = extract_params(parameters, content);
    }

    if let Some(body) = def.child_by_field_name("body") {
        let docstring = block_docstring(body, content);
        let has_docstring = docstring.is_some();
        func.description = docstring.map(Description::docstring);
        func.body = body_hint(body, content, has_docstring);
    }
    func.complexity = metrics::cyclomatic(def);

    func
}

fn extract_params(parameters: Node, content: &str) -> Vec<Param> {
    let bytes = content.as_bytes();
    let mut params = Vec::new();

    let mut cursor = parameters.walk();
    for child in parameters.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => {
                let name = get_node_text(child, bytes);
                // Receivers carry no documentation value
                if name == "self" || name == "cls" {
                    continue;
                }
                params.push(Param::new(name));
            }
            "typed_parameter" => {
                let Some(inner) = child.named_child(0) else { continue };
                let name = get_node_text(inner, bytes);
                if name == "self" || name == "cls" {
                    continue;
                }
                let mut param = Param::new(name);
                if let Some(ty) = child.child_by_field_name("type") {
                    param = param.with_annotation(get_node_text(ty, bytes));
                }
                params.push(param);
            }
            "default_parameter" => {
                let mut param = Param::new(field_text(child, "name", content));
                if let Some(value) = child.child_by_field_name("value") {
                    param = param.with_default(get_node_text(value, bytes));
                }
                params.push(param);
            }
            "typed_default_parameter" => {
                let mut param = Param::new(field_text(child, "name", content));
                if let Some(ty) = child.child_by_field_name("type") {
                    param = param.with_annotation(get_node_text(ty, bytes));
                }
                if let Some(value) = child.child_by_field_name("value") {
                    param = param.with_default(get_node_text(value, bytes));
                }
                params.push(param);
            }
            // `*args` / `**kwargs` keep their star prefixes, like the
            // signatures readers see in source
            "list_splat_pattern" | "dictionary_splat_pattern" | "tuple_pattern" => {
                params.push(Param::new(get_node_text(child, bytes)));
            }
            // bare `*` and `/` separators are not parameters
            _ => {}
        }
    }

    params
}

fn collect_decorators(decorated: Node, content: &str) -> Vec<String> {
    let mut decorators = Vec::new();
    let mut cursor = decorated.walk();
    for child in decorated.named_children(&mut cursor) {
        if child.kind() == "decorator" {
            let text = get_node_text(child, content.as_bytes());
            decorators.push(text.strip_prefix('@').unwrap_or(text).trim().to_string());
        }
    }
    decorators
}

// =============================================================================
// Imports and Variables
// =============================================================================

fn collect_plain_import(stmt: Node, content: &str, imports: &mut Vec<String>) {
    let bytes = content.as_bytes();
    let mut cursor = stmt.walk();
    for child in stmt.named_children(&mut cursor) {
        match child.kind() {
            "dotted_name" => imports.push(get_node_text(child, bytes).to_string()),
            "aliased_import" => {
                if let Some(name) = child.child_by_field_name("name") {
                    imports.push(get_node_text(name, bytes).to_string());
                }
            }
            _ => {}
        }
    }
}

fn collect_from_import(stmt: Node, content: &str, imports: &mut Vec<String>) {
    let bytes = content.as_bytes();
    let Some(module) = stmt.child_by_field_name("module_name") else {
        return;
    };
    let module_text = get_node_text(module, bytes);

    let mut cursor = stmt.walk();
    for child in stmt.named_children(&mut cursor) {
        if child.id() == module.id() {
            continue;
        }
        match child.kind() {
            "dotted_name" => imports.push(format!("{}.{}", module_text, get_node_text(child, bytes))),
            "aliased_import" => {
                if let Some(name) = child.child_by_field_name("name") {
                    imports.push(format!("{}.{}", module_text, get_node_text(name, bytes)));
                }
            }
            "wildcard_import" => imports.push(format!("{}.*", module_text)),
            _ => {}
        }
    }
}

/// Record `NAME = ...` / `NAME: T = ...` targets of a top-of-block statement
fn collect_assignment_targets(expr_stmt: Node, content: &str, out: &mut Vec<String>) {
    let bytes = content.as_bytes();
    let Some(assign) = expr_stmt.named_child(0) else {
        return;
    };
    if assign.kind() != "assignment" {
        return;
    }
    let Some(left) = assign.child_by_field_name("left") else {
        return;
    };

    let mut push = |name: &str| {
        if !out.iter().any(|n| n == name) {
            out.push(name.to_string());
        }
    };

    match left.kind() {
        "identifier" => push(get_node_text(left, bytes)),
        "pattern_list" | "tuple_pattern" => {
            let mut cursor = left.walk();
            for target in left.named_children(&mut cursor) {
                if target.kind() == "identifier" {
                    push(get_node_text(target, bytes));
                }
            }
        }
        // attribute/subscript targets are state mutation, not declarations
        _ => {}
    }
}

// =============================================================================
// Docstrings
// =============================================================================

/// First-statement string of a module or block, cleaned
fn block_docstring(body: Node, content: &str) -> Option<String> {
    let mut cursor = body.walk();
    let first = body
        .named_children(&mut cursor)
        .find(|n| n.kind() != "comment")?;
    if first.kind() != "expression_statement" {
        return None;
    }
    let expr = first.named_child(0)?;
    if expr.kind() != "string" {
        return None;
    }
    let raw = get_node_text(expr, content.as_bytes());
    // `ast.get_docstring` only accepts plain str constants; a leading
    // f-string or bytes literal is an ordinary expression
    let rejected = raw
        .chars()
        .take_while(|c| *c != '"' && *c != '\'')
        .any(|c| matches!(c, 'f' | 'F' | 'b' | 'B'));
    if rejected {
        return None;
    }
    Some(clean_docstring(raw))
}

/// Strip quotes and common indentation the way `inspect.cleandoc` does:
/// the first line loses leading whitespace, later lines lose the smallest
/// indent any of them shares, and blank edge lines go away.
fn clean_docstring(raw: &str) -> String {
    let unprefixed = raw.trim_start_matches(|c: char| "rRuU".contains(c));
    let body = strip_quotes(unprefixed);

    // margin is measured in characters, matching Python string slicing
    let lines: Vec<&str> = body.split('\n').collect();
    let margin = lines[1..]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| indent_width(line))
        .min()
        .unwrap_or(0);

    let mut cleaned: Vec<String> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            cleaned.push(line.trim_start().to_string());
        } else {
            let cut = margin.min(indent_width(line));
            let cut_byte = line
                .char_indices()
                .nth(cut)
                .map_or(line.len(), |(offset, _)| offset);
            cleaned.push(line[cut_byte..].to_string());
        }
    }

    while cleaned.last().is_some_and(|l| l.trim().is_empty()) {
        cleaned.pop();
    }
    while cleaned.first().is_some_and(|l| l.trim().is_empty()) {
        cleaned.remove(0);
    }

    cleaned.join("\n")
}

/// Leading whitespace of a line, counted in characters
fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn strip_quotes(s: &str) -> &str {
    for quote in ["\"\"\"", "'''"] {
        if s.len() >= 6 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[3..s.len() - 3];
        }
    }
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

// =============================================================================
// Body Hints
// =============================================================================

fn body_hint(body: Node, content: &str, has_docstring: bool) -> BodyHint {
    let mut cursor = body.walk();
    let mut stmts: Vec<Node> = body
        .named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect();
    if has_docstring && !stmts.is_empty() {
        stmts.remove(0);
    }

    let return_expr = match stmts.as_slice() {
        [stmt] if stmt.kind() == "return_statement" => {
            stmt.named_child(0).map(|expr| classify_return(expr, content))
        }
        _ => None,
    };

    let mut calls = Vec::new();
    collect_calls(body, content, &mut calls);

    BodyHint {
        statements: stmts.len(),
        return_expr,
        calls,
    }
}

fn classify_return(expr: Node, content: &str) -> ReturnExpr {
    let bytes = content.as_bytes();
    match expr.kind() {
        "binary_operator" => {
            let left = expr.child_by_field_name("left");
            let op = expr.child_by_field_name("operator");
            let right = expr.child_by_field_name("right");
            match (left, op, right) {
                (Some(l), Some(o), Some(r)) => ReturnExpr::Binary {
                    left: get_node_text(l, bytes).to_string(),
                    op: get_node_text(o, bytes).to_string(),
                    right: get_node_text(r, bytes).to_string(),
                },
                _ => ReturnExpr::Other,
            }
        }
        "identifier" => ReturnExpr::Name(get_node_text(expr, bytes).to_string()),
        "call" => {
            let callee = expr
                .child_by_field_name("function")
                .map(|f| get_node_text(f, bytes).to_string())
                .unwrap_or_default();
            ReturnExpr::Call(callee)
        }
        _ => ReturnExpr::Other,
    }
}

fn collect_calls(node: Node, content: &str, calls: &mut Vec<String>) {
    let bytes = content.as_bytes();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "call"
            && let Some(callee) = child.child_by_field_name("function")
        {
            let name = match callee.kind() {
                "attribute" => callee
                    .child_by_field_name("attribute")
                    .map(|a| get_node_text(a, bytes).to_string()),
                "identifier" => Some(get_node_text(callee, bytes).to_string()),
                _ => None,
            };
            if let Some(name) = name
                && !calls.iter().any(|c| *c == name)
            {
                calls.push(name);
            }
        }
        collect_calls(child, content, calls);
    }
}

// =============================================================================
// Tree Helpers
// =============================================================================

fn create_parser() -> Result<tree_sitter::Parser> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| AutodocError::config(format!("Failed to load Python grammar: {}", e)))?;
    Ok(parser)
}

/// Extract text content from a tree-sitter node.
/// Returns empty string if extraction fails (with debug logging).
#[inline]
fn get_node_text<'a>(node: Node, content: &'a [u8]) -> &'a str {
    node.utf8_text(content).unwrap_or_else(|e| {
        tracing::debug!(
            "UTF-8 extraction failed at {}:{}-{}:{}: {}",
            node.start_position().row + 1,
            node.start_position().column,
            node.end_position().row + 1,
            node.end_position().column,
            e
        );
        ""
    })
}

fn field_text(node: Node, field: &str, content: &str) -> String {
    node.child_by_field_name(field)
        .map(|n| get_node_text(n, content.as_bytes()).to_string())
        .unwrap_or_default()
}

/// 1-based inclusive line span of a node
fn node_span(node: Node) -> LineSpan {
    LineSpan::new(node.start_position().row + 1, node.end_position().row + 1)
}

fn qualify(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

/// Dotted module name from a relative path: `pkg/util.py` -> `pkg.util`,
/// `pkg/__init__.py` -> `pkg`
fn module_name(rel_path: &str) -> String {
    let stem = rel_path.strip_suffix(".py").unwrap_or(rel_path);
    let dotted = stem.replace('/', ".");
    match dotted.strip_suffix(".__init__") {
        Some(pkg) => pkg.to_string(),
        None => dotted,
    }
}

/// Locate the first syntax error in a recovered parse tree.
/// Returns 1-based line and column with a short message.
fn first_syntax_error(root: Node) -> (usize, usize, String) {
    fn find(node: Node) -> Option<(usize, usize, String)> {
        if node.is_missing() {
            let pos = node.start_position();
            return Some((pos.row + 1, pos.column + 1, format!("missing {}", node.kind())));
        }
        if node.is_error() {
            let pos = node.start_position();
            return Some((pos.row + 1, pos.column + 1, "syntax error".to_string()));
        }
        if !node.has_error() {
            return None;
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if let Some(found) = find(child) {
                return Some(found);
            }
        }
        None
    }

    find(root).unwrap_or_else(|| (1, 1, "syntax error".to_string()))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> ModuleDoc {
        PythonExtractor::new()
            .unwrap()
            .extract("sample.py", source)
            .unwrap()
    }

    #[test]
    fn test_extracts_class_with_documented_and_bare_methods() {
        let source = "\
class Calculator:
    def add(self, a: float, b: float) -> float:
        \"\"\"Add two numbers.\"\"\"
        return a + b

    def multiply(self, a: float, b: float) -> float:
        return a * b
";
        let module = extract(source);
        assert_eq!(module.classes.len(), 1);

        let class = &module.classes[0];
        assert_eq!(class.name, "Calculator");
        assert_eq!(class.methods.len(), 2);

        let add = &class.methods[0];
        assert_eq!(add.name, "add");
        assert_eq!(add.qualname, "Calculator.add");
        assert_eq!(
            add.params,
            vec![
                Param::new("a").with_annotation("float"),
                Param::new("b").with_annotation("float"),
            ]
        );
        assert_eq!(add.returns.as_deref(), Some("float"));
        assert_eq!(
            add.description,
            Some(Description::docstring("Add two numbers."))
        );
        assert_eq!(add.span, LineSpan::new(2, 4));

        let multiply = &class.methods[1];
        assert!(multiply.description.is_none());
        assert_eq!(
            multiply.body.return_expr,
            Some(ReturnExpr::Binary {
                left: "a".to_string(),
                op: "*".to_string(),
                right: "b".to_string(),
            })
        );
    }

    #[test]
    fn test_module_docstring_imports_and_variables() {
        let source = "\
\"\"\"Geometry helpers.\"\"\"
import os
import sys as system
from typing import List, Dict
from .util import helper

PI = 3.14159
X, Y = 0, 1
";
        let module = extract(source);
        assert_eq!(
            module.description,
            Some(Description::docstring("Geometry helpers."))
        );
        assert_eq!(
            module.imports,
            vec!["os", "sys", "typing.List", "typing.Dict", ".util.helper"]
        );
        assert_eq!(module.variables, vec!["PI", "X", "Y"]);
    }

    #[test]
    fn test_nested_class_qualnames() {
        let source = "\
class Outer:
    class Inner:
        def size(self):
            return 1
";
        let module = extract(source);
        let outer = &module.classes[0];
        assert_eq!(outer.classes.len(), 1);
        let inner = &outer.classes[0];
        assert_eq!(inner.qualname, "Outer.Inner");
        assert_eq!(inner.methods[0].qualname, "Outer.Inner.size");
        assert!(inner.methods[0].is_method);
    }

    #[test]
    fn test_decorators_async_and_bases() {
        let source = "\
import functools

@functools.cache
async def fetch(url: str):
    return url

class Circle(Shape, metaclass=Meta):
    @property
    def area(self):
        return 1.0
";
        let module = extract(source);

        let fetch = &module.functions[0];
        assert!(fetch.is_async);
        assert_eq!(fetch.decorators, vec!["functools.cache"]);
        // decorated span starts at the decorator line
        assert_eq!(fetch.span.start, 3);

        let circle = &module.classes[0];
        assert_eq!(circle.bases, vec!["Shape", "metaclass=Meta"]);
        assert_eq!(circle.methods[0].decorators, vec!["property"]);
    }

    #[test]
    fn test_parameter_shapes() {
        let source = "\
def call(name, count: int = 3, *args, flag=False, **kwargs):
    pass
";
        let module = extract(source);
        let params = &module.functions[0].params;
        assert_eq!(params[0], Param::new("name"));
        assert_eq!(
            params[1],
            Param::new("count").with_annotation("int").with_default("3")
        );
        assert_eq!(params[2], Param::new("*args"));
        assert_eq!(params[3], Param::new("flag").with_default("False"));
        assert_eq!(params[4], Param::new("**kwargs"));
    }

    #[test]
    fn test_class_attributes_recorded() {
        let source = "\
class Config:
    retries = 3
    timeout: float = 1.5

    def reset(self):
        self.retries = 0
";
        let module = extract(source);
        let class = &module.classes[0];
        assert_eq!(class.attributes, vec!["retries", "timeout"]);
    }

    #[test]
    fn test_syntax_error_reports_location() {
        let err = PythonExtractor::new()
            .unwrap()
            .extract("broken.py", "def broken(:\n    pass\n")
            .unwrap_err();
        match err {
            AutodocError::Parse { path, line, .. } => {
                assert_eq!(path, "broken.py");
                assert_eq!(line, 1);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_function_nested_in_function_not_documented() {
        let source = "\
def outer():
    def inner():
        return 1
    return inner
";
        let module = extract(source);
        assert_eq!(module.functions.len(), 1);
        assert_eq!(module.functions[0].name, "outer");
    }

    #[test]
    fn test_body_hint_collects_calls() {
        let source = "\
def process(data):
    cleaned = normalize(data)
    save(cleaned)
    return self.report(cleaned)
";
        let module = extract(source);
        let hint = &module.functions[0].body;
        assert_eq!(hint.statements, 3);
        assert_eq!(hint.calls, vec!["normalize", "save", "report"]);
        assert!(hint.return_expr.is_none());
    }

    #[test]
    fn test_clean_docstring_dedents_like_cleandoc() {
        let raw = "\"\"\"Summary line.\n\n        Indented body\n            deeper\n        \"\"\"";
        assert_eq!(
            clean_docstring(raw),
            "Summary line.\n\nIndented body\n    deeper"
        );
        assert_eq!(clean_docstring("'one liner'"), "one liner");
        assert_eq!(clean_docstring("r'''raw doc'''"), "raw doc");
    }

    #[test]
    fn test_docstring_unicode_indent_dedents_by_character() {
        // U+2003 EM SPACE: one character of indent, three bytes
        let source = "\
def wide():
    \"\"\"Summary.
\u{2003}wide indent
  narrow
    \"\"\"
    return 1
";
        let module = extract(source);
        assert_eq!(
            module.functions[0].description,
            Some(Description::docstring("Summary.\nwide indent\n narrow"))
        );
    }

    #[test]
    fn test_fstring_and_bytes_literals_are_not_docstrings() {
        let module = extract("def greet(name):\n    f\"\"\"Hello {name}.\"\"\"\n    return name\n");
        assert!(module.functions[0].description.is_none());

        let module = extract("def blob():\n    b'raw bytes'\n    return 1\n");
        assert!(module.functions[0].description.is_none());

        // u and r prefixes still produce str constants
        let module = extract("def legacy():\n    u\"\"\"Legacy text.\"\"\"\n");
        assert_eq!(
            module.functions[0].description,
            Some(Description::docstring("Legacy text."))
        );
    }

    #[test]
    fn test_module_name_from_path() {
        assert_eq!(module_name("pkg/util.py"), "pkg.util");
        assert_eq!(module_name("pkg/__init__.py"), "pkg");
        assert_eq!(module_name("app.py"), "app");
    }

    #[test]
    fn test_empty_module() {
        let module = extract("");
        assert!(module.classes.is_empty());
        assert!(module.functions.is_empty());
        assert!(module.description.is_none());
    }
}
