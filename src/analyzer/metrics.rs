//! Cyclomatic complexity.
//!
//! Counts branch points in a function body: one per `if`/`elif`, ternary,
//! loop, comprehension clause, `except` handler, `match` case, and boolean
//! operator, plus one for the function itself. Nested function and class
//! definitions are scored on their own and excluded from the enclosing
//! count.

use tree_sitter::Node;

const DECISION_KINDS: &[&str] = &[
    "if_statement",
    "elif_clause",
    "conditional_expression",
    "for_statement",
    "while_statement",
    "except_clause",
    "case_clause",
    "boolean_operator",
    "for_in_clause",
    "if_clause",
];

/// Complexity of one `function_definition` node
pub fn cyclomatic(def: Node) -> u32 {
    match def.child_by_field_name("body") {
        Some(body) => 1 + count_decisions(body),
        None => 1,
    }
}

fn count_decisions(node: Node) -> u32 {
    let mut count = 0;
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "function_definition" | "class_definition" | "decorated_definition" => continue,
            kind if DECISION_KINDS.contains(&kind) => count += 1 + count_decisions(child),
            _ => count += count_decisions(child),
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complexity_of(source: &str) -> u32 {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(source, None).unwrap();
        let root = tree.root_node();
        let mut cursor = root.walk();
        let def = root
            .named_children(&mut cursor)
            .find(|n| n.kind() == "function_definition")
            .expect("snippet must define a function");
        cyclomatic(def)
    }

    #[test]
    fn test_straight_line_body_is_one() {
        assert_eq!(complexity_of("def f():\n    return 1\n"), 1);
    }

    #[test]
    fn test_branches_and_loops_count() {
        let source = "\
def classify(n):
    if n < 0:
        return 'neg'
    elif n == 0:
        return 'zero'
    for i in range(n):
        while i > 0:
            i -= 1
    return 'pos'
";
        // if + elif + for + while
        assert_eq!(complexity_of(source), 5);
    }

    #[test]
    fn test_boolean_operators_and_ternary() {
        let source = "\
def check(a, b):
    return 'yes' if a and b else 'no'
";
        // ternary + `and`
        assert_eq!(complexity_of(source), 3);
    }

    #[test]
    fn test_except_and_comprehension_clauses() {
        let source = "\
def load(paths):
    try:
        return [p for p in paths if p]
    except OSError:
        return []
";
        // except + comprehension for + comprehension if
        assert_eq!(complexity_of(source), 4);
    }

    #[test]
    fn test_nested_function_excluded() {
        let source = "\
def outer(items):
    def inner(x):
        if x:
            return 1
        return 0
    return inner
";
        assert_eq!(complexity_of(source), 1);
    }
}
