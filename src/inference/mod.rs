//! Heuristic description synthesis.
//!
//! Every declaration without a docstring gets a one-line description derived
//! from its name, parameters, and body shape. Rules are tried in priority
//! order and the generic template closes the list, so synthesis always
//! succeeds and never touches anything outside the declaration.

pub mod tokens;

use crate::constants::inference::{MAX_LISTED_NAMES, MAX_LISTED_PARAMS};
use crate::types::{ClassDoc, Description, FunctionDoc, ModuleDoc, ReturnExpr};

// =============================================================================
// Rule Table
// =============================================================================

type Rule = fn(&FunctionDoc, Option<&str>) -> Option<String>;

/// Function rules, most specific first. The generic fallback is not listed;
/// it runs when every rule declines.
const RULES: &[Rule] = &[
    constructor_rule,
    dunder_rule,
    arithmetic_rule,
    predicate_rule,
    action_verb_rule,
];

/// Leading name token to verb phrase for templated descriptions
const VERB_PHRASES: &[(&str, &str)] = &[
    ("get", "Retrieves"),
    ("fetch", "Retrieves"),
    ("find", "Retrieves"),
    ("load", "Loads"),
    ("read", "Reads"),
    ("set", "Sets"),
    ("update", "Updates"),
    ("calc", "Computes"),
    ("calculate", "Computes"),
    ("compute", "Computes"),
    ("create", "Creates"),
    ("make", "Creates"),
    ("build", "Builds"),
    ("generate", "Generates"),
    ("add", "Adds"),
    ("append", "Appends"),
    ("insert", "Inserts"),
    ("remove", "Removes"),
    ("delete", "Deletes"),
    ("clear", "Clears"),
    ("parse", "Parses"),
    ("validate", "Validates"),
    ("check", "Checks"),
    ("verify", "Verifies"),
    ("process", "Processes"),
    ("handle", "Handles"),
    ("run", "Runs"),
    ("execute", "Executes"),
    ("render", "Renders"),
    ("format", "Formats"),
    ("convert", "Converts"),
    ("write", "Writes"),
    ("save", "Saves"),
    ("store", "Stores"),
    ("send", "Sends"),
    ("open", "Opens"),
    ("close", "Closes"),
    ("reset", "Resets"),
    ("init", "Initializes"),
    ("setup", "Sets up"),
];

// =============================================================================
// Entry Points
// =============================================================================

/// Fill in every missing description in a module tree. Docstrings already
/// recorded stay untouched; afterwards each declaration has exactly one
/// description.
pub fn ensure_descriptions(module: &mut ModuleDoc) {
    for func in &mut module.functions {
        if func.description.is_none() {
            func.description = Some(Description::inferred(describe_function(func, None)));
        }
    }
    for class in &mut module.classes {
        fill_class(class);
    }
    if module.description.is_none() {
        module.description = Some(Description::inferred(describe_module(module)));
    }
}

fn fill_class(class: &mut ClassDoc) {
    let class_name = class.name.clone();
    for method in &mut class.methods {
        if method.description.is_none() {
            method.description = Some(Description::inferred(describe_function(
                method,
                Some(&class_name),
            )));
        }
    }
    for nested in &mut class.classes {
        fill_class(nested);
    }
    if class.description.is_none() {
        class.description = Some(Description::inferred(describe_class(class)));
    }
}

/// One-line description of a function or method. Never empty.
pub fn describe_function(func: &FunctionDoc, class_name: Option<&str>) -> String {
    for rule in RULES {
        if let Some(text) = rule(func, class_name) {
            return text;
        }
    }
    fallback_description(func)
}

/// One-line description of a class from its shape and method names
pub fn describe_class(class: &ClassDoc) -> String {
    let readable = tokens::readable(&class.name);
    let methods = class.methods.len();
    let attributes = class.attributes.len();

    let mut text = match (methods, attributes) {
        (0, 0) => format!("Represents {} {}.", article(&readable), readable),
        (m, 0) => format!(
            "Represents {} {} with {}.",
            article(&readable),
            readable,
            count_noun(m, "method", "methods")
        ),
        (0, a) => format!(
            "Represents {} {} with {}.",
            article(&readable),
            readable,
            count_noun(a, "attribute", "attributes")
        ),
        (m, a) => format!(
            "Represents {} {} with {} and {}.",
            article(&readable),
            readable,
            count_noun(m, "method", "methods"),
            count_noun(a, "attribute", "attributes")
        ),
    };

    let traits = method_traits(class);
    if !traits.is_empty() {
        text.push_str(&format!(" It {}.", join_phrases(&traits)));
    }
    text
}

/// One-line summary of a module's declarations
pub fn describe_module(module: &ModuleDoc) -> String {
    let classes: Vec<&str> = module.classes.iter().map(|c| c.name.as_str()).collect();
    let functions: Vec<&str> = module.functions.iter().map(|f| f.name.as_str()).collect();

    match (classes.len(), functions.len()) {
        (0, 0) => {
            let imports = module.imports.len();
            let variables = module.variables.len();
            match (imports, variables) {
                (0, 0) => "An empty module.".to_string(),
                (i, 0) => format!("Declares {}.", count_noun(i, "import", "imports")),
                (0, v) => format!(
                    "Declares {}.",
                    count_noun(v, "module-level variable", "module-level variables")
                ),
                (i, v) => format!(
                    "Declares {} and {}.",
                    count_noun(i, "import", "imports"),
                    count_noun(v, "module-level variable", "module-level variables")
                ),
            }
        }
        (c, 0) => format!(
            "Defines {} ({}).",
            count_noun(c, "class", "classes"),
            name_list(&classes)
        ),
        (0, f) => format!(
            "Defines {} ({}).",
            count_noun(f, "function", "functions"),
            name_list(&functions)
        ),
        (c, f) => format!(
            "Defines {} ({}) and {} ({}).",
            count_noun(c, "class", "classes"),
            name_list(&classes),
            count_noun(f, "function", "functions"),
            name_list(&functions)
        ),
    }
}

// =============================================================================
// Function Rules
// =============================================================================

fn constructor_rule(func: &FunctionDoc, class_name: Option<&str>) -> Option<String> {
    if func.name != "__init__" {
        return None;
    }
    let subject = match class_name {
        Some(name) => format!("a new {} instance", name),
        None => "the instance".to_string(),
    };
    let names = func.param_names();
    if names.is_empty() {
        Some(format!("Initializes {}.", subject))
    } else {
        Some(format!(
            "Initializes {} with {}.",
            subject,
            backticked_list(&names, MAX_LISTED_PARAMS)
        ))
    }
}

fn dunder_rule(func: &FunctionDoc, _class_name: Option<&str>) -> Option<String> {
    let name = func.name.as_str();
    if name.len() > 4 && name.starts_with("__") && name.ends_with("__") {
        Some(format!("Implements the `{}` special method.", name))
    } else {
        None
    }
}

/// Single `return a <op> b` over two parameters
fn arithmetic_rule(func: &FunctionDoc, _class_name: Option<&str>) -> Option<String> {
    let Some(ReturnExpr::Binary { left, op, right }) = &func.body.return_expr else {
        return None;
    };
    let names = func.param_names();
    if !names.contains(&left.as_str()) || !names.contains(&right.as_str()) {
        return None;
    }
    let noun = match op.as_str() {
        "+" => "sum",
        "-" => "difference",
        "*" => "product",
        "/" => "quotient",
        "//" => "floor quotient",
        "%" => "remainder",
        "**" => "power",
        "@" => "matrix product",
        _ => return None,
    };
    Some(format!("Returns the {} of `{}` and `{}`.", noun, left, right))
}

fn predicate_rule(func: &FunctionDoc, _class_name: Option<&str>) -> Option<String> {
    let parts = tokens::tokenize(&func.name);
    let first = parts.first()?;
    if !["is", "has", "can", "should"].contains(&first.as_str()) {
        return None;
    }
    let rest = parts[1..].join(" ");
    if rest.is_empty() {
        return None;
    }
    Some(format!("Checks whether it {} {}.", first, rest))
}

fn action_verb_rule(func: &FunctionDoc, _class_name: Option<&str>) -> Option<String> {
    let parts = tokens::tokenize(&func.name);
    let first = parts.first()?;
    let verb = VERB_PHRASES
        .iter()
        .find(|(token, _)| token == first)
        .map(|(_, verb)| *verb)?;

    let rest = parts[1..].join(" ");
    if !rest.is_empty() {
        return Some(format!("{} the {}.", verb, rest));
    }
    let names = func.param_names();
    if names.is_empty() {
        return None;
    }
    Some(format!(
        "{} {}.",
        verb,
        backticked_list(&names, MAX_LISTED_PARAMS)
    ))
}

fn fallback_description(func: &FunctionDoc) -> String {
    let names = func.param_names();
    if names.is_empty() {
        "Performs an operation.".to_string()
    } else {
        format!(
            "Performs an operation involving {}.",
            backticked_list(&names, MAX_LISTED_PARAMS)
        )
    }
}

// =============================================================================
// Phrase Helpers
// =============================================================================

/// Functionality phrases drawn from method name prefixes, in a fixed order
fn method_traits(class: &ClassDoc) -> Vec<&'static str> {
    let firsts: Vec<String> = class
        .methods
        .iter()
        .filter_map(|m| tokens::tokenize(&m.name).into_iter().next())
        .collect();
    let any_of = |prefixes: &[&str]| firsts.iter().any(|f| prefixes.contains(&f.as_str()));

    let mut traits = Vec::new();
    if any_of(&["get", "fetch", "find", "load", "read"]) {
        traits.push("retrieves data");
    }
    if any_of(&["set", "update", "write", "save", "store"]) {
        traits.push("modifies data");
    }
    if any_of(&["is", "has", "can", "should", "check", "validate", "verify"]) {
        traits.push("checks conditions");
    }
    if any_of(&["calc", "calculate", "compute"]) {
        traits.push("performs calculations");
    }
    traits
}

fn backticked_list(names: &[&str], limit: usize) -> String {
    let shown: Vec<String> = names.iter().take(limit).map(|n| format!("`{}`", n)).collect();
    let overflow = names.len().saturating_sub(limit);
    if overflow > 0 {
        format!("{} and {} more", shown.join(", "), overflow)
    } else {
        join_phrases(&shown)
    }
}

fn join_phrases<S: AsRef<str>>(phrases: &[S]) -> String {
    match phrases.len() {
        0 => String::new(),
        1 => phrases[0].as_ref().to_string(),
        n => format!(
            "{} and {}",
            phrases[..n - 1]
                .iter()
                .map(|p| p.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
            phrases[n - 1].as_ref()
        ),
    }
}

fn name_list(names: &[&str]) -> String {
    if names.len() > MAX_LISTED_NAMES {
        format!("{}, ...", names[..MAX_LISTED_NAMES].join(", "))
    } else {
        names.join(", ")
    }
}

fn count_noun(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {}", one)
    } else {
        format!("{} {}", n, many)
    }
}

fn article(word: &str) -> &'static str {
    match word.chars().next() {
        Some(c) if "aeiou".contains(c.to_ascii_lowercase()) => "an",
        _ => "a",
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineSpan, Param};
    use proptest::prelude::*;

    fn func(name: &str) -> FunctionDoc {
        FunctionDoc::new(name, name, LineSpan::new(1, 2))
    }

    fn func_with_params(name: &str, params: &[&str]) -> FunctionDoc {
        let mut f = func(name);
        f.params = params.iter().map(|name| Param::new(*name)).collect();
        f
    }

    #[test]
    fn test_arithmetic_rule_beats_fallback() {
        let mut multiply = func_with_params("multiply", &["a", "b"]);
        multiply.body.return_expr = Some(ReturnExpr::Binary {
            left: "a".to_string(),
            op: "*".to_string(),
            right: "b".to_string(),
        });
        let text = describe_function(&multiply, Some("Calculator"));
        assert_eq!(text, "Returns the product of `a` and `b`.");
        assert!(!text.starts_with("Performs an operation"));
    }

    #[test]
    fn test_arithmetic_rule_requires_both_params() {
        let mut f = func_with_params("combine", &["a"]);
        f.body.return_expr = Some(ReturnExpr::Binary {
            left: "a".to_string(),
            op: "+".to_string(),
            right: "offset".to_string(),
        });
        assert_eq!(
            describe_function(&f, None),
            "Performs an operation involving `a`."
        );
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(
            describe_function(&func_with_params("frobnicate", &["x", "y"]), None),
            "Performs an operation involving `x` and `y`."
        );
        assert_eq!(describe_function(&func("frobnicate"), None), "Performs an operation.");
    }

    #[test]
    fn test_constructor_rule() {
        let init = func_with_params("__init__", &["name", "radius"]);
        assert_eq!(
            describe_function(&init, Some("Circle")),
            "Initializes a new Circle instance with `name` and `radius`."
        );
        assert_eq!(
            describe_function(&func("__init__"), None),
            "Initializes the instance."
        );
    }

    #[test]
    fn test_dunder_rule() {
        assert_eq!(
            describe_function(&func("__repr__"), Some("Circle")),
            "Implements the `__repr__` special method."
        );
    }

    #[test]
    fn test_predicate_and_verb_rules() {
        assert_eq!(
            describe_function(&func("is_valid"), None),
            "Checks whether it is valid."
        );
        assert_eq!(
            describe_function(&func("has_children"), None),
            "Checks whether it has children."
        );
        assert_eq!(
            describe_function(&func("get_user_name"), None),
            "Retrieves the user name."
        );
        assert_eq!(
            describe_function(&func("calculate_area"), None),
            "Computes the area."
        );
        assert_eq!(
            describe_function(&func_with_params("process", &["data"]), None),
            "Processes `data`."
        );
    }

    #[test]
    fn test_describe_class_counts_and_traits() {
        let mut class = ClassDoc::new("DataAnalyzer", "DataAnalyzer", LineSpan::new(1, 10));
        class.methods.push(func("get_rows"));
        class.methods.push(func("is_ready"));
        class.attributes.push("rows".to_string());
        assert_eq!(
            describe_class(&class),
            "Represents a data analyzer with 2 methods and 1 attribute. \
             It retrieves data and checks conditions."
        );
    }

    #[test]
    fn test_describe_class_bare() {
        let class = ClassDoc::new("Entry", "Entry", LineSpan::new(1, 2));
        assert_eq!(describe_class(&class), "Represents an entry.");
    }

    #[test]
    fn test_describe_module_variants() {
        let mut module = ModuleDoc::new("shapes.py", "shapes");
        module.classes.push(ClassDoc::new("Shape", "Shape", LineSpan::new(1, 4)));
        module.functions.push(func("main"));
        assert_eq!(
            describe_module(&module),
            "Defines 1 class (Shape) and 1 function (main)."
        );

        let mut bare = ModuleDoc::new("consts.py", "consts");
        bare.imports.push("os".to_string());
        bare.variables.push("PI".to_string());
        assert_eq!(
            describe_module(&bare),
            "Declares 1 import and 1 module-level variable."
        );

        assert_eq!(
            describe_module(&ModuleDoc::new("empty.py", "empty")),
            "An empty module."
        );
    }

    #[test]
    fn test_ensure_descriptions_fills_everything() {
        let mut module = ModuleDoc::new("m.py", "m");
        let mut class = ClassDoc::new("Widget", "Widget", LineSpan::new(1, 8));
        let mut documented = func("draw");
        documented.description = Some(Description::docstring("Draw the widget."));
        class.methods.push(documented);
        class.methods.push(func("resize"));
        module.classes.push(class);
        module.functions.push(func("main"));

        ensure_descriptions(&mut module);

        let class = &module.classes[0];
        assert_eq!(
            class.methods[0].description,
            Some(Description::docstring("Draw the widget."))
        );
        assert!(class.methods[1].description.as_ref().unwrap().is_inferred());
        assert!(class.description.as_ref().unwrap().is_inferred());
        assert!(module.functions[0].description.as_ref().unwrap().is_inferred());
        assert!(module.description.as_ref().unwrap().is_inferred());
    }

    proptest! {
        #[test]
        fn prop_description_never_empty(name in prop::string::string_regex("\\PC*").unwrap()) {
            let text = describe_function(&func(&name), None);
            prop_assert!(!text.is_empty());
            prop_assert!(text.ends_with('.'));
        }

        #[test]
        fn prop_identifier_descriptions_end_with_period(
            name in prop::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,24}").unwrap(),
            params in prop::collection::vec("[a-z][a-z0-9_]{0,8}", 0..4),
        ) {
            let refs: Vec<&str> = params.iter().map(String::as_str).collect();
            let text = describe_function(&func_with_params(&name, &refs), None);
            prop_assert!(!text.is_empty());
            prop_assert!(text.ends_with('.'));
        }
    }
}
