//! Identifier tokenization.
//!
//! Splits `snake_case`, `camelCase`, `PascalCase`, acronym runs, and digit
//! groups into lowercase word tokens: `getHTTPResponse2` becomes
//! `["get", "http", "response", "2"]`.

use std::sync::LazyLock;

use regex::Regex;

static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("Invalid regex"));
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("Invalid regex"));
static TOKEN_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+|[0-9]+").expect("Invalid regex"));

/// Lowercase word tokens of an identifier, in order. Empty for names with no
/// alphanumeric content.
pub fn tokenize(name: &str) -> Vec<String> {
    let spaced = ACRONYM_BOUNDARY.replace_all(name, "$1 $2");
    let spaced = CAMEL_BOUNDARY.replace_all(&spaced, "$1 $2");
    TOKEN_RUNS
        .find_iter(&spaced)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Tokens joined into a readable phrase (`DataAnalyzer` -> `data analyzer`).
/// Falls back to the raw name when nothing tokenizes.
pub fn readable(name: &str) -> String {
    let tokens = tokenize(name);
    if tokens.is_empty() {
        name.to_string()
    } else {
        tokens.join(" ")
    }
}
