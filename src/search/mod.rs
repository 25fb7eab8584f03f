//! Symbol lookup table backing the client-side search widget.
//!
//! One entry per documented symbol, in page order: the module itself, then
//! classes with their methods, then top-level functions. The table
//! serializes to `search-index.json`; [`SearchIndex::search`] applies the
//! same matching the emitted script uses, so ranking is testable here.

use serde::Serialize;

use crate::constants::search::{MAX_RESULTS, MIN_QUERY_LEN};
use crate::types::{ClassDoc, ModuleDoc};

// =============================================================================
// Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Module,
    Class,
    /// Methods are indexed as functions; the anchor tells them apart
    Function,
}

/// One searchable symbol with enough context to link straight to it
#[derive(Debug, Clone, Serialize)]
pub struct SearchEntry {
    /// Source file the symbol lives in, relative to the analyzed root
    pub file: String,
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    pub name: String,
    /// Generated page holding the symbol
    pub page: String,
    /// In-page anchor, empty for the module entry itself
    pub anchor: String,
}

#[derive(Debug, Default)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

// =============================================================================
// Implementation
// =============================================================================

impl SearchIndex {
    /// Collect every symbol from the documented modules
    pub fn build(modules: &[ModuleDoc]) -> Self {
        let mut entries = Vec::new();
        for module in modules {
            let page = module.page();
            entries.push(SearchEntry {
                file: module.path.clone(),
                kind: SymbolKind::Module,
                name: module.name.clone(),
                page: page.clone(),
                anchor: String::new(),
            });
            for class in &module.classes {
                collect_class(&mut entries, &module.path, &page, class);
            }
            for func in &module.functions {
                entries.push(SearchEntry {
                    file: module.path.clone(),
                    kind: SymbolKind::Function,
                    name: func.name.clone(),
                    page: page.clone(),
                    anchor: format!("function-{}", func.name),
                });
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring match over symbol names. Prefix matches
    /// rank first; within each group entries keep table order. Queries
    /// shorter than the widget minimum return nothing.
    pub fn search(&self, query: &str) -> Vec<&SearchEntry> {
        let needle = query.trim().to_lowercase();
        if needle.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }
        let mut matches = Vec::new();
        let mut partial = Vec::new();
        for entry in &self.entries {
            let name = entry.name.to_lowercase();
            if name.starts_with(&needle) {
                matches.push(entry);
            } else if name.contains(&needle) {
                partial.push(entry);
            }
        }
        matches.extend(partial);
        matches.truncate(MAX_RESULTS);
        matches
    }

    /// Serialize the table for `search-index.json`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}

fn collect_class(entries: &mut Vec<SearchEntry>, file: &str, page: &str, class: &ClassDoc) {
    entries.push(SearchEntry {
        file: file.to_string(),
        kind: SymbolKind::Class,
        name: class.name.clone(),
        page: page.to_string(),
        anchor: format!("class-{}", class.qualname),
    });
    for method in &class.methods {
        entries.push(SearchEntry {
            file: file.to_string(),
            kind: SymbolKind::Function,
            name: method.name.clone(),
            page: page.to_string(),
            anchor: format!("method-{}", method.qualname),
        });
    }
    for nested in &class.classes {
        collect_class(entries, file, page, nested);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FunctionDoc, LineSpan};

    fn sample_modules() -> Vec<ModuleDoc> {
        let mut shapes = ModuleDoc::new("geo/shapes.py", "geo.shapes");
        let mut circle = ClassDoc::new("Circle", "Circle", LineSpan::new(1, 12));
        circle
            .methods
            .push(FunctionDoc::new("area", "Circle.area", LineSpan::new(4, 6)));
        circle.methods.push(FunctionDoc::new(
            "compute_area",
            "Circle.compute_area",
            LineSpan::new(8, 10),
        ));
        shapes.classes.push(circle);
        shapes
            .functions
            .push(FunctionDoc::new("make_circle", "make_circle", LineSpan::new(14, 16)));

        let mut util = ModuleDoc::new("util.py", "util");
        util.functions
            .push(FunctionDoc::new("area_of", "area_of", LineSpan::new(1, 3)));
        vec![shapes, util]
    }

    #[test]
    fn test_build_walks_the_whole_tree() {
        let index = SearchIndex::build(&sample_modules());
        assert_eq!(index.len(), 7);

        let circle = &index.entries()[1];
        assert_eq!(circle.kind, SymbolKind::Class);
        assert_eq!(circle.anchor, "class-Circle");
        assert_eq!(circle.page, "geo-shapes.html");

        let method = &index.entries()[2];
        assert_eq!(method.kind, SymbolKind::Function);
        assert_eq!(method.anchor, "method-Circle.area");
    }

    #[test]
    fn test_prefix_matches_rank_before_substring_matches() {
        let index = SearchIndex::build(&sample_modules());
        let hits = index.search("area");
        let names: Vec<&str> = hits.iter().map(|e| e.name.as_str()).collect();
        // compute_area sits earlier in the table but only matches as a
        // substring, so both prefix matches come first
        assert_eq!(names, vec!["area", "area_of", "compute_area"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let index = SearchIndex::build(&sample_modules());
        let hits = index.search("CIRC");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Circle");
        assert_eq!(hits[1].name, "make_circle");
    }

    #[test]
    fn test_short_queries_return_nothing() {
        let index = SearchIndex::build(&sample_modules());
        assert!(index.search("a").is_empty());
        assert!(index.search(" a ").is_empty());
        assert!(!index.search("ar").is_empty());
    }

    #[test]
    fn test_results_are_capped() {
        let mut module = ModuleDoc::new("big.py", "big");
        for i in 0..MAX_RESULTS + 20 {
            module.functions.push(FunctionDoc::new(
                format!("item_{i:03}"),
                format!("item_{i:03}"),
                LineSpan::new(1, 2),
            ));
        }
        let index = SearchIndex::build(&[module]);
        assert_eq!(index.search("item").len(), MAX_RESULTS);
    }

    #[test]
    fn test_json_shape() {
        let index = SearchIndex::build(&sample_modules());
        let json = index.to_json().unwrap();
        assert!(json.contains("\"type\": \"class\""));
        assert!(json.contains("\"file\": \"geo/shapes.py\""));
        assert!(json.contains("\"anchor\": \"function-make_circle\""));
        assert!(json.trim_start().starts_with('['));
    }
}
