//! HTML output stage.
//!
//! Takes fully described modules and writes the whole site: one page per
//! module, the index, the search table, and the static assets. Every file is
//! assembled in memory first and written once, so a failed write never
//! leaves a half-page behind, and identical input produces byte-identical
//! output.

pub mod assets;
pub mod highlight;
pub mod markdown;
pub mod page;

pub use highlight::SourceHighlighter;
pub use page::PageBuilder;

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::constants::render::{INDEX_FILE, SCRIPT_FILE, SEARCH_INDEX_FILE, STYLESHEET_FILE};
use crate::search::SearchIndex;
use crate::types::{AutodocError, ModuleDoc, Result};

/// Counts from one completed render run
#[derive(Debug, Clone, Copy)]
pub struct RenderSummary {
    /// Module pages plus the index page
    pub pages_written: usize,
    pub symbols_indexed: usize,
}

pub struct Renderer<'a> {
    title: &'a str,
    output_dir: &'a Path,
}

impl<'a> Renderer<'a> {
    pub fn new(title: &'a str, output_dir: &'a Path) -> Self {
        Self { title, output_dir }
    }

    /// Write the complete site for the given modules
    pub fn render(&self, modules: &[ModuleDoc]) -> Result<RenderSummary> {
        fs::create_dir_all(self.output_dir)
            .map_err(|source| AutodocError::write(self.output_dir, source))?;

        let builder = PageBuilder::new(self.title, modules);
        let mut pages_written = 0;

        for module in modules {
            let html = builder.module_page(module);
            self.write_file(&module.page(), html.as_bytes())?;
            pages_written += 1;
        }

        self.write_file(INDEX_FILE, builder.index_page().as_bytes())?;
        pages_written += 1;

        let index = SearchIndex::build(modules);
        self.write_file(SEARCH_INDEX_FILE, index.to_json()?.as_bytes())?;
        self.write_file(STYLESHEET_FILE, assets::STYLE_CSS.as_bytes())?;
        self.write_file(SCRIPT_FILE, assets::SEARCH_JS.as_bytes())?;

        info!(
            pages = pages_written,
            symbols = index.len(),
            output = %self.output_dir.display(),
            "Rendered documentation"
        );
        Ok(RenderSummary {
            pages_written,
            symbols_indexed: index.len(),
        })
    }

    fn write_file(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.output_dir.join(name);
        fs::write(&path, bytes).map_err(|source| AutodocError::write(&path, source))?;
        debug!(path = %path.display(), "Wrote output file");
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
