//! AutoDoc - Interactive HTML Documentation Generator for Python
//!
//! Analyzes Python source files and produces a static, browsable site:
//! one page per module with syntax-highlighted source, a client-side search
//! widget, and a persisted light/dark theme. Declarations without docstrings
//! get heuristic one-line descriptions so no symbol is left blank.
//!
//! ## Quick Start
//!
//! ```ignore
//! use autodoc::{Config, generate};
//!
//! let mut config = Config::default();
//! config.output.dir = "docs".into();
//! let report = generate(Path::new("src/"), &config)?;
//! println!("{} pages written", report.pages_written);
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: source scanning and declaration extraction (tree-sitter)
//! - [`inference`]: heuristic descriptions for undocumented declarations
//! - [`render`]: HTML pages, highlighting, and static assets
//! - [`search`]: the symbol lookup table behind the search widget
//! - [`config`]: layered configuration (defaults, autodoc.toml, env)

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod inference;
pub mod pipeline;
pub mod render;
pub mod search;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{AutodocError, Result};

// Pipeline
pub use pipeline::{GenerateReport, generate};

// =============================================================================
// Analyzer Re-exports
// =============================================================================

pub use analyzer::{Analysis, AnalyzeOptions, analyze_path};

// =============================================================================
// Search Re-exports
// =============================================================================

pub use search::{SearchEntry, SearchIndex, SymbolKind};
