//! Source Analysis Module
//!
//! Turns a file or directory of Python sources into documentation models:
//! - File scanning with gitignore support
//! - Declaration extraction (tree-sitter AST)
//! - Per-function complexity metrics
//!
//! A malformed file fails the whole run only in single-file mode; directory
//! runs record the failure and keep going.

pub mod extractor;
pub mod metrics;
pub mod scanner;

pub use extractor::PythonExtractor;
pub use scanner::SourceScanner;

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::types::{AutodocError, ModuleDoc, Result};

/// Scanning knobs, resolved from configuration by the caller
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub recursive: bool,
    pub exclude: Vec<String>,
    pub max_file_size: u64,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            exclude: Vec::new(),
            max_file_size: crate::constants::scanner::MAX_FILE_SIZE,
        }
    }
}

/// One file a directory run could not analyze
#[derive(Debug)]
pub struct ParseFailure {
    pub path: String,
    pub error: AutodocError,
}

/// Extraction results for one source path
#[derive(Debug, Default)]
pub struct Analysis {
    /// Modules in path order
    pub modules: Vec<ModuleDoc>,
    /// Files skipped in directory mode, in path order
    pub failures: Vec<ParseFailure>,
}

/// Analyze a source file or directory.
///
/// Single-file mode returns the first error outright. Directory mode
/// records unanalyzable files in `failures` and continues with the rest.
pub fn analyze_path(source: &Path, options: &AnalyzeOptions) -> Result<Analysis> {
    let extractor = PythonExtractor::new()?;

    if source.is_file() {
        let rel = source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| source.display().to_string());
        let module = analyze_file(&extractor, source, rel)?;
        return Ok(Analysis {
            modules: vec![module],
            failures: Vec::new(),
        });
    }

    if !source.is_dir() {
        return Err(AutodocError::invalid_path(source));
    }

    let files = SourceScanner::new(source)
        .with_recursive(options.recursive)
        .with_exclude(options.exclude.clone())
        .with_max_file_size(options.max_file_size)
        .scan()?;

    let mut analysis = Analysis::default();
    for file in files {
        let rel = relative_path(source, &file);
        match analyze_file(&extractor, &file, rel.clone()) {
            Ok(module) => {
                debug!(
                    "Parsed {}: {} classes, {} functions",
                    rel,
                    module.classes.len(),
                    module.functions.len()
                );
                analysis.modules.push(module);
            }
            Err(error) => {
                warn!("Skipping {}: {}", rel, error);
                analysis.failures.push(ParseFailure { path: rel, error });
            }
        }
    }

    Ok(analysis)
}

fn analyze_file(extractor: &PythonExtractor, path: &Path, rel: String) -> Result<ModuleDoc> {
    let content = fs::read_to_string(path)?;
    extractor.extract(&rel, &content)
}

fn relative_path(root: &Path, file: &Path) -> String {
    file.strip_prefix(root)
        .unwrap_or(file)
        .to_string_lossy()
        .replace('\\', "/")
}
