//! End-to-end generation pipeline.
//!
//! Extraction, description inference, and rendering chained into the one
//! call the CLI and library consumers use.

use std::path::Path;

use tracing::info;

use crate::analyzer::{self, AnalyzeOptions, ParseFailure};
use crate::config::Config;
use crate::inference;
use crate::render::Renderer;
use crate::types::Result;

/// Outcome of one generation run
#[derive(Debug)]
pub struct GenerateReport {
    pub modules_documented: usize,
    /// Module pages plus the index page
    pub pages_written: usize,
    pub symbols_indexed: usize,
    /// Files skipped in directory mode
    pub failures: Vec<ParseFailure>,
}

/// Analyze `source`, fill in missing descriptions, and write the site to
/// `config.output.dir`.
///
/// A malformed single file is fatal; in directory mode malformed files are
/// reported in the returned `failures` and the rest of the run completes.
pub fn generate(source: &Path, config: &Config) -> Result<GenerateReport> {
    let options = AnalyzeOptions {
        recursive: config.analysis.recursive,
        exclude: config.analysis.exclude.clone(),
        max_file_size: config.analysis.max_file_size,
    };

    let mut analysis = analyzer::analyze_path(source, &options)?;
    for module in &mut analysis.modules {
        inference::ensure_descriptions(module);
    }

    let title = config.title_for(source);
    let summary = Renderer::new(&title, &config.output.dir).render(&analysis.modules)?;

    info!(
        modules = analysis.modules.len(),
        skipped = analysis.failures.len(),
        "Generation finished"
    );

    Ok(GenerateReport {
        modules_documented: analysis.modules.len(),
        pages_written: summary.pages_written,
        symbols_indexed: summary.symbols_indexed,
        failures: analysis.failures,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_source(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn config_for(out: &Path) -> Config {
        let mut config = Config::default();
        config.output.dir = out.to_path_buf();
        config
    }

    const SHAPES: &str = "\
\"\"\"Shape helpers.\"\"\"

class Circle:
    def __init__(self, radius):
        self.radius = radius

    def area(self):
        \"\"\"Return the area.\"\"\"
        return 3.14 * self.radius ** 2
";

    const MATHS: &str = "\
def multiply(a, b):
    return a * b
";

    #[test]
    fn test_generate_end_to_end() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_source(source.path(), "shapes.py", SHAPES);
        write_source(source.path(), "pkg/maths.py", MATHS);

        let report = generate(source.path(), &config_for(out.path())).unwrap();

        assert_eq!(report.modules_documented, 2);
        assert_eq!(report.pages_written, 3);
        assert!(report.failures.is_empty());
        // module + class + 2 methods, module + function
        assert_eq!(report.symbols_indexed, 6);

        let maths = fs::read_to_string(out.path().join("pkg-maths.html")).unwrap();
        assert!(maths.contains("Returns the product of <code>a</code> and <code>b</code>."));

        let shapes = fs::read_to_string(out.path().join("shapes.html")).unwrap();
        assert!(shapes.contains("Return the area."));
        assert!(out.path().join("index.html").exists());
        assert!(out.path().join("search-index.json").exists());
        assert!(out.path().join("style.css").exists());
        assert!(out.path().join("search.js").exists());
    }

    #[test]
    fn test_malformed_file_is_skipped_in_directory_mode() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_source(source.path(), "good.py", MATHS);
        write_source(source.path(), "also_good.py", "X = 1\n");
        write_source(source.path(), "broken.py", "def broken(:\n");

        let report = generate(source.path(), &config_for(out.path())).unwrap();

        assert_eq!(report.modules_documented, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, "broken.py");
        assert!(report.failures[0].error.is_parse());
        // one page per parsed module plus the index
        assert_eq!(report.pages_written, 3);
        assert!(!out.path().join("broken.html").exists());
    }

    #[test]
    fn test_malformed_single_file_is_fatal() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_source(source.path(), "broken.py", "class :\n");

        let err = generate(&source.path().join("broken.py"), &config_for(out.path()))
            .unwrap_err();
        assert!(err.is_parse());
        assert!(!out.path().join("index.html").exists());
    }

    #[test]
    fn test_missing_source_path_is_rejected() {
        let out = TempDir::new().unwrap();
        let err = generate(Path::new("definitely/not/here"), &config_for(out.path()))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid source path"));
    }

    #[test]
    fn test_runs_are_byte_identical() {
        let source = TempDir::new().unwrap();
        write_source(source.path(), "shapes.py", SHAPES);
        write_source(source.path(), "maths.py", MATHS);

        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        generate(source.path(), &config_for(first.path())).unwrap();
        generate(source.path(), &config_for(second.path())).unwrap();

        let mut names: Vec<PathBuf> = fs::read_dir(first.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        names.sort();
        assert!(!names.is_empty());
        for path in names {
            let name = path.file_name().unwrap();
            let a = fs::read(&path).unwrap();
            let b = fs::read(second.path().join(name)).unwrap();
            assert_eq!(a, b, "output differs for {:?}", name);
        }
    }

    #[test]
    fn test_non_recursive_skips_nested_sources() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_source(source.path(), "top.py", MATHS);
        write_source(source.path(), "pkg/nested.py", MATHS);

        let mut config = config_for(out.path());
        config.analysis.recursive = false;
        let report = generate(source.path(), &config).unwrap();

        assert_eq!(report.modules_documented, 1);
        assert!(out.path().join("top.html").exists());
        assert!(!out.path().join("pkg-nested.html").exists());
    }
}
