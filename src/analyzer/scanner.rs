//! Source file discovery.
//!
//! Walks a root directory for Python sources, honoring ignore files,
//! exclusion globs, and a file-size cap. Results come back sorted so every
//! downstream stage sees files in a stable order.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::constants::scanner::{DEFAULT_SKIP_DIRS, MAX_FILE_SIZE, SOURCE_EXTENSION};
use crate::types::Result;

pub struct SourceScanner {
    root: PathBuf,
    exclude: Vec<String>,
    max_file_size: u64,
    recursive: bool,
}

impl SourceScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let exclude = DEFAULT_SKIP_DIRS
            .iter()
            .map(|d| format!("**/{}/**", d))
            .collect();
        Self {
            root: root.as_ref().to_path_buf(),
            exclude,
            max_file_size: MAX_FILE_SIZE,
            recursive: true,
        }
    }

    /// Add exclusion globs on top of the default skip directories
    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude.extend(patterns);
        self
    }

    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Whether to descend into subdirectories (default true)
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Collect source files under the root, sorted by path
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let max_depth = if self.recursive { None } else { Some(1) };
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false) // Security: prevent symlink traversal attacks
            .max_depth(max_depth)
            .build();

        let mut files = Vec::new();
        for entry in walker.filter_map(|e| e.ok()) {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            if !self.is_source(path) || self.should_exclude(path) {
                continue;
            }

            if let Ok(metadata) = path.metadata() {
                if metadata.len() > self.max_file_size {
                    continue;
                }
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn is_source(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| ext == SOURCE_EXTENSION)
            .unwrap_or(false)
    }

    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x = 1\n").unwrap();
    }

    #[test]
    fn test_scan_filters_to_python_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.py");
        touch(dir.path(), "a.py");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "pkg/util.py");

        let files = SourceScanner::new(dir.path()).scan().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.py", "b.py", "pkg/util.py"]);
    }

    #[test]
    fn test_scan_skips_default_dirs() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "app.py");
        touch(dir.path(), "__pycache__/app.py");
        touch(dir.path(), ".venv/lib/site.py");

        let files = SourceScanner::new(dir.path()).scan().unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.py"));
    }

    #[test]
    fn test_non_recursive_stays_at_top_level() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "top.py");
        touch(dir.path(), "deep/nested.py");

        let files = SourceScanner::new(dir.path())
            .with_recursive(false)
            .scan()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("top.py"));
    }

    #[test]
    fn test_exclude_glob() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "app.py");
        touch(dir.path(), "tests/test_app.py");

        let files = SourceScanner::new(dir.path())
            .with_exclude(vec!["**/tests/**".to_string()])
            .scan()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.py"));
    }

    #[test]
    fn test_max_file_size_cap() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "small.py");
        fs::write(dir.path().join("big.py"), "x".repeat(4096)).unwrap();

        let files = SourceScanner::new(dir.path())
            .with_max_file_size(1024)
            .scan()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("small.py"));
    }
}
