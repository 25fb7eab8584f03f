//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Source scanning constants
pub mod scanner {
    /// Maximum file size to analyze (1MB)
    pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

    /// File extension of analyzable sources
    pub const SOURCE_EXTENSION: &str = "py";

    /// Directories skipped during scanning regardless of ignore files
    pub const DEFAULT_SKIP_DIRS: &[&str] = &[
        "__pycache__",
        ".git",
        ".hg",
        ".venv",
        "venv",
        ".tox",
        ".mypy_cache",
        ".pytest_cache",
        "node_modules",
        "build",
        "dist",
        ".eggs",
        "site-packages",
    ];
}

/// Search widget constants
///
/// The emitted client script embeds these literally; `render::assets` tests
/// keep the two in sync.
pub mod search {
    /// Minimum query length before a lookup is issued
    pub const MIN_QUERY_LEN: usize = 2;

    /// Keystroke quiescence period before a lookup fires (milliseconds)
    pub const DEBOUNCE_MS: u64 = 300;

    /// Maximum number of results rendered per query
    pub const MAX_RESULTS: usize = 50;
}

/// Description inference constants
pub mod inference {
    /// Maximum declaration names listed in a module summary before eliding
    pub const MAX_LISTED_NAMES: usize = 4;

    /// Maximum parameters named in a templated description before eliding
    pub const MAX_LISTED_PARAMS: usize = 4;
}

/// Renderer output names
pub mod render {
    pub const INDEX_FILE: &str = "index.html";
    pub const STYLESHEET_FILE: &str = "style.css";
    pub const SCRIPT_FILE: &str = "search.js";
    pub const SEARCH_INDEX_FILE: &str = "search-index.json";
}
