//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Project settings come from `autodoc.toml`; `AUTODOC_*` environment
//! variables override individual keys.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::scanner::MAX_FILE_SIZE;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Project-specific settings
    pub project: ProjectConfig,

    /// Source discovery and extraction settings
    pub analysis: AnalysisConfig,

    /// Documentation output settings
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            project: ProjectConfig::default(),
            analysis: AnalysisConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `AutodocError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if self.analysis.max_file_size == 0 {
            return Err(crate::types::AutodocError::config(
                "analysis.max_file_size must be greater than 0",
            ));
        }

        for pattern in &self.analysis.exclude {
            if let Err(e) = glob::Pattern::new(pattern) {
                return Err(crate::types::AutodocError::config(format!(
                    "Invalid exclude pattern '{}': {}",
                    pattern, e
                )));
            }
        }

        if self.output.dir.as_os_str().is_empty() {
            return Err(crate::types::AutodocError::config(
                "output.dir must not be empty",
            ));
        }

        Ok(())
    }

    /// Title shown on the generated pages. Falls back to the source
    /// directory's name, then to the package name.
    pub fn title_for(&self, source: &std::path::Path) -> String {
        if let Some(name) = &self.project.name {
            if !name.is_empty() {
                return name.clone();
            }
        }
        source
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
    }
}

// =============================================================================
// Project Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name shown as the documentation title
    /// (defaults to the source directory name)
    pub name: Option<String>,
}

// =============================================================================
// Analysis Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Descend into subdirectories
    pub recursive: bool,

    /// Exclusion globs applied on top of the built-in skip directories
    pub exclude: Vec<String>,

    /// Skip files larger than this many bytes
    pub max_file_size: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            exclude: Vec::new(),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the generated site is written to
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("docs"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
