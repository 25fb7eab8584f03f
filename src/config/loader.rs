//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Project config (autodoc.toml, or the file given on the command line)
//! 3. Environment variables (AUTODOC_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::types::{AutodocError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with the full resolution chain:
    /// defaults → project file → env vars
    pub fn load() -> Result<Config> {
        Self::load_with(None)
    }

    /// Load configuration, reading an explicit file instead of the project
    /// default when one is given. Environment variables still apply last.
    pub fn load_with(file: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        match file {
            Some(path) => {
                if !path.exists() {
                    return Err(AutodocError::config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                debug!("Loading config from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let project_path = Self::project_config_path();
                if project_path.exists() {
                    debug!("Loading project config from: {}", project_path.display());
                    figment = figment.merge(Toml::file(&project_path));
                }
            }
        }

        // Merge environment variables (e.g., AUTODOC_OUTPUT_DIR -> output.dir)
        figment = figment.merge(Env::prefixed("AUTODOC_").split('_').lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| AutodocError::config(format!("Configuration error: {}", e)))?;

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Get path to the project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from("autodoc.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_default_config() {
        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.version, "1.0");
        assert!(config.analysis.recursive);
    }

    #[test]
    fn test_load_from_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(
            &path,
            "[project]\nname = \"demo\"\n\n[analysis]\nrecursive = false\n",
        )
        .unwrap();

        let config = ConfigLoader::load_with(Some(&path)).unwrap();
        assert_eq!(config.project.name.as_deref(), Some("demo"));
        assert!(!config.analysis.recursive);
        // untouched keys keep their defaults
        assert_eq!(config.output.dir, PathBuf::from("docs"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = ConfigLoader::load_with(Some(Path::new("no-such.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_values_are_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[analysis]\nmax_file_size = 0\n").unwrap();

        assert!(ConfigLoader::load_with(Some(&path)).is_err());
    }

    #[test]
    fn test_env_override() {
        // SAFETY: This test runs in isolation
        unsafe {
            std::env::set_var("AUTODOC_PROJECT_NAME", "from-env");
        }
        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.project.name.as_deref(), Some("from-env"));
        unsafe {
            std::env::remove_var("AUTODOC_PROJECT_NAME");
        }
    }
}
