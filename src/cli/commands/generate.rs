//! Generate Command
//!
//! Runs the full pipeline: extract declarations, fill in descriptions, and
//! write the HTML site.

use std::path::PathBuf;

use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::pipeline;
use crate::types::Result;

/// Command-line overrides layered on top of the loaded configuration
#[derive(Debug, Default)]
pub struct GenerateOptions {
    pub source: PathBuf,
    pub output: Option<PathBuf>,
    pub title: Option<String>,
    pub recursive: Option<bool>,
    pub config_file: Option<PathBuf>,
}

pub fn run(options: GenerateOptions) -> Result<()> {
    let mut config = ConfigLoader::load_with(options.config_file.as_deref())?;
    if let Some(dir) = options.output {
        config.output.dir = dir;
    }
    if let Some(title) = options.title {
        config.project.name = Some(title);
    }
    if let Some(recursive) = options.recursive {
        config.analysis.recursive = recursive;
    }

    let output = Output::new();
    println!("Generating documentation for {}...", options.source.display());

    let report = pipeline::generate(&options.source, &config)?;

    if !report.failures.is_empty() {
        output.warning(&format!("Skipped {} file(s):", report.failures.len()));
        for failure in &report.failures {
            println!("  {}", failure.error);
        }
    }

    output.success(&format!(
        "Wrote {} pages to {}",
        report.pages_written,
        config.output.dir.display()
    ));
    output.stat("modules", &report.modules_documented.to_string());
    output.stat("symbols indexed", &report.symbols_indexed.to_string());
    println!();
    output.info(&format!(
        "Open {} in a browser to view.",
        config.output.dir.join("index.html").display()
    ));

    Ok(())
}
