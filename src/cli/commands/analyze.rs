//! Analyze Command
//!
//! Extraction dry run: shows the documentation model for a source path
//! without writing any output files. Descriptions are filled in the same
//! way `generate` would fill them.

use std::path::{Path, PathBuf};

use crate::analyzer::{self, AnalyzeOptions};
use crate::config::ConfigLoader;
use crate::inference;
use crate::types::{ClassDoc, FunctionDoc, Result};

pub fn run(path: &Path, format: &str, config_file: Option<&PathBuf>) -> Result<()> {
    let config = ConfigLoader::load_with(config_file.map(PathBuf::as_path))?;
    let options = AnalyzeOptions {
        recursive: config.analysis.recursive,
        exclude: config.analysis.exclude.clone(),
        max_file_size: config.analysis.max_file_size,
    };

    let mut analysis = analyzer::analyze_path(path, &options)?;
    for module in &mut analysis.modules {
        inference::ensure_descriptions(module);
    }

    match format {
        "json" => {
            let failures: Vec<String> = analysis
                .failures
                .iter()
                .map(|f| f.error.to_string())
                .collect();
            let output = serde_json::json!({
                "modules": analysis.modules,
                "failures": failures,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            println!(
                "Analyzed {} module(s), {} file(s) skipped",
                analysis.modules.len(),
                analysis.failures.len()
            );

            for module in &analysis.modules {
                println!();
                println!("{}", module.path);
                if let Some(description) = &module.description {
                    println!("  {}", description.text.lines().next().unwrap_or_default());
                }
                for class in &module.classes {
                    print_class(class, 1);
                }
                for func in &module.functions {
                    print_function(func, 1);
                }
            }

            if !analysis.failures.is_empty() {
                println!();
                println!("Skipped:");
                for failure in &analysis.failures {
                    println!("  {}", failure.error);
                }
            }
        }
    }

    Ok(())
}

fn print_class(class: &ClassDoc, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{}class {} [{}-{}] {} method(s)",
        indent,
        class.name,
        class.span.start,
        class.span.end,
        class.methods.len()
    );
    for method in &class.methods {
        print_function(method, depth + 1);
    }
    for nested in &class.classes {
        print_class(nested, depth + 1);
    }
}

fn print_function(func: &FunctionDoc, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{}def {}({}) [{}-{}]",
        indent,
        func.name,
        func.param_names().join(", "),
        func.span.start,
        func.span.end
    );
}
