use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use autodoc::cli::commands::generate::GenerateOptions;
use autodoc::cli::ui::Output;

#[derive(Parser)]
#[command(name = "autodoc")]
#[command(
    version,
    about = "Interactive HTML documentation generator for Python source code"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file to use instead of autodoc.toml
    #[arg(long, short)]
    config: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate HTML documentation for a Python file or directory
    Generate {
        /// Source file or directory to document
        path: PathBuf,
        #[arg(long, short, help = "Output directory for the generated site")]
        output: Option<PathBuf>,
        #[arg(
            long,
            help = "Documentation title (defaults to the source directory name)"
        )]
        title: Option<String>,
        #[arg(
            long,
            help = "Descend into subdirectories (the default)",
            conflicts_with = "no_recursive"
        )]
        recursive: bool,
        #[arg(
            long = "no-recursive",
            help = "Stay at the top level of the source directory"
        )]
        no_recursive: bool,
    },

    /// Show the documentation model without writing any files
    Analyze {
        /// Source file or directory to inspect
        path: PathBuf,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
}

/// Sets up a custom panic handler for better error messages
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        // Log the panic
        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mautodoc encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }

        eprintln!("\n\x1b[33mPlease report this issue at:\x1b[0m");
        eprintln!("  https://github.com/user/autodoc/issues");
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    // Install panic handler first
    setup_panic_handler();

    // Run the actual CLI
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::new().error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Generate {
            path,
            output,
            title,
            recursive,
            no_recursive,
        } => {
            let recursive = if no_recursive {
                Some(false)
            } else if recursive {
                Some(true)
            } else {
                None
            };
            autodoc::cli::commands::generate::run(GenerateOptions {
                source: path,
                output,
                title,
                recursive,
                config_file: cli.config,
            })?;
        }
        Commands::Analyze { path, format } => {
            autodoc::cli::commands::analyze::run(&path, &format, cli.config.as_ref())?;
        }
    }

    Ok(())
}
