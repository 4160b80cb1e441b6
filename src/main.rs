//! Pyprep command-line interface
//!
//! Prepares the build descriptor for the `bc4py_extension` Python native
//! module and delegates compilation and packaging to the external
//! orchestrator.

use clap::{Parser, Subcommand};
use pyprep::python::PythonVersion;
use std::process;

mod commands;

/// Display an error with optional backtrace information
fn display_error(err: &anyhow::Error, backtrace_enabled: bool) {
    eprintln!("error: {err}");

    // Show error chain
    let mut source = err.source();
    while let Some(err) = source {
        eprintln!("caused by: {err}");
        source = err.source();
    }

    // Show backtrace if enabled
    if backtrace_enabled {
        let backtrace = err.backtrace();
        if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
            eprintln!("\nBacktrace:");
            eprintln!("{backtrace}");
        }
    }
}

#[derive(Parser)]
#[command(name = "pyprep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build-descriptor preparation for a Python native extension", long_about = None)]
#[command(disable_version_flag = true)]
pub(crate) struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    _version: Option<bool>,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Show error backtraces (requires RUST_BACKTRACE to be set)
    #[arg(long, global = true)]
    backtrace: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Shared input options for descriptor-producing subcommands
#[derive(clap::Args)]
pub(crate) struct InputArgs {
    /// Path to the Rust manifest to extract the version from
    #[arg(long, default_value = pyprep::MANIFEST_PATH)]
    pub(crate) manifest: String,

    /// Path to the requirements listing (missing file means no dependencies)
    #[arg(long, default_value = pyprep::REQUIREMENTS_PATH)]
    pub(crate) requirements: String,

    /// Target Python version (e.g. 3.8) instead of detecting the host
    #[arg(long)]
    pub(crate) python: Option<PythonVersion>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the descriptor and run the orchestrator's build command
    Build {
        #[command(flatten)]
        inputs: InputArgs,

        /// Print the descriptor and skip the orchestrator
        #[arg(long)]
        dry_run: bool,

        /// Echo orchestrator output
        #[arg(long)]
        verbose: bool,
    },

    /// Assemble the descriptor and run the orchestrator's install command
    Install {
        #[command(flatten)]
        inputs: InputArgs,

        /// Print the descriptor and skip the orchestrator
        #[arg(long)]
        dry_run: bool,

        /// Echo orchestrator output
        #[arg(long)]
        verbose: bool,
    },

    /// Print the assembled build descriptor as JSON
    Describe {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Show the detected Python interpreter and host platform
    Env,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    pyprep::debug::init_debug(cli.debug);
    let backtrace = cli.backtrace;

    let result = match cli.command {
        Commands::Build {
            inputs,
            dry_run,
            verbose,
        } => commands::build::run("build", &inputs, dry_run, verbose),
        Commands::Install {
            inputs,
            dry_run,
            verbose,
        } => commands::build::run("install", &inputs, dry_run, verbose),
        Commands::Describe { inputs } => commands::describe::run(&inputs),
        Commands::Env => commands::env::run(),
        Commands::Completion { shell } => commands::completion::run(shell),
    };

    if let Err(err) = result {
        display_error(&err, backtrace);
        process::exit(1);
    }
}
