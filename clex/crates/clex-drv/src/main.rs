//! clex CLI - scan a C source file and write a token report.
//!
//! This is the main entry point for the clex binary. It uses clap for
//! argument parsing, merges flags over `clex.toml`, and hands the run to
//! [`clex_drv::Session`].

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use clex_drv::{Config, Options, Outcome, ReportFormat, Session};

/// clex - a lexical scanner for C source files
///
/// Splits the input into tokens, classifies each one, and writes a report
/// with per-kind totals followed by every token and its position.
#[derive(Parser, Debug)]
#[command(name = "clex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A lexical scanner for C source files", long_about = None)]
struct Cli {
    /// Source file to scan
    input: PathBuf,

    /// Report path (default: <log-dir>/<input stem>.log)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report directory (default: from config, "log")
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Also print the token listing to stdout
    #[arg(short, long)]
    print: bool,

    /// Only count tokens and print the count
    #[arg(long)]
    count: bool,

    /// Enable verbose output
    #[arg(short, long, env = "CLEX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CLEX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "CLEX_NO_COLOR")]
    no_color: bool,
}

impl Cli {
    /// Merges command-line flags over `config`.
    fn into_options(self, config: &Config) -> Options {
        let mut options = Options::from_config(self.input, config);
        options.output = self.output;
        if let Some(log_dir) = self.log_dir {
            options.log_dir = log_dir;
        }
        if let Some(format) = self.format {
            options.format = format;
        }
        options.print_listing |= self.print;
        options.count_only = self.count;
        options
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    let options = cli.into_options(&config);
    let input = options.input.clone();

    let session = Session::new(options)
        .with_context(|| format!("cannot load {}", input.display()))?;

    let mut stdout = io::stdout().lock();
    let outcome = session
        .run(&mut stdout)
        .with_context(|| format!("failed to scan {}", input.display()))?;

    match outcome {
        Outcome::Counted(count) => writeln!(stdout, "{count}")?,
        Outcome::Reported { path, .. } => {
            writeln!(stdout, "Successfully created {}", path.display())?
        }
    }
    Ok(())
}

/// Initialize the logging system. Logs go to stderr so stdout carries only
/// the listing and the result line.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("cannot load config {}", path.display()))?,
        None => Config::load().context("cannot load config")?,
    };
    Ok(config)
}
