//! A single scan run over one input file.

use std::path::PathBuf;

use tracing::{debug, info};

use clex_lex::{ReportSink, Scanner, TokenSet};
use clex_util::SourceFile;

use crate::config::Config;
use crate::error::Result;
use crate::report::{self, ReportFormat};

/// Resolved options for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// File to scan.
    pub input: PathBuf,
    /// Explicit report path; defaults to `<log_dir>/<stem>.log`.
    pub output: Option<PathBuf>,
    /// Directory for the default report path.
    pub log_dir: PathBuf,
    /// Report format.
    pub format: ReportFormat,
    /// Print the listing to stdout.
    pub print_listing: bool,
    /// Stop after counting.
    pub count_only: bool,
}

impl Options {
    /// Options for `input` with everything else taken from `config`.
    pub fn from_config(input: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            input: input.into(),
            output: None,
            log_dir: config.log_dir.clone(),
            format: config.format,
            print_listing: config.print_listing,
            count_only: false,
        }
    }
}

/// What a run produced.
#[derive(Debug)]
pub enum Outcome {
    /// Only the counting pass ran.
    Counted(usize),
    /// A report was written.
    Reported {
        /// Where the report went.
        path: PathBuf,
        /// The scanned tokens.
        tokens: TokenSet,
    },
}

/// Scan session
pub struct Session {
    options: Options,
    source: SourceFile,
}

impl Session {
    /// Loads the input file.
    pub fn new(options: Options) -> Result<Self> {
        let source = SourceFile::load(&options.input)?;
        debug!(
            file = source.name(),
            bytes = source.len(),
            lines = source.line_count(),
            "loaded source"
        );
        if source.is_empty() {
            debug!(file = source.name(), "input is empty");
        }
        Ok(Self { options, source })
    }

    /// Where the report will be written.
    pub fn report_path(&self) -> PathBuf {
        match &self.options.output {
            Some(path) => path.clone(),
            None => report::default_report_path(&self.options.log_dir, self.source.stem()),
        }
    }

    /// Scans the input, writes the report, and prints the listing to
    /// `stdout` when asked.
    pub fn run(&self, stdout: &mut dyn ReportSink) -> Result<Outcome> {
        let scanner = Scanner::new(self.source.content());

        if self.options.count_only {
            return Ok(Outcome::Counted(scanner.count()));
        }

        let tokens = scanner.scan()?;
        info!(file = self.source.name(), tokens = tokens.len(), "scanned");

        if self.options.print_listing {
            report::write_listing(&tokens, stdout)?;
        }

        let path = self.report_path();
        report::write_report(&tokens, self.options.format, &path)?;
        info!(path = %path.display(), format = ?self.options.format, "report written");

        Ok(Outcome::Reported { path, tokens })
    }
}

/// Convenience wrapper: load `input` and run with `options`.
pub fn run_file(options: Options, stdout: &mut dyn ReportSink) -> Result<Outcome> {
    Session::new(options)?.run(stdout)
}
