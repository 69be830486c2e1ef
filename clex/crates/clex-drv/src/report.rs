//! Report files.
//!
//! A report is either the text summary rendered by
//! [`TokenSet::write_summary`] or a JSON document with the same content.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use clex_lex::{ReportSink, TokenSet};

use crate::error::Result;

/// File extension of report files.
pub const REPORT_EXTENSION: &str = "log";

/// Report file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Totals followed by one block per token.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Default report location: `<log_dir>/<stem>.log`.
pub fn default_report_path(log_dir: &Path, stem: &str) -> PathBuf {
    log_dir.join(format!("{stem}.{REPORT_EXTENSION}"))
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    total: usize,
    counts: IndexMap<&'static str, usize>,
    tokens: Vec<JsonToken<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonToken<'a> {
    value: &'a str,
    kind: &'static str,
    line: u32,
    column: u32,
}

impl<'a> JsonReport<'a> {
    fn new(set: &'a TokenSet) -> Self {
        Self {
            total: set.len(),
            counts: set
                .kind_counts()
                .into_iter()
                .map(|(kind, count)| (kind.name(), count))
                .collect(),
            tokens: set
                .iter()
                .map(|token| JsonToken {
                    value: token.value(),
                    kind: token.kind().name(),
                    line: token.line(),
                    column: token.column(),
                })
                .collect(),
        }
    }
}

/// Writes `set` to `path` in `format`, creating parent directories.
pub fn write_report(set: &TokenSet, format: ReportFormat, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    match format {
        ReportFormat::Text => write_text(set, path),
        ReportFormat::Json => write_json(set, path),
    }
}

fn write_text(set: &TokenSet, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .map_err(|err| error!(path = %path.display(), %err, "cannot open report file"))
        .ok()
        .map(BufWriter::new);

    let lines = set.write_summary(file.as_mut().map(|f| f as &mut dyn ReportSink))?;
    if let Some(file) = file.as_mut() {
        file.flush()?;
    }
    debug!(path = %path.display(), lines, "wrote text report");
    Ok(())
}

fn write_json(set: &TokenSet, path: &Path) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut file, &JsonReport::new(set))?;
    file.write_line("")?;
    file.flush()?;
    debug!(path = %path.display(), tokens = set.len(), "wrote json report");
    Ok(())
}

/// Writes the token listing to `sink`.
pub fn write_listing(set: &TokenSet, sink: &mut dyn ReportSink) -> Result<()> {
    for line in set.render_listing() {
        sink.write_line(&line)?;
    }
    Ok(())
}
