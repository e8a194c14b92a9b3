use crate::results::ExtractionReport;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// How extracted URLs are written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One URL per line
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

/// Write each URL on its own line
pub fn write_text<'a, I, W>(urls: I, writer: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = &'a String>,
    W: Write,
{
    for url in urls {
        writeln!(writer, "{}", url)?;
    }
    Ok(())
}

/// Write the full report as JSON
pub fn write_json<W: Write>(report: &ExtractionReport, writer: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)
}

/// Write the report in the requested format
pub fn write_report<W: Write>(
    report: &ExtractionReport,
    format: OutputFormat,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(&report.urls, writer),
        OutputFormat::Json => write_json(report, writer),
    }?;
    writer.flush()
}
