//! JSON serialization for simulation reports.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::AggregateReport;

/// Serialize a report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for reports).
pub fn to_json(report: &AggregateReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for reports).
pub fn to_json_pretty(report: &AggregateReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Write a pretty-printed report to `path`.
pub fn write_json_file(path: &Path, report: &AggregateReport) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()
}
