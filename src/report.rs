//! Operator-facing messages for treeclip runs.
//!
//! Provides the large-export warning, the completion notice and a JSON form of
//! the same figures.

use crate::TreeclipError;
use crate::options::ExportLimits;
use crate::types::Aggregate;
use serde::Serialize;

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Machine-readable summary of a pass.
#[derive(Debug, Serialize)]
struct Report<'a> {
    status: &'a str,
    files: u64,
    bytes: u64,
    kilobytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination: Option<&'a str>,
}

/// The confirmation prompt shown when a preview exceeds `limits`.
pub fn large_export_warning(preview: &Aggregate, limits: &ExportLimits) -> String {
    format!(
        "Warning: You are exporting more than {} files or more than {:.0} kB of data. \
         This may impact performance. Please try to only export a subtree.\n\n{}",
        limits.max_files,
        limits.max_kb,
        totals(preview)
    )
}

/// The notice shown after a successful export.
pub fn export_summary(stats: &Aggregate, destination: &str) -> String {
    format!(
        "Content was successfully exported to {}.\n\n{}",
        destination,
        totals(stats)
    )
}

/// The notice shown when the operator turns a large export down.
pub fn declined_report(preview: &Aggregate, format: ReportFormat) -> Result<String, TreeclipError> {
    match format {
        ReportFormat::Text => Ok(format!("Export cancelled.\n\n{}", totals(preview))),
        ReportFormat::Json => format_report(preview, "declined", None, format),
    }
}

/// `Total files` / `Total size` lines.
pub fn totals(stats: &Aggregate) -> String {
    format!(
        "Total files: {}\nTotal size: {} KB",
        stats.count,
        stats.rounded_kb()
    )
}

/// Formats the figures of a pass. `status` names the outcome (`exported`,
/// `preview` or `declined`); `destination` is where the buffer went, if
/// anywhere.
pub fn format_report(
    stats: &Aggregate,
    status: &str,
    destination: Option<&str>,
    format: ReportFormat,
) -> Result<String, TreeclipError> {
    match format {
        ReportFormat::Text => Ok(match destination {
            Some(destination) => export_summary(stats, destination),
            None => totals(stats),
        }),
        ReportFormat::Json => {
            let report = Report {
                status,
                files: stats.count,
                bytes: stats.total_bytes,
                kilobytes: stats.rounded_kb(),
                destination,
            };
            Ok(serde_json::to_string(&report)?)
        }
    }
}
