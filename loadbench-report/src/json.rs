//! JSON Report Rendering

use crate::report::Report;
use crate::writer::ReportError;

/// Render the report as pretty-printed JSON, including run metadata.
pub fn generate_json_report(report: &Report) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}
