#![warn(missing_docs)]
//! LoadBench Report - Rendering and Persistence
//!
//! Renders aggregated per-backend statistics into:
//! - the fixed-format text report the suite has always produced
//! - a JSON variant for machine consumption
//!
//! and persists the result atomically under the configured results
//! directory.

mod json;
mod report;
mod text;
mod writer;

pub use json::generate_json_report;
pub use report::{
    BackendMetrics, OutputFormat, Report, ReportEntry, ReportMeta, JSON_RESULTS_FILE_NAME,
    TEXT_RESULTS_FILE_NAME,
};
pub use text::render_text;
pub use writer::{persist_report, ReportError};
