//! Report Persistence
//!
//! Atomic write: the rendered report lands in a temp file in the results
//! directory, is fsynced, then renamed over the final name. A crash mid-write
//! never leaves a truncated results file, and a prior report of the same name
//! is overwritten in one step.

use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error rendering or persisting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Results directory or file could not be written.
    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization failed.
    #[error("report serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persist rendered report contents under `results_dir/file_name`.
///
/// Creates the results directory if missing. Returns the final path.
pub fn persist_report(
    results_dir: &Path,
    file_name: &str,
    contents: &str,
) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(results_dir)?;

    let final_path = results_dir.join(file_name);
    let tmp_path = results_dir.join(format!("{file_name}.tmp"));
    {
        let mut file = std::fs::File::create(&tmp_path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
    }
    std::fs::rename(&tmp_path, &final_path)?;

    Ok(final_path)
}
