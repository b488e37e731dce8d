//! Report Data Structures

use chrono::{DateTime, Utc};
use loadbench_stats::AggregateStats;
use serde::{Deserialize, Serialize};

/// Fixed file name of the text report (massive-insertion-workload results).
pub const TEXT_RESULTS_FILE_NAME: &str = "MIWResults.txt";

/// Fixed file name of the JSON report variant.
pub const JSON_RESULTS_FILE_NAME: &str = "MIWResults.json";

/// Complete benchmark report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata.
    pub meta: ReportMeta,
    /// One entry per backend that produced at least one valid measurement,
    /// in registration order.
    pub entries: Vec<ReportEntry>,
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Harness version.
    pub version: String,
    /// When the report was built.
    pub timestamp: DateTime<Utc>,
    /// Dataset directory the run loaded from.
    pub dataset_dir: String,
    /// Number of registered operations.
    pub operation_count: usize,
    /// Number of scenarios the run iterated (operation_count factorial).
    pub scenario_count: usize,
}

/// Aggregated statistics for one backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Backend identifier.
    pub backend: String,
    /// Timing metrics over the backend's sample series.
    pub metrics: BackendMetrics,
}

/// Backend timing metrics, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendMetrics {
    /// Mean bulk-load time.
    pub mean_secs: f64,
    /// Population variance of the bulk-load times.
    pub variance_secs: f64,
    /// Standard deviation of the bulk-load times.
    pub std_dev_secs: f64,
    /// Number of valid measurements behind the statistics.
    pub samples: usize,
}

impl From<&AggregateStats> for BackendMetrics {
    fn from(stats: &AggregateStats) -> Self {
        Self {
            mean_secs: stats.mean,
            variance_secs: stats.variance,
            std_dev_secs: stats.std_dev,
            samples: stats.sample_count,
        }
    }
}

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-format human-readable text (the default).
    #[default]
    Text,
    /// JSON with full metadata.
    Json,
}

impl OutputFormat {
    /// File name the report is persisted under for this format.
    pub fn file_name(self) -> &'static str {
        match self {
            OutputFormat::Text => TEXT_RESULTS_FILE_NAME,
            OutputFormat::Json => JSON_RESULTS_FILE_NAME,
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "human" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
