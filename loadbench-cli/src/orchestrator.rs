//! Benchmark Orchestrator
//!
//! Composes the core pieces: pulls orderings from the permutation generator,
//! drives each operation through the scenario executor, collects elapsed
//! times into per-backend sample series, and aggregates the completed series
//! into the final report.
//!
//! ## Pipeline
//!
//! ```text
//! OperationSet
//!      │
//!      ▼
//! Permutations ──► ScenarioExecutor (per operation, per ordering)
//!      │                   │
//!      │                   ▼
//!      │            SampleSeries (per backend)
//!      ▼                   │
//! (exhausted)              ▼
//!                   AggregateStats ──► Report
//! ```
//!
//! Failures of individual operations are logged and skipped: the job is to
//! maximize completed measurements per run, not to fail fast. The run always
//! reaches the reporting phase exactly once.

use indicatif::{ProgressBar, ProgressStyle};
use loadbench_core::{
    permutation_count, OperationSet, Permutations, SampleSeries, ScenarioExecutor,
};
use loadbench_report::{BackendMetrics, Report, ReportEntry, ReportMeta};
use loadbench_stats::AggregateStats;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

/// Error starting an orchestrated run.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The factorial scenario count overflows `usize`; the sample series
    /// capacity cannot be derived.
    #[error("{operations} operations produce more scenarios than can be counted; refusing to run")]
    TooManyOperations {
        /// Number of registered operations.
        operations: usize,
    },
}

/// Completed run: per-backend series plus run-level counters.
#[derive(Debug)]
pub struct RunOutcome {
    /// One series per registered backend, in registration order. Backends
    /// whose every operation failed have an empty series.
    pub backends: Vec<BackendSeries>,
    /// Number of scenarios iterated (operation count factorial).
    pub scenario_count: usize,
    /// Number of operations that failed and left their sample unrecorded.
    pub failed_operations: usize,
}

/// A backend identifier with its collected sample series.
#[derive(Debug)]
pub struct BackendSeries {
    /// Backend identifier.
    pub id: String,
    /// Elapsed-time samples collected across the run.
    pub series: SampleSeries,
}

/// Drives a full run: all permutations of the operation set, strictly
/// sequentially, on the calling thread.
#[derive(Debug)]
pub struct Orchestrator {
    executor: ScenarioExecutor,
    operations: OperationSet,
    series: Vec<SampleSeries>,
    scenario_count: usize,
}

impl Orchestrator {
    /// Build an orchestrator over the given operation set.
    ///
    /// The per-backend series capacity is derived from the actual operation
    /// count; an operation set whose factorial overflows is rejected here
    /// rather than corrupting collection later.
    pub fn new(
        operations: OperationSet,
        dataset_dir: impl Into<PathBuf>,
    ) -> Result<Self, OrchestratorError> {
        let scenario_count =
            permutation_count(operations.len()).ok_or(OrchestratorError::TooManyOperations {
                operations: operations.len(),
            })?;

        let series = (0..operations.len())
            .map(|_| SampleSeries::with_capacity(scenario_count))
            .collect();

        Ok(Self {
            executor: ScenarioExecutor::new(dataset_dir),
            operations,
            series,
            scenario_count,
        })
    }

    /// Number of scenarios this run will iterate.
    pub fn scenario_count(&self) -> usize {
        self.scenario_count
    }

    /// Execute every scenario to completion and return the collected series.
    pub fn run(mut self) -> RunOutcome {
        let n = self.operations.len();
        info!(
            operations = n,
            scenarios = self.scenario_count,
            "executing massive insertion benchmark"
        );

        let pb = ProgressBar::new(self.scenario_count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut failed_operations = 0;
        for (i, permutation) in Permutations::new(n).enumerate() {
            let scenario = i + 1;
            info!(scenario, total = self.scenario_count, "scenario");
            pb.set_message(format!("scenario {scenario}"));

            for index in permutation {
                match self.executor.run(self.operations.get_mut(index), scenario) {
                    Ok(elapsed) => {
                        if let Err(e) = self.series[index].record(elapsed.as_secs_f64()) {
                            error!(
                                backend = %self.operations.get(index).id,
                                scenario,
                                error = %e,
                                "sample series rejected measurement"
                            );
                            failed_operations += 1;
                        }
                    }
                    Err(e) => {
                        // Best-effort posture: log with full context and move
                        // on to the next operation in this permutation.
                        error!(error = %e, "operation failed; sample left unrecorded");
                        failed_operations += 1;
                    }
                }
            }
            pb.inc(1);
        }
        pb.finish_with_message("Complete");

        info!(failed_operations, "massive insertion benchmark finished");

        let ids: Vec<String> = self.operations.ids().map(String::from).collect();
        let backends = ids
            .into_iter()
            .zip(self.series)
            .map(|(id, series)| BackendSeries { id, series })
            .collect();

        RunOutcome {
            backends,
            scenario_count: self.scenario_count,
            failed_operations,
        }
    }
}

/// Aggregate the outcome into the final report.
///
/// Backends with an empty series are omitted: statistics over zero samples
/// are meaningless and must not reach the report.
pub fn build_report(outcome: &RunOutcome, dataset_dir: &Path) -> Report {
    let entries = outcome
        .backends
        .iter()
        .filter_map(|backend| {
            AggregateStats::from_samples(backend.series.samples()).map(|stats| ReportEntry {
                backend: backend.id.clone(),
                metrics: BackendMetrics::from(&stats),
            })
        })
        .collect();

    Report {
        meta: ReportMeta {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now(),
            dataset_dir: dataset_dir.display().to_string(),
            operation_count: outcome.backends.len(),
            scenario_count: outcome.scenario_count,
        },
        entries,
    }
}
