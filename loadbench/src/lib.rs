#![warn(missing_docs)]
//! # LoadBench
//!
//! Benchmark orchestration harness for comparing the bulk-load ("massive
//! insertion") performance of interchangeable storage backends.
//!
//! LoadBench removes ordering bias from the comparison by running every
//! distinct ordering of the registered load operations:
//! - **Exhaustive scenarios**: all N! permutations of the operation set,
//!   strictly sequentially, each backend created, loaded, shut down and
//!   wiped per scenario
//! - **Failure isolation**: a failing backend step is logged and its sample
//!   left unrecorded; the rest of the run continues
//! - **Deterministic reporting**: mean / population variance / standard
//!   deviation per backend, rendered in a fixed order and persisted
//!   atomically
//!
//! ## Quick Start
//!
//! ```ignore
//! use loadbench::BackendBinding;
//!
//! fn main() -> anyhow::Result<()> {
//!     let bindings = vec![
//!         BackendBinding::new("orient", "storage/orient", Box::new(OrientAdapter::new())),
//!         BackendBinding::new("neo4j", "storage/neo4j", Box::new(Neo4jAdapter::new())),
//!     ];
//!     loadbench::run(bindings)
//! }
//! ```

// Re-export core types
pub use loadbench_core::{
    permutation_count, BackendBinding, BackendError, BulkLoadBackend, ExecutionError,
    OperationSet, Permutations, RegistryError, SampleSeries, ScenarioExecutor, ScenarioStep,
    SeriesError,
};

// Re-export stats
pub use loadbench_stats::{mean, std_dev, variance, AggregateStats};

// Re-export report types
pub use loadbench_report::{
    generate_json_report, persist_report, render_text, BackendMetrics, OutputFormat, Report,
    ReportEntry, ReportMeta, JSON_RESULTS_FILE_NAME, TEXT_RESULTS_FILE_NAME,
};

// Re-export orchestration
pub use loadbench_cli::{
    build_report, BackendSeries, LoadbenchConfig, Orchestrator, OrchestratorError, RunOutcome,
};

/// Run the LoadBench CLI harness.
///
/// Call this from your benchmark binary's `main()` with the backend
/// adapters under test.
pub use loadbench_cli::run;
