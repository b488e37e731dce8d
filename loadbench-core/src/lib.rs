#![warn(missing_docs)]
//! LoadBench Core - Orchestration Runtime
//!
//! This crate provides the execution environment for bulk-load benchmarks:
//! - [`BulkLoadBackend`] capability trait for storage-backend adapters
//! - Explicit operation registration via [`BackendBinding`] and [`OperationSet`]
//! - Lazy permutation generation over the operation set ([`Permutations`])
//! - Per-backend elapsed-time collection with a hard capacity bound ([`SampleSeries`])
//! - The scenario executor driving create → load → shutdown → delete

mod backend;
mod executor;
mod permute;
mod series;

pub use backend::{BackendBinding, BackendError, BulkLoadBackend, OperationSet, RegistryError};
pub use executor::{ExecutionError, ScenarioExecutor, ScenarioStep};
pub use permute::{permutation_count, Permutations};
pub use series::{SampleSeries, SeriesError};
