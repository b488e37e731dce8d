//! Backend Adapter Registry
//!
//! Storage backends under test are reached through the [`BulkLoadBackend`]
//! capability trait. Each backend is registered explicitly as a
//! [`BackendBinding`] (identifier + storage path + adapter); the ordered
//! collection of bindings forms the [`OperationSet`] for a run. The set is
//! fixed at construction and never mutated during execution.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Capability set a storage backend must offer to participate in a
/// massive-insertion run.
///
/// Every method may fail; failures surface as values and never abort the
/// surrounding run. Implementations own whatever engine handle they need
/// between `create_for_bulk_load` and `shutdown`.
pub trait BulkLoadBackend {
    /// Construct/open the backend in bulk-load mode at the given storage path.
    fn create_for_bulk_load(&mut self, path: &Path) -> Result<(), BackendError>;

    /// Ingest the dataset through the backend's bulk-load fast path.
    /// This is the only step that is timed.
    fn bulk_load(&mut self, dataset_dir: &Path) -> Result<(), BackendError>;

    /// Cleanly shut down the backend handle opened by `create_for_bulk_load`.
    fn shutdown(&mut self) -> Result<(), BackendError>;

    /// Remove the backend's on-disk artifacts so the next scenario starts
    /// from a clean slate.
    fn delete_path(&mut self, path: &Path) -> Result<(), BackendError>;
}

/// Error produced by a backend adapter step.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Filesystem-level failure (storage path creation, deletion, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Engine-specific failure, carried as a message from the adapter.
    #[error("{0}")]
    Engine(String),
}

impl BackendError {
    /// Convenience constructor for engine-specific failures.
    pub fn engine(message: impl Into<String>) -> Self {
        BackendError::Engine(message.into())
    }
}

/// One registered operation: a backend identifier bound to its exclusive
/// storage path and the adapter that drives it.
pub struct BackendBinding {
    /// Backend identifier (e.g. "orient", "titan", "neo4j", "sparksee").
    pub id: String,
    /// Storage path exclusively owned by this backend during a scenario.
    pub storage_path: PathBuf,
    pub(crate) adapter: Box<dyn BulkLoadBackend>,
}

impl BackendBinding {
    /// Bind a backend adapter to an identifier and storage path.
    pub fn new(
        id: impl Into<String>,
        storage_path: impl Into<PathBuf>,
        adapter: Box<dyn BulkLoadBackend>,
    ) -> Self {
        Self {
            id: id.into(),
            storage_path: storage_path.into(),
            adapter,
        }
    }
}

impl std::fmt::Debug for BackendBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendBinding")
            .field("id", &self.id)
            .field("storage_path", &self.storage_path)
            .finish_non_exhaustive()
    }
}

/// The fixed, ordered collection of all registered operations for one run.
///
/// Registration order is the canonical backend order: permutation indices,
/// sample series and report entries all follow it.
#[derive(Debug)]
pub struct OperationSet {
    bindings: Vec<BackendBinding>,
}

/// Error building an [`OperationSet`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two bindings share the same backend identifier.
    #[error("duplicate backend id '{0}' in operation set")]
    DuplicateBackend(String),
}

impl OperationSet {
    /// Build the operation set from an ordered list of bindings.
    ///
    /// Backend identifiers must be distinct; a duplicate is a registration
    /// bug and is rejected rather than silently merged.
    pub fn new(bindings: Vec<BackendBinding>) -> Result<Self, RegistryError> {
        for (i, binding) in bindings.iter().enumerate() {
            if bindings[..i].iter().any(|b| b.id == binding.id) {
                return Err(RegistryError::DuplicateBackend(binding.id.clone()));
            }
        }
        Ok(Self { bindings })
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the set is empty (a valid, zero-scenario run).
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Backend identifiers in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|b| b.id.as_str())
    }

    /// Binding at the given registration index.
    pub fn get(&self, index: usize) -> &BackendBinding {
        &self.bindings[index]
    }

    /// Mutable binding at the given registration index, for the executor.
    pub fn get_mut(&mut self, index: usize) -> &mut BackendBinding {
        &mut self.bindings[index]
    }
}
