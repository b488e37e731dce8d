//! Scenario Executor
//!
//! Drives one operation of one scenario against its backend:
//! create → bulk-load (timed) → shutdown → delete. Only the load step is
//! measured; setup and teardown must still complete but never count towards
//! the sample. Teardown is attempted even when an earlier step failed, so
//! the storage path is clean before the next scenario touches the same
//! backend.

use crate::backend::{BackendBinding, BackendError};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

/// The step of a scenario at which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioStep {
    /// `create_for_bulk_load` failed.
    Create,
    /// `bulk_load` failed.
    BulkLoad,
    /// `shutdown` failed.
    Shutdown,
    /// `delete_path` failed.
    Delete,
}

impl std::fmt::Display for ScenarioStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScenarioStep::Create => "create",
            ScenarioStep::BulkLoad => "bulk-load",
            ScenarioStep::Shutdown => "shutdown",
            ScenarioStep::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Failure of one operation within one scenario.
///
/// The affected backend's sample for this scenario is left unrecorded; a
/// partial or zero measurement would poison the series.
#[derive(Debug, Error)]
#[error("backend '{backend}' failed at {step} in scenario {scenario}: {source}")]
pub struct ExecutionError {
    /// Backend identifier of the failed operation.
    pub backend: String,
    /// 1-based scenario index.
    pub scenario: usize,
    /// Step that failed first.
    pub step: ScenarioStep,
    /// Underlying adapter error.
    #[source]
    pub source: BackendError,
}

/// Executes single operations against their backend adapters.
#[derive(Debug)]
pub struct ScenarioExecutor {
    dataset_dir: PathBuf,
}

impl ScenarioExecutor {
    /// Executor loading from the given dataset directory.
    pub fn new(dataset_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset_dir: dataset_dir.into(),
        }
    }

    /// Dataset directory every bulk load reads from.
    pub fn dataset_dir(&self) -> &std::path::Path {
        &self.dataset_dir
    }

    /// Run one operation for the given 1-based scenario index.
    ///
    /// Returns the elapsed wall-clock time of the bulk-load step only.
    /// On failure the first failing step is reported; later teardown steps
    /// are still attempted and their own failures logged.
    pub fn run(
        &self,
        binding: &mut BackendBinding,
        scenario: usize,
    ) -> Result<Duration, ExecutionError> {
        let storage = binding.storage_path.clone();
        let id = binding.id.clone();
        let fail = |step: ScenarioStep, source: BackendError| ExecutionError {
            backend: id.clone(),
            scenario,
            step,
            source,
        };

        debug!(backend = %binding.id, scenario, "creating backend for bulk load");
        if let Err(e) = binding.adapter.create_for_bulk_load(&storage) {
            // Creation may have left partial artifacts behind.
            if let Err(cleanup) = binding.adapter.delete_path(&storage) {
                warn!(backend = %binding.id, scenario, error = %cleanup,
                    "cleanup after failed create also failed");
            }
            return Err(fail(ScenarioStep::Create, e));
        }

        let start = Instant::now();
        let load = binding.adapter.bulk_load(&self.dataset_dir);
        let elapsed = start.elapsed();

        // Teardown runs unconditionally, shutdown before delete.
        let shutdown = binding.adapter.shutdown();
        if let Err(ref e) = shutdown {
            warn!(backend = %binding.id, scenario, error = %e, "shutdown failed");
        }
        let delete = binding.adapter.delete_path(&storage);
        if let Err(ref e) = delete {
            warn!(backend = %binding.id, scenario, error = %e, "storage delete failed");
        }

        // First failing step wins; a dirty teardown invalidates the sample
        // even when the load itself completed.
        load.map_err(|e| fail(ScenarioStep::BulkLoad, e))?;
        shutdown.map_err(|e| fail(ScenarioStep::Shutdown, e))?;
        delete.map_err(|e| fail(ScenarioStep::Delete, e))?;

        debug!(backend = %binding.id, scenario, secs = elapsed.as_secs_f64(), "bulk load timed");
        Ok(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BulkLoadBackend;
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    /// Records the adapter calls it receives and fails the steps it was
    /// scripted to fail.
    struct ScriptedBackend {
        calls: Rc<RefCell<Vec<String>>>,
        fail_on: Option<ScenarioStep>,
    }

    impl ScriptedBackend {
        fn new(calls: Rc<RefCell<Vec<String>>>, fail_on: Option<ScenarioStep>) -> Self {
            Self { calls, fail_on }
        }

        fn step(&mut self, step: ScenarioStep) -> Result<(), BackendError> {
            self.calls.borrow_mut().push(step.to_string());
            if self.fail_on == Some(step) {
                Err(BackendError::engine(format!("scripted {step} failure")))
            } else {
                Ok(())
            }
        }
    }

    impl BulkLoadBackend for ScriptedBackend {
        fn create_for_bulk_load(&mut self, _path: &Path) -> Result<(), BackendError> {
            self.step(ScenarioStep::Create)
        }
        fn bulk_load(&mut self, _dataset_dir: &Path) -> Result<(), BackendError> {
            self.step(ScenarioStep::BulkLoad)
        }
        fn shutdown(&mut self) -> Result<(), BackendError> {
            self.step(ScenarioStep::Shutdown)
        }
        fn delete_path(&mut self, _path: &Path) -> Result<(), BackendError> {
            self.step(ScenarioStep::Delete)
        }
    }

    fn scripted(fail_on: Option<ScenarioStep>) -> (BackendBinding, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let backend = ScriptedBackend::new(Rc::clone(&calls), fail_on);
        let binding = BackendBinding::new("scripted", "/tmp/scripted-db", Box::new(backend));
        (binding, calls)
    }

    #[test]
    fn successful_run_drives_all_steps_in_order() {
        let (mut binding, calls) = scripted(None);
        let executor = ScenarioExecutor::new("/tmp/dataset");

        let elapsed = executor.run(&mut binding, 1).unwrap();
        assert!(elapsed >= Duration::ZERO);
        assert_eq!(
            *calls.borrow(),
            vec!["create", "bulk-load", "shutdown", "delete"]
        );
    }

    #[test]
    fn load_failure_still_tears_down() {
        let (mut binding, calls) = scripted(Some(ScenarioStep::BulkLoad));
        let executor = ScenarioExecutor::new("/tmp/dataset");

        let err = executor.run(&mut binding, 3).unwrap_err();
        assert_eq!(err.step, ScenarioStep::BulkLoad);
        assert_eq!(err.scenario, 3);
        assert_eq!(err.backend, "scripted");
        // Shutdown and delete still ran after the failed load.
        assert_eq!(
            *calls.borrow(),
            vec!["create", "bulk-load", "shutdown", "delete"]
        );
    }

    #[test]
    fn create_failure_skips_load_but_cleans_up() {
        let (mut binding, calls) = scripted(Some(ScenarioStep::Create));
        let executor = ScenarioExecutor::new("/tmp/dataset");

        let err = executor.run(&mut binding, 1).unwrap_err();
        assert_eq!(err.step, ScenarioStep::Create);
        assert_eq!(*calls.borrow(), vec!["create", "delete"]);
    }

    #[test]
    fn teardown_failure_invalidates_the_sample() {
        let (mut binding, calls) = scripted(Some(ScenarioStep::Shutdown));
        let executor = ScenarioExecutor::new("/tmp/dataset");

        let err = executor.run(&mut binding, 2).unwrap_err();
        assert_eq!(err.step, ScenarioStep::Shutdown);
        // Delete still attempted after the failed shutdown.
        assert_eq!(
            *calls.borrow(),
            vec!["create", "bulk-load", "shutdown", "delete"]
        );
    }
}
