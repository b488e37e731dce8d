//! LoadBench Example Harness
//!
//! Demonstrates wiring backend adapters into the harness and serves as a
//! template for a real massive-insertion suite. The "engines" here are toy
//! file-based stores so the example runs anywhere.
//!
//! Run with:
//!   cargo run --example massive_insertion                       # Run all backends
//!   cargo run --example massive_insertion -- list               # List backends
//!   cargo run --example massive_insertion -- '^(sled|csv)$'     # Filter backends
//!   cargo run --example massive_insertion -- --format json      # JSON report

use loadbench::{BackendBinding, BackendError, BulkLoadBackend};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Toy "engine": bulk load appends every dataset entry to a single file
/// under the storage path.
struct FileStore {
    writer: Option<BufWriter<File>>,
    rows: u64,
}

impl FileStore {
    fn new(rows: u64) -> Self {
        Self { writer: None, rows }
    }
}

impl BulkLoadBackend for FileStore {
    fn create_for_bulk_load(&mut self, path: &Path) -> Result<(), BackendError> {
        std::fs::create_dir_all(path)?;
        let file = File::create(path.join("store.dat"))?;
        self.writer = Some(BufWriter::new(file));
        Ok(())
    }

    fn bulk_load(&mut self, _dataset_dir: &Path) -> Result<(), BackendError> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| BackendError::engine("store not opened for bulk load"))?;
        for i in 0..self.rows {
            writeln!(writer, "{i},node-{i}")?;
        }
        writer.flush()?;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), BackendError> {
        self.writer = None;
        Ok(())
    }

    fn delete_path(&mut self, path: &Path) -> Result<(), BackendError> {
        if path.exists() {
            std::fs::remove_dir_all(path)?;
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let storage = PathBuf::from("target/loadbench-example");

    let bindings = vec![
        BackendBinding::new("tiny", storage.join("tiny"), Box::new(FileStore::new(10_000)) as _),
        BackendBinding::new(
            "medium",
            storage.join("medium"),
            Box::new(FileStore::new(100_000)) as _,
        ),
        BackendBinding::new(
            "large",
            storage.join("large"),
            Box::new(FileStore::new(500_000)) as _,
        ),
    ];

    loadbench::run(bindings)
}
