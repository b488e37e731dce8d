#![warn(missing_docs)]
//! LoadBench CLI Library
//!
//! CLI infrastructure for massive-insertion benchmark binaries. Register the
//! backend adapters under test, then hand them to [`run`] from your `main`:
//!
//! ```ignore
//! use loadbench_core::BackendBinding;
//!
//! fn main() -> anyhow::Result<()> {
//!     let bindings = vec![
//!         BackendBinding::new("orient", "storage/orient", Box::new(OrientAdapter::new())),
//!         BackendBinding::new("neo4j", "storage/neo4j", Box::new(Neo4jAdapter::new())),
//!     ];
//!     loadbench_cli::run(bindings)
//! }
//! ```

mod config;
mod orchestrator;

pub use config::{LoadbenchConfig, OutputConfig, PathsConfig};
pub use orchestrator::{
    build_report, BackendSeries, Orchestrator, OrchestratorError, RunOutcome,
};

use clap::{Parser, Subcommand};
use loadbench_core::{BackendBinding, OperationSet};
use loadbench_report::{generate_json_report, persist_report, render_text, OutputFormat};
use regex::Regex;
use std::path::PathBuf;
use tracing::{error, info};

/// LoadBench CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "loadbench")]
#[command(author, version, about = "LoadBench - bulk-load benchmark harness")]
pub struct Cli {
    /// Optional subcommand (List, Run); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter backends by regex pattern
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Dataset directory (overrides loadbench.toml)
    #[arg(long)]
    pub dataset_dir: Option<PathBuf>,

    /// Results directory (overrides loadbench.toml)
    #[arg(long)]
    pub results_dir: Option<PathBuf>,

    /// Report format: text, json (overrides loadbench.toml)
    #[arg(long)]
    pub format: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered backends without executing
    List,
    /// Run the benchmark (default)
    Run,
}

/// Run the LoadBench CLI with the given backend bindings.
/// This is the main entry point for benchmark binaries.
pub fn run(bindings: Vec<BackendBinding>) -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli, bindings)
}

/// Run the LoadBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli, bindings: Vec<BackendBinding>) -> anyhow::Result<()> {
    // Initialize logging; try_init so embedding tests can call this twice.
    let filter = if cli.verbose {
        "loadbench=debug"
    } else {
        "loadbench=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .ok();

    // Discover loadbench.toml configuration (CLI flags override).
    let config = LoadbenchConfig::discover().unwrap_or_default();

    let bindings = filter_bindings(&cli.filter, bindings)?;

    match cli.command {
        Some(Commands::List) => list_backends(&bindings),
        Some(Commands::Run) | None => run_benchmark(&cli, &config, bindings)?,
    }

    Ok(())
}

/// Keep only the bindings whose backend id matches the filter regex.
fn filter_bindings(
    filter: &str,
    bindings: Vec<BackendBinding>,
) -> anyhow::Result<Vec<BackendBinding>> {
    let re = Regex::new(filter)
        .map_err(|e| anyhow::anyhow!("invalid backend filter '{}': {}", filter, e))?;
    Ok(bindings.into_iter().filter(|b| re.is_match(&b.id)).collect())
}

fn list_backends(bindings: &[BackendBinding]) {
    println!("LoadBench Plan:");
    for binding in bindings {
        println!(
            "├── {} (storage: {})",
            binding.id,
            binding.storage_path.display()
        );
    }
    println!("{} backends registered.", bindings.len());
}

fn run_benchmark(
    cli: &Cli,
    config: &LoadbenchConfig,
    bindings: Vec<BackendBinding>,
) -> anyhow::Result<()> {
    if bindings.is_empty() {
        println!("No backends matched the filter.");
        return Ok(());
    }

    // CLI flags win over loadbench.toml.
    let dataset_dir = cli
        .dataset_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.paths.dataset_dir));
    let results_dir = cli
        .results_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.paths.results_dir));
    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let operations = OperationSet::new(bindings)?;
    let orchestrator = Orchestrator::new(operations, &dataset_dir)?;

    println!(
        "Running {} scenarios against the dataset at {}...\n",
        orchestrator.scenario_count(),
        dataset_dir.display()
    );

    let outcome = orchestrator.run();
    let report = build_report(&outcome, &dataset_dir);

    let contents = match format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => generate_json_report(&report)?,
    };

    // Report I/O failure must not turn a completed run into a crash: the
    // statistics were already computed, so log and terminate normally.
    match persist_report(&results_dir, format.file_name(), &contents) {
        Ok(path) => info!(path = %path.display(), "results written"),
        Err(e) => error!(error = %e, "failed to write results file"),
    }

    Ok(())
}
