//! Configuration loading from loadbench.toml
//!
//! Configuration can be specified in a `loadbench.toml` file in the project
//! root, discovered by walking up from the current directory. CLI flags
//! override file values.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// LoadBench configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoadbenchConfig {
    /// Filesystem locations.
    #[serde(default)]
    pub paths: PathsConfig,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Dataset and results locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory the dataset is loaded from.
    #[serde(default = "default_dataset_dir")]
    pub dataset_dir: String,
    /// Directory the results file is written under.
    #[serde(default = "default_results_dir")]
    pub results_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            dataset_dir: default_dataset_dir(),
            results_dir: default_results_dir(),
        }
    }
}

fn default_dataset_dir() -> String {
    "data".to_string()
}
fn default_results_dir() -> String {
    "results".to_string()
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format: "text" or "json".
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

impl LoadbenchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the
    /// current directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("loadbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as a TOML string.
    pub fn default_toml() -> String {
        r#"# LoadBench Configuration

[paths]
# Directory the dataset is loaded from
dataset_dir = "data"
# Directory the results file is written under
results_dir = "results"

[output]
# Report format: "text" or "json"
format = "text"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoadbenchConfig::default();
        assert_eq!(config.paths.dataset_dir, "data");
        assert_eq!(config.paths.results_dir, "results");
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [paths]
            dataset_dir = "/mnt/datasets/enron"

            [output]
            format = "json"
        "#;

        let config: LoadbenchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.paths.dataset_dir, "/mnt/datasets/enron");
        // Defaults should still apply
        assert_eq!(config.paths.results_dir, "results");
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn test_default_toml_parses() {
        let default_toml = LoadbenchConfig::default_toml();
        let config: LoadbenchConfig = toml::from_str(&default_toml).unwrap();
        assert_eq!(config.paths.dataset_dir, "data");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loadbench.toml");
        std::fs::write(&path, "[paths]\nresults_dir = \"out\"\n").unwrap();

        let config = LoadbenchConfig::load(&path).unwrap();
        assert_eq!(config.paths.results_dir, "out");
        assert_eq!(config.paths.dataset_dir, "data");
    }
}
