//! Application configuration.
//!
//! Defines the `SolaceConfig` struct and a `load_config` function that
//! reads it from a YAML file. Every field has a default that reproduces the
//! engine's stock behavior, so a missing or partial config file is fine.
//!
//! # Examples
//!
//! ```no_run
//! use solace::config::load_config;
//!
//! let config = load_config("/path/to/config.yaml").unwrap();
//! println!("{config:?}");
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{EngineError, Result};

fn default_max_vocabulary() -> usize {
    1000
}

fn default_similarity_threshold() -> f32 {
    0.1
}

/// Tunable engine parameters plus the dataset location override.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct SolaceConfig {
    /// Explicit path to the corpus CSV. When unset, the dataset is resolved
    /// via [`crate::locate_dataset`] (CWD, then the config directory).
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Vocabulary cap for the TF-IDF vectorizer.
    #[serde(default = "default_max_vocabulary")]
    pub max_vocabulary: usize,

    /// Minimum similarity for a corpus match; below it the retriever falls
    /// back to an emotion-keyed canned response.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,
}

impl Default for SolaceConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            max_vocabulary: default_max_vocabulary(),
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

/// Load the configuration from a YAML file.
///
/// # Errors
/// [`EngineError::Io`] if the file cannot be read,
/// [`EngineError::Config`] if it is not valid YAML for [`SolaceConfig`].
pub fn load_config(file: &str) -> Result<SolaceConfig> {
    let content = fs::read_to_string(file)?;
    let config: SolaceConfig =
        serde_yaml::from_str(&content).map_err(|e| EngineError::Config(e.to_string()))?;
    Ok(config)
}
