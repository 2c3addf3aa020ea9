//! # Solace (library root)
//!
//! This crate provides the core pipeline for the **solace** CLI and library:
//! - Corpus loading and normalization (`dataset`).
//! - TF-IDF vectorization of reference statements (`vectorizer`).
//! - Keyword-based emotion inference (`classifier`).
//! - Similarity-based response lookup with canned fallbacks (`retriever`).
//! - One-time initialization and the `process` entry point (`engine`).
//! - CLI parsing (`commands`), configuration (`config`), errors (`error`).
//!
//! In addition, this module exposes utilities for discovering the
//! per-platform configuration directory ([`config_dir`]) and resolving the
//! corpus CSV on disk ([`locate_dataset`]).
//!
//! ## Dataset layout & discovery
//! By default the corpus is expected as `dataset.csv` under your
//! per-platform config directory, e.g.:
//!
//! - macOS: `~/Library/Application Support/com.solace-chat.solace`
//! - Linux (XDG): `~/.config/solace`
//! - Windows: `C:\Users\<you>\AppData\Roaming\solace`
//!
//! [`locate_dataset`] resolves (in priority order) an explicit override
//! path, then `./dataset.csv` in the current working directory, then the
//! config-directory default. `solace init` writes a starter corpus there.

pub mod classifier;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod retriever;
pub mod vectorizer;

use directories::ProjectDirs;
use std::path::PathBuf;

use crate::error::{EngineError, Result};

/// File name of the corpus CSV inside the resolution locations.
pub const DATASET_FILE: &str = "dataset.csv";

/// Return the per-platform configuration directory used by solace.
///
/// Uses [`directories::ProjectDirs`] with the application triple
/// `("com", "solace-chat", "solace")`, so you get the right place on each
/// OS. The directory is **not** created by this function; callers that need
/// it should create it with `fs::create_dir_all`.
///
/// # Errors
/// Returns an error if the platform configuration directory cannot be
/// determined (rare, but possible in heavily sandboxed environments).
pub fn config_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "solace-chat", "solace")
        .ok_or_else(|| EngineError::Config("unable to determine config directory".to_string()))?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

/// Resolve the corpus CSV on disk.
///
/// Picks the dataset from (in priority order):
/// 1. An explicit override path — typically from the config file.
/// 2. `./dataset.csv` in the current working directory.
/// 3. The default location under the config dir: `config_dir()/dataset.csv`.
///
/// An override that does not point at an existing file resolves to `None`
/// rather than silently falling through to the other locations.
pub fn locate_dataset(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return path.is_file().then_some(path);
    }

    if let Ok(cwd) = std::env::current_dir() {
        let candidate = cwd.join(DATASET_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    let candidate = config_dir().ok()?.join(DATASET_FILE);
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn config_dir_resolves() {
        let dir = config_dir().expect("has a config dir");
        assert!(dir.ends_with("solace") || dir.to_string_lossy().contains("solace"));
    }

    #[test]
    fn locate_dataset_honors_existing_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "statement,status").unwrap();
        let found = locate_dataset(Some(file.path().to_path_buf()));
        assert_eq!(found, Some(file.path().to_path_buf()));
    }

    #[test]
    fn locate_dataset_rejects_missing_override() {
        let found = locate_dataset(Some(PathBuf::from("/nonexistent/dataset.csv")));
        assert!(found.is_none());
    }
}
