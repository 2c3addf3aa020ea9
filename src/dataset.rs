//! Corpus loading and normalization.
//!
//! The reference corpus is a CSV file with a `statement` column and a
//! response column (named `status` in the shipped starter dataset;
//! `response` is accepted as an alias). Loading applies a fixed cleaning pipeline, in
//! order:
//!
//! 1. Reject rows where either field is empty.
//! 2. Remove exact-duplicate rows (full-row equality, first occurrence
//!    kept). Deduplication runs **before** lowercasing, so two rows that
//!    differ only in case both survive.
//! 3. Lowercase both fields.
//!
//! The resulting [`CorpusTable`] is immutable for the process lifetime and
//! its row order is stable — the row index is the join key to the embedding
//! matrix built by [`crate::vectorizer::fit`].

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{EngineError, Result};

/// A single reference statement with its pre-recorded response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRecord {
    /// Lowercased reference statement, matched against queries.
    pub statement: String,
    /// Lowercased response returned when this statement is the best match.
    pub response: String,
}

/// Ordered, cleaned corpus. Row position joins records to embedding rows.
#[derive(Debug, Clone)]
pub struct CorpusTable {
    records: Vec<CorpusRecord>,
}

impl CorpusTable {
    /// Number of corpus rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no rows. Never the case after [`load`].
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row at `idx`, if present.
    pub fn get(&self, idx: usize) -> Option<&CorpusRecord> {
        self.records.get(idx)
    }

    /// All statements, in row order, for fitting the vectorizer.
    pub fn statements(&self) -> Vec<String> {
        self.records.iter().map(|r| r.statement.clone()).collect()
    }

    /// Iterate over records in row order.
    pub fn iter(&self) -> impl Iterator<Item = &CorpusRecord> {
        self.records.iter()
    }
}

const STATEMENT_COLUMN: &str = "statement";
const RESPONSE_COLUMNS: [&str; 2] = ["status", "response"];

/// Load and clean the corpus from a CSV file.
///
/// # Errors
/// - [`EngineError::DataUnavailable`] if the file cannot be opened.
/// - [`EngineError::Schema`] if required columns are missing, the CSV is
///   malformed, or no usable rows remain after cleaning.
pub fn load(path: &Path) -> Result<CorpusTable> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| EngineError::DataUnavailable(format!("{}: {e}", path.display())))?;

    let headers = reader
        .headers()
        .map_err(|e| EngineError::Schema(e.to_string()))?
        .clone();
    let column_count = headers.len();

    let statement_idx = headers
        .iter()
        .position(|h| h == STATEMENT_COLUMN)
        .ok_or_else(|| {
            EngineError::Schema(format!("missing required column `{STATEMENT_COLUMN}`"))
        })?;
    let response_idx = headers
        .iter()
        .position(|h| RESPONSE_COLUMNS.contains(&h))
        .ok_or_else(|| {
            EngineError::Schema("missing required column `status` (or `response`)".to_string())
        })?;

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row.map_err(|e| EngineError::Schema(e.to_string()))?;

        let statement = row.get(statement_idx).unwrap_or_default();
        let response = row.get(response_idx).unwrap_or_default();
        if statement.is_empty() || response.is_empty() {
            continue;
        }

        // Dedup on the raw pair, before lowercasing.
        if !seen.insert((statement.to_owned(), response.to_owned())) {
            continue;
        }

        records.push(CorpusRecord {
            statement: statement.to_lowercase(),
            response: response.to_lowercase(),
        });
    }

    if records.is_empty() {
        return Err(EngineError::Schema(format!(
            "no usable rows in {}",
            path.display()
        )));
    }

    info!(
        rows = records.len(),
        columns = column_count,
        "loaded response corpus from {}",
        path.display()
    );
    for record in records.iter().take(5) {
        debug!(statement = %record.statement, response = %record.response, "corpus row");
    }

    Ok(CorpusTable { records })
}
