//! Error types for the solace engine.
//!
//! Startup errors (`DataUnavailable`, `Schema`) are fatal: the engine cannot
//! serve without a corpus, so they propagate out of initialization. Per-query
//! errors (`Embedding`) never cross the pipeline boundary; the retriever and
//! orchestrator convert them into supportive fallback messages.

/// Errors that can occur while loading the corpus or answering a query.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The corpus resource could not be located or opened.
    #[error("dataset unavailable: {0}")]
    DataUnavailable(String),

    /// The corpus resource is missing required columns or usable rows.
    #[error("dataset schema error: {0}")]
    Schema(String),

    /// Query vectorization or similarity scoring failed.
    #[error("embedding failure: {0}")]
    Embedding(String),

    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure at the output boundary.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for solace results.
pub type Result<T> = std::result::Result<T, EngineError>;
