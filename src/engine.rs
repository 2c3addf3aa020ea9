//! Pipeline orchestrator.
//!
//! Composes the loader, vectorizer, classifier and retriever into a single
//! `process(message) -> Reply` call. Initialization (load + fit) happens
//! once; afterwards the engine is immutable and can be shared freely across
//! concurrent queries.
//!
//! ## Quick example
//! ```no_run
//! use solace::config::SolaceConfig;
//! use solace::engine::Engine;
//!
//! # fn main() -> Result<(), solace::error::EngineError> {
//! let engine = Engine::init(&SolaceConfig::default())?;
//! let reply = engine.process("i feel worried about tomorrow");
//! println!("[{}] {}", reply.emotion, reply.response);
//! # Ok(()) }
//! ```

use once_cell::sync::OnceCell;
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info};

use crate::classifier::{self, Emotion};
use crate::config::SolaceConfig;
use crate::dataset::{self, CorpusTable};
use crate::error::{EngineError, Result};
use crate::retriever;
use crate::vectorizer::{self, EmbeddingMatrix, VectorizerState};

/// Returned if the pipeline itself fails in an unforeseen way; `process`
/// never surfaces a raw error to the caller.
const PROCESSING_FALLBACK: &str =
    "I apologize, but I'm having trouble processing your message. Could you try expressing that in a different way?";

static ENGINE: OnceCell<Engine> = OnceCell::new();

/// The full boundary contract for the outer layer: best-effort response
/// text plus the inferred emotion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub response: String,
    pub emotion: Emotion,
}

/// Immutable state bundle produced by one-time initialization.
pub struct Engine {
    corpus: CorpusTable,
    state: VectorizerState,
    matrix: EmbeddingMatrix,
    threshold: f32,
}

impl Engine {
    /// Load the corpus and fit the vectorizer.
    ///
    /// Fatal on a missing or malformed corpus: the engine cannot serve
    /// without one, so these errors propagate instead of being swallowed.
    pub fn init(config: &SolaceConfig) -> Result<Self> {
        let path = crate::locate_dataset(config.dataset_path.clone()).ok_or_else(|| {
            EngineError::DataUnavailable(format!(
                "{} not found; run `solace init` or set dataset_path in config.yaml",
                crate::DATASET_FILE
            ))
        })?;

        let corpus = dataset::load(&path)?;
        let (state, matrix) = vectorizer::fit(&corpus.statements(), config.max_vocabulary);
        info!(
            rows = corpus.len(),
            dimensions = state.dimensions(),
            "engine initialized"
        );

        Ok(Self {
            corpus,
            state,
            matrix,
            threshold: config.similarity_threshold,
        })
    }

    /// Build an engine from an already-loaded corpus.
    ///
    /// Bypasses resource resolution, which keeps tests deterministic with
    /// injected fixtures.
    pub fn from_corpus(corpus: CorpusTable, config: &SolaceConfig) -> Self {
        let (state, matrix) = vectorizer::fit(&corpus.statements(), config.max_vocabulary);
        Self {
            corpus,
            state,
            matrix,
            threshold: config.similarity_threshold,
        }
    }

    /// Number of corpus rows backing the engine.
    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }

    /// Answer a user message.
    ///
    /// Classifies the emotion, retrieves the most similar pre-recorded
    /// response (or an emotion-keyed fallback), and merges the two. Never
    /// panics for any input: a panic escaping the inner pipeline is caught
    /// at this one boundary and mapped to a generic fallback.
    pub fn process(&self, message: &str) -> Reply {
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.process_inner(message)));
        result.unwrap_or_else(|_| {
            error!("pipeline panicked while processing a message");
            Reply {
                response: PROCESSING_FALLBACK.to_string(),
                emotion: Emotion::Neutral,
            }
        })
    }

    fn process_inner(&self, message: &str) -> Reply {
        let emotion = classifier::classify(message);
        let response = retriever::retrieve(
            message,
            &self.state,
            &self.matrix,
            &self.corpus,
            emotion,
            self.threshold,
        );
        Reply { response, emotion }
    }
}

/// Process-wide engine, initialized at most once.
///
/// Concurrent first calls race on the same cell; only one performs the
/// load-and-fit and every caller observes the same fully-built engine.
pub fn shared_engine(config: &SolaceConfig) -> Result<&'static Engine> {
    ENGINE.get_or_try_init(|| Engine::init(config))
}
