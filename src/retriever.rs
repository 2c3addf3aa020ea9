//! Nearest-neighbor response lookup with an emotion-keyed fallback.
//!
//! Embeds the query into the fitted TF-IDF space, scores it against every
//! corpus row by inner product (cosine similarity, since both sides are
//! L2-normalized), and returns the response of the best-scoring row. When
//! the best score falls below the similarity threshold the match is ignored
//! entirely and a canned supportive message keyed by the inferred emotion is
//! returned instead.
//!
//! This boundary never fails: internal scoring errors are logged and mapped
//! to a generic supportive message.

use tracing::error;

use crate::classifier::Emotion;
use crate::dataset::CorpusTable;
use crate::error::{EngineError, Result};
use crate::vectorizer::{EmbeddingMatrix, VectorizerState};

/// Returned when the retriever hits an internal error; per the pipeline
/// contract the user always sees a plausible supportive message.
const RECOVERY_FALLBACK: &str =
    "I'm here to listen and support you. Could you tell me more about what you're experiencing?";

/// Canned fallback when no corpus row is similar enough, keyed by emotion.
fn fallback_for(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Angry => {
            "I understand you're feeling angry. Would you like to tell me more about what's causing these feelings?"
        }
        Emotion::Sad => {
            "I hear that you're feeling down. I'm here to listen. Would you like to share what's troubling you?"
        }
        Emotion::Anxious => {
            "It sounds like you're dealing with anxiety. Remember to take deep breaths. Would you like to talk about what's making you feel this way?"
        }
        Emotion::Neutral => {
            "I'm here to listen and support you. Could you tell me more about what's on your mind?"
        }
    }
}

/// Best-scoring corpus row for the query, as `(row index, score)`.
///
/// Argmax scan with strict `>`, so ties resolve to the lowest row index.
/// Returns `None` for an empty matrix.
///
/// # Errors
/// [`EngineError::Embedding`] on a query/row dimension mismatch or a
/// non-finite similarity score.
fn best_match(
    query: &str,
    state: &VectorizerState,
    matrix: &EmbeddingMatrix,
) -> Result<Option<(usize, f32)>> {
    let embedded = state.embed(&query.to_lowercase());

    let mut best: Option<(usize, f32)> = None;
    for (idx, row) in matrix.iter().enumerate() {
        if row.len() != embedded.len() {
            return Err(EngineError::Embedding(format!(
                "row {idx} has {} dimensions, query has {}",
                row.len(),
                embedded.len()
            )));
        }
        let score: f32 = embedded.iter().zip(row.iter()).map(|(a, b)| a * b).sum();
        if !score.is_finite() {
            return Err(EngineError::Embedding(format!(
                "non-finite similarity score at row {idx}"
            )));
        }
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((idx, score));
        }
    }

    Ok(best)
}

/// Retrieve the response for `query`.
///
/// Returns the `response` field of the most similar corpus row when its
/// similarity is at least `threshold`; otherwise the emotion-keyed fallback.
/// Total: any internal failure is recovered into a generic supportive
/// message and logged, never propagated.
pub fn retrieve(
    query: &str,
    state: &VectorizerState,
    matrix: &EmbeddingMatrix,
    corpus: &CorpusTable,
    emotion: Emotion,
    threshold: f32,
) -> String {
    match best_match(query, state, matrix) {
        Ok(Some((idx, score))) if score >= threshold => match corpus.get(idx) {
            Some(record) => record.response.clone(),
            None => {
                error!(idx, "best-match index has no corpus row");
                RECOVERY_FALLBACK.to_string()
            }
        },
        Ok(_) => fallback_for(emotion).to_string(),
        Err(e) => {
            error!("error finding response: {e}");
            RECOVERY_FALLBACK.to_string()
        }
    }
}
