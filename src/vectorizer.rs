//! TF-IDF vectorizer for the reference corpus.
//!
//! Fits a vocabulary and inverse-document-frequency weights over the corpus
//! statements once at startup, then embeds arbitrary text into the same
//! space at query time. Embeddings are L2-normalized on both sides, so the
//! inner product used by the retriever behaves as a cosine similarity on a
//! `[0, 1]` scale.
//!
//! ## Conventions
//! - Tokens are runs of two or more word characters, lowercased
//!   (`\b\w\w+\b`); single-character words carry no weight.
//! - The vocabulary is capped at `max_vocabulary` terms, selected by total
//!   corpus frequency descending with lexicographic tie-break, and column
//!   indices are assigned in lexicographic order. Both rules are
//!   deterministic, so refitting the same corpus reproduces the same space.
//! - IDF is smoothed: `ln((1 + n_docs) / (1 + df)) + 1`.
//!
//! ## Quick example
//! ```rust
//! use solace::vectorizer;
//!
//! let statements = vec![
//!     "i feel sad today".to_string(),
//!     "work keeps me awake at night".to_string(),
//! ];
//! let (state, matrix) = vectorizer::fit(&statements, 1000);
//! assert_eq!(matrix.len(), 2);
//!
//! let query = state.embed("i feel sad today");
//! assert_eq!(query.len(), state.dimensions());
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// One L2-normalized TF-IDF row per corpus record, in corpus order.
pub type EmbeddingMatrix = Vec<Vec<f32>>;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Split text into lowercase word tokens of at least two characters.
fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// Fitted vocabulary and IDF weights.
///
/// Immutable after [`fit`]; shared read-only by all query-time lookups.
#[derive(Debug, Clone)]
pub struct VectorizerState {
    /// Term → column index.
    vocabulary: HashMap<String, usize>,
    /// Smoothed inverse document frequency per column.
    idf: Vec<f32>,
}

impl VectorizerState {
    /// Number of vocabulary dimensions.
    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }

    /// Embed text into the fitted TF-IDF space.
    ///
    /// Deterministic and total: out-of-vocabulary terms contribute zero
    /// weight, and a text with no in-vocabulary tokens embeds to the zero
    /// vector (which scores 0 against every corpus row). Non-zero vectors
    /// are L2-normalized.
    pub fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.idf.len()];

        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                vector[idx] += 1.0;
            }
        }

        for (value, idf) in vector.iter_mut().zip(self.idf.iter()) {
            *value *= idf;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }
}

/// Fit a vectorizer over the corpus statements and embed every statement.
///
/// Returns the fitted state plus one embedding row per input statement, in
/// input order — row `i` of the matrix belongs to statement `i`. Corpus
/// rows and queries go through the identical [`VectorizerState::embed`]
/// path, which keeps their similarity scores comparable.
pub fn fit(statements: &[String], max_vocabulary: usize) -> (VectorizerState, EmbeddingMatrix) {
    let mut term_count: HashMap<String, usize> = HashMap::new();
    let mut doc_count: HashMap<String, usize> = HashMap::new();

    for statement in statements {
        let tokens = tokenize(statement);
        let unique: HashSet<&String> = tokens.iter().collect();
        for token in &tokens {
            *term_count.entry(token.clone()).or_insert(0) += 1;
        }
        for token in unique {
            *doc_count.entry(token.clone()).or_insert(0) += 1;
        }
    }

    // Cap: keep the top terms by total corpus frequency, ties broken
    // lexicographically so the surviving set is deterministic.
    let mut ranked: Vec<(&String, &usize)> = term_count.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(max_vocabulary);

    // Column indices in lexicographic term order.
    let mut terms: Vec<&String> = ranked.iter().map(|(term, _)| *term).collect();
    terms.sort();

    let vocabulary: HashMap<String, usize> = terms
        .iter()
        .enumerate()
        .map(|(idx, term)| ((*term).clone(), idx))
        .collect();

    let n_docs = statements.len() as f32;
    let mut idf = vec![0.0f32; vocabulary.len()];
    for (term, &idx) in &vocabulary {
        let df = *doc_count.get(term).unwrap_or(&1) as f32;
        idf[idx] = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;
    }

    let state = VectorizerState { vocabulary, idf };
    let matrix = statements.iter().map(|s| state.embed(s)).collect();

    (state, matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_statements() -> Vec<String> {
        vec![
            "i feel sad and alone today".to_string(),
            "work stress keeps me awake at night".to_string(),
            "i had a calm and quiet morning".to_string(),
        ]
    }

    #[test]
    fn fit_produces_one_row_per_statement() {
        let statements = sample_statements();
        let (state, matrix) = fit(&statements, 1000);
        assert_eq!(matrix.len(), statements.len());
        for row in &matrix {
            assert_eq!(row.len(), state.dimensions());
        }
    }

    #[test]
    fn embed_is_deterministic() {
        let statements = sample_statements();
        let (state, _) = fit(&statements, 1000);
        let a = state.embed("i feel sad today");
        let b = state.embed("i feel sad today");
        assert_eq!(a, b);
    }

    #[test]
    fn embeddings_are_l2_normalized() {
        let statements = sample_statements();
        let (_, matrix) = fit(&statements, 1000);
        for row in &matrix {
            let norm: f32 = row.iter().map(|v| v * v).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 1e-5, "row norm was {norm}");
        }
    }

    #[test]
    fn identical_text_has_unit_similarity() {
        let statements = sample_statements();
        let (state, matrix) = fit(&statements, 1000);
        let query = state.embed(&statements[0]);
        let score: f32 = query.iter().zip(matrix[0].iter()).map(|(a, b)| a * b).sum();
        assert!((score - 1.0).abs() < 1e-5, "self-similarity was {score}");
    }

    #[test]
    fn out_of_vocabulary_text_embeds_to_zero() {
        let statements = sample_statements();
        let (state, _) = fit(&statements, 1000);
        let vector = state.embed("zzzz qqqq xxxx");
        assert!(vector.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn single_character_words_are_not_tokens() {
        let statements = sample_statements();
        let (state, _) = fit(&statements, 1000);
        // "i" and "a" appear in the corpus but never enter the vocabulary.
        let vector = state.embed("i a i a");
        assert!(vector.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn vocabulary_cap_is_enforced() {
        let statements = sample_statements();
        let (state, _) = fit(&statements, 4);
        assert_eq!(state.dimensions(), 4);
    }

    #[test]
    fn cap_tie_break_is_lexicographic() {
        // Every term appears exactly once, so the cap must fall back to
        // lexicographic order: "alpha" and "beta" survive, "gamma" does not.
        let statements = vec!["gamma beta alpha".to_string()];
        let (state, _) = fit(&statements, 2);
        assert!(state.embed("alpha").iter().any(|v| *v > 0.0));
        assert!(state.embed("beta").iter().any(|v| *v > 0.0));
        assert!(state.embed("gamma").iter().all(|v| *v == 0.0));
    }

    #[test]
    fn refit_reproduces_the_same_space() {
        let statements = sample_statements();
        let (state_a, matrix_a) = fit(&statements, 1000);
        let (_, matrix_b) = fit(&statements, 1000);
        assert_eq!(matrix_a, matrix_b);
        assert_eq!(state_a.embed("awake at night"), state_a.embed("awake at night"));
    }

    #[test]
    fn empty_statement_list_yields_empty_space() {
        let (state, matrix) = fit(&[], 1000);
        assert_eq!(state.dimensions(), 0);
        assert!(matrix.is_empty());
        assert!(state.embed("anything").is_empty());
    }
}
