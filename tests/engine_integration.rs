//! End-to-end pipeline tests: CSV on disk → loaded corpus → fitted
//! vectorizer → classified, retrieved replies.

use std::io::Write;
use tempfile::NamedTempFile;

use solace::classifier::Emotion;
use solace::config::SolaceConfig;
use solace::engine::Engine;
use solace::error::EngineError;

fn write_dataset(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn engine_for(content: &str) -> (Engine, NamedTempFile) {
    let file = write_dataset(content);
    let config = SolaceConfig {
        dataset_path: Some(file.path().to_path_buf()),
        ..SolaceConfig::default()
    };
    let engine = Engine::init(&config).unwrap();
    (engine, file)
}

const DATASET: &str = "\
statement,status
I feel sad and alone,It is okay to feel this way
Work stress keeps me awake at night,Try winding down before bed
I had a fight with my friend,Conflicts with close people hurt
I feel sad and alone,It is okay to feel this way
";

#[test]
fn init_loads_cleans_and_fits() {
    let (engine, _file) = engine_for(DATASET);
    // Four raw rows, one exact duplicate removed.
    assert_eq!(engine.corpus_len(), 3);
}

#[test]
fn matched_query_returns_corpus_response_lowercased() {
    let (engine, _file) = engine_for(DATASET);
    let reply = engine.process("work stress keeps me awake at night");
    assert_eq!(reply.response, "try winding down before bed");
    assert_eq!(reply.emotion, Emotion::Anxious);
}

#[test]
fn emotion_and_retrieval_are_independent() {
    let (engine, _file) = engine_for(DATASET);
    // An angry message that still matches a corpus row: retrieval wins,
    // but the inferred emotion rides along in the reply.
    let reply = engine.process("i am furious that work stress keeps me awake at night");
    assert_eq!(reply.emotion, Emotion::Angry);
    assert_eq!(reply.response, "try winding down before bed");
}

#[test]
fn unmatched_query_falls_back_by_emotion() {
    let (engine, _file) = engine_for(DATASET);
    let reply = engine.process("so depressed about zzzz");
    assert_eq!(reply.emotion, Emotion::Sad);
    assert_eq!(
        reply.response,
        "I hear that you're feeling down. I'm here to listen. Would you like to share what's troubling you?"
    );
}

#[test]
fn unmatched_neutral_query_uses_default_fallback() {
    let (engine, _file) = engine_for(DATASET);
    let reply = engine.process("qqqq wwww");
    assert_eq!(reply.emotion, Emotion::Neutral);
    assert_eq!(
        reply.response,
        "I'm here to listen and support you. Could you tell me more about what's on your mind?"
    );
}

#[test]
fn process_is_total_over_hostile_inputs() {
    let (engine, _file) = engine_for(DATASET);
    let long = "word ".repeat(50_000);
    for message in ["", "\n\t", "'\";--", "🦀 ünïcödé", long.as_str()] {
        let reply = engine.process(message);
        assert!(!reply.response.is_empty());
    }
}

#[test]
fn missing_dataset_aborts_initialization() {
    let config = SolaceConfig {
        dataset_path: Some("/definitely/not/here.csv".into()),
        ..SolaceConfig::default()
    };
    assert!(matches!(
        Engine::init(&config),
        Err(EngineError::DataUnavailable(_))
    ));
}

#[test]
fn malformed_dataset_aborts_initialization() {
    let file = write_dataset("statement,label\nhi,there\n");
    let config = SolaceConfig {
        dataset_path: Some(file.path().to_path_buf()),
        ..SolaceConfig::default()
    };
    assert!(matches!(
        Engine::init(&config),
        Err(EngineError::Schema(_))
    ));
}

#[test]
fn concurrent_queries_share_one_engine() {
    let (engine, _file) = engine_for(DATASET);
    let engine = std::sync::Arc::new(engine);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.process("i feel sad and alone").response)
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "it is okay to feel this way");
    }
}
