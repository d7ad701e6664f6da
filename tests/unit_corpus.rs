// Unit tests for corpus aggregation: cache lifecycle, source ordering,
// candidate-field resolution, and load failures.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use prism::corpus::{
    DimensionCorpusAggregator, JsonRecordSource, RecordSource, SourceKind, StaticSource,
};
use prism::error::{AnalyticsError, Result};

/// A source that counts how many times it was loaded, to observe the
/// compute-once cache behavior from the outside.
struct CountingSource {
    loads: Arc<AtomicUsize>,
}

impl RecordSource for CountingSource {
    fn source_id(&self) -> &str {
        "counting"
    }

    fn source_tag(&self) -> &str {
        "test"
    }

    fn load(&self) -> Result<Vec<String>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(vec!["one".to_string(), "two".to_string()])
    }
}

#[test]
fn corpus_is_loaded_once_and_shared() {
    let loads = Arc::new(AtomicUsize::new(0));
    let mut agg = DimensionCorpusAggregator::new();
    agg.register(
        "maturity",
        Box::new(CountingSource {
            loads: Arc::clone(&loads),
        }),
    );

    let first = agg.get_corpus("maturity").unwrap();
    let second = agg.get_corpus("maturity").unwrap();
    assert!(Arc::ptr_eq(&first, &second), "cache must return the same snapshot");
    assert_eq!(loads.load(Ordering::SeqCst), 1);
}

#[test]
fn invalidate_forces_a_reload() {
    let loads = Arc::new(AtomicUsize::new(0));
    let mut agg = DimensionCorpusAggregator::new();
    agg.register(
        "maturity",
        Box::new(CountingSource {
            loads: Arc::clone(&loads),
        }),
    );

    let first = agg.get_corpus("maturity").unwrap();
    agg.invalidate("maturity");
    let second = agg.get_corpus("maturity").unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(loads.load(Ordering::SeqCst), 2);
    // The reloaded corpus carries the same content.
    assert_eq!(first.texts(), second.texts());
}

#[test]
fn documents_concatenate_in_registration_order() {
    let mut agg = DimensionCorpusAggregator::new();
    agg.register(
        "scalability",
        Box::new(StaticSource::new(
            "blogs",
            "blog",
            vec!["first blog".to_string(), "second blog".to_string()],
        )),
    );
    agg.register(
        "scalability",
        Box::new(StaticSource::new(
            "papers",
            "research-paper",
            vec!["first paper".to_string()],
        )),
    );

    let corpus = agg.get_corpus("scalability").unwrap();
    assert_eq!(corpus.len(), 3);
    assert_eq!(
        corpus.texts(),
        vec!["first blog", "second blog", "first paper"]
    );
    assert_eq!(corpus.source_tags(), vec!["blog", "blog", "research-paper"]);
    // Document ids are positions in the combined ordered list.
    let ids: Vec<usize> = corpus.documents.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn unknown_dimension_is_a_typed_error() {
    let agg = DimensionCorpusAggregator::new();
    assert!(matches!(
        agg.get_corpus("nope"),
        Err(AnalyticsError::UnknownDimension(_))
    ));
}

#[test]
fn json_source_resolves_candidate_fields_in_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"abstract": "an abstract", "content": "ignored"}},
            {{"content": "fallback content"}},
            {{"unrelated": 7}}
        ]"#
    )
    .unwrap();

    let source = JsonRecordSource::new(file.path(), "papers", SourceKind::ResearchPaper);
    let records = source.load().unwrap();
    // First candidate wins; missing fields fall through; a record with
    // no text field degrades to an empty document, not an error.
    assert_eq!(records, vec!["an abstract", "fallback content", ""]);
}

#[test]
fn json_source_missing_file_is_a_load_error() {
    let source = JsonRecordSource::new(
        "/nonexistent/records.json",
        "ghost",
        SourceKind::Blog,
    );
    assert!(matches!(source.load(), Err(AnalyticsError::Load { .. })));
}

#[test]
fn json_source_malformed_json_is_a_load_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "this is not json").unwrap();
    let source = JsonRecordSource::new(file.path(), "bad", SourceKind::Blog);
    assert!(matches!(source.load(), Err(AnalyticsError::Load { .. })));
}

#[test]
fn clear_drops_every_dimension() {
    let mut agg = DimensionCorpusAggregator::new();
    agg.register(
        "a",
        Box::new(StaticSource::new("s1", "t", vec!["x".to_string()])),
    );
    agg.register(
        "b",
        Box::new(StaticSource::new("s2", "t", vec!["y".to_string()])),
    );

    let a1 = agg.get_corpus("a").unwrap();
    let b1 = agg.get_corpus("b").unwrap();
    agg.clear();
    assert!(!Arc::ptr_eq(&a1, &agg.get_corpus("a").unwrap()));
    assert!(!Arc::ptr_eq(&b1, &agg.get_corpus("b").unwrap()));
}
