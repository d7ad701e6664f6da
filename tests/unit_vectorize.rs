// Unit tests for vocabulary pruning and the document-term matrix:
// pruning monotonicity, determinism, and the insufficient-data
// preconditions.

use prism::error::AnalyticsError;
use prism::text::TextPreprocessor;
use prism::topics::{VectorizerParams, VocabularyVectorizer};

fn vectorizer(params: VectorizerParams) -> VocabularyVectorizer {
    VocabularyVectorizer::new(TextPreprocessor::new(Vec::<String>::new()), params)
}

fn corpus() -> Vec<String> {
    [
        "haptic gloves improve surgical training outcomes",
        "surgical training simulations reduce error rates",
        "haptic feedback hardware remains expensive",
        "training outcomes improve with repeated simulations",
        "hardware costs fall as haptic adoption grows",
        "error rates fall with simulation training",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn matrix_row_count_equals_corpus_size() {
    let v = vectorizer(VectorizerParams {
        min_doc_freq: 1,
        ..Default::default()
    });
    let docs = corpus();
    let (vocab, dtm) = v.fit(&docs).unwrap();
    assert_eq!(dtm.n_docs(), docs.len());
    assert_eq!(dtm.n_terms(), vocab.len());
}

#[test]
fn vocabulary_never_exceeds_max_features() {
    let v = vectorizer(VectorizerParams {
        min_doc_freq: 1,
        max_features: 4,
        ..Default::default()
    });
    let (vocab, dtm) = v.fit(&corpus()).unwrap();
    assert!(vocab.len() <= 4);
    assert_eq!(dtm.n_terms(), vocab.len());
}

#[test]
fn raising_min_doc_freq_never_grows_the_vocabulary() {
    let docs = corpus();
    let mut previous = usize::MAX;
    for min_df in 1..=3 {
        let v = vectorizer(VectorizerParams {
            min_doc_freq: min_df,
            ..Default::default()
        });
        let size = match v.fit(&docs) {
            Ok((vocab, _)) => vocab.len(),
            // Pruning everything away is the monotone limit.
            Err(AnalyticsError::InsufficientData(_)) => 0,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert!(size <= previous, "min_df={min_df} grew vocab to {size}");
        previous = size;
    }
}

#[test]
fn raising_max_features_never_shrinks_the_vocabulary() {
    let docs = corpus();
    let mut previous = 0;
    for max_features in [2, 5, 20, 500] {
        let v = vectorizer(VectorizerParams {
            min_doc_freq: 1,
            max_features,
            ..Default::default()
        });
        let (vocab, _) = v.fit(&docs).unwrap();
        assert!(vocab.len() >= previous);
        previous = vocab.len();
    }
}

#[test]
fn near_universal_terms_are_pruned() {
    // "training" appears in 4 of 6 documents; with a ratio of 0.5 it
    // crosses the ceiling and must go.
    let docs = corpus();
    let v = vectorizer(VectorizerParams {
        min_doc_freq: 1,
        max_doc_freq_ratio: 0.5,
        ..Default::default()
    });
    let (vocab, _) = v.fit(&docs).unwrap();
    assert!(vocab.index_of("training").is_none());
    assert!(vocab.index_of("haptic").is_some());
}

#[test]
fn fit_is_deterministic() {
    let docs = corpus();
    let v = vectorizer(VectorizerParams::default());
    let (vocab_a, dtm_a) = v.fit(&docs).unwrap();
    let (vocab_b, dtm_b) = v.fit(&docs).unwrap();
    assert_eq!(vocab_a.terms(), vocab_b.terms());
    assert_eq!(dtm_a.rows(), dtm_b.rows());
}

#[test]
fn one_document_corpus_is_insufficient() {
    let v = vectorizer(VectorizerParams::default());
    let docs = vec!["a lonely document about haptics".to_string()];
    assert!(matches!(
        v.fit(&docs),
        Err(AnalyticsError::InsufficientData(_))
    ));
}

#[test]
fn pruning_everything_is_insufficient() {
    // Both documents share their whole vocabulary, so every term's
    // document frequency is 2 of 2 — above a 0.4 ceiling.
    let v = vectorizer(VectorizerParams {
        min_doc_freq: 1,
        max_doc_freq_ratio: 0.4,
        ..Default::default()
    });
    let docs = vec![
        "alpha channel rendering".to_string(),
        "alpha channel rendering".to_string(),
    ];
    assert!(matches!(
        v.fit(&docs),
        Err(AnalyticsError::InsufficientData(_))
    ));
}

#[test]
fn transform_reuses_the_fitted_vocabulary() {
    let docs = corpus();
    let v = vectorizer(VectorizerParams {
        min_doc_freq: 1,
        ..Default::default()
    });
    let (vocab, _) = v.fit(&docs).unwrap();

    let unseen = vec!["haptic training with unheard neologisms".to_string()];
    let dtm = v.transform(&vocab, &unseen);
    assert_eq!(dtm.n_docs(), 1);
    assert_eq!(dtm.n_terms(), vocab.len());
    // Known terms counted, out-of-vocabulary terms silently ignored.
    let haptic = vocab.index_of("haptic").unwrap();
    assert!(dtm.row(0).iter().any(|&(idx, count)| idx == haptic && count == 1));
}
