// Unit tests for LDA fitting: reproducibility, the simplex invariant,
// ranking determinism, and configuration preconditions.

use prism::error::AnalyticsError;
use prism::text::TextPreprocessor;
use prism::topics::{LdaModel, LdaParams, VectorizerParams, VocabularyVectorizer};

fn ten_doc_corpus() -> Vec<String> {
    [
        "headset optics improve display resolution and field of view",
        "display latency and optics dominate headset hardware reviews",
        "new headset optics reduce motion blur on the display",
        "openxr standards enable interoperability between runtime vendors",
        "interoperability standards reduce vendor lockin across runtimes",
        "openxr runtime support signals maturing interoperability standards",
        "enterprise training simulations cut onboarding time for workers",
        "workers complete safety training faster in simulations",
        "simulations for enterprise safety training show strong results",
        "display standards and training simulations both mature quickly",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn fit_once(seed: u64) -> (Vec<Vec<(String, f64)>>, Vec<Vec<f64>>) {
    let vectorizer = VocabularyVectorizer::new(
        TextPreprocessor::new(Vec::<String>::new()),
        VectorizerParams {
            min_doc_freq: 2,
            max_features: 50,
            ..Default::default()
        },
    );
    let docs = ten_doc_corpus();
    let (vocab, dtm) = vectorizer.fit(&docs).unwrap();

    let params = LdaParams {
        num_topics: 3,
        max_iterations: 25,
        seed,
        ..Default::default()
    };
    let model = LdaModel::fit(&dtm, &params).unwrap();

    let rankings = model
        .topics()
        .iter()
        .map(|t| t.top_words(&vocab, 10))
        .collect();
    (rankings, model.doc_topic().to_vec())
}

#[test]
fn same_seed_reproduces_the_fit_exactly() {
    let (words_a, theta_a) = fit_once(7);
    let (words_b, theta_b) = fit_once(7);
    assert_eq!(words_a, words_b, "topic-word rankings drifted between runs");
    assert_eq!(theta_a, theta_b, "doc-topic matrix drifted between runs");
}

#[test]
fn doc_topic_rows_sum_to_one() {
    let (_, theta) = fit_once(42);
    assert_eq!(theta.len(), 10);
    for (d, row) in theta.iter().enumerate() {
        let sum: f64 = row.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6, "doc {d} row sums to {sum}");
        assert!(row.iter().all(|&w| w >= 0.0));
    }
}

#[test]
fn topic_word_weights_are_positive_pseudo_counts() {
    let vectorizer = VocabularyVectorizer::new(
        TextPreprocessor::new(Vec::<String>::new()),
        VectorizerParams {
            min_doc_freq: 2,
            ..Default::default()
        },
    );
    let docs = ten_doc_corpus();
    let (vocab, dtm) = vectorizer.fit(&docs).unwrap();
    let model = LdaModel::fit(&dtm, &LdaParams { num_topics: 3, ..Default::default() }).unwrap();

    for topic in model.topics() {
        assert_eq!(topic.word_weights.len(), vocab.len());
        assert!(topic.word_weights.iter().all(|&w| w > 0.0));
    }
}

#[test]
fn top_words_ranking_is_descending() {
    let (rankings, _) = fit_once(42);
    for ranking in rankings {
        for pair in ranking.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }
}

#[test]
fn transform_rows_are_simplex() {
    let vectorizer = VocabularyVectorizer::new(
        TextPreprocessor::new(Vec::<String>::new()),
        VectorizerParams {
            min_doc_freq: 2,
            ..Default::default()
        },
    );
    let docs = ten_doc_corpus();
    let (vocab, dtm) = vectorizer.fit(&docs).unwrap();
    let model = LdaModel::fit(&dtm, &LdaParams { num_topics: 3, ..Default::default() }).unwrap();

    let unseen = vec![
        "headset display optics".to_string(),
        "interoperability standards".to_string(),
        "totally out of vocabulary gibberish".to_string(),
    ];
    let rows = model.transform(&vectorizer.transform(&vocab, &unseen)).unwrap();
    assert_eq!(rows.len(), 3);
    for row in &rows {
        let sum: f64 = row.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }
}

#[test]
fn transform_is_deterministic() {
    let vectorizer = VocabularyVectorizer::new(
        TextPreprocessor::new(Vec::<String>::new()),
        VectorizerParams {
            min_doc_freq: 2,
            ..Default::default()
        },
    );
    let docs = ten_doc_corpus();
    let (_, dtm) = vectorizer.fit(&docs).unwrap();
    let model = LdaModel::fit(&dtm, &LdaParams { num_topics: 3, ..Default::default() }).unwrap();

    let a = model.transform(&dtm).unwrap();
    let b = model.transform(&dtm).unwrap();
    assert_eq!(a, b);
}

#[test]
fn k_below_two_is_a_configuration_error() {
    let vectorizer = VocabularyVectorizer::new(
        TextPreprocessor::new(Vec::<String>::new()),
        VectorizerParams {
            min_doc_freq: 2,
            ..Default::default()
        },
    );
    let (_, dtm) = vectorizer.fit(&ten_doc_corpus()).unwrap();
    let result = LdaModel::fit(&dtm, &LdaParams { num_topics: 1, ..Default::default() });
    assert!(matches!(result, Err(AnalyticsError::Configuration(_))));
}

#[test]
fn k_not_below_document_count_is_a_configuration_error() {
    let vectorizer = VocabularyVectorizer::new(
        TextPreprocessor::new(Vec::<String>::new()),
        VectorizerParams {
            min_doc_freq: 2,
            ..Default::default()
        },
    );
    let (_, dtm) = vectorizer.fit(&ten_doc_corpus()).unwrap();
    let result = LdaModel::fit(&dtm, &LdaParams { num_topics: 10, ..Default::default() });
    assert!(matches!(result, Err(AnalyticsError::Configuration(_))));
}
