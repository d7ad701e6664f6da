// The analytics facade — orchestrates aggregation, preprocessing,
// sentiment, and topic modeling per dimension.
//
// One engine instance owns the config, the corpus aggregator, and a
// compute-once bundle cache. Stateless services (scorer, vectorizer,
// topic model) are built per call from the config, so independent
// dimensions can be analyzed from independent threads: the only shared
// state is the read side of the two caches.

pub mod bundle;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

pub use bundle::{AnalyticsBundle, DominantTopic, TopicSummary, WordFrequency};

use crate::config::AnalyticsConfig;
use crate::corpus::{DimensionCorpus, DimensionCorpusAggregator, RecordSource};
use crate::error::Result;
use crate::sentiment::{CorpusSentiment, SentimentResult, SentimentScorer};
use crate::text::TextPreprocessor;
use crate::topics::{LdaModel, LdaParams, VectorizerParams, VocabularyVectorizer};

pub struct AnalyticsEngine {
    config: AnalyticsConfig,
    aggregator: DimensionCorpusAggregator,
    bundles: RwLock<HashMap<String, Arc<AnalyticsBundle>>>,
}

impl AnalyticsEngine {
    /// Build an engine. The config is validated here, eagerly — a bad
    /// parameter combination never reaches a fit.
    pub fn new(config: AnalyticsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            aggregator: DimensionCorpusAggregator::new(),
            bundles: RwLock::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Register a record source for a dimension (before analysis starts).
    pub fn register_source(&mut self, dimension_id: &str, source: Box<dyn RecordSource>) {
        self.aggregator.register(dimension_id, source);
    }

    /// The corpus for a dimension: ordered documents plus source tags.
    pub fn get_dimension_corpus(&self, dimension_id: &str) -> Result<Arc<DimensionCorpus>> {
        self.aggregator.get_corpus(dimension_id)
    }

    /// Run the full pipeline for a dimension and cache the result.
    /// Subsequent calls return the same bundle until `invalidate`.
    pub fn analyze(&self, dimension_id: &str) -> Result<Arc<AnalyticsBundle>> {
        if let Some(bundle) = self.bundles.read().get(dimension_id) {
            return Ok(Arc::clone(bundle));
        }

        let corpus = self.aggregator.get_corpus(dimension_id)?;
        let texts = corpus.texts();

        let frequencies = self.word_frequencies(&texts, self.config.frequency_limit);
        let scorer = self.scorer();
        let (sentiments, sentiment_summary) = scorer.score_corpus(&texts);
        let (topics, doc_topics, dominant_topics) = self.topic_tables(&texts)?;

        let bundle = Arc::new(AnalyticsBundle {
            dimension_id: dimension_id.to_string(),
            document_count: texts.len(),
            frequencies,
            sentiments,
            sentiment_summary,
            topics,
            doc_topics,
            dominant_topics,
        });

        info!(dimension = dimension_id, documents = bundle.document_count, "Analyzed dimension");
        self.bundles
            .write()
            .insert(dimension_id.to_string(), Arc::clone(&bundle));
        Ok(bundle)
    }

    /// Drop the cached bundle and corpus for a dimension. The next
    /// `analyze` reloads and refits from scratch.
    pub fn invalidate(&self, dimension_id: &str) {
        self.bundles.write().remove(dimension_id);
        self.aggregator.invalidate(dimension_id);
    }

    /// Normalize and tokenize a text with this engine's stopword set.
    pub fn preprocess(&self, text: &str) -> Vec<String> {
        self.preprocessor().tokenize(text)
    }

    /// Score a single text against the configured threshold.
    pub fn score_sentiment(&self, text: &str) -> SentimentResult {
        self.scorer().score(text)
    }

    /// Corpus-level sentiment summary.
    pub fn score_corpus_sentiment(&self, documents: &[String]) -> CorpusSentiment {
        let (_, summary) = self.scorer().score_corpus(documents);
        summary
    }

    /// Token frequency table over a document list, most frequent first,
    /// alphabetical among ties.
    pub fn word_frequencies(&self, documents: &[String], limit: usize) -> Vec<WordFrequency> {
        let preprocessor = self.preprocessor();
        let mut counts: HashMap<String, u64> = HashMap::new();
        for text in documents {
            for token in preprocessor.tokenize(text) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let mut rows: Vec<WordFrequency> = counts
            .into_iter()
            .map(|(word, count)| WordFrequency { word, count })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        rows.truncate(limit);
        rows
    }

    /// Vectorize and fit topics over a document list, returning the
    /// topic table and the doc-topic matrix.
    pub fn fit_topics(
        &self,
        documents: &[String],
    ) -> Result<(Vec<TopicSummary>, Vec<Vec<f64>>)> {
        let (topics, doc_topics, _) = self.topic_tables(documents)?;
        Ok((topics, doc_topics))
    }

    fn topic_tables(
        &self,
        documents: &[String],
    ) -> Result<(Vec<TopicSummary>, Vec<Vec<f64>>, Vec<DominantTopic>)> {
        let vectorizer = VocabularyVectorizer::new(
            self.preprocessor(),
            VectorizerParams {
                min_doc_freq: self.config.min_doc_freq,
                max_doc_freq_ratio: self.config.max_doc_freq_ratio,
                max_features: self.config.max_features,
                bigrams: self.config.bigrams,
            },
        );
        let (vocabulary, dtm) = vectorizer.fit(documents)?;

        let params = LdaParams {
            num_topics: self.config.num_topics,
            max_iterations: self.config.max_iterations,
            seed: self.config.random_seed,
            ..Default::default()
        };
        let model = LdaModel::fit(&dtm, &params)?;

        let topics: Vec<TopicSummary> = model
            .topics()
            .iter()
            .map(|topic| TopicSummary {
                id: topic.id,
                label: topic.label(&vocabulary, 3),
                top_words: topic.top_words(&vocabulary, self.config.top_words_per_topic),
            })
            .collect();

        let doc_topics: Vec<Vec<f64>> = model.doc_topic().to_vec();
        let dominant_topics = doc_topics
            .iter()
            .enumerate()
            .map(|(doc_id, row)| {
                let topic_id = LdaModel::dominant_topic(row);
                DominantTopic {
                    doc_id,
                    topic_id,
                    label: topics[topic_id].label.clone(),
                    confidence: row[topic_id],
                }
            })
            .collect();

        Ok((topics, doc_topics, dominant_topics))
    }

    fn preprocessor(&self) -> TextPreprocessor {
        TextPreprocessor::new(self.config.extra_stopwords.iter().cloned())
    }

    fn scorer(&self) -> SentimentScorer {
        SentimentScorer::new(self.config.sentiment_threshold)
    }
}
