// The consolidated per-dimension result bundle.
//
// Everything the presentation layer needs, as flat serializable rows:
// one row per word for frequencies, one per document for sentiment and
// dominant topics, one per topic for the topic table.

use serde::{Deserialize, Serialize};

use crate::sentiment::{CorpusSentiment, DocumentSentiment};

/// One row of the word-frequency table (the data behind a word cloud).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

/// One discovered topic, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSummary {
    pub id: usize,
    pub label: String,
    /// Top words with their pseudo-count weights, highest first.
    pub top_words: Vec<(String, f64)>,
}

/// Dominant-topic assignment for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DominantTopic {
    pub doc_id: usize,
    pub topic_id: usize,
    pub label: String,
    /// The document's weight on its dominant topic.
    pub confidence: f64,
}

/// All derived views for one dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsBundle {
    pub dimension_id: String,
    pub document_count: usize,
    pub frequencies: Vec<WordFrequency>,
    pub sentiments: Vec<DocumentSentiment>,
    pub sentiment_summary: CorpusSentiment,
    pub topics: Vec<TopicSummary>,
    /// Per-document topic distribution rows; each sums to 1.
    pub doc_topics: Vec<Vec<f64>>,
    pub dominant_topics: Vec<DominantTopic>,
}
