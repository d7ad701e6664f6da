use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// Central configuration for one analytics run.
///
/// Everything here is explicit, passed-in state — there are no env-var
/// lookups and no process-wide defaults hiding behind the engine. The
/// same config on the same corpus always produces bit-identical output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Terms appearing in fewer documents than this are dropped (too rare).
    pub min_doc_freq: usize,
    /// Terms appearing in more than this fraction of documents are dropped
    /// (near-universal terms carry no discriminative signal).
    pub max_doc_freq_ratio: f64,
    /// Vocabulary cap. When more terms survive pruning, the most frequent
    /// by total count are kept.
    pub max_features: usize,
    /// Generate adjacent-token bigrams in addition to unigrams.
    pub bigrams: bool,
    /// Number of latent topics (k).
    pub num_topics: usize,
    /// Gibbs sampling sweeps. Caps runtime deterministically.
    pub max_iterations: usize,
    /// Seed for the sampler RNG. Same seed + same corpus = same topics.
    pub random_seed: u64,
    /// Compound-score cutoff for positive/negative classification.
    /// 0.05 is the standard VADER threshold; some reports use the looser
    /// 0.1. Explicit config so a report can document which one it used.
    pub sentiment_threshold: f64,
    /// Words to rank per topic.
    pub top_words_per_topic: usize,
    /// Rows in the word-frequency table.
    pub frequency_limit: usize,
    /// Domain-specific stopwords added on top of the base English list
    /// (e.g. "xr", "ai", "model" for an XR research corpus).
    pub extra_stopwords: HashSet<String>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            min_doc_freq: 2,
            max_doc_freq_ratio: 0.85,
            max_features: 150,
            bigrams: false,
            num_topics: 5,
            max_iterations: 30,
            random_seed: 42,
            sentiment_threshold: 0.05,
            top_words_per_topic: 10,
            frequency_limit: 50,
            extra_stopwords: HashSet::new(),
        }
    }
}

impl AnalyticsConfig {
    /// Validate the parameter combination. Called eagerly by the engine
    /// constructor so a bad config never makes it into a partial fit.
    pub fn validate(&self) -> Result<()> {
        if self.min_doc_freq < 1 {
            return Err(AnalyticsError::Configuration(
                "min_doc_freq must be at least 1".into(),
            ));
        }
        if !(self.max_doc_freq_ratio > 0.0 && self.max_doc_freq_ratio <= 1.0) {
            return Err(AnalyticsError::Configuration(format!(
                "max_doc_freq_ratio must be in (0, 1], got {}",
                self.max_doc_freq_ratio
            )));
        }
        if self.max_features == 0 {
            return Err(AnalyticsError::Configuration(
                "max_features must be at least 1".into(),
            ));
        }
        if self.num_topics < 2 {
            return Err(AnalyticsError::Configuration(format!(
                "num_topics must be at least 2, got {}",
                self.num_topics
            )));
        }
        if self.max_iterations == 0 {
            return Err(AnalyticsError::Configuration(
                "max_iterations must be at least 1".into(),
            ));
        }
        if !(self.sentiment_threshold > 0.0 && self.sentiment_threshold < 1.0) {
            return Err(AnalyticsError::Configuration(format!(
                "sentiment_threshold must be in (0, 1), got {}",
                self.sentiment_threshold
            )));
        }
        Ok(())
    }
}
