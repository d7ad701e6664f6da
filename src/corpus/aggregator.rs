// Per-dimension corpus assembly with a compute-once cache.
//
// The first request for a dimension loads every configured source in
// registration order and publishes an immutable corpus snapshot. All
// later requests share that snapshot until an explicit invalidation.
// The write lock is held across the whole load, so concurrent readers
// never observe a half-populated entry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use super::document::{DimensionCorpus, Document};
use super::sources::RecordSource;
use crate::error::{AnalyticsError, Result};

#[derive(Default)]
pub struct DimensionCorpusAggregator {
    sources: HashMap<String, Vec<Box<dyn RecordSource>>>,
    cache: RwLock<HashMap<String, Arc<DimensionCorpus>>>,
}

impl DimensionCorpusAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source for a dimension. Sources load in registration
    /// order, and their documents concatenate in that same order.
    pub fn register(&mut self, dimension_id: impl Into<String>, source: Box<dyn RecordSource>) {
        self.sources.entry(dimension_id.into()).or_default().push(source);
    }

    pub fn dimension_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Get the corpus for a dimension, loading and caching it on first
    /// request. Returns the same `Arc` until `invalidate` is called.
    pub fn get_corpus(&self, dimension_id: &str) -> Result<Arc<DimensionCorpus>> {
        if let Some(corpus) = self.cache.read().get(dimension_id) {
            return Ok(Arc::clone(corpus));
        }

        let mut cache = self.cache.write();
        // Another writer may have populated the entry while we waited.
        if let Some(corpus) = cache.get(dimension_id) {
            return Ok(Arc::clone(corpus));
        }

        let corpus = Arc::new(self.load_dimension(dimension_id)?);
        cache.insert(dimension_id.to_string(), Arc::clone(&corpus));
        Ok(corpus)
    }

    /// Drop the cached corpus for one dimension. The next request
    /// reloads from the sources.
    pub fn invalidate(&self, dimension_id: &str) {
        self.cache.write().remove(dimension_id);
    }

    /// Drop every cached corpus.
    pub fn clear(&self) {
        self.cache.write().clear();
    }

    fn load_dimension(&self, dimension_id: &str) -> Result<DimensionCorpus> {
        let sources = self
            .sources
            .get(dimension_id)
            .ok_or_else(|| AnalyticsError::UnknownDimension(dimension_id.to_string()))?;

        let mut documents = Vec::new();
        for source in sources {
            let tag = source.source_tag().to_string();
            for text in source.load()? {
                documents.push(Document {
                    id: documents.len(),
                    text,
                    source_tag: tag.clone(),
                });
            }
        }

        info!(
            dimension = dimension_id,
            documents = documents.len(),
            sources = sources.len(),
            "Loaded dimension corpus"
        );

        Ok(DimensionCorpus {
            dimension_id: dimension_id.to_string(),
            documents,
        })
    }
}
