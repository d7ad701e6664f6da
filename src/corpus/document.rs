// Document and corpus types — what the analytics stages consume.
//
// These are plain data, separate from the sources that load them, so the
// scorer and topic model can be tested without touching any loader.

use serde::{Deserialize, Serialize};

/// One document in a dimension's corpus. Immutable once created; the id
/// is the document's position in the per-dimension ordered list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: usize,
    pub text: String,
    /// Free-form provenance tag, e.g. "blog" or "research-paper".
    pub source_tag: String,
}

/// A dimension's complete ordered document list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionCorpus {
    pub dimension_id: String,
    pub documents: Vec<Document>,
}

impl DimensionCorpus {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The raw text list in document order.
    pub fn texts(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.text.clone()).collect()
    }

    /// The source tag list, parallel to `texts()`.
    pub fn source_tags(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.source_tag.clone()).collect()
    }
}
