// Record sources — the seam between the engine and raw data.
//
// A source yields an ordered list of record texts. Which field of a
// record holds the text depends on the source kind, resolved through an
// explicit ordered candidate list instead of runtime attribute probing:
// the first non-empty candidate wins, and a record with none of them
// degrades to an empty document with a warning rather than failing the
// whole load.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::warn;

use crate::error::{AnalyticsError, Result};

/// What kind of records a source holds. The kind fixes the ordered list
/// of candidate text fields.
#[derive(Debug, Clone)]
pub enum SourceKind {
    /// Blog excerpts / articles: `content` first.
    Blog,
    /// Paper abstracts: `abstract` first.
    ResearchPaper,
    /// Short social posts: `tweet` first.
    SocialPost,
    /// Caller-supplied candidate list for anything else.
    Custom(Vec<String>),
}

impl SourceKind {
    pub fn candidate_fields(&self) -> Vec<String> {
        let fixed: &[&str] = match self {
            SourceKind::Blog => &["content", "text", "raw_text"],
            SourceKind::ResearchPaper => &["abstract", "content", "text"],
            SourceKind::SocialPost => &["tweet", "text", "content"],
            SourceKind::Custom(fields) => {
                return fields.clone();
            }
        };
        fixed.iter().map(|f| f.to_string()).collect()
    }
}

/// Trait for anything that can produce a dimension's records.
///
/// Loading blocks the caller; the engine core itself never performs
/// network I/O, so a remote-backed implementation is responsible for its
/// own timeouts and retries.
pub trait RecordSource: Send + Sync {
    /// Identifier used in load-error messages.
    fn source_id(&self) -> &str;

    /// Provenance tag stamped on every document this source yields.
    fn source_tag(&self) -> &str;

    /// Load all record texts, in stable record order.
    fn load(&self) -> Result<Vec<String>>;
}

/// A source backed by a JSON file holding a flat array of record objects.
pub struct JsonRecordSource {
    path: PathBuf,
    tag: String,
    kind: SourceKind,
}

impl JsonRecordSource {
    pub fn new(path: impl Into<PathBuf>, tag: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            path: path.into(),
            tag: tag.into(),
            kind,
        }
    }

    fn extract_text(&self, record: &Value, candidates: &[String], index: usize) -> String {
        for field in candidates {
            if let Some(text) = record.get(field).and_then(Value::as_str) {
                if !text.trim().is_empty() {
                    return text.to_string();
                }
            }
        }
        warn!(
            source = %self.path.display(),
            record = index,
            "record has no configured text field; using empty document"
        );
        String::new()
    }
}

impl RecordSource for JsonRecordSource {
    fn source_id(&self) -> &str {
        self.path.to_str().unwrap_or("<non-utf8 path>")
    }

    fn source_tag(&self) -> &str {
        &self.tag
    }

    fn load(&self) -> Result<Vec<String>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| AnalyticsError::Load {
            source_id: self.source_id().to_string(),
            reason: e.to_string(),
        })?;
        let records: Vec<Value> = serde_json::from_str(&raw).map_err(|e| AnalyticsError::Load {
            source_id: self.source_id().to_string(),
            reason: e.to_string(),
        })?;

        let candidates = self.kind.candidate_fields();
        Ok(records
            .iter()
            .enumerate()
            .map(|(i, record)| self.extract_text(record, &candidates, i))
            .collect())
    }
}

/// An in-memory source. Useful for tests and for callers that already
/// hold their records.
pub struct StaticSource {
    id: String,
    tag: String,
    records: Vec<String>,
}

impl StaticSource {
    pub fn new(id: impl Into<String>, tag: impl Into<String>, records: Vec<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            records,
        }
    }
}

impl RecordSource for StaticSource {
    fn source_id(&self) -> &str {
        &self.id
    }

    fn source_tag(&self) -> &str {
        &self.tag
    }

    fn load(&self) -> Result<Vec<String>> {
        Ok(self.records.clone())
    }
}
