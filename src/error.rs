// Typed errors for the analytics engine.
//
// Every failure a caller can act on gets its own variant. None of these
// represent transient faults — the engine performs no network calls, so
// nothing here is worth retrying internally.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Corpus too small, or pruning emptied the vocabulary. Indicates a
    /// data-volume or configuration problem, not a transient fault.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Invalid parameter combination, raised eagerly at call time.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No sources registered for the requested dimension.
    #[error("unknown dimension: {0}")]
    UnknownDimension(String),

    /// A record source failed to load outright (bad path, bad JSON).
    /// A single record missing its text field is NOT an error — it
    /// degrades to an empty document with a warning.
    #[error("failed to load source {source_id}: {reason}")]
    Load { source_id: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
