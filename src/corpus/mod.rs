pub mod aggregator;
pub mod document;
pub mod sources;

pub use aggregator::DimensionCorpusAggregator;
pub use document::{DimensionCorpus, Document};
pub use sources::{JsonRecordSource, RecordSource, SourceKind, StaticSource};
