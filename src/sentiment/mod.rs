pub mod lexicon;
pub mod scorer;

pub use scorer::{CorpusSentiment, DocumentSentiment, SentimentLabel, SentimentResult, SentimentScorer};
