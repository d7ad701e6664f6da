// Prism: dimension-oriented text analytics.
//
// This is the library root. Each module corresponds to a stage of the
// analytics pipeline: corpus aggregation, preprocessing, sentiment
// scoring, and topic modeling, tied together by the engine facade.

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod output;
pub mod sentiment;
pub mod text;
pub mod topics;
