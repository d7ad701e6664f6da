pub mod preprocess;

pub use preprocess::TextPreprocessor;
