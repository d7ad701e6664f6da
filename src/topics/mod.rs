pub mod lda;
pub mod vectorize;

pub use lda::{GibbsSampler, LdaModel, LdaParams, Topic};
pub use vectorize::{DocTermMatrix, Vocabulary, VocabularyVectorizer, VectorizerParams};
