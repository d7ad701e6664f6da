// Document-term matrix construction with frequency-based pruning.
//
// The vectorizer turns a corpus into the sparse count matrix LDA fits on.
// Vocabulary order is alphabetical, which makes column indices stable
// across runs regardless of hash-map iteration order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AnalyticsError, Result};
use crate::text::TextPreprocessor;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerParams {
    /// Terms in fewer documents than this are dropped as too rare.
    pub min_doc_freq: usize,
    /// Terms in more than this fraction of documents are dropped as
    /// near-universal.
    pub max_doc_freq_ratio: f64,
    /// Keep at most this many terms, most frequent by total count first.
    pub max_features: usize,
    /// Emit adjacent-token bigrams alongside unigrams.
    pub bigrams: bool,
}

impl Default for VectorizerParams {
    fn default() -> Self {
        Self {
            min_doc_freq: 2,
            max_doc_freq_ratio: 0.85,
            max_features: 150,
            bigrams: false,
        }
    }
}

/// Ordered, deduplicated term list. The term -> column-index mapping is
/// fixed for the lifetime of one fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    fn from_terms(terms: Vec<String>) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { terms, index }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn term(&self, idx: usize) -> &str {
        &self.terms[idx]
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }
}

/// Sparse document×term count matrix. One row per corpus document
/// (including documents that emptied out during preprocessing), entries
/// sorted by column index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocTermMatrix {
    n_terms: usize,
    rows: Vec<Vec<(usize, u32)>>,
}

impl DocTermMatrix {
    pub fn n_docs(&self) -> usize {
        self.rows.len()
    }

    pub fn n_terms(&self) -> usize {
        self.n_terms
    }

    pub fn row(&self, doc: usize) -> &[(usize, u32)] {
        &self.rows[doc]
    }

    pub fn rows(&self) -> &[Vec<(usize, u32)>] {
        &self.rows
    }

    pub fn total_count(&self) -> u64 {
        self.rows
            .iter()
            .flat_map(|r| r.iter().map(|(_, c)| u64::from(*c)))
            .sum()
    }
}

/// Builds (Vocabulary, DocTermMatrix) pairs from raw documents.
pub struct VocabularyVectorizer {
    preprocessor: TextPreprocessor,
    params: VectorizerParams,
}

impl VocabularyVectorizer {
    pub fn new(preprocessor: TextPreprocessor, params: VectorizerParams) -> Self {
        Self {
            preprocessor,
            params,
        }
    }

    /// Fit a vocabulary on the corpus and emit its count matrix.
    ///
    /// Fails with `InsufficientData` when fewer than 2 documents survive
    /// preprocessing or when pruning eliminates every term — downstream
    /// topic fitting treats both as hard precondition failures.
    pub fn fit(&self, documents: &[String]) -> Result<(Vocabulary, DocTermMatrix)> {
        let doc_counts: Vec<HashMap<String, u32>> = documents
            .iter()
            .map(|text| self.term_counts(text))
            .collect();

        let usable = doc_counts.iter().filter(|c| !c.is_empty()).count();
        if usable < 2 {
            return Err(AnalyticsError::InsufficientData(format!(
                "corpus has {usable} usable document(s); at least 2 are required"
            )));
        }

        // Document frequency and total count per candidate term.
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        let mut total: HashMap<&str, u64> = HashMap::new();
        for counts in &doc_counts {
            for (term, count) in counts {
                *doc_freq.entry(term).or_insert(0) += 1;
                *total.entry(term).or_insert(0) += u64::from(*count);
            }
        }

        let max_df = self.params.max_doc_freq_ratio * documents.len() as f64;
        let mut survivors: Vec<(&str, u64)> = doc_freq
            .iter()
            .filter(|(_, df)| **df >= self.params.min_doc_freq && (**df as f64) <= max_df)
            .map(|(term, _)| (*term, total[term]))
            .collect();

        if survivors.is_empty() {
            return Err(AnalyticsError::InsufficientData(
                "document-frequency pruning eliminated the entire vocabulary".into(),
            ));
        }

        // Over the cap: keep the most frequent by total count, ties
        // broken alphabetically so the result is deterministic.
        if survivors.len() > self.params.max_features {
            survivors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            survivors.truncate(self.params.max_features);
        }

        let mut terms: Vec<String> = survivors.into_iter().map(|(t, _)| t.to_string()).collect();
        terms.sort_unstable();
        let vocabulary = Vocabulary::from_terms(terms);

        let matrix = self.matrix_from_counts(&vocabulary, &doc_counts);
        info!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            tokens = matrix.total_count(),
            "Vectorized corpus"
        );

        Ok((vocabulary, matrix))
    }

    /// Count an unseen batch of documents against an existing vocabulary.
    /// Out-of-vocabulary terms are ignored.
    pub fn transform(&self, vocabulary: &Vocabulary, documents: &[String]) -> DocTermMatrix {
        let doc_counts: Vec<HashMap<String, u32>> = documents
            .iter()
            .map(|text| self.term_counts(text))
            .collect();
        self.matrix_from_counts(vocabulary, &doc_counts)
    }

    fn matrix_from_counts(
        &self,
        vocabulary: &Vocabulary,
        doc_counts: &[HashMap<String, u32>],
    ) -> DocTermMatrix {
        let rows = doc_counts
            .iter()
            .map(|counts| {
                let mut row: Vec<(usize, u32)> = counts
                    .iter()
                    .filter_map(|(term, count)| {
                        vocabulary.index_of(term).map(|idx| (idx, *count))
                    })
                    .collect();
                row.sort_unstable_by_key(|(idx, _)| *idx);
                row
            })
            .collect();

        DocTermMatrix {
            n_terms: vocabulary.len(),
            rows,
        }
    }

    /// Candidate terms for one document: unigrams, plus space-joined
    /// adjacent bigrams when enabled.
    fn term_counts(&self, text: &str) -> HashMap<String, u32> {
        let tokens = self.preprocessor.tokenize(text);
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in &tokens {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }
        if self.params.bigrams {
            for pair in tokens.windows(2) {
                *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer(params: VectorizerParams) -> VocabularyVectorizer {
        VocabularyVectorizer::new(TextPreprocessor::new(Vec::<String>::new()), params)
    }

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn vocabulary_is_alphabetical() {
        let v = vectorizer(VectorizerParams {
            min_doc_freq: 1,
            ..Default::default()
        });
        let corpus = docs(&["zebra apple kiwi", "apple kiwi zebra mango"]);
        let (vocab, _) = v.fit(&corpus).unwrap();
        let mut sorted = vocab.terms().to_vec();
        sorted.sort();
        assert_eq!(vocab.terms(), sorted.as_slice());
    }

    #[test]
    fn row_count_matches_corpus_even_for_empty_docs() {
        let v = vectorizer(VectorizerParams {
            min_doc_freq: 1,
            ..Default::default()
        });
        // Middle document empties out entirely (stopwords + short tokens).
        let corpus = docs(&["quantum sensors shipped", "a an it", "quantum sensors delayed"]);
        let (_, dtm) = v.fit(&corpus).unwrap();
        assert_eq!(dtm.n_docs(), 3);
        assert!(dtm.row(1).is_empty());
    }

    #[test]
    fn single_document_is_insufficient() {
        let v = vectorizer(VectorizerParams::default());
        let corpus = docs(&["virtual reality training simulations"]);
        assert!(matches!(
            v.fit(&corpus),
            Err(AnalyticsError::InsufficientData(_))
        ));
    }

    #[test]
    fn bigrams_join_adjacent_tokens() {
        let v = vectorizer(VectorizerParams {
            min_doc_freq: 2,
            bigrams: true,
            ..Default::default()
        });
        let corpus = docs(&["spatial computing platform", "spatial computing device"]);
        let (vocab, _) = v.fit(&corpus).unwrap();
        assert!(vocab.index_of("spatial computing").is_some());
    }
}
