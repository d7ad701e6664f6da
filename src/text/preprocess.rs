// Text normalization and tokenization.
//
// The preprocessor feeds the word-frequency table and the vectorizer.
// Sentiment scoring deliberately does NOT go through here — negators and
// intensifiers are stopwords, and stripping them would gut the scorer.

use std::collections::HashSet;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

/// Minimum token length. Anything shorter is dropped as noise.
const MIN_TOKEN_LEN: usize = 3;

/// Normalizes raw text into lowercase, stopword-filtered tokens.
///
/// The stopword set is explicit per-instance state: the base English list
/// from the stop-words crate plus whatever domain extras the caller adds.
/// There is no process-wide singleton, so two preprocessors with different
/// extras never interfere.
pub struct TextPreprocessor {
    stopwords: HashSet<String>,
    url_re: Regex,
    email_re: Regex,
}

impl TextPreprocessor {
    pub fn new<I, S>(extra_stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut stopwords: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
        stopwords.extend(extra_stopwords.into_iter().map(|s| s.into().to_lowercase()));

        // Fixed patterns — a failure here is a programming error, not input.
        let url_re = Regex::new(r"https?://\S+|www\.[a-z0-9.\-]+\.[a-z]{2,}\S*")
            .expect("url pattern is valid");
        let email_re = Regex::new(r"\S+@\S+").expect("email pattern is valid");

        Self {
            stopwords,
            url_re,
            email_re,
        }
    }

    /// Lowercase and strip URLs, email addresses, and everything
    /// non-alphabetic. Repeated whitespace collapses on split.
    pub fn clean(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        let no_urls = self.url_re.replace_all(&lowered, " ");
        let no_emails = self.email_re.replace_all(&no_urls, " ");
        no_emails
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
            .collect()
    }

    /// Full pipeline: clean, split, drop short tokens and stopwords.
    ///
    /// Pure function of the input — calling it twice on the same text
    /// yields the same tokens. Empty input yields an empty vec.
    pub fn tokenize(&self, raw: &str) -> Vec<String> {
        self.clean(raw)
            .split_whitespace()
            .filter(|tok| tok.len() >= MIN_TOKEN_LEN && !self.stopwords.contains(*tok))
            .map(str::to_string)
            .collect()
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}
