// VADER-style compound sentiment scoring.
//
// Scoring runs on the RAW tokenized text, not the stopword-filtered
// stream the rest of the pipeline uses: negators ("not") and degree
// adverbs ("very") are stopwords, and the scorer needs them intact.

use serde::{Deserialize, Serialize};

use super::lexicon::{valence, BOOSTERS, DAMPENERS, NEGATORS};

/// Normalization constant. Keeps the compound score inside (-1, 1) for
/// any finite word-score sequence.
const ALPHA: f64 = 15.0;
/// Added to a word's magnitude when a booster precedes it.
const BOOST_INCR: f64 = 0.293;
/// Added (negatively) when a dampener precedes it.
const DAMP_DECR: f64 = -0.293;
/// All-caps emphasis increment.
const CAPS_INCR: f64 = 0.733;
/// Sign-flip-and-dampen factor applied by a preceding negator.
const NEGATION_SCALAR: f64 = -0.74;
/// Whole-sentence bonus per trailing exclamation mark (capped).
const EXCLAIM_BONUS: f64 = 0.292;
const MAX_EXCLAIM: usize = 3;
/// How far back a negator or degree adverb can reach.
const MODIFIER_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

/// Per-document sentiment: compound polarity plus its classification.
/// The label is a pure function of the polarity and the threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentResult {
    pub polarity: f64,
    pub label: SentimentLabel,
}

/// One row of the per-document sentiment table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSentiment {
    pub doc_id: usize,
    pub polarity: f64,
    pub label: SentimentLabel,
    /// First 100 characters of the document, for report readability.
    pub preview: String,
}

/// Corpus-level summary. The three percentages partition the corpus:
/// every document falls in exactly one bucket, so they sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CorpusSentiment {
    pub mean_polarity: f64,
    pub positive_pct: f64,
    pub neutral_pct: f64,
    pub negative_pct: f64,
    pub total_analyzed: usize,
}

/// Lexicon-based sentiment scorer.
///
/// Stateless apart from the classification threshold; operates on
/// borrowed text and never mutates its input.
pub struct SentimentScorer {
    threshold: f64,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self { threshold: 0.05 }
    }
}

impl SentimentScorer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Score a single text. Empty or whitespace-only input is Neutral
    /// with polarity 0.0 — never an error.
    pub fn score(&self, text: &str) -> SentimentResult {
        let polarity = self.compound(text);
        SentimentResult {
            polarity,
            label: self.classify(polarity),
        }
    }

    /// Classify a compound polarity against the configured threshold.
    pub fn classify(&self, polarity: f64) -> SentimentLabel {
        if polarity >= self.threshold {
            SentimentLabel::Positive
        } else if polarity <= -self.threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Score every document and produce the summary table.
    pub fn score_corpus(&self, documents: &[String]) -> (Vec<DocumentSentiment>, CorpusSentiment) {
        let rows: Vec<DocumentSentiment> = documents
            .iter()
            .enumerate()
            .map(|(doc_id, text)| {
                let result = self.score(text);
                DocumentSentiment {
                    doc_id,
                    polarity: result.polarity,
                    label: result.label,
                    preview: text.chars().take(100).collect(),
                }
            })
            .collect();

        let summary = self.summarize(&rows);
        (rows, summary)
    }

    /// Aggregate statistics over already-scored rows.
    pub fn summarize(&self, rows: &[DocumentSentiment]) -> CorpusSentiment {
        let total = rows.len();
        if total == 0 {
            return CorpusSentiment {
                mean_polarity: 0.0,
                positive_pct: 0.0,
                neutral_pct: 0.0,
                negative_pct: 0.0,
                total_analyzed: 0,
            };
        }

        let mut positive = 0usize;
        let mut negative = 0usize;
        let mut neutral = 0usize;
        let mut sum = 0.0;
        for row in rows {
            sum += row.polarity;
            match row.label {
                SentimentLabel::Positive => positive += 1,
                SentimentLabel::Negative => negative += 1,
                SentimentLabel::Neutral => neutral += 1,
            }
        }

        let pct = |count: usize| (count as f64 / total as f64) * 100.0;
        CorpusSentiment {
            mean_polarity: sum / total as f64,
            positive_pct: pct(positive),
            neutral_pct: pct(neutral),
            negative_pct: pct(negative),
            total_analyzed: total,
        }
    }

    /// The normalized compound score: S / sqrt(S^2 + ALPHA) where S is
    /// the modifier-adjusted valence sum.
    fn compound(&self, text: &str) -> f64 {
        let words = split_words(text);
        if words.is_empty() {
            return 0.0;
        }

        // When the whole text shouts, caps carry no extra emphasis.
        let mixed_case = !words.iter().all(|w| is_all_caps(w));

        let mut valences: Vec<f64> = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            let key = lookup_key(word);
            let Some(base) = valence(&key) else {
                valences.push(0.0);
                continue;
            };

            let mut v = base;
            if mixed_case && is_all_caps(word) {
                v += CAPS_INCR * v.signum();
            }

            // Scan the preceding window for negators and degree adverbs.
            // Farther modifiers contribute slightly less.
            let start = i.saturating_sub(MODIFIER_WINDOW);
            let mut negated = false;
            for (dist, prior) in words[start..i].iter().rev().enumerate() {
                let prior_key = lookup_key(prior);
                let damp = match dist {
                    0 => 1.0,
                    1 => 0.95,
                    _ => 0.9,
                };
                if NEGATORS.contains(prior_key.as_str()) {
                    negated = true;
                } else if BOOSTERS.contains(prior_key.as_str()) {
                    v += BOOST_INCR * damp * v.signum();
                } else if DAMPENERS.contains(prior_key.as_str()) {
                    v += DAMP_DECR * damp * v.signum();
                }
            }
            if negated {
                v *= NEGATION_SCALAR;
            }

            valences.push(v);
        }

        let mut sum: f64 = valences.iter().sum();
        if sum != 0.0 {
            let exclaims = text.matches('!').count().min(MAX_EXCLAIM);
            sum += exclaims as f64 * EXCLAIM_BONUS * sum.signum();
        }

        // x / sqrt(x^2 + ALPHA) maps any finite sum into (-1, 1).
        sum / (sum * sum + ALPHA).sqrt()
    }
}

/// Split into word tokens, preserving case for the caps check.
/// Apostrophes stay attached so contractions survive as one token.
fn split_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lexicon lookup form: lowercase with apostrophes removed, so "don't"
/// matches the "dont" negator entry.
fn lookup_key(word: &str) -> String {
    word.chars()
        .filter(|c| *c != '\'')
        .collect::<String>()
        .to_lowercase()
}

fn is_all_caps(word: &str) -> bool {
    word.len() > 1 && word.chars().all(|c| c.is_ascii_uppercase())
}
