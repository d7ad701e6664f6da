// Latent Dirichlet Allocation via collapsed Gibbs sampling.
//
// Each word occurrence is assigned to a topic; one sweep resamples every
// assignment from its conditional distribution given all other counts.
// The sampler is seeded, so a fixed (matrix, params) pair reproduces the
// fit byte for byte. The sweep is exposed as its own unit so convergence
// behavior can be tested directly instead of trusting an opaque fit().

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::vectorize::{DocTermMatrix, Vocabulary};
use crate::error::{AnalyticsError, Result};

/// Iterations of the fixed-phi fold-in used by `transform`. The update is
/// a contraction; 20 rounds is well past convergence for short documents.
const FOLD_IN_ITERS: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LdaParams {
    pub num_topics: usize,
    pub max_iterations: usize,
    pub seed: u64,
    /// Dirichlet prior on document-topic distributions.
    pub alpha: f64,
    /// Dirichlet prior on topic-word distributions.
    pub beta: f64,
}

impl Default for LdaParams {
    fn default() -> Self {
        Self {
            num_topics: 5,
            max_iterations: 30,
            seed: 42,
            alpha: 0.1,
            beta: 0.01,
        }
    }
}

/// One latent topic: an id and an unnormalized word-weight vector over
/// the vocabulary (posterior pseudo-counts, higher = more central).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: usize,
    pub word_weights: Vec<f64>,
}

impl Topic {
    /// Top-n words by weight, ties broken by column index for
    /// deterministic output.
    pub fn top_words(&self, vocabulary: &Vocabulary, n: usize) -> Vec<(String, f64)> {
        let mut ranked: Vec<(usize, f64)> = self
            .word_weights
            .iter()
            .copied()
            .enumerate()
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
            .into_iter()
            .take(n)
            .map(|(idx, w)| (vocabulary.term(idx).to_string(), w))
            .collect()
    }

    /// Human-readable label from the top words, e.g. "Theme 2: market,
    /// growth, adoption".
    pub fn label(&self, vocabulary: &Vocabulary, n_words: usize) -> String {
        let words: Vec<String> = self
            .top_words(vocabulary, n_words)
            .into_iter()
            .map(|(w, _)| w)
            .collect();
        format!("Theme {}: {}", self.id + 1, words.join(", "))
    }
}

/// Collapsed Gibbs sampler state. `LdaModel::fit` drives this, but it is
/// public so a test can run individual sweeps and inspect the counts.
pub struct GibbsSampler {
    k: usize,
    alpha: f64,
    beta: f64,
    n_terms: usize,
    /// Word-id stream per document, expanded from the count matrix.
    docs: Vec<Vec<usize>>,
    /// Current topic assignment per word position.
    z: Vec<Vec<usize>>,
    /// [doc][topic] assignment counts.
    ndk: Vec<Vec<u32>>,
    /// [topic][word] assignment counts.
    nkw: Vec<Vec<u32>>,
    /// [topic] total assignments.
    nk: Vec<u32>,
    rng: StdRng,
}

impl GibbsSampler {
    pub fn new(dtm: &DocTermMatrix, k: usize, alpha: f64, beta: f64, seed: u64) -> Self {
        // Expand counts into a flat token stream per document. Row entries
        // are sorted by column index, so the stream order is deterministic.
        let docs: Vec<Vec<usize>> = dtm
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .flat_map(|(word, count)| std::iter::repeat(*word).take(*count as usize))
                    .collect()
            })
            .collect();

        let n_docs = docs.len();
        let n_terms = dtm.n_terms();
        let mut ndk = vec![vec![0u32; k]; n_docs];
        let mut nkw = vec![vec![0u32; n_terms]; k];
        let mut nk = vec![0u32; k];
        let mut z: Vec<Vec<usize>> = Vec::with_capacity(n_docs);
        let mut rng = StdRng::seed_from_u64(seed);

        for (d, doc) in docs.iter().enumerate() {
            let mut assignments = Vec::with_capacity(doc.len());
            for &word in doc {
                let topic = rng.gen_range(0..k);
                assignments.push(topic);
                ndk[d][topic] += 1;
                nkw[topic][word] += 1;
                nk[topic] += 1;
            }
            z.push(assignments);
        }

        Self {
            k,
            alpha,
            beta,
            n_terms,
            docs,
            z,
            ndk,
            nkw,
            nk,
            rng,
        }
    }

    /// One full sweep: resample the topic of every word occurrence from
    /// p(t) ∝ (ndk + α) · (nkw + β) / (nk + V·β), with the occurrence's
    /// own count removed.
    pub fn sweep(&mut self) {
        let v_beta = self.n_terms as f64 * self.beta;
        let mut weights = vec![0.0f64; self.k];

        for d in 0..self.docs.len() {
            for pos in 0..self.docs[d].len() {
                let word = self.docs[d][pos];
                let old = self.z[d][pos];
                self.ndk[d][old] -= 1;
                self.nkw[old][word] -= 1;
                self.nk[old] -= 1;

                let mut total = 0.0;
                for t in 0..self.k {
                    let doc_part = f64::from(self.ndk[d][t]) + self.alpha;
                    let word_part = (f64::from(self.nkw[t][word]) + self.beta)
                        / (f64::from(self.nk[t]) + v_beta);
                    weights[t] = doc_part * word_part;
                    total += weights[t];
                }

                // Priors are strictly positive, so total > 0 always.
                let mut u = self.rng.gen::<f64>() * total;
                let mut new = self.k - 1;
                for (t, w) in weights.iter().enumerate() {
                    if u < *w {
                        new = t;
                        break;
                    }
                    u -= w;
                }

                self.z[d][pos] = new;
                self.ndk[d][new] += 1;
                self.nkw[new][word] += 1;
                self.nk[new] += 1;
            }
        }
    }

    /// Document-topic distributions: θ[d][t] = (ndk + α) / (len + K·α).
    /// Each row sums to 1 by construction.
    pub fn theta(&self) -> Vec<Vec<f64>> {
        self.docs
            .iter()
            .zip(&self.ndk)
            .map(|(doc, counts)| {
                let denom = doc.len() as f64 + self.k as f64 * self.alpha;
                counts
                    .iter()
                    .map(|&c| (f64::from(c) + self.alpha) / denom)
                    .collect()
            })
            .collect()
    }

    /// Unnormalized topic-word pseudo-counts: nkw + β.
    pub fn pseudo_counts(&self) -> Vec<Vec<f64>> {
        self.nkw
            .iter()
            .map(|row| row.iter().map(|&c| f64::from(c) + self.beta).collect())
            .collect()
    }

    /// Normalized topic-word distributions:
    /// φ[t][w] = (nkw + β) / (nk + V·β).
    pub fn phi(&self) -> Vec<Vec<f64>> {
        let v_beta = self.n_terms as f64 * self.beta;
        self.nkw
            .iter()
            .zip(&self.nk)
            .map(|(row, &total)| {
                let denom = f64::from(total) + v_beta;
                row.iter().map(|&c| (f64::from(c) + self.beta) / denom).collect()
            })
            .collect()
    }

    pub fn n_docs(&self) -> usize {
        self.docs.len()
    }
}

/// A fitted topic model. Immutable after `fit`; `transform` operates on
/// borrowed matrices and returns fresh distributions.
pub struct LdaModel {
    params: LdaParams,
    topics: Vec<Topic>,
    phi: Vec<Vec<f64>>,
    doc_topic: Vec<Vec<f64>>,
}

impl LdaModel {
    /// Fit on a count matrix. Configuration is checked eagerly: `k < 2`
    /// or `k >= document count` never starts a sampling run.
    pub fn fit(dtm: &DocTermMatrix, params: &LdaParams) -> Result<Self> {
        if params.num_topics < 2 {
            return Err(AnalyticsError::Configuration(format!(
                "num_topics must be at least 2, got {}",
                params.num_topics
            )));
        }
        if dtm.n_docs() == 0 || dtm.n_terms() == 0 {
            return Err(AnalyticsError::InsufficientData(
                "document-term matrix is empty".into(),
            ));
        }
        if params.num_topics >= dtm.n_docs() {
            return Err(AnalyticsError::Configuration(format!(
                "num_topics ({}) must be less than the document count ({})",
                params.num_topics,
                dtm.n_docs()
            )));
        }

        let mut sampler = GibbsSampler::new(
            dtm,
            params.num_topics,
            params.alpha,
            params.beta,
            params.seed,
        );
        for _ in 0..params.max_iterations {
            sampler.sweep();
        }

        let topics = sampler
            .pseudo_counts()
            .into_iter()
            .enumerate()
            .map(|(id, word_weights)| Topic { id, word_weights })
            .collect();

        info!(
            topics = params.num_topics,
            documents = dtm.n_docs(),
            iterations = params.max_iterations,
            "Fitted LDA model"
        );

        Ok(Self {
            params: params.clone(),
            topics,
            phi: sampler.phi(),
            doc_topic: sampler.theta(),
        })
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Per-document topic distributions from the fit. Rows sum to 1.
    pub fn doc_topic(&self) -> &[Vec<f64>] {
        &self.doc_topic
    }

    /// Infer topic distributions for a matrix over the same vocabulary,
    /// holding the fitted topic-word distributions fixed. Deterministic:
    /// the fold-in is an EM update, no sampling involved.
    pub fn transform(&self, dtm: &DocTermMatrix) -> Result<Vec<Vec<f64>>> {
        if dtm.n_terms() != self.phi[0].len() {
            return Err(AnalyticsError::Configuration(format!(
                "matrix has {} terms but the model was fitted on {}",
                dtm.n_terms(),
                self.phi[0].len()
            )));
        }

        let k = self.params.num_topics;
        let rows = dtm
            .rows()
            .iter()
            .map(|row| {
                let mut theta = vec![1.0 / k as f64; k];
                for _ in 0..FOLD_IN_ITERS {
                    let mut gamma = vec![self.params.alpha; k];
                    for &(word, count) in row {
                        let mut denom = 0.0;
                        for t in 0..k {
                            denom += theta[t] * self.phi[t][word];
                        }
                        if denom <= f64::EPSILON {
                            continue;
                        }
                        for t in 0..k {
                            gamma[t] += f64::from(count) * theta[t] * self.phi[t][word] / denom;
                        }
                    }
                    let total: f64 = gamma.iter().sum();
                    for t in 0..k {
                        theta[t] = gamma[t] / total;
                    }
                }
                theta
            })
            .collect();

        Ok(rows)
    }

    /// Dominant topic for one distribution row: argmax, ties to the
    /// lowest topic index.
    pub fn dominant_topic(distribution: &[f64]) -> usize {
        let mut best = 0;
        for (t, &w) in distribution.iter().enumerate() {
            if w > distribution[best] {
                best = t;
            }
        }
        best
    }
}
