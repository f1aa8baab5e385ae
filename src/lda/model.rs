// LDA fitting via collapsed Gibbs sampling with a seeded RNG.
//
// Hyperparameters mirror the trainer contract the operator exposes: topic
// count, fixed seed, pass count, chunked corpus traversal with periodic
// prior re-estimation, and optional retention of per-word topic
// assignments. Identical corpus + identical options = identical topics,
// which is the property the operator's callers rely on.

use anyhow::{bail, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::dictionary::Dictionary;

/// Topic-word smoothing prior.
const BETA: f64 = 0.01;

/// Terms rendered per topic in the textual representation.
const TOPIC_TERMS: usize = 10;

/// Floor for re-estimated alpha components, keeps sampling weights positive.
const ALPHA_FLOOR: f64 = 1e-5;

/// Document-topic prior.
#[derive(Debug, Clone)]
pub enum Alpha {
    /// Fixed symmetric prior with the given component value.
    Symmetric(f64),
    /// Asymmetric prior re-estimated from the corpus during training.
    Auto,
}

/// Trainer hyperparameters. The defaults are the operator's fixed set.
#[derive(Debug, Clone)]
pub struct LdaOptions {
    pub num_topics: usize,
    pub seed: u64,
    pub passes: usize,
    pub chunk_size: usize,
    /// Chunks between alpha re-estimations when alpha is `Auto`;
    /// 0 re-estimates only at end of pass.
    pub update_every: usize,
    pub alpha: Alpha,
    pub per_word_topics: bool,
}

impl Default for LdaOptions {
    fn default() -> Self {
        Self {
            num_topics: crate::config::DEFAULT_NUM_TOPICS,
            seed: 100,
            passes: 10,
            chunk_size: 100,
            update_every: 1,
            alpha: Alpha::Auto,
            per_word_topics: true,
        }
    }
}

/// A trained topic model: per-topic term counts plus the vocabulary they
/// index into. Consumed through `top_terms` / `print_topics`.
#[derive(Debug, Clone)]
pub struct LdaModel {
    num_topics: usize,
    dictionary: Dictionary,
    /// [topic][word]: occurrences of word assigned to topic.
    nkw: Vec<Vec<u32>>,
    /// [topic]: total tokens assigned to topic.
    nk: Vec<u64>,
    /// Final document-topic prior (asymmetric when trained with `Auto`).
    alpha: Vec<f64>,
    /// Final token-level topic assignments, one entry per document,
    /// retained only when `per_word_topics` was set.
    assignments: Option<Vec<Vec<usize>>>,
}

impl LdaModel {
    /// Fit a model over a bag-of-words corpus.
    ///
    /// Fails on a degenerate configuration (zero topics) and on an empty
    /// collection; neither is recoverable at this layer.
    pub fn fit(
        corpus: &[Vec<(usize, u32)>],
        dictionary: Dictionary,
        options: &LdaOptions,
    ) -> Result<Self> {
        let k = options.num_topics;
        if k == 0 {
            bail!("num_topics must be at least 1");
        }

        // Expand the sparse counts back into token streams for sampling.
        let docs: Vec<Vec<usize>> = corpus
            .iter()
            .map(|bow| {
                bow.iter()
                    .flat_map(|&(id, count)| std::iter::repeat(id).take(count as usize))
                    .collect()
            })
            .collect();

        let vocab_size = dictionary.len();
        let total_tokens: usize = docs.iter().map(Vec::len).sum();
        if vocab_size == 0 || total_tokens == 0 {
            bail!("cannot compute LDA over an empty collection (no terms)");
        }

        let mut rng = StdRng::seed_from_u64(options.seed);
        let mut alpha = match options.alpha {
            Alpha::Symmetric(a) => vec![a.max(ALPHA_FLOOR); k],
            Alpha::Auto => vec![1.0 / k as f64; k],
        };

        let mut nkw = vec![vec![0u32; vocab_size]; k];
        let mut nk = vec![0u64; k];
        let mut ndk = vec![vec![0u32; k]; docs.len()];
        let mut z: Vec<Vec<usize>> = docs.iter().map(|d| vec![0usize; d.len()]).collect();

        // Random initialization of topic assignments.
        for (d, doc) in docs.iter().enumerate() {
            for (i, &w) in doc.iter().enumerate() {
                let t = rng.gen_range(0..k);
                z[d][i] = t;
                ndk[d][t] += 1;
                nkw[t][w] += 1;
                nk[t] += 1;
            }
        }

        let vb = vocab_size as f64 * BETA;
        let chunk_size = options.chunk_size.max(1);
        let doc_ids: Vec<usize> = (0..docs.len()).collect();

        for pass in 0..options.passes.max(1) {
            for (chunk_idx, chunk) in doc_ids.chunks(chunk_size).enumerate() {
                for &d in chunk {
                    for i in 0..docs[d].len() {
                        let w = docs[d][i];
                        let old = z[d][i];
                        ndk[d][old] -= 1;
                        nkw[old][w] -= 1;
                        nk[old] -= 1;

                        // p(t) ∝ (ndk + alpha_t) * (nkw + beta) / (nk + V*beta)
                        let mut weights = vec![0.0f64; k];
                        for (t, weight) in weights.iter_mut().enumerate() {
                            *weight = (ndk[d][t] as f64 + alpha[t])
                                * (nkw[t][w] as f64 + BETA)
                                / (nk[t] as f64 + vb);
                        }
                        let new = WeightedIndex::new(&weights)?.sample(&mut rng);

                        z[d][i] = new;
                        ndk[d][new] += 1;
                        nkw[new][w] += 1;
                        nk[new] += 1;
                    }
                }
                if matches!(options.alpha, Alpha::Auto)
                    && options.update_every > 0
                    && (chunk_idx + 1) % options.update_every == 0
                {
                    reestimate_alpha(&mut alpha, &ndk, &docs);
                }
            }
            if matches!(options.alpha, Alpha::Auto) {
                reestimate_alpha(&mut alpha, &ndk, &docs);
            }
            debug!(pass = pass + 1, passes = options.passes, "gibbs pass complete");
        }

        Ok(Self {
            num_topics: k,
            dictionary,
            nkw,
            nk,
            alpha,
            assignments: options.per_word_topics.then_some(z),
        })
    }

    pub fn num_topics(&self) -> usize {
        self.num_topics
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Document-topic prior after training.
    pub fn alpha(&self) -> &[f64] {
        &self.alpha
    }

    /// Token-level topic assignments for one document, when retained.
    pub fn topic_assignments(&self, doc: usize) -> Option<&[usize]> {
        self.assignments.as_ref()?.get(doc).map(Vec::as_slice)
    }

    /// Top `n` terms of a topic by probability, descending. Ties keep
    /// vocabulary-id order, so the result is stable across runs.
    pub fn top_terms(&self, topic: usize, n: usize) -> Vec<(String, f64)> {
        let vb = self.dictionary.len() as f64 * BETA;
        let denom = self.nk[topic] as f64 + vb;
        let mut terms: Vec<(usize, f64)> = self.nkw[topic]
            .iter()
            .enumerate()
            .map(|(w, &count)| (w, (count as f64 + BETA) / denom))
            .collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1));
        terms
            .into_iter()
            .take(n)
            .filter_map(|(w, p)| self.dictionary.token(w).map(|tok| (tok.to_string(), p)))
            .collect()
    }

    /// Topics as `(topic_id, text)` pairs in topic-index order, at most
    /// `limit` of them. The text is the conventional term-weight rendering:
    /// `0.123*"term" + 0.098*"term" + ...` over the top terms.
    pub fn print_topics(&self, limit: usize) -> Vec<(usize, String)> {
        (0..self.num_topics.min(limit))
            .map(|t| {
                let text = self
                    .top_terms(t, TOPIC_TERMS)
                    .into_iter()
                    .map(|(term, p)| format!("{p:.3}*\"{term}\""))
                    .collect::<Vec<_>>()
                    .join(" + ");
                (t, text)
            })
            .collect()
    }
}

/// Moment-matching re-estimation of the asymmetric prior, in place of a
/// full Newton step: each component moves to the mean smoothed topic
/// proportion across documents, floored to stay positive.
fn reestimate_alpha(alpha: &mut [f64], ndk: &[Vec<u32>], docs: &[Vec<usize>]) {
    let alpha_sum: f64 = alpha.iter().sum();
    let mut counted = 0usize;
    let mut means = vec![0.0f64; alpha.len()];
    for (d, doc) in docs.iter().enumerate() {
        if doc.is_empty() {
            continue;
        }
        counted += 1;
        let denom = doc.len() as f64 + alpha_sum;
        for (t, mean) in means.iter_mut().enumerate() {
            *mean += (ndk[d][t] as f64 + alpha[t]) / denom;
        }
    }
    if counted == 0 {
        return;
    }
    for (t, mean) in means.into_iter().enumerate() {
        alpha[t] = (mean / counted as f64).max(ALPHA_FLOOR);
    }
}
