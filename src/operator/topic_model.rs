// Topic-modeling operator — buffers tokenized rows, trains an LDA model
// once input is exhausted, and stages one output row per topic.

use std::collections::VecDeque;

use anyhow::Result;
use tracing::{debug, info};

use crate::config::TrainingConfig;
use crate::lda::dictionary::Dictionary;
use crate::lda::model::{LdaModel, LdaOptions};

use super::row::{OutputRow, Row};
use super::traits::Operator;

/// Blocking unsupervised trainer over a stream of tokenized documents.
///
/// Rows accumulate in memory until `input_exhausted`, which runs one full
/// training pass and stages the topic summaries. The operator intentionally
/// tokenizes during `accept` rather than storing rows verbatim: the trainer
/// wants token sequences, not row objects.
#[derive(Debug, Default)]
pub struct TopicModelOperator {
    config: TrainingConfig,
    documents: Vec<Vec<String>>,
    results: VecDeque<OutputRow>,
}

impl TopicModelOperator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the trainer over the accumulated collection.
    ///
    /// Stateless with respect to the operator: the hyperparameters beyond
    /// `num_topics` are fixed (seed 100, 10 passes, chunk size 100,
    /// update-every 1, auto-tuned asymmetric alpha, per-word topics on —
    /// the `LdaOptions` defaults). Trainer failures propagate untouched.
    pub fn train(documents: &[Vec<String>], config: &TrainingConfig) -> Result<LdaModel> {
        debug!(documents = documents.len(), num_topics = config.num_topics, "start training");
        let dictionary = Dictionary::from_documents(documents);
        let corpus: Vec<Vec<(usize, u32)>> = documents
            .iter()
            .map(|doc| dictionary.doc_to_bow(doc))
            .collect();
        let options = LdaOptions {
            num_topics: config.num_topics,
            ..LdaOptions::default()
        };
        LdaModel::fit(&corpus, dictionary, &options)
    }

    /// Stage one output row per topic, topic ids discarded, in the model's
    /// topic-index order.
    fn report(&mut self, model: &LdaModel) {
        debug!("reporting trained results");
        for (_, topic) in model.print_topics(self.config.num_topics) {
            self.results.push_back(OutputRow { output: topic });
        }
    }
}

impl Operator for TopicModelOperator {
    fn open(&mut self, args: &[String]) -> Result<()> {
        debug!(?args, "opening operator");
        self.config = TrainingConfig::from_args(args)?;
        self.documents.clear();
        self.results.clear();
        debug!(config = ?self.config, "parsed training args");
        Ok(())
    }

    fn accept(&mut self, row: Row, _nth_child: usize) -> Result<()> {
        let tokens: Vec<String> = row
            .first()?
            .split_whitespace()
            .map(str::to_string)
            .collect();
        self.documents.push(tokens);
        Ok(())
    }

    fn input_exhausted(&mut self) -> Result<()> {
        let model = Self::train(&self.documents, &self.config)?;
        self.report(&model);
        info!(topics = self.results.len(), "training complete");
        Ok(())
    }

    fn has_next(&self) -> bool {
        !self.results.is_empty()
    }

    fn next(&mut self) -> Option<OutputRow> {
        self.results.pop_front()
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
