//! Greedy sentence selection over a decaying unigram table.
//!
//! Each round scores every sentence still in the working pool, takes the
//! best one and decays the probabilities of its tokens so later rounds
//! favour sentences with vocabulary not yet covered. Ties go to the
//! sentence that appears first in the document.

use crate::errors::SummarizeError;
use crate::summarize::corpus::{Corpus, Sentence};
use crate::summarize::filter::TokenFilter;
use crate::summarize::model::ProbabilityTable;
use crate::summarize::scorer::SentenceScorer;
use crate::summarize::tokenizer::{Tokenizer, UnicodeTokenizer};
use crate::summarize::{OutputOrder, Summarizer, Summary, SummarySentence};
use std::sync::Arc;

pub struct GreedySummarizer {
    tokenizer: Arc<dyn Tokenizer>,
    filter: TokenFilter,
    scorer: SentenceScorer,
    order: OutputOrder,
}

impl GreedySummarizer {
    pub fn new(filter: TokenFilter) -> Self {
        Self {
            tokenizer: Arc::new(UnicodeTokenizer),
            filter,
            scorer: SentenceScorer::default(),
            order: OutputOrder::Selection,
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_scorer(mut self, scorer: SentenceScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_order(mut self, order: OutputOrder) -> Self {
        self.order = order;
        self
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    /// Masked, normalized table for `corpus`. Every run starts from its own copy.
    pub fn initial_table(&self, corpus: &Corpus) -> Result<ProbabilityTable, SummarizeError> {
        ProbabilityTable::build(corpus.tokens())?.mask_invalid(|t| self.filter.is_invalid(t))
    }

    /// Selects up to `num_sentences` sentences. Asking for more sentences than
    /// the corpus holds returns every sentence once, in selection order.
    pub fn summarize_corpus(
        &self,
        corpus: &Corpus,
        num_sentences: usize,
    ) -> Result<Summary, SummarizeError> {
        let mut summary = Summary {
            sentences: Vec::with_capacity(num_sentences.min(corpus.len())),
            requested: num_sentences,
            corpus_size: corpus.len(),
        };
        if num_sentences == 0 {
            return Ok(summary);
        }

        let mut table = self.initial_table(corpus)?;
        let mut pool: Vec<&Sentence> = corpus.sentences().iter().collect();

        while summary.sentences.len() < num_sentences {
            let Some((pos, score)) = self.best_candidate(&table, &pool)? else {
                break;
            };
            // Vec::remove keeps the pool in document order for the tie-break
            let sentence = pool.remove(pos);
            table.decay(&sentence.tokens);

            let round = summary.sentences.len() + 1;
            tracing::debug!(round, index = sentence.index, score, "selected sentence");
            summary.sentences.push(SummarySentence {
                index: sentence.index,
                text: sentence.text.clone(),
                tokens: sentence.tokens.clone(),
                score,
                round,
            });
        }

        if self.order == OutputOrder::Document {
            summary.sentences.sort_by_key(|s| s.index);
        }
        Ok(summary)
    }

    fn best_candidate(
        &self,
        table: &ProbabilityTable,
        pool: &[&Sentence],
    ) -> Result<Option<(usize, f64)>, SummarizeError> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, sentence) in pool.iter().enumerate() {
            let score = self.scorer.score(table, sentence)?;
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((pos, score)),
            }
        }
        Ok(best)
    }
}

impl Summarizer for GreedySummarizer {
    fn summarize(&self, text: &str, num_sentences: usize) -> Result<Summary, SummarizeError> {
        let corpus = Corpus::from_text(text, self.tokenizer())?;
        let summary = self.summarize_corpus(&corpus, num_sentences)?;
        tracing::info!(
            selected = summary.len(),
            requested = num_sentences,
            corpus_size = corpus.len(),
            average_tokens = summary.average_tokens(),
            "summary complete"
        );
        Ok(summary)
    }
}
