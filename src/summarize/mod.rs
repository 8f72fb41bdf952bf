use crate::errors::SummarizeError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarySentence {
    pub index: usize,
    pub text: String,
    pub tokens: Vec<String>,
    pub score: f64,
    /// 1-based round in which the sentence was picked
    pub round: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub sentences: Vec<SummarySentence>,
    pub requested: usize,
    pub corpus_size: usize,
}

impl Summary {
    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.text.as_str()).collect()
    }

    /// Mean token count of the selected sentences. Diagnostic only.
    pub fn average_tokens(&self) -> f64 {
        if self.sentences.is_empty() {
            return 0.0;
        }
        let total: usize = self.sentences.iter().map(|s| s.tokens.len()).sum();
        total as f64 / self.sentences.len() as f64
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputOrder {
    /// Most representative first
    #[default]
    Selection,
    /// Original document order
    Document,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Greedy,
    Lead,
}

pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str, num_sentences: usize) -> Result<Summary, SummarizeError>;
}

pub mod corpus;
pub mod filter;
pub mod greedy;
mod lead;
pub mod model;
pub mod scorer;
pub mod tokenizer;

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SummarizerOptions {
    pub backend: Backend,
    pub language: String,
    /// Replaces the language list when set
    pub stopwords: Option<Vec<String>>,
    pub extra_stopwords: Vec<String>,
    pub treat_numeric_as_invalid: bool,
    pub normalize_by_length: bool,
    pub order: OutputOrder,
}

impl Default for SummarizerOptions {
    fn default() -> Self {
        Self {
            backend: Backend::Greedy,
            language: "en".into(),
            stopwords: None,
            extra_stopwords: Vec::new(),
            treat_numeric_as_invalid: true,
            normalize_by_length: true,
            order: OutputOrder::Selection,
        }
    }
}

impl SummarizerOptions {
    pub fn token_filter(&self) -> Result<filter::TokenFilter, SummarizeError> {
        let base = match &self.stopwords {
            Some(words) => filter::TokenFilter::from_list(words),
            None => filter::TokenFilter::for_language(&self.language)?,
        };
        Ok(base
            .with_extra_stopwords(&self.extra_stopwords)
            .with_numeric_invalid(self.treat_numeric_as_invalid))
    }
}

pub fn build_summarizer(opts: &SummarizerOptions) -> Result<Arc<dyn Summarizer>, SummarizeError> {
    let summarizer: Arc<dyn Summarizer> = match opts.backend {
        Backend::Greedy => Arc::new(
            greedy::GreedySummarizer::new(opts.token_filter()?)
                .with_scorer(scorer::SentenceScorer::new(opts.normalize_by_length))
                .with_order(opts.order),
        ),
        Backend::Lead => Arc::new(lead::LeadSummarizer::default()),
    };
    Ok(summarizer)
}
