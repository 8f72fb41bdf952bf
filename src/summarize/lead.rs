use crate::errors::SummarizeError;
use crate::summarize::corpus::Corpus;
use crate::summarize::tokenizer::UnicodeTokenizer;
use crate::summarize::{Summarizer, Summary, SummarySentence};

/// Baseline that takes the first N sentences of the document.
#[derive(Default)]
pub struct LeadSummarizer {
    tokenizer: UnicodeTokenizer,
}

impl Summarizer for LeadSummarizer {
    fn summarize(&self, text: &str, num_sentences: usize) -> Result<Summary, SummarizeError> {
        let corpus = Corpus::from_text(text, &self.tokenizer)?;
        let sentences = corpus
            .sentences()
            .iter()
            .take(num_sentences)
            .enumerate()
            .map(|(i, s)| SummarySentence {
                index: s.index,
                text: s.text.clone(),
                tokens: s.tokens.clone(),
                score: 0.0,
                round: i + 1,
            })
            .collect();
        Ok(Summary {
            sentences,
            requested: num_sentences,
            corpus_size: corpus.len(),
        })
    }
}
