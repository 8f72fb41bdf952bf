use crate::errors::SummarizeError;
use crate::summarize::corpus::Sentence;
use crate::summarize::model::ProbabilityTable;

#[derive(Debug, Clone, Copy)]
pub struct SentenceScorer {
    pub normalize_by_length: bool,
}

impl Default for SentenceScorer {
    fn default() -> Self {
        Self {
            normalize_by_length: true,
        }
    }
}

impl SentenceScorer {
    pub fn new(normalize_by_length: bool) -> Self {
        Self { normalize_by_length }
    }

    /// Sum of token probabilities, divided by token count when normalizing.
    pub fn score(&self, table: &ProbabilityTable, sentence: &Sentence) -> Result<f64, SummarizeError> {
        let sum: f64 = sentence.tokens.iter().map(|t| table.get(t)).sum();
        if !self.normalize_by_length {
            return Ok(sum);
        }
        if sentence.is_empty() {
            return Err(SummarizeError::EmptySentence {
                index: sentence.index,
            });
        }
        Ok(sum / sentence.len() as f64)
    }
}
