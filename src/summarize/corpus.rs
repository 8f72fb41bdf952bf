use crate::errors::SummarizeError;
use crate::summarize::tokenizer::Tokenizer;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    /// Position among the corpus sentences, in document order
    pub index: usize,
    pub text: String,
    pub tokens: Vec<String>,
}

impl Sentence {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Sentences of one document, built once from tokenizer output.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    sentences: Vec<Sentence>,
}

impl Corpus {
    pub fn from_text(text: &str, tokenizer: &dyn Tokenizer) -> Result<Self, SummarizeError> {
        let sentences = tokenizer.sentence_split(text);
        Self::from_sentences(sentences, tokenizer)
    }

    /// Builds a corpus from text that is already split into sentences.
    /// Sentences yielding no tokens are skipped and do not consume an index.
    pub fn from_sentences<I, S>(sentences: I, tokenizer: &dyn Tokenizer) -> Result<Self, SummarizeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<Sentence> = Vec::new();
        for raw in sentences {
            let text = raw.as_ref().trim();
            let tokens = tokenizer.word_tokenize(text);
            if tokens.is_empty() {
                continue;
            }
            out.push(Sentence {
                index: out.len(),
                text: text.to_string(),
                tokens,
            });
        }
        if out.is_empty() {
            return Err(SummarizeError::Input(
                "text contains no sentences after tokenization".into(),
            ));
        }
        Ok(Self { sentences: out })
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.sentences
            .iter()
            .flat_map(|s| s.tokens.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
