use unicode_segmentation::UnicodeSegmentation;

/// Splits raw text into sentences and sentences into normalized tokens.
pub trait Tokenizer: Send + Sync {
    fn sentence_split(&self, text: &str) -> Vec<String>;
    fn word_tokenize(&self, sentence: &str) -> Vec<String>;
}

/// UAX#29 sentence and word boundaries. Punctuation is kept as separate
/// tokens so the filter can zero it; whitespace is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn sentence_split(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn word_tokenize(&self, sentence: &str) -> Vec<String> {
        sentence
            .split_word_bounds()
            .filter(|w| !w.trim().is_empty())
            .map(|w| w.to_lowercase())
            .collect()
    }
}
