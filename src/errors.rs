use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("input error: {0}")]
    Input(String),
    #[error("cannot build a probability table from an empty token sequence")]
    EmptyCorpus,
    #[error("cannot length-normalize the score of empty sentence {index}")]
    EmptySentence { index: usize },
    #[error("all {distinct} distinct tokens were filtered as invalid")]
    NoValidTokens { distinct: usize },
    #[error("unsupported stopword language: {0}")]
    UnsupportedLanguage(String),
}
