pub mod config;
pub mod errors;
pub mod logging;
pub mod summarize;

pub use errors::SummarizeError;
pub use summarize::corpus::{Corpus, Sentence};
pub use summarize::filter::TokenFilter;
pub use summarize::greedy::GreedySummarizer;
pub use summarize::model::ProbabilityTable;
pub use summarize::scorer::SentenceScorer;
pub use summarize::tokenizer::{Tokenizer, UnicodeTokenizer};
pub use summarize::{build_summarizer, Summarizer, SummarizerOptions, Summary};
