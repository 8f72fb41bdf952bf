use crate::summarize::filter::is_supported_language;
use crate::summarize::{Backend, OutputOrder, SummarizerOptions};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "basesum")]
#[command(about = "Extractive summary by greedy unigram-probability sentence selection", long_about = None)]
pub struct AppConfig {
    /// Document to summarize; reads stdin when absent or "-"
    pub input: Option<PathBuf>,

    #[arg(short = 'n', long, env = "BASESUM_NUM_SENTENCES", default_value_t = 3)]
    pub num_sentences: usize,

    #[arg(long, env = "BASESUM_LANGUAGE", default_value = "en")]
    pub language: String,

    /// Additional stopword, may be repeated
    #[arg(long = "stopword")]
    pub extra_stopwords: Vec<String>,

    /// Newline-separated stopword list used instead of the language list
    #[arg(long, env = "BASESUM_STOPWORDS_FILE")]
    pub stopwords_file: Option<PathBuf>,

    #[arg(long)]
    pub keep_numeric: bool,

    #[arg(long)]
    pub no_length_norm: bool,

    #[arg(long, value_enum, default_value_t = OutputOrder::Selection)]
    pub order: OutputOrder,

    #[arg(long, value_enum, env = "BASESUM_BACKEND", default_value_t = Backend::Greedy)]
    pub backend: Backend,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl AppConfig {
    pub fn from_env_and_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.stopwords_file.is_none() && !is_supported_language(&self.language) {
            return Err(format!("unsupported language: {}", self.language));
        }
        if let Some(path) = &self.stopwords_file {
            if !path.is_file() {
                return Err(format!("stopwords file does not exist: {}", path.display()));
            }
        }
        Ok(())
    }

    pub fn summarizer_options(&self) -> anyhow::Result<SummarizerOptions> {
        let stopwords = match &self.stopwords_file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading stopwords file {}", path.display()))?;
                Some(parse_stopword_list(&raw))
            }
            None => None,
        };
        Ok(SummarizerOptions {
            backend: self.backend,
            language: self.language.clone(),
            stopwords,
            extra_stopwords: self.extra_stopwords.clone(),
            treat_numeric_as_invalid: !self.keep_numeric,
            normalize_by_length: !self.no_length_norm,
            order: self.order,
        })
    }
}

// One word per line; blank lines and `#` comments are skipped.
fn parse_stopword_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}
