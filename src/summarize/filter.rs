//! Token validity: stopwords, punctuation and numeric tokens carry no weight.

use crate::errors::SummarizeError;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;
use stop_words::{get, LANGUAGE};

// Stopword lists are loaded at most once per language and shared read-only.
static STOPWORD_CACHE: Lazy<Mutex<FxHashMap<&'static str, Arc<FxHashSet<String>>>>> =
    Lazy::new(|| Mutex::new(FxHashMap::default()));

fn language_for(code: &str) -> Option<(&'static str, LANGUAGE)> {
    let lang = match code.to_lowercase().as_str() {
        "en" | "english" => ("en", LANGUAGE::English),
        "de" | "german" => ("de", LANGUAGE::German),
        "fr" | "french" => ("fr", LANGUAGE::French),
        "es" | "spanish" => ("es", LANGUAGE::Spanish),
        "it" | "italian" => ("it", LANGUAGE::Italian),
        "pt" | "portuguese" => ("pt", LANGUAGE::Portuguese),
        "nl" | "dutch" => ("nl", LANGUAGE::Dutch),
        "ru" | "russian" => ("ru", LANGUAGE::Russian),
        "sv" | "swedish" => ("sv", LANGUAGE::Swedish),
        _ => return None,
    };
    Some(lang)
}

pub fn is_supported_language(code: &str) -> bool {
    language_for(code).is_some()
}

fn stopwords_for(code: &str) -> Result<Arc<FxHashSet<String>>, SummarizeError> {
    let (key, lang) =
        language_for(code).ok_or_else(|| SummarizeError::UnsupportedLanguage(code.to_string()))?;
    let mut cache = STOPWORD_CACHE.lock();
    let set = cache.entry(key).or_insert_with(|| {
        let words: FxHashSet<String> = get(lang).into_iter().map(|w| w.to_lowercase()).collect();
        tracing::debug!(language = key, stopwords = words.len(), "loaded stopword list");
        Arc::new(words)
    });
    Ok(Arc::clone(set))
}

#[derive(Debug, Clone)]
pub struct TokenFilter {
    stopwords: Arc<FxHashSet<String>>,
    treat_numeric_as_invalid: bool,
}

impl TokenFilter {
    pub fn for_language(code: &str) -> Result<Self, SummarizeError> {
        Ok(Self {
            stopwords: stopwords_for(code)?,
            treat_numeric_as_invalid: true,
        })
    }

    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            stopwords: Arc::new(words.iter().map(|w| w.as_ref().to_lowercase()).collect()),
            treat_numeric_as_invalid: true,
        }
    }

    pub fn with_extra_stopwords<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        if words.is_empty() {
            return self;
        }
        let mut set = (*self.stopwords).clone();
        set.extend(words.iter().map(|w| w.as_ref().to_lowercase()));
        self.stopwords = Arc::new(set);
        self
    }

    pub fn with_numeric_invalid(mut self, invalid: bool) -> Self {
        self.treat_numeric_as_invalid = invalid;
        self
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn is_invalid(&self, token: &str) -> bool {
        is_punctuation(token)
            || self.is_stopword(token)
            || (self.treat_numeric_as_invalid && is_numeric(token))
    }
}

fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| !c.is_alphanumeric())
}

// f64 parsing also accepts "inf" and "nan"; require a digit so those stay words.
fn is_numeric(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit()) && token.parse::<f64>().is_ok()
}
