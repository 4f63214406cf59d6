use log::debug;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

// @module: Function-word filtering

/// A filter holding the stopword set for one language.
///
/// Filtering is optional for the whole run (`use_stopwords` in the config);
/// a disabled run uses an empty filter, which passes every token through.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    // Stored lowercase; tokens are lowercased by the tokenizer upstream.
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Load the bundled stopword list for a 2-letter language code.
    ///
    /// Unknown languages fall back to English, which covers the corpus this
    /// tool targets in practice.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" => LANGUAGE::English,
            "de" => LANGUAGE::German,
            "fr" => LANGUAGE::French,
            "es" => LANGUAGE::Spanish,
            "it" => LANGUAGE::Italian,
            "pt" => LANGUAGE::Portuguese,
            "nl" => LANGUAGE::Dutch,
            "ru" => LANGUAGE::Russian,
            other => {
                debug!("No bundled stopword list for '{}', using English", other);
                LANGUAGE::English
            }
        };

        let stopwords: FxHashSet<String> =
            get(lang).iter().map(|s| s.to_lowercase()).collect();
        Self { stopwords }
    }

    /// An empty filter that passes every token through.
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Build a filter from an explicit word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Drop stopwords from a token sequence in place.
    pub fn retain_content_words(&self, tokens: &mut Vec<String>) {
        if self.stopwords.is_empty() {
            return;
        }
        tokens.retain(|t| !self.is_stopword(t));
    }

    /// Number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
