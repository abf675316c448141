//! Stopword filtering
//!
//! Sentence preprocessing drops stopwords before encoding, so they never
//! contribute to lexical similarity. Lists come either from the caller or
//! from the built-in lists of the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of lowercase words removed during normalization
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a filter from the built-in list for a language
    ///
    /// Unknown language codes fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "ru" | "russian" => LANGUAGE::Russian,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "pl" | "polish" => LANGUAGE::Polish,
            "da" | "danish" => LANGUAGE::Danish,
            "sv" | "swedish" => LANGUAGE::Swedish,
            _ => LANGUAGE::English,
        };

        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Create an empty filter that keeps every word
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a filter from a caller-supplied list
    pub fn from_list(words: &[&str]) -> Self {
        words.iter().copied().collect()
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        self.stopwords.extend(words.iter().map(|w| w.to_lowercase()));
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word) || self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for StopwordFilter {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            stopwords: iter.into_iter().map(str::to_lowercase).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_list_is_case_insensitive() {
        let filter = StopwordFilter::from_list(&["И", "в"]);

        assert!(filter.is_stopword("и"));
        assert!(filter.is_stopword("В"));
        assert!(!filter.is_stopword("кот"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_add_stopwords() {
        let mut filter = StopwordFilter::empty();
        assert!(filter.is_empty());

        filter.add_stopwords(&["The"]);
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_builtin_english() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("summarization"));
    }

    #[test]
    fn test_builtin_russian() {
        let filter = StopwordFilter::new("ru");

        assert!(filter.is_stopword("и"));
        assert!(!filter.is_stopword("дюймовочка"));
    }
}
