//! Token normalization
//!
//! Turns the raw text of one sentence into the token sequence used for
//! similarity: lowercased, punctuation removed, stopwords dropped.

use super::stopwords::StopwordFilter;
use rustc_hash::FxHashSet;

/// ASCII punctuation plus the typographic marks common in prose
pub const DEFAULT_PUNCTUATION: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<',
    '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~', '«', '»', '—', '–',
    '…', '„', '“', '”',
];

/// Sentence-level normalization stage.
///
/// [`TextNormalizer`] is the default. Implement this to plug in a
/// lemmatizer or a language-specific tokenizer.
///
/// # Contract
///
/// - The output order follows the order of words in `text`.
/// - Returned tokens must be non-empty.
pub trait Normalize {
    /// Normalize one sentence into its token sequence.
    fn normalize(&self, text: &str) -> Vec<String>;
}

/// Lowercase, strip punctuation, split on whitespace, drop stopwords
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: StopwordFilter,
    punctuation: FxHashSet<char>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(StopwordFilter::empty(), DEFAULT_PUNCTUATION.iter().copied())
    }
}

impl TextNormalizer {
    /// Create a normalizer from a stopword filter and a punctuation set
    pub fn new(stopwords: StopwordFilter, punctuation: impl IntoIterator<Item = char>) -> Self {
        Self {
            stopwords,
            punctuation: punctuation.into_iter().collect(),
        }
    }

    /// The stopwords this normalizer drops
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }
}

impl Normalize for TextNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|&c| !self.is_punctuation(c))
            .collect();

        cleaned
            .split_whitespace()
            .filter(|word| !self.stopwords.is_stopword(word))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_strip_punctuation() {
        let normalizer = TextNormalizer::default();

        assert_eq!(
            normalizer.normalize("The Cat, sat -- quietly!"),
            vec!["the", "cat", "sat", "quietly"]
        );
    }

    #[test]
    fn test_stopwords_removed_after_lowercasing() {
        let normalizer = TextNormalizer::new(
            StopwordFilter::from_list(&["the", "on"]),
            DEFAULT_PUNCTUATION.iter().copied(),
        );

        assert_eq!(normalizer.normalize("The cat sat on the mat."), vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn test_cyrillic_and_typographic_quotes() {
        let normalizer = TextNormalizer::new(
            StopwordFilter::from_list(&["и"]),
            DEFAULT_PUNCTUATION.iter().copied(),
        );

        assert_eq!(
            normalizer.normalize("«Жила-была» Дюймовочка и жаба…"),
            vec!["жилабыла", "дюймовочка", "жаба"]
        );
    }

    #[test]
    fn test_only_configured_punctuation_is_removed() {
        let normalizer = TextNormalizer::new(StopwordFilter::empty(), ['.']);

        assert_eq!(normalizer.normalize("Hi, there."), vec!["hi,", "there"]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        let normalizer = TextNormalizer::default();

        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("... !!! ?").is_empty());
    }
}
