//! Sentence splitting and preprocessing
//!
//! Splits raw text into [`Sentence`]s and fills in their normalized token
//! sequences.
//!
//! Boundaries are found with a heuristic: terminal punctuation (`.`, `!`,
//! `?`), then whitespace, then an uppercase Latin or Cyrillic letter.
//! Abbreviations such as "Dr. Smith" are split, and sentences that start
//! with a lowercase letter or a digit are joined to the previous one.

use super::normalizer::{Normalize, TextNormalizer, DEFAULT_PUNCTUATION};
use super::stopwords::StopwordFilter;
use crate::types::Sentence;
use once_cell::sync::Lazy;
use regex::Regex;

/// Terminal punctuation, the whitespace to split on, then a sentence start
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?](\s+)[A-ZА-Я]").unwrap());

/// Produces preprocessed sentences from raw text
#[derive(Debug, Clone, Default)]
pub struct SentencePreprocessor<N = TextNormalizer> {
    normalizer: N,
}

impl SentencePreprocessor<TextNormalizer> {
    /// Create a preprocessor that drops `stopwords` and `punctuation`
    pub fn new(stopwords: StopwordFilter, punctuation: impl IntoIterator<Item = char>) -> Self {
        Self::with_normalizer(TextNormalizer::new(stopwords, punctuation))
    }

    /// Create a preprocessor with the default punctuation set
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self::new(stopwords, DEFAULT_PUNCTUATION.iter().copied())
    }
}

impl<N: Normalize> SentencePreprocessor<N> {
    /// Create a preprocessor around a custom normalizer
    pub fn with_normalizer(normalizer: N) -> Self {
        Self { normalizer }
    }

    /// Split `text` into sentences and fill their preprocessed tokens
    ///
    /// Positions are assigned in order of appearance, starting at 0.
    pub fn get_sentences(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = split_sentences(text);
        for sentence in &mut sentences {
            let tokens = self.normalizer.normalize(sentence.text());
            sentence.set_preprocessed(tokens);
        }
        sentences
    }

    /// The normalizer applied to each sentence
    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }
}

/// Split text into sentences without preprocessing them
///
/// Newlines become spaces and double spaces are collapsed once before
/// splitting. Empty input yields a single empty sentence.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let text = text.replace('\n', " ").replace("  ", " ");

    let mut spans = Vec::new();
    let mut start = 0;
    for caps in SENTENCE_BOUNDARY.captures_iter(&text) {
        if let Some(gap) = caps.get(1) {
            spans.push(&text[start..gap.start()]);
            start = gap.end();
        }
    }
    spans.push(&text[start..]);

    spans
        .into_iter()
        .enumerate()
        .map(|(position, span)| Sentence::new(span, position))
        .collect()
}
