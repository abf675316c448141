//! Token encoding
//!
//! Assigns stable integer codes to normalized tokens so that similarity is
//! computed over small integers instead of strings.

use crate::errors::{Result, ValidationError};
use crate::types::Sentence;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// The first code handed out by a fresh vocabulary.
///
/// Codes below this value are left free for callers that reserve them.
pub const FIRST_TOKEN_CODE: u32 = 1000;

/// A bidirectional token <-> code table
///
/// Each unique token is stored once and shared by both directions. Codes are
/// assigned consecutively from [`FIRST_TOKEN_CODE`] in first-seen order and
/// never reused.
#[derive(Debug, Default)]
pub struct TokenVocabulary {
    /// Maps tokens to their codes
    token_to_code: FxHashMap<Arc<str>, u32>,
    /// Maps `code - FIRST_TOKEN_CODE` back to tokens
    code_to_token: Vec<Arc<str>>,
}

impl TokenVocabulary {
    /// Create a new empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the code for `token`, assigning the next free one if unseen
    pub fn learn(&mut self, token: &str) -> Result<u32> {
        if let Some(&code) = self.token_to_code.get(token) {
            return Ok(code);
        }

        let code = self.next_code()?;
        let token: Arc<str> = token.into();
        self.token_to_code.insert(token.clone(), code);
        self.code_to_token.push(token);
        Ok(code)
    }

    /// Get the code of a known token
    pub fn code(&self, token: &str) -> Option<u32> {
        self.token_to_code.get(token).copied()
    }

    /// Get the token behind a code
    pub fn token(&self, code: u32) -> Option<&str> {
        let index = code.checked_sub(FIRST_TOKEN_CODE)?;
        self.code_to_token.get(index as usize).map(|t| t.as_ref())
    }

    /// The code the next unseen token will receive
    pub fn next_code(&self) -> Result<u32> {
        u32::try_from(self.code_to_token.len())
            .ok()
            .and_then(|len| FIRST_TOKEN_CODE.checked_add(len))
            .ok_or(ValidationError::CodeSpaceExhausted)
    }

    /// Get the number of known tokens
    pub fn len(&self) -> usize {
        self.code_to_token.len()
    }

    /// Check if no token has been learned yet
    pub fn is_empty(&self) -> bool {
        self.code_to_token.is_empty()
    }
}

/// Fills the encoded token sequence of sentences
///
/// The vocabulary lives as long as the encoder, so sentences encoded by
/// separate calls share codes for the same tokens.
#[derive(Debug, Default)]
pub struct SentenceEncoder {
    vocabulary: TokenVocabulary,
}

impl SentenceEncoder {
    /// Create an encoder with an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode every sentence's preprocessed tokens, in order
    ///
    /// Codes for unseen tokens are assigned in first-occurrence order
    /// across the whole slice. On error, sentences before the failing one
    /// keep their encodings and the failing one is left untouched.
    pub fn encode_sentences(&mut self, sentences: &mut [Sentence]) -> Result<()> {
        for sentence in sentences.iter_mut() {
            let encoded = sentence
                .preprocessed()
                .iter()
                .map(|token| self.vocabulary.learn(token))
                .collect::<Result<Vec<_>>>()?;
            sentence.set_encoded(encoded);
        }
        Ok(())
    }

    /// Map codes back to tokens; unknown codes are skipped
    pub fn decode(&self, codes: &[u32]) -> Vec<&str> {
        codes
            .iter()
            .filter_map(|&code| self.vocabulary.token(code))
            .collect()
    }

    /// The token table built so far
    pub fn vocabulary(&self) -> &TokenVocabulary {
        &self.vocabulary
    }
}
