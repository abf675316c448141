//! Core types for textrank_summary
//!
//! This module defines the sentence entity that flows through the whole
//! pipeline and the configuration of the ranking algorithm.

use crate::errors::{Result, ValidationError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
///
/// The raw text and position are fixed at construction. The preprocessed
/// and encoded token sequences are filled in later by
/// [`SentencePreprocessor`](crate::nlp::preprocessor::SentencePreprocessor)
/// and [`SentenceEncoder`](crate::nlp::encoder::SentenceEncoder).
///
/// Graphs built over sentences borrow them and identify vertices by
/// reference, so two sentences with equal content are still distinct
/// vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text
    text: String,
    /// Zero-based order of appearance in the document
    position: usize,
    /// Normalized tokens (lowercased, no punctuation, no stopwords)
    preprocessed: Vec<String>,
    /// Integer codes of the preprocessed tokens, same order
    encoded: Vec<u32>,
}

impl Sentence {
    /// Create a new sentence with empty token sequences
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
            preprocessed: Vec::new(),
            encoded: Vec::new(),
        }
    }

    /// Position of the sentence in the document
    pub fn position(&self) -> usize {
        self.position
    }

    /// The raw sentence text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the raw sentence text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The normalized token sequence
    pub fn preprocessed(&self) -> &[String] {
        &self.preprocessed
    }

    /// Set the normalized token sequence
    pub fn set_preprocessed(&mut self, tokens: Vec<String>) {
        self.preprocessed = tokens;
    }

    /// The encoded token sequence
    pub fn encoded(&self) -> &[u32] {
        &self.encoded
    }

    /// Set the encoded token sequence
    pub fn set_encoded(&mut self, codes: Vec<u32>) {
        self.encoded = codes;
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the sentence ranking iteration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Damping factor (0.85)
    pub damping: f64,
    /// Stop once the summed absolute score change is at most this (0.0001)
    pub convergence_threshold: f64,
    /// Hard cap on ranking rounds (50)
    pub max_iterations: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            convergence_threshold: 0.0001,
            max_iterations: 50,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON, filling omitted fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ValidationError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // NaN fails the range check
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(ValidationError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.convergence_threshold.is_nan() || self.convergence_threshold <= 0.0 {
            return Err(ValidationError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if self.max_iterations == 0 {
            return Err(ValidationError::invalid_config("max_iterations must be > 0"));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
