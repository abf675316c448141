//! Natural Language Processing components
//!
//! This module provides sentence splitting, token normalization, stopword
//! filtering and token encoding.

pub mod encoder;
pub mod normalizer;
pub mod preprocessor;
pub mod stopwords;
