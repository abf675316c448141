//! # textrank_summary
//!
//! Extractive text summarization with a sentence-level TextRank graph.
//!
//! Sentences become vertices of a similarity graph whose edges are weighted
//! by the Jaccard similarity of their normalized tokens. An iterative
//! PageRank-style scoring ranks the sentences, and the best ones are
//! returned in their original order.
//!
//! ```rust,ignore
//! use textrank_summary::{summarize, StopwordFilter};
//!
//! let summary = summarize(text, StopwordFilter::new("en"), 3)?;
//! ```
//!
//! The individual stages are available for finer control:
//! [`SentencePreprocessor`] -> [`SentenceEncoder`] -> [`SimilarityMatrix`]
//! -> [`TextRankSummarizer`].

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, ValidationError};
pub use types::{Sentence, SummarizerConfig};

// Re-export main functionality
pub use graph::{matrix::SimilarityMatrix, similarity::jaccard_similarity};
pub use nlp::{
    encoder::{SentenceEncoder, TokenVocabulary, FIRST_TOKEN_CODE},
    normalizer::{Normalize, TextNormalizer, DEFAULT_PUNCTUATION},
    preprocessor::{split_sentences, SentencePreprocessor},
    stopwords::StopwordFilter,
};
pub use pagerank::{inout::InoutPageRank, RankResult};
pub use pipeline::runner::{summarize, SummaryPipeline};
pub use summarizer::textrank::TextRankSummarizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
