//! Pipeline runner: runs every summarization stage in order.
//!
//! ```text
//! raw text -> preprocess -> encode -> graph -> rank -> summary
//! ```
//!
//! The runner owns the preprocessor and the encoder. The encoder's
//! vocabulary outlives a single run, so repeated calls keep assigning the
//! same codes to the same tokens.

use crate::errors::Result;
use crate::graph::matrix::SimilarityMatrix;
use crate::nlp::encoder::SentenceEncoder;
use crate::nlp::normalizer::{Normalize, TextNormalizer};
use crate::nlp::preprocessor::SentencePreprocessor;
use crate::nlp::stopwords::StopwordFilter;
use crate::summarizer::textrank::TextRankSummarizer;
use crate::types::SummarizerConfig;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Stage names, as they appear in tracing spans
pub const STAGE_PREPROCESS: &str = "preprocess";
pub const STAGE_ENCODE: &str = "encode";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SUMMARY: &str = "summary";

/// End-to-end extractive summarizer
#[derive(Debug)]
pub struct SummaryPipeline<N = TextNormalizer> {
    preprocessor: SentencePreprocessor<N>,
    encoder: SentenceEncoder,
    config: SummarizerConfig,
}

impl SummaryPipeline<TextNormalizer> {
    /// Build a pipeline that drops `stopwords` and the default punctuation
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self::with_preprocessor(SentencePreprocessor::with_stopwords(stopwords))
    }
}

impl<N: Normalize> SummaryPipeline<N> {
    /// Build a pipeline around an existing preprocessor
    pub fn with_preprocessor(preprocessor: SentencePreprocessor<N>) -> Self {
        Self {
            preprocessor,
            encoder: SentenceEncoder::new(),
            config: SummarizerConfig::default(),
        }
    }

    /// Replace the ranking configuration
    pub fn with_config(mut self, config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// The encoder, with the vocabulary learned so far
    pub fn encoder(&self) -> &SentenceEncoder {
        &self.encoder
    }

    /// Summarize `text` into at most `n_sentences` lines
    ///
    /// A one-sentence text produces no graph edges; that sentence is
    /// ranked on its own so it can still be returned.
    pub fn summarize(&mut self, text: &str, n_sentences: usize) -> Result<String> {
        let mut sentences = {
            trace_stage!(STAGE_PREPROCESS);
            self.preprocessor.get_sentences(text)
        };

        {
            trace_stage!(STAGE_ENCODE);
            self.encoder.encode_sentences(&mut sentences)?;
        }

        let graph = {
            trace_stage!(STAGE_GRAPH);
            let mut graph = SimilarityMatrix::with_capacity(sentences.len());
            graph.fill_from_sentences(&sentences)?;
            if graph.is_empty() {
                graph.add_vertex(&sentences[0]);
            }
            graph
        };

        let mut summarizer = TextRankSummarizer::with_config(&graph, &self.config)?;
        {
            trace_stage!(STAGE_RANK);
            summarizer.train();
        }

        trace_stage!(STAGE_SUMMARY);
        Ok(summarizer.make_summary(n_sentences))
    }
}

/// Summarize `text` in one call with a fresh pipeline
pub fn summarize(text: &str, stopwords: StopwordFilter, n_sentences: usize) -> Result<String> {
    SummaryPipeline::new(stopwords).summarize(text, n_sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 - 1 share "cats chase", 1 - 3 share "dogs", 2 shares nothing
    const TEXT: &str = "Cats chase mice. \
        Dogs chase cats. \
        The weather was mild. \
        Birds watch dogs.";

    fn pipeline() -> SummaryPipeline {
        SummaryPipeline::new(StopwordFilter::from_list(&["the", "was"]))
    }

    #[test]
    fn test_best_connected_sentence_first() {
        let summary = pipeline().summarize(TEXT, 1).unwrap();

        assert_eq!(summary, "Dogs chase cats.");
    }

    #[test]
    fn test_summary_keeps_document_order() {
        // An isolated sentence keeps a score of 1.0, above the path ends
        let summary = pipeline().summarize(TEXT, 2).unwrap();

        assert_eq!(summary, "Dogs chase cats.\nThe weather was mild.");
    }

    #[test]
    fn test_single_sentence_text() {
        let summary = pipeline().summarize("Only one sentence here.", 2).unwrap();

        assert_eq!(summary, "Only one sentence here.");
    }

    #[test]
    fn test_zero_sentences_requested() {
        assert_eq!(pipeline().summarize(TEXT, 0).unwrap(), "");
    }

    #[test]
    fn test_vocabulary_survives_runs() {
        let mut pipeline = pipeline();
        pipeline.summarize("Cats sleep. Cats eat.", 1).unwrap();
        let learned = pipeline.encoder().vocabulary().len();
        pipeline.summarize("Cats eat. Cats sleep.", 1).unwrap();

        assert_eq!(pipeline.encoder().vocabulary().len(), learned);
        assert_eq!(pipeline.encoder().vocabulary().code("cats"), Some(1000));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = pipeline().with_config(SummarizerConfig::new().with_damping(-0.1));
        assert!(result.is_err());
    }

    #[test]
    fn test_summarize_helper() {
        let summary = summarize(TEXT, StopwordFilter::empty(), 1).unwrap();

        assert_eq!(summary.lines().count(), 1);
    }
}
