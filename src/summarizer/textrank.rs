//! TextRank extractive summarizer
//!
//! Ranks the vertices of a [`SimilarityMatrix`] and renders the best
//! sentences back in document order.

use crate::errors::Result;
use crate::graph::matrix::SimilarityMatrix;
use crate::pagerank::inout::InoutPageRank;
use crate::pagerank::RankResult;
use crate::types::{Sentence, SummarizerConfig};

/// Sentence-level TextRank over a filled similarity graph
#[derive(Debug, Clone)]
pub struct TextRankSummarizer<'a> {
    graph: &'a SimilarityMatrix<'a>,
    ranker: InoutPageRank,
    /// `None` until [`train`](Self::train) runs
    result: Option<RankResult>,
}

impl<'a> TextRankSummarizer<'a> {
    /// Create a summarizer with damping 0.85, threshold 0.0001 and at
    /// most 50 iterations
    pub fn new(graph: &'a SimilarityMatrix<'a>) -> Self {
        Self {
            graph,
            ranker: InoutPageRank::default(),
            result: None,
        }
    }

    /// Create a summarizer with custom ranking parameters
    pub fn with_config(graph: &'a SimilarityMatrix<'a>, config: &SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            graph,
            ranker: InoutPageRank::from_config(config),
            result: None,
        })
    }

    /// Compute sentence scores, replacing any earlier ones
    pub fn train(&mut self) -> &RankResult {
        self.result.insert(self.ranker.run(self.graph))
    }

    /// Convergence details of the last training run
    pub fn rank_result(&self) -> Option<&RankResult> {
        self.result.as_ref()
    }

    /// Get the score of a sentence, if it is a vertex and training has run
    pub fn score(&self, sentence: &Sentence) -> Option<f64> {
        let index = self.graph.index_of(sentence)?;
        self.result.as_ref().map(|r| r.score(index))
    }

    /// Iterate over `(sentence, score)` pairs in graph order
    ///
    /// Empty before training.
    pub fn scores(&self) -> impl Iterator<Item = (&'a Sentence, f64)> + '_ {
        let scores: &[f64] = match &self.result {
            Some(result) => &result.scores,
            None => &[],
        };
        self.graph.get_vertices().iter().copied().zip(scores.iter().copied())
    }

    /// The `n` highest-scoring sentences, best first
    ///
    /// Ties keep graph order. Asking for more sentences than the graph
    /// holds returns all of them; nothing is returned before training.
    pub fn get_top_sentences(&self, n: usize) -> Vec<&'a Sentence> {
        let Some(result) = &self.result else {
            return Vec::new();
        };
        let vertices = self.graph.get_vertices();
        result
            .top_n(n)
            .into_iter()
            .map(|(index, _)| vertices[index])
            .collect()
    }

    /// Join the top `n` sentences in document order, one per line
    pub fn make_summary(&self, n: usize) -> String {
        let mut top = self.get_top_sentences(n);
        top.sort_by_key(|sentence| sentence.position());
        top.iter()
            .map(|sentence| sentence.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
