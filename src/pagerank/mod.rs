//! Sentence ranking
//!
//! This module provides the TextRank iteration over a sentence similarity
//! graph and the result it reports.

pub mod inout;

/// Result of a ranking run
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Scores for each vertex (indexed by insertion order in the graph)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Summed absolute score change of the last iteration
    pub delta: f64,
    /// Whether the run stopped on the threshold rather than the iteration cap
    pub converged: bool,
}

impl RankResult {
    /// Create a new rank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get the top N vertex indices by score
    ///
    /// Ties keep graph order.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific vertex
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }
}
