//! In/out-degree TextRank iteration
//!
//! Every vertex starts at 1.0. Each round recomputes all scores from the
//! previous round's snapshot:
//!
//! ```text
//! score(v) = (1 - d) + d * Σ_{u ∈ N(v)} prev(u) / (1 + inout(u))
//! ```
//!
//! where `N(v)` holds every vertex with positive similarity to `v`, `v`
//! itself included, and `inout(u)` counts `u`'s neighbors other than
//! itself. Iteration stops once the summed absolute change of a round is at
//! most the threshold, or after the iteration cap.

use super::RankResult;
use crate::graph::matrix::SimilarityMatrix;
use crate::types::SummarizerConfig;

/// TextRank scoring over a sentence similarity graph
#[derive(Debug, Clone)]
pub struct InoutPageRank {
    /// Damping factor (0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
}

impl Default for InoutPageRank {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl InoutPageRank {
    /// Create a ranker with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ranker from a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run the iteration on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &SimilarityMatrix<'_>) -> RankResult {
        let n = graph.len();
        if n == 0 {
            return RankResult::new(vec![], 0, 0.0, true);
        }

        // The graph is fixed for the whole run
        let neighbors: Vec<Vec<usize>> = (0..n).map(|v| graph.neighbors(v).collect()).collect();
        let spread: Vec<f64> = neighbors.iter().map(|nb| nb.len() as f64).collect();

        let mut scores = vec![1.0; n];
        let mut new_scores = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            for (v, new_score) in new_scores.iter_mut().enumerate() {
                let inherited: f64 = neighbors[v].iter().map(|&u| scores[u] / spread[u]).sum();
                *new_score = (1.0 - self.damping) + self.damping * inherited;
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        let result = RankResult::new(scores, iterations, delta, delta <= self.threshold);
        log_outcome(&result);
        result
    }
}

#[cfg(feature = "tracing")]
fn log_outcome(result: &RankResult) {
    if result.converged {
        tracing::debug!(
            iterations = result.iterations,
            delta = result.delta,
            "sentence ranking converged"
        );
    } else {
        tracing::warn!(
            iterations = result.iterations,
            delta = result.delta,
            "sentence ranking stopped at the iteration cap"
        );
    }
}

#[cfg(not(feature = "tracing"))]
fn log_outcome(_result: &RankResult) {}
