//! Sentence similarity graph
//!
//! An undirected weighted graph whose vertices are borrowed [`Sentence`]s and
//! whose edge weights are Jaccard similarities of their encoded tokens.
//!
//! Weights live in a packed lower triangle: row `i` holds the `i + 1`
//! weights `w[i][0..=i]`, rows are stored back to back, and `w[j][i]` is
//! read from `w[i][j]`. Adding a vertex appends one row, so existing
//! entries never move and the matrix is symmetric by construction.

use super::similarity::jaccard_similarity;
use crate::errors::{Result, ValidationError};
use crate::types::Sentence;
use std::ptr;

/// Symmetric similarity matrix over sentence vertices
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix<'a> {
    /// Vertices in insertion order; the index of a vertex never changes
    vertices: Vec<&'a Sentence>,
    /// Packed lower-triangular weights, diagonal included
    weights: Vec<f64>,
}

/// Offset of `w[i][j]` in the packed triangle
#[inline]
fn packed_index(i: usize, j: usize) -> usize {
    let (row, col) = if i >= j { (i, j) } else { (j, i) };
    row * (row + 1) / 2 + col
}

impl<'a> SimilarityMatrix<'a> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with room for `vertex_capacity` vertices
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            weights: Vec::with_capacity(packed_index(vertex_capacity, 0)),
        }
    }

    /// Get the vertices in insertion order
    pub fn get_vertices(&self) -> &[&'a Sentence] {
        &self.vertices
    }

    /// Get the number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check whether this exact sentence is a vertex
    pub fn contains(&self, vertex: &Sentence) -> bool {
        self.index_of(vertex).is_some()
    }

    /// Index of a vertex, compared by reference
    pub fn index_of(&self, vertex: &Sentence) -> Option<usize> {
        self.vertices.iter().position(|&v| ptr::eq(v, vertex))
    }

    /// Insert a vertex with no edges, returning its index
    ///
    /// Existing vertices keep their index. A new vertex gets a zero row and
    /// a self-similarity of 1.
    pub fn add_vertex(&mut self, vertex: &'a Sentence) -> usize {
        if let Some(index) = self.index_of(vertex) {
            return index;
        }

        let index = self.vertices.len();
        self.vertices.push(vertex);
        self.weights.extend(std::iter::repeat(0.0).take(index));
        self.weights.push(1.0);
        index
    }

    /// Add or overwrite the edge between two distinct sentences
    ///
    /// Unknown sentences are inserted first, `vertex1` before `vertex2`.
    pub fn add_edge(&mut self, vertex1: &'a Sentence, vertex2: &'a Sentence) -> Result<()> {
        if ptr::eq(vertex1, vertex2) {
            return Err(ValidationError::SelfLoop {
                position: vertex1.position(),
            });
        }

        let index1 = self.add_vertex(vertex1);
        let index2 = self.add_vertex(vertex2);
        self.weights[packed_index(index1, index2)] =
            jaccard_similarity(vertex1.encoded(), vertex2.encoded());
        Ok(())
    }

    /// Get the stored similarity between two vertices
    pub fn get_similarity_score(&self, sentence: &Sentence, other: &Sentence) -> Result<f64> {
        let i = self.require_index(sentence)?;
        let j = self.require_index(other)?;
        Ok(self.similarity_at(i, j))
    }

    /// Count the other vertices with positive similarity to `vertex`
    pub fn calculate_inout_score(&self, vertex: &Sentence) -> Result<usize> {
        let index = self.require_index(vertex)?;
        Ok(self.degree(index))
    }

    /// Similarity between the vertices at two indices
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn similarity_at(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.len() && j < self.len(), "vertex index out of range");
        self.weights[packed_index(i, j)]
    }

    /// Indices of vertices with positive similarity to vertex `index`,
    /// the vertex itself included
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&other| self.similarity_at(index, other) > 0.0)
    }

    /// Number of neighbors of vertex `index`, itself excluded
    pub fn degree(&self, index: usize) -> usize {
        self.neighbors(index).count() - 1
    }

    /// Get the number of undirected edges with positive weight
    pub fn edge_count(&self) -> usize {
        (0..self.len()).map(|i| self.degree(i)).sum::<usize>() / 2
    }

    /// Build the graph from a document's sentences
    ///
    /// Each sentence is compared with the sentences before it, stopping at
    /// the first one whose encoding equals its own. A sentence whose
    /// encoding repeats an earlier one is therefore never added, and the
    /// very first sentence only enters the graph through later sentences.
    pub fn fill_from_sentences(&mut self, sentences: &'a [Sentence]) -> Result<()> {
        if sentences.is_empty() {
            return Err(ValidationError::EmptySentences);
        }

        for sentence in sentences {
            for other in sentences {
                if sentence.encoded() == other.encoded() {
                    break;
                }
                self.add_edge(sentence, other)?;
            }
        }
        Ok(())
    }

    fn require_index(&self, vertex: &Sentence) -> Result<usize> {
        self.index_of(vertex)
            .ok_or(ValidationError::UnknownVertex {
                position: vertex.position(),
            })
    }
}
