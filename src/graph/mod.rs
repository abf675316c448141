//! Graph construction and representation
//!
//! This module provides the sentence similarity graph used by the
//! summarizer and the similarity metric that weights its edges.

pub mod matrix;
pub mod similarity;
