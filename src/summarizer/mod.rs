//! Summarization components
//!
//! Provides extractive summarization by ranking sentences with TextRank
//! and keeping the best ones in their original order.

pub mod textrank;
