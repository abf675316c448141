//! End-to-end summarization pipeline
//!
//! Wires the preprocessor, encoder, similarity graph and summarizer
//! together behind a single call.

pub mod runner;
