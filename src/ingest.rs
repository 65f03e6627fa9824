//! Corpus ingestion for Wordwalk.
//!
//! This module provides the ingesters that feed `(from, to, weight)` triples
//! into a [`WordGraph`](crate::graph::WordGraph) from different corpus
//! formats:
//!
//! - [`plain`] - whitespace-delimited plain text
//! - [`ngram`] - Google Ngram v2 bigram-count files, fanned out to a worker
//!   pool
//!
//! Both ingesters apply [`normalize`](crate::analysis::normalize) to every
//! raw token before it reaches the graph.

pub mod ngram;
pub mod plain;

// Re-export commonly used types
pub use ngram::*;
pub use plain::*;
