//! # Wordwalk
//!
//! A library for building weighted word-adjacency graphs from text corpora
//! and generating pseudo-random walks over them.
//!
//! ## Features
//!
//! - Concurrent graph construction with per-node locking
//! - Plain-text and Google Ngram v2 corpus ingestion
//! - Parallel ingestion over a worker pool
//! - Line-oriented text serialization of graphs
//! - Weighted random walk generation with injectable randomness

pub mod analysis;
pub mod cli;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod walk;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
