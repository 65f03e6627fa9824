//! Concurrent word-adjacency graph.
//!
//! This module provides [`WordGraph`], a mapping from source word to a node
//! holding weighted outgoing edges. The graph supports concurrent
//! increment-by-weight from many writer threads during ingestion, and a
//! line-oriented text serialization format.
//!
//! # Locking discipline
//!
//! A coarse lock protects the top-level word-to-node map only for the
//! create-if-absent step. Each node carries its own lock protecting its
//! destination-to-count map, so increments to different source words do not
//! contend, and increments to the same source word serialize only amongst
//! themselves.
//!
//! # Usage contract
//!
//! Serialization and walking are read operations assumed to run only after
//! ingestion completes. The graph does not enforce this phase separation;
//! callers must not walk a graph concurrently with active writers.

use std::io::{BufRead, BufReader, Read, Write};
use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::Mutex;

use crate::error::{Result, WordwalkError};

/// A single word's outgoing edges, keyed by destination word.
///
/// Counts are monotonically non-decreasing over the graph's construction
/// lifetime; they are only incremented, or set once during deserialization.
#[derive(Debug, Default)]
struct Node {
    edges: Mutex<AHashMap<String, u64>>,
}

/// A weighted word-adjacency graph safe for concurrent mutation.
///
/// Words are expected to be canonical (the output of
/// [`normalize`](crate::analysis::normalize)); the empty string is never a
/// valid source or destination key.
///
/// # Examples
///
/// ```
/// use wordwalk::graph::WordGraph;
///
/// let graph = WordGraph::new();
/// graph.increment_relation("dog", "cat", 5);
/// graph.add_relation("dog", "cat");
///
/// assert_eq!(graph.relations("dog").get("cat"), Some(&6));
/// ```
#[derive(Debug, Default)]
pub struct WordGraph {
    nodes: Mutex<AHashMap<String, Arc<Node>>>,
}

impl WordGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        WordGraph::default()
    }

    /// Add 1 to the count for the relation between two words.
    pub fn add_relation(&self, from: &str, to: &str) {
        self.increment_relation(from, to, 1);
    }

    /// Add `weight` to the count for the relation between two words.
    ///
    /// Creates the node for `from` if absent. Safe to call concurrently
    /// from multiple writers with arbitrary `(from, to)` pairs: racing
    /// first-writers for the same `from` resolve under the top-level lock,
    /// so exactly one node ends up owning the key and no increment is lost.
    pub fn increment_relation(&self, from: &str, to: &str, weight: u64) {
        let node = self.node_for(from);
        let mut edges = node.edges.lock();
        *edges.entry(to.to_string()).or_insert(0) += weight;
    }

    /// Set the count for the relation between two words.
    ///
    /// Used by deserialization, where repeated triples for the same
    /// `(from, to)` pair overwrite rather than accumulate.
    pub fn set_relation(&self, from: &str, to: &str, weight: u64) {
        let node = self.node_for(from);
        let mut edges = node.edges.lock();
        edges.insert(to.to_string(), weight);
    }

    /// Look up the node for `from`, creating it if absent.
    ///
    /// The fast path takes the top-level lock only to clone the Arc. On the
    /// create path, `entry` re-checks existence under the same lock, so a
    /// racing create installs a single node.
    fn node_for(&self, from: &str) -> Arc<Node> {
        {
            let nodes = self.nodes.lock();
            if let Some(node) = nodes.get(from) {
                return Arc::clone(node);
            }
        }

        let mut nodes = self.nodes.lock();
        Arc::clone(nodes.entry(from.to_string()).or_default())
    }

    /// Return the outgoing distribution for a word.
    ///
    /// Returns an empty map if the word is unknown. The result is a
    /// consistent snapshot taken under the node's lock; it does not track
    /// later mutation.
    pub fn relations(&self, from: &str) -> AHashMap<String, u64> {
        let node = {
            let nodes = self.nodes.lock();
            nodes.get(from).cloned()
        };

        match node {
            Some(node) => node.edges.lock().clone(),
            None => AHashMap::new(),
        }
    }

    /// Return every word that has at least one outgoing edge.
    ///
    /// Order is unspecified. Non-empty whenever the graph is non-empty.
    pub fn starting_points(&self) -> Vec<String> {
        let nodes = self.nodes.lock();
        nodes
            .iter()
            .filter(|(_, node)| !node.edges.lock().is_empty())
            .map(|(word, _)| word.clone())
            .collect()
    }

    /// Number of source words in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.lock().len()
    }

    /// Total number of distinct `(from, to)` edges in the graph.
    pub fn edge_count(&self) -> usize {
        let nodes = self.nodes.lock();
        nodes.values().map(|node| node.edges.lock().len()).sum()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.lock().is_empty()
    }

    /// Write every `(from, to, weight)` triple to the given writer.
    ///
    /// One triple per line as `<from> <to> <weight>`, fields separated by a
    /// single space, weight in base 10. Line order is unspecified. The
    /// top-level lock is held for the duration, blocking writers, so the
    /// output is a consistent point-in-time view with no partial triple.
    pub fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        let nodes = self.nodes.lock();
        for (from, node) in nodes.iter() {
            let edges = node.edges.lock();
            for (to, weight) in edges.iter() {
                writeln!(writer, "{from} {to} {weight}")?;
            }
        }
        Ok(())
    }

    /// Reconstruct a graph from the line format written by [`serialize`].
    ///
    /// Each line must contain exactly three space-separated fields: source
    /// word, destination word, and an unsigned decimal weight. A malformed
    /// line aborts the whole load. Repeated triples for the same
    /// `(from, to)` pair within the input overwrite rather than accumulate.
    ///
    /// [`serialize`]: WordGraph::serialize
    pub fn deserialize<R: Read>(reader: R) -> Result<WordGraph> {
        let graph = WordGraph::new();
        let reader = BufReader::new(reader);

        for line in reader.lines() {
            let line = line?;
            let mut fields = line.split(' ');

            let (Some(from), Some(to), Some(raw_weight), None) =
                (fields.next(), fields.next(), fields.next(), fields.next())
            else {
                return Err(WordwalkError::parse(format!(
                    "expected 3 fields in serialized record, got: {line:?}"
                )));
            };

            let weight = raw_weight.parse::<u64>().map_err(|e| {
                WordwalkError::parse(format!("invalid weight {raw_weight:?}: {e}"))
            })?;

            graph.set_relation(from, to, weight);
        }

        Ok(graph)
    }
}
