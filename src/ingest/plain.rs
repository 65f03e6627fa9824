//! Plain-text corpus ingestion.

use std::io::Read;

use crate::analysis::normalize;
use crate::error::Result;
use crate::graph::WordGraph;

/// Ingest a whitespace-delimited plain-text corpus into the graph.
///
/// The input is split on whitespace into raw tokens and each token is
/// normalized. Every adjacent pair of non-empty normalized tokens
/// `(previous, current)` adds 1 to the `previous -> current` relation.
///
/// A token that normalizes to empty breaks the adjacency chain: the word
/// after it starts a fresh chain and does not connect across the dropped
/// token.
///
/// # Examples
///
/// ```
/// use wordwalk::graph::WordGraph;
/// use wordwalk::ingest::ingest_plain;
///
/// let graph = WordGraph::new();
/// ingest_plain("a b a c".as_bytes(), &graph).unwrap();
///
/// assert_eq!(graph.relations("a").get("b"), Some(&1));
/// assert_eq!(graph.relations("b").get("a"), Some(&1));
/// assert_eq!(graph.relations("a").get("c"), Some(&1));
/// ```
pub fn ingest_plain<R: Read>(mut reader: R, graph: &WordGraph) -> Result<()> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    ingest_text(&text, graph);
    Ok(())
}

/// Ingest already-buffered plain text into the graph.
pub fn ingest_text(text: &str, graph: &WordGraph) {
    let mut previous: Option<String> = None;

    for raw in text.split_whitespace() {
        let word = normalize(raw);
        if word.is_empty() {
            // Dropped token: break the chain so the next word starts fresh.
            previous = None;
            continue;
        }

        if let Some(prev) = previous.as_deref() {
            graph.add_relation(prev, &word);
        }
        previous = Some(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_pairs() {
        let graph = WordGraph::new();
        ingest_plain("a b a c".as_bytes(), &graph).unwrap();

        assert_eq!(graph.relations("a").get("b"), Some(&1));
        assert_eq!(graph.relations("b").get("a"), Some(&1));
        assert_eq!(graph.relations("a").get("c"), Some(&1));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_repeated_pairs_accumulate() {
        let graph = WordGraph::new();
        ingest_plain("the dog the dog".as_bytes(), &graph).unwrap();

        assert_eq!(graph.relations("the").get("dog"), Some(&2));
        assert_eq!(graph.relations("dog").get("the"), Some(&1));
    }

    #[test]
    fn test_dropped_token_breaks_chain() {
        // "!!!" normalizes to empty, so "a" and "b" must not connect.
        let graph = WordGraph::new();
        ingest_plain("a !!! b".as_bytes(), &graph).unwrap();

        assert!(graph.relations("a").is_empty());
        assert!(graph.relations("b").is_empty());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_tokens_are_normalized() {
        let graph = WordGraph::new();
        ingest_plain("The QUICK fox".as_bytes(), &graph).unwrap();

        assert_eq!(graph.relations("the").get("quick"), Some(&1));
        assert_eq!(graph.relations("quick").get("fox"), Some(&1));
    }

    #[test]
    fn test_empty_input() {
        let graph = WordGraph::new();
        ingest_plain("".as_bytes(), &graph).unwrap();
        assert!(graph.is_empty());
    }
}
