//! Random walk generation over a word graph.
//!
//! A walk is a word sequence produced by iterative weighted sampling:
//! starting from a word chosen uniformly at random among the graph's
//! starting points, each step draws the next word with probability
//! proportional to the observed transition count.
//!
//! Randomness is injected by the caller as any [`rand::Rng`], so walks are
//! reproducible with a seeded generator.
//!
//! Walks assume a read-only graph: do not generate walks concurrently with
//! active ingestion.

use ahash::AHashMap;
use rand::Rng;

use crate::error::{Result, WordwalkError};
use crate::graph::WordGraph;

/// Generates random walks over a [`WordGraph`].
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordwalk::graph::WordGraph;
/// use wordwalk::walk::Walker;
///
/// let graph = WordGraph::new();
/// graph.add_relation("dog", "cat");
///
/// let walker = Walker::new(&graph);
/// let mut rng = StdRng::seed_from_u64(7);
/// let walk = walker.generate_walk(&mut rng, 5).unwrap();
/// assert_eq!(walk, vec!["dog".to_string(), "cat".to_string()]);
/// ```
#[derive(Debug)]
pub struct Walker<'a> {
    graph: &'a WordGraph,
}

impl<'a> Walker<'a> {
    /// Create a walker over the given graph.
    pub fn new(graph: &'a WordGraph) -> Self {
        Walker { graph }
    }

    /// Generate a single walk of up to `length` words.
    ///
    /// The starting word is chosen uniformly at random from
    /// [`starting_points`](WordGraph::starting_points). The walk stops
    /// early at a terminal word (one with no outgoing relations), so walks
    /// shorter than `length` are valid output.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph is empty (no starting points) or if a
    /// sampled node has zero total outgoing weight.
    pub fn generate_walk<R: Rng>(&self, rng: &mut R, length: usize) -> Result<Vec<String>> {
        let starting_points = self.graph.starting_points();
        if starting_points.is_empty() {
            return Err(WordwalkError::walk("graph has no starting points"));
        }

        let start = &starting_points[rng.random_range(0..starting_points.len())];
        self.walk_from(rng, start, length)
    }

    /// Generate `count` independent walks of up to `length` words each.
    pub fn generate_walks<R: Rng>(
        &self,
        rng: &mut R,
        count: usize,
        length: usize,
    ) -> Result<Vec<Vec<String>>> {
        (0..count).map(|_| self.generate_walk(rng, length)).collect()
    }

    /// Generate a walk of up to `length` words starting at `start`.
    ///
    /// A start with no outgoing relations yields a single-element walk
    /// containing only the starting word.
    pub fn walk_from<R: Rng>(
        &self,
        rng: &mut R,
        start: &str,
        length: usize,
    ) -> Result<Vec<String>> {
        if length == 0 {
            return Ok(Vec::new());
        }

        let mut walk = Vec::with_capacity(length);
        let mut current = start.to_string();
        walk.push(current.clone());

        while walk.len() < length {
            let relations = self.graph.relations(&current);
            if relations.is_empty() {
                // Terminal word: stop early.
                break;
            }

            current = weighted_pick(rng, &relations)?;
            walk.push(current.clone());
        }

        Ok(walk)
    }
}

/// Select a word with probability proportional to its weight.
///
/// Builds a cumulative-weight distribution over the map's entries in an
/// arbitrary but fixed-for-this-call order, draws a uniform integer in
/// `[0, total)`, and returns the first entry whose cumulative weight
/// exceeds the draw.
fn weighted_pick<R: Rng>(rng: &mut R, relations: &AHashMap<String, u64>) -> Result<String> {
    let mut words = Vec::with_capacity(relations.len());
    let mut cumulative = Vec::with_capacity(relations.len());
    let mut total: u64 = 0;

    for (word, weight) in relations {
        total += weight;
        words.push(word.as_str());
        cumulative.push(total);
    }

    if total == 0 {
        // Should not be reachable given graph invariants, but a silent
        // zero-bound draw must never happen.
        return Err(WordwalkError::walk("relation set has zero total weight"));
    }

    let draw = rng.random_range(0..total);
    for (word, bound) in words.iter().zip(&cumulative) {
        if *bound > draw {
            return Ok((*word).to_string());
        }
    }

    Err(WordwalkError::walk(
        "weighted selection exhausted the distribution",
    ))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_walk_follows_single_path() {
        let graph = WordGraph::new();
        graph.add_relation("a", "b");
        graph.add_relation("b", "c");

        let walker = Walker::new(&graph);
        let mut rng = StdRng::seed_from_u64(1);
        let walk = walker.walk_from(&mut rng, "a", 10).unwrap();

        assert_eq!(
            walk,
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_terminal_start_yields_single_element() {
        let graph = WordGraph::new();
        graph.add_relation("a", "b");

        let walker = Walker::new(&graph);
        let mut rng = StdRng::seed_from_u64(1);
        let walk = walker.walk_from(&mut rng, "b", 10).unwrap();

        assert_eq!(walk, vec!["b".to_string()]);
    }

    #[test]
    fn test_walk_respects_length_limit() {
        let graph = WordGraph::new();
        graph.add_relation("loop", "loop");

        let walker = Walker::new(&graph);
        let mut rng = StdRng::seed_from_u64(1);
        let walk = walker.generate_walk(&mut rng, 4).unwrap();

        assert_eq!(walk.len(), 4);
        assert!(walk.iter().all(|w| w == "loop"));
    }

    #[test]
    fn test_zero_length_walk_is_empty() {
        let graph = WordGraph::new();
        graph.add_relation("a", "b");

        let walker = Walker::new(&graph);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(walker.walk_from(&mut rng, "a", 0).unwrap().is_empty());
    }

    #[test]
    fn test_empty_graph_is_an_error() {
        let graph = WordGraph::new();
        let walker = Walker::new(&graph);
        let mut rng = StdRng::seed_from_u64(1);

        let result = walker.generate_walk(&mut rng, 5);
        assert!(matches!(result, Err(WordwalkError::Walk(_))));
    }

    #[test]
    fn test_zero_total_weight_is_an_error() {
        let graph = WordGraph::new();
        graph.set_relation("a", "b", 0);

        let walker = Walker::new(&graph);
        let mut rng = StdRng::seed_from_u64(1);

        let result = walker.walk_from(&mut rng, "a", 5);
        assert!(matches!(result, Err(WordwalkError::Walk(_))));
    }

    #[test]
    fn test_batch_walks() {
        let graph = WordGraph::new();
        graph.add_relation("a", "b");

        let walker = Walker::new(&graph);
        let mut rng = StdRng::seed_from_u64(1);
        let walks = walker.generate_walks(&mut rng, 3, 5).unwrap();

        assert_eq!(walks.len(), 3);
        for walk in walks {
            assert_eq!(walk, vec!["a".to_string(), "b".to_string()]);
        }
    }

    #[test]
    fn test_weighted_sampling_distribution() {
        // {a:1, b:3} should converge to 25%/75% over many draws.
        let graph = WordGraph::new();
        graph.increment_relation("s", "a", 1);
        graph.increment_relation("s", "b", 3);

        let walker = Walker::new(&graph);
        let mut rng = StdRng::seed_from_u64(42);

        let draws = 10_000;
        let mut b_count = 0;
        for _ in 0..draws {
            let walk = walker.walk_from(&mut rng, "s", 2).unwrap();
            if walk[1] == "b" {
                b_count += 1;
            }
        }

        // Expected 7500; ~7 standard deviations of slack.
        assert!((7200..=7800).contains(&b_count), "b drawn {b_count} times");
    }
}
