//! Google Ngram v2 corpus ingestion.
//!
//! Ngram files are line-oriented:
//! `<ngram>\t<year>\t<match_count>\t<volume_count>`, where `<ngram>` is a
//! space-separated word sequence. Only the ngram and match_count fields are
//! consumed.
//!
//! A single scanner (the calling thread) reads lines and fans them out over
//! a channel to a pool of worker threads sized to available parallelism.
//! Workers parse each line and write the resulting relations into the shared
//! graph; the pool is drained with an explicit join barrier once the input
//! is exhausted. A malformed line is fatal for the whole run.
//!
//! Decompression is the caller's concern: this ingester accepts any
//! [`BufRead`] of already-decompressed lines.

use std::io::BufRead;
use std::thread;

use crossbeam_channel::{Receiver, unbounded};

use crate::analysis::normalize;
use crate::error::{Result, WordwalkError};
use crate::graph::WordGraph;

/// Configuration for ngram ingestion.
#[derive(Debug, Clone)]
pub struct NgramIngestConfig {
    /// Number of worker threads parsing lines and writing to the graph.
    pub num_workers: usize,

    /// Invoke the progress callback every this many scanned lines.
    /// Zero disables progress reporting.
    pub report_interval: u64,
}

impl Default for NgramIngestConfig {
    fn default() -> Self {
        NgramIngestConfig {
            num_workers: num_cpus::get(),
            report_interval: 100_000,
        }
    }
}

/// Ingest a Google Ngram v2 stream into the graph.
///
/// For each line, the ngram is split into words and each word is normalized.
/// Every adjacent pair whose two sides are both non-empty after
/// normalization adds the line's match_count to the pair's relation — the
/// same count for every pair in the line, since it is the ngram's total
/// occurrence count. An empty word only skips the affected pairs; it does
/// not break the rest of the ngram's chain.
///
/// `on_progress` is called on the scanning thread with the running line
/// count every [`report_interval`](NgramIngestConfig::report_interval)
/// lines. Returns the total number of lines scanned.
///
/// # Errors
///
/// A line with fewer than three tab-separated fields or a non-numeric
/// match_count aborts the whole run. I/O errors from the reader are
/// propagated.
pub fn ingest_ngrams<R, F>(
    reader: R,
    graph: &WordGraph,
    config: &NgramIngestConfig,
    mut on_progress: F,
) -> Result<u64>
where
    R: BufRead,
    F: FnMut(u64),
{
    let num_workers = config.num_workers.max(1);

    thread::scope(|scope| {
        let (sender, receiver) = unbounded::<String>();

        let workers: Vec<_> = (0..num_workers)
            .map(|_| {
                let receiver = receiver.clone();
                scope.spawn(move || ingest_worker(receiver, graph))
            })
            .collect();
        drop(receiver);

        let mut lines_scanned: u64 = 0;
        for line in reader.lines() {
            let line = line?;
            lines_scanned += 1;
            if config.report_interval > 0 && lines_scanned % config.report_interval == 0 {
                on_progress(lines_scanned);
            }

            if sender.send(line).is_err() {
                // Every worker has exited early; the join below surfaces
                // the underlying error.
                break;
            }
        }
        drop(sender);

        for worker in workers {
            worker
                .join()
                .map_err(|_| WordwalkError::ThreadJoinError("ngram worker panicked".to_string()))??;
        }

        Ok(lines_scanned)
    })
}

/// Worker loop: drain lines from the channel until it closes.
fn ingest_worker(receiver: Receiver<String>, graph: &WordGraph) -> Result<()> {
    for line in receiver {
        ingest_line(&line, graph)?;
    }
    Ok(())
}

/// Parse one ngram record and add its pair relations to the graph.
fn ingest_line(line: &str, graph: &WordGraph) -> Result<()> {
    let mut fields = line.split('\t');
    let (Some(ngram), Some(_year), Some(raw_count)) =
        (fields.next(), fields.next(), fields.next())
    else {
        return Err(WordwalkError::ingest(format!(
            "malformed ngram line: {line:?}"
        )));
    };

    let match_count = raw_count.parse::<u64>().map_err(|e| {
        WordwalkError::ingest(format!("invalid match count {raw_count:?}: {e}"))
    })?;

    let words: Vec<String> = ngram.split(' ').map(normalize).collect();
    for pair in words.windows(2) {
        if pair[0].is_empty() || pair[1].is_empty() {
            continue;
        }
        graph.increment_relation(&pair[0], &pair[1], match_count);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingest_str(input: &str, graph: &WordGraph) -> Result<u64> {
        let config = NgramIngestConfig {
            num_workers: 2,
            report_interval: 0,
        };
        ingest_ngrams(input.as_bytes(), graph, &config, |_| {})
    }

    #[test]
    fn test_match_count_applied_to_every_pair() {
        let graph = WordGraph::new();
        ingest_str("dog cat mouse\t2001\t5\t1", &graph).unwrap();

        assert_eq!(graph.relations("dog").get("cat"), Some(&5));
        assert_eq!(graph.relations("cat").get("mouse"), Some(&5));
    }

    #[test]
    fn test_lines_accumulate() {
        let graph = WordGraph::new();
        ingest_str("dog cat\t2001\t5\t1\ndog cat\t2002\t2\t1", &graph).unwrap();

        assert_eq!(graph.relations("dog").get("cat"), Some(&7));
    }

    #[test]
    fn test_empty_word_skips_pair_only() {
        // "_END_" drops the middle word: the dog-cat and cat-mouse pairs
        // around it are skipped, but mouse-rat still forms.
        let graph = WordGraph::new();
        ingest_str("dog cat_END_ mouse rat\t2001\t3\t1", &graph).unwrap();

        assert!(graph.relations("dog").is_empty());
        assert_eq!(graph.relations("mouse").get("rat"), Some(&3));
    }

    #[test]
    fn test_pos_tags_are_normalized() {
        let graph = WordGraph::new();
        ingest_str("Running_VERB fast_ADV\t1999\t4\t2", &graph).unwrap();

        assert_eq!(graph.relations("running").get("fast"), Some(&4));
    }

    #[test]
    fn test_bad_match_count_is_fatal() {
        let graph = WordGraph::new();
        let result = ingest_str("dog cat\t2001\tnotanumber\t1", &graph);
        assert!(matches!(result, Err(WordwalkError::Ingest(_))));
    }

    #[test]
    fn test_missing_fields_is_fatal() {
        let graph = WordGraph::new();
        assert!(ingest_str("dog cat\t2001", &graph).is_err());
    }

    #[test]
    fn test_progress_callback() {
        let graph = WordGraph::new();
        let input = "a b\t1\t1\t1\n".repeat(10);
        let config = NgramIngestConfig {
            num_workers: 1,
            report_interval: 4,
        };

        let mut reports = Vec::new();
        let total = ingest_ngrams(input.as_bytes(), &graph, &config, |n| reports.push(n)).unwrap();

        assert_eq!(total, 10);
        assert_eq!(reports, vec![4, 8]);
        assert_eq!(graph.relations("a").get("b"), Some(&10));
    }
}
