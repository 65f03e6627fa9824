//! Command implementations for the Wordwalk CLI.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::time::Instant;

use flate2::read::MultiGzDecoder;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::graph::WordGraph;
use crate::ingest::{NgramIngestConfig, ingest_ngrams, ingest_plain};
use crate::walk::Walker;

/// Execute a CLI command.
pub fn execute_command(args: WordwalkArgs) -> Result<()> {
    match &args.command {
        Command::Parse(parse_args) => parse_corpus(parse_args.clone(), &args),
        Command::Generate(generate_args) => generate_walks(generate_args.clone(), &args),
    }
}

/// Build a graph from a corpus file and serialize it.
fn parse_corpus(args: ParseArgs, cli_args: &WordwalkArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Parsing corpus: {}", args.corpus_file.display());
    }

    let start_time = Instant::now();
    let graph = WordGraph::new();
    let mut lines_processed: u64 = 0;

    let corpus = File::open(&args.corpus_file)?;
    match args.corpus_format {
        CorpusFormat::Plain => {
            ingest_plain(BufReader::new(corpus), &graph)?;
        }
        CorpusFormat::Ngram => {
            // Ngram corpora ship gzipped, possibly as concatenated members.
            let reader = BufReader::new(MultiGzDecoder::new(corpus));
            let config = NgramIngestConfig {
                num_workers: args.workers.unwrap_or_else(num_cpus::get),
                ..NgramIngestConfig::default()
            };

            let verbose = cli_args.verbosity() > 0;
            lines_processed = ingest_ngrams(reader, &graph, &config, |lines| {
                if verbose {
                    println!("{lines} lines processed");
                }
            })?;
        }
    }

    let mut writer = BufWriter::new(File::create(&args.output)?);
    graph.serialize(&mut writer)?;
    writer.flush()?;

    output_result(
        "Corpus parsed successfully",
        &ParseResult {
            corpus_file: args.corpus_file.to_string_lossy().to_string(),
            graph_file: args.output.to_string_lossy().to_string(),
            lines_processed,
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Load a serialized graph and generate random walks.
fn generate_walks(args: GenerateArgs, cli_args: &WordwalkArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading graph: {}", args.graph_file.display());
    }

    let graph_file = File::open(&args.graph_file)?;
    let graph = WordGraph::deserialize(BufReader::new(graph_file))?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let walker = Walker::new(&graph);
    let walks = walker.generate_walks(&mut rng, args.num_walks, args.length)?;

    output_result(
        "Walks generated",
        &GenerateResult {
            walks: walks.iter().map(|walk| walk.join(" ")).collect(),
        },
        cli_args,
    )
}
