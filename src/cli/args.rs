//! Command line argument parsing for the Wordwalk CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Wordwalk - word-adjacency graphs and random walks over text corpora
#[derive(Parser, Debug, Clone)]
#[command(name = "wordwalk")]
#[command(about = "Build word-adjacency graphs from text corpora and generate random walks")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordwalkArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordwalkArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a graph from a corpus file and serialize it
    Parse(ParseArgs),

    /// Generate random walks from a serialized graph
    Generate(GenerateArgs),
}

/// Arguments for parsing a corpus into a graph
#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    /// Path to the corpus file (gzipped for the ngram format)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus_file: PathBuf,

    /// Output file for the serialized graph
    #[arg(short, long, value_name = "GRAPH_FILE")]
    pub output: PathBuf,

    /// Corpus format
    #[arg(long = "corpus-format", default_value = "plain")]
    pub corpus_format: CorpusFormat,

    /// Number of worker threads for ngram ingestion (defaults to CPU count)
    #[arg(long)]
    pub workers: Option<usize>,
}

/// Arguments for generating walks
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the serialized graph file
    #[arg(value_name = "GRAPH_FILE")]
    pub graph_file: PathBuf,

    /// Number of random walks to generate
    #[arg(short = 'n', long = "walks", default_value_t = 1)]
    pub num_walks: usize,

    /// Length of each random walk
    #[arg(short = 'l', long, default_value_t = 7)]
    pub length: usize,

    /// RNG seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Supported corpus input formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusFormat {
    /// Whitespace-delimited plain text
    Plain,
    /// Gzipped Google Ngram v2 file
    Ngram,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        WordwalkArgs::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let args = WordwalkArgs::try_parse_from(["wordwalk", "generate", "graph.txt"]).unwrap();
        match args.command {
            Command::Generate(generate) => {
                assert_eq!(generate.num_walks, 1);
                assert_eq!(generate.length, 7);
                assert_eq!(generate.seed, None);
            }
            _ => panic!("Expected generate command"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args =
            WordwalkArgs::try_parse_from(["wordwalk", "-q", "generate", "graph.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);

        let args =
            WordwalkArgs::try_parse_from(["wordwalk", "-vv", "generate", "graph.txt"]).unwrap();
        assert_eq!(args.verbosity(), 2);
    }
}
