//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordwalkArgs};
use crate::error::Result;

/// Result structure for corpus parsing.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResult {
    pub corpus_file: String,
    pub graph_file: String,
    pub lines_processed: u64,
    pub nodes: usize,
    pub edges: usize,
    pub duration_ms: u64,
}

/// Result structure for walk generation.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Generated walks, each already joined with single spaces.
    pub walks: Vec<String>,
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WordwalkArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &WordwalkArgs) -> Result<()> {
    let value = serde_json::to_value(result)?;

    // Walks are the program's product: print them bare, one per line,
    // regardless of verbosity.
    if let Some(walks) = value.get("walks").and_then(|w| w.as_array()) {
        for walk in walks {
            if let Some(line) = walk.as_str() {
                println!("{line}");
            }
        }
        return Ok(());
    }

    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    if let Some(object) = value.as_object() {
        for (key, val) in object {
            if args.verbosity() > 0 {
                println!("{key}: {val}");
            }
        }
    }

    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordwalkArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
