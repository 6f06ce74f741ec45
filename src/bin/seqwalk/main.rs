//! CLI tool to walk a JSON array with a cursor.
//!
//! Usage:
//!   seqwalk --input items.json [--limit N] [--validate] [--stats]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde_json::Value;

use seqcursor::{collect_values, for_each, CursorError, Flow, Sequence};

#[derive(Parser, Debug)]
#[command(
    name = "seqwalk",
    about = "Walk the elements of a JSON array with a forward-only cursor",
    version
)]
struct Args {
    /// Input JSON file path (must contain a top-level array)
    #[arg(short, long, env = "SEQWALK_INPUT")]
    input: PathBuf,

    /// Stop after this many elements
    #[arg(short, long, env = "SEQWALK_LIMIT")]
    limit: Option<usize>,

    /// Check that a full traversal reproduces the array in order
    #[arg(long, default_value = "false")]
    validate: bool,

    /// Print statistics about the traversal
    #[arg(long, default_value = "false")]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // 1. Validate input exists
    let input_path = &args.input;
    if !input_path.exists() {
        anyhow::bail!("Input file does not exist: {}", input_path.display());
    }

    // 2. Read and parse JSON array
    let json_content =
        std::fs::read_to_string(input_path).context("Failed to read input file")?;
    let sequence: Sequence<Value> =
        serde_json::from_str(&json_content).context("Failed to parse JSON array")?;
    info!(
        "loaded {} elements from {}",
        sequence.count(),
        input_path.display()
    );

    // 3. Walk
    let limit = args.limit;
    if limit == Some(0) {
        anyhow::bail!("--limit must be at least 1");
    }
    let summary = for_each(&sequence, |position, value| {
        println!("{:>6}: {}", position, value);
        if limit.is_some_and(|limit| position + 1 >= limit) {
            return Ok::<_, CursorError>(Flow::Break);
        }
        Ok(Flow::Continue)
    })
    .context("Traversal failed")?;

    // 4. Optional validation
    if args.validate {
        let walked = collect_values(&sequence).context("Failed to collect for validation")?;
        if walked.as_slice() != sequence.as_slice() {
            anyhow::bail!(
                "Validation failed: traversal produced {} elements, array has {}",
                walked.len(),
                sequence.count()
            );
        }
        println!("✓ Validation passed!");
    }

    // 5. Optional stats
    if args.stats {
        println!();
        println!("Traversal statistics:");
        println!("  Elements:  {}", sequence.count());
        println!("  Visited:   {}", summary.visited);
        println!("  Completed: {}", summary.completed);
    }

    Ok(())
}
