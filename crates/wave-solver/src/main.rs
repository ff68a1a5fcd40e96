//! WaveEnergy batch CLI
//!
//! Reads a batch from stdin (or `--input`), prints one total per case.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wave_solver::solve_batch;

#[derive(Parser, Debug)]
#[command(name = "wave-solver")]
#[command(about = "Total energy of alternating wave batches")]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Emit one JSON object per case instead of plain integers
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let results = solve_batch(&input)?;
    tracing::info!(cases = results.len(), "batch solved");

    let mut out = String::with_capacity(results.len() * 8);
    for result in &results {
        if args.json {
            out.push_str(&serde_json::to_string(result)?);
        } else {
            out.push_str(&result.energy.to_string());
        }
        out.push('\n');
    }
    print!("{out}");

    Ok(())
}
