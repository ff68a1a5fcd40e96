//! FleetRange batch CLI
//!
//! Reads a batch from stdin (or `--input`), prints `min max` per case
//! or `-1` where no craft mix reaches the total.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fleet_solver::solve_batch;

#[derive(Parser, Debug)]
#[command(name = "fleet-solver")]
#[command(about = "Min/max fleet sizes for propulsion-unit totals")]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Emit one JSON object per case instead of plain text
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

    let mut out = String::with_capacity(results.len() * 16);
    for result in &results {
        if args.json {
            out.push_str(&result.to_json().to_string());
        } else {
            out.push_str(&result.line());
        }
        out.push('\n');
    }
    print!("{out}");

    Ok(())
}
