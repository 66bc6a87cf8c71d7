use std::io::{self, Write};

use anyhow::{Context, Result};
use bubble_sort::sorting::{bubble_sort_with_stats, bubble_sorted};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const EXAMPLE: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

#[derive(Debug, Parser)]
#[command(name = "bubble-sort", version, about = "Sort integers with bubble sort")]
struct Config {
    /// Integers to sort, the built-in example is used when none are given
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Also print pass, comparison and swap counts
    #[arg(long)]
    stats: bool,
}

impl Config {
    fn input(&self) -> Vec<i64> {
        if self.values.is_empty() {
            EXAMPLE.to_vec()
        } else {
            self.values.clone()
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    let arr = config.input();
    let sorted = bubble_sorted(&arr);
    tracing::info!("sorted {} elements", arr.len());

    let mut out = io::stdout().lock();
    writeln!(out, "Original array: {:?}", arr).context("failed to write to stdout")?;
    writeln!(out, "Sorted array: {:?}", sorted).context("failed to write to stdout")?;

    if config.stats {
        let mut work = arr.clone();
        let stats = bubble_sort_with_stats(&mut work);
        tracing::debug!(?stats, "collected sort stats");
        writeln!(out, "Stats: {}", stats).context("failed to write to stdout")?;
    }
    Ok(())
}
