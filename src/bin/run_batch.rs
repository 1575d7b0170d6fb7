//! Run assessments for an entire household file in parallel
//!
//! Reads a batch CSV, evaluates every household, and prints aggregate
//! figures by recommended track.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use rayon::prelude::*;

use coverage_engine::assessment::load_households;
use coverage_engine::recommend::Track;
use coverage_engine::AssessmentEngine;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Batch household assessment")]
struct Args {
    /// Path to the household batch CSV
    #[arg(default_value = "data/households.csv")]
    households: PathBuf,

    /// Directory of CSV assumption tables (compiled-in defaults when omitted)
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let start = Instant::now();
    println!("Loading households from {}...", args.households.display());

    let households = load_households(&args.households)
        .map_err(|e| anyhow::anyhow!("failed to load households: {}", e))?;
    println!("Loaded {} households in {:?}", households.len(), start.elapsed());

    let engine = match &args.assumptions {
        Some(path) => AssessmentEngine::from_csv_path(path)
            .map_err(|e| anyhow::anyhow!("failed to load assumptions: {}", e))?,
        None => AssessmentEngine::new(),
    };

    println!("Running assessments...");
    let eval_start = Instant::now();

    // Households are independent, so the batch parallelizes with no
    // coordination
    let results: Vec<_> = households
        .par_iter()
        .map(|(input, snapshot)| engine.evaluate(input, Some(snapshot)))
        .collect();

    let elapsed = eval_start.elapsed();

    let mut term_count = 0_u32;
    let mut iul_count = 0_u32;
    let mut no_coverage_count = 0_u32;
    let mut failed = 0_u32;
    let mut total_gap = 0.0_f64;
    let mut score_sum = 0.0_f64;
    let mut scored = 0_u32;

    for result in &results {
        match result {
            Ok(outcome) => {
                total_gap += outcome.needs.net_gap;
                if let Some(health) = &outcome.health {
                    score_sum += health.score as f64;
                    scored += 1;
                }
                if outcome.recommendation.face_amount <= 0.0 {
                    no_coverage_count += 1;
                } else {
                    match outcome.recommendation.track {
                        Track::Term => term_count += 1,
                        Track::Iul => iul_count += 1,
                    }
                }
            }
            Err(e) => {
                failed += 1;
                log::warn!("household rejected: {}", e);
            }
        }
    }

    println!("Assessed {} households in {:?}", results.len(), elapsed);
    println!();
    println!("  Term recommendations: {}", term_count);
    println!("  IUL recommendations:  {}", iul_count);
    println!("  No new coverage:      {}", no_coverage_count);
    println!("  Rejected inputs:      {}", failed);
    println!("  Total net gap:        ${:.2}", total_gap);
    if scored > 0 {
        println!("  Mean health score:    {:.1}", score_sum / scored as f64);
    }

    Ok(())
}
