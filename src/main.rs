//! Coverage Engine CLI
//!
//! Runs a single assessment through the full pipeline and prints the
//! needs analysis, health score, recommendation, and (for IUL picks)
//! the year-by-year cash-value projection.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use coverage_engine::assessment::{
    load_assessment, MaritalStatus, PreferenceFlags, PriceSensitivity,
};
use coverage_engine::recommend::Track;
use coverage_engine::{AssessmentEngine, AssessmentInput, PortfolioSnapshot};

#[derive(Debug, Parser)]
#[command(name = "coverage_engine", about = "Coverage-gap and cash-value assessment")]
struct Args {
    /// Path to an intake JSON file (runs a built-in sample when omitted)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory of CSV assumption tables (compiled-in defaults when omitted)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Write projection rows to this CSV file when an IUL track is chosen
    #[arg(long, default_value = "projection_output.csv")]
    output: PathBuf,
}

fn sample_household() -> (AssessmentInput, PortfolioSnapshot) {
    let input = AssessmentInput {
        age: 38,
        marital_status: MaritalStatus::Married,
        dependents: 2,
        monthly_income: 7_500.0,
        monthly_expenses: 5_200.0,
        mortgage_balance: 310_000.0,
        other_debt: 18_000.0,
        education_cost_per_child: 9_000.0,
        education_years_remaining: 12,
        legacy_amount: 75_000.0,
        funeral_estimate: 15_000.0,
        liquid_savings: 42_000.0,
        investment_value: 135_000.0,
        existing_face_amount: 150_000.0,
        preferences: PreferenceFlags {
            wants_cash_value_growth: true,
            price_sensitivity: PriceSensitivity::Medium,
        },
        inflation_rate: 0.03,
    };

    let snapshot = PortfolioSnapshot {
        stocks: 85_000.0,
        bonds: 25_000.0,
        cash: 15_000.0,
        real_estate: 10_000.0,
        alternatives: 0.0,
    };

    (input, snapshot)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    println!("Coverage Engine v0.1.0");
    println!("======================\n");

    let engine = match &args.assumptions {
        Some(path) => AssessmentEngine::from_csv_path(path)
            .map_err(|e| anyhow::anyhow!("failed to load assumptions: {}", e))?,
        None => AssessmentEngine::new(),
    };

    let (input, snapshot) = match &args.input {
        Some(path) => {
            let input = load_assessment(path)
                .map_err(|e| anyhow::anyhow!("failed to load {}: {}", path.display(), e))?;
            (input, None)
        }
        None => {
            let (input, snapshot) = sample_household();
            (input, Some(snapshot))
        }
    };

    println!("Applicant: age {}, {} dependents", input.age, input.dependents);
    println!("  Monthly income:   ${:.2}", input.monthly_income);
    println!("  Monthly expenses: ${:.2}", input.monthly_expenses);
    println!("  In-force face:    ${:.2}", input.existing_face_amount);
    println!();

    let outcome = engine
        .evaluate(&input, snapshot.as_ref())
        .context("evaluation failed")?;

    println!("Coverage needs:");
    println!("  Income replacement: ${:>14.2}", outcome.needs.income_replacement);
    println!("  Debt coverage:      ${:>14.2}", outcome.needs.debt_coverage);
    println!("  Education funding:  ${:>14.2}", outcome.needs.education_funding);
    println!("  Final expenses:     ${:>14.2}", outcome.needs.final_expenses);
    println!("  Gross need:         ${:>14.2}", outcome.needs.gross_need);
    println!("  Offsettable assets: ${:>14.2}", outcome.needs.offsettable_assets);
    println!("  Net gap:            ${:>14.2}", outcome.needs.net_gap);
    println!();

    if let Some(health) = &outcome.health {
        println!("Portfolio health: {}/100", health.score);
        println!("  Diversification:    {:>5.1}", health.breakdown.diversification);
        println!("  Size adequacy:      {:>5.1}", health.breakdown.size_adequacy);
        println!("  Liquidity:          {:>5.1}", health.breakdown.liquidity);
        println!("  Insurance coverage: {:>5.1}", health.breakdown.insurance_coverage);
        println!("  RE penalty:         -{:>4.1}", health.breakdown.concentration_penalty);
        for concern in &health.concerns {
            println!("  ! {}", concern.describe());
        }
        println!();
    }

    println!(
        "Recommendation: {:?}, face ${:.2}, {} years ({:?})",
        outcome.recommendation.track,
        outcome.recommendation.face_amount,
        outcome.recommendation.duration_years,
        outcome.recommendation.rationale,
    );
    println!();

    if let Some(projection) = &outcome.projection {
        println!("Cash-value projection ({} years):", projection.horizon_years());
        println!(
            "{:>4} {:>4} {:>12} {:>12} {:>12} {:>14} {:>14}",
            "Year", "Age", "Premium", "COI", "Growth", "CashValue", "SurrValue"
        );
        println!("{}", "-".repeat(80));

        for year in projection.years.iter().take(10) {
            println!(
                "{:>4} {:>4} {:>12.2} {:>12.2} {:>12.2} {:>14.2} {:>14.2}",
                year.year,
                year.attained_age,
                year.premium_paid,
                year.coi_charge,
                year.credited_growth,
                year.cumulative_cash_value,
                year.net_surrender_value,
            );
        }
        if projection.years.len() > 10 {
            println!("... ({} more years)", projection.years.len() - 10);
        }

        let summary = projection.summary();
        println!(
            "\nFinal cash value ${:.2}, surrender value ${:.2}{}",
            summary.final_cash_value,
            summary.final_surrender_value,
            if summary.mec_risk { " [MEC RISK]" } else { "" },
        );

        write_projection_csv(&args.output, projection)
            .with_context(|| format!("writing {}", args.output.display()))?;
        println!("Wrote projection rows to {}", args.output.display());
    }

    if outcome.recommendation.track == Track::Term {
        println!("Term track chosen; no cash-value projection applies.");
    }

    Ok(())
}

fn write_projection_csv(
    path: &std::path::Path,
    projection: &coverage_engine::CashValueProjection,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(
        file,
        "Year,Age,Premium,Allocated,COI,Growth,CashValue,SurrCharge,SurrValue,CumPremiums,MecRisk"
    )?;
    for year in &projection.years {
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{}",
            year.year,
            year.attained_age,
            year.premium_paid,
            year.allocated_premium,
            year.coi_charge,
            year.credited_growth,
            year.cumulative_cash_value,
            year.surrender_charge,
            year.net_surrender_value,
            year.cumulative_premiums,
            year.mec_risk,
        )?;
    }

    Ok(())
}
