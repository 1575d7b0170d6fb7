//! Health score output structures

use serde::{Deserialize, Serialize};

/// Points awarded per scoring category
///
/// A named struct rather than a map so field order, and therefore
/// serialized output, is deterministic. `concentration_penalty` holds
/// the points subtracted, not a negative contribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoreBreakdown {
    pub diversification: f64,
    pub size_adequacy: f64,
    pub liquidity: f64,
    pub insurance_coverage: f64,
    pub concentration_penalty: f64,
}

/// Flagged portfolio concerns, raised when a category scores below half
/// its maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Concern {
    EmptyPortfolio,
    LowDiversification,
    BelowSizeBenchmark,
    ThinLiquidity,
    CoverageShortfall,
    RealEstateConcentration,
}

impl Concern {
    /// Human-readable description for reports
    pub fn describe(&self) -> &'static str {
        match self {
            Concern::EmptyPortfolio => "no investable assets to score",
            Concern::LowDiversification => "allocation concentrated in too few asset classes",
            Concern::BelowSizeBenchmark => "portfolio below the age-indexed savings benchmark",
            Concern::ThinLiquidity => "liquid savings cover too few months of expenses",
            Concern::CoverageShortfall => "existing insurance covers little of the coverage gap",
            Concern::RealEstateConcentration => "real-estate share of the portfolio is excessive",
        }
    }
}

/// Portfolio health score in [0, 100] with its category breakdown
///
/// Produced fresh per evaluation; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    /// Overall score, clamped to [0, 100]
    pub score: u8,

    /// Points per category
    pub breakdown: ScoreBreakdown,

    /// Concerns flagged during scoring
    pub concerns: Vec<Concern>,
}
