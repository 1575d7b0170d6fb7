//! Recommendation output structures

use serde::{Deserialize, Serialize};

/// Recommended product track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Track {
    /// Level term coverage
    Term,
    /// Indexed universal life with cash-value accumulation
    Iul,
}

/// Tags explaining which rules and preferences fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RationaleTag {
    /// High price sensitivity without a cash-value preference
    PriceSensitive,
    /// Applicant wants cash-value growth within the IUL age range
    CashValueGrowth,
    /// Offsettable assets already cover the gross need
    ExistingCoverageSufficient,
    /// No earlier rule matched
    DefaultTerm,
    /// Health score below par, noted for the advisor
    WeakPortfolioHealth,
}

/// Chosen product, face amount, and duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecommendation {
    /// Chosen track
    pub track: Track,

    /// Recommended face amount (net gap rounded up to the nearest band)
    pub face_amount: f64,

    /// Recommended duration in years
    pub duration_years: u32,

    /// Rules and preferences that fired, in evaluation order
    pub rationale: Vec<RationaleTag>,
}
