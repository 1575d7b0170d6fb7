//! Projection output structures

use serde::{Deserialize, Serialize};

/// A single year of projection output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionYear {
    /// Policy year (1-indexed, strictly increasing)
    pub year: u32,

    /// Attained age during this year
    pub attained_age: u8,

    /// Premium paid this year
    pub premium_paid: f64,

    /// Premium allocated to cash value after policy fees
    pub allocated_premium: f64,

    /// Cost-of-insurance charge deducted before crediting
    pub coi_charge: f64,

    /// Interest credited this year
    pub credited_growth: f64,

    /// Cash value at the end of this year
    pub cumulative_cash_value: f64,

    /// Surrender charge applicable if surrendered this year
    pub surrender_charge: f64,

    /// Cash value net of the surrender charge
    pub net_surrender_value: f64,

    /// Premiums paid through this year
    pub cumulative_premiums: f64,

    /// Whether cumulative premiums exceed the 7-pay MEC threshold
    pub mec_risk: bool,
}

/// Complete cash-value projection
///
/// Regenerable deterministically from the same illustration; the year
/// index is monotonic and the length equals the requested horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashValueProjection {
    /// Per-year records, year 1 first
    pub years: Vec<ProjectionYear>,

    /// Whether any year breached the 7-pay MEC threshold
    pub mec_risk: bool,
}

impl CashValueProjection {
    pub fn new(years: Vec<ProjectionYear>) -> Self {
        let mec_risk = years.iter().any(|y| y.mec_risk);
        Self { years, mec_risk }
    }

    /// Number of projected years
    pub fn horizon_years(&self) -> u32 {
        self.years.len() as u32
    }

    /// Cash value at the end of the horizon
    pub fn final_cash_value(&self) -> f64 {
        self.years.last().map(|y| y.cumulative_cash_value).unwrap_or(0.0)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_premiums: f64 = self.years.iter().map(|y| y.premium_paid).sum();
        let total_coi_charges: f64 = self.years.iter().map(|y| y.coi_charge).sum();
        let total_credited_growth: f64 = self.years.iter().map(|y| y.credited_growth).sum();

        let final_surrender_value = self
            .years
            .last()
            .map(|y| y.net_surrender_value)
            .unwrap_or(0.0);

        ProjectionSummary {
            horizon_years: self.horizon_years(),
            total_premiums,
            total_coi_charges,
            total_credited_growth,
            final_cash_value: self.final_cash_value(),
            final_surrender_value,
            mec_risk: self.mec_risk,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub horizon_years: u32,
    pub total_premiums: f64,
    pub total_coi_charges: f64,
    pub total_credited_growth: f64,
    pub final_cash_value: f64,
    pub final_surrender_value: f64,
    pub mec_risk: bool,
}
