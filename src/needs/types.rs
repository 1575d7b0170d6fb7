//! Coverage-needs output structures

use serde::{Deserialize, Serialize};

use crate::money::round_cents;

/// Result of a coverage-needs analysis
///
/// Immutable once computed. All amounts are rounded to cents at
/// construction so serialized output is fixed-point two-decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageNeedsResult {
    /// Income replacement through the working years
    pub income_replacement: f64,

    /// Mortgage plus other outstanding debt
    pub debt_coverage: f64,

    /// Inflation-adjusted education funding across all dependents
    pub education_funding: f64,

    /// Funeral estimate plus desired legacy
    pub final_expenses: f64,

    /// Sum of the four need components
    pub gross_need: f64,

    /// Savings, investments, and in-force face amount
    pub offsettable_assets: f64,

    /// max(gross need - offsettable assets, 0)
    pub net_gap: f64,
}

impl CoverageNeedsResult {
    /// Build a result from raw components, clamping and rounding
    pub(crate) fn from_components(
        income_replacement: f64,
        debt_coverage: f64,
        education_funding: f64,
        final_expenses: f64,
        offsettable_assets: f64,
    ) -> Self {
        let gross_need = income_replacement + debt_coverage + education_funding + final_expenses;
        let net_gap = (gross_need - offsettable_assets).max(0.0);

        Self {
            income_replacement: round_cents(income_replacement),
            debt_coverage: round_cents(debt_coverage),
            education_funding: round_cents(education_funding),
            final_expenses: round_cents(final_expenses),
            gross_need: round_cents(gross_need),
            offsettable_assets: round_cents(offsettable_assets),
            net_gap: round_cents(net_gap),
        }
    }

    /// Whether any unfunded need remains
    pub fn has_gap(&self) -> bool {
        self.net_gap > 0.0
    }
}
