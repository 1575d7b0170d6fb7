//! Portfolio snapshot of a household's investable assets
//!
//! Existing life-insurance face amount is tracked on `AssessmentInput`,
//! not here; the snapshot covers investable classes only.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Investable asset classes recognized by the scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetClass {
    Stocks,
    Bonds,
    Cash,
    RealEstate,
    Alternatives,
}

impl AssetClass {
    /// All classes in a fixed order, so iteration is deterministic
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Stocks,
        AssetClass::Bonds,
        AssetClass::Cash,
        AssetClass::RealEstate,
        AssetClass::Alternatives,
    ];
}

/// Dollar value held in each asset class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PortfolioSnapshot {
    pub stocks: f64,
    pub bonds: f64,
    pub cash: f64,
    pub real_estate: f64,
    pub alternatives: f64,
}

impl PortfolioSnapshot {
    /// Check that every class value is non-negative
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("stocks", self.stocks),
            ("bonds", self.bonds),
            ("cash", self.cash),
            ("real_estate", self.real_estate),
            ("alternatives", self.alternatives),
        ];
        for (field, value) in fields {
            if value < 0.0 || !value.is_finite() {
                return Err(ValidationError::NegativeAmount { field, value });
            }
        }
        Ok(())
    }

    /// Dollar value held in a given class
    pub fn value(&self, class: AssetClass) -> f64 {
        match class {
            AssetClass::Stocks => self.stocks,
            AssetClass::Bonds => self.bonds,
            AssetClass::Cash => self.cash,
            AssetClass::RealEstate => self.real_estate,
            AssetClass::Alternatives => self.alternatives,
        }
    }

    /// Total investable value across all classes
    pub fn total(&self) -> f64 {
        AssetClass::ALL.iter().map(|&c| self.value(c)).sum()
    }

    /// Share of the total held in a given class, or 0 for an empty portfolio
    pub fn share(&self, class: AssetClass) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            0.0
        } else {
            self.value(class) / total
        }
    }

    /// Number of classes holding at least `threshold` share of the total
    pub fn classes_at_or_above(&self, threshold: f64) -> u32 {
        AssetClass::ALL
            .iter()
            .filter(|&&c| self.share(c) >= threshold)
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_and_share() {
        let snapshot = PortfolioSnapshot {
            stocks: 60_000.0,
            bonds: 30_000.0,
            cash: 10_000.0,
            real_estate: 0.0,
            alternatives: 0.0,
        };
        assert_eq!(snapshot.total(), 100_000.0);
        assert_eq!(snapshot.share(AssetClass::Stocks), 0.6);
        assert_eq!(snapshot.classes_at_or_above(0.05), 3);
    }

    #[test]
    fn test_empty_portfolio_shares_are_zero() {
        let snapshot = PortfolioSnapshot::default();
        assert_eq!(snapshot.total(), 0.0);
        assert_eq!(snapshot.share(AssetClass::Cash), 0.0);
        assert_eq!(snapshot.classes_at_or_above(0.05), 0);
    }

    #[test]
    fn test_negative_value_rejected() {
        let snapshot = PortfolioSnapshot {
            bonds: -5.0,
            ..Default::default()
        };
        let err = snapshot.validate().unwrap_err();
        assert_eq!(err.field(), "bonds");
    }
}
