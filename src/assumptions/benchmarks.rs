//! Portfolio scoring benchmarks and category weights

/// Age-banded savings benchmark expressed as a multiple of annual income
///
/// The band multiples follow the common planning heuristic of roughly
/// half an annual salary saved by the late twenties growing to several
/// multiples near retirement.
#[derive(Debug, Clone)]
pub struct SavingsBenchmark {
    /// (min_age, max_age, income multiple), inclusive bounds
    bands: Vec<(u8, u8, f64)>,
}

impl SavingsBenchmark {
    /// Default pricing bands
    pub fn default_pricing() -> Self {
        Self {
            bands: vec![
                (18, 29, 0.5),
                (30, 39, 1.5),
                (40, 49, 3.0),
                (50, 59, 5.0),
                (60, 120, 7.0),
            ],
        }
    }

    /// Create from loaded CSV bands
    pub fn from_loaded(bands: &[(u8, u8, f64)]) -> Self {
        Self {
            bands: bands.to_vec(),
        }
    }

    /// Income multiple expected for a given age
    pub fn income_multiple(&self, age: u8) -> f64 {
        for &(min_age, max_age, multiple) in &self.bands {
            if age >= min_age && age <= max_age {
                return multiple;
            }
        }
        self.bands.last().map(|&(_, _, m)| m).unwrap_or(0.0)
    }

    /// Target investable assets for a given age and annual income
    pub fn target_assets(&self, age: u8, annual_income: f64) -> f64 {
        self.income_multiple(age) * annual_income
    }
}

/// Category weights for the portfolio health score
///
/// The four positive weights plus the penalty magnitude sum to 100.
/// The penalty is subtracted after the positive categories are summed.
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    /// Max points for allocation diversity
    pub diversification: f64,

    /// Max points for portfolio size vs. the age-indexed benchmark
    pub size_adequacy: f64,

    /// Max points for liquid-savings runway
    pub liquidity: f64,

    /// Max points for insurance coverage of the net gap
    pub insurance_coverage: f64,

    /// Max points subtracted for real-estate concentration
    pub concentration_penalty: f64,

    /// Months of expenses that earn full liquidity points
    pub liquidity_target_months: f64,

    /// Minimum share for a class to count toward diversity
    pub significant_share: f64,

    /// Real-estate share above which the penalty starts
    pub real_estate_threshold: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            diversification: 30.0,
            size_adequacy: 20.0,
            liquidity: 20.0,
            insurance_coverage: 15.0,
            concentration_penalty: 15.0,
            liquidity_target_months: 6.0,
            significant_share: 0.05,
            real_estate_threshold: 0.40,
        }
    }
}

impl ScoringWeights {
    /// Maximum achievable positive score
    pub fn max_positive(&self) -> f64 {
        self.diversification + self.size_adequacy + self.liquidity + self.insurance_coverage
    }
}
