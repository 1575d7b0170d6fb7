//! Product rules: surrender charges, IUL illustration parameters, MEC
//! limits, and planning constants used by needs and recommendation logic

/// Surrender charge schedule by policy year
#[derive(Debug, Clone)]
pub struct SurrenderChargeSchedule {
    /// Surrender charge rates by policy year (1-indexed)
    charges: Vec<f64>,
}

impl SurrenderChargeSchedule {
    /// Create from loaded CSV data
    pub fn from_loaded(charges: &[f64]) -> Self {
        Self {
            charges: charges.to_vec(),
        }
    }

    /// Default 10-year schedule tapering linearly to zero
    pub fn default_10_year() -> Self {
        Self {
            // Year 1-10 charges, year 11+ is 0
            charges: vec![
                0.10, // Year 1
                0.09, // Year 2
                0.08, // Year 3
                0.07, // Year 4
                0.06, // Year 5
                0.05, // Year 6
                0.04, // Year 7
                0.03, // Year 8
                0.02, // Year 9
                0.01, // Year 10
            ],
        }
    }

    /// Get surrender charge rate for a given policy year
    pub fn get_rate(&self, policy_year: u32) -> f64 {
        if policy_year == 0 {
            return self.charges.first().copied().unwrap_or(0.0);
        }
        let idx = (policy_year as usize).saturating_sub(1);
        self.charges.get(idx).copied().unwrap_or(0.0)
    }

    /// Check if still in surrender charge period
    pub fn in_sc_period(&self, policy_year: u32) -> bool {
        self.get_rate(policy_year) > 0.0
    }

    /// Get the total SC period length in years
    pub fn sc_period_years(&self) -> u32 {
        self.charges.len() as u32
    }
}

/// Annual 7-pay premium limits per $1,000 of face by issue-age band
///
/// Cumulative premiums above `annual_limit * min(year, 7)` mark the
/// illustration as MEC-risk. Band values are a pricing assumption with
/// the qualitatively required shape (monotone in issue age), not a
/// published IRS table.
#[derive(Debug, Clone)]
pub struct SevenPayTable {
    /// (min_age, max_age, annual 7-pay limit per $1,000 face), inclusive
    bands: Vec<(u8, u8, f64)>,
}

impl SevenPayTable {
    /// Default pricing bands
    pub fn default_pricing() -> Self {
        Self {
            bands: vec![
                (18, 29, 18.0),
                (30, 39, 24.0),
                (40, 49, 33.0),
                (50, 59, 47.0),
                (60, 69, 68.0),
                (70, 120, 96.0),
            ],
        }
    }

    /// Create from loaded CSV bands
    pub fn from_loaded(bands: &[(u8, u8, f64)]) -> Self {
        Self {
            bands: bands.to_vec(),
        }
    }

    /// Annual 7-pay premium limit for a given issue age and face amount
    pub fn annual_limit(&self, issue_age: u8, face_amount: f64) -> f64 {
        for &(min_age, max_age, rate) in &self.bands {
            if issue_age >= min_age && issue_age <= max_age {
                return face_amount / 1_000.0 * rate;
            }
        }
        let rate = self.bands.last().map(|&(_, _, r)| r).unwrap_or(0.0);
        face_amount / 1_000.0 * rate
    }

    /// Cumulative 7-pay threshold through a given policy year
    pub fn cumulative_limit(&self, issue_age: u8, face_amount: f64, policy_year: u32) -> f64 {
        self.annual_limit(issue_age, face_amount) * policy_year.min(7) as f64
    }
}

/// IUL illustration parameters and supported bounds
#[derive(Debug, Clone)]
pub struct IulProductRules {
    /// Share of premium allocated to cash value in policy year 1
    pub first_year_allocation: f64,

    /// Share of premium allocated to cash value in years 2+
    pub renewal_allocation: f64,

    /// Minimum supported crediting rate
    pub min_crediting_rate: f64,

    /// Maximum supported crediting rate
    pub max_crediting_rate: f64,

    /// Minimum supported projection horizon in years
    pub min_horizon_years: u32,

    /// Maximum supported projection horizon in years
    pub max_horizon_years: u32,

    /// Crediting rate assumed when the pipeline builds its own illustration
    pub default_crediting_rate: f64,

    /// Horizon used for pipeline-generated illustrations
    pub illustrative_horizon_years: u32,

    /// Annual premium per $1,000 of face for pipeline-generated illustrations
    pub illustrative_premium_per_1000: f64,

    /// MEC 7-pay limits
    pub seven_pay: SevenPayTable,
}

impl Default for IulProductRules {
    fn default() -> Self {
        Self {
            first_year_allocation: 0.85,
            renewal_allocation: 0.95,
            min_crediting_rate: 0.06,
            max_crediting_rate: 0.08,
            min_horizon_years: 20,
            max_horizon_years: 40,
            default_crediting_rate: 0.065,
            illustrative_horizon_years: 20,
            illustrative_premium_per_1000: 12.0,
            seven_pay: SevenPayTable::default_pricing(),
        }
    }
}

/// Planning constants shared by the needs calculator and the
/// recommendation engine
#[derive(Debug, Clone)]
pub struct PlanningRules {
    /// Retirement-age proxy used for replacement and term durations
    pub retirement_age: u8,

    /// Share of gross income replaced by the death benefit
    pub income_replacement_ratio: f64,

    /// Minimum income-replacement span in years
    pub min_replacement_years: u32,

    /// Maximum income-replacement span in years
    pub max_replacement_years: u32,

    /// Minimum recommended term duration in years
    pub min_term_years: u32,

    /// Maximum recommended term duration in years
    pub max_term_years: u32,

    /// Oldest age at which IUL is recommended
    pub iul_max_issue_age: u8,

    /// Recommended face amounts are rounded up to this band
    pub face_rounding: f64,
}

impl Default for PlanningRules {
    fn default() -> Self {
        Self {
            retirement_age: 65,
            income_replacement_ratio: 0.75,
            min_replacement_years: 5,
            max_replacement_years: 30,
            min_term_years: 10,
            max_term_years: 30,
            iul_max_issue_age: 55,
            face_rounding: 10_000.0,
        }
    }
}

impl PlanningRules {
    /// Years of income replacement for a given age
    pub fn replacement_years(&self, age: u8) -> u32 {
        let to_retirement = u32::from(self.retirement_age.saturating_sub(age));
        to_retirement.clamp(self.min_replacement_years, self.max_replacement_years)
    }

    /// Recommended term duration for a given age
    pub fn term_duration(&self, age: u8) -> u32 {
        let to_retirement = u32::from(self.retirement_age.saturating_sub(age));
        to_retirement.clamp(self.min_term_years, self.max_term_years)
    }
}
