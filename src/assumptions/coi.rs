//! Age-banded cost-of-insurance assumptions
//!
//! Annual COI rates per $1,000 of face amount, constant within an age
//! band and strictly increasing across bands. The band values are a
//! pricing assumption chosen for qualitative realism, not a published
//! industry table.

/// Cost-of-insurance table keyed by attained age
#[derive(Debug, Clone)]
pub struct CoiTable {
    /// (min_age, max_age, annual rate per $1,000 face), inclusive bounds
    bands: Vec<(u8, u8, f64)>,
}

impl CoiTable {
    /// Default pricing bands
    pub fn default_pricing() -> Self {
        Self {
            bands: vec![
                (18, 29, 0.90),
                (30, 39, 1.20),
                (40, 49, 2.10),
                (50, 59, 4.30),
                (60, 69, 9.20),
                (70, 79, 21.50),
                (80, 89, 48.00),
                (90, 120, 95.00),
            ],
        }
    }

    /// Create from loaded CSV bands
    pub fn from_loaded(bands: &[(u8, u8, f64)]) -> Self {
        Self {
            bands: bands.to_vec(),
        }
    }

    /// Annual COI rate per $1,000 of face for a given attained age
    ///
    /// Ages beyond the last band use the last band's rate.
    pub fn annual_rate_per_1000(&self, attained_age: u8) -> f64 {
        for &(min_age, max_age, rate) in &self.bands {
            if attained_age >= min_age && attained_age <= max_age {
                return rate;
            }
        }
        self.bands.last().map(|&(_, _, rate)| rate).unwrap_or(0.0)
    }

    /// Annual COI charge in dollars for a given face amount
    pub fn annual_charge(&self, attained_age: u8, face_amount: f64) -> f64 {
        face_amount / 1_000.0 * self.annual_rate_per_1000(attained_age)
    }
}
