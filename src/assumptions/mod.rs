//! Pricing assumptions: cost-of-insurance, surrender charges, product
//! rules, planning parameters, and scoring benchmarks

mod benchmarks;
mod coi;
pub mod loader;
mod product;

pub use benchmarks::{SavingsBenchmark, ScoringWeights};
pub use coi::CoiTable;
pub use loader::LoadedAssumptions;
pub use product::{IulProductRules, PlanningRules, SevenPayTable, SurrenderChargeSchedule};

use std::error::Error;
use std::path::Path;

/// Container for all engine assumptions
///
/// Built once at startup and shared read-only across evaluations; no
/// runtime-mutable global state.
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub coi: CoiTable,
    pub surrender: SurrenderChargeSchedule,
    pub product: IulProductRules,
    pub planning: PlanningRules,
    pub benchmark: SavingsBenchmark,
    pub weights: ScoringWeights,
}

impl Assumptions {
    /// Create assumptions with the default pricing basis
    pub fn default_pricing() -> Self {
        Self {
            coi: CoiTable::default_pricing(),
            surrender: SurrenderChargeSchedule::default_10_year(),
            product: IulProductRules::default(),
            planning: PlanningRules::default(),
            benchmark: SavingsBenchmark::default_pricing(),
            weights: ScoringWeights::default(),
        }
    }

    /// Load table-driven assumptions from CSV files in the default location
    pub fn from_csv() -> Result<Self, Box<dyn Error>> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load table-driven assumptions from CSV files in a specific directory
    ///
    /// Product and planning rules stay at their compiled-in defaults; the
    /// CSV files override the banded tables only.
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let loaded = LoadedAssumptions::load_from(path)?;

        Ok(Self {
            coi: CoiTable::from_loaded(&loaded.coi_bands),
            surrender: SurrenderChargeSchedule::from_loaded(&loaded.surrender_charges),
            product: IulProductRules {
                seven_pay: SevenPayTable::from_loaded(&loaded.seven_pay_bands),
                ..IulProductRules::default()
            },
            planning: PlanningRules::default(),
            benchmark: SavingsBenchmark::from_loaded(&loaded.benchmark_bands),
            weights: ScoringWeights::default(),
        })
    }
}
