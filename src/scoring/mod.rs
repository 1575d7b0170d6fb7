//! Portfolio health scoring

mod scorer;
mod types;

pub use scorer::{PortfolioHealthScorer, ScoringContext};
pub use types::{Concern, HealthScore, ScoreBreakdown};
