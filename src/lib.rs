//! Coverage Engine - deterministic needs, scoring, and cash-value calculations
//!
//! This library provides:
//! - Life-insurance coverage-needs analysis and funding-gap calculation
//! - Portfolio health scoring against age-indexed benchmarks
//! - Multi-decade IUL cash-value projections with MEC monitoring
//! - Term vs. IUL product recommendation via an ordered decision table

pub mod assessment;
pub mod assumptions;
pub mod engine;
pub mod error;
pub mod money;
pub mod needs;
pub mod projection;
pub mod recommend;
pub mod scoring;

// Re-export commonly used types
pub use assessment::{AssessmentInput, PortfolioSnapshot};
pub use assumptions::Assumptions;
pub use engine::{AssessmentEngine, AssessmentOutcome};
pub use error::ValidationError;
pub use needs::{CoverageNeedsResult, NeedsCalculator};
pub use projection::{CashValueProjection, CashValueProjector, PolicyIllustration, ProjectionYear};
pub use recommend::{ProductRecommendation, RecommendationEngine};
pub use scoring::{HealthScore, PortfolioHealthScorer};
