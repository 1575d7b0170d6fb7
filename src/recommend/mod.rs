//! Product recommendation via an ordered decision table

mod rules;
mod types;

pub use rules::{DecisionContext, RecommendationEngine};
pub use types::{ProductRecommendation, RationaleTag, Track};
