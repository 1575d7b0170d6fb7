//! Assessment input structures and loaders

mod data;
mod loader;
mod portfolio;

pub use data::{AssessmentInput, MaritalStatus, PreferenceFlags, PriceSensitivity};
pub use loader::{load_assessment, load_households, AssessmentRecord};
pub use portfolio::{AssetClass, PortfolioSnapshot};
