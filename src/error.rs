//! Engine error types
//!
//! `ValidationError` is the only error kind the calculation engine raises.
//! Every variant names the offending field and the violated bound so the
//! calling layer can surface a specific message rather than a generic
//! failure. All variants are recoverable by correcting input.

use thiserror::Error;

/// Caller-supplied data violates a documented bound
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A currency or count field carries a negative value
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    /// Applicant age outside the supported issue range
    #[error("age must be between {min} and {max}, got {value}")]
    AgeOutOfRange { value: u8, min: u8, max: u8 },

    /// A rate field outside its supported range
    #[error("{field} must be between {min} and {max}, got {value}")]
    RateOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Projection horizon outside the supported range
    #[error("projection horizon must be between {min} and {max} years, got {value}")]
    HorizonOutOfRange { value: u32, min: u32, max: u32 },
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NegativeAmount { field, .. } => field,
            ValidationError::AgeOutOfRange { .. } => "age",
            ValidationError::RateOutOfRange { field, .. } => field,
            ValidationError::HorizonOutOfRange { .. } => "horizon_years",
        }
    }
}
