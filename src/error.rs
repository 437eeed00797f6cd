//! Error types for the scenario engine
//!
//! The model itself does no I/O, so the only runtime failure is a domain
//! violation. The remaining variants belong to baseline loading and export.

use crate::assumptions::Lever;
use thiserror::Error;

/// Result type alias using ScenarioError
pub type Result<T> = std::result::Result<T, ScenarioError>;

/// Unified error type for scenario operations
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainViolation),

    #[error("Unknown lever: {0}")]
    UnknownLever(String),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Invalid baseline: {0}")]
    InvalidBaseline(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScenarioError {
    /// True when the model rejected its inputs (as opposed to a loading failure)
    pub fn is_domain_violation(&self) -> bool {
        matches!(self, ScenarioError::DomainViolation(_))
    }
}

/// Reasons a scenario cannot be computed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainViolation {
    #[error("{lever} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        lever: Lever,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{quantity} is zero and cannot be used as a divisor")]
    ZeroDenominator { quantity: &'static str },

    #[error("{quantity} evaluated to a non-finite value")]
    NonFinite { quantity: &'static str },

    #[error("{quantity} = {value} cannot be reported as a whole count")]
    Unrepresentable { quantity: &'static str, value: f64 },
}
