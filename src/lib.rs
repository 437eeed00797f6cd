//! Cost Economics - scenario engine for a pension risk transfer insurer
//!
//! This library provides:
//! - Reference-year baseline actuals and the modelling constants behind them
//! - Adjustable business levers with validated domains
//! - The scenario model: levers to operating cost, unit cost and pricing metrics
//! - Baseline comparison and favourable/unfavourable classification
//! - Static reference tables (cost breakdown, market, competitors, pricing waterfall)

pub mod error;
pub mod assumptions;
pub mod scenario;
pub mod reference;

// Re-export commonly used types
pub use error::{DomainViolation, Result, ScenarioError};
pub use assumptions::{BaselineActuals, Lever, LeverChange, ScenarioInputs};
pub use scenario::{
    compute, CostModel, DerivedMetrics, MetricComparison, Outcome, ScenarioConfig, ScenarioModel,
    ScenarioSession,
};
