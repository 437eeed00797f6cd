//! Scenario engine: recomputes derived cost metrics from lever positions

mod engine;
mod metrics;
mod comparison;
mod session;
mod sweep;

pub use engine::{compute, CostModel, ScenarioConfig, ScenarioModel};
pub use metrics::{round_to, CostComponents, DerivedMetrics};
pub use comparison::{classify, compare_all, Metric, MetricComparison, Outcome, Panel};
pub use session::ScenarioSession;
pub use sweep::SweepPoint;
