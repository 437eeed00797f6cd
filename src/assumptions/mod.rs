//! Scenario assumptions: reference-year baseline and adjustable levers

mod baseline;
mod levers;
pub mod loader;

pub use baseline::BaselineActuals;
pub use levers::{Lever, LeverChange, LeverDomain, ScenarioInputs};
pub use loader::{load_baseline, DEFAULT_OVERRIDES_PATH};
