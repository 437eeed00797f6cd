//! Batch scenarios: many input vectors through one model

use super::engine::ScenarioModel;
use super::metrics::DerivedMetrics;
use crate::assumptions::{Lever, ScenarioInputs};
use crate::error::Result;
use serde::Serialize;

/// Metrics at one lever position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub lever: Lever,
    pub value: f64,
    pub metrics: DerivedMetrics,
}

impl ScenarioModel {
    /// Compute each input vector independently
    pub fn run_batch(&self, inputs: &[ScenarioInputs]) -> Vec<Result<DerivedMetrics>> {
        inputs.iter().map(|i| self.compute(i)).collect()
    }

    /// Walk `lever` across every slider position, other levers fixed at `base`
    ///
    /// # Example
    /// ```
    /// use cost_economics::{Lever, ScenarioInputs, ScenarioModel};
    ///
    /// let model = ScenarioModel::reference();
    /// let points = model.sweep(&ScenarioInputs::default(), Lever::MarketWinRate).unwrap();
    /// assert_eq!(points.len(), 36);
    /// ```
    pub fn sweep(&self, base: &ScenarioInputs, lever: Lever) -> Result<Vec<SweepPoint>> {
        let domain = lever.domain();
        (0..domain.positions())
            .map(|i| {
                let value = domain.value_at(i);
                let metrics = self.compute(&base.with(lever, value))?;
                Ok(SweepPoint {
                    lever,
                    value,
                    metrics,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_covers_domain() {
        let model = ScenarioModel::reference();
        let points = model
            .sweep(&ScenarioInputs::default(), Lever::ExpenseInflation)
            .unwrap();

        assert_eq!(points.len(), 36);
        assert_eq!(points.first().unwrap().value, 1.5);
        assert_eq!(points.last().unwrap().value, 5.0);
    }

    #[test]
    fn test_sweep_cost_per_policy_increases_opex() {
        let model = ScenarioModel::reference();
        let points = model
            .sweep(&ScenarioInputs::default(), Lever::CostPerPolicy)
            .unwrap();

        for pair in points.windows(2) {
            assert!(
                pair[1].metrics.components.total_operating_cost
                    > pair[0].metrics.components.total_operating_cost
            );
        }
    }

    #[test]
    fn test_sweep_fails_on_invalid_base() {
        let model = ScenarioModel::reference();
        let base = ScenarioInputs::default().with(Lever::MarketWinRate, 0.0);
        assert!(model.sweep(&base, Lever::CostPerPolicy).is_err());
        // Sweeping the offending lever itself replaces it
        assert!(model.sweep(&base, Lever::MarketWinRate).is_ok());
    }

    #[test]
    fn test_run_batch() {
        let model = ScenarioModel::reference();
        let inputs = [
            ScenarioInputs::default(),
            ScenarioInputs::default().with(Lever::AverageDealSize, 0.0),
        ];
        let results = model.run_batch(&inputs);
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
