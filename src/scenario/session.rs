//! Interactive scenario session
//!
//! Applies lever changes one at a time and recomputes in full. A rejected
//! change stays in the input vector while the last valid snapshot remains
//! current, until a later change recomputes cleanly.

use super::comparison::{compare_all, MetricComparison};
use super::engine::ScenarioModel;
use super::metrics::DerivedMetrics;
use crate::assumptions::{LeverChange, ScenarioInputs};
use crate::error::{DomainViolation, Result, ScenarioError};

#[derive(Debug, Clone)]
pub struct ScenarioSession {
    model: ScenarioModel,
    inputs: ScenarioInputs,
    metrics: DerivedMetrics,
    rejection: Option<DomainViolation>,
}

impl ScenarioSession {
    /// Start at the default input vector
    pub fn new(model: ScenarioModel) -> Result<Self> {
        let inputs = ScenarioInputs::default();
        let metrics = model.compute(&inputs)?;
        Ok(Self {
            model,
            inputs,
            metrics,
            rejection: None,
        })
    }

    pub fn model(&self) -> &ScenarioModel {
        &self.model
    }

    pub fn inputs(&self) -> &ScenarioInputs {
        &self.inputs
    }

    /// Last successfully computed snapshot
    pub fn metrics(&self) -> &DerivedMetrics {
        &self.metrics
    }

    /// Why the current inputs could not be computed, if they could not
    pub fn rejection(&self) -> Option<&DomainViolation> {
        self.rejection.as_ref()
    }

    /// True while `metrics` lags a rejected input vector
    pub fn is_stale(&self) -> bool {
        self.rejection.is_some()
    }

    /// Apply a change exactly as given and recompute
    pub fn apply(&mut self, change: LeverChange) -> Result<&DerivedMetrics> {
        self.inputs.set(change.lever, change.value);
        self.recompute()
    }

    /// Apply a change after clamping and snapping it to the lever's slider domain
    ///
    /// A NaN has no slider position: it is refused before it reaches the input
    /// vector, so the session is left exactly as it was.
    pub fn apply_snapped(&mut self, change: LeverChange) -> Result<&DerivedMetrics> {
        let domain = change.lever.domain();
        let Some(snapped) = domain.clamp(change.value) else {
            let violation = DomainViolation::NonFinite {
                quantity: change.lever.key(),
            };
            log::warn!("ignored {}: {}", change.lever, violation);
            return Err(violation.into());
        };
        if snapped != change.value {
            log::warn!(
                "{} = {} snapped to {}",
                change.lever,
                change.value,
                snapped
            );
        }
        self.apply(LeverChange::new(change.lever, snapped))
    }

    /// Apply a `(fieldName, newValue)` event from the presentation layer
    pub fn apply_event(&mut self, field_name: &str, value: f64) -> Result<&DerivedMetrics> {
        let change = LeverChange::parse(field_name, value)?;
        self.apply(change)
    }

    /// Back to the default input vector
    pub fn reset(&mut self) -> Result<&DerivedMetrics> {
        self.inputs = ScenarioInputs::default();
        self.recompute()
    }

    /// Comparison rows for the current snapshot
    pub fn comparisons(&self) -> Vec<MetricComparison> {
        compare_all(self.model.baseline(), &self.metrics)
    }

    fn recompute(&mut self) -> Result<&DerivedMetrics> {
        match self.model.compute(&self.inputs) {
            Ok(metrics) => {
                self.metrics = metrics;
                self.rejection = None;
                Ok(&self.metrics)
            }
            Err(ScenarioError::DomainViolation(violation)) => {
                log::warn!("scenario rejected, keeping previous snapshot: {}", violation);
                self.rejection = Some(violation.clone());
                Err(violation.into())
            }
            Err(e) => Err(e),
        }
    }
}
