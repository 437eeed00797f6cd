//! Scenario model: business levers to derived cost metrics
//!
//! Every call recomputes from scratch. There is no state beyond the baseline
//! and configuration the model was built with.

use super::metrics::{round_to, CostComponents, DerivedMetrics};
use crate::assumptions::{BaselineActuals, ScenarioInputs};
use crate::error::{DomainViolation, Result};
use serde::{Deserialize, Serialize};

/// Which cost formulas the model applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostModel {
    /// Inflation-scaled costs, acquisition driven by the cost-per-quote lever
    #[default]
    Refined,
    /// Inflation pinned at target and a constant acquisition cost per deal won
    Flat,
}

/// Configuration for a scenario model
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub cost_model: CostModel,
}

impl ScenarioConfig {
    pub fn flat() -> Self {
        Self {
            cost_model: CostModel::Flat,
        }
    }
}

/// Scenario model bound to a baseline
#[derive(Debug, Clone)]
pub struct ScenarioModel {
    baseline: BaselineActuals,
    config: ScenarioConfig,
}

impl ScenarioModel {
    pub fn new(baseline: BaselineActuals, config: ScenarioConfig) -> Self {
        Self { baseline, config }
    }

    /// Refined model on the reference-year baseline
    pub fn reference() -> Self {
        Self::new(BaselineActuals::reference_year(), ScenarioConfig::default())
    }

    pub fn baseline(&self) -> &BaselineActuals {
        &self.baseline
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Recompute all derived metrics for `inputs`
    pub fn compute(&self, inputs: &ScenarioInputs) -> Result<DerivedMetrics> {
        evaluate(inputs, &self.baseline, self.config.cost_model)
    }
}

/// Refined model applied to `inputs` against `baseline`
pub fn compute(inputs: &ScenarioInputs, baseline: &BaselineActuals) -> Result<DerivedMetrics> {
    evaluate(inputs, baseline, CostModel::Refined)
}

fn evaluate(
    inputs: &ScenarioInputs,
    baseline: &BaselineActuals,
    cost_model: CostModel,
) -> Result<DerivedMetrics> {
    inputs.validate()?;
    baseline.validate()?;

    let premium = inputs.new_business_premium;

    // Premium is £bn, deal size £m; at least one deal is always assumed
    let deal_size = divisor("averageDealSize", inputs.average_deal_size)?;
    let deals_won = (premium * 1000.0 / deal_size).round().max(1.0);

    let projected_aum = baseline.current_aum + premium - baseline.assumed_run_off;

    let policy_liability = divisor("averagePolicyLiability", baseline.average_policy_liability)?;
    let new_policies = premium * 1e9 / policy_liability;
    let total_policies = baseline.policy_count as f64 + new_policies;

    let inflation_multiplier = match cost_model {
        CostModel::Refined => 1.0 + (inputs.expense_inflation - baseline.target_inflation) / 100.0,
        CostModel::Flat => 1.0,
    };

    let fixed_overheads = baseline.fixed_cost_base() * inflation_multiplier;

    // Lower win rate means more bids per deal won
    let win_rate = divisor("marketWinRate", inputs.market_win_rate)?;
    let bids_required = deals_won / (win_rate / 100.0);
    let acquisition_cost = match cost_model {
        CostModel::Refined => bids_required * inputs.cost_per_quote * inflation_multiplier,
        CostModel::Flat => deals_won * baseline.flat_acquisition_cost_per_deal,
    };

    let admin_cost = (inputs.cost_per_policy * total_policies / 1e6) * inflation_multiplier;
    let technology_spend = inputs.technology_spend * inflation_multiplier;

    let total_operating_cost = admin_cost + technology_spend + fixed_overheads + acquisition_cost;

    let components = CostComponents {
        inflation_multiplier,
        bids_required,
        fixed_overheads,
        acquisition_cost,
        admin_cost,
        technology_spend,
        total_operating_cost,
        total_policies,
        projected_aum,
    };

    // bps of AUM: £m cost over £bn AUM scaled by 10
    let aum_bps_divisor = divisor("projectedAum", projected_aum)? * 10.0;
    let premium_m = divisor("newBusinessPremium", premium)? * 1000.0;
    let policies = divisor("totalPolicies", total_policies)?;
    let employees = divisor("employeeCount", baseline.employee_count as f64)?;

    let cost_per_aum = finite("costPerAum", total_operating_cost / aum_bps_divisor)?;
    let acquisition_cost_pct = finite("acquisitionCostPct", acquisition_cost / premium_m * 100.0)?;
    let cost_per_policy = finite("costPerPolicy", total_operating_cost * 1e6 / policies)?;
    let ma_benefit = finite(
        "matchingAdjustmentBenefit",
        inputs.matching_adjustment_spread / 10000.0 * projected_aum * 1000.0,
    )?;
    let pricing_advantage = inputs.matching_adjustment_spread - baseline.neutral_spread;
    let expense_loading = finite("expenseLoading", components.servicing_cost() / aum_bps_divisor)?;
    let aum_per_employee = finite("aumPerEmployee", projected_aum * 1000.0 / employees)?;
    finite("totalOperatingCost", total_operating_cost)?;

    let metrics = DerivedMetrics {
        total_operating_cost: whole("totalOperatingCost", total_operating_cost)?,
        cost_per_aum: round_to(cost_per_aum, 1),
        cost_per_policy: whole("costPerPolicy", cost_per_policy)?,
        acquisition_cost_pct: round_to(acquisition_cost_pct, 1),
        deals_won: whole("dealsWon", deals_won)?,
        new_business_premium: round_to(premium, 1),
        projected_aum: round_to(projected_aum, 1),
        aum_per_employee: whole("aumPerEmployee", aum_per_employee)?,
        matching_adjustment_benefit: whole("matchingAdjustmentBenefit", ma_benefit)?,
        pricing_advantage: pricing_advantage.round() as i32,
        expense_loading: round_to(expense_loading, 1),
        total_policies: total_policies.round() as u64,
        components,
    };

    log::debug!(
        "scenario recomputed: opex={}m cost/aum={}bps deals={} ma={}m",
        metrics.total_operating_cost,
        metrics.cost_per_aum,
        metrics.deals_won,
        metrics.matching_adjustment_benefit
    );

    Ok(metrics)
}

/// Reject a divisor that is zero, negative or non-finite
fn divisor(quantity: &'static str, value: f64) -> std::result::Result<f64, DomainViolation> {
    if !value.is_finite() {
        return Err(DomainViolation::NonFinite { quantity });
    }
    if value <= 0.0 {
        return Err(DomainViolation::ZeroDenominator { quantity });
    }
    Ok(value)
}

fn finite(quantity: &'static str, value: f64) -> std::result::Result<f64, DomainViolation> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainViolation::NonFinite { quantity })
    }
}

/// Round to a whole count, refusing values a `u32` cannot hold
fn whole(quantity: &'static str, value: f64) -> std::result::Result<u32, DomainViolation> {
    let rounded = value.round();
    if rounded < 0.0 || rounded > u32::MAX as f64 {
        return Err(DomainViolation::Unrepresentable { quantity, value });
    }
    Ok(rounded as u32)
}
