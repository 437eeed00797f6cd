//! Scenario output snapshot

use serde::Serialize;

/// Unrounded intermediate values from one recompute
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostComponents {
    /// Scaling applied to every cost line for inflation above/below target
    pub inflation_multiplier: f64,
    /// Bids needed to win the deal count at the given win rate
    pub bids_required: f64,
    /// Investment management, regulatory and overhead costs (£m)
    pub fixed_overheads: f64,
    /// Deal acquisition cost (£m)
    pub acquisition_cost: f64,
    /// Policy administration cost (£m)
    pub admin_cost: f64,
    /// Technology spend after inflation (£m)
    pub technology_spend: f64,
    /// Sum of the four cost lines (£m)
    pub total_operating_cost: f64,
    /// In-force policies including new business
    pub total_policies: f64,
    /// Back-book plus new business less run-off (£bn)
    pub projected_aum: f64,
}

impl CostComponents {
    /// Operating cost per policy (£)
    pub fn cost_per_policy(&self) -> f64 {
        self.total_operating_cost * 1e6 / self.total_policies
    }

    /// Cost lines priced into best estimate liabilities (£m), i.e. all but acquisition
    pub fn servicing_cost(&self) -> f64 {
        self.admin_cost + self.technology_spend + self.fixed_overheads
    }
}

/// Derived business metrics for one input vector, rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    /// £m
    pub total_operating_cost: u32,
    /// bps, 1dp
    pub cost_per_aum: f64,
    /// £
    pub cost_per_policy: u32,
    /// %, 1dp
    pub acquisition_cost_pct: f64,
    pub deals_won: u32,
    /// £bn, 1dp
    pub new_business_premium: f64,
    /// £bn, 1dp
    pub projected_aum: f64,
    /// £m
    pub aum_per_employee: u32,
    /// £m
    pub matching_adjustment_benefit: u32,
    /// bps
    pub pricing_advantage: i32,
    /// bps, 1dp
    pub expense_loading: f64,
    pub total_policies: u64,

    pub components: CostComponents,
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
