//! Scenario vs baseline comparison rows
//!
//! Each displayed metric is paired with its reference-year figure and
//! classified favourable / neutral / unfavourable. Cost metrics are
//! lower-is-better (`reverse`), so their delta is taken as baseline minus
//! scenario.

use super::metrics::{round_to, DerivedMetrics};
use crate::assumptions::BaselineActuals;
use serde::Serialize;

/// Direction of a scenario change relative to baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Favourable,
    Neutral,
    Unfavourable,
}

/// Presentation grouping of the comparison rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Panel {
    OperatingMetrics,
    ScalingOutcomes,
    PricingPower,
}

impl Panel {
    pub fn title(&self) -> &'static str {
        match self {
            Panel::OperatingMetrics => "Operating Metrics",
            Panel::ScalingOutcomes => "Scaling Outcomes",
            Panel::PricingPower => "Pricing Power",
        }
    }
}

/// Metrics shown against their baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    TotalOperatingCost,
    CostPerAum,
    CostPerPolicy,
    AcquisitionCostPct,
    DealsWon,
    NewBusinessPremium,
    ProjectedAum,
    AumPerEmployee,
    MatchingAdjustmentBenefit,
    PricingAdvantage,
    ExpenseLoading,
}

impl Metric {
    /// Display order
    pub const ALL: [Metric; 11] = [
        Metric::TotalOperatingCost,
        Metric::CostPerAum,
        Metric::CostPerPolicy,
        Metric::AcquisitionCostPct,
        Metric::DealsWon,
        Metric::NewBusinessPremium,
        Metric::ProjectedAum,
        Metric::AumPerEmployee,
        Metric::MatchingAdjustmentBenefit,
        Metric::PricingAdvantage,
        Metric::ExpenseLoading,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::TotalOperatingCost => "Total OPEX",
            Metric::CostPerAum => "Cost / AUM",
            Metric::CostPerPolicy => "Cost / Policy",
            Metric::AcquisitionCostPct => "Acq / Premium",
            Metric::DealsWon => "Deals Won",
            Metric::NewBusinessPremium => "New Biz Prem",
            Metric::ProjectedAum => "Projected AUM",
            Metric::AumPerEmployee => "AUM / FTE",
            Metric::MatchingAdjustmentBenefit => "MA Benefit",
            Metric::PricingAdvantage => "Pricing Edge",
            Metric::ExpenseLoading => "BEL Exp Load",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::TotalOperatingCost
            | Metric::AumPerEmployee
            | Metric::MatchingAdjustmentBenefit => "£m",
            Metric::CostPerAum | Metric::PricingAdvantage | Metric::ExpenseLoading => "bps",
            Metric::CostPerPolicy => "£",
            Metric::AcquisitionCostPct => "%",
            Metric::DealsWon => "",
            Metric::NewBusinessPremium | Metric::ProjectedAum => "£bn",
        }
    }

    /// Decimal places the metric is displayed (and compared) at
    pub fn decimals(&self) -> u32 {
        match self {
            Metric::CostPerAum
            | Metric::AcquisitionCostPct
            | Metric::NewBusinessPremium
            | Metric::ProjectedAum
            | Metric::ExpenseLoading => 1,
            _ => 0,
        }
    }

    /// Lower is better
    pub fn reverse(&self) -> bool {
        matches!(
            self,
            Metric::TotalOperatingCost
                | Metric::CostPerAum
                | Metric::CostPerPolicy
                | Metric::AcquisitionCostPct
                | Metric::ExpenseLoading
        )
    }

    pub fn panel(&self) -> Panel {
        match self {
            Metric::TotalOperatingCost
            | Metric::CostPerAum
            | Metric::CostPerPolicy
            | Metric::AcquisitionCostPct => Panel::OperatingMetrics,
            Metric::DealsWon
            | Metric::NewBusinessPremium
            | Metric::ProjectedAum
            | Metric::AumPerEmployee => Panel::ScalingOutcomes,
            Metric::MatchingAdjustmentBenefit
            | Metric::PricingAdvantage
            | Metric::ExpenseLoading => Panel::PricingPower,
        }
    }

    /// Reference-year figure
    pub fn baseline_value(&self, baseline: &BaselineActuals) -> f64 {
        match self {
            Metric::TotalOperatingCost => baseline.total_operating_cost,
            Metric::CostPerAum => baseline.cost_per_aum,
            Metric::CostPerPolicy => baseline.cost_per_policy,
            Metric::AcquisitionCostPct => baseline.acquisition_cost_pct,
            Metric::DealsWon => baseline.deals_won as f64,
            Metric::NewBusinessPremium => baseline.new_business_premium,
            Metric::ProjectedAum => baseline.current_aum,
            Metric::AumPerEmployee => baseline.aum_per_employee,
            Metric::MatchingAdjustmentBenefit => baseline.matching_adjustment_benefit,
            Metric::PricingAdvantage => baseline.pricing_advantage,
            Metric::ExpenseLoading => baseline.expense_loading,
        }
    }

    /// Scenario figure at display precision
    pub fn scenario_value(&self, metrics: &DerivedMetrics) -> f64 {
        match self {
            Metric::TotalOperatingCost => metrics.total_operating_cost as f64,
            Metric::CostPerAum => metrics.cost_per_aum,
            Metric::CostPerPolicy => metrics.cost_per_policy as f64,
            Metric::AcquisitionCostPct => metrics.acquisition_cost_pct,
            Metric::DealsWon => metrics.deals_won as f64,
            Metric::NewBusinessPremium => metrics.new_business_premium,
            Metric::ProjectedAum => metrics.projected_aum,
            Metric::AumPerEmployee => metrics.aum_per_employee as f64,
            Metric::MatchingAdjustmentBenefit => metrics.matching_adjustment_benefit as f64,
            Metric::PricingAdvantage => metrics.pricing_advantage as f64,
            Metric::ExpenseLoading => metrics.expense_loading,
        }
    }
}

/// Signed delta (after the reverse flag) and its classification
pub fn classify(baseline: f64, scenario: f64, reverse: bool) -> (f64, Outcome) {
    let delta = if reverse {
        baseline - scenario
    } else {
        scenario - baseline
    };
    (delta, outcome_of(delta))
}

fn outcome_of(delta: f64) -> Outcome {
    if delta > 0.0 {
        Outcome::Favourable
    } else if delta == 0.0 {
        Outcome::Neutral
    } else {
        Outcome::Unfavourable
    }
}

/// One comparison row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricComparison {
    pub metric: Metric,
    pub baseline: f64,
    pub scenario: f64,
    pub reverse: bool,
    /// Rounded to the metric's display precision
    pub delta: f64,
    pub outcome: Outcome,
}

impl MetricComparison {
    pub fn new(metric: Metric, baseline: f64, scenario: f64) -> Self {
        let reverse = metric.reverse();
        let (raw, _) = classify(baseline, scenario, reverse);
        // Float noise (3.9 - 3.9000000001) must not read as a change
        let delta = round_to(raw, metric.decimals());
        Self {
            metric,
            baseline,
            scenario,
            reverse,
            delta,
            outcome: outcome_of(delta),
        }
    }

    pub fn is_favourable(&self) -> bool {
        self.outcome == Outcome::Favourable
    }
}

/// All comparison rows in display order
pub fn compare_all(baseline: &BaselineActuals, metrics: &DerivedMetrics) -> Vec<MetricComparison> {
    Metric::ALL
        .iter()
        .map(|&metric| {
            MetricComparison::new(
                metric,
                metric.baseline_value(baseline),
                metric.scenario_value(metrics),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{Lever, ScenarioInputs};
    use crate::scenario::compute;

    #[test]
    fn test_classify_three_way() {
        assert_eq!(classify(10.0, 12.0, false).1, Outcome::Favourable);
        assert_eq!(classify(10.0, 8.0, false).1, Outcome::Unfavourable);
        assert_eq!(classify(10.0, 10.0, false).1, Outcome::Neutral);

        assert_eq!(classify(10.0, 8.0, true), (2.0, Outcome::Favourable));
        assert_eq!(classify(10.0, 12.0, true), (-2.0, Outcome::Unfavourable));
        assert_eq!(classify(10.0, 10.0, true).1, Outcome::Neutral);
    }

    #[test]
    fn test_equal_values_are_neutral() {
        for metric in Metric::ALL {
            let row = MetricComparison::new(metric, 42.5, 42.5);
            assert_eq!(row.outcome, Outcome::Neutral, "{:?}", metric);
            assert_eq!(row.delta, 0.0);
        }
    }

    #[test]
    fn test_delta_rounded_to_display_precision() {
        let row = MetricComparison::new(Metric::CostPerAum, 3.9, 3.9000000001);
        assert_eq!(row.outcome, Outcome::Neutral);

        let row = MetricComparison::new(Metric::CostPerAum, 3.9, 3.7);
        assert_eq!(row.delta, 0.2);
        assert!(row.is_favourable());
    }

    #[test]
    fn test_reverse_flags_match_panels() {
        let reversed: Vec<_> = Metric::ALL.iter().filter(|m| m.reverse()).collect();
        assert_eq!(reversed.len(), 5);
        assert!(Metric::ALL
            .iter()
            .filter(|m| m.panel() == Panel::OperatingMetrics)
            .all(|m| m.reverse()));
        assert!(!Metric::PricingAdvantage.reverse());
    }

    #[test]
    fn test_compare_all_default_scenario() {
        let baseline = BaselineActuals::default();
        let metrics = compute(&ScenarioInputs::default(), &baseline).unwrap();
        let rows = compare_all(&baseline, &metrics);
        assert_eq!(rows.len(), Metric::ALL.len());

        let row = |m: Metric| rows.iter().find(|r| r.metric == m).copied().unwrap();

        // 343 vs 277: costs went up
        let opex = row(Metric::TotalOperatingCost);
        assert_eq!(opex.delta, -66.0);
        assert_eq!(opex.outcome, Outcome::Unfavourable);

        // 0.4 vs 3.9 bps: lower is better
        assert_eq!(row(Metric::CostPerAum).outcome, Outcome::Favourable);

        assert_eq!(row(Metric::DealsWon).delta, 3.0);
        assert_eq!(row(Metric::NewBusinessPremium).outcome, Outcome::Neutral);
        assert_eq!(row(Metric::PricingAdvantage).outcome, Outcome::Neutral);
        assert_eq!(row(Metric::ProjectedAum).delta, 11.9);
    }

    #[test]
    fn test_compare_pricing_edge_unfavourable() {
        let baseline = BaselineActuals::default();
        let inputs = ScenarioInputs::default().with(Lever::MatchingAdjustmentSpread, 100.0);
        let metrics = compute(&inputs, &baseline).unwrap();
        let rows = compare_all(&baseline, &metrics);
        let edge = rows
            .iter()
            .find(|r| r.metric == Metric::PricingAdvantage)
            .unwrap();
        assert_eq!(edge.delta, -25.0);
        assert_eq!(edge.outcome, Outcome::Unfavourable);
    }
}
