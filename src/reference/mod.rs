//! Static reference tables shown alongside the scenario engine
//!
//! These are literal FY2024 figures (annual report and market surveys). They
//! do not feed the scenario model.

mod costs;
mod market;
mod pricing;

pub use costs::{
    classified, cost_shares, scale_curve, total_cost, ClassifiedCost, CostClass, CostLine,
    EfficiencyYear, ScalePoint, COST_BREAKDOWN, COST_CLASSIFICATION, EFFICIENCY_TREND,
};
pub use market::{
    acquisition_cost_at, premium_share, Competitor, DealSizePoint, MarketYear, StrategyPosition,
    COMPETITORS, DEAL_SIZE_ECONOMICS, MARKET_VOLUMES, STRATEGY_MAP,
};
pub use pricing::{deal_premium, waterfall, PricingStep, StepKind, WaterfallBar, PRICING_STEPS};

use crate::assumptions::BaselineActuals;
use crate::error::{Result, ScenarioError};
use serde::Serialize;

/// A headline figure with optional year-on-year movement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineKpi {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub prior_year: Option<f64>,
    pub yoy_pct: Option<f64>,
}

/// Overview figures derived from the baseline
pub fn headline_kpis(baseline: &BaselineActuals) -> Vec<HeadlineKpi> {
    vec![
        HeadlineKpi {
            label: "AUM",
            value: baseline.current_aum,
            unit: "£bn",
            prior_year: Some(baseline.prior_year_aum),
            yoy_pct: Some(baseline.aum_growth_pct()),
        },
        HeadlineKpi {
            label: "Operating Profit",
            value: baseline.operating_profit,
            unit: "£m",
            prior_year: Some(baseline.prior_year_operating_profit),
            yoy_pct: Some(baseline.operating_profit_growth_pct()),
        },
        HeadlineKpi {
            label: "Total OPEX",
            value: baseline.total_operating_cost,
            unit: "£m",
            prior_year: None,
            yoy_pct: None,
        },
        HeadlineKpi {
            label: "Cost / AUM",
            value: baseline.cost_per_aum,
            unit: "bps",
            prior_year: None,
            yoy_pct: None,
        },
    ]
}

/// Named tables available for export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Headline,
    CostBreakdown,
    EfficiencyTrend,
    CostClassification,
    ScaleCurve,
    MarketVolumes,
    Competitors,
    DealSizeEconomics,
    StrategyMap,
    PricingWaterfall,
}

impl Table {
    pub const ALL: [Table; 10] = [
        Table::Headline,
        Table::CostBreakdown,
        Table::EfficiencyTrend,
        Table::CostClassification,
        Table::ScaleCurve,
        Table::MarketVolumes,
        Table::Competitors,
        Table::DealSizeEconomics,
        Table::StrategyMap,
        Table::PricingWaterfall,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::Headline => "headline",
            Table::CostBreakdown => "cost-breakdown",
            Table::EfficiencyTrend => "efficiency-trend",
            Table::CostClassification => "cost-classification",
            Table::ScaleCurve => "scale-curve",
            Table::MarketVolumes => "market-volumes",
            Table::Competitors => "competitors",
            Table::DealSizeEconomics => "deal-size-economics",
            Table::StrategyMap => "strategy-map",
            Table::PricingWaterfall => "pricing-waterfall",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Table::ALL
            .iter()
            .copied()
            .find(|t| t.name() == name)
            .ok_or_else(|| ScenarioError::UnknownTable(name.to_string()))
    }

    /// Table rows as a JSON array
    pub fn to_json(&self, baseline: &BaselineActuals) -> Result<serde_json::Value> {
        let value = match self {
            Table::Headline => serde_json::to_value(headline_kpis(baseline))?,
            Table::CostBreakdown => serde_json::to_value(&COST_BREAKDOWN)?,
            Table::EfficiencyTrend => serde_json::to_value(&EFFICIENCY_TREND)?,
            Table::CostClassification => serde_json::to_value(&COST_CLASSIFICATION)?,
            Table::ScaleCurve => serde_json::to_value(scale_curve())?,
            Table::MarketVolumes => serde_json::to_value(&MARKET_VOLUMES)?,
            Table::Competitors => serde_json::to_value(&COMPETITORS)?,
            Table::DealSizeEconomics => serde_json::to_value(&DEAL_SIZE_ECONOMICS)?,
            Table::StrategyMap => serde_json::to_value(&STRATEGY_MAP)?,
            Table::PricingWaterfall => serde_json::to_value(waterfall(&PRICING_STEPS))?,
        };
        Ok(value)
    }
}
