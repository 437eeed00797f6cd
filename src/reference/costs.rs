//! Cost structure tables

use serde::Serialize;

/// One line of the operating cost breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostLine {
    pub name: &'static str,
    /// £m
    pub value: f64,
    pub description: &'static str,
}

/// FY2024 operating cost by category (£m)
pub static COST_BREAKDOWN: [CostLine; 6] = [
    CostLine { name: "Deal Acquisition", value: 80.0, description: "Pricing, legal, due diligence" },
    CostLine { name: "Investment Management", value: 55.0, description: "In-house + external managers" },
    CostLine { name: "Policy Administration", value: 50.0, description: "Pensioner payroll, data, comms" },
    CostLine { name: "Technology & Data", value: 35.0, description: "Proprietary platform, cyber" },
    CostLine { name: "Regulatory & Compliance", value: 30.0, description: "Solvency II, audit, PRA levies" },
    CostLine { name: "Corporate Overheads", value: 27.0, description: "Finance, HR, premises" },
];

/// Sum of the cost breakdown (£m)
pub fn total_cost() -> f64 {
    COST_BREAKDOWN.iter().map(|line| line.value).sum()
}

/// Share of total cost for each line (%)
pub fn cost_shares() -> Vec<(&'static str, f64)> {
    let total = total_cost();
    COST_BREAKDOWN
        .iter()
        .map(|line| (line.name, line.value / total * 100.0))
        .collect()
}

/// Unit-cost ratios for one financial year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyYear {
    pub year: &'static str,
    /// bps
    pub cost_per_aum: f64,
    /// %
    pub acq_cost_pct: f64,
    /// £
    pub cost_per_policy: f64,
}

pub static EFFICIENCY_TREND: [EfficiencyYear; 3] = [
    EfficiencyYear { year: "FY2022", cost_per_aum: 4.9, acq_cost_pct: 4.5, cost_per_policy: 95.0 },
    EfficiencyYear { year: "FY2023", cost_per_aum: 5.2, acq_cost_pct: 1.6, cost_per_policy: 124.0 },
    EfficiencyYear { year: "FY2024", cost_per_aum: 3.9, acq_cost_pct: 1.2, cost_per_policy: 80.0 },
];

/// Strategic treatment of a cost line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CostClass {
    /// Spend that grows the business
    ValueAccelerator,
    /// Spend fixed by regulation
    RegulatoryAnchor,
    /// Spend to drive down
    EfficiencyTarget,
}

impl CostClass {
    pub fn title(&self) -> &'static str {
        match self {
            CostClass::ValueAccelerator => "Value Accelerators",
            CostClass::RegulatoryAnchor => "Regulatory Anchors",
            CostClass::EfficiencyTarget => "Efficiency Targets",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassifiedCost {
    pub class: CostClass,
    pub title: &'static str,
    /// £m
    pub cost: f64,
    pub rationale: &'static str,
}

pub static COST_CLASSIFICATION: [ClassifiedCost; 9] = [
    ClassifiedCost { class: CostClass::ValueAccelerator, title: "Pricing & Actuarial", cost: 6.1, rationale: "Firepower → higher win rate" },
    ClassifiedCost { class: CostClass::ValueAccelerator, title: "Investment Origination", cost: 45.0, rationale: "Illiquid sourcing → MA" },
    ClassifiedCost { class: CostClass::ValueAccelerator, title: "Platform Tech", cost: 35.0, rationale: "Automation → cost leverage" },
    ClassifiedCost { class: CostClass::RegulatoryAnchor, title: "Regulatory Reporting", cost: 12.0, rationale: "QRTs, SFCR, Solvency II" },
    ClassifiedCost { class: CostClass::RegulatoryAnchor, title: "Internal Model", cost: 5.0, rationale: "PRA validation demands" },
    ClassifiedCost { class: CostClass::RegulatoryAnchor, title: "External Audit", cost: 7.0, rationale: "IFRS 17 complexity" },
    ClassifiedCost { class: CostClass::EfficiencyTarget, title: "Policy Administration", cost: 50.0, rationale: "Drive to £55/policy" },
    ClassifiedCost { class: CostClass::EfficiencyTarget, title: "Deal Quotation", cost: 12.0, rationale: "Streamline sub-£500m" },
    ClassifiedCost { class: CostClass::EfficiencyTarget, title: "Corporate Overhead", cost: 27.0, rationale: "Shrink as % of AUM" },
];

/// Entries in one class, in display order
pub fn classified(class: CostClass) -> impl Iterator<Item = &'static ClassifiedCost> {
    COST_CLASSIFICATION.iter().filter(move |c| c.class == class)
}

/// Unit cost at one AUM level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalePoint {
    /// £bn
    pub aum: f64,
    pub fixed_bps: f64,
    pub variable_bps: f64,
    pub total_bps: f64,
}

const SCALE_FIXED_COSTS: f64 = 150.0;
const SCALE_VARIABLE_BPS: f64 = 1.5;

/// Unit cost across AUM 50..120 £bn: fixed costs dilute, variable rate does not
pub fn scale_curve() -> Vec<ScalePoint> {
    (0..15)
        .map(|i| {
            let aum = 50.0 + i as f64 * 5.0;
            let fixed_bps = SCALE_FIXED_COSTS / (aum * 10.0);
            let total_bps = fixed_bps + SCALE_VARIABLE_BPS;
            ScalePoint {
                aum,
                fixed_bps: round1(fixed_bps),
                variable_bps: SCALE_VARIABLE_BPS,
                total_bps: round1(total_bps),
            }
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
