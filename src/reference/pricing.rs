//! Pricing waterfall for a £1bn bulk purchase annuity deal

use serde::Serialize;

/// How a step moves the running price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StepKind {
    /// Starting value
    Primary,
    /// Adds to the price
    Cost,
    /// Adds to the price
    Profit,
    /// Reduces the price
    Benefit,
    /// Closing value, equal to the running price
    Total,
}

/// A waterfall input: label, kind and size (£m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingStep {
    pub name: &'static str,
    pub kind: StepKind,
    pub amount: f64,
}

pub static PRICING_STEPS: [PricingStep; 8] = [
    PricingStep { name: "Best Estimate Liabilities", kind: StepKind::Primary, amount: 920.0 },
    PricingStep { name: "Expense Loading", kind: StepKind::Cost, amount: 25.0 },
    PricingStep { name: "Risk Margin", kind: StepKind::Cost, amount: 30.0 },
    PricingStep { name: "Acquisition Costs", kind: StepKind::Cost, amount: 8.0 },
    PricingStep { name: "Profit Target", kind: StepKind::Profit, amount: 45.0 },
    PricingStep { name: "Matching Adjustment", kind: StepKind::Benefit, amount: 75.0 },
    PricingStep { name: "Longevity Reinsurance", kind: StepKind::Benefit, amount: 15.0 },
    PricingStep { name: "Deal Premium", kind: StepKind::Total, amount: 0.0 },
];

/// A positioned bar: floats from `base` to `base + height`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterfallBar {
    pub name: &'static str,
    pub kind: StepKind,
    pub base: f64,
    pub height: f64,
}

/// Lay out the steps as floating bars
pub fn waterfall(steps: &[PricingStep]) -> Vec<WaterfallBar> {
    let mut running = 0.0;
    steps
        .iter()
        .map(|step| {
            let (base, height) = match step.kind {
                StepKind::Primary => {
                    running = step.amount;
                    (0.0, step.amount)
                }
                StepKind::Cost | StepKind::Profit => {
                    let base = running;
                    running += step.amount;
                    (base, step.amount)
                }
                StepKind::Benefit => {
                    running -= step.amount;
                    (running, step.amount)
                }
                StepKind::Total => (0.0, running),
            };
            WaterfallBar {
                name: step.name,
                kind: step.kind,
                base,
                height,
            }
        })
        .collect()
}

/// Final deal premium (£m)
pub fn deal_premium(steps: &[PricingStep]) -> f64 {
    waterfall(steps).last().map(|bar| bar.height).unwrap_or(0.0)
}
