//! Scenario levers: the adjustable business assumptions and their domains

use crate::error::{DomainViolation, Result, ScenarioError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Admissible range and slider granularity for a lever
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeverDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Decimal places of `step`, used to strip float noise after snapping
    pub precision: u32,
}

impl LeverDomain {
    const fn new(min: f64, max: f64, step: f64, precision: u32) -> Self {
        Self { min, max, step, precision }
    }

    /// Finite and within [min, max]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Clamp into range and snap to the nearest step measured from `min`.
    /// Returns None for NaN.
    pub fn clamp(&self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        let bounded = value.max(self.min).min(self.max);
        let steps = ((bounded - self.min) / self.step).round();
        let scale = 10f64.powi(self.precision as i32);
        let snapped = ((self.min + steps * self.step) * scale).round() / scale;
        Some(snapped.max(self.min).min(self.max))
    }

    /// Number of slider positions from min to max inclusive
    pub fn positions(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }

    /// Value at slider position `index` (0 = min)
    pub fn value_at(&self, index: usize) -> f64 {
        let scale = 10f64.powi(self.precision as i32);
        ((self.min + index as f64 * self.step) * scale).round() / scale
    }
}

/// One adjustable input of the scenario engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Lever {
    NewBusinessPremium,
    AverageDealSize,
    MarketWinRate,
    CostPerQuote,
    CostPerPolicy,
    TechnologySpend,
    MatchingAdjustmentSpread,
    ExpenseInflation,
}

impl Lever {
    /// All levers in slider order
    pub const ALL: [Lever; 8] = [
        Lever::NewBusinessPremium,
        Lever::AverageDealSize,
        Lever::CostPerQuote,
        Lever::MarketWinRate,
        Lever::CostPerPolicy,
        Lever::TechnologySpend,
        Lever::MatchingAdjustmentSpread,
        Lever::ExpenseInflation,
    ];

    pub fn domain(&self) -> LeverDomain {
        match self {
            Lever::NewBusinessPremium => LeverDomain::new(5.0, 25.0, 0.5, 1),
            Lever::AverageDealSize => LeverDomain::new(100.0, 5000.0, 100.0, 0),
            Lever::MarketWinRate => LeverDomain::new(5.0, 40.0, 1.0, 0),
            Lever::CostPerQuote => LeverDomain::new(0.5, 5.0, 0.1, 1),
            Lever::CostPerPolicy => LeverDomain::new(30.0, 150.0, 5.0, 0),
            Lever::TechnologySpend => LeverDomain::new(15.0, 60.0, 1.0, 0),
            Lever::MatchingAdjustmentSpread => LeverDomain::new(50.0, 200.0, 5.0, 0),
            Lever::ExpenseInflation => LeverDomain::new(1.5, 5.0, 0.1, 1),
        }
    }

    /// Field name carried by lever-change events
    pub fn key(&self) -> &'static str {
        match self {
            Lever::NewBusinessPremium => "newBusinessPremium",
            Lever::AverageDealSize => "averageDealSize",
            Lever::MarketWinRate => "marketWinRate",
            Lever::CostPerQuote => "costPerQuote",
            Lever::CostPerPolicy => "costPerPolicy",
            Lever::TechnologySpend => "technologySpend",
            Lever::MatchingAdjustmentSpread => "matchingAdjustmentSpread",
            Lever::ExpenseInflation => "expenseInflation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Lever::NewBusinessPremium => "Annual New Biz",
            Lever::AverageDealSize => "Avg Deal Size",
            Lever::MarketWinRate => "Market Win Rate",
            Lever::CostPerQuote => "Cost / Quote",
            Lever::CostPerPolicy => "Cost / Policy",
            Lever::TechnologySpend => "Tech Spend",
            Lever::MatchingAdjustmentSpread => "Matching Adj",
            Lever::ExpenseInflation => "1Y Exp Inflation",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Lever::NewBusinessPremium => "£bn",
            Lever::AverageDealSize | Lever::CostPerQuote | Lever::TechnologySpend => "£m",
            Lever::MarketWinRate | Lever::ExpenseInflation => "%",
            Lever::CostPerPolicy => "£",
            Lever::MatchingAdjustmentSpread => "bps",
        }
    }

    /// Parse an event field name
    pub fn from_key(key: &str) -> Result<Self> {
        Lever::ALL
            .iter()
            .copied()
            .find(|lever| lever.key() == key)
            .ok_or_else(|| ScenarioError::UnknownLever(key.to_string()))
    }
}

impl fmt::Display for Lever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single lever movement from the interaction layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeverChange {
    pub lever: Lever,
    pub value: f64,
}

impl LeverChange {
    pub fn new(lever: Lever, value: f64) -> Self {
        Self { lever, value }
    }

    /// Build from the `(fieldName, newValue)` pair the presentation layer sends
    pub fn parse(field_name: &str, value: f64) -> Result<Self> {
        Ok(Self {
            lever: Lever::from_key(field_name)?,
            value,
        })
    }
}

/// Current lever positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioInputs {
    /// Annual new business premium (£bn)
    pub new_business_premium: f64,
    /// Average deal size (£m)
    pub average_deal_size: f64,
    /// Share of bids converted into deals (%)
    pub market_win_rate: f64,
    /// Cost of producing one quote (£m)
    pub cost_per_quote: f64,
    /// Administration cost per policy (£)
    pub cost_per_policy: f64,
    /// Technology spend (£m)
    pub technology_spend: f64,
    /// Matching adjustment spread (bps)
    pub matching_adjustment_spread: f64,
    /// One-year expense inflation (%)
    pub expense_inflation: f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            new_business_premium: 15.7,
            average_deal_size: 1700.0,
            market_win_rate: 15.0,
            cost_per_quote: 1.5,
            cost_per_policy: 80.0,
            technology_spend: 35.0,
            matching_adjustment_spread: 125.0,
            expense_inflation: 3.0,
        }
    }
}

impl ScenarioInputs {
    pub fn get(&self, lever: Lever) -> f64 {
        match lever {
            Lever::NewBusinessPremium => self.new_business_premium,
            Lever::AverageDealSize => self.average_deal_size,
            Lever::MarketWinRate => self.market_win_rate,
            Lever::CostPerQuote => self.cost_per_quote,
            Lever::CostPerPolicy => self.cost_per_policy,
            Lever::TechnologySpend => self.technology_spend,
            Lever::MatchingAdjustmentSpread => self.matching_adjustment_spread,
            Lever::ExpenseInflation => self.expense_inflation,
        }
    }

    /// Set a lever without any range checking
    pub fn set(&mut self, lever: Lever, value: f64) {
        let slot = match lever {
            Lever::NewBusinessPremium => &mut self.new_business_premium,
            Lever::AverageDealSize => &mut self.average_deal_size,
            Lever::MarketWinRate => &mut self.market_win_rate,
            Lever::CostPerQuote => &mut self.cost_per_quote,
            Lever::CostPerPolicy => &mut self.cost_per_policy,
            Lever::TechnologySpend => &mut self.technology_spend,
            Lever::MatchingAdjustmentSpread => &mut self.matching_adjustment_spread,
            Lever::ExpenseInflation => &mut self.expense_inflation,
        };
        *slot = value;
    }

    /// Copy with one lever moved
    pub fn with(mut self, lever: Lever, value: f64) -> Self {
        self.set(lever, value);
        self
    }

    /// Every lever inside its declared range
    pub fn validate(&self) -> std::result::Result<(), DomainViolation> {
        for lever in Lever::ALL {
            let value = self.get(lever);
            let domain = lever.domain();
            if !domain.contains(value) {
                return Err(DomainViolation::OutOfRange {
                    lever,
                    value,
                    min: domain.min,
                    max: domain.max,
                });
            }
        }
        Ok(())
    }
}
