//! Reference-year actuals the scenario model is anchored to

use crate::error::{Result, ScenarioError};
use serde::{Deserialize, Serialize};

/// Reference-year figures (FY2024 annual report) plus the modelling constants
/// the scenario arithmetic is built on.
///
/// The "headline" fields are the static figures the dashboard shows as
/// current; the "model constants" feed `ScenarioModel::compute`. The two are
/// independent: running the model on its default inputs does not reproduce the
/// headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaselineActuals {
    // Headline figures
    /// Assets under management (£bn)
    pub current_aum: f64,
    /// Prior-year AUM (£bn)
    pub prior_year_aum: f64,
    /// Operating profit (£m)
    pub operating_profit: f64,
    /// Prior-year operating profit (£m)
    pub prior_year_operating_profit: f64,
    /// Total operating cost (£m)
    pub total_operating_cost: f64,
    /// Operating cost per unit of AUM (bps)
    pub cost_per_aum: f64,
    /// Operating cost per in-force policy (£)
    pub cost_per_policy: f64,
    /// Acquisition cost as a percentage of new business premium
    pub acquisition_cost_pct: f64,
    /// Deals written in the reference year
    pub deals_won: u32,
    /// New business premium written (£bn)
    pub new_business_premium: f64,
    /// AUM per employee (£m)
    pub aum_per_employee: f64,
    /// Matching adjustment benefit (£m)
    pub matching_adjustment_benefit: f64,
    /// Pricing advantage over the market-neutral spread (bps)
    pub pricing_advantage: f64,
    /// Expense loading in best estimate liabilities (bps)
    pub expense_loading: f64,

    // Model constants
    /// In-force policy count
    pub policy_count: u64,
    /// Full-time employees
    pub employee_count: u32,
    /// Investment management cost (£m)
    pub investment_mgmt_cost: f64,
    /// Regulatory and compliance cost (£m)
    pub regulatory_cost: f64,
    /// Corporate overhead cost (£m)
    pub overhead_cost: f64,
    /// Annual run-off of the back-book (£bn)
    pub assumed_run_off: f64,
    /// Average liability per individual policy (£)
    pub average_policy_liability: f64,
    /// Expense inflation the cost base is calibrated to (%)
    pub target_inflation: f64,
    /// Matching adjustment spread treated as market-neutral (bps)
    pub neutral_spread: f64,
    /// Acquisition cost per deal won under the flat cost model (£m)
    pub flat_acquisition_cost_per_deal: f64,
}

impl BaselineActuals {
    /// FY2024 reference figures
    pub fn reference_year() -> Self {
        Self {
            current_aum: 70.8,
            prior_year_aum: 61.2,
            operating_profit: 1779.0,
            prior_year_operating_profit: 1358.0,
            total_operating_cost: 277.0,
            cost_per_aum: 3.9,
            cost_per_policy: 275.0,
            acquisition_cost_pct: 1.2,
            deals_won: 6,
            new_business_premium: 15.7,
            aum_per_employee: 131.0,
            matching_adjustment_benefit: 884.0,
            pricing_advantage: 25.0,
            expense_loading: 30.0,

            policy_count: 1_004_920,
            employee_count: 560,
            investment_mgmt_cost: 55.0,
            regulatory_cost: 30.0,
            overhead_cost: 27.0,
            assumed_run_off: 3.8,
            average_policy_liability: 50_000.0,
            target_inflation: 3.0,
            neutral_spread: 100.0,
            // 1.5m per quote at a 15% win rate
            flat_acquisition_cost_per_deal: 10.0,
        }
    }

    /// Cost lines that do not scale with volume (£m, before inflation)
    pub fn fixed_cost_base(&self) -> f64 {
        self.investment_mgmt_cost + self.regulatory_cost + self.overhead_cost
    }

    /// Year-on-year AUM growth (%)
    pub fn aum_growth_pct(&self) -> f64 {
        growth_pct(self.prior_year_aum, self.current_aum)
    }

    /// Year-on-year operating profit growth (%)
    pub fn operating_profit_growth_pct(&self) -> f64 {
        growth_pct(self.prior_year_operating_profit, self.operating_profit)
    }

    /// Check the constants the model divides by or scales with
    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("currentAum", self.current_aum),
            ("priorYearAum", self.prior_year_aum),
            ("operatingProfit", self.operating_profit),
            ("priorYearOperatingProfit", self.prior_year_operating_profit),
            ("totalOperatingCost", self.total_operating_cost),
            ("costPerAum", self.cost_per_aum),
            ("costPerPolicy", self.cost_per_policy),
            ("acquisitionCostPct", self.acquisition_cost_pct),
            ("newBusinessPremium", self.new_business_premium),
            ("aumPerEmployee", self.aum_per_employee),
            ("matchingAdjustmentBenefit", self.matching_adjustment_benefit),
            ("pricingAdvantage", self.pricing_advantage),
            ("expenseLoading", self.expense_loading),
            ("investmentMgmtCost", self.investment_mgmt_cost),
            ("regulatoryCost", self.regulatory_cost),
            ("overheadCost", self.overhead_cost),
            ("assumedRunOff", self.assumed_run_off),
            ("averagePolicyLiability", self.average_policy_liability),
            ("targetInflation", self.target_inflation),
            ("neutralSpread", self.neutral_spread),
            ("flatAcquisitionCostPerDeal", self.flat_acquisition_cost_per_deal),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(ScenarioError::InvalidBaseline(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        // Cost lines and the quantities they scale with cannot go negative
        let non_negative = [
            ("currentAum", self.current_aum),
            ("investmentMgmtCost", self.investment_mgmt_cost),
            ("regulatoryCost", self.regulatory_cost),
            ("overheadCost", self.overhead_cost),
            ("neutralSpread", self.neutral_spread),
            ("flatAcquisitionCostPerDeal", self.flat_acquisition_cost_per_deal),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ScenarioError::InvalidBaseline(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if self.employee_count == 0 {
            return Err(ScenarioError::InvalidBaseline(
                "employeeCount must be positive".to_string(),
            ));
        }
        if self.average_policy_liability <= 0.0 {
            return Err(ScenarioError::InvalidBaseline(
                "averagePolicyLiability must be positive".to_string(),
            ));
        }
        if self.prior_year_aum <= 0.0 || self.prior_year_operating_profit <= 0.0 {
            return Err(ScenarioError::InvalidBaseline(
                "prior-year figures must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Overwrite a single field by its camelCase name
    pub fn set_field(&mut self, name: &str, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(ScenarioError::InvalidBaseline(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        match name {
            "currentAum" => self.current_aum = value,
            "priorYearAum" => self.prior_year_aum = value,
            "operatingProfit" => self.operating_profit = value,
            "priorYearOperatingProfit" => self.prior_year_operating_profit = value,
            "totalOperatingCost" => self.total_operating_cost = value,
            "costPerAum" => self.cost_per_aum = value,
            "costPerPolicy" => self.cost_per_policy = value,
            "acquisitionCostPct" => self.acquisition_cost_pct = value,
            "dealsWon" => self.deals_won = whole_number(name, value, u32::MAX.into())? as u32,
            "newBusinessPremium" => self.new_business_premium = value,
            "aumPerEmployee" => self.aum_per_employee = value,
            "matchingAdjustmentBenefit" => self.matching_adjustment_benefit = value,
            "pricingAdvantage" => self.pricing_advantage = value,
            "expenseLoading" => self.expense_loading = value,
            "policyCount" => self.policy_count = whole_number(name, value, u64::MAX)?,
            "employeeCount" => {
                self.employee_count = whole_number(name, value, u32::MAX.into())? as u32
            }
            "investmentMgmtCost" => self.investment_mgmt_cost = value,
            "regulatoryCost" => self.regulatory_cost = value,
            "overheadCost" => self.overhead_cost = value,
            "assumedRunOff" => self.assumed_run_off = value,
            "averagePolicyLiability" => self.average_policy_liability = value,
            "targetInflation" => self.target_inflation = value,
            "neutralSpread" => self.neutral_spread = value,
            "flatAcquisitionCostPerDeal" => self.flat_acquisition_cost_per_deal = value,
            _ => {
                return Err(ScenarioError::InvalidBaseline(format!(
                    "unknown baseline field '{}'",
                    name
                )))
            }
        }

        Ok(())
    }
}

impl Default for BaselineActuals {
    fn default() -> Self {
        Self::reference_year()
    }
}

fn growth_pct(prior: f64, current: f64) -> f64 {
    (current / prior - 1.0) * 100.0
}

/// `value` as a count no larger than `max`
fn whole_number(name: &str, value: f64, max: u64) -> Result<u64> {
    // u64::MAX as f64 rounds up to 2^64, so the bound is exclusive there
    let in_range = if max == u64::MAX {
        value < max as f64
    } else {
        value <= max as f64
    };
    if value < 0.0 || value.fract() != 0.0 || !in_range {
        return Err(ScenarioError::InvalidBaseline(format!(
            "{} must be a whole number in [0, {}], got {}",
            name, max, value
        )));
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_year_is_valid() {
        assert!(BaselineActuals::reference_year().validate().is_ok());
    }

    #[test]
    fn test_fixed_cost_base() {
        let baseline = BaselineActuals::default();
        assert_abs_diff_eq!(baseline.fixed_cost_base(), 112.0);
    }

    #[test]
    fn test_headline_growth_rates() {
        let baseline = BaselineActuals::default();
        // Dashboard rounds these to 16% and 31%
        assert_eq!(baseline.aum_growth_pct().round(), 16.0);
        assert_eq!(baseline.operating_profit_growth_pct().round(), 31.0);
    }

    #[test]
    fn test_set_field() {
        let mut baseline = BaselineActuals::default();
        baseline.set_field("assumedRunOff", 5.0).unwrap();
        baseline.set_field("employeeCount", 600.0).unwrap();
        assert_eq!(baseline.assumed_run_off, 5.0);
        assert_eq!(baseline.employee_count, 600);

        assert!(baseline.set_field("employeeCount", 600.5).is_err());
        assert!(baseline.set_field("noSuchField", 1.0).is_err());
        assert!(baseline.set_field("currentAum", f64::NAN).is_err());
    }

    #[test]
    fn test_whole_number_bounds_per_field() {
        let mut baseline = BaselineActuals::default();

        // Beyond u32 but a valid policy count
        baseline.set_field("policyCount", 5_000_000_000.0).unwrap();
        assert_eq!(baseline.policy_count, 5_000_000_000);

        assert!(baseline.set_field("employeeCount", 5_000_000_000.0).is_err());
        assert!(baseline.set_field("dealsWon", 5_000_000_000.0).is_err());
        assert!(baseline.set_field("policyCount", 2f64.powi(64)).is_err());
        assert!(baseline.set_field("policyCount", -1.0).is_err());
    }

    #[test]
    fn test_validate_rejects_negative_costs() {
        for field in [
            "currentAum",
            "investmentMgmtCost",
            "regulatoryCost",
            "overheadCost",
            "neutralSpread",
            "flatAcquisitionCostPerDeal",
        ] {
            let mut baseline = BaselineActuals::default();
            baseline.set_field(field, -1.0).unwrap();
            assert!(baseline.validate().is_err(), "{} = -1 accepted", field);
        }

        // Zero is a legitimate cost line
        let mut baseline = BaselineActuals::default();
        baseline.overhead_cost = 0.0;
        assert!(baseline.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_divisors() {
        let mut baseline = BaselineActuals::default();
        baseline.employee_count = 0;
        assert!(baseline.validate().is_err());

        let mut baseline = BaselineActuals::default();
        baseline.average_policy_liability = 0.0;
        assert!(baseline.validate().is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_reference_year() {
        let baseline: BaselineActuals =
            serde_json::from_str(r#"{ "currentAum": 80.0, "employeeCount": 600 }"#).unwrap();
        assert_eq!(baseline.current_aum, 80.0);
        assert_eq!(baseline.employee_count, 600);
        assert_eq!(baseline.policy_count, 1_004_920);
    }
}
