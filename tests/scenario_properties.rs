//! Behavioural properties of the scenario model across the lever domains

use approx::assert_abs_diff_eq;
use cost_economics::reference::{total_cost, EFFICIENCY_TREND};
use cost_economics::scenario::{compare_all, Metric, MetricComparison};
use cost_economics::{
    compute, BaselineActuals, Lever, Outcome, ScenarioConfig, ScenarioInputs, ScenarioModel,
};

fn sweep_values(lever: Lever) -> Vec<f64> {
    let domain = lever.domain();
    (0..domain.positions()).map(|i| domain.value_at(i)).collect()
}

#[test]
fn test_compute_is_deterministic() {
    let baseline = BaselineActuals::default();
    let inputs = ScenarioInputs::default()
        .with(Lever::ExpenseInflation, 4.3)
        .with(Lever::MarketWinRate, 11.0);

    let a = compute(&inputs, &baseline).unwrap();
    let b = compute(&inputs, &baseline).unwrap();

    assert_eq!(a, b);
    assert_eq!(
        a.components.total_operating_cost.to_bits(),
        b.components.total_operating_cost.to_bits()
    );
    assert_eq!(a.cost_per_aum.to_bits(), b.cost_per_aum.to_bits());
}

#[test]
fn test_cost_per_policy_monotonic() {
    let baseline = BaselineActuals::default();
    let results: Vec<_> = sweep_values(Lever::CostPerPolicy)
        .into_iter()
        .map(|v| compute(&ScenarioInputs::default().with(Lever::CostPerPolicy, v), &baseline).unwrap())
        .collect();

    for pair in results.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        assert!(hi.components.total_operating_cost > lo.components.total_operating_cost);
        assert!(hi.components.cost_per_policy() > lo.components.cost_per_policy());
        assert!(hi.total_operating_cost > lo.total_operating_cost);
        assert!(hi.cost_per_policy > lo.cost_per_policy);
    }
}

#[test]
fn test_win_rate_monotonic() {
    let baseline = BaselineActuals::default();
    let results: Vec<_> = sweep_values(Lever::MarketWinRate)
        .into_iter()
        .map(|v| compute(&ScenarioInputs::default().with(Lever::MarketWinRate, v), &baseline).unwrap())
        .collect();

    for pair in results.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        assert!(hi.components.acquisition_cost < lo.components.acquisition_cost);
        assert!(hi.acquisition_cost_pct <= lo.acquisition_cost_pct);
    }

    // 5% needs 180 bids for 9 deals, 40% only 22.5
    assert_abs_diff_eq!(results[0].components.bids_required, 180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        results.last().unwrap().components.bids_required,
        22.5,
        epsilon = 1e-9
    );
}

#[test]
fn test_deals_won_at_least_one_across_extremes() {
    let baseline = BaselineActuals::default();
    for premium in sweep_values(Lever::NewBusinessPremium) {
        for size in [100.0, 2500.0, 5000.0] {
            let inputs = ScenarioInputs::default()
                .with(Lever::NewBusinessPremium, premium)
                .with(Lever::AverageDealSize, size);
            assert!(compute(&inputs, &baseline).unwrap().deals_won >= 1);
        }
    }
}

#[test]
fn test_formula_regression_vector() {
    let metrics = compute(&ScenarioInputs::default(), &BaselineActuals::default()).unwrap();

    assert_eq!(metrics.deals_won, 9);
    assert_eq!(metrics.total_operating_cost, 343);
    assert_eq!(metrics.cost_per_aum, 0.4);
    assert_eq!(metrics.cost_per_policy, 260);
    assert_eq!(metrics.acquisition_cost_pct, 0.6);
    assert_eq!(metrics.projected_aum, 82.7);
    assert_eq!(metrics.aum_per_employee, 148);
    assert_eq!(metrics.matching_adjustment_benefit, 1034);
    assert_eq!(metrics.pricing_advantage, 25);
    assert_eq!(metrics.expense_loading, 0.3);
    assert_eq!(metrics.total_policies, 1_318_920);
}

#[test]
fn test_static_baseline_table() {
    // Headline figures are reported actuals, not model output
    let baseline = BaselineActuals::default();
    assert_eq!(baseline.total_operating_cost, 277.0);
    assert_eq!(baseline.cost_per_aum, 3.9);
    assert_eq!(baseline.deals_won, 6);
    assert_eq!(baseline.total_operating_cost, total_cost());

    let fy2024 = EFFICIENCY_TREND.last().unwrap();
    assert_eq!(fy2024.cost_per_aum, baseline.cost_per_aum);
    assert_eq!(fy2024.acq_cost_pct, baseline.acquisition_cost_pct);
}

#[test]
fn test_zero_delta_is_neutral() {
    let baseline = BaselineActuals::default();
    let metrics = compute(&ScenarioInputs::default(), &baseline).unwrap();

    for metric in Metric::ALL {
        let value = metric.scenario_value(&metrics);
        let row = MetricComparison::new(metric, value, value);
        assert_eq!(row.outcome, Outcome::Neutral, "{:?}", metric);
    }

    // Default premium and spread echo the baseline exactly
    let rows = compare_all(&baseline, &metrics);
    let neutral: Vec<_> = rows
        .iter()
        .filter(|r| r.outcome == Outcome::Neutral)
        .map(|r| r.metric)
        .collect();
    assert!(neutral.contains(&Metric::NewBusinessPremium));
    assert!(neutral.contains(&Metric::PricingAdvantage));
}

#[test]
fn test_domain_rejection() {
    let baseline = BaselineActuals::default();
    for (lever, value) in [
        (Lever::MarketWinRate, 0.0),
        (Lever::AverageDealSize, 0.0),
        (Lever::ExpenseInflation, f64::INFINITY),
        (Lever::NewBusinessPremium, -1.0),
    ] {
        let result = compute(&ScenarioInputs::default().with(lever, value), &baseline);
        match result {
            Err(e) => assert!(e.is_domain_violation(), "{}: {:?}", lever, e),
            Ok(m) => panic!("{} = {} produced {:?}", lever, value, m),
        }
    }
}

#[test]
fn test_inflation_neutral_at_target() {
    let baseline = BaselineActuals::default();
    let inputs = ScenarioInputs::default().with(Lever::ExpenseInflation, baseline.target_inflation);
    let c = compute(&inputs, &baseline).unwrap().components;

    assert_eq!(c.inflation_multiplier, 1.0);
    assert_eq!(c.fixed_overheads, baseline.fixed_cost_base());
    assert_eq!(c.technology_spend, inputs.technology_spend);
}

#[test]
fn test_outputs_finite_over_domain_corners() {
    let model = ScenarioModel::reference();
    let flat = ScenarioModel::new(BaselineActuals::default(), ScenarioConfig::flat());

    for corner in 0..(1u32 << 8) {
        let mut inputs = ScenarioInputs::default();
        for (bit, lever) in Lever::ALL.iter().enumerate() {
            let domain = lever.domain();
            let value = if corner & (1 << bit) == 0 { domain.min } else { domain.max };
            inputs.set(*lever, value);
        }
        for m in [&model, &flat] {
            let metrics = m.compute(&inputs).unwrap();
            assert!(metrics.cost_per_aum.is_finite());
            assert!(metrics.expense_loading.is_finite());
            assert!(metrics.components.total_operating_cost > 0.0);
        }
    }
}
