//! Sweep one lever across its slider domain
//!
//! Writes one CSV row per lever position with the derived metrics, all other
//! levers held at their defaults.

use anyhow::{Context, Result};
use clap::Parser;
use cost_economics::assumptions::{load_baseline, BaselineActuals, Lever, ScenarioInputs};
use cost_economics::scenario::{ScenarioConfig, ScenarioModel};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sweep_lever", about = "Sweep a scenario lever and write metrics to CSV")]
struct Cli {
    /// Lever field name, e.g. marketWinRate
    lever: String,

    /// Output CSV path
    #[arg(short, long, default_value = "lever_sweep_output.csv")]
    output: PathBuf,

    /// Baseline override file (.csv or .json)
    #[arg(long)]
    baseline: Option<PathBuf>,

    /// Use the flat cost model
    #[arg(long)]
    flat: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let lever = Lever::from_key(&cli.lever)?;

    let baseline = match &cli.baseline {
        Some(path) => load_baseline(path)
            .with_context(|| format!("failed to load baseline {}", path.display()))?,
        None => BaselineActuals::reference_year(),
    };
    let config = if cli.flat {
        ScenarioConfig::flat()
    } else {
        ScenarioConfig::default()
    };
    let model = ScenarioModel::new(baseline, config);

    let start = Instant::now();
    let points = model.sweep(&ScenarioInputs::default(), lever)?;
    log::info!(
        "swept {} over {} positions in {:?}",
        lever,
        points.len(),
        start.elapsed()
    );

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;

    writer.write_record([
        lever.key(),
        "TotalOpex",
        "CostPerAUM",
        "CostPerPolicy",
        "AcqCostPct",
        "DealsWon",
        "ProjectedAUM",
        "AUMPerFTE",
        "MABenefit",
        "PricingEdge",
        "ExpenseLoading",
        "TotalPolicies",
        "BidsRequired",
        "AcquisitionCost",
    ])?;

    for point in &points {
        let m = &point.metrics;
        writer.write_record([
            point.value.to_string(),
            m.total_operating_cost.to_string(),
            format!("{:.1}", m.cost_per_aum),
            m.cost_per_policy.to_string(),
            format!("{:.1}", m.acquisition_cost_pct),
            m.deals_won.to_string(),
            format!("{:.1}", m.projected_aum),
            m.aum_per_employee.to_string(),
            m.matching_adjustment_benefit.to_string(),
            m.pricing_advantage.to_string(),
            format!("{:.1}", m.expense_loading),
            m.total_policies.to_string(),
            format!("{:.2}", m.components.bids_required),
            format!("{:.4}", m.components.acquisition_cost),
        ])?;
    }
    writer.flush()?;

    println!("Output written to {}", cli.output.display());

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        println!("\n{} sweep summary:", lever.label());
        println!(
            "  {:>8} {}: OPEX=£{}m  Cost/AUM={:.1}bps",
            first.value,
            lever.unit(),
            first.metrics.total_operating_cost,
            first.metrics.cost_per_aum
        );
        println!(
            "  {:>8} {}: OPEX=£{}m  Cost/AUM={:.1}bps",
            last.value,
            lever.unit(),
            last.metrics.total_operating_cost,
            last.metrics.cost_per_aum
        );
    }

    Ok(())
}
