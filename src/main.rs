//! Cost Economics CLI
//!
//! Command-line interface for the scenario engine and reference tables

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use cost_economics::assumptions::{load_baseline, BaselineActuals, Lever, ScenarioInputs};
use cost_economics::reference::{headline_kpis, Table};
use cost_economics::scenario::{compare_all, MetricComparison, Outcome, ScenarioConfig, ScenarioModel};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cost_economics", version, about = "Cost economics scenario engine")]
struct Cli {
    /// Baseline override file (.csv field,value rows or .json object)
    #[arg(long, global = true)]
    baseline: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print reference-year headline figures
    Baseline,
    /// Run one scenario and compare it with the baseline
    Scenario(ScenarioArgs),
    /// Export a reference table as JSON
    Tables {
        /// Table name, e.g. cost-breakdown; omit to list names
        name: Option<String>,
    },
}

#[derive(Args)]
struct ScenarioArgs {
    /// Annual new business premium (£bn)
    #[arg(long)]
    new_business_premium: Option<f64>,
    /// Average deal size (£m)
    #[arg(long)]
    average_deal_size: Option<f64>,
    /// Market win rate (%)
    #[arg(long)]
    market_win_rate: Option<f64>,
    /// Cost per quote (£m)
    #[arg(long)]
    cost_per_quote: Option<f64>,
    /// Administration cost per policy (£)
    #[arg(long)]
    cost_per_policy: Option<f64>,
    /// Technology spend (£m)
    #[arg(long)]
    technology_spend: Option<f64>,
    /// Matching adjustment spread (bps)
    #[arg(long)]
    matching_adjustment_spread: Option<f64>,
    /// One-year expense inflation (%)
    #[arg(long)]
    expense_inflation: Option<f64>,

    /// Use the flat cost model (no inflation scaling, constant cost per quote)
    #[arg(long)]
    flat: bool,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

impl ScenarioArgs {
    fn inputs(&self) -> ScenarioInputs {
        let overrides = [
            (Lever::NewBusinessPremium, self.new_business_premium),
            (Lever::AverageDealSize, self.average_deal_size),
            (Lever::MarketWinRate, self.market_win_rate),
            (Lever::CostPerQuote, self.cost_per_quote),
            (Lever::CostPerPolicy, self.cost_per_policy),
            (Lever::TechnologySpend, self.technology_spend),
            (Lever::MatchingAdjustmentSpread, self.matching_adjustment_spread),
            (Lever::ExpenseInflation, self.expense_inflation),
        ];

        let mut inputs = ScenarioInputs::default();
        for (lever, value) in overrides {
            if let Some(value) = value {
                inputs.set(lever, value);
            }
        }
        inputs
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
    Csv,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let baseline = match &cli.baseline {
        Some(path) => {
            log::info!("loading baseline overrides from {}", path.display());
            load_baseline(path)
                .with_context(|| format!("failed to load baseline {}", path.display()))?
        }
        None => BaselineActuals::reference_year(),
    };

    match cli.command {
        Command::Baseline => print_baseline(&baseline),
        Command::Scenario(args) => run_scenario(baseline, &args)?,
        Command::Tables { name } => print_table(&baseline, name.as_deref())?,
    }

    Ok(())
}

fn print_baseline(baseline: &BaselineActuals) {
    println!("Reference Year Baseline");
    println!("=======================\n");

    for kpi in headline_kpis(baseline) {
        print!("  {:<18} {:>10.1} {}", kpi.label, kpi.value, kpi.unit);
        if let (Some(prior), Some(yoy)) = (kpi.prior_year, kpi.yoy_pct) {
            print!("  ({:+.0}% YoY from {:.1})", yoy, prior);
        }
        println!();
    }

    println!("\nModel constants:");
    println!("  Policies in force:      {}", baseline.policy_count);
    println!("  Employees:              {}", baseline.employee_count);
    println!("  Fixed cost base:        £{:.0}m", baseline.fixed_cost_base());
    println!("  Assumed run-off:        £{:.1}bn", baseline.assumed_run_off);
    println!("  Avg policy liability:   £{:.0}", baseline.average_policy_liability);
    println!("  Target inflation:       {:.1}%", baseline.target_inflation);
    println!("  Neutral MA spread:      {:.0} bps", baseline.neutral_spread);
}

fn run_scenario(baseline: BaselineActuals, args: &ScenarioArgs) -> Result<()> {
    let config = if args.flat {
        ScenarioConfig::flat()
    } else {
        ScenarioConfig::default()
    };
    let model = ScenarioModel::new(baseline, config);
    let inputs = args.inputs();

    let metrics = model
        .compute(&inputs)
        .context("scenario rejected; adjust the lever and retry")?;
    let rows = compare_all(model.baseline(), &metrics);

    match args.format {
        Format::Json => {
            let report = serde_json::json!({
                "inputs": inputs,
                "config": model.config(),
                "metrics": metrics,
                "comparison": rows,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Format::Csv => write_comparison_csv(&rows)?,
        Format::Table => {
            println!("Scenario inputs:");
            for lever in Lever::ALL {
                println!(
                    "  {:<18} {:>8} {}",
                    lever.label(),
                    inputs.get(lever),
                    lever.unit()
                );
            }
            println!();
            print_comparison(&rows);
            println!(
                "\nTotal policies: {}  Bids required: {:.1}  Inflation multiplier: {:.3}",
                metrics.total_policies,
                metrics.components.bids_required,
                metrics.components.inflation_multiplier
            );
        }
    }

    Ok(())
}

fn print_comparison(rows: &[MetricComparison]) {
    let mut panel = None;
    for row in rows {
        if panel != Some(row.metric.panel()) {
            panel = Some(row.metric.panel());
            println!("{}", row.metric.panel().title());
            println!("{}", "-".repeat(56));
        }
        let decimals = row.metric.decimals() as usize;
        let marker = match row.outcome {
            Outcome::Favourable => "▲",
            Outcome::Neutral => "-",
            Outcome::Unfavourable => "▼",
        };
        println!(
            "  {:<14} {:>10.*} {:>10.*} {:>+9.*} {} {}",
            row.metric.label(),
            decimals,
            row.baseline,
            decimals,
            row.scenario,
            decimals,
            row.delta,
            row.metric.unit(),
            marker
        );
    }
}

fn write_comparison_csv(rows: &[MetricComparison]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["metric", "unit", "baseline", "scenario", "delta", "outcome"])?;
    for row in rows {
        writer.write_record([
            row.metric.label().to_string(),
            row.metric.unit().to_string(),
            row.baseline.to_string(),
            row.scenario.to_string(),
            row.delta.to_string(),
            format!("{:?}", row.outcome),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn print_table(baseline: &BaselineActuals, name: Option<&str>) -> Result<()> {
    let Some(name) = name else {
        println!("Available tables:");
        for table in Table::ALL {
            println!("  {}", table.name());
        }
        return Ok(());
    };

    let table = Table::from_name(name)?;
    println!("{}", serde_json::to_string_pretty(&table.to_json(baseline)?)?);
    Ok(())
}
