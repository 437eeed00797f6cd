//! Baseline override loader
//!
//! Alternate baselines are the reference year with selected fields replaced,
//! read from a two-column `field,value` CSV or a (partial) JSON object.

use super::BaselineActuals;
use crate::error::{Result, ScenarioError};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Default path to the baseline override file
pub const DEFAULT_OVERRIDES_PATH: &str = "data/baseline/overrides.csv";

/// Load `field,value` rows from CSV
/// Returns HashMap<field_name, value>
pub fn load_overrides(path: &Path) -> Result<HashMap<String, f64>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut overrides = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let (Some(field), Some(raw)) = (record.get(0), record.get(1)) else {
            return Err(ScenarioError::InvalidBaseline(format!(
                "expected field,value row, got {:?}",
                record
            )));
        };
        let field = field.trim().to_string();
        let value: f64 = raw.trim().parse().map_err(|_| {
            ScenarioError::InvalidBaseline(format!(
                "value for '{}' is not a number: '{}'",
                field, raw
            ))
        })?;
        if overrides.contains_key(&field) {
            return Err(ScenarioError::InvalidBaseline(format!(
                "field '{}' is overridden more than once",
                field
            )));
        }
        overrides.insert(field, value);
    }

    Ok(overrides)
}

/// Reference year with the overrides in `path` applied
pub fn load_baseline_csv(path: &Path) -> Result<BaselineActuals> {
    let overrides = load_overrides(path)?;
    let mut baseline = BaselineActuals::reference_year();

    // Sorted so a bad file reports the same field every run
    let mut fields: Vec<_> = overrides.into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    for (field, value) in fields {
        log::debug!("baseline override {} = {}", field, value);
        baseline.set_field(&field, value)?;
    }

    baseline.validate()?;
    Ok(baseline)
}

/// Baseline from a JSON object; missing fields take reference-year values
pub fn load_baseline_json(path: &Path) -> Result<BaselineActuals> {
    let file = File::open(path)?;
    let baseline: BaselineActuals = serde_json::from_reader(file)?;
    baseline.validate()?;
    Ok(baseline)
}

/// Pick the loader by file extension (`.json`, anything else is CSV)
pub fn load_baseline(path: &Path) -> Result<BaselineActuals> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_baseline_json(path),
        _ => load_baseline_csv(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "cost_economics_{}_{}",
            std::process::id(),
            name
        ));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_default_overrides() {
        let result = load_baseline(Path::new(DEFAULT_OVERRIDES_PATH));
        assert!(result.is_ok(), "Failed to load overrides: {:?}", result.err());

        // Shipped file restates the reference year
        assert_eq!(result.unwrap(), BaselineActuals::reference_year());
    }

    #[test]
    fn test_csv_overrides_applied() {
        let path = write_temp(
            "overrides.csv",
            "field,value\nassumedRunOff,5.5\nemployeeCount,700\n",
        );
        let baseline = load_baseline(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(baseline.assumed_run_off, 5.5);
        assert_eq!(baseline.employee_count, 700);
        assert_eq!(baseline.current_aum, 70.8);
    }

    #[test]
    fn test_csv_rejects_bad_rows() {
        let path = write_temp("bad_value.csv", "field,value\ncurrentAum,lots\n");
        assert!(load_baseline(&path).is_err());
        std::fs::remove_file(&path).ok();

        let path = write_temp("bad_field.csv", "field,value\nheadcount,10\n");
        assert!(load_baseline(&path).is_err());
        std::fs::remove_file(&path).ok();

        let path = write_temp("zero_staff.csv", "field,value\nemployeeCount,0\n");
        assert!(load_baseline(&path).is_err());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_csv_rejects_duplicate_fields() {
        let path = write_temp(
            "duplicate.csv",
            "field,value\nassumedRunOff,5.5\nassumedRunOff,2.0\n",
        );
        let result = load_overrides(&path);
        std::fs::remove_file(&path).ok();

        match result {
            Err(ScenarioError::InvalidBaseline(msg)) => assert!(msg.contains("assumedRunOff")),
            other => panic!("expected duplicate rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_csv_rejects_negative_costs() {
        let path = write_temp("negative_cost.csv", "field,value\noverheadCost,-400\n");
        let result = load_baseline(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ScenarioError::InvalidBaseline(_))));
    }

    #[test]
    fn test_json_baseline() {
        let path = write_temp("baseline.json", r#"{ "neutralSpread": 90.0 }"#);
        let baseline = load_baseline(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(baseline.neutral_spread, 90.0);
        assert_eq!(baseline.policy_count, 1_004_920);
    }
}
