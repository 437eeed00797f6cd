//! UK bulk purchase annuity market tables

use serde::Serialize;

/// Market-wide volume for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketYear {
    pub year: &'static str,
    /// £bn
    pub volume: f64,
    pub deals: u32,
}

impl MarketYear {
    /// Average transaction size (£m)
    pub fn average_deal(&self) -> f64 {
        self.volume * 1000.0 / self.deals as f64
    }

    /// Forecast rather than reported
    pub fn is_forecast(&self) -> bool {
        self.year.ends_with('F')
    }
}

pub static MARKET_VOLUMES: [MarketYear; 6] = [
    MarketYear { year: "2020", volume: 31.4, deals: 142 },
    MarketYear { year: "2021", volume: 27.7, deals: 170 },
    MarketYear { year: "2022", volume: 27.8, deals: 226 },
    MarketYear { year: "2023", volume: 49.1, deals: 227 },
    MarketYear { year: "2024", volume: 47.8, deals: 298 },
    MarketYear { year: "2025F", volume: 47.5, deals: 325 },
];

/// One insurer's reference-year new business
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub name: &'static str,
    /// £bn
    pub premiums: f64,
    pub deals: u32,
    /// £m
    pub avg_deal: f64,
    pub strategy: &'static str,
    /// The insurer this dashboard describes
    pub highlight: bool,
}

pub static COMPETITORS: [Competitor; 6] = [
    Competitor { name: "Rothesay", premiums: 10.3, deals: 6, avg_deal: 1722.0, strategy: "Mega-deals & back-books", highlight: true },
    Competitor { name: "L&G", premiums: 8.4, deals: 38, avg_deal: 221.0, strategy: "Broad market, gilts-based", highlight: false },
    Competitor { name: "PIC", premiums: 8.0, deals: 25, avg_deal: 321.0, strategy: "Mid-to-large schemes", highlight: false },
    Competitor { name: "Aviva", premiums: 7.8, deals: 64, avg_deal: 122.0, strategy: "High-volume mid-market", highlight: false },
    Competitor { name: "Just Group", premiums: 5.4, deals: 129, avg_deal: 42.0, strategy: "Small scheme specialist", highlight: false },
    Competitor { name: "Standard Life", premiums: 5.1, deals: 14, avg_deal: 362.0, strategy: "Re-entrant, growing", highlight: false },
];

/// Share of the listed insurers' combined premiums (%)
pub fn premium_share(name: &str) -> Option<f64> {
    let total: f64 = COMPETITORS.iter().map(|c| c.premiums).sum();
    COMPETITORS
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.premiums / total * 100.0)
}

/// Acquisition cost as a share of premium at one deal size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealSizePoint {
    /// £m
    pub size: f64,
    /// %
    pub cost_pct: f64,
    /// Empty for unlabelled points
    pub label: &'static str,
}

pub static DEAL_SIZE_ECONOMICS: [DealSizePoint; 8] = [
    DealSizePoint { size: 50.0, cost_pct: 0.60, label: "Just Group avg" },
    DealSizePoint { size: 100.0, cost_pct: 0.40, label: "" },
    DealSizePoint { size: 200.0, cost_pct: 0.30, label: "Aviva avg" },
    DealSizePoint { size: 500.0, cost_pct: 0.18, label: "PIC avg" },
    DealSizePoint { size: 1000.0, cost_pct: 0.12, label: "" },
    DealSizePoint { size: 1700.0, cost_pct: 0.08, label: "Rothesay avg" },
    DealSizePoint { size: 3000.0, cost_pct: 0.05, label: "" },
    DealSizePoint { size: 5000.0, cost_pct: 0.04, label: "Mega-deal" },
];

/// Acquisition cost % at `size`, linear between tabulated points and flat beyond them
pub fn acquisition_cost_at(size: f64) -> f64 {
    let points = &DEAL_SIZE_ECONOMICS;
    let first = points[0];
    let last = points[points.len() - 1];
    if size <= first.size {
        return first.cost_pct;
    }
    if size >= last.size {
        return last.cost_pct;
    }
    for pair in points.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if size <= hi.size {
            let t = (size - lo.size) / (hi.size - lo.size);
            return lo.cost_pct + t * (hi.cost_pct - lo.cost_pct);
        }
    }
    last.cost_pct
}

/// Competitor position on the scale/specialisation map
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyPosition {
    pub name: &'static str,
    /// Average deal size axis (0-100)
    pub x: f64,
    /// Deal volume axis (0-100)
    pub y: f64,
    /// Bubble size, premiums ×10
    pub size: f64,
    pub highlight: bool,
}

pub static STRATEGY_MAP: [StrategyPosition; 6] = [
    StrategyPosition { name: "Just", x: 8.0, y: 85.0, size: 54.0, highlight: false },
    StrategyPosition { name: "Aviva", x: 22.0, y: 70.0, size: 78.0, highlight: false },
    StrategyPosition { name: "L&G", x: 35.0, y: 55.0, size: 84.0, highlight: false },
    StrategyPosition { name: "PIC", x: 45.0, y: 40.0, size: 80.0, highlight: false },
    StrategyPosition { name: "Std Life", x: 50.0, y: 25.0, size: 51.0, highlight: false },
    StrategyPosition { name: "Rothesay", x: 85.0, y: 12.0, size: 103.0, highlight: true },
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_competitor_average_deal_consistent() {
        for c in &COMPETITORS {
            let implied = c.premiums * 1000.0 / c.deals as f64;
            // Published averages are rounded and partly on different deal bases
            assert!(
                (implied - c.avg_deal).abs() / c.avg_deal < 0.1,
                "{}: implied {:.0} vs {:.0}",
                c.name,
                implied,
                c.avg_deal
            );
        }
    }

    #[test]
    fn test_single_highlight() {
        assert_eq!(COMPETITORS.iter().filter(|c| c.highlight).count(), 1);
        assert_eq!(STRATEGY_MAP.iter().filter(|p| p.highlight).count(), 1);
    }

    #[test]
    fn test_premium_share() {
        let share = premium_share("Rothesay").unwrap();
        assert_abs_diff_eq!(share, 10.3 / 45.0 * 100.0, epsilon = 1e-9);
        assert!(premium_share("Nobody").is_none());
    }

    #[test]
    fn test_market_years() {
        assert!(MARKET_VOLUMES.last().unwrap().is_forecast());
        assert!(!MARKET_VOLUMES[0].is_forecast());
        assert_abs_diff_eq!(MARKET_VOLUMES[4].average_deal(), 47800.0 / 298.0);
    }

    #[test]
    fn test_acquisition_cost_curve() {
        assert_eq!(acquisition_cost_at(10.0), 0.60);
        assert_eq!(acquisition_cost_at(1700.0), 0.08);
        assert_eq!(acquisition_cost_at(9000.0), 0.04);
        assert_abs_diff_eq!(acquisition_cost_at(150.0), 0.35, epsilon = 1e-12);

        // Cost share decays with deal size
        let mut prev = f64::INFINITY;
        for size in (50..=5000).step_by(50) {
            let pct = acquisition_cost_at(size as f64);
            assert!(pct <= prev);
            prev = pct;
        }
    }
}
