//! Computed risk report types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-wide risk figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioRisk {
    /// One-day 95% Value-at-Risk, in portfolio currency.
    pub var_95: Decimal,
    /// One-day 99% Value-at-Risk, in portfolio currency.
    pub var_99: Decimal,
    /// Expected loss beyond the 95% VaR threshold.
    pub expected_shortfall: Decimal,
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
    pub sortino_ratio: f64,
    pub beta: f64,
    pub alpha: f64,
}

/// Risk attribution for a single position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRisk {
    pub symbol: String,
    /// Position value times volatility, in portfolio currency.
    pub individual_risk: Decimal,
    /// Individual risk weighted by portfolio share.
    pub contribution_to_risk: Decimal,
    /// Portfolio weight, reported as the concentration measure.
    pub concentration: f64,
    /// Mean absolute correlation of this symbol against the rest of the book.
    pub correlation_risk: f64,
}

/// Outcome of a single named stress scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressTestResult {
    pub scenario: String,
    /// Portfolio value change under the scenario, in portfolio currency.
    pub portfolio_impact: Decimal,
    /// Static scenario probability; metadata, not derived from the input.
    pub probability: f64,
}

/// Percentile outcomes of the Monte Carlo return simulation.
///
/// All values are single-period portfolio returns (fractions), drawn from the
/// ascending-sorted simulation output, so
/// `worst_case_1 <= worst_case_5 <= expected_return <= best_case_95 <=
/// best_case_99` holds by construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonteCarloResults {
    pub expected_return: f64,
    pub worst_case_5: f64,
    pub worst_case_1: f64,
    pub best_case_95: f64,
    pub best_case_99: f64,
}

/// Scenario and simulation section of the risk report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioAnalysis {
    pub stress_test_results: Vec<StressTestResult>,
    pub monte_carlo_results: MonteCarloResults,
}

/// Complete risk report for one portfolio snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub portfolio_risk: PortfolioRisk,
    /// One entry per input position, in input order.
    pub position_risks: Vec<PositionRisk>,
    pub scenario_analysis: ScenarioAnalysis,
}
