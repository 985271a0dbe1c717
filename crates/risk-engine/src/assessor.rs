//! Portfolio risk orchestrator.

use crate::correlation::portfolio_correlation_risk;
use crate::monte_carlo::{MonteCarloConfig, MonteCarloSimulator};
use crate::position_risk::analyze_positions;
use crate::registry::ModelRegistry;
use crate::sink::{AssessmentSink, TracingSink};
use crate::stress::ScenarioLibrary;
use crate::var::VarPolicy;
use crate::volatility::{market_exposures, HistoricalVolatility};
use risk_core::config::EngineSettings;
use risk_core::types::{
    PortfolioRisk, RiskAssessmentInput, RiskMetrics, ScenarioAnalysis, StressTestResult,
};
use risk_core::{Result, RiskError};
use rust_decimal::Decimal;
use tracing::{debug, warn};

// Stand-ins for metrics that need a return history absent from the input.
// Extension points: replace with real calculations when a history is wired
// in, keeping the report shape.
const PLACEHOLDER_MAX_DRAWDOWN: f64 = 0.05;
const PLACEHOLDER_SHARPE_RATIO: f64 = 1.2;
const PLACEHOLDER_SORTINO_RATIO: f64 = 1.5;
const PLACEHOLDER_BETA: f64 = 1.1;
const PLACEHOLDER_ALPHA: f64 = 0.02;

/// Immutable orchestrator configuration, fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct AssessorConfig {
    pub var_policy: VarPolicy,
    pub monte_carlo: MonteCarloConfig,
    pub scenarios: ScenarioLibrary,
    pub models: ModelRegistry,
}

impl AssessorConfig {
    /// Configuration with environment overrides applied to the simulation
    /// knobs.
    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self {
            monte_carlo: MonteCarloConfig {
                iterations: settings.monte_carlo_iterations,
                seed: settings.monte_carlo_seed,
            },
            ..Self::default()
        }
    }
}

/// Composes the estimator and analyzer components into a single risk report.
pub struct PortfolioRiskAssessor {
    config: AssessorConfig,
    sink: Box<dyn AssessmentSink>,
}

impl PortfolioRiskAssessor {
    /// Assessor with the default tracing sink.
    pub fn new(config: AssessorConfig) -> Self {
        Self::with_sink(config, Box::new(TracingSink))
    }

    /// Assessor delivering finished reports to a custom sink.
    pub fn with_sink(config: AssessorConfig, sink: Box<dyn AssessmentSink>) -> Self {
        Self { config, sink }
    }

    /// Compute the full risk report for one portfolio snapshot.
    ///
    /// Fails fast on invalid input; any sub-step failure aborts the whole
    /// call. Partial reports are never returned.
    pub fn assess(&self, input: &RiskAssessmentInput) -> Result<RiskMetrics> {
        input.validate()?;

        for (name, version) in self.config.models.iter() {
            debug!(model = name, version, "model registry entry");
        }
        debug!(
            interest_rate = input.economic_indicators.interest_rate,
            inflation_rate = input.economic_indicators.inflation_rate,
            gdp_growth = input.economic_indicators.gdp_growth,
            unemployment_rate = input.economic_indicators.unemployment_rate,
            "economic indicators received"
        );

        let estimator = HistoricalVolatility::new(input.historical_volatility.clone());
        let exposures =
            market_exposures(&input.positions, &estimator, &input.market_conditions);

        let var = self
            .config
            .var_policy
            .compute(input.portfolio_value, &exposures)?;
        let monte_carlo_results =
            MonteCarloSimulator::new(self.config.monte_carlo).simulate(&exposures);
        let stress_test_results = self.config.scenarios.run(input.portfolio_value);
        let position_risks =
            analyze_positions(&input.positions, &estimator, &input.market_conditions)?;

        debug!(
            portfolio_volatility = var.portfolio_volatility,
            aggregate_correlation =
                portfolio_correlation_risk(&input.market_conditions.correlation_matrix),
            "portfolio aggregates"
        );

        let metrics = RiskMetrics {
            portfolio_risk: PortfolioRisk {
                var_95: var.var_95,
                var_99: var.var_99,
                expected_shortfall: var.expected_shortfall,
                max_drawdown: PLACEHOLDER_MAX_DRAWDOWN,
                sharpe_ratio: PLACEHOLDER_SHARPE_RATIO,
                sortino_ratio: PLACEHOLDER_SORTINO_RATIO,
                beta: PLACEHOLDER_BETA,
                alpha: PLACEHOLDER_ALPHA,
            },
            position_risks,
            scenario_analysis: ScenarioAnalysis {
                stress_test_results,
                monte_carlo_results,
            },
        };

        if let Err(err) = self.sink.record(&metrics) {
            warn!(error = %err, "assessment sink failed; result unaffected");
        }

        Ok(metrics)
    }

    /// Run the stress scenario library on its own.
    ///
    /// Does not require positions: stress impacts are a function of total
    /// portfolio value.
    pub fn stress_test(&self, input: &RiskAssessmentInput) -> Result<Vec<StressTestResult>> {
        if input.portfolio_value <= Decimal::ZERO {
            return Err(RiskError::InvalidInput(format!(
                "portfolio value must be positive, got {}",
                input.portfolio_value
            )));
        }
        Ok(self.config.scenarios.run(input.portfolio_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_core::types::{EconomicIndicators, MarketConditions, Position};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn two_position_input() -> RiskAssessmentInput {
        RiskAssessmentInput {
            portfolio_value: Decimal::new(100_000, 0),
            positions: vec![
                Position::new(
                    "AAPL",
                    Decimal::new(100, 0),
                    Decimal::new(500, 0),
                    Decimal::new(450, 0),
                    0.5,
                ),
                Position::new(
                    "MSFT",
                    Decimal::new(125, 0),
                    Decimal::new(400, 0),
                    Decimal::new(380, 0),
                    0.5,
                ),
            ],
            market_conditions: MarketConditions::neutral(),
            historical_volatility: HashMap::from([
                ("AAPL".to_string(), 0.02),
                ("MSFT".to_string(), 0.03),
            ]),
            economic_indicators: EconomicIndicators::default(),
        }
    }

    fn seeded_assessor(seed: u64) -> PortfolioRiskAssessor {
        PortfolioRiskAssessor::new(AssessorConfig {
            monte_carlo: MonteCarloConfig {
                iterations: 10_000,
                seed: Some(seed),
            },
            ..AssessorConfig::default()
        })
    }

    #[test]
    fn full_report_for_two_position_portfolio() {
        let metrics = seeded_assessor(11).assess(&two_position_input()).unwrap();

        let risk = &metrics.portfolio_risk;
        assert!(risk.var_95 > Decimal::ZERO);
        assert!(risk.var_99 > risk.var_95);
        assert!(risk.expected_shortfall >= risk.var_95);

        assert_eq!(metrics.position_risks.len(), 2);
        assert_eq!(metrics.position_risks[0].symbol, "AAPL");
        assert_eq!(metrics.position_risks[1].symbol, "MSFT");

        assert_eq!(metrics.scenario_analysis.stress_test_results.len(), 5);

        let mc = &metrics.scenario_analysis.monte_carlo_results;
        assert!(mc.worst_case_1 <= mc.worst_case_5);
        assert!(mc.best_case_95 <= mc.best_case_99);
    }

    #[test]
    fn fixed_seed_reproduces_monte_carlo_section() {
        let input = two_position_input();
        let first = seeded_assessor(42).assess(&input).unwrap();
        let second = seeded_assessor(42).assess(&input).unwrap();

        let (a, b) = (
            first.scenario_analysis.monte_carlo_results,
            second.scenario_analysis.monte_carlo_results,
        );
        assert_eq!(a.expected_return, b.expected_return);
        assert_eq!(a.worst_case_1, b.worst_case_1);
        assert_eq!(a.best_case_99, b.best_case_99);
    }

    #[test]
    fn placeholder_ratios_are_reported() {
        let metrics = seeded_assessor(3).assess(&two_position_input()).unwrap();
        assert_eq!(metrics.portfolio_risk.max_drawdown, 0.05);
        assert_eq!(metrics.portfolio_risk.sharpe_ratio, 1.2);
        assert_eq!(metrics.portfolio_risk.sortino_ratio, 1.5);
        assert_eq!(metrics.portfolio_risk.beta, 1.1);
        assert_eq!(metrics.portfolio_risk.alpha, 0.02);
    }

    #[test]
    fn invalid_input_is_rejected_before_computation() {
        let mut input = two_position_input();
        input.portfolio_value = Decimal::ZERO;
        assert!(matches!(
            seeded_assessor(1).assess(&input),
            Err(RiskError::InvalidInput(_))
        ));

        let mut input = two_position_input();
        input.positions.clear();
        assert!(seeded_assessor(1).assess(&input).is_err());
    }

    struct FailingSink {
        calls: Arc<AtomicUsize>,
    }

    impl AssessmentSink for FailingSink {
        fn record(&self, _metrics: &RiskMetrics) -> anyhow::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            anyhow::bail!("storage unavailable")
        }
    }

    #[test]
    fn sink_failure_does_not_fail_the_assessment() {
        let calls = Arc::new(AtomicUsize::new(0));
        let assessor = PortfolioRiskAssessor::with_sink(
            AssessorConfig {
                monte_carlo: MonteCarloConfig {
                    iterations: 1_000,
                    seed: Some(5),
                },
                ..AssessorConfig::default()
            },
            Box::new(FailingSink {
                calls: Arc::clone(&calls),
            }),
        );

        let metrics = assessor.assess(&two_position_input());
        assert!(metrics.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn settings_override_simulation_knobs() {
        let settings = EngineSettings {
            monte_carlo_iterations: 2_000,
            monte_carlo_seed: Some(8),
        };
        let config = AssessorConfig::from_settings(&settings);
        assert_eq!(config.monte_carlo.iterations, 2_000);
        assert_eq!(config.monte_carlo.seed, Some(8));
    }

    #[test]
    fn stress_test_requires_positive_value() {
        let assessor = seeded_assessor(1);
        let mut input = two_position_input();

        let results = assessor.stress_test(&input).unwrap();
        assert_eq!(results.len(), 5);

        input.portfolio_value = Decimal::new(-1, 0);
        assert!(assessor.stress_test(&input).is_err());
    }
}
