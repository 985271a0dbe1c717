//! Fixed-library stress testing.

use risk_core::types::StressTestResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named market scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressScenario {
    pub name: String,
    /// Instantaneous market move applied to portfolio value, if the scenario
    /// models one. Scenarios without a move report zero impact.
    pub market_move: Option<Decimal>,
    /// Static likelihood; metadata, not derived from the input.
    pub probability: f64,
}

/// Immutable library of stress scenarios, fixed after construction.
#[derive(Debug, Clone)]
pub struct ScenarioLibrary {
    scenarios: Vec<StressScenario>,
}

impl Default for ScenarioLibrary {
    fn default() -> Self {
        Self {
            scenarios: vec![
                StressScenario {
                    name: "Market Crash".to_string(),
                    market_move: Some(Decimal::new(-20, 2)),
                    probability: 0.05,
                },
                StressScenario {
                    name: "Interest Rate Spike".to_string(),
                    market_move: None,
                    probability: 0.15,
                },
                StressScenario {
                    name: "High Volatility".to_string(),
                    market_move: None,
                    probability: 0.10,
                },
                StressScenario {
                    name: "Liquidity Crisis".to_string(),
                    market_move: None,
                    probability: 0.03,
                },
                StressScenario {
                    name: "Currency Devaluation".to_string(),
                    market_move: None,
                    probability: 0.08,
                },
            ],
        }
    }
}

impl ScenarioLibrary {
    /// Extend the library with an additional scenario.
    pub fn with_scenario(mut self, scenario: StressScenario) -> Self {
        self.scenarios.push(scenario);
        self
    }

    pub fn scenarios(&self) -> &[StressScenario] {
        &self.scenarios
    }

    /// Apply every scenario to the portfolio value, in library order.
    pub fn run(&self, portfolio_value: Decimal) -> Vec<StressTestResult> {
        self.scenarios
            .iter()
            .map(|scenario| StressTestResult {
                scenario: scenario.name.clone(),
                portfolio_impact: scenario
                    .market_move
                    .map(|m| portfolio_value * m)
                    .unwrap_or(Decimal::ZERO),
                probability: scenario.probability,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_has_five_default_scenarios() {
        let library = ScenarioLibrary::default();
        assert_eq!(library.scenarios().len(), 5);
    }

    #[test]
    fn market_crash_impacts_portfolio() {
        let results = ScenarioLibrary::default().run(Decimal::new(100_000, 0));

        let crash = results
            .iter()
            .find(|r| r.scenario == "Market Crash")
            .unwrap();
        assert_eq!(crash.portfolio_impact, Decimal::new(-20_000, 0));
        assert_eq!(crash.probability, 0.05);
    }

    #[test]
    fn moveless_scenarios_report_zero_impact() {
        let results = ScenarioLibrary::default().run(Decimal::new(100_000, 0));
        for result in results.iter().filter(|r| r.scenario != "Market Crash") {
            assert_eq!(result.portfolio_impact, Decimal::ZERO);
        }
    }

    #[test]
    fn custom_scenario_is_applied() {
        let library = ScenarioLibrary::default().with_scenario(StressScenario {
            name: "Flash Crash".to_string(),
            market_move: Some(Decimal::new(-10, 2)),
            probability: 0.01,
        });

        let results = library.run(Decimal::new(50_000, 0));
        let flash = results.iter().find(|r| r.scenario == "Flash Crash").unwrap();
        assert_eq!(flash.portfolio_impact, Decimal::new(-5_000, 0));
    }
}
