//! Threshold-based risk monitoring and alert ranking.

use risk_core::types::{AlertSeverity, AlertType, RiskAlert, RiskAssessmentInput};
use std::cmp::Reverse;
use tracing::debug;

/// Alert thresholds.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Portfolio weight above which a position is flagged (strictly greater).
    pub concentration_limit: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            concentration_limit: 0.20,
        }
    }
}

/// A single pluggable risk check.
///
/// Rules share the `RiskAlert` contract; the monitor runs them in
/// registration order and ranks the combined output.
pub trait RiskRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn evaluate(&self, input: &RiskAssessmentInput) -> Vec<RiskAlert>;
}

/// Flags positions holding more than the concentration limit.
#[derive(Debug, Clone)]
pub struct ConcentrationRule {
    limit: f64,
}

impl ConcentrationRule {
    pub fn new(limit: f64) -> Self {
        Self { limit }
    }
}

impl Default for ConcentrationRule {
    fn default() -> Self {
        Self { limit: 0.20 }
    }
}

impl RiskRule for ConcentrationRule {
    fn name(&self) -> &'static str {
        "concentration"
    }

    fn evaluate(&self, input: &RiskAssessmentInput) -> Vec<RiskAlert> {
        input
            .positions
            .iter()
            .filter(|pos| pos.weight > self.limit)
            .map(|pos| {
                RiskAlert::new(
                    AlertSeverity::High,
                    AlertType::Concentration,
                    format!(
                        "Position {} is {:.1}% of the portfolio, above the {:.0}% limit",
                        pos.symbol,
                        pos.weight * 100.0,
                        self.limit * 100.0
                    ),
                    vec![
                        format!(
                            "Reduce {} below {:.0}% of portfolio value",
                            pos.symbol,
                            self.limit * 100.0
                        ),
                        "Rebalance into less correlated assets".to_string(),
                    ],
                    vec![pos.symbol.clone()],
                    true,
                )
            })
            .collect()
    }
}

// Extension points: same contract, no alerts yet.

/// Cross-position correlation check. Not yet implemented.
pub struct CorrelationRule;

impl RiskRule for CorrelationRule {
    fn name(&self) -> &'static str {
        "correlation"
    }

    fn evaluate(&self, _input: &RiskAssessmentInput) -> Vec<RiskAlert> {
        Vec::new()
    }
}

/// Portfolio volatility check. Not yet implemented.
pub struct VolatilityRule;

impl RiskRule for VolatilityRule {
    fn name(&self) -> &'static str {
        "volatility"
    }

    fn evaluate(&self, _input: &RiskAssessmentInput) -> Vec<RiskAlert> {
        Vec::new()
    }
}

/// Drawdown check. Not yet implemented.
pub struct DrawdownRule;

impl RiskRule for DrawdownRule {
    fn name(&self) -> &'static str {
        "drawdown"
    }

    fn evaluate(&self, _input: &RiskAssessmentInput) -> Vec<RiskAlert> {
        Vec::new()
    }
}

/// VaR budget check. Not yet implemented.
pub struct VarBreachRule;

impl RiskRule for VarBreachRule {
    fn name(&self) -> &'static str {
        "var_breach"
    }

    fn evaluate(&self, _input: &RiskAssessmentInput) -> Vec<RiskAlert> {
        Vec::new()
    }
}

/// Liquidity check. Not yet implemented.
pub struct LiquidityRule;

impl RiskRule for LiquidityRule {
    fn name(&self) -> &'static str {
        "liquidity"
    }

    fn evaluate(&self, _input: &RiskAssessmentInput) -> Vec<RiskAlert> {
        Vec::new()
    }
}

/// Runs every registered rule over a snapshot and ranks the alerts.
pub struct RiskMonitor {
    rules: Vec<Box<dyn RiskRule>>,
}

impl Default for RiskMonitor {
    fn default() -> Self {
        Self::new(MonitorConfig::default())
    }
}

impl RiskMonitor {
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            rules: vec![
                Box::new(ConcentrationRule::new(config.concentration_limit)),
                Box::new(CorrelationRule),
                Box::new(VolatilityRule),
                Box::new(DrawdownRule),
                Box::new(VarBreachRule),
                Box::new(LiquidityRule),
            ],
        }
    }

    /// Register an additional rule; it runs after the built-ins.
    pub fn with_rule(mut self, rule: Box<dyn RiskRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Evaluate every rule, then sort descending by severity. The sort is
    /// stable: detection order is preserved among equal severities.
    pub fn monitor(&self, input: &RiskAssessmentInput) -> Vec<RiskAlert> {
        let mut alerts: Vec<RiskAlert> = Vec::new();
        for rule in &self.rules {
            let found = rule.evaluate(input);
            if !found.is_empty() {
                debug!(rule = rule.name(), count = found.len(), "rule raised alerts");
            }
            alerts.extend(found);
        }

        alerts.sort_by_key(|alert| Reverse(alert.severity));
        alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_core::types::{
        EconomicIndicators, MarketConditions, Position,
    };
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn input_with_weights(weights: &[(&str, f64)]) -> RiskAssessmentInput {
        RiskAssessmentInput {
            portfolio_value: Decimal::new(100_000, 0),
            positions: weights
                .iter()
                .map(|(symbol, weight)| {
                    Position::new(
                        *symbol,
                        Decimal::new(10, 0),
                        Decimal::new(100, 0),
                        Decimal::new(90, 0),
                        *weight,
                    )
                })
                .collect(),
            market_conditions: MarketConditions::neutral(),
            historical_volatility: HashMap::new(),
            economic_indicators: EconomicIndicators::default(),
        }
    }

    #[test]
    fn weight_at_limit_does_not_trigger() {
        let alerts = RiskMonitor::default().monitor(&input_with_weights(&[("AAPL", 0.20)]));
        assert!(alerts.is_empty());
    }

    #[test]
    fn weight_just_over_limit_triggers_one_high_alert() {
        let alerts = RiskMonitor::default().monitor(&input_with_weights(&[("AAPL", 0.201)]));

        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.severity, AlertSeverity::High);
        assert_eq!(alert.alert_type, AlertType::Concentration);
        assert_eq!(alert.affected_positions, vec!["AAPL".to_string()]);
        assert!(alert.requires_action);
    }

    #[test]
    fn one_alert_per_offending_position() {
        let alerts = RiskMonitor::default().monitor(&input_with_weights(&[
            ("AAPL", 0.25),
            ("MSFT", 0.10),
            ("NVDA", 0.30),
        ]));

        assert_eq!(alerts.len(), 2);
        let symbols: Vec<_> = alerts
            .iter()
            .flat_map(|a| a.affected_positions.clone())
            .collect();
        assert!(symbols.contains(&"AAPL".to_string()));
        assert!(symbols.contains(&"NVDA".to_string()));
    }

    struct FixedSeverities;

    impl RiskRule for FixedSeverities {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn evaluate(&self, _input: &RiskAssessmentInput) -> Vec<RiskAlert> {
            [
                (AlertSeverity::Low, "a1"),
                (AlertSeverity::Critical, "a2"),
                (AlertSeverity::Medium, "a3"),
                (AlertSeverity::High, "a4"),
                (AlertSeverity::Critical, "a5"),
            ]
            .into_iter()
            .map(|(severity, tag)| {
                RiskAlert::new(
                    severity,
                    AlertType::Volatility,
                    tag.to_string(),
                    Vec::new(),
                    Vec::new(),
                    false,
                )
            })
            .collect()
        }
    }

    #[test]
    fn alerts_sort_by_severity_with_stable_ties() {
        let monitor =
            RiskMonitor::new(MonitorConfig::default()).with_rule(Box::new(FixedSeverities));
        let alerts = monitor.monitor(&input_with_weights(&[("AAPL", 0.05)]));

        let tags: Vec<_> = alerts.iter().map(|a| a.message.as_str()).collect();
        assert_eq!(tags, vec!["a2", "a5", "a4", "a3", "a1"]);
    }

    #[test]
    fn empty_portfolio_yields_no_alerts() {
        let alerts = RiskMonitor::default().monitor(&input_with_weights(&[]));
        assert!(alerts.is_empty());
    }
}
