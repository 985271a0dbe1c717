//! Result sink collaborator.

use risk_core::types::RiskMetrics;
use tracing::info;

/// Fire-and-forget receiver for finished risk reports (persistence,
/// telemetry).
///
/// A failing sink never invalidates the computed result: the orchestrator
/// logs the failure and returns the report anyway.
pub trait AssessmentSink: Send + Sync {
    fn record(&self, metrics: &RiskMetrics) -> anyhow::Result<()>;
}

/// Default sink: logs the headline figures.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AssessmentSink for TracingSink {
    fn record(&self, metrics: &RiskMetrics) -> anyhow::Result<()> {
        info!(
            var_95 = %metrics.portfolio_risk.var_95,
            var_99 = %metrics.portfolio_risk.var_99,
            expected_shortfall = %metrics.portfolio_risk.expected_shortfall,
            positions = metrics.position_risks.len(),
            "risk assessment recorded"
        );
        Ok(())
    }
}
