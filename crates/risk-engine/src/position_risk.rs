//! Per-position risk attribution.

use crate::correlation::symbol_correlation_risk;
use crate::volatility::VolatilityEstimator;
use risk_core::num::decimal_from_f64;
use risk_core::types::{MarketConditions, Position, PositionRisk};
use risk_core::Result;

/// Risk attribution for every position, preserving input order.
pub fn analyze_positions(
    positions: &[Position],
    estimator: &dyn VolatilityEstimator,
    conditions: &MarketConditions,
) -> Result<Vec<PositionRisk>> {
    positions
        .iter()
        .map(|pos| {
            let volatility = estimator.market_adjusted(&pos.symbol, conditions);
            let individual_risk = pos.position_value * decimal_from_f64(volatility)?;
            let contribution_to_risk = individual_risk * decimal_from_f64(pos.weight)?;

            Ok(PositionRisk {
                symbol: pos.symbol.clone(),
                individual_risk,
                contribution_to_risk,
                concentration: pos.weight,
                correlation_risk: symbol_correlation_risk(
                    &conditions.correlation_matrix,
                    &pos.symbol,
                ),
            })
        })
        .collect()
}
