//! Assessment request input.

use crate::types::{MarketConditions, Position};
use crate::{Result, RiskError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Macro backdrop figures. Consumed for audit purposes; the current model
/// does not feed them into any metric.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EconomicIndicators {
    pub interest_rate: f64,
    pub inflation_rate: f64,
    pub gdp_growth: f64,
    pub unemployment_rate: f64,
}

/// Full portfolio snapshot handed to the risk engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessmentInput {
    /// Total portfolio value, > 0.
    pub portfolio_value: Decimal,
    /// Positions in caller-defined order. Output sequences preserve it.
    pub positions: Vec<Position>,
    pub market_conditions: MarketConditions,
    /// Per-symbol volatility estimates; symbols may be missing.
    pub historical_volatility: HashMap<String, f64>,
    pub economic_indicators: EconomicIndicators,
}

impl RiskAssessmentInput {
    /// Check the preconditions the downstream math relies on.
    ///
    /// Fails fast with `InvalidInput`; no computation is attempted on a
    /// snapshot that violates these.
    pub fn validate(&self) -> Result<()> {
        if self.portfolio_value <= Decimal::ZERO {
            return Err(RiskError::InvalidInput(format!(
                "portfolio value must be positive, got {}",
                self.portfolio_value
            )));
        }
        if self.positions.is_empty() {
            return Err(RiskError::InvalidInput(
                "positions list is empty".to_string(),
            ));
        }
        for pos in &self.positions {
            if !pos.weight.is_finite() || pos.weight < 0.0 {
                return Err(RiskError::InvalidInput(format!(
                    "position {} has invalid weight {}",
                    pos.symbol, pos.weight
                )));
            }
        }
        if !self.market_conditions.volatility_index.is_finite()
            || self.market_conditions.volatility_index < 0.0
        {
            return Err(RiskError::InvalidInput(format!(
                "volatility index must be non-negative, got {}",
                self.market_conditions.volatility_index
            )));
        }
        for (sym, row) in &self.market_conditions.correlation_matrix {
            for (other, corr) in row {
                if !corr.is_finite() || !(-1.0..=1.0).contains(corr) {
                    return Err(RiskError::InvalidInput(format!(
                        "correlation {sym}->{other} out of range: {corr}"
                    )));
                }
            }
        }
        for (sym, vol) in &self.historical_volatility {
            if !vol.is_finite() || *vol < 0.0 {
                return Err(RiskError::InvalidInput(format!(
                    "historical volatility for {sym} must be non-negative, got {vol}"
                )));
            }
        }
        Ok(())
    }
}
