//! Market condition snapshot types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pairwise correlation estimates, keyed symbol -> symbol -> correlation.
///
/// The input matrix may be sparse or asymmetric; consumers must not assume
/// that `m[a][b]` implies `m[b][a]` exists.
pub type CorrelationMatrix = HashMap<String, HashMap<String, f64>>;

/// Qualitative market direction regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketTrend {
    Bull,
    Bear,
    Sideways,
}

/// Qualitative liquidity regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidityConditions {
    High,
    Medium,
    Low,
}

/// Market-wide conditions at assessment time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConditions {
    /// VIX-like implied volatility index, >= 0. Neutral around 20.
    pub volatility_index: f64,
    pub market_trend: MarketTrend,
    pub liquidity_conditions: LiquidityConditions,
    pub correlation_matrix: CorrelationMatrix,
}

impl MarketConditions {
    /// Calm-market conditions with an empty correlation matrix.
    pub fn neutral() -> Self {
        Self {
            volatility_index: 20.0,
            market_trend: MarketTrend::Sideways,
            liquidity_conditions: LiquidityConditions::High,
            correlation_matrix: CorrelationMatrix::new(),
        }
    }
}
