//! Per-symbol volatility estimation.

use risk_core::types::{MarketConditions, Position};
use std::collections::HashMap;

/// Fallback volatility for symbols with no historical estimate.
pub const DEFAULT_BASELINE_VOLATILITY: f64 = 0.02;

/// Neutral level of the VIX-like index used for market scaling.
pub const VIX_NEUTRAL: f64 = 20.0;

/// A position reduced to what the aggregate risk math needs.
#[derive(Debug, Clone, Copy)]
pub struct Exposure {
    pub weight: f64,
    pub volatility: f64,
}

/// Pluggable per-symbol volatility capability.
///
/// Estimation never fails: missing data degrades to the baseline figure.
pub trait VolatilityEstimator: Send + Sync {
    /// Volatility for a symbol before any market-regime scaling.
    fn base_volatility(&self, symbol: &str) -> f64;

    /// Volatility scaled for the current market regime:
    /// `base * (1 + volatility_index / 20)`.
    fn market_adjusted(&self, symbol: &str, conditions: &MarketConditions) -> f64 {
        self.base_volatility(symbol) * (1.0 + conditions.volatility_index / VIX_NEUTRAL)
    }
}

/// Estimator backed by a snapshot's historical-volatility map.
#[derive(Debug, Clone, Default)]
pub struct HistoricalVolatility {
    estimates: HashMap<String, f64>,
}

impl HistoricalVolatility {
    pub fn new(estimates: HashMap<String, f64>) -> Self {
        Self { estimates }
    }
}

impl VolatilityEstimator for HistoricalVolatility {
    fn base_volatility(&self, symbol: &str) -> f64 {
        self.estimates
            .get(symbol)
            .copied()
            .unwrap_or(DEFAULT_BASELINE_VOLATILITY)
    }
}

/// Reduce positions to (weight, market-adjusted volatility) pairs, in input
/// order.
pub fn market_exposures(
    positions: &[Position],
    estimator: &dyn VolatilityEstimator,
    conditions: &MarketConditions,
) -> Vec<Exposure> {
    positions
        .iter()
        .map(|pos| Exposure {
            weight: pos.weight,
            volatility: estimator.market_adjusted(&pos.symbol, conditions),
        })
        .collect()
}
