//! Position sizing and stop-loss advice types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Confidence band around a recommended position size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: Decimal,
    pub upper: Decimal,
}

/// Risk-adjusted position sizing recommendation for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicPositionSizing {
    pub symbol: String,
    /// Recommended position size in portfolio currency. Never exceeds
    /// `max_position`.
    pub recommended_size: Decimal,
    /// Hard cap: 20% of portfolio value.
    pub max_position: Decimal,
    /// Recommended size as a percentage of portfolio value.
    pub risk_budget: Decimal,
    pub kelly_fraction: Decimal,
    pub confidence_interval: ConfidenceInterval,
    /// Human-readable sizing diagnostics. Not machine-parsed.
    pub reasoning: Vec<String>,
}

/// Which stop-loss method produced the selected level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopLossType {
    Fixed,
    Trailing,
    Volatility,
    Atr,
    Momentum,
}

/// Adaptive stop-loss recommendation for a long position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptiveStopLoss {
    pub symbol: String,
    /// Selected stop level before time decay.
    pub current_stop_loss: Decimal,
    /// Stop level after time decay is applied.
    pub new_stop_loss: Decimal,
    pub stop_loss_type: StopLossType,
    /// Distance from current price to the adjusted stop, as a fraction of
    /// the current price.
    pub risk_ratio: Decimal,
    /// Time-decay multiplier applied to the stop, in [0.5, 1.0].
    pub time_decay: Decimal,
    /// Volatility-stop multiplier in effect (2.0, or 2.5 in elevated VIX).
    pub volatility_adjustment: Decimal,
    /// Trend term; informational, currently always 1.0.
    pub trend_adjustment: Decimal,
}
