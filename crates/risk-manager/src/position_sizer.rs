//! Kelly-based dynamic position sizing.

use risk_core::num::decimal_from_f64;
use risk_core::types::{
    ConfidenceInterval, DynamicPositionSizing, LiquidityConditions, MarketConditions, MarketTrend,
};
use risk_core::{Result, RiskError};
use risk_engine::volatility::{HistoricalVolatility, VolatilityEstimator};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sizing policy constants. The default edge figures are placeholders until
/// a fitted estimate is wired in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingPolicy {
    /// Assumed win probability of the trading edge.
    pub win_probability: Decimal,
    /// Average win per unit staked.
    pub avg_win: Decimal,
    /// Average loss per unit staked.
    pub avg_loss: Decimal,
    /// Hard cap on any recommendation, as a fraction of portfolio value.
    pub max_position_pct: Decimal,
    /// Floor on the combined market adjustment.
    pub adjustment_floor: Decimal,
    /// VIX level above which sizing is cut.
    pub high_vix_threshold: f64,
    pub high_vix_factor: Decimal,
    pub bear_factor: Decimal,
    pub low_liquidity_factor: Decimal,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self {
            win_probability: Decimal::new(55, 2),
            avg_win: Decimal::new(3, 2),
            avg_loss: Decimal::new(2, 2),
            max_position_pct: Decimal::new(20, 2),
            adjustment_floor: Decimal::new(2, 1),
            high_vix_threshold: 30.0,
            high_vix_factor: Decimal::new(8, 1),
            bear_factor: Decimal::new(7, 1),
            low_liquidity_factor: Decimal::new(6, 1),
        }
    }
}

/// Risk-adjusted, market-condition-aware position sizer.
pub struct PositionSizer {
    policy: SizingPolicy,
    volatility: HistoricalVolatility,
}

impl PositionSizer {
    pub fn new(policy: SizingPolicy) -> Self {
        Self::with_volatility(policy, HistoricalVolatility::default())
    }

    /// Sizer with per-symbol volatility estimates for the confidence band.
    pub fn with_volatility(policy: SizingPolicy, volatility: HistoricalVolatility) -> Self {
        Self { policy, volatility }
    }

    /// Kelly fraction from the policy's edge estimate.
    pub fn kelly_fraction(&self) -> Decimal {
        let p = self.policy.win_probability;
        // Denominator floored away from zero.
        let avg_win = self.policy.avg_win.max(Decimal::new(1, 2));
        (p * avg_win - (Decimal::ONE - p) * self.policy.avg_loss) / avg_win
    }

    /// Combined market haircut: each applicable factor applies
    /// independently, then the floor binds.
    pub fn market_adjustment(&self, conditions: &MarketConditions) -> Decimal {
        let mut adjustment = Decimal::ONE;
        if conditions.volatility_index > self.policy.high_vix_threshold {
            adjustment *= self.policy.high_vix_factor;
        }
        if conditions.market_trend == MarketTrend::Bear {
            adjustment *= self.policy.bear_factor;
        }
        if conditions.liquidity_conditions == LiquidityConditions::Low {
            adjustment *= self.policy.low_liquidity_factor;
        }
        adjustment.max(self.policy.adjustment_floor)
    }

    /// Size a position for one symbol.
    ///
    /// The recommendation never exceeds `max_position_pct` of portfolio
    /// value, whatever the risk tolerance or Kelly fraction.
    pub fn calculate(
        &self,
        symbol: &str,
        portfolio_value: Decimal,
        risk_tolerance: Decimal,
        conditions: &MarketConditions,
    ) -> Result<DynamicPositionSizing> {
        if portfolio_value <= Decimal::ZERO {
            return Err(RiskError::InvalidInput(format!(
                "portfolio value must be positive, got {portfolio_value}"
            )));
        }
        if risk_tolerance <= Decimal::ZERO || risk_tolerance > Decimal::ONE {
            return Err(RiskError::InvalidInput(format!(
                "risk tolerance must be in (0, 1], got {risk_tolerance}"
            )));
        }

        let mut reasoning = Vec::new();

        let kelly_fraction = self.kelly_fraction();
        reasoning.push(format!(
            "Kelly fraction {kelly_fraction} from win probability {} (avg win {}, avg loss {})",
            self.policy.win_probability, self.policy.avg_win, self.policy.avg_loss
        ));

        let adjustment = self.market_adjustment(conditions);
        if conditions.volatility_index > self.policy.high_vix_threshold {
            reasoning.push(format!(
                "Volatility index {:.1} above {:.0}: sizing scaled by {}",
                conditions.volatility_index,
                self.policy.high_vix_threshold,
                self.policy.high_vix_factor
            ));
        }
        if conditions.market_trend == MarketTrend::Bear {
            reasoning.push(format!(
                "Bear market: sizing scaled by {}",
                self.policy.bear_factor
            ));
        }
        if conditions.liquidity_conditions == LiquidityConditions::Low {
            reasoning.push(format!(
                "Low liquidity: sizing scaled by {}",
                self.policy.low_liquidity_factor
            ));
        }

        let max_position = portfolio_value * self.policy.max_position_pct;
        let uncapped = portfolio_value * risk_tolerance * kelly_fraction * adjustment;
        let recommended_size = uncapped.min(max_position);
        if uncapped > max_position {
            reasoning.push(format!(
                "Capped at {}% of portfolio value",
                self.policy.max_position_pct * Decimal::new(100, 0)
            ));
        }

        // Band narrows as volatility rises: half-width is 10% of the
        // recommendation scaled by (1 - volatility).
        let volatility = self
            .volatility
            .market_adjusted(symbol, conditions)
            .clamp(0.0, 1.0);
        let half_width =
            recommended_size * Decimal::new(1, 1) * (Decimal::ONE - decimal_from_f64(volatility)?);

        let risk_budget = recommended_size / portfolio_value * Decimal::new(100, 0);

        debug!(
            symbol,
            %recommended_size,
            %kelly_fraction,
            %adjustment,
            "position sizing computed"
        );

        Ok(DynamicPositionSizing {
            symbol: symbol.to_string(),
            recommended_size,
            max_position,
            risk_budget,
            kelly_fraction,
            confidence_interval: ConfidenceInterval {
                lower: recommended_size - half_width,
                upper: recommended_size + half_width,
            },
            reasoning,
        })
    }
}
