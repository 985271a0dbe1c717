//! Adaptive stop-loss advice for long positions.

use risk_core::num::decimal_from_f64;
use risk_core::types::{AdaptiveStopLoss, MarketConditions, StopLossType};
use risk_core::{Result, RiskError};
use risk_engine::volatility::{HistoricalVolatility, VolatilityEstimator};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stop-loss policy constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopPolicy {
    /// ATR stop distance, in volatility multiples of price.
    pub atr_multiplier: Decimal,
    /// Fixed momentum stop distance from price.
    pub momentum_stop_pct: Decimal,
    pub vol_multiplier_normal: Decimal,
    pub vol_multiplier_elevated: Decimal,
    /// VIX level above which the volatility stop widens its multiplier.
    pub elevated_vix_threshold: f64,
    /// Tightest the time decay may pull a stop, as a multiplier.
    pub decay_floor: Decimal,
    /// Hours over which the decay ramps down from 1.0.
    pub decay_horizon_hours: i64,
}

impl Default for StopPolicy {
    fn default() -> Self {
        Self {
            atr_multiplier: Decimal::new(2, 0),
            momentum_stop_pct: Decimal::new(3, 2),
            vol_multiplier_normal: Decimal::new(2, 0),
            vol_multiplier_elevated: Decimal::new(25, 1),
            elevated_vix_threshold: 25.0,
            decay_floor: Decimal::new(5, 1),
            decay_horizon_hours: 168,
        }
    }
}

/// Multi-method stop-loss adviser with conservative selection.
pub struct StopLossAdviser {
    policy: StopPolicy,
    volatility: HistoricalVolatility,
}

impl StopLossAdviser {
    pub fn new(policy: StopPolicy) -> Self {
        Self::with_volatility(policy, HistoricalVolatility::default())
    }

    /// Adviser with per-symbol volatility estimates.
    pub fn with_volatility(policy: StopPolicy, volatility: HistoricalVolatility) -> Self {
        Self { policy, volatility }
    }

    /// Advise a stop level for a long position.
    ///
    /// Three candidates are computed (ATR, momentum, volatility); the
    /// numerically largest wins — the least aggressive cut for a long — then
    /// time decay tightens it toward the price.
    pub fn calculate(
        &self,
        symbol: &str,
        entry_price: Decimal,
        current_price: Decimal,
        position_age_hours: i64,
        conditions: &MarketConditions,
    ) -> Result<AdaptiveStopLoss> {
        if entry_price <= Decimal::ZERO || current_price <= Decimal::ZERO {
            return Err(RiskError::InvalidInput(format!(
                "prices must be positive, got entry {entry_price}, current {current_price}"
            )));
        }
        if position_age_hours < 0 {
            return Err(RiskError::InvalidInput(format!(
                "position age must be non-negative, got {position_age_hours}h"
            )));
        }

        let volatility = decimal_from_f64(self.volatility.base_volatility(symbol))?;

        let atr_stop = current_price - current_price * volatility * self.policy.atr_multiplier;
        let momentum_stop = current_price * (Decimal::ONE - self.policy.momentum_stop_pct);
        let vol_multiplier = if conditions.volatility_index > self.policy.elevated_vix_threshold {
            self.policy.vol_multiplier_elevated
        } else {
            self.policy.vol_multiplier_normal
        };
        let volatility_stop = current_price * (Decimal::ONE - volatility * vol_multiplier);

        // Largest candidate wins; ties keep the earlier method.
        let candidates = [
            (atr_stop, StopLossType::Atr),
            (momentum_stop, StopLossType::Momentum),
            (volatility_stop, StopLossType::Volatility),
        ];
        let (mut selected, mut stop_loss_type) = candidates[0];
        for (level, method) in candidates.into_iter().skip(1) {
            if level > selected {
                selected = level;
                stop_loss_type = method;
            }
        }

        let time_decay = self.time_decay(position_age_hours);
        let new_stop_loss = selected * time_decay;
        let risk_ratio = (current_price - new_stop_loss).abs() / current_price;

        debug!(
            symbol,
            %selected,
            %new_stop_loss,
            ?stop_loss_type,
            %time_decay,
            "stop-loss advised"
        );

        Ok(AdaptiveStopLoss {
            symbol: symbol.to_string(),
            current_stop_loss: selected,
            new_stop_loss,
            stop_loss_type,
            risk_ratio,
            time_decay,
            volatility_adjustment: vol_multiplier,
            trend_adjustment: Decimal::ONE,
        })
    }

    /// Linear decay from 1.0 at age zero, floored at the policy minimum.
    fn time_decay(&self, position_age_hours: i64) -> Decimal {
        let progress =
            Decimal::from(position_age_hours) / Decimal::from(self.policy.decay_horizon_hours);
        (Decimal::ONE - progress).max(self.policy.decay_floor)
    }
}
