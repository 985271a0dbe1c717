//! Parametric Value-at-Risk and expected shortfall.

use crate::volatility::Exposure;
use risk_core::num::decimal_from_f64;
use risk_core::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Constants of the parametric VaR model.
///
/// These are policy choices, not laws of nature; tune per mandate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarPolicy {
    /// One-sided normal quantile at 95% confidence.
    pub z_95: f64,
    /// One-sided normal quantile at 99% confidence.
    pub z_99: f64,
    /// Flat variance inflation standing in for cross-asset correlation.
    pub correlation_inflation: f64,
    /// Expected shortfall as a multiple of the 95% VaR.
    pub es_multiplier: f64,
}

impl Default for VarPolicy {
    fn default() -> Self {
        Self {
            z_95: 1.645,
            z_99: 2.326,
            correlation_inflation: 1.2,
            es_multiplier: 1.3,
        }
    }
}

/// Parametric VaR figures for one snapshot.
#[derive(Debug, Clone, Copy)]
pub struct VarEstimate {
    pub var_95: Decimal,
    pub var_99: Decimal,
    pub expected_shortfall: Decimal,
    /// Aggregate single-period portfolio volatility.
    pub portfolio_volatility: f64,
}

impl VarPolicy {
    /// Single-period normal-model VaR from weighted position volatilities.
    ///
    /// Portfolio variance is the sum of squared weighted volatilities,
    /// inflated by the correlation factor.
    pub fn compute(&self, portfolio_value: Decimal, exposures: &[Exposure]) -> Result<VarEstimate> {
        let variance: f64 = exposures
            .iter()
            .map(|e| (e.weight * e.volatility).powi(2))
            .sum::<f64>()
            * self.correlation_inflation;
        let portfolio_volatility = variance.sqrt();

        let var_95 = portfolio_value * decimal_from_f64(portfolio_volatility * self.z_95)?;
        let var_99 = portfolio_value * decimal_from_f64(portfolio_volatility * self.z_99)?;
        let expected_shortfall = var_95 * decimal_from_f64(self.es_multiplier)?;

        Ok(VarEstimate {
            var_95,
            var_99,
            expected_shortfall,
            portfolio_volatility,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exposures() -> Vec<Exposure> {
        vec![
            Exposure {
                weight: 0.5,
                volatility: 0.02,
            },
            Exposure {
                weight: 0.5,
                volatility: 0.03,
            },
        ]
    }

    #[test]
    fn var_levels_are_ordered() {
        let estimate = VarPolicy::default()
            .compute(Decimal::new(100_000, 0), &exposures())
            .unwrap();

        assert!(estimate.var_95 > Decimal::ZERO);
        assert!(estimate.var_99 > estimate.var_95);
        assert!(estimate.expected_shortfall >= estimate.var_95);
    }

    #[test]
    fn empty_portfolio_has_zero_var() {
        let estimate = VarPolicy::default()
            .compute(Decimal::new(100_000, 0), &[])
            .unwrap();
        assert_eq!(estimate.var_95, Decimal::ZERO);
        assert_eq!(estimate.var_99, Decimal::ZERO);
        assert_eq!(estimate.portfolio_volatility, 0.0);
    }

    #[test]
    fn correlation_inflation_raises_volatility() {
        let base = VarPolicy {
            correlation_inflation: 1.0,
            ..VarPolicy::default()
        };
        let inflated = VarPolicy::default();

        let value = Decimal::new(50_000, 0);
        let plain = base.compute(value, &exposures()).unwrap();
        let adjusted = inflated.compute(value, &exposures()).unwrap();
        assert!(adjusted.portfolio_volatility > plain.portfolio_volatility);
        assert!(adjusted.var_95 > plain.var_95);
    }
}
