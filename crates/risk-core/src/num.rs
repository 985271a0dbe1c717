//! Decimal/float conversion helpers shared across the engine crates.

use crate::{Result, RiskError};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Convert a Decimal to f64 for statistical math.
pub fn decimal_to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Convert a finite f64 back into a Decimal currency amount.
pub fn decimal_from_f64(x: f64) -> Result<Decimal> {
    Decimal::from_f64(x)
        .ok_or_else(|| RiskError::Calculation(format!("{x} is not representable as a decimal")))
}
