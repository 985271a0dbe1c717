//! Portfolio position snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single position inside a portfolio snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    /// Instrument identifier.
    pub symbol: String,
    /// Units held.
    pub quantity: Decimal,
    /// Latest market price per unit.
    pub current_price: Decimal,
    /// Average entry price per unit.
    pub entry_price: Decimal,
    /// Market value of the position (quantity x current price).
    pub position_value: Decimal,
    /// Fraction of total portfolio value, >= 0. Weights across a snapshot
    /// need not sum to 1 (cash and other assets may exist).
    pub weight: f64,
}

impl Position {
    /// Create a position, deriving its market value from quantity and price.
    pub fn new(
        symbol: impl Into<String>,
        quantity: Decimal,
        current_price: Decimal,
        entry_price: Decimal,
        weight: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            current_price,
            entry_price,
            position_value: quantity * current_price,
            weight,
        }
    }
}
