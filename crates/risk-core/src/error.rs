//! Error types for the portfolio risk engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    /// A precondition on caller input failed; no computation was attempted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A sub-calculation produced an unusable intermediate value. The whole
    /// assessment aborts; partial risk reports are never returned.
    #[error("calculation error: {0}")]
    Calculation(String),
}

pub type Result<T> = std::result::Result<T, RiskError>;
