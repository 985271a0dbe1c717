//! Portfolio Risk: quantitative portfolio-risk assessment engine.
//!
//! This is the root crate that provides benchmark and integration-test access
//! to the internal modules. For actual functionality, use the individual
//! crates directly:
//!
//! - `risk-core`: shared value objects, error taxonomy, configuration
//! - `risk-engine`: VaR, Monte Carlo simulation, stress testing, orchestrator
//! - `risk-manager`: position sizing, stop-loss advice, alert monitoring

pub use risk_core as core;
pub use risk_engine as engine;
pub use risk_manager as manager;
