//! Risk Manager
//!
//! Independently invocable risk controls: Kelly-based position sizing,
//! adaptive stop-loss advice, and threshold-based alert monitoring.

pub mod monitor;
pub mod position_sizer;
pub mod stop_loss;

pub use monitor::{ConcentrationRule, MonitorConfig, RiskMonitor, RiskRule};
pub use position_sizer::{PositionSizer, SizingPolicy};
pub use stop_loss::{StopLossAdviser, StopPolicy};
