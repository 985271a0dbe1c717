//! Value objects exchanged with the risk engine.
//!
//! Everything here is created fresh per call, owned by the caller, and never
//! mutated after construction.

mod alert;
mod input;
mod market;
mod metrics;
mod position;
mod sizing;

pub use alert::{AlertSeverity, AlertType, RiskAlert};
pub use input::{EconomicIndicators, RiskAssessmentInput};
pub use market::{CorrelationMatrix, LiquidityConditions, MarketConditions, MarketTrend};
pub use metrics::{
    MonteCarloResults, PortfolioRisk, PositionRisk, RiskMetrics, ScenarioAnalysis,
    StressTestResult,
};
pub use position::Position;
pub use sizing::{AdaptiveStopLoss, ConfidenceInterval, DynamicPositionSizing, StopLossType};
