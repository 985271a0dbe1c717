//! Risk Engine
//!
//! Numerical core of the portfolio risk engine: volatility estimation,
//! correlation aggregates, parametric VaR, Monte Carlo simulation, stress
//! testing, per-position attribution, and the orchestrating assessor.

pub mod assessor;
pub mod correlation;
pub mod monte_carlo;
pub mod position_risk;
pub mod registry;
pub mod sink;
pub mod stress;
pub mod var;
pub mod volatility;

pub use assessor::{AssessorConfig, PortfolioRiskAssessor};
pub use monte_carlo::{MonteCarloConfig, MonteCarloSimulator};
pub use registry::ModelRegistry;
pub use sink::{AssessmentSink, TracingSink};
pub use stress::{ScenarioLibrary, StressScenario};
pub use var::{VarEstimate, VarPolicy};
pub use volatility::{market_exposures, Exposure, HistoricalVolatility, VolatilityEstimator};
