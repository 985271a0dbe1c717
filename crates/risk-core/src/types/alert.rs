//! Risk alert types and severity levels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a risk alert. Ordering is total: Low < Medium < High <
/// Critical.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Family of risk check that raised the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Concentration,
    Correlation,
    Volatility,
    Drawdown,
    VarBreach,
    Liquidity,
}

/// A single alert emitted by the risk monitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAlert {
    /// Unique per emission.
    pub alert_id: Uuid,
    pub severity: AlertSeverity,
    pub alert_type: AlertType,
    pub message: String,
    pub recommendations: Vec<String>,
    /// Symbols the alert concerns.
    pub affected_positions: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub requires_action: bool,
}

impl RiskAlert {
    /// Create an alert with a fresh id and the current timestamp.
    pub fn new(
        severity: AlertSeverity,
        alert_type: AlertType,
        message: String,
        recommendations: Vec<String>,
        affected_positions: Vec<String>,
        requires_action: bool,
    ) -> Self {
        Self {
            alert_id: Uuid::new_v4(),
            severity,
            alert_type,
            message,
            recommendations,
            affected_positions,
            timestamp: Utc::now(),
            requires_action,
        }
    }
}
