//! Process-level engine settings loaded from the environment.

use std::env;

/// Tuning knobs for the engine, overridable via environment variables.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Number of Monte Carlo draws per assessment.
    pub monte_carlo_iterations: usize,
    /// Fixed Monte Carlo seed; `None` draws a fresh seed per run.
    pub monte_carlo_seed: Option<u64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            monte_carlo_iterations: 10_000,
            monte_carlo_seed: None,
        }
    }
}

impl EngineSettings {
    /// Load settings from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            monte_carlo_iterations: env::var("RISK_MC_ITERATIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.monte_carlo_iterations),
            monte_carlo_seed: env::var("RISK_MC_SEED").ok().and_then(|s| s.parse().ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_iteration_count_is_ten_thousand() {
        let settings = EngineSettings::default();
        assert_eq!(settings.monte_carlo_iterations, 10_000);
        assert!(settings.monte_carlo_seed.is_none());
    }
}
