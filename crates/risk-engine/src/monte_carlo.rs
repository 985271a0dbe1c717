//! Monte Carlo portfolio-return simulation.

use crate::volatility::Exposure;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;
use risk_core::types::MonteCarloResults;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Annualized drift assumed for every symbol, converted to a daily mean.
const DAILY_MEAN_RETURN: f64 = 0.08 / 252.0;

/// Draws per worker chunk. The partition is fixed so a given seed produces
/// identical output regardless of thread count.
const CHUNK_SIZE: usize = 1_024;

/// Sub-seed stride between chunks.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Simulation parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    /// Number of independent portfolio-return draws.
    pub iterations: usize,
    /// Fixed master seed; `None` draws one from the OS per run.
    pub seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            seed: None,
        }
    }
}

/// Randomized return-path simulator with percentile reporting.
#[derive(Debug, Clone)]
pub struct MonteCarloSimulator {
    config: MonteCarloConfig,
}

impl MonteCarloSimulator {
    pub fn new(config: MonteCarloConfig) -> Self {
        Self { config }
    }

    /// Simulate portfolio returns and report percentile outcomes.
    pub fn simulate(&self, exposures: &[Exposure]) -> MonteCarloResults {
        let master_seed = self.config.seed.unwrap_or_else(|| OsRng.next_u64());
        self.simulate_seeded(exposures, master_seed)
    }

    /// Deterministic run with an explicit master seed.
    ///
    /// Draws are partitioned into fixed chunks, each with its own seeded RNG;
    /// partial buffers are merged before sorting, so there is no shared
    /// mutable accumulator across workers.
    pub fn simulate_seeded(&self, exposures: &[Exposure], master_seed: u64) -> MonteCarloResults {
        let iterations = self.config.iterations.max(1);
        let chunks = iterations.div_ceil(CHUNK_SIZE);

        let partials: Vec<Vec<f64>> = (0..chunks)
            .into_par_iter()
            .map(|chunk| {
                let seed = master_seed.wrapping_add((chunk as u64).wrapping_mul(SEED_STRIDE));
                let mut rng = StdRng::seed_from_u64(seed);
                let len = CHUNK_SIZE.min(iterations - chunk * CHUNK_SIZE);
                (0..len)
                    .map(|_| portfolio_draw(&mut rng, exposures))
                    .collect()
            })
            .collect();

        let mut draws: Vec<f64> = partials.into_iter().flatten().collect();
        draws.sort_unstable_by(f64::total_cmp);

        let n = draws.len();
        let expected_return = draws.iter().sum::<f64>() / n as f64;
        let at = |q: f64| draws[(((q * n as f64).floor()) as usize).min(n - 1)];

        MonteCarloResults {
            expected_return,
            worst_case_5: at(0.05),
            worst_case_1: at(0.01),
            best_case_95: at(0.95),
            best_case_99: at(0.99),
        }
    }
}

/// One simulated single-period portfolio return: per-symbol normal draws,
/// weighted and summed.
fn portfolio_draw<R: Rng>(rng: &mut R, exposures: &[Exposure]) -> f64 {
    exposures
        .iter()
        .map(|e| e.weight * normal_draw(rng, DAILY_MEAN_RETURN, e.volatility))
        .sum()
}

/// Box-Muller normal sample. u1 is floored away from zero so `ln` stays
/// finite.
fn normal_draw<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-12);
    let u2: f64 = rng.gen();
    mean + std_dev * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
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

    fn simulator(seed: u64) -> MonteCarloSimulator {
        MonteCarloSimulator::new(MonteCarloConfig {
            iterations: 10_000,
            seed: Some(seed),
        })
    }

    #[test]
    fn percentiles_are_ordered() {
        let results = simulator(7).simulate(&exposures());

        assert!(results.worst_case_1 <= results.worst_case_5);
        assert!(results.worst_case_5 <= results.expected_return);
        assert!(results.expected_return <= results.best_case_95);
        assert!(results.best_case_95 <= results.best_case_99);
    }

    #[test]
    fn fixed_seed_reproduces_results() {
        let first = simulator(42).simulate(&exposures());
        let second = simulator(42).simulate(&exposures());

        assert_eq!(first.expected_return, second.expected_return);
        assert_eq!(first.worst_case_1, second.worst_case_1);
        assert_eq!(first.worst_case_5, second.worst_case_5);
        assert_eq!(first.best_case_95, second.best_case_95);
        assert_eq!(first.best_case_99, second.best_case_99);
    }

    #[test]
    fn different_seeds_diverge() {
        let first = simulator(1).simulate(&exposures());
        let second = simulator(2).simulate(&exposures());
        assert_ne!(first.expected_return, second.expected_return);
    }

    #[test]
    fn empty_portfolio_simulates_to_zero() {
        let results = simulator(9).simulate(&[]);
        assert_eq!(results.expected_return, 0.0);
        assert_eq!(results.worst_case_1, 0.0);
        assert_eq!(results.best_case_99, 0.0);
    }
}
