//! SA execution loop.
//!
//! # Algorithm
//!
//! 1. `current = initial`, `best = current`, `T = initial_temperature`
//! 2. While `T > min_temperature`:
//!    a. Generate a neighbor of `current`
//!    b. Draw `u` in [0, 1); accept the neighbor if its Metropolis
//!    probability exceeds `u`
//!    c. Replace `best` when the accepted neighbor is strictly cheaper
//!    d. Record `(T, cost(current))` to the trace
//!    e. `T *= 1 - cooling_rate`
//! 3. Return `best`

use super::acceptance::acceptance_probability;
use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::{Error, Result};
use rand::Rng;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One sample of the optimization trace, recorded after every iteration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    /// Temperature the iteration ran at.
    pub temperature: f64,

    /// Cost of the current solution after the acceptance decision.
    pub cost: f64,

    /// Cost of the best solution seen so far.
    pub best_cost: f64,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// The solution the loop ended on.
    pub current: S,

    /// Cost of the final current solution.
    pub current_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// One point per iteration, in order.
    pub trace: Vec<TracePoint>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> Result<SaResult<P::Solution>> {
        Self::run_with_rng(problem, config, &mut config.rng())
    }

    /// Runs SA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored. Two runs with equal generators produce
    /// identical results and traces.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>> {
        config.validate().map_err(Error::InvalidConfig)?;

        let mut current = problem.initial_solution();
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut trace = Vec::with_capacity(config.step_count());

        while temperature > config.min_temperature {
            let candidate = problem.neighbor(&current, rng);
            let candidate_cost = problem.cost(&candidate);

            let u: f64 = rng.random_range(0.0..1.0);
            if acceptance_probability(current_cost, candidate_cost, temperature) > u {
                if candidate_cost < current_cost {
                    improving_moves += 1;
                }
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    debug!(iterations, temperature, best_cost, "new best solution");
                }
            }

            trace.push(TracePoint {
                temperature,
                cost: current_cost,
                best_cost,
            });
            iterations += 1;

            // Cool down
            temperature = config.cool(temperature);
        }

        Ok(SaResult {
            best,
            best_cost,
            current,
            current_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            trace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // ---- Quadratic minimization: f(x) = x^2, minimum at 0 ----

    struct QuadraticProblem;

    impl SaProblem for QuadraticProblem {
        type Solution = f64;

        fn initial_solution(&self) -> f64 {
            10.0
        }

        fn cost(&self, x: &f64) -> f64 {
            x * x
        }

        fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
            x + rng.random_range(-1.0..1.0)
        }
    }

    #[test]
    fn test_sa_quadratic() {
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(0.001)
            .with_cooling_rate(0.001)
            .with_seed(42);

        let result = SaRunner::run(&QuadraticProblem, &config).unwrap();

        assert!(
            result.best_cost < 1.0,
            "expected near-zero cost, got {}",
            result.best_cost
        );
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves > result.improving_moves);
    }

    #[test]
    fn test_sa_iterations_match_step_count() {
        let config = SaConfig::default()
            .with_initial_temperature(50.0)
            .with_cooling_rate(0.01)
            .with_seed(1);

        let result = SaRunner::run(&QuadraticProblem, &config).unwrap();

        assert_eq!(result.iterations, config.step_count());
        assert_eq!(result.trace.len(), result.iterations);
        assert!(result.final_temperature <= config.min_temperature);
    }

    #[test]
    fn test_sa_trace_temperatures_decrease() {
        let config = SaConfig::default()
            .with_initial_temperature(20.0)
            .with_cooling_rate(0.05)
            .with_seed(3);

        let result = SaRunner::run(&QuadraticProblem, &config).unwrap();

        assert_eq!(result.trace[0].temperature, 20.0);
        for window in result.trace.windows(2) {
            assert!(window[1].temperature < window[0].temperature);
        }
    }

    #[test]
    fn test_sa_best_cost_non_increasing() {
        let config = SaConfig::default()
            .with_initial_temperature(50.0)
            .with_cooling_rate(0.002)
            .with_seed(42);

        let result = SaRunner::run(&QuadraticProblem, &config).unwrap();

        for window in result.trace.windows(2) {
            assert!(
                window[1].best_cost <= window[0].best_cost,
                "best cost should be non-increasing: {} > {}",
                window[1].best_cost,
                window[0].best_cost
            );
        }
        assert_eq!(result.trace.last().unwrap().best_cost, result.best_cost);
        assert_eq!(result.trace.last().unwrap().cost, result.current_cost);
        assert!(result.best_cost <= result.current_cost);
    }

    #[test]
    fn test_sa_rejects_non_cooling_rate_before_running() {
        let config = SaConfig::default().with_cooling_rate(1e-17);
        let result = SaRunner::run(&QuadraticProblem, &config);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_sa_same_rng_same_result() {
        let config = SaConfig::default()
            .with_initial_temperature(30.0)
            .with_cooling_rate(0.01);

        let a = SaRunner::run_with_rng(&QuadraticProblem, &config, &mut StdRng::seed_from_u64(9))
            .unwrap();
        let b = SaRunner::run_with_rng(&QuadraticProblem, &config, &mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(a.best, b.best);
        assert_eq!(a.trace, b.trace);
    }

    #[test]
    fn test_sa_invalid_config() {
        let config = SaConfig::default().with_cooling_rate(2.0);
        let result = SaRunner::run(&QuadraticProblem, &config);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_sa_metropolis_accepts_uphill() {
        // At very high temperature, almost all moves should be accepted
        let config = SaConfig::default()
            .with_initial_temperature(1e8)
            .with_min_temperature(1e7) // stay at very high temp
            .with_cooling_rate(0.001)
            .with_seed(42);

        let result = SaRunner::run(&QuadraticProblem, &config).unwrap();

        let acceptance_ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(
            acceptance_ratio > 0.8,
            "expected high acceptance at high temp, got {acceptance_ratio}"
        );
    }
}
