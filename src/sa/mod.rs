//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases as the temperature falls, allowing the search to escape
//! local optima early and settle later.
//!
//! The loop runs one neighbor evaluation per temperature step and cools
//! geometrically, so its length is fixed by [`SaConfig`] alone.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod acceptance;
mod config;
mod runner;
mod types;

pub use acceptance::acceptance_probability;
pub use config::{SaConfig, COOLING_RATE, INITIAL_TEMPERATURE, MIN_TEMPERATURE};
pub use runner::{SaResult, SaRunner, TracePoint};
pub use types::SaProblem;
