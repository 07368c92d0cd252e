//! Entry points: optimize one problem or a batch of problems.

use std::fmt;

use rand::Rng;
use tracing::{info, instrument};

use super::problem::BinPackingProblem;
use crate::error::{Error, Result};
use crate::model::{Problem, Solution};
use crate::sa::{SaConfig, SaRunner, TracePoint};

/// What one optimization run reports for a problem.
#[derive(Debug, Clone)]
pub struct PackingOutcome {
    /// Id of the solved problem.
    pub problem_id: String,

    /// Bin count of the best packing found.
    pub bin_count: usize,

    /// `ceil(total_weight / capacity)`; no packing can use fewer bins.
    pub lower_bound: usize,

    /// The best packing found.
    pub best: Solution,

    /// `(temperature, current cost, best cost)` per iteration, for charting.
    pub trace: Vec<TracePoint>,

    pub iterations: usize,
    pub accepted_moves: usize,
    pub improving_moves: usize,
}

impl PackingOutcome {
    /// Whether the best packing provably uses the minimum number of bins.
    pub fn reached_lower_bound(&self) -> bool {
        self.bin_count == self.lower_bound
    }
}

impl fmt::Display for PackingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total cost for problem {}: {}",
            self.problem_id, self.bin_count
        )
    }
}

/// Optimizes one problem with a generator seeded from `config.seed`.
pub fn solve(problem: &Problem, config: &SaConfig) -> Result<PackingOutcome> {
    solve_with_rng(problem, config, &mut config.rng())
}

/// Optimizes one problem drawing all randomness from `rng`.
#[instrument(skip_all, fields(problem = problem.id()))]
pub fn solve_with_rng<R: Rng>(
    problem: &Problem,
    config: &SaConfig,
    rng: &mut R,
) -> Result<PackingOutcome> {
    let sa_problem = BinPackingProblem::new(problem)?;
    let lower_bound = problem.lower_bound();

    info!(
        items = problem.items().len(),
        capacity = problem.capacity_of_each_bin(),
        lower_bound,
        "starting annealing"
    );

    let result = SaRunner::run_with_rng(&sa_problem, config, rng)?;
    let bin_count = result.best.cost();

    info!(
        bin_count,
        iterations = result.iterations,
        accepted_moves = result.accepted_moves,
        "annealing finished"
    );

    Ok(PackingOutcome {
        problem_id: problem.id().to_owned(),
        bin_count,
        lower_bound,
        best: result.best,
        trace: result.trace,
        iterations: result.iterations,
        accepted_moves: result.accepted_moves,
        improving_moves: result.improving_moves,
    })
}

/// Optimizes every problem in order, each with its own generator.
///
/// All problems and the configuration are validated before the first run
/// starts, so a bad record anywhere fails the batch without doing any work.
pub fn solve_all(problems: &[Problem], config: &SaConfig) -> Result<Vec<PackingOutcome>> {
    if problems.is_empty() {
        return Err(Error::NoProblems);
    }
    config.validate().map_err(Error::InvalidConfig)?;
    for problem in problems {
        problem.validate()?;
    }

    problems
        .iter()
        .map(|problem| solve(problem, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config(seed: u64) -> SaConfig {
        SaConfig::default()
            .with_initial_temperature(100.0)
            .with_cooling_rate(0.005)
            .with_seed(seed)
    }

    #[test]
    fn test_solve_within_bounds() {
        let problem = Problem::new("p1", 10, [6, 5, 4, 3, 2, 1]);
        let outcome = solve(&problem, &SaConfig::default().with_seed(42)).unwrap();

        assert!(outcome.bin_count <= 6);
        assert!(outcome.bin_count >= 3);
        assert_eq!(outcome.lower_bound, 3);
        assert_eq!(outcome.best.weights(), vec![1, 2, 3, 4, 5, 6]);
        assert!(outcome.best.is_feasible());
        assert_eq!(outcome.iterations, SaConfig::default().step_count());
        assert_eq!(outcome.iterations, 23_023);
        assert_eq!(outcome.trace.len(), 23_023);
    }

    #[test]
    fn test_display_matches_report_line() {
        let problem = Problem::new("u120_00", 5, [5, 5, 5]);
        let outcome = solve(&problem, &fast_config(1)).unwrap();
        assert_eq!(outcome.to_string(), "Total cost for problem u120_00: 3");
        assert!(outcome.reached_lower_bound());
    }

    #[test]
    fn test_solve_all_in_order() {
        let problems = vec![
            Problem::new("a", 10, [6, 5, 4, 3, 2, 1]),
            Problem::new("b", 5, [5, 5, 5]),
            Problem::new("c", 1, [1]),
        ];
        let outcomes = solve_all(&problems, &fast_config(7)).unwrap();

        let ids: Vec<&str> = outcomes.iter().map(|o| o.problem_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(outcomes[1].bin_count, 3);
        assert_eq!(outcomes[2].bin_count, 1);
    }

    #[test]
    fn test_solve_all_empty() {
        assert_eq!(
            solve_all(&[], &SaConfig::default()).unwrap_err(),
            Error::NoProblems
        );
    }

    #[test]
    fn test_solve_all_fails_fast_on_bad_problem() {
        let problems = vec![
            Problem::new("ok", 10, [1, 2]),
            Problem::new("bad", 10, [3, 12]),
        ];
        let err = solve_all(&problems, &fast_config(1)).unwrap_err();
        assert_eq!(
            err,
            Error::ItemTooHeavy {
                problem_id: "bad".into(),
                index: 1,
                weight: 12,
                capacity: 10,
            }
        );
    }

    #[test]
    fn test_solve_rejects_bad_config() {
        let problem = Problem::new("p", 10, [1]);
        let config = SaConfig::default().with_min_temperature(5000.0);
        assert!(matches!(
            solve(&problem, &config),
            Err(Error::InvalidConfig(_))
        ));
    }
}
