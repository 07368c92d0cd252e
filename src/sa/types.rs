//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The implementor supplies the initial solution, the cost function and the
/// neighbor move. The SA framework handles temperature management, the
/// Metropolis acceptance criterion, best-solution tracking and the trace.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```ignore
/// struct Sorting { n: usize }
///
/// impl SaProblem for Sorting {
///     type Solution = Vec<usize>;
///
///     fn initial_solution(&self) -> Vec<usize> {
///         (0..self.n).rev().collect()
///     }
///
///     fn cost(&self, perm: &Vec<usize>) -> f64 {
///         perm.iter().enumerate().filter(|&(i, &v)| i != v).count() as f64
///     }
///
///     fn neighbor<R: Rng>(&self, perm: &Vec<usize>, rng: &mut R) -> Vec<usize> {
///         let mut new = perm.clone();
///         new.swap(rng.random_range(0..self.n), rng.random_range(0..self.n));
///         new
///     }
/// }
/// ```
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates the solution the loop starts from.
    fn initial_solution(&self) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of `solution` without modifying it.
    ///
    /// The neighbor should be a small perturbation so that the cost delta
    /// seen by the acceptance rule stays bounded.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
