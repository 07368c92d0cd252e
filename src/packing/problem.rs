//! Bin packing as an SA problem.

use rand::Rng;

use super::neighbor::relocate_random_item;
use crate::error::Result;
use crate::model::{Problem, Solution};
use crate::sa::SaProblem;

/// Adapts a validated [`Problem`] to the [`SaProblem`] seam.
///
/// - initial solution: one bin per item
/// - cost: number of bins
/// - neighbor: [`relocate_random_item`]
#[derive(Debug, Clone, Copy)]
pub struct BinPackingProblem<'a> {
    problem: &'a Problem,
}

impl<'a> BinPackingProblem<'a> {
    pub fn new(problem: &'a Problem) -> Result<Self> {
        problem.validate()?;
        Ok(Self { problem })
    }

    pub fn problem(&self) -> &'a Problem {
        self.problem
    }
}

impl SaProblem for BinPackingProblem<'_> {
    type Solution = Solution;

    fn initial_solution(&self) -> Solution {
        Solution::initial(self.problem)
    }

    fn cost(&self, solution: &Solution) -> f64 {
        solution.cost() as f64
    }

    fn neighbor<R: Rng>(&self, solution: &Solution, rng: &mut R) -> Solution {
        relocate_random_item(solution, rng)
    }
}
