//! Error type shared by the model, the annealing engine and the packing layer.

use thiserror::Error;

/// Errors reported before an optimization run starts.
///
/// The annealing loop itself has no failure state; every variant here is a
/// configuration problem detected up front.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no problems to optimize")]
    NoProblems,

    #[error("problem {problem_id} has no items")]
    EmptyProblem { problem_id: String },

    #[error("problem {problem_id} has a bin capacity of zero")]
    ZeroCapacity { problem_id: String },

    #[error("problem {problem_id}: item #{index} has zero weight")]
    ZeroWeight { problem_id: String, index: usize },

    #[error(
        "problem {problem_id}: item #{index} weighs {weight}, more than the bin capacity {capacity}"
    )]
    ItemTooHeavy {
        problem_id: String,
        index: usize,
        weight: u32,
        capacity: u32,
    },

    #[error("invalid annealing configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
