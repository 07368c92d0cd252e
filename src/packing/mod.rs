//! Bin packing by simulated annealing.
//!
//! Starts from one bin per item and anneals with single-item relocations.
//! The cost is the bin count, so moves that reshape bins without emptying
//! one are cost-neutral and always accepted; a move that empties a bin is
//! an improvement.
//!
//! # Examples
//!
//! ```
//! use u_binpack::model::Problem;
//! use u_binpack::packing::solve;
//! use u_binpack::sa::SaConfig;
//!
//! let problem = Problem::new("demo", 10, [6, 5, 4, 3, 2, 1]);
//! let outcome = solve(&problem, &SaConfig::default().with_seed(1)).unwrap();
//!
//! assert!(outcome.bin_count >= outcome.lower_bound);
//! println!("{outcome}");
//! ```

mod neighbor;
mod problem;
mod solve;

pub use neighbor::relocate_random_item;
pub use problem::BinPackingProblem;
pub use solve::{solve, solve_all, solve_with_rng, PackingOutcome};
