//! Bin-packing data model.
//!
//! - [`Item`]: an immutable positive weight.
//! - [`Bin`]: a capacity plus the items packed into it.
//! - [`Problem`]: a capacity shared by all bins and the items to pack.
//! - [`Solution`]: one candidate packing, an ordered list of bins.

mod bin;
mod problem;
mod solution;

pub use bin::{Bin, Item};
pub use problem::Problem;
pub use solution::Solution;
