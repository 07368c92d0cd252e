//! One-dimensional bin packing by simulated annealing.
//!
//! Given items with positive integer weights and a fixed bin capacity, finds
//! a packing that uses few bins. The result is a heuristic approximation
//! with no optimality guarantee.
//!
//! - [`model`]: items, bins, problems and candidate packings.
//! - [`sa`]: a generic Simulated Annealing engine with a geometric cooling
//!   schedule, the Metropolis acceptance rule and a per-iteration trace.
//! - [`packing`]: the bin-packing instantiation and the `solve*` entry points.
//!
//! All randomness flows through one injectable [`rand::Rng`], so a fixed seed
//! reproduces the best packing and the trace exactly.
//!
//! Reading problem files and charting the trace are left to callers; with
//! the `serde` feature, [`model::Problem`] and [`sa::TracePoint`] can be
//! exchanged in any serde format.

pub mod error;
pub mod model;
pub mod packing;
pub mod sa;

pub use error::{Error, Result};
