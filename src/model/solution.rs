//! Candidate packings.

use std::sync::Arc;

use super::bin::{Bin, Item};
use super::problem::Problem;

/// An ordered collection of bins covering every item of a problem exactly once.
///
/// Bins are shared between solutions and copied on write: cloning a
/// `Solution` copies the bin list only, and a move clones just the bins it
/// changes (see [`Arc::make_mut`]). A snapshot such as the best-so-far
/// solution therefore never observes later mutations of the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    bins: Vec<Arc<Bin>>,
}

impl Solution {
    /// The initial packing: one bin per item, in problem order.
    pub fn initial(problem: &Problem) -> Self {
        let bins = problem
            .items()
            .iter()
            .map(|item| {
                let mut bin = Bin::new(problem.capacity_of_each_bin());
                bin.add_item(item.weight(), 1);
                Arc::new(bin)
            })
            .collect();
        Self { bins }
    }

    pub fn from_bins(bins: impl IntoIterator<Item = Bin>) -> Self {
        Self {
            bins: bins.into_iter().map(Arc::new).collect(),
        }
    }

    pub(crate) fn from_shared(bins: Vec<Arc<Bin>>) -> Self {
        Self { bins }
    }

    pub(crate) fn shared_bins(&self) -> &[Arc<Bin>] {
        &self.bins
    }

    /// Cost of the packing: the number of bins.
    pub fn cost(&self) -> usize {
        self.bins.len()
    }

    pub fn bins(&self) -> impl ExactSizeIterator<Item = &Bin> {
        self.bins.iter().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// All item weights across all bins, sorted ascending.
    pub fn weights(&self) -> Vec<u32> {
        let mut weights: Vec<u32> = self
            .bins
            .iter()
            .flat_map(|bin| bin.items().iter().map(Item::weight))
            .collect();
        weights.sort_unstable();
        weights
    }

    /// Whether every bin is within capacity.
    pub fn is_feasible(&self) -> bool {
        self.bins.iter().all(|bin| bin.is_within_capacity())
    }

    /// Drops bins that hold no items.
    pub fn remove_empty_bins(&mut self) {
        self.bins.retain(|bin| !bin.is_empty());
    }
}
