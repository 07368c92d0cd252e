//! Problem instances as handed over by the input parser.

use super::bin::Item;
use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One bin-packing instance: a common bin capacity and the items to pack.
///
/// Read-only to the optimizer. Construct with [`Problem::new`] and check
/// with [`Problem::validate`] before solving; the `solve*` functions in
/// [`crate::packing`] validate for you.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    id: String,
    capacity_of_each_bin: u32,
    items: Vec<Item>,
}

impl Problem {
    pub fn new(
        id: impl Into<String>,
        capacity_of_each_bin: u32,
        weights: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            id: id.into(),
            capacity_of_each_bin,
            items: weights.into_iter().map(Item::new).collect(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn capacity_of_each_bin(&self) -> u32 {
        self.capacity_of_each_bin
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.weight())).sum()
    }

    /// `ceil(total_weight / capacity)`, the trivial lower bound on the bin count.
    ///
    /// Returns 0 for a zero capacity; such a problem fails validation anyway.
    pub fn lower_bound(&self) -> usize {
        let capacity = u64::from(self.capacity_of_each_bin);
        if capacity == 0 {
            return 0;
        }
        self.total_weight().div_ceil(capacity) as usize
    }

    /// Checks that a feasible packing exists: at least one item, a positive
    /// capacity, and every item weight in `1..=capacity`.
    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(Error::EmptyProblem {
                problem_id: self.id.clone(),
            });
        }
        if self.capacity_of_each_bin == 0 {
            return Err(Error::ZeroCapacity {
                problem_id: self.id.clone(),
            });
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.weight() == 0 {
                return Err(Error::ZeroWeight {
                    problem_id: self.id.clone(),
                    index,
                });
            }
            if item.weight() > self.capacity_of_each_bin {
                return Err(Error::ItemTooHeavy {
                    problem_id: self.id.clone(),
                    index,
                    weight: item.weight(),
                    capacity: self.capacity_of_each_bin,
                });
            }
        }
        Ok(())
    }
}
