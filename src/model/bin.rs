//! Items and capacity-limited bins.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unit of weight to be packed. Immutable once created.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    weight: u32,
}

impl Item {
    pub fn new(weight: u32) -> Self {
        Self { weight }
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// A capacity plus the items currently packed into it.
///
/// `Bin` does not enforce its capacity on insertion. Callers check
/// [`remaining_capacity`](Bin::remaining_capacity) first; the relocation
/// move in [`crate::packing`] is the only mutation path used during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bin {
    capacity: u32,
    items: Vec<Item>,
}

impl Bin {
    /// Creates an empty bin.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total weight of the packed items.
    pub fn load(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.weight)).sum()
    }

    /// Appends `count` items of `weight`. No capacity check.
    pub fn add_item(&mut self, weight: u32, count: usize) {
        self.items.extend(std::iter::repeat_n(Item::new(weight), count));
    }

    /// `capacity - load`. Negative only if a caller skipped the capacity check.
    pub fn remaining_capacity(&self) -> i64 {
        i64::from(self.capacity) - self.load() as i64
    }

    /// Removes the first item (in insertion order) whose weight equals
    /// `weight`. Does nothing if no item matches.
    pub fn remove_item(&mut self, weight: u32) {
        if let Some(pos) = self.items.iter().position(|item| item.weight == weight) {
            self.items.remove(pos);
        }
    }

    /// Whether the load fits within the capacity.
    pub fn is_within_capacity(&self) -> bool {
        self.remaining_capacity() >= 0
    }
}
