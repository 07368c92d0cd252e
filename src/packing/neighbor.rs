//! Single-item relocation move.

use std::sync::Arc;

use rand::Rng;

use crate::model::Solution;

/// Produces a neighbor of `solution` by moving one random item to a random bin.
///
/// 1. Copy the bin list (bins are shared until written).
/// 2. Draw a source and a target bin index, independently and with replacement.
/// 3. Draw one item of the source bin.
/// 4. Move it if source and target differ and the target has room for it.
/// 5. Drop bins left empty.
///
/// The input is never modified, and only the two touched bins are cloned.
/// When the draws select the same bin or the target is too full, the
/// neighbor has the same content as `solution`.
pub fn relocate_random_item<R: Rng>(solution: &Solution, rng: &mut R) -> Solution {
    let mut bins = solution.shared_bins().to_vec();
    if bins.is_empty() {
        return Solution::from_shared(bins);
    }

    let from = rng.random_range(0..bins.len());
    let to = rng.random_range(0..bins.len());

    if !bins[from].is_empty() {
        let pick = rng.random_range(0..bins[from].len());
        let weight = bins[from].items()[pick].weight();

        if from != to && bins[to].remaining_capacity() >= i64::from(weight) {
            Arc::make_mut(&mut bins[from]).remove_item(weight);
            let target = Arc::make_mut(&mut bins[to]);
            target.add_item(weight, 1);
            debug_assert!(
                target.is_within_capacity(),
                "relocation overfilled a bin: {target:?}"
            );
        }
    }

    let mut neighbor = Solution::from_shared(bins);
    neighbor.remove_empty_bins();
    neighbor
}
