// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Moving one element of an ordered sequence to a new position.

use alloc::vec::Vec;
use core::fmt;

/// Error returned when a reorder index is outside the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// The offending index.
    pub index: usize,
    /// Length of the sequence.
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} is out of range for a sequence of length {}",
            self.index, self.len
        )
    }
}

impl core::error::Error for IndexOutOfRange {}

/// Removes the element at `dragged` and reinserts it at `hovered`.
///
/// Elements between the two positions shift by one toward the vacated slot.
/// Elements are moved, never cloned or dropped, so the result holds exactly
/// the input elements. When `dragged == hovered`, or either index is out of
/// range, the input is returned unchanged.
///
/// Runs in O(n) at worst.
///
/// ```
/// use dragline_sort::compute_reorder;
///
/// assert_eq!(compute_reorder(vec!['A', 'B', 'C', 'D'], 0, 2), ['B', 'C', 'A', 'D']);
/// assert_eq!(compute_reorder(vec!['A', 'B', 'C', 'D'], 3, 0), ['D', 'A', 'B', 'C']);
/// ```
#[must_use]
pub fn compute_reorder<T>(mut items: Vec<T>, dragged: usize, hovered: usize) -> Vec<T> {
    match move_item(&mut items, dragged, hovered) {
        Ok(()) => items,
        // Out-of-range indices leave the order untouched, like every other
        // invalid input during a drag.
        Err(IndexOutOfRange { .. }) => items,
    }
}

/// In-place form of [`compute_reorder`].
///
/// Rotates only the span between `from` and `to`, so the cost is
/// O(|from - to|).
pub fn move_item<T>(items: &mut [T], from: usize, to: usize) -> Result<(), IndexOutOfRange> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(IndexOutOfRange { index, len });
        }
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }
    Ok(())
}
