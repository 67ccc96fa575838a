// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation of the `[0, N)` index invariant of a sortable collection.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Ways a collection's item indices can violate the `[0, N)` invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// Two items claim the same index.
    Duplicate {
        /// The repeated index.
        index: usize,
    },
    /// An index is not below the item count, which also means some lower
    /// index is missing.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of items in the collection.
        len: usize,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { index } => write!(f, "index {index} is used by more than one item"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} is out of range for {len} items")
            }
        }
    }
}

impl core::error::Error for IndexError {}

/// Checks that `indices` is a permutation of `0..n`, where `n` is the count.
///
/// ```
/// use dragline_sort::{validate_indices, IndexError};
///
/// assert!(validate_indices([2, 0, 1]).is_ok());
/// assert_eq!(validate_indices([0, 0]), Err(IndexError::Duplicate { index: 0 }));
/// assert_eq!(validate_indices([0, 2]), Err(IndexError::OutOfRange { index: 2, len: 2 }));
/// ```
pub fn validate_indices<I>(indices: I) -> Result<(), IndexError>
where
    I: IntoIterator<Item = usize>,
{
    let indices: Vec<usize> = indices.into_iter().collect();
    let len = indices.len();
    let mut seen = vec![false; len];
    for index in indices {
        let slot = seen
            .get_mut(index)
            .ok_or(IndexError::OutOfRange { index, len })?;
        if *slot {
            return Err(IndexError::Duplicate { index });
        }
        *slot = true;
    }
    Ok(())
}
