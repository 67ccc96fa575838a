// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragline Sort: reordering for sortable collections.
//!
//! This crate holds the pure parts of sortable drag-and-drop. It knows
//! nothing about geometry or pointers:
//!
//! - [`compute_reorder`] / [`move_item`]: move one element to a new position,
//!   shifting the elements in between.
//! - [`validate_indices`]: check that a collection's item indices still form
//!   `[0, N)` with no duplicates.
//! - [`SortResolver`]: turn per-move hovered indices into [`SortMove`] steps
//!   so live previews reorder once per hovered-index change.
//!
//! ## Minimal example
//!
//! ```rust
//! use dragline_sort::{compute_reorder, validate_indices};
//!
//! let items = vec!["A", "B", "C", "D"];
//! let items = compute_reorder(items, 0, 2);
//! assert_eq!(items, ["B", "C", "A", "D"]);
//!
//! // Reassigning indices by position keeps the invariant.
//! assert!(validate_indices(0..items.len()).is_ok());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod indices;
mod reorder;
mod resolver;

pub use indices::{IndexError, validate_indices};
pub use reorder::{IndexOutOfRange, compute_reorder, move_item};
pub use resolver::{SortMove, SortResolver};
