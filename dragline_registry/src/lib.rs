// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragline Registry: last-known geometry of drop targets and sortable items.
//!
//! Components that take part in drag-and-drop report their identity and
//! bounding rectangle here when they mount and whenever their layout changes.
//! The registry is the single source of geometry for hit testing during a
//! drag.
//!
//! - [`GeometryRegistry`]: id-keyed, insert-or-replace store with a
//!   per-entry registration sequence (recency) and a revision counter.
//! - [`Region`]: what the registry stores; anything with an id and a rect.
//! - [`DropTargetInfo`] and [`SortableItemInfo`]: the two region kinds the
//!   drag-and-drop context registers.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use dragline_registry::{DropTargetInfo, GeometryRegistry};
//!
//! let mut targets = GeometryRegistry::new();
//! targets.register(DropTargetInfo::new("inbox", "card", (), Rect::new(0., 0., 100., 100.)));
//!
//! // Re-registration after a layout change overwrites the rect.
//! targets.register(DropTargetInfo::new("inbox", "card", (), Rect::new(0., 0., 120., 100.)));
//! assert_eq!(targets.len(), 1);
//!
//! // Unregistering an id that was never registered is fine.
//! assert!(targets.unregister(&"archive").is_none());
//!
//! let snapshot = targets.all();
//! assert_eq!(snapshot[0].rect.width(), 120.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod region;
mod registry;

pub use region::{DropTargetInfo, Region, SortableItemInfo};
pub use registry::{GeometryRegistry, Registered};
