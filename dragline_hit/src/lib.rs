// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragline Hit: resolve which registered region lies under the pointer.
//!
//! [`HitTester::resolve`] scans a [`GeometryRegistry`] once and returns the
//! best region containing the pointer, or `None`.
//!
//! ## Policy
//!
//! 1. Only regions whose rect contains the point are candidates. Edges are
//!    inclusive on all four sides, so a point on the border of a rect counts
//!    as inside, as with bounding-client-rect checks in a browser.
//! 2. Regions with an empty, inverted or non-finite rect never match. A
//!    target that is registered but not laid out (for example hidden) has a
//!    zero-sized rect and is skipped.
//! 3. No candidates means no target. The previous result is never retained.
//! 4. Overlapping candidates are ranked by [`TieBreak`]. The default,
//!    [`TieBreak::SmallestArea`], picks the innermost (smallest) region and
//!    falls back to the most recently registered one when areas are exactly
//!    equal.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use dragline_hit::HitTester;
//! use dragline_registry::{DropTargetInfo, GeometryRegistry};
//!
//! let mut targets = GeometryRegistry::new();
//! targets.register(DropTargetInfo::new("outer", "zone", (), Rect::new(0., 0., 200., 200.)));
//! targets.register(DropTargetInfo::new("inner", "zone", (), Rect::new(50., 50., 150., 150.)));
//!
//! let hits = HitTester::default();
//! assert_eq!(hits.resolve(Point::new(100., 100.), &targets).map(|t| t.id), Some("inner"));
//! assert_eq!(hits.resolve(Point::new(10., 10.), &targets).map(|t| t.id), Some("outer"));
//! assert!(hits.resolve(Point::new(300., 300.), &targets).is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::hash::Hash;

use dragline_registry::{GeometryRegistry, Region, Registered};
use kurbo::{Point, Rect};

/// How to choose between several regions that all contain the pointer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Smallest area wins; exactly equal areas go to the most recently
    /// registered region.
    #[default]
    SmallestArea,
    /// The most recently registered region wins regardless of area.
    ///
    /// Useful when registration order mirrors paint order.
    MostRecent,
}

/// Resolves the region under a point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HitTester {
    tie_break: TieBreak,
}

impl HitTester {
    /// Creates a hit tester with the given tie-break policy.
    #[must_use]
    pub const fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    /// Returns the tie-break policy.
    #[must_use]
    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Returns the best region containing `pt`, or `None`.
    pub fn resolve<'a, K, V>(&self, pt: Point, registry: &'a GeometryRegistry<K, V>) -> Option<&'a V>
    where
        K: Clone + Eq + Hash,
        V: Region<K>,
    {
        self.resolve_filtered(pt, registry, |_| true)
    }

    /// Like [`resolve`](Self::resolve), considering only regions accepted by `filter`.
    ///
    /// The filter runs before the containment test, so it sees every entry.
    pub fn resolve_filtered<'a, K, V, F>(
        &self,
        pt: Point,
        registry: &'a GeometryRegistry<K, V>,
        mut filter: F,
    ) -> Option<&'a V>
    where
        K: Clone + Eq + Hash,
        V: Region<K>,
        F: FnMut(&V) -> bool,
    {
        let mut best: Option<(&'a Registered<V>, f64)> = None;
        for entry in registry.entries() {
            if !filter(&entry.value) {
                continue;
            }
            let rect = entry.value.rect();
            if !contains_inclusive(rect, pt) {
                continue;
            }
            let area = rect.area();
            best = match best {
                Some((current, current_area)) if !self.beats(entry, area, current, current_area) => {
                    Some((current, current_area))
                }
                _ => Some((entry, area)),
            };
        }
        best.map(|(entry, _)| &entry.value)
    }

    fn beats<V>(&self, cand: &Registered<V>, cand_area: f64, cur: &Registered<V>, cur_area: f64) -> bool {
        match self.tie_break {
            TieBreak::SmallestArea => {
                cand_area < cur_area || (cand_area == cur_area && cand.sequence > cur.sequence)
            }
            TieBreak::MostRecent => cand.sequence > cur.sequence,
        }
    }
}

/// Returns `true` if `rect` can be hit at all: finite, with positive width
/// and height.
#[must_use]
pub fn is_hittable(rect: Rect) -> bool {
    rect.is_finite() && rect.width() > 0.0 && rect.height() > 0.0
}

/// Containment test with inclusive edges on all sides.
///
/// Rects that are not [hittable](is_hittable) contain nothing.
#[must_use]
pub fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    is_hittable(rect) && pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}
