// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registered region types: drop targets and sortable items.

use alloc::string::String;
use kurbo::Rect;

/// A value that occupies a rectangle and is keyed by an id.
///
/// [`GeometryRegistry`](crate::GeometryRegistry) stores any `Region` keyed by
/// [`Region::id`]; hit testing only needs [`Region::rect`].
pub trait Region<K> {
    /// The registration id. Must be unique among concurrently registered values.
    fn id(&self) -> &K;

    /// Last-known bounding rectangle in viewport pixel space.
    fn rect(&self) -> Rect;
}

/// Geometry and identity of a registered drop target.
///
/// One entry exists per mounted droppable. The `rect` is refreshed each time
/// the droppable re-registers after a layout-affecting change.
#[derive(Clone, Debug, PartialEq)]
pub struct DropTargetInfo<K, P> {
    /// Unique id of the drop target.
    pub id: K,
    /// Application-defined kind tag, optionally matched against the dragged item's kind.
    pub kind: String,
    /// Opaque application data.
    pub payload: P,
    /// Bounding rectangle in viewport pixel space.
    pub rect: Rect,
}

impl<K, P> DropTargetInfo<K, P> {
    /// Creates a drop target description.
    pub fn new(id: K, kind: impl Into<String>, payload: P, rect: Rect) -> Self {
        Self {
            id,
            kind: kind.into(),
            payload,
            rect,
        }
    }

    /// Returns a copy with a different rectangle.
    #[must_use]
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }
}

impl<K, P> Region<K> for DropTargetInfo<K, P> {
    fn id(&self) -> &K {
        &self.id
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

/// Geometry and position of one item in a sortable collection.
///
/// Within one `collection`, the owner keeps indices contiguous over `[0, N)`
/// with no duplicates.
#[derive(Clone, Debug, PartialEq)]
pub struct SortableItemInfo<K> {
    /// Unique id of the item.
    pub id: K,
    /// Id of the collection the item belongs to.
    pub collection: K,
    /// Position of the item in its collection.
    pub index: usize,
    /// Bounding rectangle in viewport pixel space.
    pub rect: Rect,
}

impl<K> SortableItemInfo<K> {
    /// Creates a sortable item description.
    pub fn new(id: K, collection: K, index: usize, rect: Rect) -> Self {
        Self {
            id,
            collection,
            index,
            rect,
        }
    }
}

impl<K> Region<K> for SortableItemInfo<K> {
    fn id(&self) -> &K {
        &self.id
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}
