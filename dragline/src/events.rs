// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notification payloads and inbound pointer phases.
//!
//! Payloads own their data (cloned out of the context) so hooks can call
//! back into the context while holding them.

use dragline_gesture::DragItem;
use dragline_gesture::pointer::NativeEvent;
use dragline_registry::DropTargetInfo;
use dragline_sort::SortMove;
use kurbo::{Point, Vec2};

/// Phase of an inbound pointer event routed through
/// [`DragDropContext::handle_pointer`](crate::DragDropContext::handle_pointer).
///
/// Pointer-down is not listed: a drag starts only through a draggable,
/// which knows the item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// `pointermove` / `mousemove` / `touchmove`.
    Move,
    /// `pointerup` / `mouseup` / `touchend`.
    Up,
    /// `pointercancel` / `touchcancel`.
    Cancel,
}

/// Sent once when a drag starts.
#[derive(Clone, Debug)]
pub struct DragStartEvent<K, P> {
    /// The dragged item.
    pub item: DragItem<K, P>,
    /// Pointer position at pointer-down.
    pub coordinates: Point,
    /// The pointer-down event that started the drag.
    pub native: NativeEvent,
}

/// Sent for each accepted pointer move during a drag.
#[derive(Clone, Debug)]
pub struct DragMoveEvent<K, P> {
    /// The dragged item.
    pub item: DragItem<K, P>,
    /// Current pointer position.
    pub coordinates: Point,
    /// Offset from the drag origin.
    pub delta: Vec2,
    /// Drop target under the pointer, if any.
    pub over: Option<DropTargetInfo<K, P>>,
    /// Reorder step applied on this move, if the dragged item is sortable
    /// and the hovered index changed.
    pub reorder: Option<SortMove<K>>,
}

/// Sent once when a drag ends with a drop.
#[derive(Clone, Debug)]
pub struct DragEndEvent<K, P> {
    /// The dragged item.
    pub item: DragItem<K, P>,
    /// Final pointer position.
    pub coordinates: Point,
    /// Offset from the drag origin.
    pub delta: Vec2,
    /// Drop target under the final position, if any.
    pub over: Option<DropTargetInfo<K, P>>,
}

/// Sent once when a drag is cancelled. Carries no position.
#[derive(Clone, Debug)]
pub struct DragCancelEvent<K, P> {
    /// The item whose drag was cancelled.
    pub item: DragItem<K, P>,
}
