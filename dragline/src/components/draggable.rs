// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::hash::Hash;

use dragline_gesture::DragItem;
use dragline_gesture::pointer::NativeEvent;

use crate::context::DragDropContext;

/// A mounted drag source.
///
/// Dropping the handle while its item is being dragged cancels the drag, so
/// an unmounted element never leaves a dangling session behind.
#[derive(Debug)]
pub struct Draggable<K, P>
where
    K: Clone + Eq + Hash,
    P: Clone,
{
    ctx: DragDropContext<K, P>,
    item: DragItem<K, P>,
}

impl<K, P> Draggable<K, P>
where
    K: Clone + Eq + Hash,
    P: Clone,
{
    /// Creates a drag source for `item`.
    pub fn new(ctx: &DragDropContext<K, P>, item: DragItem<K, P>) -> Self {
        Self {
            ctx: ctx.clone(),
            item,
        }
    }

    /// The item this source drags.
    #[must_use]
    pub fn item(&self) -> &DragItem<K, P> {
        &self.item
    }

    /// Replaces the item used by later drags. A live drag keeps the item it
    /// started with.
    pub fn set_item(&mut self, item: DragItem<K, P>) {
        self.item = item;
    }

    /// Handles a pointer-down on the element. Returns `true` if a drag
    /// started.
    pub fn pointer_down(&self, native: &NativeEvent) -> bool {
        self.ctx.start_drag(self.item.clone(), native)
    }

    /// Returns `true` while this source's item is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.ctx.is_dragging_item(&self.item.id)
    }
}

impl<K, P> Drop for Draggable<K, P>
where
    K: Clone + Eq + Hash,
    P: Clone,
{
    fn drop(&mut self) {
        if self.is_dragging() {
            self.ctx.cancel_drag();
        }
    }
}
