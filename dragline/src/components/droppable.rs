// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::hash::Hash;

use dragline_registry::DropTargetInfo;
use kurbo::Rect;

use crate::context::DragDropContext;

/// A mounted drop target.
///
/// Registers on construction and unregisters when dropped. Call
/// [`set_rect`](Self::set_rect) after layout changes so hit testing sees the
/// new geometry.
#[derive(Debug)]
pub struct Droppable<K, P>
where
    K: Clone + Eq + Hash,
    P: Clone,
{
    ctx: DragDropContext<K, P>,
    info: DropTargetInfo<K, P>,
}

impl<K, P> Droppable<K, P>
where
    K: Clone + Eq + Hash,
    P: Clone,
{
    /// Registers `info` with `ctx`.
    pub fn new(ctx: &DragDropContext<K, P>, info: DropTargetInfo<K, P>) -> Self {
        ctx.register_drop_target(info.clone());
        Self {
            ctx: ctx.clone(),
            info,
        }
    }

    /// The target's id.
    #[must_use]
    pub fn id(&self) -> &K {
        &self.info.id
    }

    /// The registered description.
    #[must_use]
    pub fn info(&self) -> &DropTargetInfo<K, P> {
        &self.info
    }

    /// Re-registers with a new bounding rectangle.
    pub fn set_rect(&mut self, rect: Rect) {
        self.info.rect = rect;
        self.ctx.register_drop_target(self.info.clone());
    }

    /// Returns `true` while a dragged pointer is over this target.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.ctx.is_over(&self.info.id)
    }
}

impl<K, P> Drop for Droppable<K, P>
where
    K: Clone + Eq + Hash,
    P: Clone,
{
    fn drop(&mut self) {
        self.ctx.unregister_drop_target(&self.info.id);
    }
}
