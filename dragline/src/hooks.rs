// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Application callbacks supplied when a context is created.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;

use dragline_sort::SortMove;

use crate::context::DragDropContext;
use crate::events::{DragCancelEvent, DragEndEvent, DragMoveEvent, DragStartEvent};

/// A lifecycle callback. Receives the context so it can re-enter registration
/// or gesture calls.
pub type Hook<K, P, E> = Box<dyn Fn(&DragDropContext<K, P>, &E)>;

/// Callback a sortable collection owner installs to apply reorder steps.
pub type ReorderHook<K, P> = Rc<dyn Fn(&DragDropContext<K, P>, &SortMove<K>)>;

/// The four drag lifecycle callbacks.
///
/// Each hook runs after the corresponding transition is committed, with no
/// internal state borrowed. A panicking hook therefore leaves the context
/// consistent; the panic still reaches the caller.
///
/// ```
/// use dragline::{DragDropContext, DragHooks};
///
/// let hooks = DragHooks::<u32, ()>::new()
///     .on_drag_end(|_ctx, ev| {
///         let _dropped_on = ev.over.as_ref().map(|t| t.id);
///     })
///     .on_drag_cancel(|_ctx, _ev| {});
/// let ctx = DragDropContext::with_hooks(hooks);
/// assert!(!ctx.is_dragging());
/// ```
pub struct DragHooks<K, P> {
    pub(crate) on_drag_start: Option<Hook<K, P, DragStartEvent<K, P>>>,
    pub(crate) on_drag_move: Option<Hook<K, P, DragMoveEvent<K, P>>>,
    pub(crate) on_drag_end: Option<Hook<K, P, DragEndEvent<K, P>>>,
    pub(crate) on_drag_cancel: Option<Hook<K, P, DragCancelEvent<K, P>>>,
}

impl<K, P> Default for DragHooks<K, P> {
    fn default() -> Self {
        Self {
            on_drag_start: None,
            on_drag_move: None,
            on_drag_end: None,
            on_drag_cancel: None,
        }
    }
}

impl<K, P> fmt::Debug for DragHooks<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragHooks")
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag_move", &self.on_drag_move.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .field("on_drag_cancel", &self.on_drag_cancel.is_some())
            .finish()
    }
}

impl<K, P> DragHooks<K, P> {
    /// No callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once per accepted drag start.
    #[must_use]
    pub fn on_drag_start(
        mut self,
        f: impl Fn(&DragDropContext<K, P>, &DragStartEvent<K, P>) + 'static,
    ) -> Self {
        self.on_drag_start = Some(Box::new(f));
        self
    }

    /// Called on every accepted pointer move during a drag.
    #[must_use]
    pub fn on_drag_move(
        mut self,
        f: impl Fn(&DragDropContext<K, P>, &DragMoveEvent<K, P>) + 'static,
    ) -> Self {
        self.on_drag_move = Some(Box::new(f));
        self
    }

    /// Called once when a drag ends with a drop.
    #[must_use]
    pub fn on_drag_end(
        mut self,
        f: impl Fn(&DragDropContext<K, P>, &DragEndEvent<K, P>) + 'static,
    ) -> Self {
        self.on_drag_end = Some(Box::new(f));
        self
    }

    /// Called once when a drag is cancelled.
    #[must_use]
    pub fn on_drag_cancel(
        mut self,
        f: impl Fn(&DragDropContext<K, P>, &DragCancelEvent<K, P>) + 'static,
    ) -> Self {
        self.on_drag_cancel = Some(Box::new(f));
        self
    }
}
