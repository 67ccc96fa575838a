// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared drag-and-drop coordinator.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::hash::Hash;

use dragline_gesture::pointer::{NativeEvent, PointerId};
use dragline_gesture::{DragGestureTracker, DragItem, DragPhase};
use dragline_hit::HitTester;
use dragline_registry::{DropTargetInfo, GeometryRegistry, SortableItemInfo};
use dragline_sort::{SortMove, SortResolver};
use hashbrown::HashMap;
use kurbo::{Point, Vec2};

use crate::config::DragConfig;
use crate::events::{DragCancelEvent, DragEndEvent, DragMoveEvent, DragStartEvent, PointerPhase};
use crate::hooks::{DragHooks, ReorderHook};

struct Inner<K, P> {
    config: DragConfig,
    hit: HitTester,
    hooks: DragHooks<K, P>,
    targets: RefCell<GeometryRegistry<K, DropTargetInfo<K, P>>>,
    sortables: RefCell<GeometryRegistry<K, SortableItemInfo<K>>>,
    reorder_hooks: RefCell<HashMap<K, ReorderHook<K, P>>>,
    tracker: RefCell<DragGestureTracker<K, P>>,
    sort: RefCell<SortResolver<K>>,
}

/// Shared handle to one drag-and-drop coordinator.
///
/// Cloning is cheap and yields another handle to the same coordinator; pass
/// it to every draggable, droppable and sortable that should interact.
///
/// ## Notifications
///
/// Each accepted transition fires exactly one hook, in the order
/// start → move* → (end | cancel). Hooks run with no internal borrow held,
/// so they may register or unregister regions, or start a new drag after
/// the previous one finished.
///
/// ## Minimal example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use kurbo::{Point, Rect};
/// use dragline::{DragDropContext, DragHooks};
/// use dragline_gesture::DragItem;
/// use dragline_gesture::pointer::NativeEvent;
/// use dragline_registry::DropTargetInfo;
///
/// let dropped_on = Rc::new(Cell::new(None));
/// let sink = dropped_on.clone();
/// let ctx = DragDropContext::with_hooks(
///     DragHooks::new().on_drag_end(move |_, ev| sink.set(ev.over.as_ref().map(|t| t.id))),
/// );
///
/// ctx.register_drop_target(DropTargetInfo::new("bin", "file", (), Rect::new(0., 0., 100., 100.)));
/// ctx.start_drag(DragItem::new("doc", "file", ()), &NativeEvent::mouse(Point::new(150., 150.)));
/// ctx.drag_move(&NativeEvent::mouse(Point::new(50., 50.)));
/// assert_eq!(ctx.get_drag_over_target().map(|t| t.id), Some("bin"));
///
/// ctx.end_drag();
/// assert_eq!(dropped_on.get(), Some("bin"));
/// assert!(!ctx.is_dragging());
/// ```
pub struct DragDropContext<K, P> {
    inner: Rc<Inner<K, P>>,
}

impl<K, P> Clone for DragDropContext<K, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K, P> fmt::Debug for DragDropContext<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragDropContext")
            .field("config", &self.inner.config)
            .field("hooks", &self.inner.hooks)
            .field("drop_targets", &self.inner.targets.borrow().len())
            .field("sortable_items", &self.inner.sortables.borrow().len())
            .field("phase", &self.inner.tracker.borrow().phase())
            .finish_non_exhaustive()
    }
}

impl<K, P> DragDropContext<K, P>
where
    K: Clone + Eq + Hash,
    P: Clone,
{
    /// Creates a coordinator with the given configuration and hooks.
    #[must_use]
    pub fn new(config: DragConfig, hooks: DragHooks<K, P>) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                hit: HitTester::new(config.tie_break),
                hooks,
                targets: RefCell::new(GeometryRegistry::new()),
                sortables: RefCell::new(GeometryRegistry::new()),
                reorder_hooks: RefCell::new(HashMap::new()),
                tracker: RefCell::new(DragGestureTracker::new()),
                sort: RefCell::new(SortResolver::new()),
            }),
        }
    }

    /// Creates a coordinator with the default configuration.
    #[must_use]
    pub fn with_hooks(hooks: DragHooks<K, P>) -> Self {
        Self::new(DragConfig::default(), hooks)
    }

    /// The configuration this coordinator was created with.
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.inner.config
    }

    /// Returns `true` if both handles refer to the same coordinator.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // --- registration ---------------------------------------------------

    /// Inserts or replaces a drop target, keyed by its id.
    pub fn register_drop_target(&self, info: DropTargetInfo<K, P>) {
        self.inner.targets.borrow_mut().register(info);
    }

    /// Removes a drop target. Unknown ids are ignored.
    pub fn unregister_drop_target(&self, id: &K) -> Option<DropTargetInfo<K, P>> {
        self.inner.targets.borrow_mut().unregister(id)
    }

    /// Inserts or replaces a sortable item, keyed by its id.
    pub fn register_sortable_item(&self, info: SortableItemInfo<K>) {
        self.inner.sortables.borrow_mut().register(info);
    }

    /// Removes a sortable item. Unknown ids are ignored.
    pub fn unregister_sortable_item(&self, id: &K) -> Option<SortableItemInfo<K>> {
        self.inner.sortables.borrow_mut().unregister(id)
    }

    /// Installs the callback that applies reorder steps for `collection`,
    /// replacing any previous one.
    pub fn register_reorder_hook(
        &self,
        collection: K,
        hook: impl Fn(&Self, &SortMove<K>) + 'static,
    ) {
        self.inner
            .reorder_hooks
            .borrow_mut()
            .insert(collection, Rc::new(hook));
    }

    /// Removes the reorder callback of `collection`. Unknown ids are ignored.
    pub fn unregister_reorder_hook(&self, collection: &K) {
        self.inner.reorder_hooks.borrow_mut().remove(collection);
    }

    /// Snapshot of every registered drop target, oldest registration first.
    #[must_use]
    pub fn drop_targets(&self) -> Vec<DropTargetInfo<K, P>> {
        self.inner.targets.borrow().all()
    }

    /// The drop target registered under `id`.
    #[must_use]
    pub fn drop_target(&self, id: &K) -> Option<DropTargetInfo<K, P>> {
        self.inner.targets.borrow().get(id).cloned()
    }

    /// Snapshot of every registered sortable item, oldest registration first.
    #[must_use]
    pub fn sortable_items(&self) -> Vec<SortableItemInfo<K>> {
        self.inner.sortables.borrow().all()
    }

    /// The sortable item registered under `id`.
    #[must_use]
    pub fn sortable_item(&self, id: &K) -> Option<SortableItemInfo<K>> {
        self.inner.sortables.borrow().get(id).cloned()
    }

    // --- gesture --------------------------------------------------------

    /// Starts dragging `item` from the pointer-down event `native`.
    ///
    /// Returns `false`, with no notification, if a drag is already live, the
    /// event carries no pointer, or it is a non-primary mouse press while
    /// [`DragConfig::primary_button_only`] is set.
    pub fn start_drag(&self, item: DragItem<K, P>, native: &NativeEvent) -> bool {
        if self.inner.config.primary_button_only && !native.is_primary() {
            #[cfg(feature = "tracing")]
            tracing::trace!("drag start ignored: not a primary press");
            return false;
        }
        let Some((pointer, origin)) = native.pointer() else {
            return false;
        };
        let item = {
            let mut tracker = self.inner.tracker.borrow_mut();
            if !tracker.start(item, origin, pointer) {
                return false;
            }
            tracker.item().cloned()
        };
        self.inner.sort.borrow_mut().reset();

        if let (Some(hook), Some(item)) = (&self.inner.hooks.on_drag_start, item) {
            hook(
                self,
                &DragStartEvent {
                    item,
                    coordinates: origin,
                    native: native.clone(),
                },
            );
        }
        true
    }

    /// Follows the pointer that owns the drag to its position in `native`.
    ///
    /// Events in which the owner did not change, such as a `touchmove` of a
    /// second finger, and all events while idle, are ignored and return
    /// `false`.
    pub fn drag_move(&self, native: &NativeEvent) -> bool {
        let Some(owner) = self.owner() else {
            return false;
        };
        match native.changed_position_of(owner) {
            Some(pos) => self.move_pointer(owner, pos),
            None => false,
        }
    }

    /// Moves the drag to `pos` as if the owning pointer had moved there.
    pub fn drag_move_to(&self, pos: Point) -> bool {
        match self.owner() {
            Some(owner) => self.move_pointer(owner, pos),
            None => false,
        }
    }

    /// Ends the live drag as a drop at the latest tracked position.
    ///
    /// Returns `false` when idle.
    pub fn end_drag(&self) -> bool {
        let Some(session) = self.inner.tracker.borrow_mut().end() else {
            return false;
        };
        self.inner.sort.borrow_mut().reset();
        let over = self.resolve_over(&session.item, session.current);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            dropped = over.is_some(),
            x = session.current.x,
            y = session.current.y,
            "drag ended"
        );

        if let Some(hook) = &self.inner.hooks.on_drag_end {
            let delta = session.delta();
            hook(
                self,
                &DragEndEvent {
                    item: session.item,
                    coordinates: session.current,
                    delta,
                    over,
                },
            );
        }
        true
    }

    /// Cancels the live drag. Returns `false` when idle, so repeated
    /// cancellation signals notify once.
    pub fn cancel_drag(&self) -> bool {
        let Some(session) = self.inner.tracker.borrow_mut().cancel() else {
            return false;
        };
        self.inner.sort.borrow_mut().reset();

        #[cfg(feature = "tracing")]
        tracing::debug!("drag cancelled");

        if let Some(hook) = &self.inner.hooks.on_drag_cancel {
            hook(self, &DragCancelEvent { item: session.item });
        }
        true
    }

    /// Routes a host pointer event.
    ///
    /// Up and cancel events only count when they come from the pointer that
    /// owns the drag; lifting a second finger does not drop.
    pub fn handle_pointer(&self, phase: PointerPhase, native: &NativeEvent) -> bool {
        match phase {
            PointerPhase::Move => self.drag_move(native),
            PointerPhase::Up | PointerPhase::Cancel => {
                let owned = self
                    .owner()
                    .is_some_and(|owner| native.changed_position_of(owner).is_some());
                if !owned {
                    return false;
                }
                if phase == PointerPhase::Up {
                    self.end_drag()
                } else {
                    self.cancel_drag()
                }
            }
        }
    }

    /// Routes a host key press, by DOM `KeyboardEvent.key` name.
    ///
    /// `"Escape"` cancels the live drag when
    /// [`DragConfig::cancel_on_escape`] is set.
    pub fn handle_key(&self, key: &str) -> bool {
        if key == "Escape" && self.inner.config.cancel_on_escape {
            self.cancel_drag()
        } else {
            false
        }
    }

    /// Cancels the live drag after the host lost pointer capture.
    pub fn handle_lost_pointer_capture(&self) -> bool {
        self.cancel_drag()
    }

    // --- queries --------------------------------------------------------

    /// The drop target under the latest tracked pointer position.
    ///
    /// Resolved fresh on each call, so it reflects registrations made since
    /// the last move. `None` while idle.
    #[must_use]
    pub fn get_drag_over_target(&self) -> Option<DropTargetInfo<K, P>> {
        let tracker = self.inner.tracker.borrow();
        let session = tracker.session()?;
        self.resolve_over(&session.item, session.current)
    }

    /// Returns `true` if the drop target `id` is under the dragged pointer.
    #[must_use]
    pub fn is_over(&self, id: &K) -> bool {
        let tracker = self.inner.tracker.borrow();
        let Some(session) = tracker.session() else {
            return false;
        };
        let targets = self.inner.targets.borrow();
        self.hit_target(&targets, &session.item, session.current)
            .is_some_and(|t| t.id == *id)
    }

    /// Returns `true` while a drag is live.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.inner.tracker.borrow().is_dragging()
    }

    /// Returns `true` if the live drag is dragging the item `id`.
    #[must_use]
    pub fn is_dragging_item(&self, id: &K) -> bool {
        self.inner
            .tracker
            .borrow()
            .item()
            .is_some_and(|item| item.id == *id)
    }

    /// Tracker phase: dragging or idle.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.inner.tracker.borrow().phase()
    }

    /// The item being dragged.
    #[must_use]
    pub fn active_item(&self) -> Option<DragItem<K, P>> {
        self.inner.tracker.borrow().item().cloned()
    }

    /// Latest tracked pointer position.
    #[must_use]
    pub fn pointer_position(&self) -> Option<Point> {
        self.inner.tracker.borrow().current()
    }

    /// Offset of the pointer from the drag origin.
    #[must_use]
    pub fn delta(&self) -> Option<Vec2> {
        self.inner.tracker.borrow().delta()
    }

    // --- internals ------------------------------------------------------

    fn owner(&self) -> Option<PointerId> {
        self.inner.tracker.borrow().session().map(|s| s.pointer)
    }

    fn move_pointer(&self, pointer: PointerId, pos: Point) -> bool {
        let (item, delta) = {
            let mut tracker = self.inner.tracker.borrow_mut();
            let Some(delta) = tracker.update(pointer, pos) else {
                return false;
            };
            match tracker.item() {
                Some(item) => (item.clone(), delta),
                None => return false,
            }
        };

        let over = self.resolve_over(&item, pos);
        let reorder = self.sort_step(&item, pos);

        #[cfg(feature = "tracing")]
        tracing::trace!(x = pos.x, y = pos.y, over = over.is_some(), "drag moved");

        if let Some(step) = &reorder {
            let hook = self.inner.reorder_hooks.borrow().get(&step.collection).cloned();
            if let Some(hook) = hook {
                #[cfg(feature = "tracing")]
                tracing::debug!(from = step.from, to = step.to, "sortable reorder");
                hook(self, step);
            }
            // The reorder hook may have finished the drag; a move must not
            // follow the end notification.
            if !self.is_dragging_item(&item.id) {
                return true;
            }
        }

        if let Some(hook) = &self.inner.hooks.on_drag_move {
            hook(
                self,
                &DragMoveEvent {
                    item,
                    coordinates: pos,
                    delta,
                    over,
                    reorder,
                },
            );
        }
        true
    }

    fn resolve_over(&self, item: &DragItem<K, P>, pos: Point) -> Option<DropTargetInfo<K, P>> {
        let targets = self.inner.targets.borrow();
        self.hit_target(&targets, item, pos).cloned()
    }

    fn hit_target<'a>(
        &self,
        targets: &'a GeometryRegistry<K, DropTargetInfo<K, P>>,
        item: &DragItem<K, P>,
        pos: Point,
    ) -> Option<&'a DropTargetInfo<K, P>> {
        let match_kinds = self.inner.config.match_kinds;
        self.inner
            .hit
            .resolve_filtered(pos, targets, |t| !match_kinds || t.kind == item.kind)
    }

    fn sort_step(&self, item: &DragItem<K, P>, pos: Point) -> Option<SortMove<K>> {
        let (collection, from, hovered) = {
            let sortables = self.inner.sortables.borrow();
            let dragged = sortables.get(&item.id)?;
            let collection = dragged.collection.clone();
            let hovered = self
                .inner
                .hit
                .resolve_filtered(pos, &sortables, |s| s.collection == collection)
                .map(|s| s.index);
            (collection, dragged.index, hovered)
        };
        self.inner
            .sort
            .borrow_mut()
            .track(collection, item.id.clone(), from, hovered)
    }
}

impl<K, P> Default for DragDropContext<K, P>
where
    K: Clone + Eq + Hash,
    P: Clone,
{
    fn default() -> Self {
        Self::new(DragConfig::default(), DragHooks::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::cell::Cell;
    use kurbo::Rect;

    type Ctx = DragDropContext<&'static str, u32>;

    fn item(id: &'static str) -> DragItem<&'static str, u32> {
        DragItem::new(id, "card", 0)
    }

    fn mouse(x: f64, y: f64) -> NativeEvent {
        NativeEvent::mouse(Point::new(x, y))
    }

    #[test]
    fn starts_and_ends_without_hooks() {
        let ctx = Ctx::default();
        assert!(ctx.start_drag(item("a"), &mouse(1., 1.)));
        assert!(ctx.is_dragging_item(&"a"));
        assert!(ctx.end_drag());
        assert_eq!(ctx.phase(), DragPhase::Idle);
        assert!(!ctx.end_drag());
    }

    #[test]
    fn secondary_button_does_not_start() {
        let ctx = Ctx::default();
        let ev = NativeEvent::mouse_with_buttons(Point::ZERO, dragline_gesture::pointer::Buttons::SECONDARY);
        assert!(!ctx.start_drag(item("a"), &ev));

        let any = Ctx::new(DragConfig::default().any_button(), DragHooks::new());
        assert!(any.start_drag(item("a"), &ev));
    }

    #[test]
    fn kind_matching_filters_targets() {
        let ctx = Ctx::new(DragConfig::default().match_kinds(), DragHooks::new());
        ctx.register_drop_target(DropTargetInfo::new("photos", "image", 0, Rect::new(0., 0., 10., 10.)));
        ctx.start_drag(item("a"), &mouse(5., 5.));
        assert!(ctx.get_drag_over_target().is_none());

        ctx.register_drop_target(DropTargetInfo::new("cards", "card", 0, Rect::new(0., 0., 20., 20.)));
        assert_eq!(ctx.get_drag_over_target().map(|t| t.id), Some("cards"));
    }

    #[test]
    fn escape_respects_config() {
        let ctx = Ctx::new(DragConfig::default().no_escape_cancel(), DragHooks::new());
        ctx.start_drag(item("a"), &mouse(0., 0.));
        assert!(!ctx.handle_key("Escape"));
        assert!(ctx.is_dragging());
        assert!(ctx.handle_lost_pointer_capture());
        assert!(!ctx.is_dragging());
    }

    #[test]
    fn move_notification_counts() {
        let moves = Rc::new(Cell::new(0));
        let sink = moves.clone();
        let ctx = Ctx::with_hooks(DragHooks::new().on_drag_move(move |_, _| sink.set(sink.get() + 1)));

        ctx.drag_move(&mouse(1., 1.));
        ctx.start_drag(item("a"), &mouse(0., 0.));
        for p in vec![(1., 1.), (2., 2.), (3., 3.)] {
            ctx.drag_move(&mouse(p.0, p.1));
        }
        ctx.drag_move(&NativeEvent::touch(1, Point::new(9., 9.)));
        assert_eq!(moves.get(), 3);
        assert_eq!(ctx.delta(), Some(Vec2::new(3., 3.)));
    }

    #[test]
    fn clones_share_state() {
        let a = Ctx::default();
        let b = a.clone();
        a.start_drag(item("x"), &mouse(0., 0.));
        assert!(b.is_dragging());
        assert!(a.ptr_eq(&b));
    }
}
