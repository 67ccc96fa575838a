// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::hash::Hash;

use dragline_gesture::DragItem;
use dragline_gesture::pointer::NativeEvent;
use dragline_registry::SortableItemInfo;
use dragline_sort::{SortMove, compute_reorder};
use kurbo::Rect;

use crate::context::DragDropContext;

/// Items that carry a stable id.
pub trait Keyed<K> {
    /// The item's id, unique within its collection.
    fn key(&self) -> K;
}

impl<K: Clone> Keyed<K> for K {
    fn key(&self) -> K {
        self.clone()
    }
}

type ReorderCallback<T> = Rc<dyn Fn(&[T])>;

struct SortableState<K, T> {
    collection: K,
    kind: String,
    items: Vec<T>,
    slots: Vec<Rect>,
    on_reorder: Option<ReorderCallback<T>>,
}

impl<K, T> SortableState<K, T>
where
    K: Clone + Eq + Hash,
    T: Keyed<K>,
{
    /// Registers item `i` at slot `i`. Items without a slot get an empty
    /// rect, which never hits.
    fn register<P: Clone>(&self, ctx: &DragDropContext<K, P>) {
        for (index, item) in self.items.iter().enumerate() {
            let rect = self.slots.get(index).copied().unwrap_or(Rect::ZERO);
            ctx.register_sortable_item(SortableItemInfo::new(
                item.key(),
                self.collection.clone(),
                index,
                rect,
            ));
        }
    }

    fn unregister<P: Clone>(&self, ctx: &DragDropContext<K, P>) {
        for item in &self.items {
            ctx.unregister_sortable_item(&item.key());
        }
    }
}

/// A mounted sortable collection.
///
/// Owns the ordered items and one slot rectangle per position. Slots belong
/// to positions, not items: after a reorder the item now at index `i` is
/// registered with slot `i`, so the dragged item follows the pointer and the
/// preview never oscillates between two neighbours.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use kurbo::{Point, Rect};
/// use dragline::{DragDropContext, Sortable};
/// use dragline_gesture::pointer::NativeEvent;
///
/// let ctx = DragDropContext::<&str, ()>::default();
/// let order = Rc::new(RefCell::new(Vec::new()));
/// let sink = order.clone();
///
/// let list = Sortable::new(&ctx, "list", "row", vec!["a", "b", "c"]);
/// list.set_slots((0..3).map(|i| Rect::new(0., i as f64 * 10., 100., i as f64 * 10. + 10.)).collect());
/// list.on_reorder(move |items| *sink.borrow_mut() = items.to_vec());
///
/// list.pointer_down(0, &NativeEvent::mouse(Point::new(5., 5.)), ());
/// ctx.drag_move_to(Point::new(5., 25.));
/// assert_eq!(*order.borrow(), ["b", "c", "a"]);
/// ctx.end_drag();
/// ```
pub struct Sortable<K, P, T>
where
    K: Clone + Eq + Hash + 'static,
    P: Clone + 'static,
    T: Keyed<K> + Clone + 'static,
{
    ctx: DragDropContext<K, P>,
    state: Rc<RefCell<SortableState<K, T>>>,
}

impl<K, P, T> fmt::Debug for Sortable<K, P, T>
where
    K: Clone + Eq + Hash + fmt::Debug + 'static,
    P: Clone + 'static,
    T: Keyed<K> + Clone + fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Sortable")
            .field("collection", &state.collection)
            .field("kind", &state.kind)
            .field("items", &state.items)
            .field("slots", &state.slots)
            .finish_non_exhaustive()
    }
}

impl<K, P, T> Sortable<K, P, T>
where
    K: Clone + Eq + Hash + 'static,
    P: Clone + 'static,
    T: Keyed<K> + Clone + 'static,
{
    /// Mounts `items` as collection `collection` and installs its reorder
    /// hook. Drags started from this collection carry `kind`.
    ///
    /// Items are registered with empty rects until
    /// [`set_slots`](Self::set_slots) supplies the layout.
    pub fn new(
        ctx: &DragDropContext<K, P>,
        collection: K,
        kind: impl Into<String>,
        items: Vec<T>,
    ) -> Self {
        let state = Rc::new(RefCell::new(SortableState {
            collection: collection.clone(),
            kind: kind.into(),
            items,
            slots: Vec::new(),
            on_reorder: None,
        }));
        state.borrow().register(ctx);

        let weak = Rc::downgrade(&state);
        ctx.register_reorder_hook(collection, move |ctx, step| {
            apply_step(ctx, &weak, step);
        });

        Self {
            ctx: ctx.clone(),
            state,
        }
    }

    /// Sets the callback that receives the new order after every reorder
    /// step.
    pub fn on_reorder(&self, f: impl Fn(&[T]) + 'static) {
        self.state.borrow_mut().on_reorder = Some(Rc::new(f));
    }

    /// Replaces the slot rectangles, one per position, and re-registers.
    pub fn set_slots(&self, slots: Vec<Rect>) {
        let mut state = self.state.borrow_mut();
        state.slots = slots;
        state.register(&self.ctx);
    }

    /// Replaces the items, for example after the application changed the
    /// list, and re-registers.
    pub fn set_items(&self, items: Vec<T>) {
        let mut state = self.state.borrow_mut();
        state.unregister(&self.ctx);
        state.items = items;
        state.register(&self.ctx);
    }

    /// Snapshot of the items in their current order.
    #[must_use]
    pub fn items(&self) -> Vec<T> {
        self.state.borrow().items.clone()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    /// Returns `true` if the collection has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().items.is_empty()
    }

    /// Handles a pointer-down on the item at `index`. Returns `true` if a
    /// drag started.
    pub fn pointer_down(&self, index: usize, native: &NativeEvent, payload: P) -> bool {
        let item = {
            let state = self.state.borrow();
            let Some(item) = state.items.get(index) else {
                return false;
            };
            DragItem::new(item.key(), state.kind.clone(), payload)
        };
        self.ctx.start_drag(item, native)
    }
}

impl<K, P, T> Drop for Sortable<K, P, T>
where
    K: Clone + Eq + Hash + 'static,
    P: Clone + 'static,
    T: Keyed<K> + Clone + 'static,
{
    fn drop(&mut self) {
        let state = self.state.borrow();
        state.unregister(&self.ctx);
        self.ctx.unregister_reorder_hook(&state.collection);
    }
}

fn apply_step<K, P, T>(
    ctx: &DragDropContext<K, P>,
    state: &Weak<RefCell<SortableState<K, T>>>,
    step: &SortMove<K>,
) where
    K: Clone + Eq + Hash,
    P: Clone,
    T: Keyed<K> + Clone,
{
    let Some(state) = state.upgrade() else {
        return;
    };
    let (callback, snapshot) = {
        let mut state = state.borrow_mut();
        // Locate the dragged item by id; the registry index may lag behind a
        // concurrent `set_items`.
        let from = state
            .items
            .iter()
            .position(|item| item.key() == step.item)
            .unwrap_or(step.from);
        let items = core::mem::take(&mut state.items);
        state.items = compute_reorder(items, from, step.to);
        state.register(ctx);
        match &state.on_reorder {
            Some(cb) => (Rc::clone(cb), state.items.clone()),
            None => return,
        }
    };
    callback(snapshot.as_slice());
}
