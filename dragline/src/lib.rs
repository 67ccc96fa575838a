// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragline: headless drag-and-drop coordination.
//!
//! ## Overview
//!
//! A [`DragDropContext`] coordinates one drag session at a time between
//! draggable items, drop targets and sortable collections. UI code reports
//! geometry and forwards pointer and keyboard events; the context answers
//! "what is under the pointer", computes live reorder previews and fires
//! lifecycle hooks. It renders nothing and knows no UI framework.
//!
//! The context is layered over four smaller crates, re-exported here:
//!
//! - `dragline_registry`: id-keyed geometry registries with recency.
//! - `dragline_hit`: point containment with a smallest-area tie-break.
//! - `dragline_gesture`: the drag session state machine and pointer input.
//! - `dragline_sort`: reorder arithmetic and hovered-index tracking.
//!
//! ## Lifecycle
//!
//! Every accepted drag produces exactly one `on_drag_start`, any number of
//! `on_drag_move`, then exactly one of `on_drag_end` or `on_drag_cancel`.
//! Pointer-up drops; Escape, `pointercancel` and lost pointer capture
//! cancel. A second cancellation signal is a no-op.
//!
//! ## Components
//!
//! [`Droppable`], [`Draggable`] and [`Sortable`] are RAII handles: creating
//! one mounts it, dropping it unmounts it and removes its registrations.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use dragline::{DragDropContext, DragHooks, DragItem, Draggable, Droppable, DropTargetInfo,
//!     NativeEvent, PointerPhase};
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let sink = log.clone();
//! let ctx = DragDropContext::with_hooks(
//!     DragHooks::new()
//!         .on_drag_end(move |_, ev| sink.borrow_mut().push(ev.over.as_ref().map(|t| t.id))),
//! );
//!
//! let _trash = Droppable::new(&ctx, DropTargetInfo::new(1, "file", (), Rect::new(0., 0., 50., 50.)));
//! let file = Draggable::new(&ctx, DragItem::new(7, "file", ()));
//!
//! assert!(file.pointer_down(&NativeEvent::mouse(Point::new(100., 100.))));
//! ctx.handle_pointer(PointerPhase::Move, &NativeEvent::mouse(Point::new(20., 20.)));
//! ctx.handle_pointer(PointerPhase::Up, &NativeEvent::mouse(Point::new(20., 20.)));
//!
//! assert_eq!(*log.borrow(), [Some(1)]);
//! assert!(!ctx.is_dragging());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: `no_std` float support for `kurbo`.
//! - `tracing`: log drag transitions with the `tracing` crate.
//!
//! This crate is `no_std` and uses `alloc`. Handles are single-threaded
//! (`Rc` and `RefCell` inside).

#![no_std]

extern crate alloc;

mod components;
mod config;
mod context;
mod events;
mod hooks;

pub use components::{Draggable, Droppable, Keyed, Sortable};
pub use config::DragConfig;
pub use context::DragDropContext;
pub use events::{DragCancelEvent, DragEndEvent, DragMoveEvent, DragStartEvent, PointerPhase};
pub use hooks::{DragHooks, Hook, ReorderHook};

pub use dragline_gesture::pointer::{Buttons, NativeEvent, PointerId, TouchPoint};
pub use dragline_gesture::{DragItem, DragPhase};
pub use dragline_hit::TieBreak;
pub use dragline_registry::{DropTargetInfo, SortableItemInfo};
pub use dragline_sort::{SortMove, compute_reorder};
