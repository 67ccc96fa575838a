// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragline Gesture: the drag session state machine and its pointer input.
//!
//! - [`tracker`]: [`DragGestureTracker`] owns the single drag session, its
//!   origin, current position and lifecycle.
//! - [`pointer`]: [`NativeEvent`](pointer::NativeEvent), a small model of
//!   mouse and touch events with client coordinates, and
//!   [`PointerId`](pointer::PointerId) to tell pointers apart.
//!
//! The tracker does no hit testing and invokes no callbacks. It reports
//! transitions through return values; the drag-and-drop context layered on
//! top turns them into notifications.
//!
//! ## Single session
//!
//! At most one session is live at a time. A session is owned by the pointer
//! that started it, so a second finger touching the screen mid-drag neither
//! starts a new drag nor moves the current one.
//!
//! ## Features
//!
//! - `tracing`: log session transitions with the `tracing` crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod pointer;
pub mod tracker;

pub use tracker::{DragGestureTracker, DragItem, DragPhase, DragSession};
