// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! RAII handles that tie a UI element's lifetime to its registrations.
//!
//! Constructing a handle corresponds to mounting the element; dropping it
//! corresponds to unmounting and removes everything it registered.

mod draggable;
mod droppable;
mod sortable;

pub use draggable::Draggable;
pub use droppable::Droppable;
pub use sortable::{Keyed, Sortable};
