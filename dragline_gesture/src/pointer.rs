// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input model: mouse and touch events with client coordinates.
//!
//! Events arrive from the host toolkit in roughly the shape browsers deliver
//! them. A mouse event carries one position and the set of pressed buttons.
//! A touch event carries the list of active touches plus the touches that
//! changed in this event; on `touchend` the active list no longer contains
//! the lifted finger, so coordinates fall back to the changed list.
//!
//! ```
//! use kurbo::Point;
//! use dragline_gesture::pointer::{NativeEvent, PointerId};
//!
//! let down = NativeEvent::touch(7, Point::new(4.0, 9.0));
//! assert_eq!(down.pointer(), Some((PointerId::Touch(7), Point::new(4.0, 9.0))));
//!
//! let up = NativeEvent::touch_end(7, Point::new(6.0, 9.0));
//! assert_eq!(up.position_of(PointerId::Touch(7)), Some(Point::new(6.0, 9.0)));
//! ```

use kurbo::Point;
use smallvec::SmallVec;

bitflags::bitflags! {
    /// Pressed mouse buttons, using the bit layout of DOM `MouseEvent.buttons`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        /// Primary button (usually left).
        const PRIMARY   = 0b0000_0001;
        /// Secondary button (usually right).
        const SECONDARY = 0b0000_0010;
        /// Auxiliary button (usually the wheel).
        const AUXILIARY = 0b0000_0100;
        /// Browser back button.
        const BACK      = 0b0000_1000;
        /// Browser forward button.
        const FORWARD   = 0b0001_0000;
    }
}

/// Identifies the physical pointer that owns a drag session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerId {
    /// The mouse. There is only ever one.
    Mouse,
    /// A touch contact, by its platform identifier.
    Touch(u64),
}

/// A mouse event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseEvent {
    /// Pointer position in viewport pixel space.
    pub client: Point,
    /// Buttons held while the event fired.
    pub buttons: Buttons,
}

/// One touch contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Platform identifier, stable for the lifetime of the contact.
    pub identifier: u64,
    /// Contact position in viewport pixel space.
    pub client: Point,
}

/// A touch event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchEvent {
    /// Contacts currently on the surface.
    pub touches: SmallVec<[TouchPoint; 2]>,
    /// Contacts that changed in this event.
    pub changed_touches: SmallVec<[TouchPoint; 2]>,
}

/// A pointer-origin event as delivered by the host toolkit.
#[derive(Clone, Debug, PartialEq)]
pub enum NativeEvent {
    /// Mouse input.
    Mouse(MouseEvent),
    /// Touch input.
    Touch(TouchEvent),
}

impl NativeEvent {
    /// A mouse event with only the primary button held.
    #[must_use]
    pub fn mouse(client: Point) -> Self {
        Self::mouse_with_buttons(client, Buttons::PRIMARY)
    }

    /// A mouse event with the given buttons held.
    #[must_use]
    pub fn mouse_with_buttons(client: Point, buttons: Buttons) -> Self {
        Self::Mouse(MouseEvent { client, buttons })
    }

    /// A touch event with a single active contact (`touchstart`/`touchmove`).
    #[must_use]
    pub fn touch(identifier: u64, client: Point) -> Self {
        let point = TouchPoint { identifier, client };
        Self::Touch(TouchEvent {
            touches: smallvec::smallvec![point],
            changed_touches: smallvec::smallvec![point],
        })
    }

    /// A `touchend` for a contact that just lifted: it appears only in the
    /// changed list.
    #[must_use]
    pub fn touch_end(identifier: u64, client: Point) -> Self {
        Self::Touch(TouchEvent {
            touches: SmallVec::new(),
            changed_touches: smallvec::smallvec![TouchPoint { identifier, client }],
        })
    }

    /// A touch event with explicit active and changed contact lists.
    ///
    /// Browsers list every finger still on the surface in `touches`, so a
    /// `touchmove` of one finger also carries the others.
    #[must_use]
    pub fn touch_lists(touches: &[TouchPoint], changed_touches: &[TouchPoint]) -> Self {
        Self::Touch(TouchEvent {
            touches: SmallVec::from_slice(touches),
            changed_touches: SmallVec::from_slice(changed_touches),
        })
    }

    /// The pointer that originated this event and its position.
    ///
    /// For touch events this is the first active contact, or the first
    /// changed contact when none are active. Returns `None` for a touch
    /// event with no contacts at all.
    #[must_use]
    pub fn pointer(&self) -> Option<(PointerId, Point)> {
        match self {
            Self::Mouse(m) => Some((PointerId::Mouse, m.client)),
            Self::Touch(t) => t
                .touches
                .first()
                .or_else(|| t.changed_touches.first())
                .map(|p| (PointerId::Touch(p.identifier), p.client)),
        }
    }

    /// Client coordinates of the originating pointer.
    #[must_use]
    pub fn coordinates(&self) -> Option<Point> {
        self.pointer().map(|(_, pt)| pt)
    }

    /// Position of a specific pointer in this event, if it takes part,
    /// whether it changed or not.
    #[must_use]
    pub fn position_of(&self, id: PointerId) -> Option<Point> {
        match (self, id) {
            (Self::Mouse(m), PointerId::Mouse) => Some(m.client),
            (Self::Touch(t), PointerId::Touch(identifier)) => t
                .touches
                .iter()
                .chain(t.changed_touches.iter())
                .find(|p| p.identifier == identifier)
                .map(|p| p.client),
            _ => None,
        }
    }

    /// Position of a specific pointer if this event is about that pointer.
    ///
    /// Unlike [`position_of`](Self::position_of), a touch contact only counts
    /// when it is in the changed list: a `touchmove` or `touchend` of another
    /// finger still lists the stationary ones in `touches`.
    #[must_use]
    pub fn changed_position_of(&self, id: PointerId) -> Option<Point> {
        match (self, id) {
            (Self::Mouse(m), PointerId::Mouse) => Some(m.client),
            (Self::Touch(t), PointerId::Touch(identifier)) => t
                .changed_touches
                .iter()
                .find(|p| p.identifier == identifier)
                .map(|p| p.client),
            _ => None,
        }
    }

    /// Returns `true` if this event may begin a primary-button drag.
    ///
    /// Mouse events need the primary button held; touch contacts always
    /// qualify.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        match self {
            Self::Mouse(m) => m.buttons.contains(Buttons::PRIMARY),
            Self::Touch(_) => true,
        }
    }
}
