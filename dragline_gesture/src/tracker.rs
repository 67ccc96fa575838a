// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session state machine: `Idle → Dragging → {Ended, Cancelled} → Idle`.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragGestureTracker::start`] on pointer-down over a draggable.
//! 2) On each move event, call [`DragGestureTracker::update`] to get the offset from the origin.
//! 3) Finish with [`DragGestureTracker::end`] on pointer-up, or
//!    [`DragGestureTracker::cancel`] on Escape or lost pointer capture.
//!
//! Out-of-order input is tolerated: starting while dragging, and moving,
//! ending or cancelling while idle, are ignored rather than reported.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use dragline_gesture::{DragGestureTracker, DragItem, DragPhase};
//! use dragline_gesture::pointer::PointerId;
//!
//! let mut tracker = DragGestureTracker::new();
//! let item = DragItem::new("card-1", "card", ());
//!
//! assert!(tracker.start(item.clone(), Point::new(10.0, 10.0), PointerId::Mouse));
//! // A second start is rejected until the session finishes.
//! assert!(!tracker.start(item, Point::new(0.0, 0.0), PointerId::Mouse));
//!
//! let delta = tracker.update(PointerId::Mouse, Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta, Vec2::new(5.0, 15.0));
//!
//! let finished = tracker.end().unwrap();
//! assert_eq!(finished.phase, DragPhase::Ended);
//! assert_eq!(tracker.phase(), DragPhase::Idle);
//! ```

use alloc::string::String;
use kurbo::{Point, Vec2};

use crate::pointer::PointerId;

/// The thing being dragged.
///
/// Immutable for the lifetime of a session once the drag starts.
#[derive(Clone, Debug, PartialEq)]
pub struct DragItem<K, P> {
    /// Unique id among concurrently registered draggables.
    pub id: K,
    /// Application-defined kind tag.
    pub kind: String,
    /// Opaque application data.
    pub payload: P,
}

impl<K, P> DragItem<K, P> {
    /// Creates a drag item.
    pub fn new(id: K, kind: impl Into<String>, payload: P) -> Self {
        Self {
            id,
            kind: kind.into(),
            payload,
        }
    }
}

/// Lifecycle phase of the tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No session.
    #[default]
    Idle,
    /// A session is live.
    Dragging,
    /// The session finished with a drop. Only observed on the session
    /// returned by [`DragGestureTracker::end`].
    Ended,
    /// The session was aborted. Only observed on the session returned by
    /// [`DragGestureTracker::cancel`].
    Cancelled,
}

impl DragPhase {
    /// Returns `true` for [`Ended`](Self::Ended) and [`Cancelled`](Self::Cancelled).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// One drag gesture from pointer-down to drop or cancel.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<K, P> {
    /// The dragged item.
    pub item: DragItem<K, P>,
    /// Pointer position when the drag started.
    pub origin: Point,
    /// Latest pointer position.
    pub current: Point,
    /// Pointer that owns the session.
    pub pointer: PointerId,
    /// Phase of this session.
    pub phase: DragPhase,
}

impl<K, P> DragSession<K, P> {
    /// Offset of the current position from the origin.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.current - self.origin
    }
}

/// Owns the single drag session.
#[derive(Clone, Debug)]
pub struct DragGestureTracker<K, P> {
    session: Option<DragSession<K, P>>,
}

impl<K, P> Default for DragGestureTracker<K, P> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<K, P> DragGestureTracker<K, P> {
    /// Creates an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self { session: None }
    }

    /// Starts a session at `origin` owned by `pointer`.
    ///
    /// Returns `false` and leaves the live session untouched if a drag is
    /// already in progress.
    pub fn start(&mut self, item: DragItem<K, P>, origin: Point, pointer: PointerId) -> bool {
        if self.session.is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!(?pointer, "drag start ignored: session already active");
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(x = origin.x, y = origin.y, ?pointer, "drag started");
        self.session = Some(DragSession {
            item,
            origin,
            current: origin,
            pointer,
            phase: DragPhase::Dragging,
        });
        true
    }

    /// Records a new pointer position and returns the offset from the origin.
    ///
    /// Returns `None` without changes when idle or when `pointer` does not
    /// own the session.
    pub fn update(&mut self, pointer: PointerId, pos: Point) -> Option<Vec2> {
        let session = self.session.as_mut()?;
        if session.pointer != pointer {
            #[cfg(feature = "tracing")]
            tracing::trace!(?pointer, owner = ?session.pointer, "move from foreign pointer ignored");
            return None;
        }
        session.current = pos;
        Some(session.delta())
    }

    /// Finishes the live session as a drop.
    ///
    /// Returns the finished session stamped [`DragPhase::Ended`]; the tracker
    /// is idle afterwards. Returns `None` when idle.
    pub fn end(&mut self) -> Option<DragSession<K, P>> {
        self.finish(DragPhase::Ended)
    }

    /// Aborts the live session.
    ///
    /// Returns the aborted session stamped [`DragPhase::Cancelled`]; the
    /// tracker is idle afterwards. Returns `None` when idle, so repeated
    /// cancellation signals collapse into one.
    pub fn cancel(&mut self) -> Option<DragSession<K, P>> {
        self.finish(DragPhase::Cancelled)
    }

    fn finish(&mut self, phase: DragPhase) -> Option<DragSession<K, P>> {
        let mut session = self.session.take()?;
        session.phase = phase;
        #[cfg(feature = "tracing")]
        tracing::debug!(?phase, dx = session.delta().x, dy = session.delta().y, "drag finished");
        Some(session)
    }

    /// Current phase: [`DragPhase::Dragging`] while a session is live,
    /// otherwise [`DragPhase::Idle`].
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    /// Returns `true` while a session is live.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession<K, P>> {
        self.session.as_ref()
    }

    /// The item of the live session, if any.
    #[must_use]
    pub fn item(&self) -> Option<&DragItem<K, P>> {
        self.session.as_ref().map(|s| &s.item)
    }

    /// Latest pointer position of the live session.
    #[must_use]
    pub fn current(&self) -> Option<Point> {
        self.session.as_ref().map(|s| s.current)
    }

    /// Offset from the origin of the live session.
    #[must_use]
    pub fn delta(&self) -> Option<Vec2> {
        self.session.as_ref().map(DragSession::delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32) -> DragItem<u32, ()> {
        DragItem::new(id, "card", ())
    }

    #[test]
    fn new_tracker_is_idle() {
        let tracker = DragGestureTracker::<u32, ()>::new();
        assert_eq!(tracker.phase(), DragPhase::Idle);
        assert!(tracker.session().is_none());
        assert!(tracker.delta().is_none());
    }

    #[test]
    fn start_sets_origin_and_current() {
        let mut tracker = DragGestureTracker::new();
        let origin = Point::new(10.0, 20.0);

        assert!(tracker.start(item(1), origin, PointerId::Mouse));

        let session = tracker.session().unwrap();
        assert_eq!(session.origin, origin);
        assert_eq!(session.current, origin);
        assert_eq!(session.phase, DragPhase::Dragging);
        assert_eq!(tracker.delta(), Some(Vec2::ZERO));
    }

    #[test]
    fn second_start_leaves_session_identical() {
        let mut tracker = DragGestureTracker::new();
        tracker.start(item(1), Point::new(1.0, 1.0), PointerId::Mouse);
        tracker.update(PointerId::Mouse, Point::new(4.0, 5.0));
        let before = tracker.session().cloned();

        assert!(!tracker.start(item(2), Point::new(50.0, 50.0), PointerId::Touch(3)));

        assert_eq!(tracker.session().cloned(), before);
    }

    #[test]
    fn update_reports_offset_from_origin() {
        let mut tracker = DragGestureTracker::new();
        tracker.start(item(1), Point::new(0.0, 0.0), PointerId::Mouse);

        assert_eq!(tracker.update(PointerId::Mouse, Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(tracker.update(PointerId::Mouse, Point::new(8.0, 7.0)), Some(Vec2::new(8.0, 7.0)));
        assert_eq!(
            tracker.update(PointerId::Mouse, Point::new(-2.0, -1.0)),
            Some(Vec2::new(-2.0, -1.0))
        );
    }

    #[test]
    fn update_when_idle_is_noop() {
        let mut tracker = DragGestureTracker::<u32, ()>::new();
        assert_eq!(tracker.update(PointerId::Mouse, Point::new(1.0, 1.0)), None);
        assert_eq!(tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn foreign_pointer_cannot_move_session() {
        let mut tracker = DragGestureTracker::new();
        tracker.start(item(1), Point::new(0.0, 0.0), PointerId::Touch(1));

        assert_eq!(tracker.update(PointerId::Touch(2), Point::new(9.0, 9.0)), None);
        assert_eq!(tracker.current(), Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn end_returns_session_and_resets() {
        let mut tracker = DragGestureTracker::new();
        tracker.start(item(1), Point::new(0.0, 0.0), PointerId::Mouse);
        tracker.update(PointerId::Mouse, Point::new(3.0, 4.0));

        let done = tracker.end().unwrap();
        assert_eq!(done.phase, DragPhase::Ended);
        assert_eq!(done.delta(), Vec2::new(3.0, 4.0));
        assert_eq!(tracker.phase(), DragPhase::Idle);
        assert!(tracker.end().is_none());
    }

    #[test]
    fn cancel_collapses_repeated_signals() {
        let mut tracker = DragGestureTracker::new();
        tracker.start(item(1), Point::new(0.0, 0.0), PointerId::Mouse);

        let cancelled = tracker.cancel().unwrap();
        assert_eq!(cancelled.phase, DragPhase::Cancelled);
        assert!(tracker.cancel().is_none());
        assert!(tracker.start(item(2), Point::new(1.0, 1.0), PointerId::Mouse));
    }

    #[test]
    fn terminal_phases() {
        assert!(DragPhase::Ended.is_terminal());
        assert!(DragPhase::Cancelled.is_terminal());
        assert!(!DragPhase::Dragging.is_terminal());
        assert!(!DragPhase::Idle.is_terminal());
    }
}
