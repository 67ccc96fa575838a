// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics emitted with the `tracing` feature.
//!
//!   cargo test -p dragline --features tracing --test tracing

use std::sync::{Arc, Mutex};

use dragline::{Buttons, DragDropContext, DragItem, NativeEvent, Sortable};
use kurbo::{Point, Rect};
use tracing::Level;
use tracing_subscriber::layer::{Context, SubscriberExt};

/// A layer that records the level and message of every event.
#[derive(Clone, Default)]
struct EventCapture {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

struct MessageVisitor(Option<String>);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.events
                .lock()
                .unwrap()
                .push((*event.metadata().level(), message));
        }
    }
}

fn captured(f: impl FnOnce()) -> Vec<(Level, String)> {
    let capture = EventCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    tracing::subscriber::with_default(subscriber, f);
    capture.events.lock().unwrap().clone()
}

fn has(events: &[(Level, String)], level: Level, message: &str) -> bool {
    events.iter().any(|(l, m)| *l == level && m == message)
}

fn mouse(x: f64, y: f64) -> NativeEvent {
    NativeEvent::mouse(Point::new(x, y))
}

#[test]
fn transitions_log_at_debug() {
    let events = captured(|| {
        let ctx = DragDropContext::<u32, ()>::default();
        ctx.start_drag(DragItem::new(1, "card", ()), &mouse(0., 0.));
        ctx.drag_move(&mouse(5., 5.));
        ctx.end_drag();
        ctx.start_drag(DragItem::new(1, "card", ()), &mouse(0., 0.));
        ctx.handle_key("Escape");
    });

    assert!(has(&events, Level::DEBUG, "drag started"), "{events:?}");
    assert!(has(&events, Level::TRACE, "drag moved"), "{events:?}");
    assert!(has(&events, Level::DEBUG, "drag ended"), "{events:?}");
    assert!(has(&events, Level::DEBUG, "drag cancelled"), "{events:?}");
    assert!(has(&events, Level::DEBUG, "drag finished"), "{events:?}");
}

#[test]
fn ignored_input_logs_at_trace() {
    let events = captured(|| {
        let ctx = DragDropContext::<u32, ()>::default();
        let right = NativeEvent::mouse_with_buttons(Point::ZERO, Buttons::SECONDARY);
        assert!(!ctx.start_drag(DragItem::new(1, "card", ()), &right));
        ctx.start_drag(DragItem::new(1, "card", ()), &mouse(0., 0.));
        assert!(!ctx.start_drag(DragItem::new(2, "card", ()), &mouse(0., 0.)));
    });

    assert!(
        has(&events, Level::TRACE, "drag start ignored: not a primary press"),
        "{events:?}"
    );
    assert!(
        has(&events, Level::TRACE, "drag start ignored: session already active"),
        "{events:?}"
    );
}

#[test]
fn sortable_reorder_is_logged() {
    let events = captured(|| {
        let ctx = DragDropContext::<u32, ()>::default();
        let list = Sortable::new(&ctx, 100, "row", vec![1_u32, 2]);
        list.set_slots(vec![Rect::new(0., 0., 100., 20.), Rect::new(0., 20., 100., 40.)]);
        list.pointer_down(0, &mouse(10., 10.), ());
        ctx.drag_move(&mouse(10., 30.));
        assert_eq!(ctx.sortable_item(&1).map(|s| s.index), Some(1));
        ctx.end_drag();
    });

    assert!(has(&events, Level::DEBUG, "sortable reorder"), "{events:?}");
}
