// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for `GeometryRegistry`.
//!
//! Any interleaving of register/unregister calls must leave exactly the ids
//! that were registered and not later unregistered, each with its latest rect.

use std::collections::BTreeMap;

use dragline_registry::{DropTargetInfo, GeometryRegistry};
use kurbo::Rect;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Register(u8, Rect),
    Unregister(u8),
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (0.0..500.0_f64, 0.0..500.0_f64, 0.0..200.0_f64, 0.0..200.0_f64)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0_u8..16, rect_strategy()).prop_map(|(id, r)| Op::Register(id, r)),
        (0_u8..16).prop_map(Op::Unregister),
    ]
}

proptest! {
    #[test]
    fn registry_matches_last_write_model(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut reg = GeometryRegistry::new();
        let mut model: BTreeMap<u8, Rect> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Register(id, rect) => {
                    reg.register(DropTargetInfo::new(id, "zone", (), rect));
                    model.insert(id, rect);
                }
                Op::Unregister(id) => {
                    reg.unregister(&id);
                    model.remove(&id);
                }
            }
        }

        let mut actual: Vec<(u8, Rect)> = reg.all().into_iter().map(|t| (t.id, t.rect)).collect();
        actual.sort_by_key(|(id, _)| *id);
        let expected: Vec<(u8, Rect)> = model.into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn revision_never_decreases(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut reg = GeometryRegistry::new();
        let mut last = reg.revision();
        for op in ops {
            match op {
                Op::Register(id, rect) => {
                    reg.register(DropTargetInfo::new(id, "zone", (), rect));
                }
                Op::Unregister(id) => {
                    reg.unregister(&id);
                }
            }
            prop_assert!(reg.revision() >= last);
            last = reg.revision();
        }
    }
}

#[test]
fn sequences_are_unique_and_increasing() {
    let mut reg = GeometryRegistry::new();
    for id in 0..8_u32 {
        reg.register(DropTargetInfo::new(id, "zone", (), Rect::ZERO));
    }
    let mut seqs: Vec<u64> = reg.entries().map(|e| e.sequence).collect();
    seqs.sort_unstable();
    seqs.dedup();
    assert_eq!(seqs.len(), 8);
    assert!(reg.sequence(&7) > reg.sequence(&0));
}
