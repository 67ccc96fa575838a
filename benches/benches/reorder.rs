// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use dragline::{DragDropContext, NativeEvent, Sortable};
use dragline_sort::{compute_reorder, move_item};
use kurbo::{Point, Rect};

fn bench_compute_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort/reorder");

    // Worst case: move the first element to the end.
    for len in [128_usize, 1_024, 8_192] {
        let items: Vec<u64> = (0..len as u64).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("compute_reorder", len), &items, |b, items| {
            b.iter_batched(
                || items.clone(),
                |items| black_box(compute_reorder(items, 0, len - 1)),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("move_item", len), &items, |b, items| {
            b.iter_batched(
                || items.clone(),
                |mut items| {
                    let _ = move_item(&mut items, 0, len - 1);
                    black_box(items)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_sortable_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("context/sortable_drag");

    // One drag across every row of a mounted list: each move hit-tests the
    // collection and most of them apply a reorder step.
    for len in [16_u32, 128, 512] {
        group.throughput(Throughput::Elements(u64::from(len)));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            let ctx = DragDropContext::<u32, ()>::default();
            let list = Sortable::new(&ctx, u32::MAX, "row", (0..len).collect::<Vec<u32>>());
            list.set_slots(
                (0..len)
                    .map(|i| {
                        let y = f64::from(i) * 20.;
                        Rect::new(0., y, 200., y + 20.)
                    })
                    .collect(),
            );
            b.iter(|| {
                list.pointer_down(0, &NativeEvent::mouse(Point::new(10., 10.)), ());
                for i in 0..len {
                    ctx.drag_move_to(Point::new(10., f64::from(i) * 20. + 10.));
                }
                ctx.end_drag();
                black_box(list.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_reorder, bench_sortable_drag);
criterion_main!(benches);
