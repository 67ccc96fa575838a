// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dragline_hit::{HitTester, TieBreak};
use dragline_registry::{DropTargetInfo, GeometryRegistry};
use kurbo::{Point, Rect};

/// A grid of `n` 40x40 cells plus one container covering all of them, so
/// every query inside the grid sees an overlap.
fn grid(n: u32) -> GeometryRegistry<u32, DropTargetInfo<u32, ()>> {
    let cols = 32;
    let mut registry = GeometryRegistry::new();
    registry.register(DropTargetInfo::new(
        u32::MAX,
        "container",
        (),
        Rect::new(0., 0., 40. * f64::from(cols), 40. * f64::from(n / cols + 1)),
    ));
    for i in 0..n {
        let x = f64::from(i % cols) * 40.;
        let y = f64::from(i / cols) * 40.;
        registry.register(DropTargetInfo::new(i, "cell", (), Rect::new(x, y, x + 40., y + 40.)));
    }
    registry
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit/resolve");

    // Hypothesis: resolve is a single linear pass, so cost grows with the
    // number of registered targets and not with the number of overlaps.
    for n in [100_u32, 500, 2_000] {
        let registry = grid(n);
        let points: Vec<Point> = (0..64)
            .map(|i| Point::new(f64::from(i * 37 % 1280), f64::from(i * 53 % 400)))
            .collect();
        group.throughput(Throughput::Elements(points.len() as u64));

        for (name, tie_break) in [
            ("smallest_area", TieBreak::SmallestArea),
            ("most_recent", TieBreak::MostRecent),
        ] {
            let tester = HitTester::new(tie_break);
            group.bench_with_input(BenchmarkId::new(name, n), &points, |b, points| {
                b.iter(|| {
                    for pt in points {
                        black_box(tester.resolve(*pt, &registry));
                    }
                });
            });
        }

        let tester = HitTester::default();
        group.bench_with_input(BenchmarkId::new("filtered", n), &points, |b, points| {
            b.iter(|| {
                for pt in points {
                    black_box(tester.resolve_filtered(*pt, &registry, |t| t.kind == "cell"));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
