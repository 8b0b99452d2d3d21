// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction, range query, and boundary projection throughput.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kurbo::Rect;
use understory_benches::{SIZES, query_rects, uniform_points};
use understory_kd_tree::{KdTree, TiePolicy};

const FIELD: Rect = Rect::new(-1.0, -1.0, 1.0, 1.0);

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("kd_tree/build");
    for &n in &SIZES {
        let points = uniform_points(n, FIELD, 42);
        group.throughput(Throughput::Elements(n as u64));
        for ties in [TiePolicy::Drop, TiePolicy::Keep] {
            let id = BenchmarkId::new(format!("{ties:?}"), n);
            group.bench_with_input(id, &points, |b, points| {
                b.iter(|| KdTree::build_with(black_box(points), ties));
            });
        }
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("kd_tree/query_rect");
    let rects = query_rects(64, FIELD, 0.1, 7);
    for &n in &SIZES {
        let tree = KdTree::build(&uniform_points(n, FIELD, 42));
        group.throughput(Throughput::Elements(rects.len() as u64));
        group.bench_with_input(BenchmarkId::new("tree", n), &tree, |b, tree| {
            b.iter(|| {
                let mut hits = 0;
                for r in &rects {
                    tree.visit_rect(*r, |_, _| hits += 1);
                }
                black_box(hits)
            });
        });

        let points: Vec<_> = tree.points().collect();
        group.bench_with_input(BenchmarkId::new("linear_scan", n), &points, |b, points| {
            b.iter(|| {
                let mut hits = 0;
                for r in &rects {
                    hits += points
                        .iter()
                        .filter(|p| r.x0 <= p.x && p.x <= r.x1 && r.y0 <= p.y && p.y <= r.y1)
                        .count();
                }
                black_box(hits)
            });
        });
    }
    group.finish();
}

fn bench_boundaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("kd_tree/boundaries");
    for &n in &SIZES {
        let tree = KdTree::build(&uniform_points(n, FIELD, 42));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &tree, |b, tree| {
            b.iter(|| tree.boundaries(black_box(FIELD)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_query, bench_boundaries);
criterion_main!(benches);
