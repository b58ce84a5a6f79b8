// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ranked_index::{Point, RankedIndex, Rect, StrategyKind};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f32(&mut self) -> f32 {
        let v = self.next_u64() >> 40;
        (v as f32) / ((1u64 << 24) as f32)
    }
}

const KINDS: [StrategyKind; 3] = [
    StrategyKind::Linear,
    StrategyKind::DualAxis,
    StrategyKind::Adaptive,
];

/// Uniform points in `[0, extent)²` with random ranks.
fn gen_uniform_points(n: usize, extent: f32) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..n)
        .map(|i| {
            Point::new(
                (i % 128) as i8,
                (rng.next_u64() >> 33) as i32,
                rng.next_f32() * extent,
                rng.next_f32() * extent,
            )
        })
        .collect()
}

/// Points snapped to a coarse lattice so coordinates repeat heavily.
fn gen_lattice_points(n: usize, cells: u32) -> Vec<Point> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..n)
        .map(|i| {
            let x = (rng.next_u64() % u64::from(cells)) as f32;
            let y = (rng.next_u64() % u64::from(cells)) as f32;
            Point::new((i % 128) as i8, (rng.next_u64() >> 33) as i32, x, y)
        })
        .collect()
}

fn gen_query_rects(count: usize, extent: f32, side: f32) -> Vec<Rect> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| {
            let lx = rng.next_f32() * (extent - side).max(1.0);
            let ly = rng.next_f32() * (extent - side).max(1.0);
            Rect::new(lx, ly, lx + side, ly + side)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[10_000usize, 100_000] {
        let points = gen_uniform_points(n, 1000.0);
        group.throughput(Throughput::Elements(n as u64));
        for kind in KINDS {
            group.bench_function(format!("{kind}_n{n}"), |b| {
                b.iter_batched(
                    || points.clone(),
                    |pts| {
                        let idx = RankedIndex::with_strategy(&pts, kind).unwrap();
                        black_box(idx.len());
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_query_by_rect_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_top20");
    let n = 200_000;
    let extent = 1000.0;
    let points = gen_uniform_points(n, extent);
    for kind in KINDS {
        let idx = RankedIndex::with_strategy(&points, kind).unwrap();
        for &side in &[1.0_f32, 10.0, 100.0, 1000.0] {
            let rects = gen_query_rects(64, extent, side);
            group.throughput(Throughput::Elements(rects.len() as u64));
            group.bench_function(format!("{kind}_side{side}"), |b| {
                let mut out = [Point::default(); 20];
                b.iter(|| {
                    let mut total = 0;
                    for r in &rects {
                        total += idx.search(r, &mut out);
                    }
                    black_box(total);
                })
            });
        }
    }
    group.finish();
}

fn bench_query_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_lattice");
    let points = gen_lattice_points(100_000, 16);
    let rects = [
        Rect::new(3.0, 3.0, 3.0, 3.0),
        Rect::new(2.0, 5.0, 6.0, 9.0),
        Rect::new(-1.0, -1.0, 20.0, 20.0),
    ];
    for kind in KINDS {
        let idx = RankedIndex::with_strategy(&points, kind).unwrap();
        group.bench_function(format!("{kind}"), |b| {
            let mut out = [Point::default(); 20];
            b.iter(|| {
                let mut total = 0;
                for r in &rects {
                    total += idx.search(r, &mut out);
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_query_by_rect_size,
    bench_query_duplicates
);
criterion_main!(benches);
