// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use ranked_index::{Point, RankedIndex, Rect, StrategyKind, rank_cmp};

use rstar::primitives::GeomWithData;
use rstar::{AABB, RTree};

type Ranked = GeomWithData<[f32; 2], Point>;

fn gen_grid_points(n: usize, cell: f32) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            // Scatter ranks so rank order and grid order disagree.
            let rank = ((x * 7919 + y * 104_729) % (n * n)) as i32;
            out.push(Point::new(
                (x % 128) as i8,
                rank,
                x as f32 * cell,
                y as f32 * cell,
            ));
        }
    }
    out
}

fn to_rstar(points: &[Point]) -> Vec<Ranked> {
    points
        .iter()
        .map(|p| GeomWithData::new([p.x, p.y], *p))
        .collect()
}

/// Top-`count` through rstar: locate, sort by rank, truncate.
fn rstar_top(tree: &RTree<Ranked>, rect: &Rect, count: usize) -> usize {
    let aabb = AABB::from_corners([rect.lx, rect.ly], [rect.hx, rect.hy]);
    let mut hits: Vec<Point> = tree.locate_in_envelope(&aabb).map(|g| g.data).collect();
    hits.sort_by(rank_cmp);
    hits.truncate(count);
    hits.len()
}

fn bench_rstar_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare_top20");
    for &n in &[128usize, 512] {
        let points = gen_grid_points(n, 10.0);
        let query = Rect::new(100.0, 100.0, 500.0, 500.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        for kind in [StrategyKind::Linear, StrategyKind::DualAxis, StrategyKind::Adaptive] {
            let idx = RankedIndex::with_strategy(&points, kind).unwrap();
            group.bench_function(format!("ranked_{kind}_n{n}"), |b| {
                let mut out = [Point::default(); 20];
                b.iter(|| black_box(idx.search(&query, &mut out)))
            });
        }

        let tree = RTree::bulk_load(to_rstar(&points));
        group.bench_function(format!("rstar_n{n}"), |b| {
            b.iter(|| black_box(rstar_top(&tree, &query, 20)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_compare);
criterion_main!(benches);
