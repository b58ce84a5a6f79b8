// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random ranked points through the C ABI.
//!
//! Generates points on a 10×10 lattice with random ranks, loads them through the
//! exported `create`, and prints the 20 best points inside `[2, 8] × [2, 8]`.
//!
//! Run:
//! - `RUST_LOG=point_search=trace cargo run -p ranked_index_demos --example random_points`
//! - `POINT_SEARCH_STRATEGY=linear cargo run -p ranked_index_demos --example random_points`

use point_search::{Point, Rect, create, destroy, search};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

const NUM_POINTS: i8 = 50;
const COUNT: i32 = 20;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let points: Vec<Point> = (0..NUM_POINTS)
        .map(|id| {
            Point::new(
                id,
                rng.random_range(0..i32::MAX),
                f32::from(rng.random_range(0_u8..10)),
                f32::from(rng.random_range(0_u8..10)),
            )
        })
        .collect();

    println!("Points: ({})", points.len());
    for p in &points {
        let (id, rank, x, y) = (p.id, p.rank, p.x, p.y);
        println!("Point ID: {id} Rank: {rank}; X: {x}; Y: {y}");
    }

    let range = points.as_ptr_range();
    // SAFETY: `range` spans the live `points` vector.
    let handle = unsafe { create(range.start, range.end) };
    assert!(!handle.is_null(), "create failed");

    let rect = Rect::new(2.0, 2.0, 8.0, 8.0);
    let mut results = [Point::default(); 20];
    // SAFETY: `handle` is live and `results` holds COUNT points.
    let found = unsafe { search(handle, rect, COUNT, results.as_mut_ptr()) };

    println!("RESULTS: ({found})");
    for p in &results[..usize::try_from(found).unwrap_or(0)] {
        let (id, rank, x, y) = (p.id, p.rank, p.x, p.y);
        println!("Point ID: {id} Rank: {rank}; X: {x}; Y: {y}");
    }

    // SAFETY: `handle` is live and released exactly once.
    let status = unsafe { destroy(handle) };
    assert_eq!(status, 0, "destroy failed");
}
