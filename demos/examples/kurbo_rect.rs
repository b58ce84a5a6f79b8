// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query with kurbo geometry.
//!
//! A host that already works in kurbo types can pass a `kurbo::Rect` straight in
//! and read hit positions back as `kurbo::Point`s.
//!
//! Run:
//! - `cargo run -p ranked_index_demos --example kurbo_rect`

use kurbo::{Point as KPoint, Rect as KRect};
use ranked_index::{Point, RankedIndex, Rect};

fn main() {
    let points: Vec<Point> = (0..100_i32)
        .map(|i| {
            let x = (i % 10) as f32 * 10.0;
            let y = (i / 10) as f32 * 10.0;
            Point::new(0, (i * 37) % 101, x, y)
        })
        .collect();
    let idx = RankedIndex::new(&points).expect("a hundred points always fit");

    // Corners may come in either order.
    let view = KRect::from_points(KPoint::new(45.0, 25.0), KPoint::new(15.0, 65.0));
    let hits = idx.query(&Rect::from(view), 4);
    for p in &hits {
        let rank = p.rank;
        let pos = p.position();
        println!("rank {rank:>3} at {pos:?}");
    }
}
