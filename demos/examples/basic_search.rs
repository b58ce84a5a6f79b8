// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Ranked Index: load points, query a rectangle, compare strategies.
//!
//! Run:
//! - `cargo run -p ranked_index_demos --example basic_search`

use ranked_index::{Point, RankedIndex, Rect, StrategyKind};

fn main() {
    let points = [
        Point::new(0, 5, 0.0, 0.0),
        Point::new(1, 3, 1.0, 1.0),
        Point::new(2, 1, 2.0, 2.0),
        Point::new(3, 4, 3.0, 3.0),
        Point::new(4, 2, 4.0, 4.0),
    ];
    let rect = Rect::new(1.0, 1.0, 4.0, 4.0);

    for kind in [
        StrategyKind::Linear,
        StrategyKind::DualAxis,
        StrategyKind::Adaptive,
    ] {
        let idx = RankedIndex::with_strategy(&points, kind).expect("five points always fit");
        let hits = idx.query(&rect, 3);
        println!("{kind:>9}: {hits:?} ({} heap bytes)", idx.heap_bytes());
    }
}
