// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dual-axis strategy: narrow both axis indexes, then intersect by store position.

use alloc::vec::Vec;
use core::ops::Range;

use crate::axis::AxisIndex;
use crate::config::StrategyKind;
use crate::store::PointStore;
use crate::strategy::Strategy;
use crate::types::{Axis, Point, Rect};

/// Dual-axis strategy.
///
/// Four boundary searches give the sub-range `X` of the x index inside `[lx, hx]`
/// and `Y` of the y index inside `[ly, hy]`. A point is in the rectangle iff it is
/// in both. The two sub-ranges are concatenated and sorted by store position;
/// positions present in both show up as adjacent pairs, and position order is
/// rank order, so collapsing pairs front to back emits results already ranked.
///
/// Cost is `O(log n + k log k)` with `k = |X| + |Y|`: fast for small rectangles,
/// worse than a linear scan when the rectangle spans most of either axis.
#[derive(Clone, Debug)]
pub struct DualAxis {
    x: AxisIndex,
    y: AxisIndex,
}

impl DualAxis {
    /// Build both axis indexes over `store`.
    pub fn build(store: &PointStore) -> Self {
        Self {
            x: AxisIndex::build(store, Axis::X),
            y: AxisIndex::build(store, Axis::Y),
        }
    }

    /// The index sorted by x.
    pub fn x_index(&self) -> &AxisIndex {
        &self.x
    }

    /// The index sorted by y.
    pub fn y_index(&self) -> &AxisIndex {
        &self.y
    }

    /// Candidate sub-ranges of the x and y indexes for `rect`.
    pub fn candidates(&self, store: &PointStore, rect: &Rect) -> (Range<usize>, Range<usize>) {
        (self.x.range(store, rect), self.y.range(store, rect))
    }

    /// Intersect the candidate sub-ranges and write the first `out.len()` results.
    pub(crate) fn merge(
        &self,
        store: &PointStore,
        xr: Range<usize>,
        yr: Range<usize>,
        out: &mut [Point],
    ) -> usize {
        if out.is_empty() || xr.is_empty() || yr.is_empty() {
            return 0;
        }
        let mut work: Vec<u32> = Vec::with_capacity(xr.len() + yr.len());
        work.extend_from_slice(&self.x.refs()[xr]);
        work.extend_from_slice(&self.y.refs()[yr]);
        work.sort_unstable();

        // Each position occurs at most once per axis, so a match is exactly one
        // adjacent pair. The last element has no successor to compare against.
        let mut n = 0;
        let mut i = 0;
        while i + 1 < work.len() && n < out.len() {
            if work[i] == work[i + 1] {
                out[n] = *store.point(work[i]);
                n += 1;
                i += 2;
            } else {
                i += 1;
            }
        }
        n
    }
}

impl Strategy for DualAxis {
    fn search(&self, store: &PointStore, rect: &Rect, out: &mut [Point]) -> usize {
        if store.is_empty() {
            return 0;
        }
        let (xr, yr) = self.candidates(store, rect);
        self.merge(store, xr, yr, out)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::DualAxis
    }

    fn heap_bytes(&self) -> usize {
        self.x.heap_bytes() + self.y.heap_bytes()
    }
}
