// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scan over the rank-sorted store. No extra memory; O(n) worst case.

use crate::config::StrategyKind;
use crate::store::PointStore;
use crate::strategy::Strategy;
use crate::types::{Point, Rect};

/// Linear-scan strategy.
///
/// The store is rank-sorted, so the first `count` contained points in scan order
/// are the answer, already in rank order.
#[derive(Copy, Clone, Debug, Default)]
pub struct Linear;

impl Linear {
    /// Scan `points` in order, copying contained points into `out` until it is full.
    pub(crate) fn scan(points: &[Point], rect: &Rect, out: &mut [Point]) -> usize {
        if out.is_empty() {
            return 0;
        }
        let mut n = 0;
        for p in points {
            if rect.contains(p) {
                out[n] = *p;
                n += 1;
                if n == out.len() {
                    break;
                }
            }
        }
        n
    }
}

impl Strategy for Linear {
    fn search(&self, store: &PointStore, rect: &Rect, out: &mut [Point]) -> usize {
        Self::scan(store.as_slice(), rect, out)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Linear
    }
}
