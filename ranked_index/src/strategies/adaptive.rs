// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive strategy: choose between the dual-axis merge and a linear scan per query.

use crate::config::{IndexConfig, StrategyKind};
use crate::store::PointStore;
use crate::strategies::dual_axis::DualAxis;
use crate::strategies::linear::Linear;
use crate::strategy::Strategy;
use crate::types::{Point, Rect};

/// Adaptive strategy.
///
/// The four boundary searches of the dual-axis strategy are cheap and give the exact
/// candidate count `k = |X| + |Y|` before any sorting happens. When `k` is at most
/// `ratio * n` the merge runs; otherwise the rectangle is wide enough that a linear
/// scan, which stops after `count` hits, is the better bet.
#[derive(Clone, Debug)]
pub struct Adaptive {
    dual: DualAxis,
    ratio: f32,
}

impl Adaptive {
    /// Build the axis indexes with the given candidate ratio.
    pub fn build(store: &PointStore, ratio: f32) -> Self {
        let ratio = IndexConfig::default()
            .with_candidate_ratio(ratio)
            .adaptive_candidate_ratio;
        Self {
            dual: DualAxis::build(store),
            ratio,
        }
    }

    /// The candidate ratio in use.
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// The strategy a query for `rect` would run with.
    pub fn choose(&self, store: &PointStore, rect: &Rect) -> StrategyKind {
        let (xr, yr) = self.dual.candidates(store, rect);
        if self.prefers_merge(xr.len() + yr.len(), store.len()) {
            StrategyKind::DualAxis
        } else {
            StrategyKind::Linear
        }
    }

    fn prefers_merge(&self, candidates: usize, n: usize) -> bool {
        candidates as f64 <= f64::from(self.ratio) * n as f64
    }
}

impl Strategy for Adaptive {
    fn search(&self, store: &PointStore, rect: &Rect, out: &mut [Point]) -> usize {
        if store.is_empty() || out.is_empty() {
            return 0;
        }
        let (xr, yr) = self.dual.candidates(store, rect);
        if xr.is_empty() || yr.is_empty() {
            return 0;
        }
        if self.prefers_merge(xr.len() + yr.len(), store.len()) {
            self.dual.merge(store, xr, yr, out)
        } else {
            Linear::scan(store.as_slice(), rect, out)
        }
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Adaptive
    }

    fn heap_bytes(&self) -> usize {
        self.dual.heap_bytes()
    }
}
