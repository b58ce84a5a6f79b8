// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis index: store positions sorted by one coordinate.

use alloc::vec::Vec;
use core::ops::Range;

use crate::search::{Bound, boundary};
use crate::store::PointStore;
use crate::types::{Axis, Rect};

/// Positions into a [`PointStore`], sorted by the coordinate on one axis.
///
/// Ties are ordered by position, so a build is deterministic. Points whose
/// coordinate on this axis is NaN are left out; they can never be inside a rectangle.
#[derive(Clone, Debug)]
pub struct AxisIndex {
    axis: Axis,
    refs: Vec<u32>,
}

impl AxisIndex {
    /// Build the index for `axis` over `store`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "PointStore::new caps the store length at u32::MAX."
    )]
    pub fn build(store: &PointStore, axis: Axis) -> Self {
        let mut refs: Vec<u32> = Vec::with_capacity(store.len());
        refs.extend(
            store
                .as_slice()
                .iter()
                .enumerate()
                .filter(|(_, p)| !axis.coord(p).is_nan())
                .map(|(i, _)| i as u32),
        );
        refs.sort_unstable_by(|&a, &b| {
            let ca = axis.coord(store.point(a));
            let cb = axis.coord(store.point(b));
            ca.total_cmp(&cb).then(a.cmp(&b))
        });
        Self { axis, refs }
    }

    /// The axis this index is sorted by.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Sorted store positions.
    pub fn refs(&self) -> &[u32] {
        &self.refs
    }

    /// Index range of `refs` whose coordinate lies within the rectangle's bounds on this axis.
    ///
    /// Uses one lower and one upper boundary search. NaN or inverted bounds give an empty range.
    pub fn range(&self, store: &PointStore, rect: &Rect) -> Range<usize> {
        let (lo, hi) = rect.bounds(self.axis);
        if lo.is_nan() || hi.is_nan() {
            return 0..0;
        }
        let start = boundary(store, &self.refs, self.axis, lo, Bound::Lower);
        let end = boundary(store, &self.refs, self.axis, hi, Bound::Upper);
        start..end.max(start)
    }

    /// Bytes of heap owned by the index.
    pub fn heap_bytes(&self) -> usize {
        self.refs.capacity() * size_of::<u32>()
    }
}
