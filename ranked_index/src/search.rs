// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary search: locate the edges of an inclusive range inside a sorted coordinate sequence.
//!
//! Given coordinates `c[0] <= c[1] <= ... <= c[n-1]` and a bound `v`:
//!
//! - [`Bound::Lower`] returns the first index with `c[k] >= v`, so every element of an
//!   equal run at `v` is included;
//! - [`Bound::Upper`] returns one past the last index with `c[k] <= v`.
//!
//! A lower search at `lo` and an upper search at `hi` therefore delimit exactly the
//! elements with `lo <= c[k] <= hi`. The search is iterative: two shortcuts against
//! the first and last element, then a bisection that pulls equal values toward the
//! upper half, then (for lower bounds) a walk left across the equal run at `v`.
//! That walk costs O(run length), which only matters when many points share the
//! exact boundary coordinate.

use crate::store::PointStore;
use crate::types::Axis;

/// Which side of an inclusive range is being located.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Inclusive lower bound: result is the start of the qualifying sub-range.
    Lower,
    /// Inclusive upper bound: result is the exclusive end of the qualifying sub-range.
    Upper,
}

/// Boundary search over any sorted sequence of `len` coordinates read through `coord`.
///
/// `coord(i)` must be non-decreasing in `i` (NaN-free). Returns a value in `0..=len`;
/// an empty sequence yields 0.
pub fn boundary_by<F>(len: usize, v: f32, bound: Bound, coord: F) -> usize
where
    F: Fn(usize) -> f32,
{
    if len == 0 {
        return 0;
    }
    let first = coord(0);
    let last = coord(len - 1);
    match bound {
        Bound::Lower => {
            if v <= first {
                return 0;
            }
            if v > last {
                return len;
            }
        }
        Bound::Upper => {
            if v < first {
                return 0;
            }
            if v >= last {
                return len;
            }
        }
    }

    // Past the shortcuts `first <= v`, so `lo` starts on a qualifying element.
    // `hi` starts on a virtual element past the end that is greater than `v`.
    let mut lo = 0;
    let mut hi = len;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if coord(mid) <= v {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    // `hi` is now the first index with a coordinate above `v`.
    match bound {
        Bound::Upper => hi,
        Bound::Lower => {
            let mut k = hi;
            while k > 0 && coord(k - 1) == v {
                k -= 1;
            }
            k
        }
    }
}

/// Boundary search over an axis index: `refs` are store positions sorted by `axis`.
pub fn boundary(store: &PointStore, refs: &[u32], axis: Axis, v: f32, bound: Bound) -> usize {
    boundary_by(refs.len(), v, bound, |i| axis.coord(store.point(refs[i])))
}
