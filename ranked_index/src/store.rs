// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned, rank-sorted copy of every loaded point.

use alloc::vec::Vec;

use crate::error::{IndexError, Result};
use crate::types::{Point, rank_cmp};

/// Contiguous store of all points, sorted by [`rank_cmp`].
///
/// Position in the store is monotone in rank order: for `i < j`,
/// `store[i] <= store[j]`. Every other structure refers to points by their `u32`
/// position here, which is what lets a sort by position stand in for a sort by rank.
#[derive(Clone, Debug, Default)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// Copy `points` and sort the copy by rank order.
    ///
    /// # Errors
    ///
    /// [`IndexError::TooManyPoints`] if there are more points than `u32` positions.
    pub fn new(points: &[Point]) -> Result<Self> {
        if u32::try_from(points.len()).is_err() {
            return Err(IndexError::TooManyPoints { len: points.len() });
        }
        let mut points = points.to_vec();
        points.sort_by(rank_cmp);
        Ok(Self { points })
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the store holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in rank order.
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// The point at `pos`, if any.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<&Point> {
        self.points.get(pos)
    }

    /// The point at a position taken from an axis index.
    ///
    /// Positions handed out by this store's indexes are always in bounds.
    #[inline]
    pub fn point(&self, pos: u32) -> &Point {
        &self.points[pos as usize]
    }

    /// Bytes of heap owned by the store.
    pub fn heap_bytes(&self) -> usize {
        self.points.capacity() * size_of::<Point>()
    }
}
