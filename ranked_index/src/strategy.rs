// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strategy trait for range-query implementations.

use core::fmt::Debug;

use crate::config::StrategyKind;
use crate::store::PointStore;
use crate::types::{Point, Rect};

/// Query strategy abstraction used by [`RankedIndex`](crate::RankedIndex).
///
/// A strategy is built once over a [`PointStore`] and is read-only afterward, so
/// concurrent queries need no locking.
pub trait Strategy: Debug + Send + Sync {
    /// Write the lowest-rank points of `store` inside `rect` into `out`, in rank order.
    ///
    /// Writes at most `out.len()` points, each at most once, and returns how many
    /// were written.
    fn search(&self, store: &PointStore, rect: &Rect, out: &mut [Point]) -> usize;

    /// Which strategy this is.
    fn kind(&self) -> StrategyKind;

    /// Bytes of heap owned by the strategy's own structures (not the store).
    fn heap_bytes(&self) -> usize {
        0
    }
}
