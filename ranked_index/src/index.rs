// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `RankedIndex` API over a runtime-selected strategy.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use crate::config::{IndexConfig, StrategyKind};
use crate::error::Result;
use crate::store::PointStore;
use crate::strategies::{Adaptive, DualAxis, Linear};
use crate::strategy::Strategy;
use crate::types::{Point, Rect};

/// A static index over ranked points.
///
/// Owns a rank-sorted copy of the input and whatever structures the chosen strategy
/// needs. Immutable after construction; queries take `&self` and may run from many
/// threads at once. Dropping the index releases everything.
#[derive(Debug)]
pub struct RankedIndex {
    store: PointStore,
    strategy: Box<dyn Strategy>,
}

impl RankedIndex {
    /// Build an index with the default configuration (adaptive strategy).
    ///
    /// # Errors
    ///
    /// [`IndexError::TooManyPoints`](crate::IndexError::TooManyPoints) if `points`
    /// cannot be addressed with `u32` positions.
    pub fn new(points: &[Point]) -> Result<Self> {
        Self::with_config(points, &IndexConfig::default())
    }

    /// Build an index using `kind` and default tuning.
    ///
    /// # Errors
    ///
    /// See [`RankedIndex::new`].
    pub fn with_strategy(points: &[Point], kind: StrategyKind) -> Result<Self> {
        Self::with_config(points, &IndexConfig::default().with_strategy(kind))
    }

    /// Build an index from an explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`RankedIndex::new`].
    pub fn with_config(points: &[Point], config: &IndexConfig) -> Result<Self> {
        // The store must be rank-sorted before any axis index takes positions from it.
        let store = PointStore::new(points)?;
        let strategy: Box<dyn Strategy> = match config.strategy {
            StrategyKind::Linear => Box::new(Linear),
            StrategyKind::DualAxis => Box::new(DualAxis::build(&store)),
            StrategyKind::Adaptive => {
                Box::new(Adaptive::build(&store, config.adaptive_candidate_ratio))
            }
        };
        Ok(Self { store, strategy })
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the index holds no points.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The strategy this index answers queries with.
    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// All points in rank order.
    pub fn points(&self) -> &[Point] {
        self.store.as_slice()
    }

    /// Heap bytes owned by the index: the store plus any axis indexes.
    pub fn heap_bytes(&self) -> usize {
        self.store.heap_bytes() + self.strategy.heap_bytes()
    }

    /// Write the `out.len()` lowest-rank points inside `rect` into `out`, lowest rank first.
    ///
    /// Returns the number written. Bounds are inclusive. Inverted or NaN bounds are not
    /// checked; they simply match nothing. Use [`RankedIndex::try_search`] to reject them.
    pub fn search(&self, rect: &Rect, out: &mut [Point]) -> usize {
        if self.store.is_empty() || out.is_empty() {
            return 0;
        }
        self.strategy.search(&self.store, rect, out)
    }

    /// Like [`RankedIndex::search`], but validates the rectangle first.
    ///
    /// # Errors
    ///
    /// [`IndexError::NanBound`](crate::IndexError::NanBound) or
    /// [`IndexError::InvertedRect`](crate::IndexError::InvertedRect).
    pub fn try_search(&self, rect: &Rect, out: &mut [Point]) -> Result<usize> {
        rect.validate()?;
        Ok(self.search(rect, out))
    }

    /// Collect up to `count` lowest-rank points inside `rect`.
    pub fn query(&self, rect: &Rect, count: usize) -> Vec<Point> {
        let mut out = vec![Point::default(); count.min(self.store.len())];
        let n = self.search(rect, &mut out);
        out.truncate(n);
        out
    }
}
