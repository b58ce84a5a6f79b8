// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ranked Index: the lowest-rank points inside a rectangle, fast.
//!
//! Ranked Index answers one query over a large, static set of ranked 2D points:
//! *return the `count` lowest-rank points inside an axis-aligned rectangle, in
//! ascending rank order.*
//!
//! - Load once with [`RankedIndex::new`]; the input is copied, never borrowed.
//! - Query many times with [`RankedIndex::search`] into a caller-owned buffer.
//! - Drop to release.
//!
//! Points use a packed 13-byte layout ([`Point`]) shared with foreign callers.
//! Rank ties are broken by id, then x, then y ([`rank_cmp`]), so results are fully
//! deterministic.
//!
//! # Example
//!
//! ```rust
//! use ranked_index::{Point, RankedIndex, Rect};
//!
//! let points = [
//!     Point::new(0, 5, 0.0, 0.0),
//!     Point::new(1, 3, 1.0, 1.0),
//!     Point::new(2, 1, 2.0, 2.0),
//!     Point::new(3, 4, 3.0, 3.0),
//!     Point::new(4, 2, 4.0, 4.0),
//! ];
//! let idx = RankedIndex::new(&points).unwrap();
//!
//! let mut out = [Point::default(); 3];
//! let n = idx.search(&Rect::new(0.0, 0.0, 4.0, 4.0), &mut out);
//! let ranks: Vec<i32> = out[..n].iter().map(|p| p.rank).collect();
//! assert_eq!(ranks, [1, 2, 3]);
//! ```
//!
//! ## Choosing a strategy
//!
//! - `Linear`: scan the rank-sorted store. No memory beyond the points; O(n) worst
//!   case regardless of rectangle size, but stops after `count` hits.
//! - `DualAxis`: two axis indexes of `u32` positions (8 extra bytes per point, so the
//!   whole index stays under twice the raw point data). Four boundary searches and an
//!   intersection merge; fast for small rectangles, `O(n log n)` for huge ones.
//! - `Adaptive` (default): builds the axis indexes and picks per query from the exact
//!   candidate count. See [`IndexConfig::adaptive_candidate_ratio`].
//!
//! ```rust
//! use ranked_index::{IndexConfig, Point, RankedIndex, Rect, StrategyKind};
//!
//! let points: Vec<Point> = (0..100).map(|i| Point::new(0, i, i as f32, 0.0)).collect();
//! let cfg = IndexConfig::default().with_strategy(StrategyKind::Linear);
//! let idx = RankedIndex::with_config(&points, &cfg).unwrap();
//! assert_eq!(idx.query(&Rect::new(10.0, 0.0, 20.0, 0.0), 2).len(), 2);
//! ```
//!
//! ### Float semantics
//!
//! Rectangle bounds are inclusive. Points with a NaN coordinate are never inside any
//! rectangle. NaN or inverted rectangle bounds match nothing; [`RankedIndex::try_search`]
//! reports them as errors instead.

#![no_std]

extern crate alloc;

pub mod axis;
pub mod config;
pub mod error;
pub mod index;
pub mod search;
pub mod store;
pub mod strategies;
pub mod strategy;
pub mod types;

pub use axis::AxisIndex;
pub use config::{IndexConfig, StrategyKind};
pub use error::{IndexError, Result};
pub use index::RankedIndex;
pub use search::{Bound, boundary, boundary_by};
pub use store::PointStore;
pub use strategies::{Adaptive, DualAxis, Linear};
pub use strategy::Strategy;
pub use types::{Axis, Point, Rect, rank_cmp};
