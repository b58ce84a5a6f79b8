// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strategy implementations for rectangle queries.
//!
//! - `linear`: scan the rank-sorted store, keep the first `count` hits. O(n) worst case,
//!   no extra memory; the right choice for wide rectangles.
//! - `dual_axis`: two axis indexes, four boundary searches, and an intersection merge
//!   (concatenate, sort by store position, collapse adjacent pairs). Sub-linear for
//!   small rectangles; `O(n log n)` when the rectangle spans an axis.
//! - `adaptive`: builds the axis indexes and picks one of the two per query from the
//!   exact candidate count, which the boundary searches produce for free.
//!
//! Merge note
//! ----------
//! Store positions are assigned after the rank sort, so ordering candidates by
//! position is ordering them by rank. The merge never compares point fields.

pub mod adaptive;
pub mod dual_axis;
pub mod linear;

pub use adaptive::Adaptive;
pub use dual_axis::DualAxis;
pub use linear::Linear;
