// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed point and rectangle records, the coordinate axes, and the rank order.

use core::cmp::Ordering;

use crate::error::{IndexError, Result};

/// A ranked point in 2D space.
///
/// The layout is part of the binary contract with foreign callers: a 1-byte id,
/// a 4-byte signed rank and two 4-byte floats, packed with no padding (13 bytes).
/// Because the struct is packed, read fields by value (`p.x`), never by reference.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C, packed)]
pub struct Point {
    /// Small identifier; not required to be unique.
    pub id: i8,
    /// Importance score; lower is more important.
    pub rank: i32,
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub const fn new(id: i8, rank: i32, x: f32, y: f32) -> Self {
        Self { id, rank, x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0, 0, 0.0, 0.0)
    }
}

/// Axis-aligned query rectangle. A point is inside if `x` is in `[lx, hx]` and `y` is in `[ly, hy]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Rect {
    /// Lower x bound (inclusive).
    pub lx: f32,
    /// Lower y bound (inclusive).
    pub ly: f32,
    /// Upper x bound (inclusive).
    pub hx: f32,
    /// Upper y bound (inclusive).
    pub hy: f32,
}

impl Rect {
    /// A rectangle containing every point with finite (or infinite, non-NaN) coordinates.
    pub const EVERYTHING: Self = Self::new(
        f32::NEG_INFINITY,
        f32::NEG_INFINITY,
        f32::INFINITY,
        f32::INFINITY,
    );

    /// Create a rectangle from its lower and upper corners.
    pub const fn new(lx: f32, ly: f32, hx: f32, hy: f32) -> Self {
        Self { lx, ly, hx, hy }
    }

    /// Whether the point lies inside, bounds inclusive. NaN coordinates are never inside.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        let (x, y) = (p.x, p.y);
        self.lx <= x && x <= self.hx && self.ly <= y && y <= self.hy
    }

    /// Lower and upper bound of the rectangle on `axis`.
    #[inline]
    pub const fn bounds(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::X => (self.lx, self.hx),
            Axis::Y => (self.ly, self.hy),
        }
    }

    /// True if a lower bound exceeds its upper bound, so nothing can be inside.
    pub fn is_inverted(&self) -> bool {
        self.lx > self.hx || self.ly > self.hy
    }

    /// Check that all bounds are numbers and no axis is inverted.
    ///
    /// # Errors
    ///
    /// [`IndexError::NanBound`] if any bound is NaN, [`IndexError::InvertedRect`]
    /// if `lx > hx` or `ly > hy`.
    pub fn validate(&self) -> Result<()> {
        if [self.lx, self.ly, self.hx, self.hy].iter().any(|v| v.is_nan()) {
            return Err(IndexError::NanBound);
        }
        if self.is_inverted() {
            return Err(IndexError::InvertedRect { rect: *self });
        }
        Ok(())
    }
}

/// One of the two coordinate axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
}

impl Axis {
    /// The point's coordinate on this axis.
    #[inline]
    pub const fn coord(self, p: &Point) -> f32 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }
}

/// Total rank order: rank, then id, then x, then y, all ascending.
///
/// Floats are compared with [`f32::total_cmp`], so the order stays total in the
/// presence of NaN or signed zeros.
pub fn rank_cmp(a: &Point, b: &Point) -> Ordering {
    let (ar, br) = (a.rank, b.rank);
    let (ai, bi) = (a.id, b.id);
    let (ax, bx) = (a.x, b.x);
    let (ay, by) = (a.y, b.y);
    ar.cmp(&br)
        .then(ai.cmp(&bi))
        .then_with(|| ax.total_cmp(&bx))
        .then_with(|| ay.total_cmp(&by))
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Rect {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The binary contract stores coordinates as f32."
    )]
    fn from(r: kurbo::Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0 as f32, r.y0 as f32, r.x1 as f32, r.y1 as f32)
    }
}

#[cfg(feature = "kurbo")]
impl Point {
    /// The point's position as a kurbo point.
    pub fn position(&self) -> kurbo::Point {
        kurbo::Point::new(f64::from(self.x), f64::from(self.y))
    }
}
