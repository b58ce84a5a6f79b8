// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for index construction, configuration and validated queries.

use alloc::string::String;

use thiserror::Error;

use crate::types::Rect;

/// Errors reported by the index.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum IndexError {
    /// More points than a `u32` position can address.
    #[error("too many points: {len} exceeds the u32 position limit")]
    TooManyPoints {
        /// Number of points handed to the constructor.
        len: usize,
    },

    /// A rectangle bound is NaN.
    #[error("rectangle bound is NaN")]
    NanBound,

    /// A rectangle has `lx > hx` or `ly > hy`.
    #[error("inverted rectangle: {rect:?}")]
    InvertedRect {
        /// The offending rectangle.
        rect: Rect,
    },

    /// A strategy name did not match any known strategy.
    #[error("unknown strategy {0:?}, expected one of: linear, dual-axis, adaptive")]
    UnknownStrategy(String),
}

/// Result type for index operations.
pub type Result<T> = core::result::Result<T, IndexError>;
