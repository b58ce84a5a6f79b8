// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strategy selection and tuning knobs for building a [`RankedIndex`](crate::RankedIndex).

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::IndexError;

/// Which query strategy an index uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Scan the rank-sorted store and keep the first matches.
    Linear,
    /// Narrow both axis indexes and intersect the candidate sets.
    DualAxis,
    /// Per query, pick dual-axis when the candidate sets are small, else linear.
    #[default]
    Adaptive,
}

impl StrategyKind {
    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::DualAxis => "dual-axis",
            Self::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "dual-axis" | "dual_axis" | "dualaxis" => Ok(Self::DualAxis),
            "adaptive" | "auto" => Ok(Self::Adaptive),
            _ => Err(IndexError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Build-time options for an index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndexConfig {
    /// Query strategy.
    pub strategy: StrategyKind,
    /// For [`StrategyKind::Adaptive`]: use the dual-axis merge when the combined
    /// candidate count `|X| + |Y|` is at most this fraction of the point count.
    pub adaptive_candidate_ratio: f32,
}

impl IndexConfig {
    /// Default candidate ratio for the adaptive strategy.
    ///
    /// Sorting `k` candidates costs about `k log k`; at one eighth of `n` that is
    /// still cheaper than a full scan for stores in the millions.
    pub const DEFAULT_CANDIDATE_RATIO: f32 = 0.125;

    /// Replace the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the adaptive candidate ratio, clamped to `[0, 1]` (NaN becomes 0).
    #[must_use]
    pub fn with_candidate_ratio(mut self, ratio: f32) -> Self {
        self.adaptive_candidate_ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        self
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            adaptive_candidate_ratio: Self::DEFAULT_CANDIDATE_RATIO,
        }
    }
}
