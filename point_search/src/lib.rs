// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point Search: the `create` / `search` / `destroy` C ABI over [`ranked_index`].
//!
//! Build as a `cdylib` and load it dynamically. The exported functions use the
//! platform's system calling convention (`stdcall` on 32-bit Windows, C elsewhere)
//! and the packed [`Point`] and [`Rect`] records:
//!
//! ```c
//! Object* create(const Point* points_begin, const Point* points_end);
//! int32_t search(Object* o, Rect rect, int32_t count, Point* out_points);
//! int32_t destroy(Object* o);
//! ```
//!
//! The contract is the trusted-caller one: `points_begin..points_end` must be a valid
//! range for the duration of `create`, `out_points` must hold `count` points, and a
//! handle must be destroyed exactly once and not used afterward. Violations are
//! undefined behavior. The only checks made are cheap ones that cannot change the
//! answer for a valid call: null pointers and non-positive counts.
//!
//! The strategy is taken from the environment at `create` time:
//!
//! - `POINT_SEARCH_STRATEGY`: `linear`, `dual-axis`, or `adaptive` (default).
//! - `POINT_SEARCH_CANDIDATE_RATIO`: adaptive cut-over, a fraction of the point count.
//!
//! Events are emitted with `tracing`; install a subscriber in the host to see them.

#![allow(
    unsafe_code,
    reason = "This crate is the C ABI boundary; each unsafe block states what the caller guarantees."
)]

use core::ptr;
use core::slice;

use ranked_index::{IndexConfig, RankedIndex, StrategyKind};
use tracing::{debug, trace, warn};

pub use ranked_index::{Point, Rect};

/// Environment variable naming the query strategy.
pub const STRATEGY_ENV: &str = "POINT_SEARCH_STRATEGY";

/// Environment variable holding the adaptive candidate ratio.
pub const CANDIDATE_RATIO_ENV: &str = "POINT_SEARCH_CANDIDATE_RATIO";

/// Opaque handle returned by [`create`].
#[derive(Debug)]
pub struct Object {
    index: RankedIndex,
}

impl Object {
    /// The index behind the handle.
    pub fn index(&self) -> &RankedIndex {
        &self.index
    }
}

/// Build an [`IndexConfig`] from optional strategy and ratio strings.
///
/// Unparseable values are logged and replaced by the defaults.
pub fn config_from_values(strategy: Option<&str>, ratio: Option<&str>) -> IndexConfig {
    let mut config = IndexConfig::default();
    if let Some(s) = strategy {
        match s.parse::<StrategyKind>() {
            Ok(kind) => config = config.with_strategy(kind),
            Err(err) => warn!(%err, "ignoring {STRATEGY_ENV}"),
        }
    }
    if let Some(r) = ratio {
        match r.trim().parse::<f32>() {
            Ok(v) => config = config.with_candidate_ratio(v),
            Err(err) => warn!(%err, value = r, "ignoring {CANDIDATE_RATIO_ENV}"),
        }
    }
    config
}

/// Read the index configuration from [`STRATEGY_ENV`] and [`CANDIDATE_RATIO_ENV`].
pub fn config_from_env() -> IndexConfig {
    let strategy = std::env::var(STRATEGY_ENV).ok();
    let ratio = std::env::var(CANDIDATE_RATIO_ENV).ok();
    config_from_values(strategy.as_deref(), ratio.as_deref())
}

/// Copy the points in `points_begin..points_end` into a new index and return its handle.
///
/// Two null pointers load an empty set. Returns null if exactly one pointer is null,
/// the range is reversed, or there are more points than the index can address.
///
/// # Safety
///
/// Unless both are null, `points_begin..points_end` must be a readable range of
/// initialized `Point`s within one allocation, valid for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn create(
    points_begin: *const Point,
    points_end: *const Point,
) -> *mut Object {
    let points: &[Point] = match (points_begin.is_null(), points_end.is_null()) {
        (true, true) => &[],
        (false, false) => {
            // SAFETY: caller guarantees both pointers lie in the same allocation.
            let len = unsafe { points_end.offset_from(points_begin) };
            let Ok(len) = usize::try_from(len) else {
                warn!(len, "create: points_end precedes points_begin");
                return ptr::null_mut();
            };
            // SAFETY: caller guarantees `len` initialized points start at `points_begin`.
            // `Point` is packed, so any address is suitably aligned.
            unsafe { slice::from_raw_parts(points_begin, len) }
        }
        _ => {
            warn!("create: exactly one of points_begin/points_end is null");
            return ptr::null_mut();
        }
    };

    match RankedIndex::with_config(points, &config_from_env()) {
        Ok(index) => {
            debug!(
                points = index.len(),
                strategy = %index.strategy_kind(),
                heap_bytes = index.heap_bytes(),
                "create"
            );
            Box::into_raw(Box::new(Object { index }))
        }
        Err(err) => {
            warn!(%err, "create failed");
            ptr::null_mut()
        }
    }
}

/// Copy up to `count` lowest-rank points inside `rect` into `out_points`, lowest rank first.
///
/// Returns the number of points written. Returns 0 without writing for a null handle,
/// a null buffer, or `count <= 0`.
///
/// # Safety
///
/// `o` must be null or a live handle from [`create`]. `out_points` must be null or
/// valid for writes of `count` points.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn search(
    o: *mut Object,
    rect: Rect,
    count: i32,
    out_points: *mut Point,
) -> i32 {
    // SAFETY: caller guarantees `o` is null or a live handle; only shared access is taken.
    let Some(object) = (unsafe { o.cast_const().as_ref() }) else {
        return 0;
    };
    let Ok(count) = usize::try_from(count) else {
        return 0;
    };
    if count == 0 || out_points.is_null() {
        return 0;
    }

    let found = object.index.query(&rect, count);
    debug_assert!(found.len() <= count, "query returned more than count");
    // SAFETY: `out_points` holds `count` points and `found.len() <= count`. The buffer
    // belongs to the caller, so it cannot overlap the freshly allocated `found`.
    unsafe { ptr::copy_nonoverlapping(found.as_ptr(), out_points, found.len()) };
    trace!(?rect, count, found = found.len(), "search");
    // `found.len() <= count`, which came from an i32.
    i32::try_from(found.len()).unwrap_or(i32::MAX)
}

/// Release a handle returned by [`create`]. Returns 0 on success, 1 for a null handle.
///
/// # Safety
///
/// `o` must be null or a handle from [`create`] that has not been destroyed. The handle
/// must not be used afterward, and no [`search`] on it may be in flight.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn destroy(o: *mut Object) -> i32 {
    if o.is_null() {
        warn!("destroy: null handle");
        return 1;
    }
    // SAFETY: `o` came from `Box::into_raw` in `create` and is released exactly once.
    let object = unsafe { Box::from_raw(o) };
    debug!(points = object.index.len(), "destroy");
    drop(object);
    0
}
