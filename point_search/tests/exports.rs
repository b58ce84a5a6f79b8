// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive the exported functions the way a foreign host would.

#![allow(unsafe_code, reason = "Exercises the unsafe C ABI directly.")]

use point_search::{Object, Point, Rect, create, destroy, search};

/// Create a handle over `pts`, run `f`, then destroy it.
fn with_handle<R>(pts: &[Point], f: impl FnOnce(*mut Object) -> R) -> R {
    let range = pts.as_ptr_range();
    // SAFETY: `range` spans the live slice `pts`.
    let o = unsafe { create(range.start, range.end) };
    assert!(!o.is_null(), "create must return a handle");
    let r = f(o);
    // SAFETY: `o` is live and destroyed exactly once.
    assert_eq!(unsafe { destroy(o) }, 0);
    r
}

fn run(o: *mut Object, rect: Rect, count: i32, out: &mut [Point]) -> i32 {
    assert!(usize::try_from(count).map_or(true, |c| c <= out.len()));
    // SAFETY: `o` is live and `out` holds at least `count` points.
    unsafe { search(o, rect, count, out.as_mut_ptr()) }
}

fn line() -> Vec<Point> {
    [5, 3, 1, 4, 2]
        .iter()
        .enumerate()
        .map(|(i, &rank)| {
            let i = i8::try_from(i).unwrap();
            Point::new(i, rank, f32::from(i), f32::from(i))
        })
        .collect()
}

#[test]
fn returns_lowest_ranks_in_order() {
    let pts = line();
    with_handle(&pts, |o| {
        let mut out = [Point::default(); 3];
        let n = run(o, Rect::new(0.0, 0.0, 4.0, 4.0), 3, &mut out);
        assert_eq!(n, 3);
        let ranks: Vec<i32> = out.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, [1, 2, 3]);
    });
}

#[test]
fn input_buffer_may_be_freed_after_create() {
    let pts = line();
    let range = pts.as_ptr_range();
    // SAFETY: `range` spans the live slice `pts`.
    let o = unsafe { create(range.start, range.end) };
    drop(pts);
    let mut out = [Point::default(); 5];
    let n = run(o, Rect::EVERYTHING, 5, &mut out);
    assert_eq!(n, 5);
    // SAFETY: `o` is live and destroyed exactly once.
    assert_eq!(unsafe { destroy(o) }, 0);
}

#[test]
fn never_writes_past_count() {
    let pts = line();
    with_handle(&pts, |o| {
        let sentinel = Point::new(-1, -1, -1.0, -1.0);
        let mut out = [sentinel; 4];
        let n = run(o, Rect::EVERYTHING, 2, &mut out);
        assert_eq!(n, 2);
        assert_eq!(out[2..], [sentinel, sentinel]);
    });
}

#[test]
fn degenerate_inputs_return_zero() {
    let pts = line();
    with_handle(&pts, |o| {
        let mut out = [Point::default(); 2];
        assert_eq!(run(o, Rect::EVERYTHING, 0, &mut out), 0);
        assert_eq!(run(o, Rect::EVERYTHING, -3, &mut out), 0);
        assert_eq!(run(o, Rect::new(10.0, 10.0, 11.0, 11.0), 2, &mut out), 0);
        // SAFETY: a null buffer is rejected before any write.
        assert_eq!(unsafe { search(o, Rect::EVERYTHING, 2, std::ptr::null_mut()) }, 0);
    });
    // SAFETY: a null handle is rejected before any read.
    assert_eq!(unsafe { search(std::ptr::null_mut(), Rect::EVERYTHING, 1, std::ptr::null_mut()) }, 0);
    // SAFETY: a null handle is rejected.
    assert_eq!(unsafe { destroy(std::ptr::null_mut()) }, 1);
}

#[test]
fn empty_range_is_legal() {
    with_handle(&[], |o| {
        let mut out = [Point::default(); 20];
        assert_eq!(run(o, Rect::EVERYTHING, 20, &mut out), 0);
    });
}

#[test]
fn reversed_range_is_rejected() {
    let pts = line();
    let range = pts.as_ptr_range();
    // SAFETY: both pointers lie within `pts`.
    let o = unsafe { create(range.end, range.start) };
    assert!(o.is_null());
}

#[test]
fn handle_exposes_the_index() {
    let pts = line();
    with_handle(&pts, |o| {
        // SAFETY: `o` is live for the duration of the closure.
        let object = unsafe { &*o };
        assert_eq!(object.index().len(), 5);
    });
}
