// Host-side tests for the cancellable loop handle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod schedule {
    include!("../src/core/schedule.rs");
}

use schedule::*;

#[test]
fn loop_handle_starts_active() {
    let h = LoopHandle::default();
    assert!(h.is_active());
    assert_eq!(h.frames(), 0);
}

#[test]
fn cancel_is_shared_and_idempotent() {
    let h = LoopHandle::default();
    let observer = h.clone();
    assert!(h.cancel());
    assert!(!observer.is_active());
    assert!(!observer.cancel());
    assert!(!h.cancel());
}

#[test]
fn bounded_loop_stops_after_cancel() {
    let h = LoopHandle::default();
    let driver = h.clone();
    // Stand-in for requestAnimationFrame: keep going while active
    let mut iterations = 0;
    while driver.is_active() && iterations < 1000 {
        driver.record_frame();
        iterations += 1;
        if driver.frames() == 30 {
            h.cancel();
        }
    }
    assert_eq!(iterations, 30);
    assert_eq!(h.frames(), 30);
}

#[test]
fn cancel_before_start_records_no_frames() {
    let h = LoopHandle::default();
    let pending_start = h.clone();
    assert!(h.cancel());
    // The deferred start checks the flag before its first frame
    let mut iterations = 0;
    while pending_start.is_active() && iterations < 1000 {
        pending_start.record_frame();
        iterations += 1;
    }
    assert_eq!(iterations, 0);
    assert_eq!(h.frames(), 0);
    assert!(!pending_start.cancel());
}

#[test]
fn timer_slot_is_empty_by_default() {
    let slot: TimerSlot<i32> = TimerSlot::default();
    assert!(!slot.is_pending());
    assert_eq!(slot.pending(), None);
}
