//! Timer scheduling module
//!
//! Controllers never read a wall clock or own a thread. Every "later" they need
//! (throttle reset, auto-advance tick, pause cooldown, animation frame) is
//! requested through the [`Scheduler`] trait and identified by the returned
//! [`TimerHandle`]. The host delivers fired handles back to the controller,
//! which ignores any handle it no longer owns.
//!
//! # Event Flow
//!
//! ```text
//! input event ──► controller ──► Scheduler::schedule ──► TimerHandle (kept by controller)
//!                     ▲                                          │
//!                     └──────── on_timer(handle) ◄── host ◄──────┘ (when due)
//! ```
//!
//! [`ManualScheduler`] drives time logically so that tests and the replay tool
//! can step through timing contracts without sleeping.

pub mod manual;

pub use manual::ManualScheduler;

use std::fmt;
use std::time::Duration;

/// Identifies one scheduled timer
///
/// Handles are never reused by a scheduler, so a handle kept past its firing
/// or cancellation can never alias a newer timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wrap a raw id; schedulers are responsible for uniqueness
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Raw id
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Source of time and one-shot timers for controllers
pub trait Scheduler {
    /// Time elapsed since the scheduler's origin
    fn now(&self) -> Duration;

    /// Request a callback `delay` from now
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a pending timer
    ///
    /// Returns `true` if the timer was pending. Cancelling a fired, cancelled
    /// or unknown handle is a no-op returning `false`.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}

/// Cancel the timer in `slot`, if any, leaving the slot empty
pub(crate) fn cancel_slot<S: Scheduler + ?Sized>(scheduler: &mut S, slot: &mut Option<TimerHandle>) {
    if let Some(handle) = slot.take() {
        scheduler.cancel(handle);
    }
}
