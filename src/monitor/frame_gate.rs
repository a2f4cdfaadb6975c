//! Animation-frame coalescing for scroll notifications
//!
//! Scroll events can arrive many times per frame. The gate requests at most one
//! frame callback while one is outstanding and, when that frame runs, hands
//! back only the most recent offset. This mirrors the usual "ticking" flag
//! pattern around `requestAnimationFrame`.

use crate::scheduler::{Scheduler, TimerHandle, cancel_slot};
use std::time::Duration;
use tracing::trace;

/// Length of one animation frame at 60 Hz, in milliseconds
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Coalesces scroll offsets into one sample per frame
#[derive(Debug)]
pub struct FrameGate {
    frame_interval: Duration,
    pending: Option<TimerHandle>,
    latest: Option<f64>,
    closed: bool,
}

impl FrameGate {
    /// Create a gate whose frame callback runs `frame_interval` after a request
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            pending: None,
            latest: None,
            closed: false,
        }
    }

    /// Record a scroll offset
    ///
    /// Returns `true` when this call requested a new frame, `false` when a
    /// frame was already pending (the offset replaces the earlier one) or the
    /// gate is closed.
    pub fn notify<S>(&mut self, y: f64, scheduler: &mut S) -> bool
    where
        S: Scheduler + ?Sized,
    {
        if self.closed {
            return false;
        }
        self.latest = Some(y);
        if self.pending.is_some() {
            trace!("Frame already pending, offset {} coalesced", y);
            return false;
        }
        self.pending = Some(scheduler.schedule(self.frame_interval));
        true
    }

    /// Run the frame callback for `handle`
    ///
    /// Returns the latest offset if `handle` is the pending frame; stale or
    /// foreign handles return `None`.
    pub fn on_frame(&mut self, handle: TimerHandle) -> Option<f64> {
        if self.closed || self.pending != Some(handle) {
            return None;
        }
        self.pending = None;
        self.latest.take()
    }

    /// Whether `handle` is the frame callback this gate is waiting on
    pub fn owns(&self, handle: TimerHandle) -> bool {
        !self.closed && self.pending == Some(handle)
    }

    /// Whether a frame callback is outstanding
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancel any outstanding frame and stop accepting offsets. Idempotent.
    pub fn close<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler + ?Sized,
    {
        cancel_slot(scheduler, &mut self.pending);
        self.latest = None;
        self.closed = true;
    }
}
