//! Logical-clock scheduler
//!
//! Time only moves when the owner calls [`ManualScheduler::advance_by`] or
//! [`ManualScheduler::advance_to`]. Due timers come back in deadline order,
//! with ties broken by scheduling order.

use super::{Scheduler, TimerHandle};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tracing::trace;

/// Scheduler driven by an explicit logical clock
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    /// Pending timers keyed by (deadline, id) so iteration is firing order
    queue: BTreeMap<(Duration, u64), TimerHandle>,
    /// Deadline lookup for cancellation
    deadlines: HashMap<TimerHandle, Duration>,
}

impl ManualScheduler {
    /// Create a scheduler whose clock reads zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers still pending
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether `handle` is still waiting to fire
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle)
    }

    /// Deadline of the earliest pending timer
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Move the clock forward by `delta` and return the timers that came due
    pub fn advance_by(&mut self, delta: Duration) -> Vec<TimerHandle> {
        let target = self.now.saturating_add(delta);
        self.advance_to(target)
    }

    /// Move the clock to `target` and return the timers that came due
    ///
    /// A target in the past leaves the clock where it is.
    pub fn advance_to(&mut self, target: Duration) -> Vec<TimerHandle> {
        let mut fired = Vec::new();
        while let Some(handle) = self.pop_due(target) {
            fired.push(handle);
        }
        self.now = self.now.max(target);
        fired
    }

    /// Pop the earliest timer due at or before `target`, moving the clock to its deadline
    ///
    /// Hosts that react to each timer by scheduling new ones use this so a
    /// timer scheduled from inside a callback still fires within the same
    /// advance when its deadline falls before `target`.
    pub fn pop_due(&mut self, target: Duration) -> Option<TimerHandle> {
        let (&(deadline, id), _) = self.queue.iter().next()?;
        if deadline > target {
            return None;
        }
        let handle = self.queue.remove(&(deadline, id))?;
        self.deadlines.remove(&handle);
        self.now = self.now.max(deadline);
        trace!("{} fired at {:?}", handle, deadline);
        Some(handle)
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        let handle = TimerHandle::from_raw(id);
        let deadline = self.now.saturating_add(delay);
        self.queue.insert((deadline, id), handle);
        self.deadlines.insert(handle, deadline);
        trace!("{} scheduled for {:?}", handle, deadline);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(deadline) => {
                self.queue.remove(&(deadline, handle.as_raw()));
                trace!("{} cancelled", handle);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let mut scheduler = ManualScheduler::new();
        let late = scheduler.schedule(ms(300));
        let early = scheduler.schedule(ms(100));
        let tie = scheduler.schedule(ms(100));

        let fired = scheduler.advance_by(ms(500));
        assert_eq!(fired, vec![early, tie, late]);
        assert_eq!(scheduler.now(), ms(500));
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_timer_not_due_stays_pending() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(ms(600));

        assert!(scheduler.advance_by(ms(599)).is_empty());
        assert!(scheduler.is_pending(handle));
        assert_eq!(scheduler.advance_by(ms(1)), vec![handle]);
        assert!(!scheduler.is_pending(handle));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(ms(50));

        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        assert!(scheduler.advance_by(ms(100)).is_empty());
    }

    #[test]
    fn test_cancel_after_fire_returns_false() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(ms(10));
        scheduler.advance_by(ms(10));
        assert!(!scheduler.cancel(handle));
    }

    #[test]
    fn test_handles_are_not_reused() {
        let mut scheduler = ManualScheduler::new();
        let first = scheduler.schedule(ms(1));
        scheduler.cancel(first);
        let second = scheduler.schedule(ms(1));
        assert_ne!(first, second);
    }

    #[test]
    fn test_advance_to_past_keeps_clock() {
        let mut scheduler = ManualScheduler::new();
        scheduler.advance_to(ms(1000));
        scheduler.advance_to(ms(200));
        assert_eq!(scheduler.now(), ms(1000));
    }

    #[test]
    fn test_pop_due_moves_clock_to_deadline() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(ms(250));

        assert_eq!(scheduler.next_deadline(), Some(ms(250)));
        assert_eq!(scheduler.pop_due(ms(1000)), Some(handle));
        assert_eq!(scheduler.now(), ms(250));
        assert_eq!(scheduler.pop_due(ms(1000)), None);
    }
}
