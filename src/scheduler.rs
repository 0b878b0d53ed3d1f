//! Timer queue driven by the simulator's frame loop.
//!
//! Deadlines are measured against the time of the last [`FrameScheduler::take_due`]
//! call rather than the wall clock, so a timer scheduled during dispatch
//! never fires in the same frame, and tests can drive time explicitly.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use altimeter_common::Scheduler;
use altimeter_common::TimerHandle;
use altimeter_common::scheduler::HandleAllocator;

/// One-shot timers ordered by deadline.
pub struct FrameScheduler {
    alloc: HandleAllocator,
    /// `(deadline, handle)`; the handle breaks ties in scheduling order.
    timers: BTreeSet<(Instant, TimerHandle)>,
    now: Instant,
}

impl FrameScheduler {
    /// Create an empty queue whose clock starts at `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            alloc: HandleAllocator::new(),
            timers: BTreeSet::new(),
            now,
        }
    }

    /// Advance the clock and remove every timer due at `now`, earliest first.
    pub fn take_due(
        &mut self,
        now: Instant,
    ) -> Vec<TimerHandle> {
        self.now = self.now.max(now);
        let mut due = Vec::new();
        while let Some(&(deadline, handle)) = self.timers.first() {
            if deadline > self.now {
                break;
            }
            self.timers.pop_first();
            due.push(handle);
        }
        due
    }

    /// Number of timers still waiting.
    #[inline]
    pub fn pending(&self) -> usize { self.timers.len() }
}

impl Scheduler for FrameScheduler {
    fn schedule(
        &mut self,
        delay_ms: u32,
    ) -> TimerHandle {
        let handle = self.alloc.allocate();
        let deadline = self.now + Duration::from_millis(u64::from(delay_ms));
        self.timers.insert((deadline, handle));
        handle
    }

    fn cancel(
        &mut self,
        handle: TimerHandle,
    ) {
        self.timers.retain(|&(_, h)| h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_delay_fires_on_next_take() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(start);
        let handle = scheduler.schedule(0);
        assert_eq!(scheduler.take_due(start), vec![handle]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_not_due_before_deadline() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(start);
        let handle = scheduler.schedule(1000);

        assert!(scheduler.take_due(start + Duration::from_millis(999)).is_empty());
        assert_eq!(scheduler.take_due(start + Duration::from_millis(1000)), vec![handle]);
    }

    #[test]
    fn test_due_in_deadline_order() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(start);
        let late = scheduler.schedule(500);
        let early = scheduler.schedule(100);
        let tie = scheduler.schedule(100);

        let due = scheduler.take_due(start + Duration::from_secs(1));
        assert_eq!(due, vec![early, tie, late]);
    }

    #[test]
    fn test_cancelled_never_fires() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(start);
        let keep = scheduler.schedule(10);
        let gone = scheduler.schedule(10);
        scheduler.cancel(gone);

        assert_eq!(scheduler.take_due(start + Duration::from_secs(1)), vec![keep]);
    }

    #[test]
    fn test_cancel_unknown_is_harmless() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(start);
        let handle = scheduler.schedule(0);
        scheduler.take_due(start);
        scheduler.cancel(handle);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_delay_measured_from_last_frame() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(start);
        let frame = start + Duration::from_millis(1500);
        scheduler.take_due(frame);

        let handle = scheduler.schedule(1000);
        assert!(scheduler.take_due(frame + Duration::from_millis(999)).is_empty());
        assert_eq!(scheduler.take_due(frame + Duration::from_millis(1000)), vec![handle]);
    }

    #[test]
    fn test_clock_never_goes_backwards() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(start + Duration::from_secs(5));
        let handle = scheduler.schedule(0);
        // An older timestamp still sees the zero-delay timer as due
        assert_eq!(scheduler.take_due(start), vec![handle]);
    }
}
