//! Cancellable one-shot timers supplied by the host event loop.
//!
//! The controller never sleeps or spawns. It asks the scheduler for a
//! callback after a delay and receives it later through
//! [`ScreenController::on_timer`](crate::controller::ScreenController::on_timer).
//! Handles are compared on delivery, so a timer the host already dequeued
//! before a cancel is still dropped.

/// Identifier of one scheduled callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u32);

impl TimerHandle {
    #[inline]
    pub const fn new(id: u32) -> Self { Self(id) }

    #[inline]
    pub const fn id(self) -> u32 { self.0 }
}

/// One-shot timer service of the host dispatch thread.
pub trait Scheduler {
    /// Request a callback `delay_ms` from now. A zero delay means "on the next
    /// dispatch", never synchronously from inside this call.
    fn schedule(
        &mut self,
        delay_ms: u32,
    ) -> TimerHandle;

    /// Withdraw a pending callback. Unknown or already fired handles are ignored.
    fn cancel(
        &mut self,
        handle: TimerHandle,
    );
}

impl<T> Scheduler for &mut T
where
    T: Scheduler + ?Sized,
{
    fn schedule(
        &mut self,
        delay_ms: u32,
    ) -> TimerHandle {
        T::schedule(self, delay_ms)
    }

    fn cancel(
        &mut self,
        handle: TimerHandle,
    ) {
        T::cancel(self, handle);
    }
}

/// Monotonic source of fresh timer handles for scheduler implementations.
#[derive(Debug, Default)]
pub struct HandleAllocator {
    next: u32,
}

impl HandleAllocator {
    pub const fn new() -> Self { Self { next: 0 } }

    /// Allocate the next handle. Ids wrap after `u32::MAX` timers.
    pub fn allocate(&mut self) -> TimerHandle {
        let handle = TimerHandle(self.next);
        self.next = self.next.wrapping_add(1);
        handle
    }
}
