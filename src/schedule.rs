//! Dealer pacing.
//!
//! The round never waits on a clock. When the dealer must draw again it emits
//! a [`DealerTick`] with the configured delay, and a [`Scheduler`] decides
//! when that tick becomes due.

use core::time::Duration;

use alloc::collections::VecDeque;

/// A deferred dealer draw, tagged with the round generation that asked for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealerTick {
    /// Generation of the round that scheduled the draw.
    pub generation: u64,
}

/// Holds deferred dealer draws until they are due.
pub trait Scheduler {
    /// Queues a tick to become due after `delay`.
    fn schedule(&mut self, tick: DealerTick, delay: Duration);

    /// Returns the next tick that is due, if any.
    fn next_due(&mut self) -> Option<DealerTick>;
}

/// Every tick is due as soon as it is scheduled. The dealer plays out in one
/// call.
#[derive(Debug, Default)]
pub struct ImmediateScheduler {
    queue: VecDeque<DealerTick>,
}

impl ImmediateScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl Scheduler for ImmediateScheduler {
    fn schedule(&mut self, tick: DealerTick, _delay: Duration) {
        self.queue.push_back(tick);
    }

    fn next_due(&mut self) -> Option<DealerTick> {
        self.queue.pop_front()
    }
}

/// Ticks stay pending until [`release`](Self::release) is called.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: VecDeque<(DealerTick, Duration)>,
    due: VecDeque<DealerTick>,
}

impl ManualScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            due: VecDeque::new(),
        }
    }

    /// Returns the number of ticks waiting to be released.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Returns the delays of the waiting ticks, oldest first.
    pub fn pending_delays(&self) -> impl Iterator<Item = Duration> + '_ {
        self.pending.iter().map(|(_, delay)| *delay)
    }

    /// Makes the oldest waiting tick due. Returns `false` if none was waiting.
    pub fn release(&mut self) -> bool {
        match self.pending.pop_front() {
            Some((tick, _)) => {
                self.due.push_back(tick);
                true
            }
            None => false,
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, tick: DealerTick, delay: Duration) {
        self.pending.push_back((tick, delay));
    }

    fn next_due(&mut self) -> Option<DealerTick> {
        self.due.pop_front()
    }
}

/// Sleeps the calling thread for each tick's delay before it becomes due.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct PacedScheduler {
    queue: VecDeque<(DealerTick, Duration)>,
}

#[cfg(feature = "std")]
impl PacedScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

#[cfg(feature = "std")]
impl Scheduler for PacedScheduler {
    fn schedule(&mut self, tick: DealerTick, delay: Duration) {
        self.queue.push_back((tick, delay));
    }

    fn next_due(&mut self) -> Option<DealerTick> {
        let (tick, delay) = self.queue.pop_front()?;
        std::thread::sleep(delay);
        Some(tick)
    }
}
