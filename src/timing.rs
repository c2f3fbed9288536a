// SPDX-License-Identifier: MPL-2.0
//! Deadline-based timing primitives for the notification subsystem.
//!
//! Everything here is driven from the host's tick: no background threads,
//! no timer callbacks. A [`Clock`] supplies the current instant so tests
//! can advance time manually, and a [`Coalescer`] collapses bursts of
//! trigger signals into at most one action per interval.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current instant.
///
/// The area reads time exclusively through this trait so that auto-dismiss
/// and coalescing behavior is deterministic under test.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for tests and deterministic hosts.
///
/// Cloning yields a handle to the same underlying instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    #[must_use]
    pub fn new(start: Instant) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Collapses bursts of trigger signals into at most one firing per interval.
///
/// The first [`signal`](Coalescer::signal) of a burst arms a deadline one
/// interval ahead; further signals before the deadline are absorbed
/// (last-write-wins, not queued). [`poll`](Coalescer::poll) reports — and
/// clears — a due deadline, at which point the owner runs the buffered
/// action exactly once.
#[derive(Debug)]
pub struct Coalescer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Coalescer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Records trigger activity at `now`.
    pub fn signal(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.interval);
        }
    }

    /// Returns `true` once per armed deadline that has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns whether a firing is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Instant {
        Instant::now()
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(start());
        let t0 = clock.now();
        clock.advance(Duration::from_millis(25));
        assert_eq!(clock.now() - t0, Duration::from_millis(25));
    }

    #[test]
    fn manual_clock_clones_share_state() {
        let clock = ManualClock::new(start());
        let other = clock.clone();
        clock.advance(Duration::from_millis(10));
        assert_eq!(clock.now(), other.now());
    }

    #[test]
    fn burst_of_signals_fires_once() {
        let t0 = start();
        let mut coalescer = Coalescer::new(Duration::from_millis(10));

        coalescer.signal(t0);
        coalescer.signal(t0 + Duration::from_millis(2));
        coalescer.signal(t0 + Duration::from_millis(5));

        assert!(!coalescer.poll(t0 + Duration::from_millis(9)));
        assert!(coalescer.poll(t0 + Duration::from_millis(10)));
        // Deadline is consumed; nothing further fires without a new signal.
        assert!(!coalescer.poll(t0 + Duration::from_millis(60)));
    }

    #[test]
    fn new_burst_after_firing_rearms() {
        let t0 = start();
        let mut coalescer = Coalescer::new(Duration::from_millis(10));

        coalescer.signal(t0);
        assert!(coalescer.poll(t0 + Duration::from_millis(10)));

        coalescer.signal(t0 + Duration::from_millis(20));
        assert!(!coalescer.poll(t0 + Duration::from_millis(25)));
        assert!(coalescer.poll(t0 + Duration::from_millis(30)));
    }

    #[test]
    fn cancel_discards_pending_deadline() {
        let t0 = start();
        let mut coalescer = Coalescer::new(Duration::from_millis(10));

        coalescer.signal(t0);
        assert!(coalescer.is_armed());
        coalescer.cancel();
        assert!(!coalescer.is_armed());
        assert!(!coalescer.poll(t0 + Duration::from_millis(50)));
    }
}
