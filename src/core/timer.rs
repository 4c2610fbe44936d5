//! Deterministic timers driven by the engine clock.
//!
//! Nothing here reads a wall clock. Owners pass the current engine time in
//! milliseconds and poll; cancelling a timer is just clearing its deadline, so a
//! dropped or cancelled owner can never receive a late callback.

use serde::{Deserialize, Serialize};

/// Repeating timer with a fixed cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalTimer {
    interval_ms: u64,
    next_fire_ms: Option<u64>,
}

impl IntervalTimer {
    /// Creates a stopped timer. A zero interval is treated as 1 ms.
    #[must_use]
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: if interval_ms == 0 { 1 } else { interval_ms },
            next_fire_ms: None,
        }
    }

    #[must_use]
    pub const fn interval_ms(self) -> u64 {
        self.interval_ms
    }

    #[must_use]
    pub const fn is_running(self) -> bool {
        self.next_fire_ms.is_some()
    }

    #[must_use]
    pub const fn next_fire_ms(self) -> Option<u64> {
        self.next_fire_ms
    }

    /// Starts the cadence at `now_ms`. A running timer keeps its phase.
    ///
    /// A first deadline past the end of the clock leaves the timer stopped.
    pub fn start(&mut self, now_ms: u64) {
        if self.next_fire_ms.is_none() {
            self.next_fire_ms = now_ms.checked_add(self.interval_ms);
        }
    }

    pub fn cancel(&mut self) {
        self.next_fire_ms = None;
    }

    /// Fires at most one due tick and schedules the next one from the
    /// previous deadline, so the cadence never drifts.
    ///
    /// The timer stops once its next deadline would overflow the clock.
    pub fn poll(&mut self, now_ms: u64) -> Option<u64> {
        let due = self.next_fire_ms?;
        if due > now_ms {
            return None;
        }
        self.next_fire_ms = due.checked_add(self.interval_ms);
        Some(due)
    }

    /// Consumes every tick due by `now_ms` in one step.
    ///
    /// The tick count is computed, not iterated, so arbitrarily large clock
    /// jumps cost the same as a single tick.
    pub fn drain(&mut self, now_ms: u64) -> Option<TickBatch> {
        let first_ms = self.next_fire_ms?;
        if first_ms > now_ms {
            return None;
        }
        let count = (now_ms - first_ms) / self.interval_ms + 1;
        let last_ms = first_ms + (count - 1) * self.interval_ms;
        self.next_fire_ms = last_ms.checked_add(self.interval_ms);
        Some(TickBatch {
            first_ms,
            interval_ms: self.interval_ms,
            count,
        })
    }
}

/// Ticks consumed by one [`IntervalTimer::drain`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickBatch {
    pub first_ms: u64,
    pub interval_ms: u64,
    pub count: u64,
}

impl TickBatch {
    /// Firing time of the `index`-th tick of the batch. `index` must be below
    /// `count`.
    #[must_use]
    pub const fn tick_at(self, index: u64) -> u64 {
        self.first_ms + index * self.interval_ms
    }

    #[must_use]
    pub const fn last_ms(self) -> u64 {
        self.tick_at(self.count - 1)
    }
}

/// Single-shot deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Deadline {
    due_ms: Option<u64>,
}

impl Deadline {
    /// Arms (or re-arms) the deadline `delay_ms` after `now_ms`.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.due_ms = Some(now_ms.saturating_add(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.due_ms = None;
    }

    #[must_use]
    pub const fn is_armed(self) -> bool {
        self.due_ms.is_some()
    }

    #[must_use]
    pub const fn due_ms(self) -> Option<u64> {
        self.due_ms
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if due <= now_ms => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Deadline, IntervalTimer, TickBatch};

    #[test]
    fn interval_timer_drains_every_due_tick_in_order() {
        let mut timer = IntervalTimer::new(100);
        timer.start(0);

        let mut fired = Vec::new();
        while let Some(at) = timer.poll(350) {
            fired.push(at);
        }
        assert_eq!(fired, vec![100, 200, 300]);
        assert_eq!(timer.next_fire_ms(), Some(400));
    }

    #[test]
    fn interval_timer_start_is_idempotent_while_running() {
        let mut timer = IntervalTimer::new(100);
        timer.start(0);
        timer.start(70);
        assert_eq!(timer.next_fire_ms(), Some(100));

        timer.cancel();
        assert!(!timer.is_running());
        assert_eq!(timer.poll(10_000), None);

        timer.start(70);
        assert_eq!(timer.next_fire_ms(), Some(170));
    }

    #[test]
    fn drain_counts_due_ticks_without_iterating() {
        let mut timer = IntervalTimer::new(100);
        timer.start(0);
        assert_eq!(timer.drain(99), None);

        let batch = timer.drain(1_050).expect("ticks due");
        assert_eq!(
            batch,
            TickBatch {
                first_ms: 100,
                interval_ms: 100,
                count: 10,
            }
        );
        assert_eq!(batch.last_ms(), 1_000);
        assert_eq!(timer.next_fire_ms(), Some(1_100));
    }

    #[test]
    fn timer_stops_at_end_of_clock() {
        let mut timer = IntervalTimer::new(4_000);
        timer.start(0);
        let batch = timer.drain(u64::MAX).expect("ticks due");
        assert_eq!(batch.count, u64::MAX / 4_000);
        assert!(!timer.is_running());
        assert_eq!(timer.drain(u64::MAX), None);

        let mut timer = IntervalTimer::new(u64::MAX / 2);
        timer.start(u64::MAX / 2);
        assert_eq!(timer.poll(u64::MAX), Some(u64::MAX - 1));
        assert_eq!(timer.poll(u64::MAX), None);
        assert!(!timer.is_running());

        let mut timer = IntervalTimer::new(10);
        timer.start(u64::MAX - 5);
        assert!(!timer.is_running());
    }

    #[test]
    fn deadline_fires_once() {
        let mut deadline = Deadline::default();
        deadline.arm(10, 100);
        assert!(!deadline.poll(109));
        assert!(deadline.poll(110));
        assert!(!deadline.poll(500));
        assert!(!deadline.is_armed());
    }

    #[test]
    fn rearming_deadline_replaces_previous_due_time() {
        let mut deadline = Deadline::default();
        deadline.arm(0, 100);
        deadline.arm(50, 100);
        assert!(!deadline.poll(100));
        assert!(deadline.poll(150));
    }
}
