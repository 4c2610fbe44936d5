use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::IntervalTimer;
use crate::error::{SiteError, SiteResult};

/// Default auto-advance cadence.
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 4_000;
/// Default duration of the cosmetic slide animation.
pub const DEFAULT_SLIDE_TRANSITION_MS: u64 = 500;
/// Upper bound on steps returned by one [`Carousel::advance_to`] call.
pub const MAX_REPORTED_TICKS: u64 = 64;

/// Public carousel state. Only the owning [`Carousel`] writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarouselState {
    pub active_index: usize,
    pub is_paused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselTiming {
    pub interval_ms: u64,
    pub transition_ms: u64,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
            transition_ms: DEFAULT_SLIDE_TRANSITION_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideDirection {
    Forward,
    Backward,
}

/// Outgoing entry slides off while the incoming one slides in, both in
/// `direction`. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideTransition {
    pub outgoing: usize,
    pub incoming: usize,
    pub direction: SlideDirection,
    pub started_at_ms: u64,
}

impl SlideTransition {
    /// Animation progress in `[0, 1]` for a transition lasting `duration_ms`.
    #[must_use]
    pub fn progress(self, now_ms: u64, duration_ms: u64) -> f64 {
        if duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.started_at_ms);
        (elapsed as f64 / duration_ms as f64).min(1.0)
    }
}

/// What moved the active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselStepCause {
    Timer,
    Select,
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselStep {
    pub from: usize,
    pub to: usize,
    pub cause: CarouselStepCause,
    pub at_ms: u64,
}

/// Steps fired by one clock advance. Several ticks can be due after a long gap.
pub type CarouselSteps = SmallVec<[CarouselStep; 4]>;

/// Single-item rotating presentation over an ordered entry list.
///
/// The repeating timer runs only while the carousel is mounted, has more than
/// one entry, reduced motion is off, and the pointer is not over it. Those
/// conditions are re-evaluated after every change to any of them. Manual
/// moves (`select`, `show_next`, `show_previous`) update the index immediately
/// and leave the timer phase alone.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    entries: Vec<T>,
    state: CarouselState,
    timing: CarouselTiming,
    timer: IntervalTimer,
    reduced_motion: bool,
    mounted: bool,
    transition: Option<SlideTransition>,
}

impl<T> Carousel<T> {
    /// Mounts a carousel at index 0, unpaused, and starts its timer when allowed.
    ///
    /// An empty entry list is a valid, inert carousel: nothing to show and no timer.
    #[must_use]
    pub fn mount(entries: Vec<T>, timing: CarouselTiming, reduced_motion: bool, now_ms: u64) -> Self {
        let mut carousel = Self {
            entries,
            state: CarouselState::default(),
            timing,
            timer: IntervalTimer::new(timing.interval_ms.max(1)),
            reduced_motion,
            mounted: true,
            transition: None,
        };
        carousel.sync_timer(now_ms);
        debug!(
            entries = carousel.entries.len(),
            timer_running = carousel.timer.is_running(),
            "carousel mounted"
        );
        carousel
    }

    /// Cancels the timer. Every later call is a no-op.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.timer.cancel();
        self.transition = None;
        debug!(entries = self.entries.len(), "carousel unmounted");
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    #[must_use]
    pub fn timing(&self) -> CarouselTiming {
        self.timing
    }

    #[must_use]
    pub fn active_entry(&self) -> Option<&T> {
        self.entries.get(self.state.active_index)
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    #[must_use]
    pub fn next_tick_at_ms(&self) -> Option<u64> {
        self.timer.next_fire_ms()
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Pauses auto-advance. Returns `true` when the pause flag changed.
    pub fn pointer_enter(&mut self, now_ms: u64) -> bool {
        self.set_paused(true, now_ms)
    }

    /// Resumes auto-advance; the interval restarts from `now_ms`.
    /// Returns `true` when the pause flag changed.
    pub fn pointer_leave(&mut self, now_ms: u64) -> bool {
        self.set_paused(false, now_ms)
    }

    pub fn set_reduced_motion(&mut self, reduced_motion: bool, now_ms: u64) {
        if !self.mounted || self.reduced_motion == reduced_motion {
            return;
        }
        self.reduced_motion = reduced_motion;
        if reduced_motion {
            self.transition = None;
        }
        self.sync_timer(now_ms);
    }

    /// Jumps to `index` regardless of pause and timer state.
    ///
    /// Returns `Ok(None)` when `index` is already active or the carousel is
    /// unmounted.
    pub fn select(&mut self, index: usize, now_ms: u64) -> SiteResult<Option<CarouselStep>> {
        if !self.mounted {
            return Ok(None);
        }
        if index >= self.entries.len() {
            return Err(SiteError::CarouselIndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        if index == self.state.active_index {
            return Ok(None);
        }
        let direction = if index > self.state.active_index {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        };
        Ok(Some(self.step_to(
            index,
            direction,
            CarouselStepCause::Select,
            now_ms,
        )))
    }

    /// Moves one entry forward, wrapping at the end.
    pub fn show_next(&mut self, now_ms: u64) -> Option<CarouselStep> {
        if !self.mounted || self.entries.len() < 2 {
            return None;
        }
        let to = (self.state.active_index + 1) % self.entries.len();
        Some(self.step_to(to, SlideDirection::Forward, CarouselStepCause::Next, now_ms))
    }

    /// Moves one entry back, wrapping at the start.
    pub fn show_previous(&mut self, now_ms: u64) -> Option<CarouselStep> {
        if !self.mounted || self.entries.len() < 2 {
            return None;
        }
        let len = self.entries.len();
        let to = (self.state.active_index + len - 1) % len;
        Some(self.step_to(
            to,
            SlideDirection::Backward,
            CarouselStepCause::Previous,
            now_ms,
        ))
    }

    /// Fires every timer tick due by `now_ms`, in order.
    ///
    /// Every due tick moves the active index. Only the last
    /// [`MAX_REPORTED_TICKS`] of them come back as steps; earlier ones are
    /// applied as a single index shift.
    pub fn advance_to(&mut self, now_ms: u64) -> CarouselSteps {
        let mut steps = CarouselSteps::new();
        let len = self.entries.len();
        if !self.mounted || len == 0 {
            return steps;
        }
        let Some(batch) = self.timer.drain(now_ms) else {
            return steps;
        };

        let silent = batch.count.saturating_sub(MAX_REPORTED_TICKS);
        if silent > 0 {
            let shift = (silent % len as u64) as usize;
            self.state.active_index = (self.state.active_index + shift) % len;
            debug!(
                ticks = batch.count,
                unreported = silent,
                active_index = self.state.active_index,
                "carousel caught up after clock jump"
            );
        }
        for tick in silent..batch.count {
            let fired_at = batch.tick_at(tick);
            let to = (self.state.active_index + 1) % len;
            let step = self.step_to(to, SlideDirection::Forward, CarouselStepCause::Timer, fired_at);
            trace!(from = step.from, to = step.to, at_ms = fired_at, "carousel tick");
            steps.push(step);
        }
        steps
    }

    /// Slide animation still in flight at `now_ms`, if any.
    #[must_use]
    pub fn transition_at(&self, now_ms: u64) -> Option<SlideTransition> {
        let transition = self.transition?;
        let ends_at = transition
            .started_at_ms
            .saturating_add(self.timing.transition_ms);
        (now_ms < ends_at).then_some(transition)
    }

    /// Entry whose card was clicked, for the member-selected side effect.
    ///
    /// Does not touch the pause flag.
    #[must_use]
    pub fn activate(&self) -> Option<&T> {
        if !self.mounted {
            return None;
        }
        self.active_entry()
    }

    fn set_paused(&mut self, paused: bool, now_ms: u64) -> bool {
        if !self.mounted || self.state.is_paused == paused {
            return false;
        }
        self.state.is_paused = paused;
        self.sync_timer(now_ms);
        true
    }

    fn should_run(&self) -> bool {
        self.mounted && self.entries.len() > 1 && !self.reduced_motion && !self.state.is_paused
    }

    fn sync_timer(&mut self, now_ms: u64) {
        if self.should_run() {
            self.timer.start(now_ms);
        } else {
            self.timer.cancel();
        }
    }

    fn step_to(
        &mut self,
        to: usize,
        direction: SlideDirection,
        cause: CarouselStepCause,
        at_ms: u64,
    ) -> CarouselStep {
        let from = self.state.active_index;
        self.state.active_index = to;
        self.transition = (!self.reduced_motion).then_some(SlideTransition {
            outgoing: from,
            incoming: to,
            direction,
            started_at_ms: at_ms,
        });
        CarouselStep {
            from,
            to,
            cause,
            at_ms,
        }
    }
}
