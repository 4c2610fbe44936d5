use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Deadline, ServiceId};

/// Default bound on how long an armed target waits for its page to mount.
pub const DEFAULT_SECTION_MOUNT_DELAY_MS: u64 = 100;

/// What ended the wait for the destination page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionTrigger {
    /// The destination page reported its first successful render.
    PageMounted,
    /// The bounded delay ran out first.
    DelayElapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionScrollOutcome {
    Scrolled { top: f64 },
    AnchorMissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SectionScrollPhase {
    Idle,
    ArmedWithTarget {
        service_id: ServiceId,
        armed_at_ms: u64,
    },
    Resolved {
        service_id: ServiceId,
        trigger: ResolutionTrigger,
        outcome: SectionScrollOutcome,
    },
}

/// A target taken out of the armed slot, awaiting its single lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct PendingSectionScroll {
    pub service_id: ServiceId,
    pub trigger: ResolutionTrigger,
}

/// Two-phase scroll into a section whose anchor only exists after the
/// destination page renders.
///
/// At most one target is armed. Re-arming replaces it and disarming drops it;
/// either way the replaced target never resolves. Taking a target clears the
/// armed slot before the lookup happens, so a target resolves at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct DeferredSectionScroll {
    phase: SectionScrollPhase,
    deadline: Deadline,
    mount_delay_ms: u64,
}

impl DeferredSectionScroll {
    #[must_use]
    pub fn new(mount_delay_ms: u64) -> Self {
        Self {
            phase: SectionScrollPhase::Idle,
            deadline: Deadline::default(),
            mount_delay_ms,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SectionScrollPhase {
        self.phase
    }

    #[must_use]
    pub fn mount_delay_ms(&self) -> u64 {
        self.mount_delay_ms
    }

    #[must_use]
    pub fn armed_target(&self) -> Option<ServiceId> {
        match self.phase {
            SectionScrollPhase::ArmedWithTarget { service_id, .. } => Some(service_id),
            _ => None,
        }
    }

    #[must_use]
    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline.due_ms()
    }

    /// Records `service_id` without scrolling. Returns the target it replaced.
    pub fn arm(&mut self, service_id: ServiceId, now_ms: u64) -> Option<ServiceId> {
        let replaced = self.armed_target();
        self.phase = SectionScrollPhase::ArmedWithTarget {
            service_id,
            armed_at_ms: now_ms,
        };
        self.deadline.arm(now_ms, self.mount_delay_ms);
        debug!(
            service_id = service_id.get(),
            replaced = replaced.map(ServiceId::get),
            deadline_ms = self.deadline.due_ms(),
            "armed section scroll"
        );
        replaced
    }

    /// Returns to idle, dropping any armed target. Returns the dropped target.
    pub fn disarm(&mut self) -> Option<ServiceId> {
        let dropped = self.armed_target();
        self.phase = SectionScrollPhase::Idle;
        self.deadline.cancel();
        dropped
    }

    /// Takes the armed target because the destination page mounted.
    pub fn take_on_mount(&mut self) -> Option<PendingSectionScroll> {
        let service_id = self.armed_target()?;
        self.deadline.cancel();
        self.phase = SectionScrollPhase::Idle;
        Some(PendingSectionScroll {
            service_id,
            trigger: ResolutionTrigger::PageMounted,
        })
    }

    /// Takes the armed target once its bounded delay has elapsed.
    pub fn take_due(&mut self, now_ms: u64) -> Option<PendingSectionScroll> {
        let service_id = self.armed_target()?;
        if !self.deadline.poll(now_ms) {
            return None;
        }
        self.phase = SectionScrollPhase::Idle;
        Some(PendingSectionScroll {
            service_id,
            trigger: ResolutionTrigger::DelayElapsed,
        })
    }

    /// Stores the outcome of a taken target's lookup. The armed slot stays clear
    /// whatever the outcome.
    pub fn complete(&mut self, pending: PendingSectionScroll, outcome: SectionScrollOutcome) {
        self.deadline.cancel();
        self.phase = SectionScrollPhase::Resolved {
            service_id: pending.service_id,
            trigger: pending.trigger,
            outcome,
        };
    }
}

impl Default for DeferredSectionScroll {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION_MOUNT_DELAY_MS)
    }
}
