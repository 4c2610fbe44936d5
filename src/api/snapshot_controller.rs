use crate::error::{SiteError, SiteResult};
use crate::render::SiteHost;

use super::{CarouselSnapshot, EngineSnapshot, SiteEngine};

impl<H: SiteHost> SiteEngine<H> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let core = &self.core;
        EngineSnapshot {
            now_ms: core.now_ms,
            route: core.route.clone(),
            page_mounted: core.page_mounted,
            section_scroll: core.section_scroll.phase(),
            section_scroll_deadline_ms: core.section_scroll.deadline_ms(),
            carousel: core.carousel.as_ref().map(|carousel| CarouselSnapshot {
                member_ids: carousel.entries().to_vec(),
                state: carousel.state(),
                timer_running: carousel.is_timer_running(),
                next_tick_at_ms: carousel.next_tick_at_ms(),
                reduced_motion: carousel.reduced_motion(),
                transition: carousel.transition_at(core.now_ms),
            }),
            mobile_menu_open: core.mobile_menu.is_open(),
            reduced_motion: core.reduced_motion,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> SiteResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| SiteError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
