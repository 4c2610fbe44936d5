use tracing::debug;

use crate::core::MemberId;
use crate::error::SiteResult;
use crate::extensions::SiteEvent;
use crate::interaction::CarouselState;
use crate::render::SiteHost;

use super::SiteEngine;
use super::carousel_coordinator::CarouselCoordinator;

impl<H: SiteHost> SiteEngine<H> {
    /// State of the home-page carousel, `None` while another page is active.
    #[must_use]
    pub fn carousel_state(&self) -> Option<CarouselState> {
        self.core.carousel.as_ref().map(|carousel| carousel.state())
    }

    /// Resolved carousel entries in display order.
    #[must_use]
    pub fn carousel_member_ids(&self) -> &[MemberId] {
        self.core
            .carousel
            .as_ref()
            .map(|carousel| carousel.entries())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn carousel_active_member(&self) -> Option<MemberId> {
        self.core
            .carousel
            .as_ref()
            .and_then(|carousel| carousel.active_entry().copied())
    }

    #[must_use]
    pub fn is_carousel_timer_running(&self) -> bool {
        self.core
            .carousel
            .as_ref()
            .is_some_and(|carousel| carousel.is_timer_running())
    }

    #[must_use]
    pub fn carousel_next_tick_at_ms(&self) -> Option<u64> {
        self.core
            .carousel
            .as_ref()
            .and_then(|carousel| carousel.next_tick_at_ms())
    }

    pub fn carousel_pointer_enter(&mut self) {
        let now_ms = self.core.now_ms;
        let changed = self
            .core
            .carousel
            .as_mut()
            .is_some_and(|carousel| carousel.pointer_enter(now_ms));
        if changed {
            self.emit_event(SiteEvent::CarouselPaused);
        }
    }

    pub fn carousel_pointer_leave(&mut self) {
        let now_ms = self.core.now_ms;
        let changed = self
            .core
            .carousel
            .as_mut()
            .is_some_and(|carousel| carousel.pointer_leave(now_ms));
        if changed {
            self.emit_event(SiteEvent::CarouselResumed);
        }
    }

    /// Jumps to `index` even while paused. A no-op when no carousel is mounted.
    pub fn carousel_select(&mut self, index: usize) -> SiteResult<()> {
        let now_ms = self.core.now_ms;
        let step = match self.core.carousel.as_mut() {
            Some(carousel) => carousel.select(index, now_ms)?,
            None => None,
        };
        CarouselCoordinator::emit_step(self, step);
        Ok(())
    }

    pub fn carousel_show_next(&mut self) {
        let now_ms = self.core.now_ms;
        let step = self
            .core
            .carousel
            .as_mut()
            .and_then(|carousel| carousel.show_next(now_ms));
        CarouselCoordinator::emit_step(self, step);
    }

    pub fn carousel_show_previous(&mut self) {
        let now_ms = self.core.now_ms;
        let step = self
            .core
            .carousel
            .as_mut()
            .and_then(|carousel| carousel.show_previous(now_ms));
        CarouselCoordinator::emit_step(self, step);
    }

    /// Click on the active carousel card: opens that member's detail page.
    ///
    /// Returns the selected member, or `None` when there is nothing to click.
    pub fn click_carousel_member(&mut self) -> SiteResult<Option<MemberId>> {
        let Some(member_id) = self
            .core
            .carousel
            .as_ref()
            .and_then(|carousel| carousel.activate().copied())
        else {
            return Ok(None);
        };
        self.select_member(member_id)?;
        Ok(Some(member_id))
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.core.reduced_motion
    }

    /// Applies the host's reduced-motion preference.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        if self.core.reduced_motion == reduced_motion {
            return;
        }
        self.core.reduced_motion = reduced_motion;
        let now_ms = self.core.now_ms;
        if let Some(carousel) = self.core.carousel.as_mut() {
            carousel.set_reduced_motion(reduced_motion, now_ms);
        }
        debug!(reduced_motion, "reduced motion preference changed");
    }
}
