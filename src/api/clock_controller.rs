use tracing::trace;

use crate::error::SiteResult;
use crate::render::SiteHost;

use super::SiteEngine;
use super::carousel_coordinator::CarouselCoordinator;
use super::scroll_coordinator::ScrollCoordinator;

impl<H: SiteHost> SiteEngine<H> {
    /// Engine clock in milliseconds since construction.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.core.now_ms
    }

    /// Moves the clock forward and fires everything due by the new time:
    /// first an expired section mount delay, then carousel ticks in order.
    pub fn advance_time(&mut self, delta_ms: u64) -> SiteResult<()> {
        self.core.now_ms = self.core.now_ms.saturating_add(delta_ms);
        trace!(now_ms = self.core.now_ms, delta_ms, "advanced engine clock");
        ScrollCoordinator::resolve_due(self)?;
        CarouselCoordinator::advance(self);
        Ok(())
    }
}
