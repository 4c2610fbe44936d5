use crate::error::SiteResult;
use crate::render::SiteHost;

use super::{engine_core::EngineCore, render_coordinator::RenderCoordinator};

/// Main orchestration facade consumed by host applications.
///
/// `SiteEngine` owns the active route, the deferred section scroll, the
/// home-page carousel and the mobile menu, and drives its host through
/// frames and scroll requests. Time only moves through `advance_time`.
pub struct SiteEngine<H: SiteHost> {
    pub(super) host: H,
    pub(super) core: EngineCore,
}

impl<H: SiteHost> SiteEngine<H> {
    /// Builds a frame for the current route and hands it to the host.
    ///
    /// The first successful render after a route commit is the page mount
    /// signal and resolves an armed section scroll.
    pub fn render(&mut self) -> SiteResult<()> {
        RenderCoordinator::render(self)
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}
