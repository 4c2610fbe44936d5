use tracing::trace;

use crate::error::SiteResult;
use crate::extensions::SiteEvent;
use crate::render::SiteHost;

use super::SiteEngine;
use super::scroll_coordinator::ScrollCoordinator;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn render<H: SiteHost>(engine: &mut SiteEngine<H>) -> SiteResult<()> {
        let frame = engine.build_frame()?;
        engine.host.render(&frame)?;
        trace!(path = %frame.path, "frame rendered");

        if !engine.core.page_mounted {
            engine.core.page_mounted = true;
            let page = frame.page_id();
            engine.emit_event(SiteEvent::PageMounted { page });
            ScrollCoordinator::resolve_on_mount(engine)?;
        }
        engine.emit_event(SiteEvent::Rendered);
        Ok(())
    }
}
