use tracing::{debug, trace};

use crate::core::{AnchorKey, ServiceId};
use crate::error::SiteResult;
use crate::extensions::SiteEvent;
use crate::interaction::{PendingSectionScroll, SectionScrollOutcome};
use crate::render::{ScrollRequest, SiteHost};

use super::SiteEngine;

pub(super) struct ScrollCoordinator;

impl ScrollCoordinator {
    pub(super) fn scroll_to_top<H: SiteHost>(engine: &mut SiteEngine<H>) -> SiteResult<()> {
        engine.host.scroll_to(ScrollRequest::to_top())?;
        trace!(route = %engine.core.route.route, "scrolled to top");
        engine.emit_event(SiteEvent::ScrolledToTop);
        Ok(())
    }

    /// Records a section target. A target that was still armed is discarded.
    pub(super) fn arm<H: SiteHost>(engine: &mut SiteEngine<H>, service_id: ServiceId) {
        let now_ms = engine.core.now_ms;
        if let Some(replaced) = engine.core.section_scroll.arm(service_id, now_ms) {
            engine.emit_event(SiteEvent::SectionScrollDiscarded {
                service_id: replaced,
            });
        }
        engine.emit_event(SiteEvent::SectionScrollArmed { service_id });
    }

    pub(super) fn disarm<H: SiteHost>(engine: &mut SiteEngine<H>) {
        if let Some(dropped) = engine.core.section_scroll.disarm() {
            debug!(
                service_id = dropped.get(),
                "dropped armed section scroll on plain navigation"
            );
            engine.emit_event(SiteEvent::SectionScrollDiscarded {
                service_id: dropped,
            });
        }
    }

    pub(super) fn resolve_on_mount<H: SiteHost>(engine: &mut SiteEngine<H>) -> SiteResult<()> {
        match engine.core.section_scroll.take_on_mount() {
            Some(pending) => Self::resolve(engine, pending),
            None => Ok(()),
        }
    }

    pub(super) fn resolve_due<H: SiteHost>(engine: &mut SiteEngine<H>) -> SiteResult<()> {
        let now_ms = engine.core.now_ms;
        match engine.core.section_scroll.take_due(now_ms) {
            Some(pending) => Self::resolve(engine, pending),
            None => Ok(()),
        }
    }

    /// Single anchor lookup for a taken target. A missing anchor is a stale
    /// or unknown id and is skipped without retry.
    ///
    /// The outcome is recorded only once the host accepted the scroll; a
    /// rejected scroll leaves the target consumed and the phase idle.
    fn resolve<H: SiteHost>(
        engine: &mut SiteEngine<H>,
        pending: PendingSectionScroll,
    ) -> SiteResult<()> {
        let PendingSectionScroll {
            service_id,
            trigger,
        } = pending;
        let key = AnchorKey::for_service(service_id);

        let Some(anchor_top) = engine.host.anchor_top(&key) else {
            debug!(anchor = %key, ?trigger, "section anchor missing, skipping scroll");
            engine
                .core
                .section_scroll
                .complete(pending, SectionScrollOutcome::AnchorMissing);
            engine.emit_event(SiteEvent::SectionScrollSkipped {
                service_id,
                trigger,
            });
            return Ok(());
        };

        let top = (anchor_top - engine.core.config.header_clearance_px).max(0.0);
        engine
            .host
            .scroll_to(ScrollRequest::to_section(service_id, top))?;
        engine
            .core
            .section_scroll
            .complete(pending, SectionScrollOutcome::Scrolled { top });
        debug!(anchor = %key, anchor_top, top, ?trigger, "scrolled to section");
        engine.emit_event(SiteEvent::SectionScrolled {
            service_id,
            top,
            trigger,
        });
        Ok(())
    }
}
