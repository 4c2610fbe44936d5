use tracing::warn;

use crate::core::{MemberId, PageId};
use crate::extensions::SiteEvent;
use crate::interaction::{Carousel, CarouselStep};
use crate::render::SiteHost;

use super::SiteEngine;

pub(super) struct CarouselCoordinator;

impl CarouselCoordinator {
    /// Mounts the preview carousel when home is active and unmounts it
    /// otherwise. Staying on home keeps the running instance.
    pub(super) fn sync_with_route<H: SiteHost>(engine: &mut SiteEngine<H>) {
        let on_home = engine.core.route.page() == PageId::Home;
        match (on_home, engine.core.carousel.is_some()) {
            (true, false) => Self::mount(engine),
            (false, true) => Self::unmount(engine),
            _ => {}
        }
    }

    fn mount<H: SiteHost>(engine: &mut SiteEngine<H>) {
        let entries: Vec<MemberId> = engine
            .core
            .content
            .roster
            .ordered_subset(&engine.core.config.carousel_member_ids)
            .into_iter()
            .map(|member| member.id)
            .collect();
        if entries.len() < engine.core.config.carousel_member_ids.len() {
            warn!(
                configured = engine.core.config.carousel_member_ids.len(),
                resolved = entries.len(),
                "carousel subset contains unknown or repeated member ids"
            );
        }
        let carousel = Carousel::mount(
            entries,
            engine.core.config.carousel_timing(),
            engine.core.reduced_motion,
            engine.core.now_ms,
        );
        let len = carousel.len();
        engine.core.carousel = Some(carousel);
        engine.emit_event(SiteEvent::CarouselMounted { entries: len });
    }

    fn unmount<H: SiteHost>(engine: &mut SiteEngine<H>) {
        if let Some(mut carousel) = engine.core.carousel.take() {
            carousel.unmount();
            engine.emit_event(SiteEvent::CarouselUnmounted);
        }
    }

    /// Fires every tick due at the engine clock.
    pub(super) fn advance<H: SiteHost>(engine: &mut SiteEngine<H>) {
        let now_ms = engine.core.now_ms;
        let Some(carousel) = engine.core.carousel.as_mut() else {
            return;
        };
        let steps = carousel.advance_to(now_ms);
        for step in steps {
            engine.emit_event(SiteEvent::CarouselStepped { step });
        }
    }

    pub(super) fn emit_step<H: SiteHost>(engine: &mut SiteEngine<H>, step: Option<CarouselStep>) {
        if let Some(step) = step {
            engine.emit_event(SiteEvent::CarouselStepped { step });
        }
    }
}
