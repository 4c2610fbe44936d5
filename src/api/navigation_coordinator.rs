use tracing::debug;

use crate::core::{ResolvedRoute, ServiceId, resolve_path};
use crate::error::SiteResult;
use crate::extensions::SiteEvent;
use crate::render::SiteHost;

use super::carousel_coordinator::CarouselCoordinator;
use super::scroll_coordinator::ScrollCoordinator;
use super::{NavigationIntent, SiteEngine};

pub(super) struct NavigationCoordinator;

impl NavigationCoordinator {
    pub(super) fn navigate<H: SiteHost>(
        engine: &mut SiteEngine<H>,
        intent: NavigationIntent,
    ) -> SiteResult<()> {
        let resolved = Self::resolve(engine, &intent.target_route().path());
        Self::commit(engine, resolved, intent.target_section())
    }

    pub(super) fn open_path<H: SiteHost>(engine: &mut SiteEngine<H>, path: &str) -> SiteResult<()> {
        let resolved = Self::resolve(engine, path);
        Self::commit(engine, resolved, None)
    }

    fn resolve<H: SiteHost>(engine: &SiteEngine<H>, path: &str) -> ResolvedRoute {
        let roster = &engine.core.content.roster;
        resolve_path(path, |id| roster.contains(id))
    }

    /// Single write path for the active route.
    ///
    /// Every commit is a route change, including one to the route already
    /// shown. A commit either arms a section target or scrolls to the top,
    /// never both.
    fn commit<H: SiteHost>(
        engine: &mut SiteEngine<H>,
        resolved: ResolvedRoute,
        target_section: Option<ServiceId>,
    ) -> SiteResult<()> {
        let from = engine.core.route.route;
        let to = resolved.route;
        let redirect = resolved.redirect;
        debug!(
            from = %from,
            to = %to,
            requested = %resolved.requested_path,
            target_section = target_section.map(ServiceId::get),
            "route committed"
        );

        engine.core.route = resolved;
        engine.core.page_mounted = false;
        engine.emit_event(SiteEvent::RouteChanged { from, to });
        if let Some(redirect) = redirect {
            debug!(?redirect, to = %to, "request path redirected");
            engine.emit_event(SiteEvent::Redirected { redirect, to });
        }

        CarouselCoordinator::sync_with_route(engine);

        match target_section {
            Some(service_id) => ScrollCoordinator::arm(engine, service_id),
            None => {
                ScrollCoordinator::disarm(engine);
                ScrollCoordinator::scroll_to_top(engine)?;
            }
        }
        Ok(())
    }
}
