use crate::core::{MemberId, PageId, ResolvedRoute, Route, ServiceId};
use crate::error::SiteResult;
use crate::extensions::SiteEvent;
use crate::render::SiteHost;

use super::navigation_coordinator::NavigationCoordinator;
use super::{NavigationIntent, SiteEngine};

impl<H: SiteHost> SiteEngine<H> {
    #[must_use]
    pub fn route(&self) -> Route {
        self.core.route.route
    }

    #[must_use]
    pub fn resolved_route(&self) -> &ResolvedRoute {
        &self.core.route
    }

    #[must_use]
    pub fn current_page(&self) -> PageId {
        self.core.route.page()
    }

    /// Canonical path of the active route, for the host's address bar.
    #[must_use]
    pub fn current_path(&self) -> String {
        self.core.route.canonical_path()
    }

    /// Dispatches a navigation intent.
    ///
    /// With a target section the services page is committed and the target
    /// armed; otherwise the viewport scrolls to the top.
    pub fn navigate(&mut self, intent: NavigationIntent) -> SiteResult<()> {
        NavigationCoordinator::navigate(self, intent)
    }

    /// Dispatches a JSON intent payload such as
    /// `{"page":"services","options":{"serviceId":3}}`.
    pub fn navigate_json(&mut self, payload: &str) -> SiteResult<()> {
        let intent = NavigationIntent::from_json_str(payload)?;
        self.navigate(intent)
    }

    /// Host-originated location change: initial load, address bar, history.
    pub fn open_path(&mut self, path: &str) -> SiteResult<()> {
        NavigationCoordinator::open_path(self, path)
    }

    /// Logo click.
    pub fn go_home(&mut self) -> SiteResult<()> {
        self.navigate(NavigationIntent::to(PageId::Home))
    }

    /// Featured service card click on the home page.
    pub fn open_service_section(&mut self, service_id: ServiceId) -> SiteResult<()> {
        self.navigate(NavigationIntent::to_service_section(service_id))
    }

    /// Member card click, from the listing or the carousel.
    pub fn select_member(&mut self, member_id: MemberId) -> SiteResult<()> {
        self.emit_event(SiteEvent::MemberSelected { member_id });
        self.navigate(NavigationIntent::to_member(member_id))
    }

    /// Back control on the member detail page.
    pub fn back_to_members(&mut self) -> SiteResult<()> {
        self.navigate(NavigationIntent::to(PageId::Members))
    }
}
