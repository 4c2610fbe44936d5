use crate::core::PageId;
use crate::error::SiteResult;
use crate::extensions::SiteEvent;
use crate::interaction::{MenuEntry, menu_entries};
use crate::render::SiteHost;

use super::{NavigationIntent, SiteEngine};

impl<H: SiteHost> SiteEngine<H> {
    /// Navigation bar entries with the current page highlighted.
    #[must_use]
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        menu_entries(self.current_page())
    }

    #[must_use]
    pub fn is_mobile_menu_open(&self) -> bool {
        self.core.mobile_menu.is_open()
    }

    /// Mobile menu trigger. Returns the new open state.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        let open = self.core.mobile_menu.toggle();
        self.emit_event(SiteEvent::MobileMenuChanged { open });
        open
    }

    pub fn set_mobile_menu_open(&mut self, open: bool) {
        if self.core.mobile_menu.set_open(open) {
            self.emit_event(SiteEvent::MobileMenuChanged { open });
        }
    }

    /// Desktop menu click.
    pub fn navigate_from_menu(&mut self, page: PageId) -> SiteResult<()> {
        self.navigate(NavigationIntent::to(page))
    }

    /// Mobile panel click: the navigation completes, then the panel closes.
    ///
    /// The route is committed before the host is asked to scroll, so the panel
    /// closes even when that scroll fails; the host error is still returned.
    pub fn navigate_from_mobile_menu(&mut self, page: PageId) -> SiteResult<()> {
        let result = self.navigate(NavigationIntent::to(page));
        self.set_mobile_menu_open(false);
        result
    }
}
