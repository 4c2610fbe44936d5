use crate::extensions::{PluginContext, SiteEvent};
use crate::render::SiteHost;

use super::SiteEngine;

impl<H: SiteHost> SiteEngine<H> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            now_ms: self.core.now_ms,
            route: self.core.route.route,
            page: self.core.route.page(),
            page_mounted: self.core.page_mounted,
            section_scroll: self.core.section_scroll.phase(),
            carousel: self.core.carousel.as_ref().map(|carousel| carousel.state()),
            mobile_menu_open: self.core.mobile_menu.is_open(),
        }
    }

    pub(super) fn emit_event(&mut self, event: SiteEvent) {
        if self.core.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.core.plugins {
            plugin.on_event(event, context);
        }
    }
}
