use crate::content::SiteContent;
use crate::core::ServiceId;
use crate::interaction::SectionScrollPhase;
use crate::render::SiteHost;

use super::{SiteEngine, SiteEngineConfig};

impl<H: SiteHost> SiteEngine<H> {
    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.core.content
    }

    #[must_use]
    pub fn config(&self) -> &SiteEngineConfig {
        &self.core.config
    }

    /// Whether the current route has rendered since it was committed.
    #[must_use]
    pub fn is_page_mounted(&self) -> bool {
        self.core.page_mounted
    }

    #[must_use]
    pub fn section_scroll_phase(&self) -> SectionScrollPhase {
        self.core.section_scroll.phase()
    }

    #[must_use]
    pub fn armed_section_target(&self) -> Option<ServiceId> {
        self.core.section_scroll.armed_target()
    }
}
