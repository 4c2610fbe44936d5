use crate::content::SiteContent;
use crate::core::{MemberId, ResolvedRoute};
use crate::extensions::SitePlugin;
use crate::interaction::{Carousel, DeferredSectionScroll, MobileMenuState};

use super::SiteEngineConfig;

/// Internal engine state used by the public facade (`SiteEngine`).
pub(super) struct EngineCore {
    pub(super) content: SiteContent,
    pub(super) config: SiteEngineConfig,
    pub(super) now_ms: u64,
    pub(super) route: ResolvedRoute,
    /// Whether the current route has rendered since it was committed.
    pub(super) page_mounted: bool,
    pub(super) section_scroll: DeferredSectionScroll,
    /// Home-page preview carousel; present only while home is active.
    pub(super) carousel: Option<Carousel<MemberId>>,
    pub(super) mobile_menu: MobileMenuState,
    pub(super) reduced_motion: bool,
    pub(super) plugins: Vec<Box<dyn SitePlugin>>,
}
