use tracing::debug;

use crate::content::SiteContent;
use crate::core::resolve_path;
use crate::error::SiteResult;
use crate::interaction::{DeferredSectionScroll, MobileMenuState};
use crate::render::SiteHost;

use super::carousel_coordinator::CarouselCoordinator;
use super::{SiteEngine, SiteEngineConfig, engine_core::EngineCore};

impl<H: SiteHost> SiteEngine<H> {
    /// Creates an engine over the firm's built-in content.
    pub fn new(host: H, config: SiteEngineConfig) -> SiteResult<Self> {
        Self::with_content(host, config, SiteContent::builtin()?)
    }

    /// Creates an engine over host-supplied content.
    ///
    /// The initial path is resolved at clock zero. Nothing is rendered or
    /// scrolled until the host asks for it.
    pub fn with_content(
        host: H,
        config: SiteEngineConfig,
        content: SiteContent,
    ) -> SiteResult<Self> {
        config.validate()?;

        let route = resolve_path(&config.initial_path, |id| content.roster.contains(id));
        debug!(
            requested = %route.requested_path,
            route = %route.route,
            redirect = ?route.redirect,
            "resolved initial route"
        );

        let mut engine = Self {
            host,
            core: EngineCore {
                section_scroll: DeferredSectionScroll::new(config.section_mount_delay_ms),
                reduced_motion: config.reduced_motion,
                content,
                config,
                now_ms: 0,
                route,
                page_mounted: false,
                carousel: None,
                mobile_menu: MobileMenuState::default(),
                plugins: Vec::new(),
            },
        };
        CarouselCoordinator::sync_with_route(&mut engine);
        Ok(engine)
    }
}
