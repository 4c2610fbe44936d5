use serde::{Deserialize, Serialize};

use crate::core::{MemberId, PageId, Route, RouteRedirect, ServiceId};
use crate::interaction::{CarouselState, CarouselStep, ResolutionTrigger, SectionScrollPhase};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub now_ms: u64,
    pub route: Route,
    pub page: PageId,
    pub page_mounted: bool,
    pub section_scroll: SectionScrollPhase,
    pub carousel: Option<CarouselState>,
    pub mobile_menu_open: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SiteEvent {
    RouteChanged {
        from: Route,
        to: Route,
    },
    Redirected {
        redirect: RouteRedirect,
        to: Route,
    },
    ScrolledToTop,
    SectionScrollArmed {
        service_id: ServiceId,
    },
    /// An armed target was replaced or dropped before it resolved.
    SectionScrollDiscarded {
        service_id: ServiceId,
    },
    SectionScrolled {
        service_id: ServiceId,
        top: f64,
        trigger: ResolutionTrigger,
    },
    /// The anchor was not found; nothing scrolled.
    SectionScrollSkipped {
        service_id: ServiceId,
        trigger: ResolutionTrigger,
    },
    PageMounted {
        page: PageId,
    },
    CarouselMounted {
        entries: usize,
    },
    CarouselUnmounted,
    CarouselStepped {
        step: CarouselStep,
    },
    CarouselPaused,
    CarouselResumed,
    MemberSelected {
        member_id: MemberId,
    },
    MobileMenuChanged {
        open: bool,
    },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read engine context without mutating engine
/// internals directly.
pub trait SitePlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: SiteEvent, context: PluginContext);
}
