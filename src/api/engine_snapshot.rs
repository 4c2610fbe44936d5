use serde::{Deserialize, Serialize};

use crate::core::{MemberId, ResolvedRoute};
use crate::interaction::{CarouselState, SectionScrollPhase, SlideTransition};

/// Carousel portion of an [`EngineSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    pub member_ids: Vec<MemberId>,
    pub state: CarouselState,
    pub timer_running: bool,
    pub next_tick_at_ms: Option<u64>,
    pub reduced_motion: bool,
    pub transition: Option<SlideTransition>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub now_ms: u64,
    pub route: ResolvedRoute,
    pub page_mounted: bool,
    pub section_scroll: SectionScrollPhase,
    pub section_scroll_deadline_ms: Option<u64>,
    pub carousel: Option<CarouselSnapshot>,
    pub mobile_menu_open: bool,
    pub reduced_motion: bool,
}
