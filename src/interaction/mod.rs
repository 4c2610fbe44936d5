//! Pure interaction state machines.
//!
//! None of these types touch the host. The engine feeds them clock time and
//! input events and turns their outputs into host calls and plugin events.

pub mod carousel;
pub mod menu;
pub mod section_scroll;

pub use carousel::{
    Carousel, CarouselState, CarouselStep, CarouselStepCause, CarouselSteps, CarouselTiming,
    DEFAULT_CAROUSEL_INTERVAL_MS, DEFAULT_SLIDE_TRANSITION_MS, MAX_REPORTED_TICKS, SlideDirection,
    SlideTransition,
};
pub use menu::{MenuEntry, MobileMenuState, NAVIGATION_ITEMS, NavigationItem, menu_entries};
pub use section_scroll::{
    DEFAULT_SECTION_MOUNT_DELAY_MS, DeferredSectionScroll, PendingSectionScroll,
    ResolutionTrigger, SectionScrollOutcome, SectionScrollPhase,
};
