mod frame;
mod headless_host;
mod scroll;

pub use frame::{
    CarouselFrame, HomeFrame, LocationFrame, MemberCard, MemberDetailFrame, MembersFrame,
    NavFrame, NewsFrame, PageFrame, ServiceCard, ServiceSection, ServicesFrame, SiteFrame,
    SlideFrame,
};
pub use headless_host::{HeadlessHost, HeadlessLayout};
pub use scroll::{ScrollBehavior, ScrollRequest, ScrollTarget};

use crate::core::AnchorKey;
use crate::error::SiteResult;

/// Contract implemented by any UI host embedding the engine.
///
/// Hosts receive a fully materialized, validated `SiteFrame` so presentation
/// code stays isolated from routing, scroll, and carousel logic. Scrolling
/// and anchor lookup are the only other things the engine asks of the host.
pub trait SiteHost {
    fn render(&mut self, frame: &SiteFrame) -> SiteResult<()>;

    fn scroll_to(&mut self, request: ScrollRequest) -> SiteResult<()>;

    /// Document-relative top of the mounted node carrying `key`, if any.
    fn anchor_top(&self, key: &AnchorKey) -> Option<f64>;
}
