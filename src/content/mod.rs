//! Static content providers.
//!
//! Everything here is read-only after construction. The engine only reads
//! member ids for route validation and carousel ordering, and service ids for
//! section anchors; the rest is passed through to frames untouched.

mod news;
mod office;
mod roster;
mod services;

pub use news::{NewsFeed, NewsItem};
pub use office::{BusinessHours, OfficeAddress, OfficeContact, OfficeInfo};
pub use roster::{MemberImages, StaffMember, StaffRoster};
pub use services::{FEATURED_SERVICE_COUNT, ServiceCatalog, ServiceCatalogEntry, ServiceHighlight};

use serde::{Deserialize, Serialize};

use crate::error::SiteResult;

/// Bundle of every content provider the engine reads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteContent {
    pub roster: StaffRoster,
    pub catalog: ServiceCatalog,
    pub news: NewsFeed,
    pub office: Option<OfficeInfo>,
}

impl SiteContent {
    /// The firm's published content.
    pub fn builtin() -> SiteResult<Self> {
        Ok(Self {
            roster: StaffRoster::builtin(),
            catalog: ServiceCatalog::builtin()?,
            news: NewsFeed::builtin()?,
            office: Some(OfficeInfo::builtin()),
        })
    }
}
