use std::collections::HashSet;

use serde::Serialize;

use crate::content::{NewsItem, OfficeInfo, ServiceCatalogEntry, StaffMember};
use crate::core::{AnchorKey, MemberId, PageId, ServiceId};
use crate::error::{SiteError, SiteResult};
use crate::interaction::{MenuEntry, SlideDirection};

/// Backend-agnostic scene for one site draw pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteFrame {
    pub path: String,
    pub nav: NavFrame,
    pub page: PageFrame,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavFrame {
    pub entries: Vec<MenuEntry>,
    pub mobile_menu_open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum PageFrame {
    Home(HomeFrame),
    About,
    Services(ServicesFrame),
    Members(MembersFrame),
    MemberDetail(MemberDetailFrame),
    News(NewsFrame),
    Location(LocationFrame),
}

impl PageFrame {
    #[must_use]
    pub fn page(&self) -> PageId {
        match self {
            Self::Home(_) => PageId::Home,
            Self::About => PageId::About,
            Self::Services(_) => PageId::Services,
            Self::Members(_) => PageId::Members,
            Self::MemberDetail(_) => PageId::MemberDetail,
            Self::News(_) => PageId::News,
            Self::Location(_) => PageId::Location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeFrame {
    /// `None` when the configured member subset resolved to nothing.
    pub carousel: Option<CarouselFrame>,
    pub featured_services: Vec<ServiceCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCard {
    pub service_id: ServiceId,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberCard {
    pub member_id: MemberId,
    pub name: String,
    pub position: String,
    pub department: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselFrame {
    pub active: MemberCard,
    pub active_index: usize,
    pub len: usize,
    pub is_paused: bool,
    pub transition: Option<SlideFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideFrame {
    pub outgoing: MemberCard,
    pub direction: SlideDirection,
    /// Animation progress in `[0, 1]`.
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicesFrame {
    pub sections: Vec<ServiceSection>,
}

/// One anchorable subsection of the services page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceSection {
    pub anchor: AnchorKey,
    pub entry: ServiceCatalogEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembersFrame {
    pub members: Vec<MemberCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberDetailFrame {
    pub member: StaffMember,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsFrame {
    pub items: Vec<NewsItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationFrame {
    pub office: Option<OfficeInfo>,
}

impl SiteFrame {
    #[must_use]
    pub fn page_id(&self) -> PageId {
        self.page.page()
    }

    /// Anchor keys attached to the page body, in render order.
    pub fn anchors(&self) -> impl Iterator<Item = &AnchorKey> {
        let sections: &[ServiceSection] = match &self.page {
            PageFrame::Services(services) => &services.sections,
            _ => &[],
        };
        sections.iter().map(|section| &section.anchor)
    }

    pub fn validate(&self) -> SiteResult<()> {
        if !self.path.starts_with('/') {
            return Err(SiteError::InvalidFrame(format!(
                "frame path must be absolute, got `{}`",
                self.path
            )));
        }

        let active = self.nav.entries.iter().filter(|entry| entry.active).count();
        if active > 1 {
            return Err(SiteError::InvalidFrame(format!(
                "navigation has {active} active entries"
            )));
        }

        match &self.page {
            PageFrame::Services(services) => validate_sections(&services.sections),
            PageFrame::Home(home) => home
                .carousel
                .as_ref()
                .map_or(Ok(()), validate_carousel),
            _ => Ok(()),
        }
    }
}

fn validate_sections(sections: &[ServiceSection]) -> SiteResult<()> {
    let mut seen = HashSet::with_capacity(sections.len());
    for section in sections {
        if section.anchor != section.entry.anchor_key() {
            return Err(SiteError::InvalidFrame(format!(
                "anchor `{}` does not match service id {}",
                section.anchor, section.entry.id
            )));
        }
        if !seen.insert(&section.anchor) {
            return Err(SiteError::InvalidFrame(format!(
                "duplicate anchor `{}`",
                section.anchor
            )));
        }
    }
    Ok(())
}

fn validate_carousel(carousel: &CarouselFrame) -> SiteResult<()> {
    if carousel.active_index >= carousel.len {
        return Err(SiteError::InvalidFrame(format!(
            "carousel active index {} out of range for {} entries",
            carousel.active_index, carousel.len
        )));
    }
    if let Some(slide) = &carousel.transition {
        if !slide.progress.is_finite() || !(0.0..=1.0).contains(&slide.progress) {
            return Err(SiteError::InvalidFrame(
                "carousel slide progress must be finite and in [0, 1]".to_owned(),
            ));
        }
    }
    Ok(())
}
