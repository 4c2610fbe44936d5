use crate::content::{ServiceCatalogEntry, SiteContent, StaffMember};
use crate::core::{MemberId, Route};
use crate::error::{SiteError, SiteResult};
use crate::interaction::{Carousel, menu_entries};
use crate::render::{
    CarouselFrame, HomeFrame, LocationFrame, MemberCard, MemberDetailFrame, MembersFrame,
    NavFrame, NewsFrame, PageFrame, ServiceCard, ServiceSection, ServicesFrame, SiteFrame,
    SiteHost, SlideFrame,
};

use super::SiteEngine;

impl<H: SiteHost> SiteEngine<H> {
    /// Materializes the scene for the current route without rendering it.
    pub fn build_frame(&self) -> SiteResult<SiteFrame> {
        let core = &self.core;
        let route = core.route.route;
        let page = match route {
            Route::Home => PageFrame::Home(HomeFrame {
                carousel: match core.carousel.as_ref() {
                    Some(carousel) => build_carousel_frame(&core.content, carousel, core.now_ms)?,
                    None => None,
                },
                featured_services: core.content.catalog.featured().map(service_card).collect(),
            }),
            Route::About => PageFrame::About,
            Route::Services => PageFrame::Services(ServicesFrame {
                sections: core
                    .content
                    .catalog
                    .iter()
                    .map(|entry| ServiceSection {
                        anchor: entry.anchor_key(),
                        entry: entry.clone(),
                    })
                    .collect(),
            }),
            Route::Members => PageFrame::Members(MembersFrame {
                members: core
                    .content
                    .roster
                    .iter()
                    .map(|member| member_card(member, &member.images.list))
                    .collect(),
            }),
            Route::MemberDetail(id) => PageFrame::MemberDetail(MemberDetailFrame {
                member: lookup_member(&core.content, id)?.clone(),
            }),
            Route::News => PageFrame::News(NewsFrame {
                items: core.content.news.items().to_vec(),
            }),
            Route::Location => PageFrame::Location(LocationFrame {
                office: core.content.office.clone(),
            }),
        };

        Ok(SiteFrame {
            path: route.path(),
            nav: NavFrame {
                entries: menu_entries(route.page()),
                mobile_menu_open: core.mobile_menu.is_open(),
            },
            page,
        })
    }
}

fn build_carousel_frame(
    content: &SiteContent,
    carousel: &Carousel<MemberId>,
    now_ms: u64,
) -> SiteResult<Option<CarouselFrame>> {
    let Some(&active_id) = carousel.active_entry() else {
        return Ok(None);
    };
    let state = carousel.state();
    let active = lookup_member(content, active_id)?;

    let transition = match carousel.transition_at(now_ms) {
        Some(slide) => {
            let outgoing_id = carousel.entries().get(slide.outgoing).copied().ok_or(
                SiteError::CarouselIndexOutOfRange {
                    index: slide.outgoing,
                    len: carousel.len(),
                },
            )?;
            let outgoing = lookup_member(content, outgoing_id)?;
            Some(SlideFrame {
                outgoing: member_card(outgoing, &outgoing.images.preview),
                direction: slide.direction,
                progress: slide.progress(now_ms, carousel.timing().transition_ms),
            })
        }
        None => None,
    };

    Ok(Some(CarouselFrame {
        active: member_card(active, &active.images.preview),
        active_index: state.active_index,
        len: carousel.len(),
        is_paused: state.is_paused,
        transition,
    }))
}

fn lookup_member(content: &SiteContent, id: MemberId) -> SiteResult<&StaffMember> {
    content
        .roster
        .get(id)
        .ok_or_else(|| SiteError::InvalidData(format!("member {id} is not in the roster")))
}

fn member_card(member: &StaffMember, image: &str) -> MemberCard {
    MemberCard {
        member_id: member.id,
        name: member.name.clone(),
        position: member.position.clone(),
        department: member.department.clone(),
        image: image.to_owned(),
    }
}

fn service_card(entry: &ServiceCatalogEntry) -> ServiceCard {
    ServiceCard {
        service_id: entry.id,
        title: entry.title.clone(),
        description: entry.description.clone(),
    }
}
