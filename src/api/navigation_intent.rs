use serde::{Deserialize, Serialize};

use crate::core::{MemberId, PageId, Route, ServiceId};
use crate::error::{SiteError, SiteResult};

/// Optional payload of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavigationOptions {
    /// Services subsection to scroll into once the page mounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<ServiceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<MemberId>,
}

impl NavigationOptions {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.service_id.is_none() && self.member_id.is_none()
    }
}

/// Typed request to move to a page, optionally carrying a target section.
///
/// Wire form: `{"page":"services","options":{"serviceId":3}}`. A service id is
/// only accepted for the services page and a member id only for member detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNavigationIntent")]
pub struct NavigationIntent {
    page: PageId,
    #[serde(skip_serializing_if = "NavigationOptions::is_empty")]
    options: NavigationOptions,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNavigationIntent {
    page: PageId,
    #[serde(default)]
    options: Option<NavigationOptions>,
}

impl TryFrom<RawNavigationIntent> for NavigationIntent {
    type Error = SiteError;

    fn try_from(raw: RawNavigationIntent) -> SiteResult<Self> {
        Self::new(raw.page, raw.options.unwrap_or_default())
    }
}

impl NavigationIntent {
    pub fn new(page: PageId, options: NavigationOptions) -> SiteResult<Self> {
        if options.service_id.is_some() && page != PageId::Services {
            return Err(SiteError::InvalidIntent(format!(
                "serviceId is only valid for the services page, not `{page}`"
            )));
        }
        if options.member_id.is_some() && page != PageId::MemberDetail {
            return Err(SiteError::InvalidIntent(format!(
                "memberId is only valid for the member-detail page, not `{page}`"
            )));
        }
        Ok(Self { page, options })
    }

    /// Plain navigation with no target section.
    #[must_use]
    pub const fn to(page: PageId) -> Self {
        Self {
            page,
            options: NavigationOptions {
                service_id: None,
                member_id: None,
            },
        }
    }

    #[must_use]
    pub const fn to_service_section(service_id: ServiceId) -> Self {
        Self {
            page: PageId::Services,
            options: NavigationOptions {
                service_id: Some(service_id),
                member_id: None,
            },
        }
    }

    #[must_use]
    pub const fn to_member(member_id: MemberId) -> Self {
        Self {
            page: PageId::MemberDetail,
            options: NavigationOptions {
                service_id: None,
                member_id: Some(member_id),
            },
        }
    }

    pub fn from_json_str(input: &str) -> SiteResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            SiteError::InvalidIntent(format!("failed to parse navigation intent: {e}"))
        })
    }

    #[must_use]
    pub fn page(&self) -> PageId {
        self.page
    }

    #[must_use]
    pub fn options(&self) -> NavigationOptions {
        self.options
    }

    #[must_use]
    pub fn target_section(&self) -> Option<ServiceId> {
        self.options.service_id
    }

    /// Route this intent asks for. Member detail without an id is the listing.
    #[must_use]
    pub fn target_route(&self) -> Route {
        match self.page {
            PageId::Home => Route::Home,
            PageId::About => Route::About,
            PageId::Services => Route::Services,
            PageId::Members => Route::Members,
            PageId::MemberDetail => self
                .options
                .member_id
                .map_or(Route::Members, Route::MemberDetail),
            PageId::News => Route::News,
            PageId::Location => Route::Location,
        }
    }
}
