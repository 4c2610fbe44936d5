use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// Closed set of reachable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    Home,
    About,
    Services,
    Members,
    MemberDetail,
    News,
    Location,
}

impl PageId {
    pub const ALL: [PageId; 7] = [
        PageId::Home,
        PageId::About,
        PageId::Services,
        PageId::Members,
        PageId::MemberDetail,
        PageId::News,
        PageId::Location,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Members => "members",
            Self::MemberDetail => "member-detail",
            Self::News => "news",
            Self::Location => "location",
        }
    }

    /// Menu entry highlighted while this page is active.
    ///
    /// Member detail has no menu entry of its own and lights up the listing.
    #[must_use]
    pub const fn menu_key(self) -> PageId {
        match self {
            Self::MemberDetail => Self::Members,
            other => other,
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Staff roster identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u32);

impl MemberId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Service catalog identifier. `0` is reserved so ids are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ServiceId(u32);

impl ServiceId {
    pub fn new(raw: u32) -> SiteResult<Self> {
        if raw == 0 {
            return Err(SiteError::InvalidData(
                "service id must be a positive integer".to_owned(),
            ));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ServiceId {
    type Error = SiteError;

    fn try_from(raw: u32) -> SiteResult<Self> {
        Self::new(raw)
    }
}

impl From<ServiceId> for u32 {
    fn from(id: ServiceId) -> Self {
        id.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lookup key attached to a rendered subsection, e.g. `service-3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnchorKey(String);

impl AnchorKey {
    pub const SERVICE_PREFIX: &'static str = "service-";

    #[must_use]
    pub fn for_service(id: ServiceId) -> Self {
        Self(format!("{}{}", Self::SERVICE_PREFIX, id.get()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the service id back out of a `service-{id}` key.
    #[must_use]
    pub fn service_id(&self) -> Option<ServiceId> {
        let raw = self.0.strip_prefix(Self::SERVICE_PREFIX)?;
        raw.parse::<u32>().ok().and_then(|raw| ServiceId::new(raw).ok())
    }
}

impl fmt::Display for AnchorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
