use serde::{Deserialize, Serialize};

use crate::core::ServiceId;
use crate::error::{SiteError, SiteResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// What a scroll request is for, fixed when the engine issues it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollTarget {
    /// Route change without a section target.
    Top,
    /// Resolved services subsection. Its offset may clamp to 0.
    Section { service_id: ServiceId },
}

/// Viewport scroll command, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
    pub target: ScrollTarget,
}

impl ScrollRequest {
    #[must_use]
    pub const fn to_top() -> Self {
        Self {
            top: 0.0,
            behavior: ScrollBehavior::Smooth,
            target: ScrollTarget::Top,
        }
    }

    #[must_use]
    pub const fn to_section(service_id: ServiceId, top: f64) -> Self {
        Self {
            top,
            behavior: ScrollBehavior::Smooth,
            target: ScrollTarget::Section { service_id },
        }
    }

    #[must_use]
    pub fn is_to_top(self) -> bool {
        self.target == ScrollTarget::Top
    }

    #[must_use]
    pub fn section(self) -> Option<ServiceId> {
        match self.target {
            ScrollTarget::Section { service_id } => Some(service_id),
            ScrollTarget::Top => None,
        }
    }

    pub fn validate(self) -> SiteResult<()> {
        if !self.top.is_finite() || self.top < 0.0 {
            return Err(SiteError::InvalidData(format!(
                "scroll target must be finite and >= 0, got {}",
                self.top
            )));
        }
        if self.is_to_top() && self.top != 0.0 {
            return Err(SiteError::InvalidData(format!(
                "scroll-to-top request carries offset {}",
                self.top
            )));
        }
        Ok(())
    }
}
