use serde::{Deserialize, Serialize};

use crate::core::MemberId;
use crate::error::{SiteError, SiteResult};
use crate::interaction::{
    CarouselTiming, DEFAULT_CAROUSEL_INTERVAL_MS, DEFAULT_SECTION_MOUNT_DELAY_MS,
    DEFAULT_SLIDE_TRANSITION_MS,
};

/// Fixed header height subtracted from a section anchor before scrolling.
pub const DEFAULT_HEADER_CLEARANCE_PX: f64 = 100.0;
/// Upper bound for the section mount delay. Longer waits would only hide
/// destination pages that never render.
pub const MAX_SECTION_MOUNT_DELAY_MS: u64 = 2_000;
/// Staff shown in the home-page preview carousel, in display order.
pub const DEFAULT_CAROUSEL_MEMBER_IDS: [u32; 5] = [1, 6, 7, 2, 5];

/// Public engine bootstrap configuration.
///
/// Every field has a default, so hosts can persist only what they change and
/// load partial JSON documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteEngineConfig {
    #[serde(default = "default_initial_path")]
    pub initial_path: String,
    #[serde(default = "default_carousel_interval_ms")]
    pub carousel_interval_ms: u64,
    #[serde(default = "default_slide_transition_ms")]
    pub slide_transition_ms: u64,
    #[serde(default = "default_header_clearance_px")]
    pub header_clearance_px: f64,
    #[serde(default = "default_section_mount_delay_ms")]
    pub section_mount_delay_ms: u64,
    #[serde(default = "default_carousel_member_ids")]
    pub carousel_member_ids: Vec<MemberId>,
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for SiteEngineConfig {
    fn default() -> Self {
        Self {
            initial_path: default_initial_path(),
            carousel_interval_ms: default_carousel_interval_ms(),
            slide_transition_ms: default_slide_transition_ms(),
            header_clearance_px: default_header_clearance_px(),
            section_mount_delay_ms: default_section_mount_delay_ms(),
            carousel_member_ids: default_carousel_member_ids(),
            reduced_motion: false,
        }
    }
}

impl SiteEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_initial_path(mut self, path: impl Into<String>) -> Self {
        self.initial_path = path.into();
        self
    }

    #[must_use]
    pub fn with_carousel_interval_ms(mut self, interval_ms: u64) -> Self {
        self.carousel_interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub fn with_slide_transition_ms(mut self, transition_ms: u64) -> Self {
        self.slide_transition_ms = transition_ms;
        self
    }

    #[must_use]
    pub fn with_header_clearance_px(mut self, clearance_px: f64) -> Self {
        self.header_clearance_px = clearance_px;
        self
    }

    #[must_use]
    pub fn with_section_mount_delay_ms(mut self, delay_ms: u64) -> Self {
        self.section_mount_delay_ms = delay_ms;
        self
    }

    /// Sets the carousel subset. Order is display order.
    #[must_use]
    pub fn with_carousel_member_ids(mut self, ids: impl IntoIterator<Item = MemberId>) -> Self {
        self.carousel_member_ids = ids.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    #[must_use]
    pub fn carousel_timing(&self) -> CarouselTiming {
        CarouselTiming {
            interval_ms: self.carousel_interval_ms,
            transition_ms: self.slide_transition_ms,
        }
    }

    pub fn validate(&self) -> SiteResult<()> {
        if !self.initial_path.starts_with('/') {
            return Err(SiteError::InvalidConfig(format!(
                "initial path must start with `/`, got `{}`",
                self.initial_path
            )));
        }
        if self.carousel_interval_ms == 0 {
            return Err(SiteError::InvalidConfig(
                "carousel interval must be > 0".to_owned(),
            ));
        }
        if self.section_mount_delay_ms == 0
            || self.section_mount_delay_ms > MAX_SECTION_MOUNT_DELAY_MS
        {
            return Err(SiteError::InvalidConfig(format!(
                "section mount delay must be in 1..={MAX_SECTION_MOUNT_DELAY_MS} ms, got {}",
                self.section_mount_delay_ms
            )));
        }
        if !self.header_clearance_px.is_finite() || self.header_clearance_px < 0.0 {
            return Err(SiteError::InvalidConfig(format!(
                "header clearance must be finite and >= 0, got {}",
                self.header_clearance_px
            )));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> SiteResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SiteError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates a config document.
    pub fn from_json_str(input: &str) -> SiteResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| SiteError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_initial_path() -> String {
    "/".to_owned()
}

fn default_carousel_interval_ms() -> u64 {
    DEFAULT_CAROUSEL_INTERVAL_MS
}

fn default_slide_transition_ms() -> u64 {
    DEFAULT_SLIDE_TRANSITION_MS
}

fn default_header_clearance_px() -> f64 {
    DEFAULT_HEADER_CLEARANCE_PX
}

fn default_section_mount_delay_ms() -> u64 {
    DEFAULT_SECTION_MOUNT_DELAY_MS
}

fn default_carousel_member_ids() -> Vec<MemberId> {
    DEFAULT_CAROUSEL_MEMBER_IDS
        .into_iter()
        .map(MemberId::new)
        .collect()
}
