use indexmap::IndexMap;

use crate::core::AnchorKey;
use crate::error::SiteResult;
use crate::render::{PageFrame, ScrollRequest, SiteFrame, SiteHost};

/// Synthetic layout used to place anchors without a real layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessLayout {
    /// Document offset of the first services section.
    pub content_top_px: f64,
    /// Vertical distance between consecutive services sections.
    pub section_height_px: f64,
}

impl Default for HeadlessLayout {
    fn default() -> Self {
        Self {
            content_top_px: 480.0,
            section_height_px: 720.0,
        }
    }
}

/// Recording host used by tests and headless embedding.
///
/// Anchors exist exactly while the last rendered frame is a services frame,
/// mirroring a page whose sections unmount on navigation.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    pub layout: HeadlessLayout,
    pub scroll_requests: Vec<ScrollRequest>,
    pub frames_rendered: usize,
    pub last_frame: Option<SiteFrame>,
    anchors: IndexMap<AnchorKey, f64>,
    scroll_top: f64,
}

impl HeadlessHost {
    #[must_use]
    pub fn with_layout(layout: HeadlessLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn anchor_keys(&self) -> impl Iterator<Item = &AnchorKey> {
        self.anchors.keys()
    }

    /// Requests issued for a section target, including ones clamped to 0.
    pub fn section_scrolls(&self) -> impl Iterator<Item = &ScrollRequest> {
        self.scroll_requests
            .iter()
            .filter(|request| !request.is_to_top())
    }

    #[must_use]
    pub fn scroll_to_top_count(&self) -> usize {
        self.scroll_requests
            .iter()
            .filter(|request| request.is_to_top())
            .count()
    }
}

impl SiteHost for HeadlessHost {
    fn render(&mut self, frame: &SiteFrame) -> SiteResult<()> {
        frame.validate()?;
        self.anchors.clear();
        if let PageFrame::Services(_) = &frame.page {
            for (index, anchor) in frame.anchors().enumerate() {
                let top =
                    self.layout.content_top_px + index as f64 * self.layout.section_height_px;
                self.anchors.insert(anchor.clone(), top);
            }
        }
        self.last_frame = Some(frame.clone());
        self.frames_rendered += 1;
        Ok(())
    }

    fn scroll_to(&mut self, request: ScrollRequest) -> SiteResult<()> {
        request.validate()?;
        self.scroll_top = request.top;
        self.scroll_requests.push(request);
        Ok(())
    }

    fn anchor_top(&self, key: &AnchorKey) -> Option<f64> {
        self.anchors.get(key).copied()
    }
}
