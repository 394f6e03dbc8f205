//! Boundary to the environment that owns the real layout and scrolling.
//!
//! The browser implementation lives in the frontend crate; tests use
//! `testing::FakeHost` (behind the `testing` feature).

use crate::section::{SectionBounds, SectionId};

/// One read of the window's scroll metrics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Vertical scroll offset of the document.
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_y,
            viewport_height,
            document_height,
        }
    }

    /// Document coordinate of the viewport's bottom edge.
    pub fn bottom(&self) -> f64 {
        self.scroll_y + self.viewport_height
    }
}

/// Read-only access to layout.
///
/// The tracker only ever sees this trait, so it cannot move the page.
pub trait LayoutSource {
    fn viewport(&self) -> Viewport;

    /// `None` when the section element is not mounted or cannot be measured.
    fn section_bounds(&self, section: &SectionId) -> Option<SectionBounds>;
}

/// Full host: layout reads plus scrolling and scroll notifications.
pub trait ScrollHost: LayoutSource {
    /// Keeps the scroll listener registered. Dropping it unregisters the listener.
    type Subscription;

    /// Starts an animated scroll bringing the section's top into view.
    ///
    /// Returns immediately; `false` when the section element does not exist.
    fn smooth_scroll_to(&self, section: &SectionId) -> bool;

    fn subscribe_scroll(&self, on_scroll: Box<dyn FnMut()>) -> Self::Subscription;
}

impl<L: LayoutSource + ?Sized> LayoutSource for &L {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn section_bounds(&self, section: &SectionId) -> Option<SectionBounds> {
        (**self).section_bounds(section)
    }
}
