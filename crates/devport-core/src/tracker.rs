//! Scroll-position tracker.
//!
//! Derives the active section and the at-bottom flag from the current
//! scroll offset and the live layout of every declared section.

use crate::host::{LayoutSource, Viewport};
use crate::section::SectionId;
use serde::{Deserialize, Serialize};

/// Distance below the scroll offset used to pick the active section,
/// so the nav highlights a section slightly before it reaches the top.
pub const DEFAULT_LOOKAHEAD: f64 = 100.0;

/// Absorbs sub-pixel rounding at the end of the document.
pub const DEFAULT_BOTTOM_TOLERANCE: f64 = 10.0;

/// Active section used when no sections are declared at all.
pub const FALLBACK_SECTION: SectionId = SectionId::from_static("home");

/// Which section wins when the probe falls inside several overlapping sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    FirstMatch,
    /// Later sections override earlier ones.
    #[default]
    LastMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub lookahead: f64,
    pub bottom_tolerance: f64,
    pub tie_break: TieBreak,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
            bottom_tolerance: DEFAULT_BOTTOM_TOLERANCE,
            tie_break: TieBreak::default(),
        }
    }
}

/// Result of one evaluation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub active_section: SectionId,
    pub at_bottom: bool,
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    sections: Vec<SectionId>,
    config: TrackerConfig,
}

impl ScrollTracker {
    pub fn new(sections: impl IntoIterator<Item = SectionId>, config: TrackerConfig) -> Self {
        Self {
            sections: sections.into_iter().collect(),
            config,
        }
    }

    /// Sections in declared order.
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// State before the first evaluation: first declared section, not at bottom.
    pub fn initial_state(&self) -> ScrollState {
        ScrollState {
            active_section: self.sections.first().cloned().unwrap_or(FALLBACK_SECTION),
            at_bottom: false,
        }
    }

    pub fn probe(&self, scroll_y: f64) -> f64 {
        scroll_y + self.config.lookahead
    }

    /// Section whose bounds contain `probe`, if any.
    ///
    /// Sections the layout cannot measure are skipped.
    pub fn section_at<L: LayoutSource + ?Sized>(&self, layout: &L, probe: f64) -> Option<&SectionId> {
        let mut matches = self.sections.iter().filter(|section| {
            layout
                .section_bounds(section)
                .is_some_and(|bounds| bounds.contains(probe))
        });
        match self.config.tie_break {
            TieBreak::FirstMatch => matches.next(),
            TieBreak::LastMatch => matches.last(),
        }
    }

    pub fn is_at_bottom(&self, viewport: &Viewport) -> bool {
        is_at_bottom(viewport, self.config.bottom_tolerance)
    }

    /// One evaluation pass against fresh layout.
    ///
    /// The active section only changes on a positive match; otherwise the
    /// previous one is kept.
    pub fn evaluate<L: LayoutSource + ?Sized>(&self, layout: &L, previous: &ScrollState) -> ScrollState {
        let viewport = layout.viewport();
        let probe = self.probe(viewport.scroll_y);
        let active_section = self
            .section_at(layout, probe)
            .unwrap_or(&previous.active_section)
            .clone();
        let at_bottom = self.is_at_bottom(&viewport);
        log::trace!(
            "scroll evaluation: scroll_y={} probe={probe} active={active_section} at_bottom={at_bottom}",
            viewport.scroll_y
        );
        ScrollState {
            active_section,
            at_bottom,
        }
    }

    /// Section declared right after `section`.
    pub fn section_after(&self, section: &SectionId) -> Option<&SectionId> {
        let index = self.sections.iter().position(|candidate| candidate == section)?;
        self.sections.get(index + 1)
    }
}

/// `viewport_height + scroll_y >= document_height - tolerance`, boundary inclusive.
pub fn is_at_bottom(viewport: &Viewport, tolerance: f64) -> bool {
    viewport.bottom() >= viewport.document_height - tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionBounds;
    use std::collections::HashMap;

    struct StaticLayout {
        viewport: Viewport,
        bounds: HashMap<&'static str, SectionBounds>,
    }

    impl LayoutSource for StaticLayout {
        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn section_bounds(&self, section: &SectionId) -> Option<SectionBounds> {
            self.bounds.get(section.as_str()).copied()
        }
    }

    fn tracker(tie_break: TieBreak) -> ScrollTracker {
        ScrollTracker::new(
            ["home", "about", "experience"].map(SectionId::from_static),
            TrackerConfig {
                tie_break,
                ..TrackerConfig::default()
            },
        )
    }

    fn overlapping_layout() -> StaticLayout {
        StaticLayout {
            viewport: Viewport::new(0.0, 600.0, 3000.0),
            bounds: HashMap::from([
                ("home", SectionBounds::new(0.0, 800.0)),
                ("about", SectionBounds::new(50.0, 800.0)),
                ("experience", SectionBounds::new(2000.0, 500.0)),
            ]),
        }
    }

    #[test]
    fn default_config_matches_page_constants() {
        let config = TrackerConfig::default();
        assert_eq!(config.lookahead, 100.0);
        assert_eq!(config.bottom_tolerance, 10.0);
        assert_eq!(config.tie_break, TieBreak::LastMatch);
    }

    #[test]
    fn last_match_wins_by_default() {
        let tracker = tracker(TieBreak::LastMatch);
        let layout = overlapping_layout();
        assert_eq!(tracker.section_at(&layout, 100.0).map(SectionId::as_str), Some("about"));
    }

    #[test]
    fn first_match_keeps_earlier_section() {
        let tracker = tracker(TieBreak::FirstMatch);
        let layout = overlapping_layout();
        assert_eq!(tracker.section_at(&layout, 100.0).map(SectionId::as_str), Some("home"));
    }

    #[test]
    fn gap_between_sections_keeps_previous() {
        let tracker = tracker(TieBreak::LastMatch);
        let mut layout = overlapping_layout();
        layout.viewport.scroll_y = 1500.0;
        let previous = ScrollState {
            active_section: SectionId::from_static("about"),
            at_bottom: false,
        };
        let state = tracker.evaluate(&layout, &previous);
        assert_eq!(state.active_section, "about");
    }

    #[test]
    fn empty_tracker_falls_back_to_home() {
        let tracker = ScrollTracker::new([], TrackerConfig::default());
        assert_eq!(tracker.initial_state().active_section, FALLBACK_SECTION);
        assert!(!tracker.initial_state().at_bottom);
    }

    #[test]
    fn section_after_follows_declared_order() {
        let tracker = tracker(TieBreak::LastMatch);
        let about = SectionId::from_static("about");
        let experience = SectionId::from_static("experience");
        assert_eq!(tracker.section_after(&about), Some(&experience));
        assert_eq!(tracker.section_after(&experience), None);
        assert_eq!(tracker.section_after(&SectionId::from_static("blog")), None);
    }

    #[test]
    fn tie_break_uses_snake_case_names() {
        let config: TrackerConfig = serde_json::from_str(r#"{ "tie_break": "first_match" }"#).unwrap();
        assert_eq!(config.tie_break, TieBreak::FirstMatch);
        assert_eq!(config.lookahead, DEFAULT_LOOKAHEAD);
    }
}
