//! Active-section and at-bottom derivation against a scripted layout.

use devport_core::testing::FakeHost;
use devport_core::{ScrollState, ScrollTracker, SectionId, TieBreak, TrackerConfig, Viewport};

fn sections() -> [SectionId; 3] {
    ["home", "about", "experience"].map(SectionId::from_static)
}

fn tracker() -> ScrollTracker {
    ScrollTracker::new(sections(), TrackerConfig::default())
}

/// home [0, 800), about [800, 1400), experience [1400, 1900); document 2000, viewport 600.
fn page(scroll_y: f64) -> FakeHost {
    FakeHost::with_sections(
        Viewport::new(scroll_y, 600.0, 2000.0),
        [
            ("home", 0.0, 800.0),
            ("about", 800.0, 600.0),
            ("experience", 1400.0, 500.0),
        ],
    )
}

fn evaluate_at(scroll_y: f64) -> ScrollState {
    let tracker = tracker();
    tracker.evaluate(&page(scroll_y), &tracker.initial_state())
}

#[test]
fn lookahead_selects_section_before_it_reaches_the_top() {
    // probe = 750 + 100 = 850
    assert_eq!(evaluate_at(750.0).active_section, "about");
}

#[test]
fn top_of_page_selects_home() {
    assert_eq!(evaluate_at(0.0).active_section, "home");
}

#[test]
fn every_offset_inside_a_section_selects_it() {
    let tracker = tracker();
    let host = page(0.0);
    let expected = [("home", 0.0, 800.0), ("about", 800.0, 1400.0), ("experience", 1400.0, 1900.0)];
    for (section, top, bottom) in expected {
        let mut probe = top;
        while probe < bottom {
            host.set_scroll_y(probe - 100.0);
            let state = tracker.evaluate(&host, &tracker.initial_state());
            assert_eq!(state.active_section, section, "probe {probe}");
            probe += 50.0;
        }
    }
}

#[test]
fn at_bottom_boundary_is_inclusive() {
    assert!(evaluate_at(1395.0).at_bottom);
    assert!(evaluate_at(1390.0).at_bottom);
    assert!(!evaluate_at(1380.0).at_bottom);
}

#[test]
fn at_bottom_is_false_until_within_tolerance() {
    let tracker = tracker();
    let host = page(0.0);
    for scroll_y in (0..1390).step_by(10) {
        host.set_scroll_y(f64::from(scroll_y));
        let state = tracker.evaluate(&host, &tracker.initial_state());
        assert!(!state.at_bottom, "scroll_y {scroll_y}");
    }
}

#[test]
fn overlapping_sections_resolve_to_the_later_one() {
    let tracker = tracker();
    let host = FakeHost::with_sections(
        Viewport::new(850.0, 600.0, 4000.0),
        [("home", 0.0, 1200.0), ("about", 800.0, 600.0), ("experience", 900.0, 200.0)],
    );
    // probe 950 is inside all three
    let state = tracker.evaluate(&host, &tracker.initial_state());
    assert_eq!(state.active_section, "experience");
}

#[test]
fn first_match_tie_break_resolves_to_the_earlier_one() {
    let tracker = ScrollTracker::new(
        sections(),
        TrackerConfig {
            tie_break: TieBreak::FirstMatch,
            ..TrackerConfig::default()
        },
    );
    let host = FakeHost::with_sections(
        Viewport::new(850.0, 600.0, 4000.0),
        [("home", 0.0, 1200.0), ("about", 800.0, 600.0), ("experience", 900.0, 200.0)],
    );
    let state = tracker.evaluate(&host, &tracker.initial_state());
    assert_eq!(state.active_section, "home");
}

#[test]
fn missing_section_is_skipped() {
    let tracker = tracker();
    let host = page(750.0);
    host.remove_section(&SectionId::from_static("about"));
    let previous = ScrollState {
        active_section: SectionId::from_static("home"),
        at_bottom: false,
    };
    let state = tracker.evaluate(&host, &previous);
    assert_eq!(state.active_section, "home");

    host.set_scroll_y(1350.0);
    let state = tracker.evaluate(&host, &state);
    assert_eq!(state.active_section, "experience");
}

#[test]
fn probe_above_every_section_keeps_the_previous_value() {
    let tracker = tracker();
    let host = FakeHost::with_sections(
        Viewport::new(0.0, 600.0, 3000.0),
        [("home", 500.0, 800.0), ("about", 1300.0, 600.0), ("experience", 1900.0, 500.0)],
    );
    let previous = ScrollState {
        active_section: SectionId::from_static("experience"),
        at_bottom: true,
    };
    let state = tracker.evaluate(&host, &previous);
    assert_eq!(state.active_section, "experience");
    assert!(!state.at_bottom);
}

#[test]
fn evaluation_is_idempotent() {
    let tracker = tracker();
    let host = page(1395.0);
    let first = tracker.evaluate(&host, &tracker.initial_state());
    let second = tracker.evaluate(&host, &first);
    assert_eq!(first, second);
}

#[test]
fn layout_is_read_fresh_each_time() {
    let tracker = tracker();
    let host = page(750.0);
    let state = tracker.evaluate(&host, &tracker.initial_state());
    assert_eq!(state.active_section, "about");

    // an image above "about" finished loading and pushed it down
    host.set_section(SectionId::from_static("home"), devport_core::SectionBounds::new(0.0, 1000.0));
    host.set_section(SectionId::from_static("about"), devport_core::SectionBounds::new(1000.0, 600.0));
    let state = tracker.evaluate(&host, &state);
    assert_eq!(state.active_section, "home");
}
