//! Colors and layout constants shared by every section.

use devport_core::content::Emphasis;
use zoon::*;

pub const NAV_HEIGHT_PX: u32 = 64;
pub const CONTENT_MAX_WIDTH_PX: u32 = 1152;
/// Below this viewport width the nav collapses into the mobile menu.
pub const COMPACT_BREAKPOINT_PX: u32 = 768;

pub fn page_background() -> Rgba {
    color!("#f8fafc")
}

pub fn surface() -> Rgba {
    color!("#ffffff")
}

pub fn nav_background() -> Rgba {
    color!("rgba(255, 255, 255, 0.8)")
}

pub fn border() -> Rgba {
    color!("#e2e8f0")
}

pub fn heading_text() -> Rgba {
    color!("#0f172a")
}

pub fn body_text() -> Rgba {
    color!("#475569")
}

pub fn muted_text() -> Rgba {
    color!("#94a3b8")
}

pub fn accent() -> Rgba {
    color!("#4f46e5")
}

pub fn accent_hover() -> Rgba {
    color!("#4338ca")
}

pub fn accent_soft() -> Rgba {
    color!("#eef2ff")
}

pub fn hover_surface() -> Rgba {
    color!("#f1f5f9")
}

pub fn transparent() -> Rgba {
    color!("rgba(0, 0, 0, 0)")
}

/// (text, background) of a skill level pill.
pub fn emphasis_colors(emphasis: Emphasis) -> (Rgba, Rgba) {
    match emphasis {
        Emphasis::Strong => (accent(), accent_soft()),
        Emphasis::Normal => (body_text(), page_background()),
        Emphasis::Faint => (muted_text(), page_background()),
        Emphasis::Muted => (color!("#cbd5e1"), surface()),
    }
}
