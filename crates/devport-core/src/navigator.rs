//! Smooth section navigation.

use crate::host::ScrollHost;
use crate::section::SectionId;
use futures_signals::signal::Mutable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Animated scroll was started; it finishes on its own.
    Started,
    /// No element for the target; nothing was scrolled.
    TargetMissing,
}

/// Closes the mobile menu, then starts a smooth scroll to `target`.
///
/// The menu is closed even when the target does not exist.
pub fn scroll_to_section<H: ScrollHost + ?Sized>(
    host: &H,
    menu_open: &Mutable<bool>,
    target: &SectionId,
) -> Navigation {
    menu_open.set_neq(false);
    if host.smooth_scroll_to(target) {
        log::debug!("scrolling to section '{target}'");
        Navigation::Started
    } else {
        log::debug!("section '{target}' not found, navigation skipped");
        Navigation::TargetMissing
    }
}
