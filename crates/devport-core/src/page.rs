//! Page-view controller.
//!
//! Owns the observable UI state of one mounted page (active section,
//! at-bottom flag, mobile menu) and the scroll listener feeding it.

use crate::host::ScrollHost;
use crate::navigator::{self, Navigation};
use crate::section::SectionId;
use crate::tracker::{ScrollState, ScrollTracker};
use futures_signals::signal::{Mutable, Signal};
use std::cell::RefCell;
use std::rc::Rc;

/// Observable values shared with the rendering layer.
///
/// Cloning is cheap and every clone points to the same values.
#[derive(Clone)]
pub struct PageState {
    active_section: Mutable<SectionId>,
    at_bottom: Mutable<bool>,
    menu_open: Mutable<bool>,
}

impl PageState {
    fn new(initial: ScrollState) -> Self {
        Self {
            active_section: Mutable::new(initial.active_section),
            at_bottom: Mutable::new(initial.at_bottom),
            menu_open: Mutable::new(false),
        }
    }

    pub fn active_section(&self) -> &Mutable<SectionId> {
        &self.active_section
    }

    pub fn at_bottom(&self) -> &Mutable<bool> {
        &self.at_bottom
    }

    pub fn menu_open(&self) -> &Mutable<bool> {
        &self.menu_open
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            active_section: self.active_section.get_cloned(),
            at_bottom: self.at_bottom.get(),
        }
    }

    /// `true` while `section` is the active one. Drives the nav highlight.
    pub fn is_active_signal(&self, section: SectionId) -> impl Signal<Item = bool> + use<> {
        self.active_section
            .signal_ref(move |active| *active == section)
    }

    fn apply(&self, state: ScrollState) {
        if *self.active_section.lock_ref() != state.active_section {
            log::debug!("active section -> '{}'", state.active_section);
        }
        self.active_section.set_neq(state.active_section);
        self.at_bottom.set_neq(state.at_bottom);
    }

    fn evaluate<H: ScrollHost + ?Sized>(&self, host: &H, tracker: &ScrollTracker) {
        self.apply(tracker.evaluate(host, &self.scroll_state()));
    }
}

pub struct PageView<H: ScrollHost + 'static> {
    host: Rc<H>,
    tracker: Rc<ScrollTracker>,
    state: PageState,
    subscription: RefCell<Option<H::Subscription>>,
}

impl<H: ScrollHost + 'static> PageView<H> {
    pub fn new(host: Rc<H>, tracker: ScrollTracker) -> Self {
        let state = PageState::new(tracker.initial_state());
        Self {
            host,
            tracker: Rc::new(tracker),
            state,
            subscription: RefCell::new(None),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    /// Evaluates against the current layout and starts listening to scrolls.
    ///
    /// No-op when already mounted.
    pub fn mount(&self) {
        if self.is_mounted() {
            return;
        }
        self.evaluate();
        let on_scroll = {
            let host = Rc::clone(&self.host);
            let tracker = Rc::clone(&self.tracker);
            let state = self.state.clone();
            move || state.evaluate(&*host, &tracker)
        };
        let subscription = self.host.subscribe_scroll(Box::new(on_scroll));
        *self.subscription.borrow_mut() = Some(subscription);
        log::debug!("page view mounted with {} sections", self.tracker.sections().len());
    }

    /// Drops the scroll subscription. The observable values keep their last state.
    pub fn unmount(&self) {
        if self.subscription.borrow_mut().take().is_some() {
            log::debug!("page view unmounted");
        }
    }

    /// One tracker pass writing the observable values.
    pub fn evaluate(&self) {
        self.state.evaluate(&*self.host, &self.tracker);
    }

    pub fn navigate(&self, target: &SectionId) -> Navigation {
        navigator::scroll_to_section(&*self.host, &self.state.menu_open, target)
    }

    /// Navigates to the section after the active one, if there is one.
    pub fn navigate_next(&self) -> Option<Navigation> {
        let active = self.state.active_section.get_cloned();
        let next = self.tracker.section_after(&active)?.clone();
        Some(self.navigate(&next))
    }

    pub fn toggle_menu(&self) {
        self.state.menu_open.replace_with(|open| !*open);
    }

    pub fn close_menu(&self) {
        self.state.menu_open.set_neq(false);
    }
}

impl<H: ScrollHost + 'static> Drop for PageView<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
