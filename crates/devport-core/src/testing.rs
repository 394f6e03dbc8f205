//! Scriptable host for running the page logic without a browser.
//!
//! Layout is set by hand, scroll notifications are fired explicitly and
//! smooth-scroll requests are only recorded, never animated.

use crate::host::{LayoutSource, ScrollHost, Viewport};
use crate::section::{SectionBounds, SectionId};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

type Listeners = RefCell<Vec<(u64, Box<dyn FnMut()>)>>;

#[derive(Default)]
pub struct FakeHost {
    viewport: Cell<Viewport>,
    sections: RefCell<HashMap<SectionId, SectionBounds>>,
    scroll_requests: RefCell<Vec<SectionId>>,
    listeners: Rc<Listeners>,
    next_listener_id: Cell<u64>,
}

impl FakeHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport: Cell::new(viewport),
            ..Self::default()
        }
    }

    /// Host with the given `(id, top, height)` sections.
    pub fn with_sections<'a>(
        viewport: Viewport,
        sections: impl IntoIterator<Item = (&'a str, f64, f64)>,
    ) -> Self {
        let host = Self::new(viewport);
        for (id, top, height) in sections {
            host.set_section(SectionId::new(id), SectionBounds::new(top, height));
        }
        host
    }

    pub fn set_section(&self, id: SectionId, bounds: SectionBounds) {
        self.sections.borrow_mut().insert(id, bounds);
    }

    /// Simulates an element that is not (or no longer) mounted.
    pub fn remove_section(&self, id: &SectionId) {
        self.sections.borrow_mut().remove(id);
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.viewport.set(viewport);
    }

    /// Moves the scroll offset without notifying listeners.
    pub fn set_scroll_y(&self, scroll_y: f64) {
        let mut viewport = self.viewport.get();
        viewport.scroll_y = scroll_y;
        self.viewport.set(viewport);
    }

    /// Moves the scroll offset and notifies every listener, like a user scroll.
    pub fn scroll_to(&self, scroll_y: f64) {
        self.set_scroll_y(scroll_y);
        self.emit_scroll();
    }

    /// Listeners must not unsubscribe while being notified.
    pub fn emit_scroll(&self) {
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Targets of all smooth scrolls started so far.
    pub fn scroll_requests(&self) -> Vec<SectionId> {
        self.scroll_requests.borrow().clone()
    }
}

impl LayoutSource for FakeHost {
    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn section_bounds(&self, section: &SectionId) -> Option<SectionBounds> {
        self.sections.borrow().get(section).copied()
    }
}

impl ScrollHost for FakeHost {
    type Subscription = FakeSubscription;

    fn smooth_scroll_to(&self, section: &SectionId) -> bool {
        if !self.sections.borrow().contains_key(section) {
            return false;
        }
        self.scroll_requests.borrow_mut().push(section.clone());
        true
    }

    fn subscribe_scroll(&self, on_scroll: Box<dyn FnMut()>) -> FakeSubscription {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners.borrow_mut().push((id, on_scroll));
        FakeSubscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }
}

/// Removes its listener from the [`FakeHost`] when dropped.
pub struct FakeSubscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Drop for FakeSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
