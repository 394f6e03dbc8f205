//! [`ScrollHost`] backed by the browser window and document.

use devport_core::{LayoutSource, ScrollHost, SectionBounds, SectionId, Viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

const SCROLL_EVENT: &str = "scroll";

pub struct BrowserHost {
    window: Window,
}

impl BrowserHost {
    /// `None` outside of a browser main thread.
    pub fn new() -> Option<Self> {
        Some(Self {
            window: web_sys::window()?,
        })
    }

    fn element(&self, section: &SectionId) -> Option<HtmlElement> {
        self.window
            .document()?
            .get_element_by_id(section.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }
}

impl LayoutSource for BrowserHost {
    fn viewport(&self) -> Viewport {
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or_default();
        let document_height = self
            .window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or_default();
        Viewport::new(self.scroll_y(), viewport_height, document_height)
    }

    fn section_bounds(&self, section: &SectionId) -> Option<SectionBounds> {
        let rect = self.element(section)?.get_bounding_client_rect();
        // client rect is viewport-relative
        Some(SectionBounds::new(rect.top() + self.scroll_y(), rect.height()))
    }
}

impl ScrollHost for BrowserHost {
    type Subscription = ScrollSubscription;

    fn smooth_scroll_to(&self, section: &SectionId) -> bool {
        let Some(element) = self.element(section) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn subscribe_scroll(&self, on_scroll: Box<dyn FnMut()>) -> ScrollSubscription {
        let closure = Closure::wrap(on_scroll);
        if let Err(error) = self
            .window
            .add_event_listener_with_callback(SCROLL_EVENT, closure.as_ref().unchecked_ref())
        {
            log::error!("Failed to register scroll listener: {error:?}");
        }
        ScrollSubscription {
            window: self.window.clone(),
            closure,
        }
    }
}

/// Registered `scroll` listener; removed from the window when dropped.
pub struct ScrollSubscription {
    window: Window,
    closure: Closure<dyn FnMut()>,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(error) = self
            .window
            .remove_event_listener_with_callback(SCROLL_EVENT, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove scroll listener: {error:?}");
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn append_section(id: &str, height_px: u32) -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        element.set_id(id);
        element
            .set_attribute("style", &format!("height: {height_px}px"))
            .unwrap();
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn missing_section_is_not_measured_or_scrolled() {
        let host = BrowserHost::new().unwrap();
        let missing = SectionId::from_static("no-such-section");
        assert!(host.section_bounds(&missing).is_none());
        assert!(!host.smooth_scroll_to(&missing));
    }

    #[wasm_bindgen_test]
    fn measures_section_by_dom_id() {
        let element = append_section("measured-section", 300);
        let host = BrowserHost::new().unwrap();
        let bounds = host
            .section_bounds(&SectionId::from_static("measured-section"))
            .unwrap();
        assert_eq!(bounds.height, 300.0);
        assert!(host.viewport().document_height >= 300.0);
        element.remove();
    }

    #[wasm_bindgen_test]
    fn dropping_subscription_stops_notifications() {
        let host = BrowserHost::new().unwrap();
        let calls = Rc::new(Cell::new(0));
        let subscription = host.subscribe_scroll(Box::new({
            let calls = Rc::clone(&calls);
            move || calls.set(calls.get() + 1)
        }));
        let window = web_sys::window().unwrap();
        window
            .dispatch_event(&web_sys::Event::new(SCROLL_EVENT).unwrap())
            .unwrap();
        assert_eq!(calls.get(), 1);

        drop(subscription);
        window
            .dispatch_event(&web_sys::Event::new(SCROLL_EVENT).unwrap())
            .unwrap();
        assert_eq!(calls.get(), 1);
    }
}
