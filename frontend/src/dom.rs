use log::warn;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Smoothly scrolls the section with `id` into view. Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        warn!("No element with id {} to scroll to", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Suppresses scrolling of the document body while held.
///
/// The body's previous `overflow` value is restored on drop.
pub struct ScrollLock {
    body: HtmlElement,
    previous: String,
}

impl ScrollLock {
    pub fn acquire() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        style.set_property("overflow", "hidden").ok()?;
        Some(Self { body, previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let _ = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
    }
}
