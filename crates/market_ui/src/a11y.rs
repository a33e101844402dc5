//! DOM focus, containment, and id helpers shared by the overlay widgets.

use std::cell::Cell;

use wasm_bindgen::JsCast;

thread_local! {
    static NEXT_WIDGET_ID: Cell<u64> = const { Cell::new(0) };
}

/// Returns a document-unique id such as `market-dropdown-3`.
///
/// Widgets use it to wire `aria-controls` on triggers and to address option elements.
pub(crate) fn next_widget_id(kind: &str) -> String {
    let id = NEXT_WIDGET_ID.with(|next| {
        let id = next.get().saturating_add(1);
        next.set(id);
        id
    });
    format!("market-{kind}-{id}")
}

/// Focuses an HTML element, ignoring browser focus errors.
pub(crate) fn focus_html_element(element: &web_sys::HtmlElement) {
    let _ = element.focus();
}

/// Focuses an element by ID and reports whether a focusable HTML element was found.
pub(crate) fn focus_element_by_id(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    focus_html_element(&element);
    true
}

/// Whether the event originated inside `root` (the root itself included).
pub(crate) fn event_within(ev: &web_sys::Event, root: &web_sys::Element) -> bool {
    let Some(target) = ev.target() else {
        return false;
    };
    let Ok(node) = target.dyn_into::<web_sys::Node>() else {
        return false;
    };
    root.contains(Some(&node))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_ids_are_unique_and_prefixed() {
        let first = next_widget_id("dropdown");
        let second = next_widget_id("dropdown");
        assert!(first.starts_with("market-dropdown-"));
        assert_ne!(first, second);
    }
}
