//! Document-level dismissal listeners for open overlays.
//!
//! Listeners exist only while an overlay is open: widgets call [`DismissListeners::attach`] when
//! a transition reports [`ListenerChange::Attach`](market_ui_headless::ListenerChange) and
//! [`DismissListeners::detach`] on the matching detach. Whatever is still attached when the
//! owning component is cleaned up is removed then.

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use market_ui_headless::{DismissOptions, Key};

use crate::a11y::event_within;

struct ActiveListeners {
    mousedown: Option<WindowListenerHandle>,
    keydown: Option<WindowListenerHandle>,
}

impl ActiveListeners {
    fn remove(self) {
        if let Some(handle) = self.mousedown {
            handle.remove();
        }
        if let Some(handle) = self.keydown {
            handle.remove();
        }
    }
}

#[derive(Clone, Copy)]
/// Owns the outside-click and Escape listeners of one overlay instance.
pub(crate) struct DismissListeners {
    root: NodeRef<html::Div>,
    options: DismissOptions,
    active: StoredValue<Option<ActiveListeners>>,
}

impl DismissListeners {
    /// Creates the guard. Presses inside `root` never count as outside clicks.
    pub(crate) fn new(root: NodeRef<html::Div>, options: DismissOptions) -> Self {
        let listeners = Self {
            root,
            options,
            active: store_value(None),
        };
        on_cleanup(move || listeners.detach());
        listeners
    }

    /// Installs the listeners enabled by the dismiss options. A second attach is a no-op.
    pub(crate) fn attach(
        self,
        on_outside_click: impl Fn() + 'static,
        on_escape: impl Fn() + 'static,
    ) {
        if self.active.with_value(Option::is_some) {
            return;
        }
        let root = self.root;

        let mousedown = self.options.close_on_click_outside.then(|| {
            window_event_listener(ev::mousedown, move |ev| {
                let inside = root
                    .get_untracked()
                    .map(|root| event_within(&ev, &root))
                    .unwrap_or(false);
                if !inside {
                    on_outside_click();
                }
            })
        });
        let keydown = self.options.close_on_escape.then(|| {
            window_event_listener(ev::keydown, move |ev| {
                if ev.default_prevented() {
                    return;
                }
                if Key::from_dom_key(&ev.key()) == Some(Key::Escape) {
                    on_escape();
                }
            })
        });
        self.active
            .set_value(Some(ActiveListeners { mousedown, keydown }));
    }

    /// Removes any installed listeners.
    pub(crate) fn detach(self) {
        // The store may already be disposed when cleanup runs after the owner.
        if let Some(Some(active)) = self.active.try_update_value(Option::take) {
            active.remove();
        }
    }
}
