//! Disclosure state shared by every floating panel (popover, dropdown menu, calendar).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Open/closed state owned by a single overlay instance.
pub struct OverlayState {
    /// Whether the floating panel is currently rendered.
    pub is_open: bool,
}

impl OverlayState {
    /// Returns a closed overlay.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Returns an open overlay.
    pub fn opened() -> Self {
        Self { is_open: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Which global interactions are allowed to dismiss an open overlay.
pub struct DismissOptions {
    /// Close when a pointer press lands outside both trigger and panel.
    pub close_on_click_outside: bool,
    /// Close when Escape is pressed.
    pub close_on_escape: bool,
}

impl Default for DismissOptions {
    fn default() -> Self {
        Self {
            close_on_click_outside: true,
            close_on_escape: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs accepted by [`reduce_overlay`].
pub enum OverlayAction {
    /// Explicit open request.
    Open,
    /// Explicit close request.
    Close,
    /// Trigger activation: open when closed, close when open.
    Toggle,
    /// Pointer press outside both trigger and panel subtrees.
    OutsideClick,
    /// Escape key pressed while the panel is open.
    Escape,
    /// An item inside the panel was chosen.
    ItemSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why an overlay closed.
pub enum CloseReason {
    /// Close was requested directly.
    Explicit,
    /// Trigger activated again while open.
    TriggerRepeat,
    /// Pointer press outside the overlay.
    OutsideClick,
    /// Escape key.
    Escape,
    /// Item selection inside the panel.
    Selection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visibility change produced by [`reduce_overlay`].
pub enum OverlayTransition {
    /// The overlay became visible.
    Opened,
    /// The overlay was hidden for the given reason.
    Closed(CloseReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Global listener lifecycle instruction paired with a visibility change.
pub enum ListenerChange {
    /// Install document-level `mousedown`/`keydown` listeners.
    Attach,
    /// Remove the listeners installed on open.
    Detach,
}

impl OverlayTransition {
    /// Listener lifecycle step that must accompany this transition.
    pub fn listeners(self) -> ListenerChange {
        match self {
            Self::Opened => ListenerChange::Attach,
            Self::Closed(_) => ListenerChange::Detach,
        }
    }

    /// Returns the visibility after the transition.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Opened)
    }
}

/// Applies `action` to `state`, returning the visibility change if one happened.
///
/// Outside clicks and Escape only close the overlay when `options` allow it; every other
/// combination that would not change visibility returns `None`.
pub fn reduce_overlay(
    state: &mut OverlayState,
    options: DismissOptions,
    action: OverlayAction,
) -> Option<OverlayTransition> {
    let next = match (state.is_open, action) {
        (false, OverlayAction::Open | OverlayAction::Toggle) => OverlayTransition::Opened,
        (true, OverlayAction::Close) => OverlayTransition::Closed(CloseReason::Explicit),
        (true, OverlayAction::Toggle) => OverlayTransition::Closed(CloseReason::TriggerRepeat),
        (true, OverlayAction::OutsideClick) if options.close_on_click_outside => {
            OverlayTransition::Closed(CloseReason::OutsideClick)
        }
        (true, OverlayAction::Escape) if options.close_on_escape => {
            OverlayTransition::Closed(CloseReason::Escape)
        }
        (true, OverlayAction::ItemSelected) => OverlayTransition::Closed(CloseReason::Selection),
        _ => return None,
    };
    state.is_open = next.is_open();
    Some(next)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keyboard keys the widget family reacts to.
pub enum Key {
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Tab.
    Tab,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value to a [`Key`].
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Enter),
            " " | "Spacebar" => Some(Self::Space),
            "Escape" | "Esc" => Some(Self::Escape),
            "ArrowUp" | "Up" => Some(Self::ArrowUp),
            "ArrowDown" | "Down" => Some(Self::ArrowDown),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "Tab" => Some(Self::Tab),
            _ => None,
        }
    }

    /// Whether the key activates the focused control.
    pub fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toggle_opens_then_closes_as_trigger_repeat() {
        let mut state = OverlayState::closed();
        let options = DismissOptions::default();

        assert_eq!(
            reduce_overlay(&mut state, options, OverlayAction::Toggle),
            Some(OverlayTransition::Opened)
        );
        assert!(state.is_open);
        assert_eq!(
            reduce_overlay(&mut state, options, OverlayAction::Toggle),
            Some(OverlayTransition::Closed(CloseReason::TriggerRepeat))
        );
        assert!(!state.is_open);
    }

    #[test]
    fn dismissal_respects_options() {
        let options = DismissOptions {
            close_on_click_outside: false,
            close_on_escape: false,
        };
        let mut state = OverlayState::opened();

        assert_eq!(
            reduce_overlay(&mut state, options, OverlayAction::OutsideClick),
            None
        );
        assert_eq!(reduce_overlay(&mut state, options, OverlayAction::Escape), None);
        assert!(state.is_open);

        assert_eq!(
            reduce_overlay(&mut state, DismissOptions::default(), OverlayAction::Escape),
            Some(OverlayTransition::Closed(CloseReason::Escape))
        );
    }

    #[test]
    fn closed_overlay_ignores_dismissal_inputs() {
        let mut state = OverlayState::closed();
        for action in [
            OverlayAction::Close,
            OverlayAction::OutsideClick,
            OverlayAction::Escape,
            OverlayAction::ItemSelected,
        ] {
            assert_eq!(
                reduce_overlay(&mut state, DismissOptions::default(), action),
                None
            );
        }
        assert!(!state.is_open);
    }

    #[test]
    fn opening_an_open_overlay_is_a_noop() {
        let mut state = OverlayState::opened();
        assert_eq!(
            reduce_overlay(&mut state, DismissOptions::default(), OverlayAction::Open),
            None
        );
    }

    #[test]
    fn listener_lifecycle_follows_visibility() {
        assert_eq!(OverlayTransition::Opened.listeners(), ListenerChange::Attach);
        assert_eq!(
            OverlayTransition::Closed(CloseReason::Selection).listeners(),
            ListenerChange::Detach
        );
    }

    #[test]
    fn dom_keys_map_to_widget_keys() {
        assert_eq!(Key::from_dom_key(" "), Some(Key::Space));
        assert_eq!(Key::from_dom_key("Esc"), Some(Key::Escape));
        assert_eq!(Key::from_dom_key("a"), None);
        assert!(Key::Enter.is_activation());
        assert!(!Key::ArrowDown.is_activation());
    }
}
