//! Single-selection dropdown state machine.
//!
//! Closed → Open → Closed, where Open closes on outside click, Escape, item selection, or a
//! repeated trigger activation. Both the selected value and the open flag can be controlled by
//! the caller; see [`crate::controlled`].

use crate::controlled::Controllable;
use crate::overlay::{reduce_overlay, DismissOptions, Key, OverlayAction, OverlayState};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One selectable entry.
pub struct DropdownItem<T> {
    /// Value reported on selection.
    pub value: T,
    /// Visible label.
    pub label: String,
    /// Disabled entries are inert.
    pub disabled: bool,
}

impl<T> DropdownItem<T> {
    /// Creates an enabled item.
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks the item disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keyboard highlight movement inside the open menu.
pub enum HighlightMove {
    /// Next enabled item, wrapping to the first.
    Next,
    /// Previous enabled item, wrapping to the last.
    Previous,
    /// First enabled item.
    First,
    /// Last enabled item.
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Inputs accepted by [`reduce_dropdown`].
pub enum DropdownAction<T> {
    /// Pointer activation of the trigger.
    TriggerClick,
    /// Key pressed while the trigger has focus.
    TriggerKey(Key),
    /// Pointer activation of the item at an index.
    ItemClick(usize),
    /// Key pressed while an item has focus.
    ItemKey {
        /// Focused item index.
        index: usize,
        /// Pressed key.
        key: Key,
    },
    /// Move the keyboard highlight.
    Highlight(HighlightMove),
    /// Pointer press outside trigger and menu.
    OutsideClick,
    /// Global Escape.
    Escape,
    /// Caller-supplied value changed (controlled mode).
    SyncValue(Option<T>),
    /// Caller-supplied open flag changed (controlled mode).
    SyncOpen(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Work emitted by [`reduce_dropdown`].
pub enum DropdownEffect<T> {
    /// Report a selection to the change callback.
    SelectionChanged(T),
    /// Report an open/close request to the visibility callback.
    OpenChanged(bool),
    /// Move DOM focus to the item at an index.
    FocusItem(usize),
    /// Return DOM focus to the trigger.
    FocusTrigger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// View-state of one dropdown instance.
pub struct DropdownState<T> {
    open: Controllable<bool>,
    selection: Controllable<Option<T>>,
    highlighted: Option<usize>,
}

impl<T: Clone + PartialEq> DropdownState<T> {
    /// Resolves control modes from the props present on first render.
    ///
    /// `value` is `Some` when the caller controls selection (its inner `None` means "nothing
    /// selected"); `default_value` seeds uncontrolled selection and is otherwise ignored.
    pub fn new(value: Option<Option<T>>, default_value: Option<T>, open: Option<bool>) -> Self {
        Self {
            open: Controllable::resolve(open, || false),
            selection: Controllable::resolve(value, || default_value),
            highlighted: None,
        }
    }

    /// Whether the menu is displayed.
    pub fn is_open(&self) -> bool {
        *self.open.get()
    }

    /// Currently displayed selection.
    pub fn selected(&self) -> Option<&T> {
        self.selection.get().as_ref()
    }

    /// Keyboard-highlighted item index.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether selection is owned by the caller.
    pub fn is_value_controlled(&self) -> bool {
        self.selection.is_controlled()
    }

    /// Index of the item matching the current selection.
    pub fn selected_index(&self, items: &[DropdownItem<T>]) -> Option<usize> {
        let selected = self.selected()?;
        items.iter().position(|item| &item.value == selected)
    }
}

/// Applies `action`, returning effects in the order they must be performed.
pub fn reduce_dropdown<T: Clone + PartialEq>(
    state: &mut DropdownState<T>,
    items: &[DropdownItem<T>],
    action: DropdownAction<T>,
) -> Vec<DropdownEffect<T>> {
    let mut effects = Vec::new();
    match action {
        DropdownAction::TriggerClick => {
            apply_overlay(state, items, OverlayAction::Toggle, &mut effects);
        }
        DropdownAction::TriggerKey(key) => match key {
            Key::Enter | Key::Space | Key::ArrowDown if !state.is_open() => {
                apply_overlay(state, items, OverlayAction::Open, &mut effects);
            }
            Key::ArrowDown => move_highlight(state, items, HighlightMove::Next, &mut effects),
            Key::ArrowUp if state.is_open() => {
                move_highlight(state, items, HighlightMove::Previous, &mut effects)
            }
            Key::Escape => {
                if apply_overlay(state, items, OverlayAction::Escape, &mut effects) {
                    effects.push(DropdownEffect::FocusTrigger);
                }
            }
            _ => {}
        },
        DropdownAction::ItemClick(index) => select(state, items, index, &mut effects),
        DropdownAction::ItemKey { index, key } => match key {
            Key::Enter | Key::Space => select(state, items, index, &mut effects),
            Key::ArrowDown => {
                state.highlighted = Some(index);
                move_highlight(state, items, HighlightMove::Next, &mut effects);
            }
            Key::ArrowUp => {
                state.highlighted = Some(index);
                move_highlight(state, items, HighlightMove::Previous, &mut effects);
            }
            Key::Home => move_highlight(state, items, HighlightMove::First, &mut effects),
            Key::End => move_highlight(state, items, HighlightMove::Last, &mut effects),
            Key::Escape => {
                if apply_overlay(state, items, OverlayAction::Escape, &mut effects) {
                    effects.push(DropdownEffect::FocusTrigger);
                }
            }
            Key::Tab => {
                apply_overlay(state, items, OverlayAction::Close, &mut effects);
            }
        },
        DropdownAction::Highlight(movement) => {
            if state.is_open() {
                move_highlight(state, items, movement, &mut effects);
            }
        }
        DropdownAction::OutsideClick => {
            apply_overlay(state, items, OverlayAction::OutsideClick, &mut effects);
        }
        DropdownAction::Escape => {
            if apply_overlay(state, items, OverlayAction::Escape, &mut effects) {
                effects.push(DropdownEffect::FocusTrigger);
            }
        }
        DropdownAction::SyncValue(value) => {
            state.selection.sync(value);
        }
        DropdownAction::SyncOpen(open) => {
            if state.open.sync(open) {
                state.highlighted = open.then(|| initial_highlight(state, items)).flatten();
            }
        }
    }
    effects
}

fn select<T: Clone + PartialEq>(
    state: &mut DropdownState<T>,
    items: &[DropdownItem<T>],
    index: usize,
    effects: &mut Vec<DropdownEffect<T>>,
) {
    let Some(item) = items.get(index) else {
        return;
    };
    if item.disabled || !state.is_open() {
        return;
    }
    let requested = state.selection.request(Some(item.value.clone()));
    if let Some(value) = requested {
        effects.push(DropdownEffect::SelectionChanged(value));
    }
    if apply_overlay(state, items, OverlayAction::ItemSelected, effects) {
        effects.push(DropdownEffect::FocusTrigger);
    }
}

fn apply_overlay<T: Clone + PartialEq>(
    state: &mut DropdownState<T>,
    items: &[DropdownItem<T>],
    action: OverlayAction,
    effects: &mut Vec<DropdownEffect<T>>,
) -> bool {
    let mut overlay = OverlayState {
        is_open: state.is_open(),
    };
    let Some(transition) = reduce_overlay(&mut overlay, DismissOptions::default(), action) else {
        return false;
    };
    let open = state.open.request(transition.is_open());
    effects.push(DropdownEffect::OpenChanged(open));
    if open {
        state.highlighted = initial_highlight(state, items);
        if let Some(index) = state.highlighted {
            effects.push(DropdownEffect::FocusItem(index));
        }
    } else {
        state.highlighted = None;
    }
    true
}

fn initial_highlight<T: Clone + PartialEq>(
    state: &DropdownState<T>,
    items: &[DropdownItem<T>],
) -> Option<usize> {
    state
        .selected_index(items)
        .filter(|&index| !items[index].disabled)
        .or_else(|| items.iter().position(|item| !item.disabled))
}

fn move_highlight<T: Clone + PartialEq>(
    state: &mut DropdownState<T>,
    items: &[DropdownItem<T>],
    movement: HighlightMove,
    effects: &mut Vec<DropdownEffect<T>>,
) {
    let enabled: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.disabled)
        .map(|(index, _)| index)
        .collect();
    let (Some(&first), Some(&last)) = (enabled.first(), enabled.last()) else {
        return;
    };
    let next = match (movement, state.highlighted) {
        (HighlightMove::First, _) | (HighlightMove::Next, None) => first,
        (HighlightMove::Last, _) | (HighlightMove::Previous, None) => last,
        (HighlightMove::Next, Some(current)) => enabled
            .iter()
            .copied()
            .find(|&index| index > current)
            .unwrap_or(first),
        (HighlightMove::Previous, Some(current)) => enabled
            .iter()
            .rev()
            .copied()
            .find(|&index| index < current)
            .unwrap_or(last),
    };
    state.highlighted = Some(next);
    effects.push(DropdownEffect::FocusItem(next));
}
