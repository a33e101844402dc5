//! Single-select listbox with a button trigger.

use std::fmt;
use std::str::FromStr;

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;
use market_ui_headless::{
    reduce_dropdown, DismissOptions, DropdownAction, DropdownEffect, DropdownItem, DropdownState,
    Key, Placement,
};
use serde::{Deserialize, Serialize};

use crate::a11y::{focus_element_by_id, next_widget_id};
use crate::primitives::{
    bool_token, merge_layout_class, Button, ButtonSize, ButtonVariant, MenuItem, MenuSurface,
};
use crate::widgets::dismiss::DismissListeners;
use crate::{IconName, TokenParseError};

const MENU_GAP_PX: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Visual treatment of the dropdown trigger.
pub enum DropdownVariant {
    /// Filled neutral trigger.
    #[default]
    Default,
    /// Bordered trigger.
    Outline,
    /// Borderless trigger.
    Ghost,
}

impl DropdownVariant {
    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        }
    }

    fn button_variant(self) -> ButtonVariant {
        match self {
            Self::Default => ButtonVariant::Standard,
            Self::Outline => ButtonVariant::Outline,
            Self::Ghost => ButtonVariant::Ghost,
        }
    }
}

impl fmt::Display for DropdownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for DropdownVariant {
    type Err = TokenParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "default" => Ok(Self::Default),
            "outline" => Ok(Self::Outline),
            "ghost" => Ok(Self::Ghost),
            _ => Err(TokenParseError::new("dropdown variant", raw)),
        }
    }
}

#[derive(Clone)]
/// One entry of a [`Dropdown`].
pub struct DropdownOption {
    /// Value reported through `on_change`.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Disabled entries cannot be selected.
    pub disabled: bool,
    /// Optional leading icon.
    pub icon: Option<IconName>,
    /// Called with the value when this entry is selected, before `on_change`.
    pub on_select: Option<Callback<String>>,
}

impl DropdownOption {
    /// Creates an enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            icon: None,
            on_select: None,
        }
    }

    /// Marks the option disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Adds a leading icon.
    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Adds a per-option selection callback.
    pub fn on_select(mut self, on_select: Callback<String>) -> Self {
        self.on_select = Some(on_select);
        self
    }
}

impl fmt::Debug for DropdownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownOption")
            .field("value", &self.value)
            .field("label", &self.label)
            .field("disabled", &self.disabled)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

fn dropdown_items(options: &[DropdownOption]) -> Vec<DropdownItem<String>> {
    options
        .iter()
        .map(|option| {
            let item = DropdownItem::new(option.value.clone(), option.label.clone());
            if option.disabled {
                item.disabled()
            } else {
                item
            }
        })
        .collect()
}

fn option_id(listbox_id: &str, index: usize) -> String {
    format!("{listbox_id}-option-{index}")
}

#[derive(Clone, Copy)]
struct DropdownRuntime {
    state: RwSignal<DropdownState<String>>,
    options: Signal<Vec<DropdownOption>>,
    disabled: Signal<bool>,
    listeners: DismissListeners,
    trigger: NodeRef<html::Button>,
    listbox_id: StoredValue<String>,
    on_change: Option<Callback<String>>,
    on_open_change: Option<Callback<bool>>,
}

impl DropdownRuntime {
    fn is_open(self) -> bool {
        self.state.with_untracked(DropdownState::is_open)
    }

    fn dispatch(self, action: DropdownAction<String>) {
        let closing = matches!(
            action,
            DropdownAction::OutsideClick
                | DropdownAction::Escape
                | DropdownAction::SyncValue(_)
                | DropdownAction::SyncOpen(_)
        );
        if self.disabled.get_untracked() && !closing {
            return;
        }
        let items = self.options.with_untracked(|options| dropdown_items(options));
        let mut effects = Vec::new();
        self.state
            .update(|state| effects = reduce_dropdown(state, &items, action));
        self.sync_listeners();
        for effect in effects {
            self.perform(effect);
        }
    }

    fn perform(self, effect: DropdownEffect<String>) {
        match effect {
            DropdownEffect::SelectionChanged(value) => {
                let on_select = self.options.with_untracked(|options| {
                    options
                        .iter()
                        .find(|option| option.value == value)
                        .and_then(|option| option.on_select)
                });
                if let Some(on_select) = on_select {
                    on_select.call(value.clone());
                }
                if let Some(on_change) = self.on_change {
                    on_change.call(value);
                }
            }
            DropdownEffect::OpenChanged(open) => {
                if let Some(on_open_change) = self.on_open_change {
                    on_open_change.call(open);
                }
            }
            DropdownEffect::FocusItem(index) => {
                self.listbox_id
                    .with_value(|listbox_id| focus_element_by_id(&option_id(listbox_id, index)));
            }
            DropdownEffect::FocusTrigger => {
                if let Some(trigger) = self.trigger.get_untracked() {
                    let _ = trigger.focus();
                }
            }
        }
    }

    fn sync_listeners(self) {
        if self.is_open() {
            self.listeners.attach(
                move || self.dispatch(DropdownAction::OutsideClick),
                move || self.dispatch(DropdownAction::Escape),
            );
        } else {
            self.listeners.detach();
        }
    }
}

#[component]
/// Single-select dropdown.
///
/// `value` and `open` are controlled when supplied at first render; otherwise the widget owns
/// them, seeding the selection from `default_value`.
pub fn Dropdown(
    #[prop(into)] options: MaybeSignal<Vec<DropdownOption>>,
    #[prop(optional, into)] value: Option<MaybeSignal<Option<String>>>,
    #[prop(optional, into)] default_value: Option<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(default = DropdownVariant::Default)] variant: DropdownVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = "Seleccionar".to_string(), into)] placeholder: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(default = Placement::BottomStart)] placement: Placement,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let root = create_node_ref::<html::Div>();
    let trigger = create_node_ref::<html::Button>();
    let listbox_id = format!("{}-listbox", next_widget_id("dropdown"));
    let options = Signal::derive(move || options.get());
    let disabled = Signal::derive(move || disabled.get());

    let runtime = DropdownRuntime {
        state: create_rw_signal(DropdownState::new(
            value.as_ref().map(|value| value.get_untracked()),
            default_value,
            open.as_ref().map(|open| open.get_untracked()),
        )),
        options,
        disabled,
        listeners: DismissListeners::new(root, DismissOptions::default()),
        trigger,
        listbox_id: store_value(listbox_id.clone()),
        on_change,
        on_open_change,
    };
    if runtime.is_open() {
        runtime.sync_listeners();
    }

    if let Some(value) = value {
        create_effect(move |_| {
            let next = value.get();
            runtime.dispatch(DropdownAction::SyncValue(next));
        });
    }
    if let Some(open) = open {
        create_effect(move |_| {
            let next = open.get();
            runtime.dispatch(DropdownAction::SyncOpen(next));
            if let Some(index) = runtime.state.with_untracked(DropdownState::highlighted) {
                runtime.perform(DropdownEffect::FocusItem(index));
            }
        });
    }

    let is_open = Signal::derive(move || runtime.state.with(DropdownState::is_open));
    let trigger_label = move || {
        runtime.state.with(|state| {
            state.selected().and_then(|selected| {
                options.with(|options| {
                    options
                        .iter()
                        .find(|option| &option.value == selected)
                        .map(|option| option.label.clone())
                })
            })
        })
    };
    let has_selection = move || trigger_label().is_some();
    let menu_style = placement.offset_style(MENU_GAP_PX);
    let listbox_id_for_trigger = listbox_id.clone();
    let option_prefix = store_value(listbox_id.clone());

    let on_trigger_keydown = Callback::new(move |ev: KeyboardEvent| {
        let Some(key) = Key::from_dom_key(&ev.key()) else {
            return;
        };
        if key == Key::Tab {
            return;
        }
        // Enter/Space would otherwise also fire a native click and toggle twice.
        ev.prevent_default();
        runtime.dispatch(DropdownAction::TriggerKey(key));
    });

    view! {
        <div
            node_ref=root
            class=merge_layout_class("ui-dropdown", layout_class)
            style="position: relative; display: inline-block;"
            data-ui-primitive="true"
            data-ui-kind="dropdown"
            data-ui-variant=variant.token()
            data-ui-state=move || if is_open.get() { "open" } else { "closed" }
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <Button
                node_ref=trigger
                variant=variant.button_variant()
                size=size
                ui_slot="trigger"
                aria_label=aria_label.unwrap_or_default()
                aria_haspopup="listbox".to_string()
                aria_controls=listbox_id_for_trigger
                aria_expanded=is_open
                disabled=disabled
                trailing_icon=IconName::ChevronDown
                on_click=Callback::new(move |_: MouseEvent| {
                    runtime.dispatch(DropdownAction::TriggerClick);
                })
                on_keydown=on_trigger_keydown
            >
                <span
                    data-ui-slot="value"
                    data-ui-placeholder=move || bool_token(!has_selection())
                >
                    {
                        let placeholder = placeholder.clone();
                        move || trigger_label().unwrap_or_else(|| placeholder.clone())
                    }
                </span>
            </Button>
            <Show when=move || is_open.get() fallback=|| ()>
                <MenuSurface
                    id=listbox_id.clone()
                    role="listbox"
                    style=menu_style.clone()
                    ui_slot="listbox"
                >
                    {
                        let listbox_id = option_prefix.get_value();
                        move || {
                            options
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, option)| {
                                    let value = option.value.clone();
                                    let selected = Signal::derive(move || {
                                        runtime
                                            .state
                                            .with(|state| state.selected() == Some(&value))
                                    });
                                    let highlighted = Signal::derive(move || {
                                        runtime.state.with(|state| state.highlighted() == Some(index))
                                    });
                                    let on_keydown = Callback::new(move |ev: KeyboardEvent| {
                                        let Some(key) = Key::from_dom_key(&ev.key()) else {
                                            return;
                                        };
                                        if key != Key::Tab {
                                            ev.prevent_default();
                                        }
                                        runtime.dispatch(DropdownAction::ItemKey { index, key });
                                    });
                                    view! {
                                        <MenuItem
                                            id=option_id(&listbox_id, index)
                                            role="option"
                                            disabled=option.disabled
                                            selected=selected
                                            highlighted=highlighted
                                            leading_icon=option.icon
                                            on_click=Callback::new(move |_: MouseEvent| {
                                                runtime.dispatch(DropdownAction::ItemClick(index));
                                            })
                                            on_keydown=on_keydown
                                        >
                                            {option.label}
                                        </MenuItem>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </MenuSurface>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn option_flags_carry_into_headless_items() {
        let options = vec![
            DropdownOption::new("pending", "Pendiente"),
            DropdownOption::new("cancelled", "Cancelado").disabled(),
        ];
        assert_eq!(
            dropdown_items(&options),
            vec![
                DropdownItem::new("pending".to_string(), "Pendiente"),
                DropdownItem::new("cancelled".to_string(), "Cancelado").disabled(),
            ]
        );
    }

    #[test]
    fn option_ids_are_scoped_to_the_listbox() {
        assert_eq!(
            option_id("market-dropdown-4-listbox", 2),
            "market-dropdown-4-listbox-option-2"
        );
    }

    #[test]
    fn variant_tokens_parse_back() {
        for variant in [
            DropdownVariant::Default,
            DropdownVariant::Outline,
            DropdownVariant::Ghost,
        ] {
            assert_eq!(variant.token().parse::<DropdownVariant>(), Ok(variant));
        }
        assert_eq!(
            DropdownVariant::Ghost.button_variant(),
            ButtonVariant::Ghost
        );
    }
}
