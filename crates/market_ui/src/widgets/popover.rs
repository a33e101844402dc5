//! Floating content panel anchored to a trigger.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use market_ui_headless::{
    reduce_overlay, Controllable, DismissOptions, HoverEffect, HoverEvent, HoverIntent,
    OverlayAction, OverlayState, Placement, TimerToken, DEFAULT_HIDE_DELAY, DEFAULT_SHOW_DELAY,
};
use serde::{Deserialize, Serialize};

use crate::a11y::next_widget_id;
use crate::primitives::{bool_token, merge_layout_class, MenuSurface};
use crate::widgets::dismiss::DismissListeners;
use crate::TokenParseError;

const POPOVER_GAP_PX: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// How a popover is opened.
pub enum PopoverTrigger {
    /// Clicking the trigger toggles the panel.
    #[default]
    Click,
    /// Hovering or focusing the trigger opens the panel after a delay.
    Hover,
}

impl PopoverTrigger {
    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Hover => "hover",
        }
    }
}

impl fmt::Display for PopoverTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for PopoverTrigger {
    type Err = TokenParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "click" => Ok(Self::Click),
            "hover" => Ok(Self::Hover),
            _ => Err(TokenParseError::new("popover trigger", raw)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoverZone {
    Trigger,
    Panel,
}

/// Pointer and keyboard focus report through the same hover-intent events.
fn zone_event(zone: HoverZone, entered: bool) -> HoverEvent {
    match (zone, entered) {
        (HoverZone::Trigger, true) => HoverEvent::TriggerEnter,
        (HoverZone::Trigger, false) => HoverEvent::TriggerLeave,
        (HoverZone::Panel, true) => HoverEvent::ContentEnter,
        (HoverZone::Panel, false) => HoverEvent::ContentLeave,
    }
}

#[derive(Clone, Copy)]
struct PopoverRuntime {
    open: RwSignal<Controllable<bool>>,
    options: DismissOptions,
    listeners: DismissListeners,
    hover: StoredValue<HoverIntent>,
    timers: StoredValue<HashMap<TimerToken, TimeoutHandle>>,
    on_open_change: Option<Callback<bool>>,
}

impl PopoverRuntime {
    fn is_open(self) -> bool {
        self.open.with_untracked(|open| *open.get())
    }

    fn dispatch(self, action: OverlayAction) {
        let mut overlay = OverlayState {
            is_open: self.is_open(),
        };
        let Some(transition) = reduce_overlay(&mut overlay, self.options, action) else {
            return;
        };
        self.open.update(|open| {
            open.request(transition.is_open());
        });
        if !transition.is_open() {
            self.cancel_hover();
        }
        self.sync_listeners();
        if let Some(on_open_change) = self.on_open_change {
            on_open_change.call(transition.is_open());
        }
    }

    fn sync_listeners(self) {
        if self.is_open() {
            self.listeners.attach(
                move || self.dispatch(OverlayAction::OutsideClick),
                move || self.dispatch(OverlayAction::Escape),
            );
        } else {
            self.listeners.detach();
        }
    }

    fn hover_event(self, event: HoverEvent) {
        let is_open = self.is_open();
        let effects = self
            .hover
            .try_update_value(|hover| hover.handle(is_open, event))
            .unwrap_or_default();
        for effect in effects {
            self.apply_hover(effect);
        }
    }

    fn apply_hover(self, effect: HoverEffect) {
        match effect {
            HoverEffect::Schedule { token, delay } => {
                match set_timeout_with_handle(
                    move || {
                        self.timers.update_value(|timers| {
                            timers.remove(&token);
                        });
                        self.hover_event(HoverEvent::TimerElapsed(token));
                    },
                    delay,
                ) {
                    Ok(handle) => self.timers.update_value(|timers| {
                        timers.insert(token, handle);
                    }),
                    Err(err) => logging::warn!("popover hover timer failed: {err:?}"),
                }
            }
            HoverEffect::Cancel(token) => {
                if let Some(Some(handle)) =
                    self.timers.try_update_value(|timers| timers.remove(&token))
                {
                    handle.clear();
                }
            }
            HoverEffect::Show => self.dispatch(OverlayAction::Open),
            HoverEffect::Hide => self.dispatch(OverlayAction::Close),
        }
    }

    fn cancel_hover(self) {
        if let Some(Some(effect)) = self.hover.try_update_value(HoverIntent::reset) {
            self.apply_hover(effect);
        }
    }

    fn clear_timers(self) {
        if let Some(timers) = self.timers.try_update_value(std::mem::take) {
            for handle in timers.into_values() {
                handle.clear();
            }
        }
    }
}

#[component]
/// Floating panel anchored to `children`, opened by click or hover.
///
/// Passing `open` makes visibility controlled: interactions only report through
/// `on_open_change` and the panel follows the prop.
pub fn Popover(
    /// Panel body.
    #[prop(into)]
    content: ViewFn,
    #[prop(default = PopoverTrigger::Click)] trigger: PopoverTrigger,
    #[prop(default = DEFAULT_SHOW_DELAY)] delay_show: Duration,
    #[prop(default = DEFAULT_HIDE_DELAY)] delay_hide: Duration,
    #[prop(default = Placement::BottomStart)] placement: Placement,
    #[prop(default = true)] close_on_click_outside: bool,
    #[prop(default = true)] close_on_escape: bool,
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional, into)] header: Option<ViewFn>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let root = create_node_ref::<html::Div>();
    let panel_id = next_widget_id("popover");
    let options = DismissOptions {
        close_on_click_outside,
        close_on_escape,
    };
    let runtime = PopoverRuntime {
        open: create_rw_signal(Controllable::resolve(
            open.as_ref().map(|open| open.get_untracked()),
            || false,
        )),
        options,
        listeners: DismissListeners::new(root, options),
        hover: store_value(HoverIntent::new(delay_show, delay_hide)),
        timers: store_value(HashMap::new()),
        on_open_change,
    };
    on_cleanup(move || runtime.clear_timers());
    if runtime.is_open() {
        runtime.sync_listeners();
    }

    if let Some(open) = open {
        create_effect(move |_| {
            let next = open.get();
            let changed = runtime
                .open
                .try_update(|state| state.sync(next))
                .unwrap_or(false);
            if changed {
                if !next {
                    runtime.cancel_hover();
                }
                runtime.sync_listeners();
            }
        });
    }

    let is_open = Signal::derive(move || runtime.open.with(|open| *open.get()));
    let hover_mode = trigger == PopoverTrigger::Hover;
    let track = move |zone: HoverZone, entered: bool| {
        if hover_mode {
            runtime.hover_event(zone_event(zone, entered));
        }
    };
    let surface_style = placement.offset_style(POPOVER_GAP_PX);
    let panel_id_for_trigger = panel_id.clone();
    let header = store_value(header);
    let content = store_value(content);
    let footer = store_value(footer);

    view! {
        <div
            node_ref=root
            class=merge_layout_class("ui-popover", layout_class)
            style="position: relative; display: inline-block;"
            data-ui-primitive="true"
            data-ui-kind="popover"
            data-ui-trigger=trigger.token()
            data-ui-placement=placement.token()
            data-ui-state=move || if is_open.get() { "open" } else { "closed" }
        >
            <span
                data-ui-slot="trigger"
                aria-haspopup="dialog"
                aria-controls=panel_id_for_trigger
                aria-expanded=move || bool_token(is_open.get())
                on:click=move |_| {
                    if !hover_mode {
                        runtime.dispatch(OverlayAction::Toggle);
                    }
                }
                on:mouseenter=move |_| track(HoverZone::Trigger, true)
                on:mouseleave=move |_| track(HoverZone::Trigger, false)
                on:focusin=move |_| track(HoverZone::Trigger, true)
                on:focusout=move |_| track(HoverZone::Trigger, false)
            >
                {children()}
            </span>
            <Show when=move || is_open.get() fallback=|| ()>
                <MenuSurface
                    id=panel_id.clone()
                    role="dialog"
                    aria_label=aria_label.clone().unwrap_or_default()
                    style=surface_style.clone()
                    ui_slot="popover-panel"
                    on_mouseenter=Callback::new(move |_: ev::MouseEvent| track(HoverZone::Panel, true))
                    on_mouseleave=Callback::new(move |_: ev::MouseEvent| {
                        track(HoverZone::Panel, false)
                    })
                    on_focusin=Callback::new(move |_: ev::FocusEvent| track(HoverZone::Panel, true))
                    on_focusout=Callback::new(move |_: ev::FocusEvent| track(HoverZone::Panel, false))
                >
                    {header.get_value().map(|header| view! {
                        <div data-ui-slot="header">{header.run()}</div>
                    })}
                    <div data-ui-slot="body">{content.get_value().run()}</div>
                    {footer.get_value().map(|footer| view! {
                        <div data-ui-slot="footer">{footer.run()}</div>
                    })}
                </MenuSurface>
            </Show>
        </div>
    }
}
