use super::*;

#[component]
/// Floating surface for menus, listboxes, popovers and calendars.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] node_ref: Option<NodeRef<html::Div>>,
    #[prop(optional)] on_mouseenter: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_mouseleave: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_focusin: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focusout: Option<Callback<FocusEvent>>,
    children: Children,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_else(create_node_ref::<html::Div>);
    view! {
        <div
            node_ref=node_ref
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role=role
            aria-label=aria_label
            style=style
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            data-ui-slot=ui_slot
            on:mouseenter=move |ev| {
                if let Some(on_mouseenter) = on_mouseenter.as_ref() {
                    on_mouseenter.call(ev);
                }
            }
            on:mouseleave=move |ev| {
                if let Some(on_mouseleave) = on_mouseleave.as_ref() {
                    on_mouseleave.call(ev);
                }
            }
            on:focusin=move |ev| {
                if let Some(on_focusin) = on_focusin.as_ref() {
                    on_focusin.call(ev);
                }
            }
            on:focusout=move |ev| {
                if let Some(on_focusout) = on_focusout.as_ref() {
                    on_focusout.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Focusable listbox/menu entry.
///
/// Disabled entries stay focusable for roving navigation but report `aria-disabled` and ignore
/// activation in the owning widget.
pub fn MenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] highlighted: MaybeSignal<bool>,
    #[prop(default = None)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    let selected = Signal::derive(move || selected.get() && !disabled.get());
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-menu-item", layout_class)
            id=id
            role=role
            aria-label=aria_label
            aria-selected=move || bool_token(selected.get())
            aria-disabled=move || bool_token(disabled.get())
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            data-ui-state=move || {
                if selected.get() {
                    "selected"
                } else if highlighted.get() {
                    "highlighted"
                } else {
                    "idle"
                }
            }
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            <span data-ui-slot="label">{children()}</span>
            <Show when=move || selected.get() fallback=|| ()>
                <Icon icon=IconName::Checkmark size=IconSize::Sm />
            </Show>
        </button>
    }
}
