use super::*;

#[component]
/// Action button used by every widget trigger.
///
/// Omitting `children` renders an icon-only button; give it an `aria_label` in that case.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_controls: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] aria_haspopup: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] node_ref: Option<NodeRef<html::Button>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_else(create_node_ref::<html::Button>);
    let icon_only = children.is_none();
    let aria_haspopup = Signal::derive(move || aria_haspopup.get());
    let empty_to_none = |value: String| (!value.is_empty()).then_some(value);

    view! {
        <button
            type="button"
            node_ref=node_ref
            class=merge_layout_class("ui-button", layout_class)
            id=id
            aria-label=move || empty_to_none(aria_label.get())
            aria-controls=move || empty_to_none(aria_controls.get())
            aria-expanded=move || {
                let haspopup = aria_haspopup.with(|value| !value.is_empty());
                haspopup.then(|| bool_token(aria_expanded.get()))
            }
            aria-haspopup=move || empty_to_none(aria_haspopup.get())
            title=move || empty_to_none(title.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-icon-only=bool_token(icon_only)
            data-ui-state=move || if disabled.get() { "disabled" } else { "idle" }
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
            {children.map(|children| view! { <span data-ui-slot="label">{children()}</span> })}
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </button>
    }
}

#[component]
/// Checkbox for row selection, with a mixed state for partially selected pages.
pub fn CheckboxField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let state = move || {
        if indeterminate.get() {
            "mixed"
        } else if checked.get() {
            "checked"
        } else {
            "unchecked"
        }
    };

    view! {
        <input
            class=merge_layout_class("ui-checkbox", layout_class)
            type="checkbox"
            aria-label=move || aria_label.get()
            aria-checked=move || {
                if indeterminate.get() {
                    "mixed"
                } else {
                    bool_token(checked.get())
                }
            }
            prop:checked=move || checked.get()
            prop:indeterminate=move || indeterminate.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-state=state
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
        />
    }
}
