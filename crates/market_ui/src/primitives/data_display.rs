use super::*;

#[component]
/// Titled dashboard section, e.g. the orders table or the shipping form.
pub fn Panel(
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-padding=padding.token()
            aria-label=aria_label
            aria-busy=move || bool_token(busy.get())
        >
            {children()}
        </section>
    }
}

#[component]
/// Inline text run.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Page or section heading exposed through `role="heading"` so the level can vary without
/// switching element types.
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let level = level.clamp(1, 6);
    view! {
        <div
            class=merge_layout_class("ui-heading", layout_class)
            role="heading"
            aria-level=level.to_string()
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-variant=TextRole::Title.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Compact status pill, used for order states.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Placeholder shown when a collection has nothing to list.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            role="status"
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Lg /> })}
            <span data-ui-slot="message">{children()}</span>
        </div>
    }
}

#[component]
/// Panel header: title and meta line on the left, actions on the right.
///
/// Empty `title` or `meta` strings are not rendered.
pub fn PaneHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] meta: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());
    let meta = Signal::derive(move || meta.get());
    view! {
        <header
            class=merge_layout_class("ui-pane-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pane-header"
        >
            <div data-ui-slot="copy">
                <Show when=move || title.with(|title| !title.is_empty()) fallback=|| ()>
                    <Heading level=3>{move || title.get()}</Heading>
                </Show>
                <Show when=move || meta.with(|meta| !meta.is_empty()) fallback=|| ()>
                    <Text role=TextRole::Caption tone=TextTone::Secondary ui_slot="meta">
                        {move || meta.get()}
                    </Text>
                </Show>
            </div>
            <div data-ui-slot="actions">{children()}</div>
        </header>
    }
}
