//! Date picker field and its calendar grid.

use chrono::NaiveDate;
use leptos::ev::MouseEvent;
use leptos::*;
use market_ui_headless::{
    format_date, month_grid, month_title, reduce_date_picker, weekday_labels, DateConstraint,
    DateFormat, DatePickerAction, DatePickerEffect, DatePickerState, DayCell, DismissOptions,
    DisabledDates, Locale, MonthGrid, PickerVariant, Placement, WeekStart,
};

use crate::a11y::next_widget_id;
use crate::clock;
use crate::primitives::{bool_token, merge_layout_class, Button, ButtonSize, ButtonVariant};
use crate::widgets::dismiss::DismissListeners;
use crate::IconName;

const CALENDAR_GAP_PX: u16 = 4;

#[component]
/// Month grid with previous/next navigation and optional Today and Clear actions.
///
/// The grid is supplied by the caller; the calendar only reports intents.
pub fn Calendar(
    #[prop(into)] grid: Signal<MonthGrid>,
    #[prop(default = Locale::EsMx)] locale: Locale,
    #[prop(default = WeekStart::Sunday)] week_start: WeekStart,
    #[prop(optional, into)] show_clear: MaybeSignal<bool>,
    on_select: Callback<NaiveDate>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
    #[prop(optional)] on_today: Option<Callback<()>>,
    #[prop(optional)] on_clear: Option<Callback<()>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let labels = locale.picker_labels();
    let title = Signal::derive(move || grid.with(|grid| month_title(grid.view, locale)));

    let day_button = move |cell: DayCell| {
        let state = if cell.is_selected {
            "selected"
        } else if cell.is_today {
            "today"
        } else {
            "idle"
        };
        view! {
            <button
                type="button"
                role="gridcell"
                class="ui-calendar-day"
                aria-label=format_date(cell.date, DateFormat::Long, locale)
                aria-selected=bool_token(cell.is_selected)
                aria-disabled=bool_token(cell.is_disabled)
                aria-current=cell.is_today.then_some("date")
                tabindex=if cell.is_selected { "0" } else { "-1" }
                data-ui-state=state
                data-ui-outside=bool_token(!cell.is_current_month)
                data-ui-disabled=bool_token(cell.is_disabled)
                on:click=move |_| on_select.call(cell.date)
            >
                {cell.label()}
            </button>
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-calendar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="calendar"
            data-ui-locale=locale.tag()
        >
            <div data-ui-slot="calendar-header">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    aria_label=labels.previous_month.to_string()
                    title=labels.previous_month.to_string()
                    leading_icon=IconName::ChevronLeft
                    on_click=Callback::new(move |_: MouseEvent| on_previous.call(()))
                />
                <div data-ui-slot="month-title" aria-live="polite">
                    {move || title.get()}
                </div>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    aria_label=labels.next_month.to_string()
                    title=labels.next_month.to_string()
                    leading_icon=IconName::ChevronRight
                    on_click=Callback::new(move |_: MouseEvent| on_next.call(()))
                />
            </div>
            <div role="grid" aria-label=move || title.get() data-ui-slot="calendar-grid">
                <div role="row" data-ui-slot="weekdays">
                    {weekday_labels(locale, week_start)
                        .into_iter()
                        .map(|label| view! { <span role="columnheader">{label}</span> })
                        .collect_view()}
                </div>
                {move || {
                    grid.with(|grid| {
                        grid.weeks()
                            .map(|week| {
                                view! {
                                    <div role="row" data-ui-slot="week">
                                        {week.iter().copied().map(day_button).collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
            <div data-ui-slot="calendar-footer">
                {on_today.map(|on_today| view! {
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        ui_slot="today"
                        on_click=Callback::new(move |_: MouseEvent| on_today.call(()))
                    >
                        {labels.today}
                    </Button>
                })}
                {on_clear.map(|on_clear| view! {
                    <Show when=move || show_clear.get() fallback=|| ()>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            ui_slot="clear"
                            on_click=Callback::new(move |_: MouseEvent| on_clear.call(()))
                        >
                            {labels.clear}
                        </Button>
                    </Show>
                })}
            </div>
        </div>
    }
}

#[derive(Clone, Copy)]
struct DatePickerRuntime {
    state: RwSignal<DatePickerState>,
    constraint: StoredValue<DateConstraint>,
    listeners: DismissListeners,
    on_change: Option<Callback<Option<NaiveDate>>>,
}

impl DatePickerRuntime {
    fn is_open(self) -> bool {
        self.state.with_untracked(DatePickerState::is_open)
    }

    fn dispatch(self, action: DatePickerAction) {
        let mut effects = Vec::new();
        self.constraint.with_value(|constraint| {
            self.state
                .update(|state| effects = reduce_date_picker(state, constraint, action));
        });
        for effect in effects {
            match effect {
                DatePickerEffect::Changed(value) => {
                    if let Some(on_change) = self.on_change {
                        on_change.call(value);
                    }
                }
                DatePickerEffect::Opened | DatePickerEffect::Closed => self.sync_listeners(),
            }
        }
    }

    fn sync_listeners(self) {
        if self.is_open() {
            self.listeners.attach(
                move || self.dispatch(DatePickerAction::OutsideClick),
                move || self.dispatch(DatePickerAction::Escape),
            );
        } else {
            self.listeners.detach();
        }
    }
}

#[component]
/// Date field with a dropdown or inline calendar.
///
/// Supplying `value` makes the picker controlled. `on_change(None)` reports an explicit clear,
/// which callers can tell apart from a field that was never set.
pub fn DatePicker(
    #[prop(optional, into)] value: Option<MaybeSignal<Option<NaiveDate>>>,
    #[prop(optional)] on_change: Option<Callback<Option<NaiveDate>>>,
    #[prop(optional)] min_date: Option<NaiveDate>,
    #[prop(optional)] max_date: Option<NaiveDate>,
    #[prop(optional, into)] disabled_dates: DisabledDates,
    #[prop(default = PickerVariant::Dropdown)] variant: PickerVariant,
    #[prop(default = DateFormat::Medium)] date_format: DateFormat,
    #[prop(default = Locale::EsMx)] locale: Locale,
    #[prop(default = WeekStart::Sunday)] week_start: WeekStart,
    #[prop(default = true)] clearable: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] placeholder: Option<String>,
    /// Overrides the viewer's local date, for deterministic rendering.
    #[prop(optional)]
    today: Option<NaiveDate>,
    #[prop(default = Placement::BottomStart)] placement: Placement,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let root = create_node_ref::<html::Div>();
    let today = today.unwrap_or_else(clock::today);
    let labels = locale.picker_labels();
    let placeholder = placeholder.unwrap_or_else(|| labels.placeholder.to_string());
    let panel_id = next_widget_id("date-picker");

    let mut constraint = DateConstraint::none().with_disabled(disabled_dates);
    constraint.min = min_date;
    constraint.max = max_date;

    let mut initial = DatePickerState::new(
        variant,
        value.as_ref().map(|value| value.get_untracked()),
        today,
    )
    .with_clearable(clearable);
    initial.set_disabled(disabled.get_untracked());

    let runtime = DatePickerRuntime {
        state: create_rw_signal(initial),
        constraint: store_value(constraint),
        listeners: DismissListeners::new(root, DismissOptions::default()),
        on_change,
    };

    if let Some(value) = value {
        create_effect(move |_| {
            let next = value.get();
            runtime.dispatch(DatePickerAction::SyncValue(next));
        });
    }
    create_effect(move |_| {
        let next = disabled.get();
        runtime.state.update(|state| state.set_disabled(next));
        runtime.sync_listeners();
    });

    let grid = Signal::derive(move || {
        runtime.state.with(|state| {
            runtime.constraint.with_value(|constraint| {
                month_grid(state.view(), today, state.selected(), constraint, week_start)
            })
        })
    });
    let is_open = Signal::derive(move || runtime.state.with(DatePickerState::is_open));
    let calendar_visible =
        Signal::derive(move || runtime.state.with(DatePickerState::is_calendar_visible));
    let shows_clear = Signal::derive(move || runtime.state.with(DatePickerState::shows_clear));
    let is_disabled = Signal::derive(move || runtime.state.with(DatePickerState::is_disabled));
    let display = Signal::derive(move || {
        runtime
            .state
            .with(|state| state.selected())
            .map(|date| format_date(date, date_format, locale))
    });

    let calendar = move || {
        view! {
            <Calendar
                grid=grid
                locale=locale
                week_start=week_start
                show_clear=shows_clear
                on_select=Callback::new(move |date| runtime.dispatch(DatePickerAction::SelectDay(date)))
                on_previous=Callback::new(move |()| runtime.dispatch(DatePickerAction::PreviousMonth))
                on_next=Callback::new(move |()| runtime.dispatch(DatePickerAction::NextMonth))
                on_today=Callback::new(move |()| runtime.dispatch(DatePickerAction::Today(today)))
                on_clear=Callback::new(move |()| runtime.dispatch(DatePickerAction::Clear))
            />
        }
    };

    let body = match variant {
        PickerVariant::Inline => view! {
            <div data-ui-slot="inline-calendar" aria-label=aria_label.clone()>
                {calendar}
            </div>
        }
        .into_view(),
        PickerVariant::Dropdown => {
            let surface_style = placement.offset_style(CALENDAR_GAP_PX);
            let placeholder = placeholder.clone();
            view! {
                <div data-ui-slot="field">
                    <Button
                        variant=ButtonVariant::Outline
                        ui_slot="trigger"
                        aria_label=aria_label.clone().unwrap_or_default()
                        aria_haspopup="dialog".to_string()
                        aria_controls=panel_id.clone()
                        aria_expanded=is_open
                        disabled=is_disabled
                        leading_icon=IconName::Calendar
                        on_click=Callback::new(move |_: MouseEvent| {
                            runtime.dispatch(DatePickerAction::TriggerClick);
                        })
                    >
                        <span
                            data-ui-slot="value"
                            data-ui-placeholder=move || bool_token(display.get().is_none())
                        >
                            {move || display.get().unwrap_or_else(|| placeholder.clone())}
                        </span>
                    </Button>
                    <Show when=move || shows_clear.get() fallback=|| ()>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            ui_slot="clear"
                            aria_label=labels.clear.to_string()
                            title=labels.clear.to_string()
                            leading_icon=IconName::Dismiss
                            on_click=Callback::new(move |_: MouseEvent| {
                                runtime.dispatch(DatePickerAction::Clear);
                            })
                        />
                    </Show>
                </div>
                <Show when=move || calendar_visible.get() fallback=|| ()>
                    <div
                        id=panel_id.clone()
                        role="dialog"
                        class="ui-menu-surface"
                        style=surface_style.clone()
                        data-ui-primitive="true"
                        data-ui-kind="menu-surface"
                        data-ui-slot="calendar-panel"
                    >
                        {calendar}
                    </div>
                </Show>
            }
            .into_view()
        }
    };

    view! {
        <div
            node_ref=root
            class=merge_layout_class("ui-date-picker", layout_class)
            style="position: relative; display: inline-block;"
            data-ui-primitive="true"
            data-ui-kind="date-picker"
            data-ui-variant=variant.token()
            data-ui-state=move || if is_open.get() { "open" } else { "closed" }
            data-ui-disabled=move || bool_token(is_disabled.get())
        >
            {body}
        </div>
    }
}
