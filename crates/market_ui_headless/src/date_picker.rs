//! Date picker view-state: which month is shown, what is selected, and whether the dropdown
//! panel is open.
//!
//! The inline variant is always visible and never opens or closes. Disabled dates are filtered
//! before any state changes, so interacting with them produces no effects at all.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::MonthView;
use crate::constraint::DateConstraint;
use crate::controlled::Controllable;
use crate::overlay::{reduce_overlay, DismissOptions, OverlayAction, OverlayState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Render mode.
pub enum PickerVariant {
    /// Trigger button that opens a floating calendar.
    #[default]
    Dropdown,
    /// Calendar rendered in place, always visible.
    Inline,
}

impl PickerVariant {
    /// Stable `data-ui-variant` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Dropdown => "dropdown",
            Self::Inline => "inline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "date", rename_all = "lowercase")]
/// A date field as seen by a form: never touched, explicitly cleared, or holding a date.
pub enum PickerValue {
    /// No value was ever supplied.
    #[default]
    Unset,
    /// The user cleared a previously set value.
    Cleared,
    /// A concrete date.
    Date(NaiveDate),
}

impl PickerValue {
    /// Folds a change reported by the picker into the field value.
    pub fn apply(self, change: Option<NaiveDate>) -> Self {
        match change {
            Some(date) => Self::Date(date),
            None => Self::Cleared,
        }
    }

    /// The date, if one is held.
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(date),
            Self::Unset | Self::Cleared => None,
        }
    }

    /// Whether the user explicitly cleared the field.
    pub fn is_cleared(self) -> bool {
        self == Self::Cleared
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs accepted by [`reduce_date_picker`].
pub enum DatePickerAction {
    /// Trigger button activation (dropdown variant only).
    TriggerClick,
    /// Pointer press outside trigger and panel.
    OutsideClick,
    /// Escape pressed while open.
    Escape,
    /// Show the previous month.
    PreviousMonth,
    /// Show the next month.
    NextMonth,
    /// A day cell was activated.
    SelectDay(NaiveDate),
    /// The "today" shortcut was activated; carries the real current date.
    Today(NaiveDate),
    /// The clear control was activated.
    Clear,
    /// The caller-supplied value changed.
    SyncValue(Option<NaiveDate>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Work emitted by [`reduce_date_picker`].
pub enum DatePickerEffect {
    /// Report to the change callback; `None` means the value was cleared.
    Changed(Option<NaiveDate>),
    /// The floating calendar opened.
    Opened,
    /// The floating calendar closed.
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// View-state of one date picker.
pub struct DatePickerState {
    variant: PickerVariant,
    overlay: OverlayState,
    view: MonthView,
    selected: Controllable<Option<NaiveDate>>,
    clearable: bool,
    disabled: bool,
}

impl DatePickerState {
    /// Builds state from the first-render props.
    ///
    /// `value` is `Some` for a controlled picker. The initial view is the month of the selected
    /// date, or of `today` when nothing is selected.
    pub fn new(variant: PickerVariant, value: Option<Option<NaiveDate>>, today: NaiveDate) -> Self {
        let selected = Controllable::resolve(value, || None);
        let view = MonthView::containing(selected.get().unwrap_or(today));
        Self {
            variant,
            overlay: OverlayState::closed(),
            view,
            selected,
            clearable: true,
            disabled: false,
        }
    }

    /// Enables or hides the clear control.
    pub fn with_clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Marks the whole field disabled.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.overlay = OverlayState::closed();
        }
    }

    /// Render mode.
    pub fn variant(&self) -> PickerVariant {
        self.variant
    }

    /// Whether the floating calendar is open (always `false` for inline pickers).
    pub fn is_open(&self) -> bool {
        self.overlay.is_open
    }

    /// Whether the day grid is currently rendered.
    pub fn is_calendar_visible(&self) -> bool {
        self.variant == PickerVariant::Inline || self.overlay.is_open
    }

    /// Month currently displayed.
    pub fn view(&self) -> MonthView {
        self.view
    }

    /// Selected date.
    pub fn selected(&self) -> Option<NaiveDate> {
        *self.selected.get()
    }

    /// Whether the field is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the clear control should be shown.
    pub fn shows_clear(&self) -> bool {
        self.clearable && !self.disabled && self.selected().is_some()
    }
}

/// Applies `action` under `constraint`, returning effects in order.
pub fn reduce_date_picker(
    state: &mut DatePickerState,
    constraint: &DateConstraint,
    action: DatePickerAction,
) -> Vec<DatePickerEffect> {
    let mut effects = Vec::new();
    if let DatePickerAction::SyncValue(value) = action {
        if state.selected.sync(value) {
            if let Some(date) = value {
                state.view = MonthView::containing(date);
            }
        }
        return effects;
    }
    if state.disabled {
        return effects;
    }

    match action {
        DatePickerAction::TriggerClick => {
            overlay(state, OverlayAction::Toggle, &mut effects);
        }
        DatePickerAction::OutsideClick => {
            overlay(state, OverlayAction::OutsideClick, &mut effects);
        }
        DatePickerAction::Escape => {
            overlay(state, OverlayAction::Escape, &mut effects);
        }
        DatePickerAction::PreviousMonth if state.is_calendar_visible() => {
            state.view = state.view.previous();
        }
        DatePickerAction::NextMonth if state.is_calendar_visible() => {
            state.view = state.view.next();
        }
        DatePickerAction::SelectDay(date) if state.is_calendar_visible() => {
            select(state, constraint, date, &mut effects);
        }
        DatePickerAction::Today(today) if state.is_calendar_visible() => {
            // Navigation always happens; selection only when today passes the constraint.
            state.view = MonthView::containing(today);
            select(state, constraint, today, &mut effects);
        }
        DatePickerAction::Clear if state.shows_clear() => {
            let cleared = state.selected.request(None);
            effects.push(DatePickerEffect::Changed(cleared));
        }
        _ => {}
    }
    effects
}

fn select(
    state: &mut DatePickerState,
    constraint: &DateConstraint,
    date: NaiveDate,
    effects: &mut Vec<DatePickerEffect>,
) {
    if constraint.is_disabled(date) {
        return;
    }
    let requested = state.selected.request(Some(date));
    if !state.selected.is_controlled() {
        state.view = MonthView::containing(date);
    }
    effects.push(DatePickerEffect::Changed(requested));
    overlay(state, OverlayAction::ItemSelected, effects);
}

fn overlay(
    state: &mut DatePickerState,
    action: OverlayAction,
    effects: &mut Vec<DatePickerEffect>,
) {
    if state.variant == PickerVariant::Inline {
        return;
    }
    if let Some(transition) = reduce_overlay(&mut state.overlay, DismissOptions::default(), action)
    {
        effects.push(if transition.is_open() {
            DatePickerEffect::Opened
        } else {
            DatePickerEffect::Closed
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::constraint::DisabledDates;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn opened(value: Option<Option<NaiveDate>>) -> DatePickerState {
        let mut state = DatePickerState::new(PickerVariant::Dropdown, value, date(2024, 6, 15));
        let effects = reduce_date_picker(
            &mut state,
            &DateConstraint::none(),
            DatePickerAction::TriggerClick,
        );
        assert_eq!(effects, vec![DatePickerEffect::Opened]);
        state
    }

    #[test]
    fn selecting_enabled_day_changes_and_closes() {
        let mut state = opened(None);
        let effects = reduce_date_picker(
            &mut state,
            &DateConstraint::none(),
            DatePickerAction::SelectDay(date(2024, 6, 20)),
        );
        assert_eq!(
            effects,
            vec![
                DatePickerEffect::Changed(Some(date(2024, 6, 20))),
                DatePickerEffect::Closed,
            ]
        );
        assert_eq!(state.selected(), Some(date(2024, 6, 20)));
        assert!(!state.is_open());
    }

    #[test]
    fn disabled_day_is_a_noop_and_keeps_panel_open() {
        let mut state = opened(None);
        let rule = DateConstraint::none().with_disabled(vec![date(2024, 6, 18)]);
        let effects = reduce_date_picker(
            &mut state,
            &rule,
            DatePickerAction::SelectDay(date(2024, 6, 18)),
        );
        assert!(effects.is_empty());
        assert!(state.is_open());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn today_selects_when_allowed() {
        let mut state = opened(None);
        state.view = state.view.shift(-3);
        let effects = reduce_date_picker(
            &mut state,
            &DateConstraint::none(),
            DatePickerAction::Today(date(2024, 6, 15)),
        );
        assert_eq!(
            effects,
            vec![
                DatePickerEffect::Changed(Some(date(2024, 6, 15))),
                DatePickerEffect::Closed,
            ]
        );
        assert_eq!(state.view(), MonthView::containing(date(2024, 6, 15)));
    }

    #[test]
    fn today_navigates_without_selecting_when_disabled() {
        let mut state = opened(None);
        state.view = state.view.shift(4);
        let rule = DateConstraint::none().with_disabled(DisabledDates::predicate(|day| {
            day == NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
        }));
        let today = DatePickerAction::Today(date(2024, 6, 15));
        let effects = reduce_date_picker(&mut state, &rule, today);
        assert!(effects.is_empty());
        assert!(state.is_open());
        assert_eq!(state.view(), MonthView::new(2024, 6).expect("month"));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn inline_picker_never_opens_or_closes() {
        let mut state = DatePickerState::new(PickerVariant::Inline, None, date(2024, 6, 15));
        let rule = DateConstraint::none();
        assert!(reduce_date_picker(&mut state, &rule, DatePickerAction::TriggerClick).is_empty());
        assert!(state.is_calendar_visible());

        let effects =
            reduce_date_picker(&mut state, &rule, DatePickerAction::SelectDay(date(2024, 6, 3)));
        assert_eq!(effects, vec![DatePickerEffect::Changed(Some(date(2024, 6, 3)))]);
        assert!(state.is_calendar_visible());
    }

    #[test]
    fn clear_reports_none_only_with_a_value() {
        let rule = DateConstraint::none();
        let mut empty = DatePickerState::new(PickerVariant::Dropdown, None, date(2024, 6, 15));
        assert!(!empty.shows_clear());
        assert!(reduce_date_picker(&mut empty, &rule, DatePickerAction::Clear).is_empty());

        let initial = Some(Some(date(2024, 6, 1)));
        let mut state = DatePickerState::new(PickerVariant::Dropdown, initial, date(2024, 6, 15));
        assert!(state.shows_clear());
        assert_eq!(
            reduce_date_picker(&mut state, &rule, DatePickerAction::Clear),
            vec![DatePickerEffect::Changed(None)]
        );

        state.set_disabled(true);
        assert!(!state.shows_clear());
        assert!(reduce_date_picker(&mut state, &rule, DatePickerAction::Clear).is_empty());
    }

    #[test]
    fn non_clearable_picker_hides_clear() {
        let state = DatePickerState::new(
            PickerVariant::Dropdown,
            Some(Some(date(2024, 6, 1))),
            date(2024, 6, 15),
        )
        .with_clearable(false);
        assert!(!state.shows_clear());
    }

    #[test]
    fn external_value_change_resyncs_view() {
        let mut state =
            DatePickerState::new(PickerVariant::Inline, Some(None), date(2024, 6, 15));
        reduce_date_picker(
            &mut state,
            &DateConstraint::none(),
            DatePickerAction::SyncValue(Some(date(2025, 2, 14))),
        );
        assert_eq!(state.view(), MonthView::new(2025, 2).expect("month"));
        assert_eq!(state.selected(), Some(date(2025, 2, 14)));
    }

    #[test]
    fn month_navigation_moves_one_month() {
        let mut state = opened(None);
        let rule = DateConstraint::none();
        reduce_date_picker(&mut state, &rule, DatePickerAction::NextMonth);
        reduce_date_picker(&mut state, &rule, DatePickerAction::NextMonth);
        assert_eq!(state.view(), MonthView::new(2024, 8).expect("month"));
        reduce_date_picker(&mut state, &rule, DatePickerAction::PreviousMonth);
        assert_eq!(state.view(), MonthView::new(2024, 7).expect("month"));
    }

    #[test]
    fn picker_value_distinguishes_cleared_from_unset() {
        let field = PickerValue::default();
        assert_eq!(field, PickerValue::Unset);
        let set = field.apply(Some(date(2024, 6, 20)));
        assert_eq!(set.date(), Some(date(2024, 6, 20)));
        let cleared = set.apply(None);
        assert!(cleared.is_cleared());
        assert_ne!(cleared, PickerValue::Unset);
    }
}
