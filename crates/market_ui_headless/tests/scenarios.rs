//! End-to-end interaction scenarios driven purely through the headless reducers.

use chrono::NaiveDate;
use market_ui_headless::{
    month_grid, reduce_date_picker, reduce_dropdown, sorted_indices, DateConstraint,
    DatePickerAction, DatePickerEffect, DatePickerState, DisabledDates, DropdownAction,
    DropdownEffect, DropdownItem, DropdownState, PickerValue, PickerVariant, SelectionSet,
    SortState, SortStrategy, SortValue, WeekStart,
};
use pretty_assertions::assert_eq;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn date_picker_respects_min_date_with_fixed_today() {
    let today = date(2024, 6, 15);
    let rule = DateConstraint::none().with_min(date(2024, 6, 10));
    let mut field = PickerValue::Unset;
    let mut state = DatePickerState::new(PickerVariant::Dropdown, None, today);

    assert_eq!(
        reduce_date_picker(&mut state, &rule, DatePickerAction::TriggerClick),
        vec![DatePickerEffect::Opened]
    );

    let grid = month_grid(state.view(), today, state.selected(), &rule, WeekStart::Sunday);
    let five = grid
        .cells
        .iter()
        .find(|cell| cell.label() == 5)
        .expect("cell labeled 5");
    assert!(five.is_disabled);

    let effects = reduce_date_picker(&mut state, &rule, DatePickerAction::SelectDay(five.date));
    assert!(effects.is_empty());
    assert!(state.is_open());
    assert_eq!(field, PickerValue::Unset);

    let twenty = grid
        .cells
        .iter()
        .find(|cell| cell.label() == 20 && cell.is_current_month)
        .expect("cell labeled 20");
    for effect in reduce_date_picker(&mut state, &rule, DatePickerAction::SelectDay(twenty.date)) {
        if let DatePickerEffect::Changed(change) = effect {
            field = field.apply(change);
        }
    }
    assert_eq!(field, PickerValue::Date(date(2024, 6, 20)));
    assert!(!state.is_open());
}

#[test]
fn today_shortcut_is_idempotent_for_allowed_and_disabled_today() {
    let today = date(2024, 6, 15);
    let allowed = DateConstraint::none()
        .with_min(date(2024, 6, 1))
        .with_max(date(2024, 6, 30));
    let blocked = DateConstraint::none().with_disabled(DisabledDates::List(vec![today]));

    for _ in 0..3 {
        let mut state = DatePickerState::new(PickerVariant::Dropdown, None, today);
        reduce_date_picker(&mut state, &allowed, DatePickerAction::TriggerClick);
        assert_eq!(
            reduce_date_picker(&mut state, &allowed, DatePickerAction::Today(today)),
            vec![DatePickerEffect::Changed(Some(today)), DatePickerEffect::Closed]
        );

        let mut state = DatePickerState::new(PickerVariant::Dropdown, None, today);
        reduce_date_picker(&mut state, &blocked, DatePickerAction::TriggerClick);
        let effects = reduce_date_picker(&mut state, &blocked, DatePickerAction::Today(today));
        assert!(effects.is_empty());
        assert!(state.is_open());
    }
}

#[test]
fn clearing_a_value_is_distinct_from_never_setting_it() {
    let today = date(2024, 6, 15);
    let rule = DateConstraint::none();
    let mut field = PickerValue::Unset;
    let mut state = DatePickerState::new(PickerVariant::Inline, Some(None), today);

    for effect in reduce_date_picker(&mut state, &rule, DatePickerAction::SelectDay(today)) {
        if let DatePickerEffect::Changed(change) = effect {
            field = field.apply(change);
            reduce_date_picker(&mut state, &rule, DatePickerAction::SyncValue(change));
        }
    }
    assert_eq!(field, PickerValue::Date(today));

    assert_eq!(
        reduce_date_picker(&mut state, &rule, DatePickerAction::Clear),
        vec![DatePickerEffect::Changed(None)]
    );
    field = field.apply(None);
    assert_eq!(field, PickerValue::Cleared);
    assert_ne!(field, PickerValue::Unset);
}

#[derive(Debug)]
struct Member {
    id: u32,
    age: u32,
}

#[test]
fn table_age_sort_cycles_back_to_input_order() {
    let rows = vec![
        Member { id: 1, age: 30 },
        Member { id: 2, age: 25 },
        Member { id: 3, age: 35 },
    ];
    let ages = |sort: &SortState| -> Vec<u32> {
        sorted_indices(&rows, sort, SortStrategy::Local, |row, _| SortValue::from(row.age))
            .into_iter()
            .map(|index| rows[index].age)
            .collect()
    };

    let mut selection = SelectionSet::new();
    selection.toggle(rows[0].id);

    let sort = SortState::unsorted().activate("age");
    assert_eq!(ages(&sort), vec![25, 30, 35]);
    let sort = sort.activate("age");
    assert_eq!(ages(&sort), vec![35, 30, 25]);
    let sort = sort.activate("age");
    assert_eq!(ages(&sort), vec![30, 25, 35]);
    assert_eq!(sort, SortState::unsorted());

    assert!(selection.contains(&1));
}

#[test]
fn every_enabled_item_selection_reports_exactly_once() {
    let items = vec![
        DropdownItem::new(10u32, "Bordado"),
        DropdownItem::new(20, "Cerámica").disabled(),
        DropdownItem::new(30, "Textil"),
    ];

    for (index, item) in items.iter().enumerate() {
        let mut state = DropdownState::new(None, None, None);
        reduce_dropdown(&mut state, &items, DropdownAction::TriggerClick);
        let effects = reduce_dropdown(&mut state, &items, DropdownAction::ItemClick(index));
        let reported: Vec<u32> = effects
            .iter()
            .filter_map(|effect| match effect {
                DropdownEffect::SelectionChanged(value) => Some(*value),
                _ => None,
            })
            .collect();

        if item.disabled {
            assert!(reported.is_empty());
            assert!(state.is_open());
        } else {
            assert_eq!(reported, vec![item.value]);
            assert!(!state.is_open());
        }
    }
}
