//! Month-grid generation for the calendar.
//!
//! A grid is always 6 rows × 7 columns: the trailing days of the previous month up to the
//! first weekday, every day of the viewed month, then leading days of the next month until 42
//! cells are filled.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::constraint::DateConstraint;

/// Number of cells in every month grid.
pub const GRID_CELLS: usize = 42;
/// Number of columns (days per week).
pub const GRID_COLUMNS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// First column of the grid.
pub enum WeekStart {
    /// Sunday-first weeks.
    #[default]
    Sunday,
    /// Monday-first weeks.
    Monday,
}

impl WeekStart {
    /// Weekday shown in the first column.
    pub fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    fn leading_cells(self, first: NaiveDate) -> u64 {
        let weekday = first.weekday();
        u64::from(match self {
            Self::Sunday => weekday.num_days_from_sunday(),
            Self::Monday => weekday.num_days_from_monday(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// The month a calendar is displaying, stored as its first day.
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    /// View of the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// View of `year`/`month`, or `None` for an invalid month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// First day of the viewed month.
    pub fn first_day(self) -> NaiveDate {
        self.first
    }

    /// Calendar year.
    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// Calendar month, 1-based.
    pub fn month(self) -> u32 {
        self.first.month()
    }

    /// Whether `date` falls inside the viewed month.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Shifts the view by `months`, carrying across year boundaries.
    ///
    /// Saturates at the bounds of the representable date range.
    pub fn shift(self, months: i32) -> Self {
        let magnitude = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.first.checked_add_months(magnitude)
        } else {
            self.first.checked_sub_months(magnitude)
        };
        shifted.map_or(self, |first| Self { first })
    }

    /// The following month.
    pub fn next(self) -> Self {
        self.shift(1)
    }

    /// The preceding month.
    pub fn previous(self) -> Self {
        self.shift(-1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One day cell in a month grid.
pub struct DayCell {
    /// Calendar date shown in the cell.
    pub date: NaiveDate,
    /// Belongs to the viewed month (as opposed to padding from a neighbour).
    pub is_current_month: bool,
    /// Matches the real current date.
    pub is_today: bool,
    /// Matches the selected date exactly.
    pub is_selected: bool,
    /// Fails the date constraint.
    pub is_disabled: bool,
}

impl DayCell {
    /// Day-of-month label.
    pub fn label(&self) -> u32 {
        self.date.day()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The 42 cells of one month.
pub struct MonthGrid {
    /// Month the grid was generated for.
    pub view: MonthView,
    /// Cells in row-major order.
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Cells grouped into weeks.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    /// Cell for `date`, when visible.
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }
}

/// Builds the grid for `view`.
///
/// `today` is passed in rather than read from a clock so the grid stays deterministic.
pub fn month_grid(
    view: MonthView,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    constraint: &DateConstraint,
    week_start: WeekStart,
) -> MonthGrid {
    let first = view.first_day();
    let start = first
        .checked_sub_days(Days::new(week_start.leading_cells(first)))
        .unwrap_or(first);
    let cells = start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| DayCell {
            date,
            is_current_month: view.contains(date),
            is_today: date == today,
            is_selected: selected == Some(date),
            is_disabled: constraint.is_disabled(date),
        })
        .collect();
    MonthGrid { view, cells }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn june_2024_starts_on_saturday() {
        let view = MonthView::new(2024, 6).expect("month");
        let grid = month_grid(
            view,
            date(2024, 6, 15),
            Some(date(2024, 6, 20)),
            &DateConstraint::none(),
            WeekStart::Sunday,
        );

        assert_eq!(grid.cells.len(), GRID_CELLS);
        assert_eq!(grid.cells[0].date, date(2024, 5, 26));
        assert!(grid.cells[..6].iter().all(|cell| !cell.is_current_month));
        assert_eq!(grid.cells[6].date, date(2024, 6, 1));
        assert_eq!(grid.cells[41].date, date(2024, 7, 6));

        let today = grid.cell(date(2024, 6, 15)).expect("today visible");
        assert!(today.is_today);
        assert!(!today.is_selected);
        assert!(grid.cell(date(2024, 6, 20)).expect("selected").is_selected);
        assert_eq!(grid.cells.iter().filter(|cell| cell.is_selected).count(), 1);
    }

    #[test]
    fn monday_start_shifts_leading_cells() {
        let view = MonthView::new(2024, 9).expect("month");
        let grid = month_grid(
            view,
            date(2024, 9, 1),
            None,
            &DateConstraint::none(),
            WeekStart::Monday,
        );
        assert_eq!(grid.cells[0].date, date(2024, 8, 26));
        assert_eq!(grid.cells[6].date, date(2024, 9, 1));
    }

    #[test]
    fn month_starting_on_week_start_has_no_leading_padding() {
        let view = MonthView::new(2023, 10).expect("month");
        let grid = month_grid(
            view,
            date(2023, 10, 1),
            None,
            &DateConstraint::none(),
            WeekStart::Sunday,
        );
        assert_eq!(grid.cells[0].date, date(2023, 10, 1));
        assert!(grid.cells[0].is_current_month);
    }

    #[test]
    fn disabled_flags_follow_constraint() {
        let view = MonthView::new(2024, 6).expect("month");
        let rule = DateConstraint::none().with_min(date(2024, 6, 10));
        let grid = month_grid(view, date(2024, 6, 15), None, &rule, WeekStart::Sunday);
        assert!(grid.cell(date(2024, 6, 5)).expect("cell").is_disabled);
        assert!(!grid.cell(date(2024, 6, 10)).expect("cell").is_disabled);
    }

    #[test]
    fn navigation_rolls_over_years() {
        let december = MonthView::new(2024, 12).expect("month");
        assert_eq!(december.next(), MonthView::new(2025, 1).expect("month"));
        assert_eq!(
            MonthView::new(2024, 1).expect("month").previous(),
            MonthView::new(2023, 12).expect("month")
        );
        assert_eq!(
            MonthView::containing(date(2024, 3, 31)).shift(-13),
            MonthView::new(2023, 2).expect("month")
        );
    }

    #[test]
    fn weeks_chunk_into_six_rows() {
        let grid = month_grid(
            MonthView::new(2015, 2).expect("month"),
            date(2015, 2, 1),
            None,
            &DateConstraint::none(),
            WeekStart::Sunday,
        );
        assert_eq!(grid.weeks().count(), 6);
        assert!(grid.weeks().all(|week| week.len() == GRID_COLUMNS));
    }

    proptest! {
        #[test]
        fn every_grid_has_42_consecutive_cells(
            year in 1900i32..2200,
            month in 1u32..=12,
            monday in any::<bool>(),
        ) {
            let view = MonthView::new(year, month).expect("month");
            let week_start = if monday { WeekStart::Monday } else { WeekStart::Sunday };
            let rule = DateConstraint::none();
            let grid = month_grid(view, view.first_day(), None, &rule, week_start);

            prop_assert_eq!(grid.cells.len(), GRID_CELLS);
            prop_assert_eq!(grid.cells[0].date.weekday(), week_start.weekday());
            for pair in grid.cells.windows(2) {
                prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
            }
            let in_month = grid.cells.iter().filter(|cell| cell.is_current_month).count();
            let days = view.next().first_day().signed_duration_since(view.first_day()).num_days();
            prop_assert_eq!(in_month as i64, days);
        }
    }
}
