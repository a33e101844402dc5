//! Date selectability rules.

use std::fmt;
use std::rc::Rc;

use chrono::NaiveDate;

/// Explicitly disabled dates: none, a fixed list, or a caller predicate.
#[derive(Clone, Default)]
pub enum DisabledDates {
    /// Every date passes this check.
    #[default]
    None,
    /// Exact dates that cannot be chosen.
    List(Vec<NaiveDate>),
    /// Returns `true` for dates that cannot be chosen.
    Predicate(Rc<dyn Fn(NaiveDate) -> bool>),
}

impl DisabledDates {
    /// Wraps a predicate.
    pub fn predicate(predicate: impl Fn(NaiveDate) -> bool + 'static) -> Self {
        Self::Predicate(Rc::new(predicate))
    }

    /// Whether `date` is explicitly disabled.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::None => false,
            Self::List(dates) => dates.contains(&date),
            Self::Predicate(predicate) => predicate(date),
        }
    }
}

impl fmt::Debug for DisabledDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::List(dates) => f.debug_tuple("List").field(dates).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<Vec<NaiveDate>> for DisabledDates {
    fn from(dates: Vec<NaiveDate>) -> Self {
        Self::List(dates)
    }
}

/// Combined min/max/disabled rule. A date is selectable only when it passes all three.
#[derive(Clone, Debug, Default)]
pub struct DateConstraint {
    /// Earliest selectable date, inclusive.
    pub min: Option<NaiveDate>,
    /// Latest selectable date, inclusive.
    pub max: Option<NaiveDate>,
    /// Explicitly disabled dates.
    pub disabled: DisabledDates,
}

impl DateConstraint {
    /// An unconstrained rule.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the inclusive lower bound.
    pub fn with_min(mut self, min: NaiveDate) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    pub fn with_max(mut self, max: NaiveDate) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets the disabled-date rule.
    pub fn with_disabled(mut self, disabled: impl Into<DisabledDates>) -> Self {
        self.disabled = disabled.into();
        self
    }

    /// Whether `date` fails any of the three checks.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        !self.is_selectable(date)
    }

    /// Whether `date` is at or after `min`, at or before `max`, and not explicitly disabled.
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        let after_min = self.min.map_or(true, |min| date >= min);
        let before_max = self.max.map_or(true, |max| date <= max);
        after_min && before_max && !self.disabled.contains(date)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Weekday};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn bounds_are_inclusive() {
        let rule = DateConstraint::none()
            .with_min(date(2024, 6, 10))
            .with_max(date(2024, 6, 20));
        assert!(rule.is_selectable(date(2024, 6, 10)));
        assert!(rule.is_selectable(date(2024, 6, 20)));
        assert!(rule.is_disabled(date(2024, 6, 9)));
        assert!(rule.is_disabled(date(2024, 6, 21)));
    }

    #[test]
    fn all_checks_must_pass() {
        let rule = DateConstraint::none()
            .with_min(date(2024, 6, 1))
            .with_disabled(vec![date(2024, 6, 12)]);
        assert!(rule.is_disabled(date(2024, 6, 12)));
        assert!(rule.is_disabled(date(2024, 5, 31)));
        assert!(rule.is_selectable(date(2024, 6, 13)));
    }

    #[test]
    fn predicate_disables_weekends() {
        let rule = DateConstraint::none().with_disabled(DisabledDates::predicate(|day| {
            matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
        }));
        assert!(rule.is_disabled(date(2024, 6, 15)));
        assert!(rule.is_selectable(date(2024, 6, 14)));
    }
}
