//! Locale-aware date display.
//!
//! Formatting only affects presentation; stored values are always [`NaiveDate`]s.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::{MonthView, WeekStart};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale `{0}`")]
/// Returned for locale tags without a translation table.
pub struct LocaleError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown date format `{0}` (expected short, medium, or long)")]
/// Returned for unrecognized [`DateFormat`] tokens.
pub struct FormatError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Display locale.
pub enum Locale {
    /// Mexican Spanish.
    #[default]
    #[serde(rename = "es-MX")]
    EsMx,
    /// US English.
    #[serde(rename = "en-US")]
    EnUs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Display verbosity.
pub enum DateFormat {
    /// Numeric day/month/year.
    Short,
    /// Abbreviated month name.
    #[default]
    Medium,
    /// Full month name.
    Long,
}

const ES_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];
const ES_MONTHS_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];
const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
// Sunday-first.
const ES_WEEKDAYS: [&str; 7] = ["Do", "Lu", "Ma", "Mi", "Ju", "Vi", "Sá"];
const EN_WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

impl Locale {
    /// BCP-47 tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::EsMx => "es-MX",
            Self::EnUs => "en-US",
        }
    }

    fn month_name(self, month: u32) -> &'static str {
        let index = month.saturating_sub(1) as usize % 12;
        match self {
            Self::EsMx => ES_MONTHS[index],
            Self::EnUs => EN_MONTHS[index],
        }
    }

    fn month_abbreviation(self, month: u32) -> &'static str {
        let index = month.saturating_sub(1) as usize % 12;
        match self {
            Self::EsMx => ES_MONTHS_SHORT[index],
            Self::EnUs => EN_MONTHS_SHORT[index],
        }
    }

    /// Fixed UI strings for the date picker.
    pub fn picker_labels(self) -> PickerLabels {
        match self {
            Self::EsMx => PickerLabels {
                placeholder: "Seleccionar fecha",
                today: "Hoy",
                clear: "Limpiar",
                previous_month: "Mes anterior",
                next_month: "Mes siguiente",
            },
            Self::EnUs => PickerLabels {
                placeholder: "Select date",
                today: "Today",
                clear: "Clear",
                previous_month: "Previous month",
                next_month: "Next month",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "es-mx" | "es" => Ok(Self::EsMx),
            "en-us" | "en" => Ok(Self::EnUs),
            _ => Err(LocaleError(raw.to_string())),
        }
    }
}

impl DateFormat {
    /// Stable token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl FromStr for DateFormat {
    type Err = FormatError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            _ => Err(FormatError(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Localized strings used by the date picker chrome.
pub struct PickerLabels {
    /// Trigger text when no date is selected.
    pub placeholder: &'static str,
    /// Jump-to-today shortcut.
    pub today: &'static str,
    /// Clear control.
    pub clear: &'static str,
    /// Previous-month button label.
    pub previous_month: &'static str,
    /// Next-month button label.
    pub next_month: &'static str,
}

/// Renders `date` for display.
pub fn format_date(date: NaiveDate, format: DateFormat, locale: Locale) -> String {
    let (day, month, year) = (date.day(), date.month(), date.year());
    match (locale, format) {
        (Locale::EsMx, DateFormat::Short) => format!("{day:02}/{month:02}/{year}"),
        (Locale::EsMx, DateFormat::Medium) => {
            format!("{day} {} {year}", locale.month_abbreviation(month))
        }
        (Locale::EsMx, DateFormat::Long) => {
            format!("{day} de {} de {year}", locale.month_name(month))
        }
        (Locale::EnUs, DateFormat::Short) => format!("{month:02}/{day:02}/{year}"),
        (Locale::EnUs, DateFormat::Medium) => {
            format!("{} {day}, {year}", locale.month_abbreviation(month))
        }
        (Locale::EnUs, DateFormat::Long) => format!("{} {day}, {year}", locale.month_name(month)),
    }
}

/// Calendar header, e.g. `junio 2024`.
pub fn month_title(view: MonthView, locale: Locale) -> String {
    format!("{} {}", locale.month_name(view.month()), view.year())
}

/// Column headers in grid order.
pub fn weekday_labels(locale: Locale, week_start: WeekStart) -> [&'static str; 7] {
    let names = match locale {
        Locale::EsMx => ES_WEEKDAYS,
        Locale::EnUs => EN_WEEKDAYS,
    };
    let offset = match week_start {
        WeekStart::Sunday => 0,
        WeekStart::Monday => 1,
    };
    std::array::from_fn(|column| names[(column + offset) % 7])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn formats_spanish_dates() {
        let day = date(2024, 6, 5);
        assert_eq!(format_date(day, DateFormat::Short, Locale::EsMx), "05/06/2024");
        assert_eq!(format_date(day, DateFormat::Medium, Locale::EsMx), "5 jun 2024");
        assert_eq!(
            format_date(day, DateFormat::Long, Locale::EsMx),
            "5 de junio de 2024"
        );
    }

    #[test]
    fn formats_english_dates() {
        let day = date(2024, 12, 25);
        assert_eq!(format_date(day, DateFormat::Short, Locale::EnUs), "12/25/2024");
        assert_eq!(format_date(day, DateFormat::Medium, Locale::EnUs), "Dec 25, 2024");
        assert_eq!(
            format_date(day, DateFormat::Long, Locale::EnUs),
            "December 25, 2024"
        );
    }

    #[test]
    fn parses_locale_tags() {
        assert_eq!("es-MX".parse::<Locale>(), Ok(Locale::EsMx));
        assert_eq!("en_us".parse::<Locale>(), Ok(Locale::EnUs));
        assert_eq!(
            "fr-FR".parse::<Locale>(),
            Err(LocaleError("fr-FR".to_string()))
        );
        assert_eq!(Locale::default(), Locale::EsMx);
    }

    #[test]
    fn parses_format_tokens() {
        assert_eq!("long".parse::<DateFormat>(), Ok(DateFormat::Long));
        assert!("full".parse::<DateFormat>().is_err());
    }

    #[test]
    fn weekday_headers_rotate_with_week_start() {
        assert_eq!(weekday_labels(Locale::EsMx, WeekStart::Sunday)[0], "Do");
        assert_eq!(weekday_labels(Locale::EsMx, WeekStart::Monday)[0], "Lu");
        assert_eq!(weekday_labels(Locale::EnUs, WeekStart::Monday)[6], "Su");
    }

    #[test]
    fn month_titles_are_localized() {
        let view = MonthView::new(2024, 6).expect("month");
        assert_eq!(month_title(view, Locale::EsMx), "junio 2024");
        assert_eq!(month_title(view, Locale::EnUs), "June 2024");
    }
}
