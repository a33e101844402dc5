//! Local calendar date for "today" markers and the Today shortcut.

use chrono::NaiveDate;

/// Returns the viewer's local date.
///
/// In the browser the date comes from `js_sys::Date`, which reflects the user's time zone. Native
/// builds (tests, tooling) use `chrono::Local`.
pub fn today() -> NaiveDate {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
        )
        .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    #[test]
    fn today_is_a_plausible_calendar_date() {
        let date = today();
        assert!(date.year() >= 2024);
    }
}
