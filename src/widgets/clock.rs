//! Status bar clock and date widget formatting. Pure local-time computation,
//! no network access.

use chrono::{DateTime, Local};

/// `HH:MM`, zero-padded, 24-hour.
pub fn clock_label(now: &DateTime<Local>) -> String {
    now.format("%H:%M").to_string()
}

/// Long-form date shown on the widget card, e.g. `Sunday, Aug 31`.
pub fn date_label(now: &DateTime<Local>) -> String {
    now.format("%A, %b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn clock_is_zero_padded_twenty_four_hour() {
        assert_eq!(clock_label(&at(2026, 8, 31, 9, 5)), "09:05");
        assert_eq!(clock_label(&at(2026, 8, 31, 23, 59)), "23:59");
        assert_eq!(clock_label(&at(2026, 8, 31, 0, 0)), "00:00");
    }

    #[test]
    fn date_spells_weekday_and_short_month() {
        assert_eq!(date_label(&at(2026, 8, 31, 12, 0)), "Monday, Aug 31");
        assert_eq!(date_label(&at(2026, 3, 1, 12, 0)), "Sunday, Mar 1");
    }
}
