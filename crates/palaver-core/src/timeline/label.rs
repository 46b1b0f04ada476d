//! Date divider labels.

use chrono::NaiveDate;

/// How many days back a date is still labelled by its weekday name.
const WEEKDAY_WINDOW_DAYS: i64 = 7;

/// Formats the divider label for a date bucket.
///
/// Pure in `(date, today)`:
/// - today → `"Today"`
/// - within the past seven days → weekday name (`"Monday"`, ...)
/// - anything else, future dates included → `"Mar 5, 2024"` style
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }

    let days_ago = (today - date).num_days();
    if (1..=WEEKDAY_WINDOW_DAYS).contains(&days_ago) {
        return date.format("%A").to_string();
    }

    date.format("%b %-d, %Y").to_string()
}
