//! Timestamp display formatting
//!
//! Renders the "Today @ 2:05:00 pm" prefix of the status line and extends
//! chrono's strftime with the unpadded codes found on BSD/GNU platforms.

use chrono::{DateTime, Duration, Local};

use crate::config::Settings;

/// strftime with three extra format codes on top of chrono's set:
///    %e   Day of the month (range 1 to 31) without a leading 0
///    %l   Hour (12-hour clock: range 1 to 12) without a leading 0
///    %P   Lowercase "am" or "pm"
///
/// The extensions are substituted into the template as literal text before
/// the remaining codes are formatted; chrono's own %e and %l are
/// space-padded, and %P never reaches chrono at all. Literal "%e", "%l" or
/// "%P" sequences in the template get the same substitution (there is no
/// escape).
pub(crate) fn extended_strftime(dt: &DateTime<Local>, template: &str) -> String {
    let day = dt.format("%d").to_string();
    let hour = dt.format("%I").to_string();
    let ampm = dt.format("%p").to_string().to_lowercase();

    let template = template
        .replace("%e", day.trim_start_matches('0'))
        .replace("%l", hour.trim_start_matches('0'))
        .replace("%P", &ampm);

    dt.format(&template).to_string()
}

/// Render a modification timestamp as `<date> @ <time>`, collapsing the date
/// to the configured "Today"/"Yesterday" label where it applies.
pub(crate) fn format_datetime(dt: &DateTime<Local>, settings: &Settings) -> String {
    format_datetime_at(dt, &Local::now(), settings)
}

/// Core of [`format_datetime`] with the reference instant passed in.
///
/// The current and previous day (now minus 24 hours) are formatted with the
/// same date template, and the first occurrence of each in the target's date
/// string is swapped for its label. Matching is textual, not calendar-aware:
/// a template that formats two different dates to the same text will match
/// both.
pub(crate) fn format_datetime_at(
    dt: &DateTime<Local>,
    now: &DateTime<Local>,
    settings: &Settings,
) -> String {
    let today = extended_strftime(now, &settings.date_format_string);
    let yesterday = extended_strftime(&(*now - Duration::days(1)), &settings.date_format_string);

    let date = extended_strftime(dt, &settings.date_format_string)
        .replacen(&today, &settings.today, 1)
        .replacen(&yesterday, &settings.yesterday, 1);

    let time = extended_strftime(dt, &settings.time_format_string);

    format!("{date} @ {time}")
}
